//! Named signer profiles backed by the descriptor table

use super::constants::{OTHER_KEY, RESUKISU_KEY, SHIRKNEKO_KEY};
use super::key::ApkSignKey;
use crate::exceptions::ManagerSignError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Known signer identities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignerProfile {
    ShirkNeko,
    ReSukiSU,
    /// Placeholder resolved from the dynamic sign configuration
    Other,
}

impl SignerProfile {
    pub const ALL: [SignerProfile; 3] = [
        SignerProfile::ShirkNeko,
        SignerProfile::ReSukiSU,
        SignerProfile::Other,
    ];

    /// Compile-time descriptor for this profile
    pub fn key(self) -> ApkSignKey {
        match self {
            SignerProfile::ShirkNeko => SHIRKNEKO_KEY,
            SignerProfile::ReSukiSU => RESUKISU_KEY,
            SignerProfile::Other => OTHER_KEY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SignerProfile::ShirkNeko => "ShirkNeko/SukiSU",
            SignerProfile::ReSukiSU => "ReSukiSU/ReSukiSU",
            SignerProfile::Other => "Dynamic Sign",
        }
    }

    pub fn is_dynamic(self) -> bool {
        matches!(self, SignerProfile::Other)
    }
}

impl fmt::Display for SignerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignerProfile {
    type Err = ManagerSignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shirkneko" | "sukisu" => Ok(SignerProfile::ShirkNeko),
            "resukisu" => Ok(SignerProfile::ReSukiSU),
            "other" | "dynamic" => Ok(SignerProfile::Other),
            other => Err(ManagerSignError::Generic(format!(
                "Unknown signer profile: {other}"
            ))),
        }
    }
}
