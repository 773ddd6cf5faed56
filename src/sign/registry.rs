//! Lookup of observed fingerprints against the known signer profiles

use super::dynamic::DynamicSignConfig;
use super::fingerprint::Fingerprint;
use super::profiles::SignerProfile;
use crate::exceptions::{ManagerSignError, Result};
use log::{debug, trace};

/// Known profiles plus the optional dynamic replacement for `Other`
#[derive(Debug, Clone, Default)]
pub struct KeyRegistry {
    dynamic: Option<Fingerprint>,
}

/// Resolved expected fingerprint for one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub profile: SignerProfile,
    pub size: u32,
    pub sha256: String,
    /// False for the placeholder when no dynamic config is loaded
    pub active: bool,
}

impl KeyRegistry {
    /// Compile-time profiles only; `Other` stays a placeholder
    pub fn builtin() -> Self {
        KeyRegistry::default()
    }

    pub fn with_dynamic(mut self, config: &DynamicSignConfig) -> Result<Self> {
        let fingerprint = config.fingerprint()?;
        debug!("Dynamic sign enabled: {fingerprint}");
        self.dynamic = Some(fingerprint);
        Ok(self)
    }

    pub fn is_dynamic_enabled(&self) -> bool {
        self.dynamic.is_some()
    }

    /// Which known signer produced this fingerprint, if any
    pub fn identify(&self, observed: &Fingerprint) -> Option<SignerProfile> {
        trace!("Identifying {observed}");
        for profile in SignerProfile::ALL {
            let matched = if profile.is_dynamic() {
                self.dynamic
                    .as_ref()
                    .is_some_and(|dynamic| dynamic.matches(observed.size, &observed.sha256))
            } else {
                profile.key().matches(observed.size, &observed.sha256)
            };
            if matched {
                debug!("Fingerprint matched profile {profile}");
                return Some(profile);
            }
        }
        debug!("Fingerprint matched no known profile");
        None
    }

    /// Like `identify`, but a miss is an error
    pub fn require(&self, observed: &Fingerprint) -> Result<SignerProfile> {
        self.identify(observed)
            .ok_or_else(|| ManagerSignError::NoMatch(observed.to_string()))
    }

    pub fn entries(&self) -> Vec<RegistryEntry> {
        SignerProfile::ALL
            .iter()
            .map(|&profile| match (&self.dynamic, profile.is_dynamic()) {
                (Some(dynamic), true) => RegistryEntry {
                    profile,
                    size: dynamic.size,
                    sha256: dynamic.sha256.clone(),
                    active: true,
                },
                _ => {
                    let key = profile.key();
                    RegistryEntry {
                        profile,
                        size: key.size,
                        sha256: key.sha256.to_string(),
                        active: !key.is_placeholder(),
                    }
                }
            })
            .collect()
    }
}
