//! Dynamic sign configuration.
//!
//! The `Other` profile ships with a zeroed placeholder. A manager signed with
//! its own key supplies the real size and digest at runtime, either from a
//! JSON file:
//!
//! ```json
//! { "size": 860, "hash": "947ae944..." }
//! ```
//!
//! or from `MANAGER_SIGN_DYNAMIC_SIZE` / `MANAGER_SIGN_DYNAMIC_HASH`.

use super::checksums::normalize_sha256;
use super::fingerprint::Fingerprint;
use crate::exceptions::{ManagerSignError, Result};
use crate::utils::parse_size;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const DYNAMIC_SIZE_ENV: &str = "MANAGER_SIGN_DYNAMIC_SIZE";
pub const DYNAMIC_HASH_ENV: &str = "MANAGER_SIGN_DYNAMIC_HASH";

/// Runtime replacement for the placeholder descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicSignConfig {
    pub size: u32,
    pub hash: String,
}

impl DynamicSignConfig {
    pub fn new(size: u32, hash: impl Into<String>) -> Self {
        DynamicSignConfig {
            size,
            hash: hash.into(),
        }
    }

    /// Non-zero size and a real 64 character hex digest. The hash may carry
    /// a `sha256:` prefix, as everywhere else a digest is accepted.
    pub fn is_valid(&self) -> bool {
        self.size > 0
            && normalize_sha256(&self.hash).is_ok_and(|hash| !hash.bytes().all(|b| b == b'0'))
    }

    /// Rewrite the hash into bare lowercase hex when it parses; malformed
    /// values are kept so `is_valid` can report them.
    fn canonicalize(mut self) -> Self {
        if let Ok(hash) = normalize_sha256(&self.hash) {
            self.hash = hash;
        }
        self
    }

    /// Fingerprint the placeholder profile resolves to
    pub fn fingerprint(&self) -> Result<Fingerprint> {
        if !self.is_valid() {
            return Err(ManagerSignError::DynamicConfig(format!(
                "invalid size/hash pair: size={} hash={:?}",
                self.size, self.hash
            )));
        }
        Fingerprint::new(self.size, &self.hash)
    }

    /// Read a JSON config file
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading dynamic sign config: {path:?}");
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str::<DynamicSignConfig>(&data)?.canonicalize();
        debug!(
            "Dynamic sign config: size=0x{:x} valid={}",
            config.size,
            config.is_valid()
        );
        Ok(config)
    }

    pub fn from_env() -> Result<Option<Self>> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Both variables unset yields
    /// `None`; only one set is an error.
    pub fn from_env_with<F>(lookup: F) -> Result<Option<Self>>
    where
        F: Fn(&str) -> Option<String>,
    {
        match (lookup(DYNAMIC_SIZE_ENV), lookup(DYNAMIC_HASH_ENV)) {
            (None, None) => Ok(None),
            (Some(size), Some(hash)) => {
                let size = parse_size(&size)?;
                debug!("Dynamic sign config from environment: size=0x{size:x}");
                Ok(Some(DynamicSignConfig::new(size, hash.trim()).canonicalize()))
            }
            (Some(_), None) => Err(ManagerSignError::DynamicConfig(format!(
                "{DYNAMIC_SIZE_ENV} is set but {DYNAMIC_HASH_ENV} is not"
            ))),
            (None, Some(_)) => Err(ManagerSignError::DynamicConfig(format!(
                "{DYNAMIC_HASH_ENV} is set but {DYNAMIC_SIZE_ENV} is not"
            ))),
        }
    }
}
