//! Observed fingerprint of a signer blob

use super::checksums::{calculate_sha256, normalize_sha256, sha256_hex};
use crate::exceptions::{ManagerSignError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Size and digest computed from an actual signer blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    pub size: u32,
    pub sha256: String,
}

impl Fingerprint {
    /// Build from an externally computed pair, normalizing the digest
    pub fn new(size: u32, sha256: &str) -> Result<Self> {
        Ok(Fingerprint {
            size,
            sha256: normalize_sha256(sha256)?,
        })
    }

    pub fn of_bytes(data: &[u8]) -> Result<Self> {
        let size = blob_size(data.len() as u64)?;
        Ok(Fingerprint {
            size,
            sha256: sha256_hex(data),
        })
    }

    pub fn of_reader<R: Read>(reader: R) -> Result<Self> {
        let (len, sha256) = calculate_sha256(reader)?;
        Ok(Fingerprint {
            size: blob_size(len)?,
            sha256,
        })
    }

    /// Same comparison rule as `ApkSignKey::matches`: exact size, hash
    /// compared case-insensitively after trimming
    pub fn matches(&self, size: u32, sha256: &str) -> bool {
        self.size == size && self.sha256.trim().eq_ignore_ascii_case(sha256.trim())
    }

    pub fn of_file(path: &Path) -> Result<Self> {
        debug!("Fingerprinting signer blob: {path:?}");
        let file = File::open(path)?;
        let fingerprint = Self::of_reader(BufReader::new(file))?;
        debug!("Fingerprint of {path:?}: {fingerprint}");
        Ok(fingerprint)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size=0x{:x} sha256={}", self.size, self.sha256)
    }
}

fn blob_size(len: u64) -> Result<u32> {
    u32::try_from(len)
        .map_err(|_| ManagerSignError::InvalidSize(format!("signer blob too large: {len} bytes")))
}
