//! Signature key descriptor: an expected (size, SHA-256) pair for a signer blob.

use super::checksums::is_sha256_hex;
use serde::Serialize;
use std::fmt;

/// Expected fingerprint of a trusted package signer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ApkSignKey {
    /// Expected byte length of the signer blob
    pub size: u32,
    /// Expected lowercase hex SHA-256 of the signer blob
    pub sha256: &'static str,
}

impl ApkSignKey {
    pub const fn new(size: u32, sha256: &'static str) -> Self {
        ApkSignKey { size, sha256 }
    }

    /// True when the hash is unset (all zeros) and the real value comes from
    /// the dynamic sign configuration.
    pub fn is_placeholder(&self) -> bool {
        !self.sha256.is_empty() && self.sha256.bytes().all(|b| b == b'0')
    }

    pub fn is_well_formed(&self) -> bool {
        is_sha256_hex(self.sha256)
    }

    /// Compare against an observed size and hash. Placeholders never match.
    pub fn matches(&self, size: u32, sha256: &str) -> bool {
        if self.is_placeholder() {
            return false;
        }
        self.size == size && self.sha256.eq_ignore_ascii_case(sha256.trim())
    }
}

impl fmt::Display for ApkSignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "size=0x{:x} sha256={}", self.size, self.sha256)
    }
}

#[cfg(test)]
mod tests {
    use super::super::constants::{OTHER_KEY, RESUKISU_KEY, SHIRKNEKO_KEY};
    use super::*;

    #[test]
    fn test_matches_exact_pair() {
        assert!(SHIRKNEKO_KEY.matches(
            0x35c,
            "947ae944f3de4ed4c21a7e4f7953ecf351bfa2b36239da37a34111ad29993eef"
        ));
        assert!(RESUKISU_KEY.matches(
            887,
            "D3469712B6214462764A1D8D3E5CBE1D6819A0B629791B9F4101867821F1DF64"
        ));
    }

    #[test]
    fn test_size_mismatch_rejected() {
        assert!(!SHIRKNEKO_KEY.matches(0x35d, SHIRKNEKO_KEY.sha256));
        assert!(!SHIRKNEKO_KEY.matches(RESUKISU_KEY.size, SHIRKNEKO_KEY.sha256));
    }

    #[test]
    fn test_hash_mismatch_rejected() {
        assert!(!SHIRKNEKO_KEY.matches(SHIRKNEKO_KEY.size, RESUKISU_KEY.sha256));
        // One character short
        assert!(!SHIRKNEKO_KEY.matches(SHIRKNEKO_KEY.size, &SHIRKNEKO_KEY.sha256[1..]));
    }

    #[test]
    fn test_placeholder_never_matches() {
        assert!(OTHER_KEY.is_placeholder());
        assert!(!OTHER_KEY.matches(OTHER_KEY.size, OTHER_KEY.sha256));
        assert!(!SHIRKNEKO_KEY.is_placeholder());
    }

    #[test]
    fn test_well_formed() {
        assert!(SHIRKNEKO_KEY.is_well_formed());
        assert!(RESUKISU_KEY.is_well_formed());
        assert!(OTHER_KEY.is_well_formed());
        assert!(!ApkSignKey::new(1, "abc").is_well_formed());
    }

    #[test]
    fn test_display() {
        let key = ApkSignKey::new(0x300, "00");
        assert_eq!(key.to_string(), "size=0x300 sha256=00");
    }
}
