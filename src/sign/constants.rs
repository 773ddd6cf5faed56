// src/sign/constants.rs
// Known-good signer fingerprints. Values are compared against sizes and
// hashes computed elsewhere and must stay bit-for-bit identical.

use super::key::ApkSignKey;

// Hex-encoded SHA-256 digest length
pub const SHA256_HEX_LEN: usize = 64;

// ShirkNeko/SukiSU
pub const EXPECTED_SIZE_SHIRKNEKO: u32 = 0x35c;
pub const EXPECTED_HASH_SHIRKNEKO: &str =
    "947ae944f3de4ed4c21a7e4f7953ecf351bfa2b36239da37a34111ad29993eef";

// ReSukiSU/ReSukiSU
pub const EXPECTED_SIZE_RESUKISU: u32 = 0x377;
pub const EXPECTED_HASH_RESUKISU: &str =
    "d3469712b6214462764a1d8d3e5cbe1d6819a0b629791b9f4101867821f1df64";

// Dynamic Sign (placeholder, resolved at runtime)
pub const EXPECTED_SIZE_OTHER: u32 = 0x300;
pub const EXPECTED_HASH_OTHER: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

pub const SHIRKNEKO_KEY: ApkSignKey =
    ApkSignKey::new(EXPECTED_SIZE_SHIRKNEKO, EXPECTED_HASH_SHIRKNEKO);
pub const RESUKISU_KEY: ApkSignKey =
    ApkSignKey::new(EXPECTED_SIZE_RESUKISU, EXPECTED_HASH_RESUKISU);
pub const OTHER_KEY: ApkSignKey = ApkSignKey::new(EXPECTED_SIZE_OTHER, EXPECTED_HASH_OTHER);
