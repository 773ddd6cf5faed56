//! SHA-256 helpers for signer blobs.
//!
//! Digests are always rendered as bare lowercase hex, the same form the
//! descriptor table stores.

use super::constants::SHA256_HEX_LEN;
use crate::exceptions::{ManagerSignError, Result};
use sha2::{Digest, Sha256};
use std::io::Read;

const BUFFER_SIZE: usize = 64 * 1024;

/// Hex SHA-256 of an in-memory blob
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Hash a reader with streaming I/O, returning the byte count and hex digest
pub fn calculate_sha256<R: Read>(mut reader: R) -> std::io::Result<(u64, String)> {
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut hasher = Sha256::new();
    let mut total: u64 = 0;

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
        total += bytes_read as u64;
    }

    Ok((total, hex::encode(hasher.finalize())))
}

/// True for exactly 64 hex characters, either case
pub fn is_sha256_hex(value: &str) -> bool {
    value.len() == SHA256_HEX_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Trim, lowercase and validate a user-supplied digest.
///
/// An optional `sha256:` prefix is accepted and stripped.
pub fn normalize_sha256(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let bare = trimmed.strip_prefix("sha256:").unwrap_or(trimmed);

    if bare.len() != SHA256_HEX_LEN {
        return Err(ManagerSignError::InvalidDigest(format!(
            "expected {} hex characters, got {}",
            SHA256_HEX_LEN,
            bare.len()
        )));
    }

    let bytes = hex::decode(bare)
        .map_err(|e| ManagerSignError::InvalidDigest(format!("{bare}: {e}")))?;
    Ok(hex::encode(bytes))
}
