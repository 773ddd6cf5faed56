//! Utility functions for manager-sign

use crate::exceptions::{ManagerSignError, Result};

/// Parse a size given as decimal (`860`) or hex (`0x35c`)
pub fn parse_size(value: &str) -> Result<u32> {
    let trimmed = value.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => trimmed.parse::<u32>(),
    };

    parsed.map_err(|e| ManagerSignError::InvalidSize(format!("{trimmed}: {e}")))
}
