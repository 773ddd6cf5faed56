//! Error types for manager-sign

use crate::exit_codes::{
    EXIT_CONFIG_ERROR, EXIT_ERROR, EXIT_INVALID_INPUT, EXIT_IO_ERROR, EXIT_NO_MATCH,
};
use std::fmt;

/// Main error type for manager-sign operations
#[derive(Debug)]
pub enum ManagerSignError {
    /// Hash string is not a 64 character hex SHA-256 digest
    InvalidDigest(String),

    /// Size value could not be parsed or does not fit in u32
    InvalidSize(String),

    /// Dynamic sign configuration is missing a field or fails validation
    DynamicConfig(String),

    /// Fingerprint did not belong to any known signer
    NoMatch(String),

    /// IO error
    IoError(std::io::Error),

    /// JSON parsing error
    JsonError(serde_json::Error),

    /// Generic error with message
    Generic(String),
}

impl ManagerSignError {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ManagerSignError::InvalidDigest(_) | ManagerSignError::InvalidSize(_) => {
                EXIT_INVALID_INPUT
            }
            ManagerSignError::DynamicConfig(_) | ManagerSignError::JsonError(_) => {
                EXIT_CONFIG_ERROR
            }
            ManagerSignError::NoMatch(_) => EXIT_NO_MATCH,
            ManagerSignError::IoError(_) => EXIT_IO_ERROR,
            ManagerSignError::Generic(_) => EXIT_ERROR,
        }
    }
}

impl fmt::Display for ManagerSignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagerSignError::InvalidDigest(msg) => write!(f, "Invalid digest: {msg}"),
            ManagerSignError::InvalidSize(msg) => write!(f, "Invalid size: {msg}"),
            ManagerSignError::DynamicConfig(msg) => write!(f, "Dynamic sign config: {msg}"),
            ManagerSignError::NoMatch(msg) => write!(f, "No matching signer: {msg}"),
            ManagerSignError::IoError(err) => write!(f, "IO error: {err}"),
            ManagerSignError::JsonError(err) => write!(f, "JSON error: {err}"),
            ManagerSignError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ManagerSignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManagerSignError::IoError(err) => Some(err),
            ManagerSignError::JsonError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ManagerSignError {
    fn from(err: std::io::Error) -> Self {
        ManagerSignError::IoError(err)
    }
}

impl From<serde_json::Error> for ManagerSignError {
    fn from(err: serde_json::Error) -> Self {
        ManagerSignError::JsonError(err)
    }
}

/// Result type for manager-sign operations
pub type Result<T> = std::result::Result<T, ManagerSignError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_per_variant() {
        assert_eq!(
            ManagerSignError::InvalidDigest("x".into()).exit_code(),
            EXIT_INVALID_INPUT
        );
        assert_eq!(
            ManagerSignError::NoMatch("x".into()).exit_code(),
            EXIT_NO_MATCH
        );
        assert_eq!(
            ManagerSignError::DynamicConfig("x".into()).exit_code(),
            EXIT_CONFIG_ERROR
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ManagerSignError::from(io).exit_code(), EXIT_IO_ERROR);
    }

    #[test]
    fn test_display_prefixes() {
        let err = ManagerSignError::InvalidSize("0xzz".into());
        assert_eq!(err.to_string(), "Invalid size: 0xzz");

        let err = ManagerSignError::Generic("boom".into());
        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.exit_code(), EXIT_ERROR);
    }
}
