//! Standard exit codes for the manager-sign binary
//!
//! Scripts wrapping `manager-sign check` rely on these staying stable.

/// Successful execution, fingerprint matched a known profile
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Fingerprint is well formed but belongs to no known signer
pub const EXIT_NO_MATCH: i32 = 2;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Malformed digest or size value
pub const EXIT_INVALID_INPUT: i32 = 102;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 106;

/// Configuration error (bad dynamic sign config)
pub const EXIT_CONFIG_ERROR: i32 = 109;
