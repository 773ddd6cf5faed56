//! manager-sign - known-good signer fingerprints for root manager packages
//!
//! A compile-time table of expected (size, SHA-256) pairs for recognized
//! manager signers, plus the lookup, dynamic-sign configuration and CLI
//! plumbing needed to check an observed signer blob against it.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,

    // All warnings must be fixed
    warnings,
)]
#![warn(
    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::needless_continue,
    clippy::explicit_into_iter_loop,
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod api;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod sign;
pub mod utils;
pub mod version;

pub use api::{CheckResult, ListEntry, check_fingerprint, fingerprint_file, list_profiles};
pub use exceptions::{ManagerSignError, Result};
pub use sign::constants::{
    EXPECTED_HASH_OTHER, EXPECTED_HASH_RESUKISU, EXPECTED_HASH_SHIRKNEKO, EXPECTED_SIZE_OTHER,
    EXPECTED_SIZE_RESUKISU, EXPECTED_SIZE_SHIRKNEKO, OTHER_KEY, RESUKISU_KEY, SHIRKNEKO_KEY,
};
pub use sign::{ApkSignKey, DynamicSignConfig, Fingerprint, KeyRegistry, SignerProfile};
