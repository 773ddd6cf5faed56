//! Signer fingerprint table and the helpers that consume it

pub mod checksums;
pub mod constants;
pub mod dynamic;
pub mod fingerprint;
pub mod key;
pub mod profiles;
pub mod registry;

pub use dynamic::DynamicSignConfig;
pub use fingerprint::Fingerprint;
pub use key::ApkSignKey;
pub use profiles::SignerProfile;
pub use registry::{KeyRegistry, RegistryEntry};
