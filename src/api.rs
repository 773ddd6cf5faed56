//! High-level API for manager-sign operations

use crate::exceptions::Result;
use crate::exit_codes::{EXIT_NO_MATCH, EXIT_SUCCESS};
use crate::sign::{DynamicSignConfig, Fingerprint, KeyRegistry, SignerProfile};
use log::info;
use serde::Serialize;
use std::path::Path;

/// One row of the profile listing
#[derive(Debug, Clone, Serialize)]
pub struct ListEntry {
    pub profile: SignerProfile,
    pub name: String,
    pub size: u32,
    pub sha256: String,
    pub active: bool,
}

/// Outcome of checking a fingerprint against the registry
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub size: u32,
    pub sha256: String,
    pub matched: bool,
    pub profile: Option<SignerProfile>,
}

impl CheckResult {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        if self.matched {
            EXIT_SUCCESS
        } else {
            EXIT_NO_MATCH
        }
    }
}

/// Build the registry from an optional config file, falling back to the
/// environment when no file is given.
pub fn load_registry(dynamic_config: Option<&Path>) -> Result<KeyRegistry> {
    load_registry_with(dynamic_config, |key| std::env::var(key).ok())
}

/// `load_registry` with an explicit variable lookup. The file, when given,
/// wins and the environment is not consulted.
pub fn load_registry_with<F>(dynamic_config: Option<&Path>, lookup: F) -> Result<KeyRegistry>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match dynamic_config {
        Some(path) => Some(DynamicSignConfig::load(path)?),
        None => DynamicSignConfig::from_env_with(lookup)?,
    };

    match config {
        Some(config) => KeyRegistry::builtin().with_dynamic(&config),
        None => Ok(KeyRegistry::builtin()),
    }
}

/// Registry rows, optionally narrowed to a single profile
pub fn list_profiles(registry: &KeyRegistry, only: Option<SignerProfile>) -> Vec<ListEntry> {
    registry
        .entries()
        .into_iter()
        .filter(|entry| only.is_none_or(|profile| profile == entry.profile))
        .map(|entry| ListEntry {
            profile: entry.profile,
            name: entry.profile.name().to_string(),
            size: entry.size,
            sha256: entry.sha256,
            active: entry.active,
        })
        .collect()
}

pub fn check_fingerprint(registry: &KeyRegistry, fingerprint: &Fingerprint) -> CheckResult {
    let profile = registry.identify(fingerprint);
    CheckResult {
        size: fingerprint.size,
        sha256: fingerprint.sha256.clone(),
        matched: profile.is_some(),
        profile,
    }
}

/// Fingerprint a signer blob on disk and check it
pub fn fingerprint_file(registry: &KeyRegistry, blob_path: &Path) -> Result<CheckResult> {
    let fingerprint = Fingerprint::of_file(blob_path)?;
    let result = check_fingerprint(registry, &fingerprint);
    info!(
        "{blob_path:?}: {fingerprint} -> {}",
        result
            .profile
            .map(|p| p.name())
            .unwrap_or("no matching signer")
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::constants::{EXPECTED_HASH_SHIRKNEKO, EXPECTED_SIZE_SHIRKNEKO};
    use crate::sign::dynamic::{DYNAMIC_HASH_ENV, DYNAMIC_SIZE_ENV};
    use crate::{ManagerSignError, RESUKISU_KEY};
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    const FILE_HASH: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    const ENV_HASH: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    fn env_lookup(vars: &[(&str, &str)]) -> impl use<> + Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn write_config(temp_dir: &TempDir, size: u32, hash: &str) -> std::path::PathBuf {
        let path = temp_dir.path().join("dynamic.json");
        fs::write(
            &path,
            serde_json::to_string(&DynamicSignConfig::new(size, hash)).unwrap(),
        )
        .unwrap();
        path
    }

    #[test]
    fn test_list_profiles_builtin() {
        let entries = list_profiles(&KeyRegistry::builtin(), None);
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["ShirkNeko/SukiSU", "ReSukiSU/ReSukiSU", "Dynamic Sign"]
        );
        assert_eq!(entries[0].size, 0x35c);
        assert!(!entries[2].active);
    }

    #[test]
    fn test_list_profiles_single() {
        let entries = list_profiles(&KeyRegistry::builtin(), Some(SignerProfile::ReSukiSU));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].profile, SignerProfile::ReSukiSU);
        assert_eq!(entries[0].sha256, RESUKISU_KEY.sha256);
    }

    #[test]
    fn test_check_result_exit_codes() {
        let registry = KeyRegistry::builtin();

        let known = Fingerprint::new(EXPECTED_SIZE_SHIRKNEKO, EXPECTED_HASH_SHIRKNEKO).unwrap();
        assert_eq!(check_fingerprint(&registry, &known).exit_code(), EXIT_SUCCESS);

        let unknown = Fingerprint::of_bytes(b"someone else").unwrap();
        assert_eq!(check_fingerprint(&registry, &unknown).exit_code(), EXIT_NO_MATCH);
        assert_eq!(EXIT_NO_MATCH, 2);
    }

    #[test]
    fn test_config_file_wins_over_env() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, 0x2f0, FILE_HASH);

        let registry = load_registry_with(
            Some(&path),
            env_lookup(&[(DYNAMIC_SIZE_ENV, "0x111"), (DYNAMIC_HASH_ENV, ENV_HASH)]),
        )
        .unwrap();
        let dynamic = &list_profiles(&registry, Some(SignerProfile::Other))[0];
        assert_eq!(dynamic.size, 0x2f0);
        assert_eq!(dynamic.sha256, FILE_HASH);

        // A half-set environment is not even looked at when a file is given
        let registry =
            load_registry_with(Some(&path), env_lookup(&[(DYNAMIC_SIZE_ENV, "0x111")])).unwrap();
        assert!(registry.is_dynamic_enabled());
    }

    #[test]
    fn test_env_only_enables_dynamic_profile() {
        let registry = load_registry_with(
            None,
            env_lookup(&[(DYNAMIC_SIZE_ENV, "0x111"), (DYNAMIC_HASH_ENV, ENV_HASH)]),
        )
        .unwrap();
        let observed = Fingerprint::new(0x111, ENV_HASH).unwrap();
        assert_eq!(
            check_fingerprint(&registry, &observed).profile,
            Some(SignerProfile::Other)
        );
    }

    #[test]
    fn test_no_file_no_env_is_builtin() {
        let registry = load_registry_with(None, env_lookup(&[])).unwrap();
        assert!(!registry.is_dynamic_enabled());
    }

    #[test]
    fn test_half_set_env_is_error() {
        let err = load_registry_with(None, env_lookup(&[(DYNAMIC_HASH_ENV, ENV_HASH)]))
            .unwrap_err();
        assert!(matches!(err, ManagerSignError::DynamicConfig(_)));
        assert_eq!(err.exit_code(), crate::exit_codes::EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_check_fingerprint() {
        let registry = KeyRegistry::builtin();
        let fp = Fingerprint::new(EXPECTED_SIZE_SHIRKNEKO, EXPECTED_HASH_SHIRKNEKO).unwrap();
        let result = check_fingerprint(&registry, &fp);
        assert!(result.matched);
        assert_eq!(result.profile, Some(SignerProfile::ShirkNeko));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["profile"], "shirkneko");
        assert_eq!(json["size"], 860);
    }

    #[test]
    fn test_fingerprint_file_unknown_blob() {
        let temp_dir = TempDir::new().unwrap();
        let blob = temp_dir.path().join("cert.der");
        fs::write(&blob, b"not a known signer").unwrap();

        let result = fingerprint_file(&KeyRegistry::builtin(), &blob).unwrap();
        assert!(!result.matched);
        assert_eq!(result.size, 18);
        assert!(result.profile.is_none());
    }

    #[test]
    fn test_fingerprint_file_dynamic_blob() {
        let temp_dir = TempDir::new().unwrap();
        let blob_path = temp_dir.path().join("cert.der");
        let blob = b"self-signed manager certificate";
        fs::write(&blob_path, blob).unwrap();

        let observed = Fingerprint::of_bytes(blob).unwrap();
        let config_path = write_config(&temp_dir, observed.size, &observed.sha256);

        let registry = load_registry_with(Some(&config_path), env_lookup(&[])).unwrap();
        let result = fingerprint_file(&registry, &blob_path).unwrap();
        assert_eq!(result.profile, Some(SignerProfile::Other));
    }

    #[test]
    fn test_load_registry_rejects_placeholder_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, 768, &"0".repeat(64));

        assert!(load_registry_with(Some(&config_path), env_lookup(&[])).is_err());
    }
}
