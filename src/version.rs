//! Version string for `manager-sign version`

use crate::sign::SignerProfile;

/// Crate version, injected by build.rs
pub const VERSION: &str = env!("MANAGER_SIGN_VERSION");

/// Short commit hash when the build environment provides `GIT_COMMIT`
pub const GIT_COMMIT: Option<&str> = option_env!("GIT_COMMIT");

/// Version, optional commit, and the number of compiled-in signer profiles
pub fn full_version() -> String {
    let profiles = SignerProfile::ALL.len();
    match GIT_COMMIT {
        Some(commit) => format!(
            "{VERSION} ({}) profiles={profiles}",
            &commit[..commit.len().min(8)]
        ),
        None => format!("{VERSION} profiles={profiles}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_version_reports_profiles() {
        let version = full_version();
        assert!(version.starts_with(VERSION));
        assert!(version.ends_with("profiles=3"));
    }
}
