use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Environment wins over the VERSION file next to Cargo.toml
    let version = if let Ok(v) = env::var("MANAGER_SIGN_VERSION") {
        v
    } else {
        let version_file = Path::new("VERSION");
        if version_file.exists() {
            fs::read_to_string(version_file)
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string())
                .trim()
                .to_string()
        } else {
            env!("CARGO_PKG_VERSION").to_string()
        }
    };

    println!("cargo:rustc-env=MANAGER_SIGN_VERSION={}", version);
    println!("cargo:rerun-if-changed=VERSION");
    println!("cargo:rerun-if-env-changed=MANAGER_SIGN_VERSION");
}
