//! manager-sign command line tool

use anyhow::Context;
use clap::{Parser, Subcommand};
use manager_sign::api::{self, CheckResult, ListEntry};
use manager_sign::exit_codes::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_PANIC, EXIT_SUCCESS};
use manager_sign::logger::JsonLogger;
use manager_sign::utils::parse_size;
use manager_sign::{Fingerprint, KeyRegistry, ManagerSignError, SignerProfile};
use std::{panic, path::PathBuf, process};

#[derive(Parser, Debug)]
#[command(
    name = "manager-sign",
    version = manager_sign::version::VERSION,
    about = "Check signer fingerprints against known root manager signers"
)]
struct Args {
    /// Log level (trace, debug, info, warn, error, or json:<level>)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// JSON file with the dynamic sign size and hash
    #[arg(long, global = true)]
    dynamic_config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List known signer profiles
    List {
        /// Only show one profile (shirkneko, resukisu, other)
        #[arg(long, value_parser = parse_profile_arg)]
        profile: Option<SignerProfile>,
    },

    /// Check an observed size and SHA-256 pair
    Check {
        /// Blob size, decimal or 0x-prefixed hex
        #[arg(long, value_parser = parse_size_arg)]
        size: u32,

        /// Hex SHA-256 of the blob
        #[arg(long)]
        hash: String,
    },

    /// Hash a signer blob (e.g. a DER certificate) and check it
    Fingerprint {
        /// Path to the extracted signer blob
        path: PathBuf,
    },

    /// Print full version information
    Version,
}

fn parse_size_arg(value: &str) -> Result<u32, String> {
    parse_size(value).map_err(|e| e.to_string())
}

fn parse_profile_arg(value: &str) -> Result<SignerProfile, String> {
    value.parse::<SignerProfile>().map_err(|e| e.to_string())
}

/// Help and version output are not failures
fn arg_error_exit_code(err: &clap::Error) -> i32 {
    if err.use_stderr() {
        EXIT_INVALID_ARGS
    } else {
        EXIT_SUCCESS
    }
}

/// Exit code of the innermost crate error, if any survived the context chain
fn error_exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ManagerSignError>()
        .map(ManagerSignError::exit_code)
        .unwrap_or(EXIT_ERROR)
}

fn main() {
    panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC: {}", panic_info);
        process::exit(EXIT_PANIC);
    }));

    let result = panic::catch_unwind(run);

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(_) => {
            eprintln!("Fatal: Unhandled panic in manager-sign");
            process::exit(EXIT_PANIC);
        }
    }
}

fn run() -> i32 {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return arg_error_exit_code(&e);
        }
    };

    if let Some(ref level) = args.log_level {
        JsonLogger::init_with_level(level);
    } else {
        JsonLogger::init();
    }

    match execute(&args) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            error_exit_code(&e)
        }
    }
}

fn execute(args: &Args) -> anyhow::Result<i32> {
    if let Command::Version = args.command {
        println!("manager-sign {}", manager_sign::version::full_version());
        return Ok(EXIT_SUCCESS);
    }

    let registry = match args.dynamic_config.as_deref() {
        Some(path) => api::load_registry(Some(path))
            .with_context(|| format!("loading dynamic sign config {}", path.display()))?,
        None => api::load_registry(None).context("reading dynamic sign environment")?,
    };

    match &args.command {
        Command::List { profile } => {
            let entries = api::list_profiles(&registry, *profile);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_entries(&entries, &registry);
            }
            Ok(EXIT_SUCCESS)
        }
        Command::Check { size, hash } => {
            let fingerprint = Fingerprint::new(*size, hash)?;
            let result = api::check_fingerprint(&registry, &fingerprint);
            report(&result, args.json)
        }
        Command::Fingerprint { path } => {
            let result = api::fingerprint_file(&registry, path)
                .with_context(|| format!("fingerprinting {}", path.display()))?;
            report(&result, args.json)
        }
        Command::Version => Ok(EXIT_SUCCESS),
    }
}

fn print_entries(entries: &[ListEntry], registry: &KeyRegistry) {
    for entry in entries {
        println!(
            "{:<20} size=0x{:03x} ({:>4}) sha256={}{}",
            entry.name,
            entry.size,
            entry.size,
            entry.sha256,
            if entry.active { "" } else { "  [placeholder]" }
        );
    }
    if !registry.is_dynamic_enabled() {
        println!("Dynamic sign: not configured");
    }
}

fn report(result: &CheckResult, json: bool) -> anyhow::Result<i32> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        match result.profile {
            Some(profile) => println!(
                "✅ size=0x{:x} sha256={} matches {}",
                result.size, result.sha256, profile
            ),
            None => println!(
                "❌ size=0x{:x} sha256={} matches no known signer",
                result.size, result.sha256
            ),
        }
    }

    Ok(result.exit_code())
}
