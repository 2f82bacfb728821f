//! # mrtd CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; the JSON batch formats match the legacy
//! Python toolchain so existing input files keep working.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mrtd_cli::bench::{run_bench, BenchArgs};
use mrtd_cli::encode::{run_encode, EncodeArgs};
use mrtd_cli::registry::{run_registry, RegistryArgs};
use mrtd_cli::validate::{run_validate, ValidateArgs};

/// MRTD Stack CLI
///
/// Encodes and validates Machine-Readable-Zone passport records in
/// batches, with CRC-based check digits and registry-backed country-code
/// validation.
#[derive(Parser, Debug)]
#[command(name = "mrtd", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a JSON record batch into MRZ line pairs.
    Encode(EncodeArgs),

    /// Validate a JSON line-pair batch against the code registry.
    Validate(ValidateArgs),

    /// Inspect the code registry or test a single code.
    Registry(RegistryArgs),

    /// Time validation over growing input prefixes, writing CSV.
    Bench(BenchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Encode(args) => run_encode(&args),
        Commands::Validate(args) => run_validate(&args),
        Commands::Registry(args) => run_registry(&args),
        Commands::Bench(args) => run_bench(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
