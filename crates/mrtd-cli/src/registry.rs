//! # Registry Subcommand
//!
//! Registry inspection: report how many codes are loaded, or test a
//! single code's membership.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mrtd_core::CodeRegistry;

/// Arguments for the `mrtd registry` subcommand.
#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// JSON file containing the array of valid country codes.
    #[arg(long)]
    pub codes: PathBuf,

    /// Report membership of one code instead of summarizing.
    #[arg(long)]
    pub check: Option<String>,
}

/// Run the registry subcommand. Returns the process exit code
/// (with `--check`: 0 = known, 2 = unknown).
pub fn run_registry(args: &RegistryArgs) -> Result<u8> {
    let registry = CodeRegistry::load(&args.codes)
        .with_context(|| format!("loading code registry from {}", args.codes.display()))?;

    match &args.check {
        Some(code) => {
            let known = registry.contains(code);
            println!("{code}: {}", if known { "known" } else { "unknown" });
            Ok(if known { 0 } else { 2 })
        }
        None => {
            println!("{} codes loaded", registry.len());
            Ok(0)
        }
    }
}
