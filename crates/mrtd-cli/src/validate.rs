//! # Validate Subcommand
//!
//! Validates a JSON line-pair batch against the code registry, prints a
//! per-record verdict, and optionally persists the outcomes. Exit code 2
//! signals that at least one record was invalid, so shell pipelines can
//! branch on the result without parsing output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mrtd_batch::{read_line_pairs, validate_batch, write_outcomes};
use mrtd_core::{CodeRegistry, MrzValidator};

use crate::VariantOpt;

/// Arguments for the `mrtd validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON file containing an array of {line1, line2} objects.
    #[arg(long, short)]
    pub input: PathBuf,

    /// JSON file containing the array of valid country codes.
    #[arg(long)]
    pub codes: PathBuf,

    /// Optional destination for the outcome array.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Line-2 layout variant.
    #[arg(long, value_enum, default_value_t = VariantOpt::Extended)]
    pub variant: VariantOpt,
}

/// Run the validate subcommand. Returns the process exit code
/// (0 = all valid, 2 = at least one invalid).
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let pairs = read_line_pairs(&args.input)
        .with_context(|| format!("reading line-pair batch from {}", args.input.display()))?;
    let registry = CodeRegistry::load(&args.codes)
        .with_context(|| format!("loading code registry from {}", args.codes.display()))?;

    let validator = MrzValidator::new(args.variant.layout(), &registry);
    let outcomes = validate_batch(&validator, &pairs);

    for outcome in &outcomes {
        println!("Line 1: {}", outcome.line1);
        println!("Line 2: {}", outcome.line2);
        println!("Is Valid: {}", outcome.is_valid);
        println!("{}", "-".repeat(40));
    }

    if let Some(output) = &args.output {
        write_outcomes(output, &outcomes)
            .with_context(|| format!("writing outcomes to {}", output.display()))?;
    }

    let invalid = outcomes.iter().filter(|o| !o.is_valid).count();
    tracing::info!(total = outcomes.len(), invalid, "validate run complete");
    Ok(if invalid > 0 { 2 } else { 0 })
}
