//! # Encode Subcommand
//!
//! Encodes a JSON record batch into MRZ line pairs, prints each pair, and
//! writes the `records_encoded` envelope.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mrtd_batch::{encode_batch, read_records, write_encoded};
use mrtd_core::MrzEncoder;

use crate::VariantOpt;

/// Arguments for the `mrtd encode` subcommand.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// JSON file containing an array of input records.
    #[arg(long, short)]
    pub input: PathBuf,

    /// Destination for the encoded `records_encoded` envelope.
    #[arg(long, short)]
    pub output: PathBuf,

    /// Line-2 layout variant.
    #[arg(long, value_enum, default_value_t = VariantOpt::Extended)]
    pub variant: VariantOpt,
}

/// Run the encode subcommand. Returns the process exit code.
pub fn run_encode(args: &EncodeArgs) -> Result<u8> {
    let records = read_records(&args.input)
        .with_context(|| format!("reading record batch from {}", args.input.display()))?;

    let encoder = MrzEncoder::new(args.variant.layout());
    let encoded = encode_batch(&encoder, &records);

    for lines in &encoded {
        println!("Line 1: {}", lines.line1);
        println!("Line 2: {}", lines.line2);
        println!("{}", "-".repeat(50));
    }

    write_encoded(&args.output, &encoded)
        .with_context(|| format!("writing encoded batch to {}", args.output.display()))?;

    tracing::info!(
        count = encoded.len(),
        output = %args.output.display(),
        "encode run complete"
    );
    Ok(0)
}
