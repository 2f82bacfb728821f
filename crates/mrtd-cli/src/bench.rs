//! # Bench Subcommand
//!
//! Times validation over growing prefixes of a line-pair batch and writes
//! the measurements as CSV, for external plotting of throughput against
//! batch size.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mrtd_batch::{read_line_pairs, TimingReport};
use mrtd_core::{CodeRegistry, MrzValidator};

use crate::VariantOpt;

/// Arguments for the `mrtd bench` subcommand.
#[derive(Args, Debug)]
pub struct BenchArgs {
    /// JSON file containing an array of {line1, line2} objects.
    #[arg(long, short)]
    pub input: PathBuf,

    /// JSON file containing the array of valid country codes.
    #[arg(long)]
    pub codes: PathBuf,

    /// Destination CSV file.
    #[arg(long, short)]
    pub output: PathBuf,

    /// Prefix growth per measurement.
    #[arg(long, default_value_t = 1000)]
    pub step: usize,

    /// Line-2 layout variant.
    #[arg(long, value_enum, default_value_t = VariantOpt::Extended)]
    pub variant: VariantOpt,
}

/// Run the bench subcommand. Returns the process exit code.
pub fn run_bench(args: &BenchArgs) -> Result<u8> {
    let pairs = read_line_pairs(&args.input)
        .with_context(|| format!("reading line-pair batch from {}", args.input.display()))?;
    let registry = CodeRegistry::load(&args.codes)
        .with_context(|| format!("loading code registry from {}", args.codes.display()))?;

    let validator = MrzValidator::new(args.variant.layout(), &registry);
    let report = TimingReport::for_validation(&validator, &pairs, args.step);
    report
        .write_csv(&args.output)
        .with_context(|| format!("writing timing CSV to {}", args.output.display()))?;

    println!(
        "{} measurements written to {}",
        report.rows.len(),
        args.output.display()
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_bench_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mrz_input.json");
        let codes = dir.path().join("valid_codes.json");
        let output = dir.path().join("timings.csv");

        let mut file = std::fs::File::create(&input).unwrap();
        write!(
            file,
            r#"[{{"line1": "a", "line2": "b"}}, {{"line1": "c", "line2": "d"}}]"#
        )
        .unwrap();
        let mut file = std::fs::File::create(&codes).unwrap();
        write!(file, r#"["UTO"]"#).unwrap();

        let args = BenchArgs {
            input,
            codes,
            output: output.clone(),
            step: 1,
            variant: VariantOpt::Extended,
        };
        assert_eq!(run_bench(&args).unwrap(), 0);

        let raw = std::fs::read_to_string(&output).unwrap();
        assert!(raw.starts_with("lines_read,elapsed_secs\n"));
        assert_eq!(raw.lines().count(), 3);
    }
}
