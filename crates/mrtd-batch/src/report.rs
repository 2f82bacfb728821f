//! # Timing Reports
//!
//! Wall-clock timing of encode/validate runs over growing input prefixes,
//! persisted as CSV for external plotting. The prefix sweep answers the
//! operational question "how does throughput scale with batch size"
//! without any benchmarking framework in the hot path.

use std::fs;
use std::path::Path;
use std::time::Instant;

use mrtd_core::{MrzEncoder, MrzLines, MrzRecord, MrzValidator};

use crate::error::BatchError;
use crate::process::{encode_batch, validate_batch};

/// One measured prefix of the input batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingRow {
    /// Number of items processed from the start of the batch.
    pub lines_read: usize,
    /// Wall-clock seconds for the run.
    pub elapsed_secs: f64,
}

/// A sweep of timing measurements over growing input prefixes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingReport {
    /// Measurements in increasing prefix order.
    pub rows: Vec<TimingRow>,
}

impl TimingReport {
    /// Time validation over prefixes of `pairs`, growing by `step`.
    ///
    /// A `step` of zero is treated as one. The final prefix is always the
    /// whole batch, even when its size is not a multiple of `step`.
    pub fn for_validation(
        validator: &MrzValidator<'_>,
        pairs: &[MrzLines],
        step: usize,
    ) -> Self {
        Self::sweep(pairs.len(), step, |n| {
            let started = Instant::now();
            let _ = validate_batch(validator, &pairs[..n]);
            started.elapsed().as_secs_f64()
        })
    }

    /// Time encoding over prefixes of `records`, growing by `step`.
    pub fn for_encoding(encoder: &MrzEncoder, records: &[MrzRecord], step: usize) -> Self {
        Self::sweep(records.len(), step, |n| {
            let started = Instant::now();
            let _ = encode_batch(encoder, &records[..n]);
            started.elapsed().as_secs_f64()
        })
    }

    fn sweep(total: usize, step: usize, mut measure: impl FnMut(usize) -> f64) -> Self {
        let step = step.max(1);
        let mut rows = Vec::new();
        let mut n = step.min(total);
        while n <= total && total > 0 {
            rows.push(TimingRow {
                lines_read: n,
                elapsed_secs: measure(n),
            });
            if n == total {
                break;
            }
            n = (n + step).min(total);
        }
        Self { rows }
    }

    /// Render the report as CSV with a header row.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("lines_read,elapsed_secs\n");
        for row in &self.rows {
            out.push_str(&format!("{},{:.6}\n", row.lines_read, row.elapsed_secs));
        }
        out
    }

    /// Write the CSV rendering to a file.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), BatchError> {
        let path = path.as_ref();
        fs::write(path, self.to_csv()).map_err(|source| BatchError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
