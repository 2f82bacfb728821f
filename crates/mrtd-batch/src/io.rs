//! # Batch File I/O
//!
//! JSON interchange formats for record and line-pair batches:
//!
//! - **Record batch** (encode input): JSON array of field maps, one
//!   [`MrzRecord`] per element. Missing fields deserialize as empty.
//! - **Line-pair batch** (validate input): JSON array of
//!   `{"line1": ..., "line2": ...}` objects.
//! - **Encoded output**: `{"records_encoded": [...]}` envelope, the shape
//!   downstream tooling already consumes.
//! - **Outcome output**: JSON array of `{line1, line2, is_valid}` objects,
//!   order-preserving.

use std::fs;
use std::path::Path;

use serde::Serialize;

use mrtd_core::{MrzLines, MrzRecord};

use crate::error::BatchError;
use crate::process::ValidationOutcome;

/// Read a batch of structured records from a JSON array file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<MrzRecord>, BatchError> {
    read_json(path.as_ref())
}

/// Read a batch of encoded line pairs from a JSON array file.
pub fn read_line_pairs(path: impl AsRef<Path>) -> Result<Vec<MrzLines>, BatchError> {
    read_json(path.as_ref())
}

/// Write encoded line pairs under the `records_encoded` envelope.
pub fn write_encoded(path: impl AsRef<Path>, lines: &[MrzLines]) -> Result<(), BatchError> {
    #[derive(Serialize)]
    struct Envelope<'a> {
        records_encoded: &'a [MrzLines],
    }
    write_json(path.as_ref(), &Envelope { records_encoded: lines })
}

/// Write validation outcomes as a JSON array, input order preserved.
pub fn write_outcomes(
    path: impl AsRef<Path>,
    outcomes: &[ValidationOutcome],
) -> Result<(), BatchError> {
    write_json(path.as_ref(), &outcomes)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, BatchError> {
    let raw = fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| BatchError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), BatchError> {
    let rendered = serde_json::to_string_pretty(value).map_err(|source| BatchError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, rendered).map_err(|source| BatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}
