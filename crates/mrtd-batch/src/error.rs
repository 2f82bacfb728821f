//! # Batch Error Types
//!
//! I/O and JSON failures at the batch boundary, each carrying the
//! offending path. The core never errors; everything here comes from
//! reading and writing batch files.

use std::path::PathBuf;

use thiserror::Error;

/// Error reading or writing a batch file.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The file's JSON did not match the expected batch shape.
    #[error("invalid JSON in {path}: {source}")]
    Json {
        /// The file that failed.
        path: PathBuf,
        /// The underlying serde error.
        source: serde_json::Error,
    },
}
