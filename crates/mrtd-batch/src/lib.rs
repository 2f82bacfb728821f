//! # mrtd-batch — Batch Orchestration for the MRTD Stack
//!
//! The external-facing collaborator around `mrtd-core`: reads record and
//! line-pair batches from JSON, applies the encoder or validator per item
//! with output order matching input order, persists results, and produces
//! timing CSVs over growing input prefixes.
//!
//! ## Crate Policy
//!
//! - All layout and checksum semantics live in `mrtd-core`; this crate is
//!   glue and holds no cross-record state.
//! - Every I/O error carries the offending path.

pub mod error;
pub mod io;
pub mod process;
pub mod report;

pub use error::BatchError;
pub use io::{read_line_pairs, read_records, write_encoded, write_outcomes};
pub use process::{encode_batch, validate_batch, ValidationOutcome};
pub use report::{TimingReport, TimingRow};
