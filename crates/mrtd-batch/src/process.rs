//! # Batch Encode and Validate Runs
//!
//! Per-item application of the core encoder/validator over a batch.
//! Output order always matches input order and there is no cross-record
//! state, so each item is independent — a caller that wants parallelism
//! can map over the batch concurrently; the registry only needs to be
//! published before the first call.

use serde::{Deserialize, Serialize};

use mrtd_core::{MrzEncoder, MrzLines, MrzRecord, MrzValidator};

/// Verdict for one line pair in a validation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// The identity line as supplied.
    pub line1: String,
    /// The document-data line as supplied.
    pub line2: String,
    /// The validator's boolean verdict.
    pub is_valid: bool,
}

/// Encode every record in the batch, preserving order.
pub fn encode_batch(encoder: &MrzEncoder, records: &[MrzRecord]) -> Vec<MrzLines> {
    let encoded: Vec<MrzLines> = records.iter().map(|r| encoder.encode(r)).collect();
    tracing::info!(
        count = encoded.len(),
        variant = %encoder.variant(),
        "encoded record batch"
    );
    encoded
}

/// Validate every line pair in the batch, preserving order.
pub fn validate_batch(
    validator: &MrzValidator<'_>,
    pairs: &[MrzLines],
) -> Vec<ValidationOutcome> {
    let outcomes: Vec<ValidationOutcome> = pairs
        .iter()
        .map(|pair| ValidationOutcome {
            line1: pair.line1.clone(),
            line2: pair.line2.clone(),
            is_valid: validator.validate(&pair.line1, &pair.line2),
        })
        .collect();

    let valid = outcomes.iter().filter(|o| o.is_valid).count();
    tracing::info!(
        total = outcomes.len(),
        valid,
        invalid = outcomes.len() - valid,
        variant = %validator.variant(),
        "validated line-pair batch"
    );
    outcomes
}
