//! # Error Types
//!
//! Structured error hierarchy for the MRTD core. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The encode/parse hot path is infallible by design — malformed input is
//! normalized by padding/truncation, never rejected — so errors here are
//! confined to registry loading and to the validator's diagnostic side
//! channel.

use thiserror::Error;

/// Error loading the country-code registry from its JSON source.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file: {0}")]
    Io(#[from] std::io::Error),

    /// The registry file is not a JSON array of code strings.
    #[error("failed to parse registry JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a line pair failed validation.
///
/// Diagnostic side channel only: the validator's contract is the boolean
/// verdict, and every failure collapses to `is_valid = false`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Line 2 is not exactly the length the layout variant demands.
    #[error("line 2 length is {actual}, expected {expected}")]
    LengthMismatch {
        /// Length demanded by the layout variant.
        expected: usize,
        /// Length of the supplied line.
        actual: usize,
    },

    /// A country code is absent from the registry.
    #[error("unknown country code {code:?} in {location}")]
    UnknownCode {
        /// The rejected code.
        code: String,
        /// Which line carried it ("line 1" or "line 2").
        location: &'static str,
    },

    /// A recomputed check digit disagrees with the embedded one.
    #[error("check digit mismatch for {field}: embedded {embedded:?}, computed {computed:?}")]
    DigitMismatch {
        /// The field whose digit failed ("passport number", "birth date", ...).
        field: &'static str,
        /// The character embedded in the line.
        embedded: char,
        /// The digit recomputed from the parsed field.
        computed: char,
    },
}

/// The delimited `line1;line2` interchange form had no `;` separator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("line pair is missing the ';' delimiter")]
pub struct LinePairParseError;
