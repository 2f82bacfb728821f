//! # Input Record Types
//!
//! The caller-owned structured record fed to the encoder, and the
//! two-line output it produces. All record fields are text — dates are
//! opaque 6-character tokens and are never validated as calendar dates.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LinePairParseError;

/// A structured travel-document record, as supplied by the caller.
///
/// Every field is plain text and every field defaults to the empty string
/// when absent from the source JSON; the encoder treats missing data as
/// empty and pads it with filler. `personal_number` is legitimately empty
/// for documents that carry none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MrzRecord {
    /// Three-letter code of the issuing state (line 1).
    pub issuing_country: String,
    /// Primary identifier (surname).
    pub last_name: String,
    /// Secondary identifier (given names).
    pub given_name: String,
    /// Document number, up to nine characters.
    pub passport_number: String,
    /// Three-letter nationality code (line 2).
    pub country_code: String,
    /// Birth date token, `YYMMDD`.
    pub birth_date: String,
    /// Sex marker, copied through verbatim.
    pub sex: String,
    /// Expiration date token, `YYMMDD`.
    pub expiration_date: String,
    /// Optional personal number; empty when the document has none.
    pub personal_number: String,
}

/// An encoded line pair — the canonical output shape of the encoder.
///
/// The alternate single-string interchange form `line1;line2` is exposed
/// through `Display` and `FromStr`; serde uses the two-field object form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MrzLines {
    /// The 44-character identity line.
    pub line1: String,
    /// The fixed-width document-data line.
    pub line2: String,
}

impl MrzLines {
    /// Assemble a line pair from its two lines.
    pub fn new(line1: impl Into<String>, line2: impl Into<String>) -> Self {
        Self {
            line1: line1.into(),
            line2: line2.into(),
        }
    }
}

impl std::fmt::Display for MrzLines {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{};{}", self.line1, self.line2)
    }
}

impl FromStr for MrzLines {
    type Err = LinePairParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line1, line2) = s.split_once(';').ok_or(LinePairParseError)?;
        Ok(Self::new(line1, line2))
    }
}
