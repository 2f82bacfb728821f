//! # MRZ Layout Variants
//!
//! Byte-offset geometry of the two-line passport layout. Two field
//! conventions are in circulation for line 2 and they are not
//! interchangeable: they disagree on the personal-number width and on
//! whether country codes are checked against the registry. Neither is
//! "the" canonical one, so both are first-class named variants and the
//! caller selects explicitly.
//!
//! Line 1 geometry is common to both variants:
//!
//! ```text
//! P < III NNNNNNNNN...N      1 + 1 + 3 + 39 = 44
//! ```
//!
//! Line 2 shares a fixed 28-character prefix, then diverges:
//!
//! ```text
//! PPPPPPPPP c III BBBBBB c S EEEEEE c  [personal number] c
//! 0..9      9 10..13 13..19 19 20 21..27 27  28..28+w     last
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Total length of line 1: type marker + filler + country + name field.
pub const LINE1_LEN: usize = 44;

/// Width of the line-1 name field.
pub const NAME_WIDTH: usize = 39;

/// Width of the passport-number field.
pub const PASSPORT_WIDTH: usize = 9;

/// Width of a country/nationality code.
pub const COUNTRY_WIDTH: usize = 3;

/// Width of a date field (opaque 6-character token, not a calendar date).
pub const DATE_WIDTH: usize = 6;

/// Line-2 offset ranges common to both variants.
pub const PASSPORT_SPAN: Range<usize> = 0..9;
/// Position of the passport-number check digit.
pub const PASSPORT_DIGIT_AT: usize = 9;
/// Nationality code span.
pub const COUNTRY_SPAN: Range<usize> = 10..13;
/// Birth-date span.
pub const BIRTH_SPAN: Range<usize> = 13..19;
/// Position of the birth-date check digit.
pub const BIRTH_DIGIT_AT: usize = 19;
/// Position of the sex marker.
pub const SEX_AT: usize = 20;
/// Expiration-date span.
pub const EXPIRY_SPAN: Range<usize> = 21..27;
/// Position of the expiration-date check digit.
pub const EXPIRY_DIGIT_AT: usize = 27;
/// Offset where the personal-number field starts.
pub const PERSONAL_START: usize = 28;

/// The two recognized line-2 field conventions.
///
/// `Extended` is the default and matches the corpus this stack is
/// verified against: a 43-character line 2 with a 14-character personal
/// number and registry-enforced country codes. `Compact` is the legacy
/// convention: a 38-character line 2 with a 9-character personal number
/// and no registry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// 14-character personal number, 43-character line 2, registry check.
    #[default]
    Extended,
    /// 9-character personal number, 38-character line 2, no registry check.
    Compact,
}

impl LayoutVariant {
    /// Width of the personal-number field.
    pub fn personal_number_width(self) -> usize {
        match self {
            Self::Extended => 14,
            Self::Compact => 9,
        }
    }

    /// Offset range of the personal-number field in line 2.
    pub fn personal_number_span(self) -> Range<usize> {
        PERSONAL_START..PERSONAL_START + self.personal_number_width()
    }

    /// Position of the personal-number check digit (the final character).
    pub fn personal_digit_at(self) -> usize {
        self.line2_len() - 1
    }

    /// Exact line-2 length the validator's length gate demands.
    pub fn line2_len(self) -> usize {
        // Fixed prefix (28) + personal number + its check digit.
        PERSONAL_START + self.personal_number_width() + 1
    }

    /// Whether country codes are checked against the registry.
    pub fn enforces_registry(self) -> bool {
        matches!(self, Self::Extended)
    }
}

impl std::fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Extended => f.write_str("extended"),
            Self::Compact => f.write_str("compact"),
        }
    }
}
