//! # MRZ Encoder
//!
//! Builds the two fixed-width lines from a structured record. Encoding is
//! infallible: missing fields are empty text, undersize fields are padded
//! with filler, oversize fields are silently truncated to their declared
//! width (the offsets in [`crate::layout`] depend on that).
//!
//! Check-digit sourcing is intentionally uneven and must stay that way
//! for corpus compatibility: the passport-number, birth-date, and
//! expiration-date digits are computed over the *raw* field values, while
//! the personal-number digit is computed over the *formatted* (padded)
//! field — the same bytes the validator later re-reads out of the line.
//! An empty personal number embeds the filler character in place of a
//! digit.

use crate::checksum::{check_digit, digit_char};
use crate::format::{pad_field, FILLER};
use crate::layout::{LayoutVariant, COUNTRY_WIDTH, DATE_WIDTH, NAME_WIDTH, PASSPORT_WIDTH};
use crate::record::{MrzLines, MrzRecord};

/// Encodes structured records into MRZ line pairs for one layout variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrzEncoder {
    variant: LayoutVariant,
}

impl MrzEncoder {
    /// Create an encoder for the given layout variant.
    pub fn new(variant: LayoutVariant) -> Self {
        Self { variant }
    }

    /// The layout variant this encoder targets.
    pub fn variant(&self) -> LayoutVariant {
        self.variant
    }

    /// Encode a record into its two MRZ lines.
    pub fn encode(&self, record: &MrzRecord) -> MrzLines {
        MrzLines {
            line1: self.encode_line1(record),
            line2: self.encode_line2(record),
        }
    }

    /// Line 1: type marker, filler, issuing country, 39-character name field.
    fn encode_line1(&self, record: &MrzRecord) -> String {
        let name = format!("{}<<{}", record.last_name, record.given_name).replace(' ', "<");
        format!(
            "P{}{}{}",
            FILLER,
            pad_field(&record.issuing_country, COUNTRY_WIDTH),
            pad_field(&name, NAME_WIDTH),
        )
    }

    /// Line 2: each field padded to its width, each followed by its digit.
    fn encode_line2(&self, record: &MrzRecord) -> String {
        let personal = pad_field(
            &record.personal_number,
            self.variant.personal_number_width(),
        );
        let personal_digit = if record.personal_number.is_empty() {
            FILLER
        } else {
            digit_char(check_digit(&personal))
        };

        format!(
            "{}{}{}{}{}{}{}{}{}{}",
            pad_field(&record.passport_number, PASSPORT_WIDTH),
            digit_char(check_digit(&record.passport_number)),
            pad_field(&record.country_code, COUNTRY_WIDTH),
            pad_field(&record.birth_date, DATE_WIDTH),
            digit_char(check_digit(&record.birth_date)),
            record.sex,
            pad_field(&record.expiration_date, DATE_WIDTH),
            digit_char(check_digit(&record.expiration_date)),
            personal,
            personal_digit,
        )
    }
}
