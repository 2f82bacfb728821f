//! # MRZ Parser
//!
//! The inverse of the encoder: slices the fixed offset ranges back out of
//! the two lines. Parsing is total — it never fails and never panics.
//! A short line simply yields empty or truncated slices (and `None` for
//! single-character positions past the end); whether that matters is the
//! validator's call, via its length gate, not a parse error.

use std::ops::Range;

use crate::layout::{
    LayoutVariant, BIRTH_DIGIT_AT, BIRTH_SPAN, COUNTRY_SPAN, EXPIRY_DIGIT_AT, EXPIRY_SPAN,
    PASSPORT_DIGIT_AT, PASSPORT_SPAN, SEX_AT,
};

/// Fields sliced out of line 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line1Fields {
    /// Document-type marker (first character), if the line is non-empty.
    pub document_type: Option<char>,
    /// Issuing-state code at offsets 2..5.
    pub country: String,
    /// Name field with fillers mapped back to spaces and ends trimmed.
    pub name: String,
}

/// Fields sliced out of line 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line2Fields {
    /// Passport number, as formatted (filler padding included).
    pub passport_number: String,
    /// Embedded passport-number check digit.
    pub passport_digit: Option<char>,
    /// Nationality code.
    pub country: String,
    /// Birth-date token.
    pub birth_date: String,
    /// Embedded birth-date check digit.
    pub birth_digit: Option<char>,
    /// Sex marker.
    pub sex: Option<char>,
    /// Expiration-date token.
    pub expiration_date: String,
    /// Embedded expiration-date check digit.
    pub expiry_digit: Option<char>,
    /// Personal number, as formatted (width depends on the layout variant).
    pub personal_number: String,
    /// Embedded personal-number check digit (the final character).
    pub personal_digit: Option<char>,
}

/// Slices MRZ lines back into fields for one layout variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct MrzParser {
    variant: LayoutVariant,
}

impl MrzParser {
    /// Create a parser for the given layout variant.
    pub fn new(variant: LayoutVariant) -> Self {
        Self { variant }
    }

    /// The layout variant this parser assumes.
    pub fn variant(&self) -> LayoutVariant {
        self.variant
    }

    /// Extract document type, issuing country, and name from line 1.
    pub fn parse_line1(&self, line1: &str) -> Line1Fields {
        let name_raw: String = line1.chars().skip(5).collect();
        Line1Fields {
            document_type: char_at(line1, 0),
            country: slice(line1, 2..5),
            name: name_raw.replace('<', " ").trim().to_string(),
        }
    }

    /// Extract the ten line-2 fields at their fixed offsets.
    pub fn parse_line2(&self, line2: &str) -> Line2Fields {
        Line2Fields {
            passport_number: slice(line2, PASSPORT_SPAN),
            passport_digit: char_at(line2, PASSPORT_DIGIT_AT),
            country: slice(line2, COUNTRY_SPAN),
            birth_date: slice(line2, BIRTH_SPAN),
            birth_digit: char_at(line2, BIRTH_DIGIT_AT),
            sex: char_at(line2, SEX_AT),
            expiration_date: slice(line2, EXPIRY_SPAN),
            expiry_digit: char_at(line2, EXPIRY_DIGIT_AT),
            personal_number: slice(line2, self.variant.personal_number_span()),
            personal_digit: char_at(line2, self.variant.personal_digit_at()),
        }
    }
}

/// Character-offset slice, empty or truncated when the line is short.
fn slice(line: &str, span: Range<usize>) -> String {
    line.chars()
        .skip(span.start)
        .take(span.end.saturating_sub(span.start))
        .collect()
}

/// Single character at a character offset, `None` past the end.
fn char_at(line: &str, at: usize) -> Option<char> {
    line.chars().nth(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LINE1: &str = "P<UTODOE<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";
    const LINE2: &str = "1234567892UTO8501012M30010171234567890<<<<6";

    #[test]
    fn test_parse_line1() {
        let fields = MrzParser::default().parse_line1(LINE1);
        assert_eq!(fields.document_type, Some('P'));
        assert_eq!(fields.country, "UTO");
        assert_eq!(fields.name, "DOE  JOHN");
    }

    #[test]
    fn test_parse_line2_fixed_offsets() {
        let fields = MrzParser::default().parse_line2(LINE2);
        assert_eq!(fields.passport_number, "123456789");
        assert_eq!(fields.passport_digit, Some('2'));
        assert_eq!(fields.country, "UTO");
        assert_eq!(fields.birth_date, "850101");
        assert_eq!(fields.birth_digit, Some('2'));
        assert_eq!(fields.sex, Some('M'));
        assert_eq!(fields.expiration_date, "300101");
        assert_eq!(fields.expiry_digit, Some('7'));
        assert_eq!(fields.personal_number, "1234567890<<<<");
        assert_eq!(fields.personal_digit, Some('6'));
    }

    #[test]
    fn test_compact_variant_personal_span() {
        let line2 = "PA55PORT98UTO6006060F3501013ID998<<<<1";
        let fields = MrzParser::new(LayoutVariant::Compact).parse_line2(line2);
        assert_eq!(fields.personal_number, "ID998<<<<");
        assert_eq!(fields.personal_digit, Some('1'));
    }

    #[test]
    fn test_short_line_yields_partial_fields() {
        let fields = MrzParser::default().parse_line2("123456789");
        assert_eq!(fields.passport_number, "123456789");
        assert_eq!(fields.passport_digit, None);
        assert_eq!(fields.country, "");
        assert_eq!(fields.personal_digit, None);
    }

    #[test]
    fn test_parse_returns_formatted_not_raw_values() {
        // Encoding pads short fields; parsing hands back the padded form,
        // not the caller's original text.
        let record = crate::record::MrzRecord {
            passport_number: "AB12".into(),
            country_code: "UTO".into(),
            birth_date: "850101".into(),
            sex: "F".into(),
            expiration_date: "300101".into(),
            personal_number: "P7".into(),
            ..Default::default()
        };
        let lines = crate::encode::MrzEncoder::default().encode(&record);
        let fields = MrzParser::default().parse_line2(&lines.line2);
        assert_eq!(fields.passport_number, "AB12<<<<<");
        assert_eq!(fields.personal_number, "P7<<<<<<<<<<<<");
    }

    #[test]
    fn test_empty_lines_do_not_panic() {
        let parser = MrzParser::default();
        let l1 = parser.parse_line1("");
        assert_eq!(l1.document_type, None);
        assert_eq!(l1.name, "");
        let l2 = parser.parse_line2("");
        assert_eq!(l2.passport_number, "");
    }

    proptest! {
        /// Parsing arbitrary text never panics, either variant.
        #[test]
        fn parse_is_total(line in ".*") {
            let _ = MrzParser::new(LayoutVariant::Extended).parse_line1(&line);
            let _ = MrzParser::new(LayoutVariant::Extended).parse_line2(&line);
            let _ = MrzParser::new(LayoutVariant::Compact).parse_line2(&line);
        }
    }
}
