//! # MRZ Validator
//!
//! Decides whether a line pair is a well-formed document. Three gates, in
//! order, each terminal on failure:
//!
//! 1. **Length** — line 2 must be exactly the variant's declared length.
//!    This runs first so no later gate ever reads past the end of a
//!    malformed line.
//! 2. **Registry** — both country codes must be known (`Extended` only).
//! 3. **Digits** — the four check digits are recomputed over the parsed
//!    field slices and compared against the embedded characters.
//!
//! The contract is the boolean verdict. Failure reasons are available
//! only through the [`validate_detailed`](MrzValidator::validate_detailed)
//! side channel and as `tracing` debug events. The validator never errors
//! and never panics, for any input; it holds no mutable state, so repeated
//! calls on the same pair always agree.

use crate::checksum::{check_digit, digit_char};
use crate::error::ValidationFailure;
use crate::layout::LayoutVariant;
use crate::parse::MrzParser;
use crate::registry::CodeRegistry;

/// Validates encoded line pairs against one layout variant and a
/// caller-owned code registry.
#[derive(Debug, Clone, Copy)]
pub struct MrzValidator<'a> {
    parser: MrzParser,
    registry: &'a CodeRegistry,
}

impl<'a> MrzValidator<'a> {
    /// Create a validator for the given variant, borrowing the registry.
    ///
    /// The registry is only consulted when the variant enforces it.
    pub fn new(variant: LayoutVariant, registry: &'a CodeRegistry) -> Self {
        Self {
            parser: MrzParser::new(variant),
            registry,
        }
    }

    /// The layout variant this validator assumes.
    pub fn variant(&self) -> LayoutVariant {
        self.parser.variant()
    }

    /// Boolean verdict for a line pair.
    pub fn validate(&self, line1: &str, line2: &str) -> bool {
        match self.validate_detailed(line1, line2) {
            Ok(()) => true,
            Err(failure) => {
                tracing::debug!(%failure, "line pair rejected");
                false
            }
        }
    }

    /// Diagnostic form of [`validate`](Self::validate): reports which gate
    /// rejected the pair. Side channel only — callers deciding validity
    /// should use the boolean form.
    pub fn validate_detailed(
        &self,
        line1: &str,
        line2: &str,
    ) -> Result<(), ValidationFailure> {
        let variant = self.variant();

        // Gate 1: length. Terminal, so no later gate slices a short line.
        let actual = line2.chars().count();
        if actual != variant.line2_len() {
            return Err(ValidationFailure::LengthMismatch {
                expected: variant.line2_len(),
                actual,
            });
        }

        let l1 = self.parser.parse_line1(line1);
        let l2 = self.parser.parse_line2(line2);

        // Gate 2: registry membership of both country codes.
        if variant.enforces_registry() {
            if !self.registry.contains(&l1.country) {
                return Err(ValidationFailure::UnknownCode {
                    code: l1.country,
                    location: "line 1",
                });
            }
            if !self.registry.contains(&l2.country) {
                return Err(ValidationFailure::UnknownCode {
                    code: l2.country,
                    location: "line 2",
                });
            }
        }

        // Gate 3: recompute each digit over the slice the parser extracted.
        check_field("passport number", &l2.passport_number, l2.passport_digit)?;
        check_field("birth date", &l2.birth_date, l2.birth_digit)?;
        check_field("expiration date", &l2.expiration_date, l2.expiry_digit)?;
        check_field("personal number", &l2.personal_number, l2.personal_digit)?;

        Ok(())
    }
}

/// Compare a recomputed digit with the embedded character.
fn check_field(
    field: &'static str,
    value: &str,
    embedded: Option<char>,
) -> Result<(), ValidationFailure> {
    let computed = digit_char(check_digit(value));
    // The length gate guarantees the position exists; '\0' is unreachable.
    let embedded = embedded.unwrap_or('\0');
    if embedded != computed {
        return Err(ValidationFailure::DigitMismatch {
            field,
            embedded,
            computed,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::MrzEncoder;
    use crate::record::MrzRecord;

    const LINE1: &str = "P<UTODOE<<JOHN<<<<<<<<<<<<<<<<<<<<<<<<<<<<<<";
    const LINE2: &str = "1234567892UTO8501012M30010171234567890<<<<6";

    fn registry() -> CodeRegistry {
        CodeRegistry::from_codes(["UTO", "GBN"])
    }

    #[test]
    fn test_valid_pair_accepted() {
        let registry = registry();
        let validator = MrzValidator::new(LayoutVariant::Extended, &registry);
        assert!(validator.validate(LINE1, LINE2));
    }

    #[test]
    fn test_length_gate_rejects_42_and_44() {
        let registry = registry();
        let validator = MrzValidator::new(LayoutVariant::Extended, &registry);

        let short: String = LINE2.chars().take(42).collect();
        let long = format!("{LINE2}<");
        assert_eq!(long.chars().count(), 44);

        assert_eq!(
            validator.validate_detailed(LINE1, &short),
            Err(ValidationFailure::LengthMismatch {
                expected: 43,
                actual: 42
            })
        );
        assert_eq!(
            validator.validate_detailed(LINE1, &long),
            Err(ValidationFailure::LengthMismatch {
                expected: 43,
                actual: 44
            })
        );
    }

    #[test]
    fn test_length_gate_is_terminal() {
        // A 44-character line built from a fully valid 43-character one is
        // rejected on length alone, digits notwithstanding.
        let registry = registry();
        let validator = MrzValidator::new(LayoutVariant::Extended, &registry);
        let padded = format!("L898902C30GBN7408123F1204153ZE184226B8<<<<0{}", '<');
        assert_eq!(padded.chars().count(), 44);
        assert!(!validator.validate(LINE1, &padded));
    }

    #[test]
    fn test_unknown_code_rejected_in_extended() {
        let registry = registry();
        let validator = MrzValidator::new(LayoutVariant::Extended, &registry);
        let line2 = LINE2.replace("UTO", "XXX");
        assert!(matches!(
            validator.validate_detailed(LINE1, &line2),
            Err(ValidationFailure::UnknownCode { location: "line 2", .. })
        ));

        let line1 = LINE1.replace("UTO", "XXX");
        assert!(matches!(
            validator.validate_detailed(&line1, LINE2),
            Err(ValidationFailure::UnknownCode { location: "line 1", .. })
        ));
    }

    #[test]
    fn test_compact_variant_skips_registry() {
        // Empty registry, unknown codes everywhere — compact still accepts
        // a pair whose digits check out.
        let registry = CodeRegistry::default();
        let validator = MrzValidator::new(LayoutVariant::Compact, &registry);
        let line2 = "PA55PORT98UTO6006060F3501013ID998<<<<1";
        assert!(validator.validate(LINE1, line2));
    }

    #[test]
    fn test_digit_mismatch_rejected() {
        let registry = registry();
        let validator = MrzValidator::new(LayoutVariant::Extended, &registry);
        // Flip the final (personal-number) digit.
        let mut line2: String = LINE2.chars().take(42).collect();
        line2.push('9');
        assert_eq!(
            validator.validate_detailed(LINE1, &line2),
            Err(ValidationFailure::DigitMismatch {
                field: "personal number",
                embedded: '9',
                computed: '6',
            })
        );
    }

    #[test]
    fn test_empty_input_rejected_not_panicking() {
        let registry = registry();
        let validator = MrzValidator::new(LayoutVariant::Extended, &registry);
        assert!(!validator.validate("", ""));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let registry = registry();
        let validator = MrzValidator::new(LayoutVariant::Extended, &registry);
        let first = validator.validate(LINE1, LINE2);
        for _ in 0..8 {
            assert_eq!(validator.validate(LINE1, LINE2), first);
        }
    }

    #[test]
    fn test_encode_validate_round_trip() {
        // Exact-width fields, so the raw values the encoder hashed are the
        // same bytes the validator re-reads from the line.
        let record = MrzRecord {
            issuing_country: "UTO".into(),
            last_name: "ERIKSSON".into(),
            given_name: "ANNA MARIA".into(),
            passport_number: "L898902C3".into(),
            country_code: "GBN".into(),
            birth_date: "740812".into(),
            sex: "F".into(),
            expiration_date: "120415".into(),
            personal_number: "ZE184226B8".into(),
        };
        let registry = registry();
        for variant in [LayoutVariant::Extended, LayoutVariant::Compact] {
            let lines = MrzEncoder::new(variant).encode(&record);
            let validator = MrzValidator::new(variant, &registry);
            assert!(
                validator.validate(&lines.line1, &lines.line2),
                "round trip failed for {variant}"
            );
        }
    }
}
