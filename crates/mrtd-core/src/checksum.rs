//! # Check Digit Computation
//!
//! Derives the single base-10 integrity digit embedded after each line-2
//! field: the IEEE CRC-32 of the field's raw bytes, reduced modulo 10.
//!
//! ## Compatibility Invariant
//!
//! The digit must match `zlib.crc32(field) % 10` byte-for-byte — documents
//! encoded by the legacy toolchain are re-verified with this function, so
//! the algorithm is frozen. `crc32fast` implements the same IEEE
//! polynomial as zlib.
//!
//! This is a corruption *detector*, not an ICAO 9303 check digit and not a
//! collision-resistant digest: two differing fields usually, but not
//! always, produce different digits.

/// Compute the check digit for a field: CRC-32 of the raw bytes, mod 10.
///
/// Pure and total — every input, including the empty string, yields a
/// digit in `0..=9`. The same input always yields the same digit, across
/// processes and over time.
pub fn check_digit(field: &str) -> u8 {
    (crc32fast::hash(field.as_bytes()) % 10) as u8
}

/// Render a check digit as the character embedded in the MRZ line.
pub fn digit_char(digit: u8) -> char {
    debug_assert!(digit < 10);
    (b'0' + digit) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_digits_match_zlib_reference() {
        // Expected values computed with Python's zlib.crc32(x) % 10.
        assert_eq!(check_digit("850101"), 2);
        assert_eq!(check_digit("123456789"), 2);
        assert_eq!(check_digit("300101"), 7);
        assert_eq!(check_digit("L898902C3"), 0);
        assert_eq!(check_digit("740812"), 3);
        assert_eq!(check_digit("ZE184226B8<<<<"), 0);
    }

    #[test]
    fn test_empty_field_yields_digit() {
        assert_eq!(check_digit(""), 0);
    }

    #[test]
    fn test_single_character_change_detected() {
        // Lossy digest, so this is not guaranteed universally — but it
        // must hold for the corpus vectors.
        assert_ne!(check_digit("850101"), check_digit("850102"));
    }

    #[test]
    fn test_digit_char_rendering() {
        assert_eq!(digit_char(0), '0');
        assert_eq!(digit_char(9), '9');
    }

    proptest! {
        /// The digit is deterministic and always in range.
        #[test]
        fn check_digit_deterministic_and_in_range(field in ".*") {
            let a = check_digit(&field);
            let b = check_digit(&field);
            prop_assert_eq!(a, b);
            prop_assert!(a < 10);
        }
    }
}
