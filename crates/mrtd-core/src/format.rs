//! # Fixed-Width Field Formatting
//!
//! Pads and truncates field values to the exact widths the MRZ layout
//! demands. Truncation is silent and deliberate: every downstream offset
//! in the two lines assumes its field occupies exactly its declared
//! width, so oversize input is cut rather than rejected.

/// The MRZ filler character, used to pad unused width.
pub const FILLER: char = '<';

/// Format a field to exactly `width` characters using the standard filler.
///
/// Shorter values are right-padded with `'<'`; longer values are silently
/// truncated. Counting is by character, so multi-byte input cannot split
/// a UTF-8 boundary.
pub fn pad_field(value: &str, width: usize) -> String {
    pad_field_with(value, width, FILLER)
}

/// Format a field to exactly `width` characters with an explicit fill.
pub fn pad_field_with(value: &str, width: usize, fill: char) -> String {
    let mut out: String = value.chars().take(width).collect();
    while out.chars().count() < width {
        out.push(fill);
    }
    out
}
