//! # mrtd-core — Foundational Types for the MRTD Stack
//!
//! Encodes, parses, and validates two-line Machine-Readable-Zone (MRZ)
//! passport records. This crate is the bedrock of the stack: it owns the
//! fixed-width layout geometry, the CRC-based check-digit algorithm, and
//! the country-code registry. The batch and CLI crates depend on
//! `mrtd-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Infallible hot path.** Encoding, parsing, and validation never
//!    error and never panic. Malformed input is normalized (padded or
//!    silently truncated) on the way in and rejected by the validator's
//!    gates on the way back — never by an exception mid-slice.
//!
//! 2. **Explicit layout variants.** The two circulating line-2 field
//!    conventions are both first-class [`LayoutVariant`]s; nothing picks
//!    one ambiently. Every encoder, parser, and validator is constructed
//!    for exactly one variant.
//!
//! 3. **Injected registry.** [`CodeRegistry`] is a caller-owned value
//!    passed by reference into [`MrzValidator`] — not hidden process-wide
//!    state. Published once, never mutated, freely shared across threads.
//!
//! 4. **Frozen check-digit algorithm.** The digit is CRC-32 mod 10,
//!    byte-compatible with the zlib reference, because existing encoded
//!    corpora must keep validating. It is documented as a corruption
//!    detector, not an ICAO 9303 check digit.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mrtd-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod checksum;
pub mod encode;
pub mod error;
pub mod format;
pub mod layout;
pub mod parse;
pub mod record;
pub mod registry;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use checksum::check_digit;
pub use encode::MrzEncoder;
pub use error::{LinePairParseError, RegistryError, ValidationFailure};
pub use format::{pad_field, FILLER};
pub use layout::LayoutVariant;
pub use parse::{Line1Fields, Line2Fields, MrzParser};
pub use record::{MrzLines, MrzRecord};
pub use registry::CodeRegistry;
pub use validate::MrzValidator;
