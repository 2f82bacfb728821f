//! # mrtd-cli — MRTD Stack Command-Line Interface
//!
//! Replaces the interactive menu loop of the legacy Python toolchain with
//! a structured clap-based CLI. The JSON file formats are preserved so
//! existing `user_data.json` / `mrz_input.json` / `valid_codes.json`
//! files keep working.
//!
//! ## Subcommands
//!
//! - `encode` — Encode a record batch into MRZ line pairs
//! - `validate` — Validate a line-pair batch against the code registry
//! - `registry` — Inspect the registry or test a single code
//! - `bench` — Timing CSV over growing input prefixes
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `mrtd-core`/`mrtd-batch` — no layout
//!   or checksum logic here.

pub mod bench;
pub mod encode;
pub mod registry;
pub mod validate;

use clap::ValueEnum;
use mrtd_core::LayoutVariant;

/// Layout variant selector, shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum VariantOpt {
    /// 14-character personal number, 43-character line 2, registry check.
    #[default]
    Extended,
    /// 9-character personal number, 38-character line 2, no registry check.
    Compact,
}

impl VariantOpt {
    /// Map to the core layout variant.
    pub fn layout(self) -> LayoutVariant {
        match self {
            Self::Extended => LayoutVariant::Extended,
            Self::Compact => LayoutVariant::Compact,
        }
    }
}
