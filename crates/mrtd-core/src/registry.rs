//! # Country-Code Registry
//!
//! The immutable set of recognized three-letter country/nationality
//! codes. Populated once before any validation runs — from a JSON array
//! file or an in-memory iterator — then shared by reference. There is no
//! mutation API: the registry is a value, not ambient process state, and
//! holds no external resources.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::RegistryError;

/// An immutable membership set of valid country codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeRegistry {
    codes: HashSet<String>,
}

impl CodeRegistry {
    /// Build a registry from an iterator of codes.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a registry from a JSON file containing an array of code strings.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or is not a
    /// JSON array of strings.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let raw = fs::read_to_string(path)?;
        let codes: Vec<String> = serde_json::from_str(&raw)?;
        tracing::debug!(count = codes.len(), "loaded country-code registry");
        Ok(Self::from_codes(codes))
    }

    /// Membership test for a code.
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Number of codes in the registry.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_membership() {
        let registry = CodeRegistry::from_codes(["UTO", "GBN", "USA"]);
        assert!(registry.contains("UTO"));
        assert!(!registry.contains("XXX"));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["UTO", "GBN"]"#).unwrap();
        let registry = CodeRegistry::load(file.path()).unwrap();
        assert!(registry.contains("GBN"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_load_rejects_non_array_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"codes": []}}"#).unwrap();
        assert!(matches!(
            CodeRegistry::load(file.path()),
            Err(crate::error::RegistryError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            CodeRegistry::load("/nonexistent/valid_codes.json"),
            Err(crate::error::RegistryError::Io(_))
        ));
    }
}
