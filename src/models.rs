//! Core data structures and types for ICARTT processing.
//!
//! Defines the cached format info, per-variable definitions, and the
//! best-effort metadata record returned by the header extractors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Format information declared on the first line of an ICARTT file.
///
/// Computed once when a reader is constructed and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Path the reader is bound to
    pub path: PathBuf,

    /// Number of header lines, including the first line itself.
    /// The data column-name row sits at this 1-indexed line.
    pub header_length: usize,

    /// Declared format index (e.g. "1001" for 1D time series)
    pub ffi: String,
}

/// One entry from the header's variable-definition block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDef {
    pub name: String,
    pub unit: Option<String>,
    pub description: Option<String>,
    /// Per-variable missing indicator, if known
    pub missing: Option<f64>,
}

impl VariableDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit: None,
            description: None,
            missing: None,
        }
    }
}

/// Best-effort descriptive metadata extracted from the header.
///
/// Keys come from the layout profile plus `path`, `header_length` and `ffi`.
/// Absent keys mean "unknown"; empty values are never stored.
pub type MetadataRecord = BTreeMap<&'static str, String>;

/// Options controlling data table extraction.
#[derive(Debug, Clone)]
pub struct TableOptions {
    /// Explicit missing-value tokens. When `None`, tokens are detected from
    /// the header with a fixed fallback set.
    pub missing_tokens: Option<Vec<String>>,

    /// Trim surrounding whitespace from column names after parsing
    pub strip_colnames: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            missing_tokens: None,
            strip_colnames: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_def_new_has_no_optional_fields() {
        let var = VariableDef::new("TEMP");
        assert_eq!(var.name, "TEMP");
        assert_eq!(var.unit, None);
        assert_eq!(var.description, None);
        assert_eq!(var.missing, None);
    }

    #[test]
    fn test_table_options_default() {
        let options = TableOptions::default();
        assert!(options.missing_tokens.is_none());
        assert!(options.strip_colnames);
    }
}
