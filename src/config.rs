//! RIS type mapping definitions and conversion configuration.
//!
//! This module defines the default RIS type table and the configuration
//! structure shared by the catalog and the command-line tool.

use crate::date::DateAttrStyle;
use crate::record::RecordKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default RIS type codes and the record variant each one renders as
pub(crate) const DEFAULT_TYPES: &[(&str, RecordKind)] = &[
    ("JOUR", RecordKind::Journal),
    ("BOOK", RecordKind::Book),
    ("EDBOOK", RecordKind::Book),
    ("EBOOK", RecordKind::Book),
];

/// Default number of spaces per indentation level in the output.
pub const DEFAULT_INDENT: usize = 2;

/// Configuration for RIS to TEI conversion.
///
/// # Default Mappings
///
/// - "JOUR" → journal
/// - "BOOK", "EDBOOK", "EBOOK" → book
///
/// # Examples
///
/// ```
/// use ristei::{DateAttrStyle, TeiConfig};
/// use ristei::record::RecordKind;
///
/// let mut config = TeiConfig::new();
/// config
///     .set_type_mapping("CHAP", RecordKind::Book)
///     .set_date_style(DateAttrStyle::ZeroPadded)
///     .set_indent(4);
/// assert_eq!(config.kind_for("CHAP"), Some(RecordKind::Book));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeiConfig {
    /// RIS type code to record variant
    pub(crate) type_map: HashMap<String, RecordKind>,
    /// Spaces per indentation level; zero disables indentation
    pub(crate) indent: usize,
    /// How months are written in date `when` attributes
    pub(crate) date_style: DateAttrStyle,
    /// Render record fragments on the rayon thread pool
    pub(crate) run_in_parallel: bool,
}

impl Default for TeiConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TeiConfig {
    /// Creates a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        let mut config = Self {
            type_map: HashMap::new(),
            indent: DEFAULT_INDENT,
            date_style: DateAttrStyle::default(),
            run_in_parallel: false,
        };
        config.set_default_types();
        config
    }

    /// Sets the default type mappings
    fn set_default_types(&mut self) {
        for (code, kind) in DEFAULT_TYPES {
            self.type_map.insert(code.to_string(), *kind);
        }
    }

    /// Maps a RIS type code onto a record variant, replacing any existing mapping
    pub fn set_type_mapping(&mut self, code: &str, kind: RecordKind) -> &mut Self {
        self.type_map.insert(code.trim().to_string(), kind);
        self
    }

    /// Removes a RIS type code, so records of that type are skipped
    pub fn remove_type_mapping(&mut self, code: &str) -> &mut Self {
        self.type_map.remove(code.trim());
        self
    }

    /// Sets the number of spaces per indentation level
    pub fn set_indent(&mut self, indent: usize) -> &mut Self {
        self.indent = indent;
        self
    }

    /// Sets how months are written in date attributes
    pub fn set_date_style(&mut self, date_style: DateAttrStyle) -> &mut Self {
        self.date_style = date_style;
        self
    }

    /// Sets whether record fragments are rendered in parallel
    pub fn set_run_in_parallel(&mut self, run_in_parallel: bool) -> &mut Self {
        self.run_in_parallel = run_in_parallel;
        self
    }

    /// Record variant for a RIS type code, if the code is supported
    pub fn kind_for(&self, code: &str) -> Option<RecordKind> {
        self.type_map.get(code.trim()).copied()
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn date_style(&self) -> DateAttrStyle {
        self.date_style
    }

    pub fn run_in_parallel(&self) -> bool {
        self.run_in_parallel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("JOUR", Some(RecordKind::Journal))]
    #[case("BOOK", Some(RecordKind::Book))]
    #[case("EDBOOK", Some(RecordKind::Book))]
    #[case("EBOOK", Some(RecordKind::Book))]
    #[case(" JOUR ", Some(RecordKind::Journal))]
    #[case("CHAP", None)]
    #[case("jour", None)]
    fn test_default_types(#[case] code: &str, #[case] expected: Option<RecordKind>) {
        assert_eq!(TeiConfig::new().kind_for(code), expected);
    }

    #[test]
    fn test_custom_type_mapping() {
        let mut config = TeiConfig::new();
        config
            .set_type_mapping("MGZN", RecordKind::Journal)
            .remove_type_mapping("EBOOK");

        assert_eq!(config.kind_for("MGZN"), Some(RecordKind::Journal));
        assert_eq!(config.kind_for("EBOOK"), None);
        assert_eq!(config.kind_for("BOOK"), Some(RecordKind::Book));
    }

    #[test]
    fn test_defaults() {
        let config = TeiConfig::default();
        assert_eq!(config.indent(), DEFAULT_INDENT);
        assert_eq!(config.date_style(), DateAttrStyle::Verbatim);
        assert!(!config.run_in_parallel());
    }

    #[test]
    fn test_setters_chain() {
        let mut config = TeiConfig::new();
        config
            .set_indent(0)
            .set_date_style(DateAttrStyle::ZeroPadded)
            .set_run_in_parallel(true);

        assert_eq!(config.indent(), 0);
        assert_eq!(config.date_style(), DateAttrStyle::ZeroPadded);
        assert!(config.run_in_parallel());
    }
}
