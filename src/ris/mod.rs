//! RIS format parser implementation.
//!
//! Splits RIS formatted text into flat per-record [`FieldMap`]s. Only the
//! `"  -"` separator and the `ER` lines closing records are relied upon.
//!
//! # Example
//!
//! ```
//! use ristei::ris::{RisParser, RisTag};
//!
//! let input = r#"TY  - JOUR
//! TI  - Example Title
//! AU  - Smith, John
//! ER  -"#;
//!
//! let records = RisParser::new().parse(input);
//! assert_eq!(records[0].get_first(&RisTag::Title), Some("Example Title"));
//! ```

mod parse;
mod structure;
mod tags;

pub use parse::SEPARATOR;
pub use structure::FieldMap;
pub use tags::RisTag;

use parse::ris_parse;

/// Parser for RIS format records.
///
/// RIS is a standardized format for bibliographic citations that uses two-letter
/// tags at the start of each line to denote different citation fields.
#[derive(Debug, Clone, Default)]
pub struct RisParser;

impl RisParser {
    /// Creates a new RIS parser instance.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parses a string containing one or more RIS records.
    pub fn parse(&self, input: &str) -> Vec<FieldMap> {
        ris_parse(input)
    }
}
