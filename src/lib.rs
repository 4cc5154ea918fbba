//! Convert RIS citations into TEI `biblStruct` bibliographies.
//!
//! `ristei` reads bibliographic records in the RIS tagged-field format and
//! renders them as a TEI `listBibl`, one `biblStruct` per record.
//!
//! # Features
//!
//! - `parallel` - Render record fragments on the rayon thread pool (enabled by default)
//! - `regex` - Use the `regex` crate (enabled by default)
//! - `lite` - Use `regex-lite` instead, for smaller binaries
//!
//! # Key Characteristics
//!
//! - **Supported RIS types**:
//!   - `JOUR` as journal articles (`analytic` + `monogr`)
//!   - `BOOK`, `EDBOOK` and `EBOOK` as books (`monogr` and `series`)
//!   - further codes can be mapped onto these two through [`TeiConfig`]
//!
//! - **Field clean-up**:
//!   - RIS dates (`year/month/day/season`) become `<date when="...">` elements
//!   - `"Last, First"` names become `persName` with `surname` and `forename`
//!   - page ranges are inferred from `SP` when `EP` is missing
//!   - `DOI:` prefixes are dropped and straight apostrophes become `’`
//!
//! # Basic Usage
//!
//! ```rust
//! use ristei::{Catalog, TeiConfig};
//!
//! let input = r#"TY  - JOUR
//! TI  - Example Article
//! AU  - Smith, John
//! JO  - Journal of Examples
//! SP  - 100-110
//! ER  -"#;
//!
//! let mut catalog = Catalog::with_config(TeiConfig::new());
//! catalog.parse_str(input);
//!
//! let xml = catalog.to_xml_string().unwrap();
//! assert!(xml.contains(r#"<biblScope unit="page" from="100" to="110">100–110</biblScope>"#));
//! ```
//!
//! # Error Handling
//!
//! Problems with single files, records or fields never abort a conversion.
//! They are reported through [`tracing`] and the affected file, record or
//! element is left out. Only writing the final document can fail, with a
//! [`TeiError`].
//!
//! # Thread Safety
//!
//! Records are `Send + Sync`. With [`TeiConfig::set_run_in_parallel`] the
//! catalog renders records concurrently and still assembles them in input
//! order.

pub mod catalog;
pub mod config;
pub mod date;
pub mod error;
pub mod record;
pub mod ris;
pub mod xml;

// Reexports
pub use catalog::Catalog;
pub use config::TeiConfig;
pub use date::{DateAttrStyle, RisDate};
pub use error::{InvalidDateError, TeiError, ValueError};
pub use record::{BiblioItem, Book, Journal, RecordKind};
pub use xml::{Document, Element};

mod regex;
mod utils;

pub use utils::{fix_typography, strip_doi_prefix};

/// Converts RIS text into a serialized TEI `listBibl` document.
///
/// # Arguments
///
/// * `content` - RIS text holding one or more records
/// * `config` - Type mapping and output settings
///
/// # Examples
///
/// ```
/// use ristei::{TeiConfig, convert_str};
///
/// let content = r#"TY  - BOOK
/// TI  - Example Title
/// ER  -"#;
///
/// let xml = convert_str(content, &TeiConfig::new()).unwrap();
/// assert!(xml.contains("<title>Example Title</title>"));
/// ```
pub fn convert_str(content: &str, config: &TeiConfig) -> Result<String, TeiError> {
    let mut catalog = Catalog::with_config(config.clone());
    catalog.parse_str(content);
    catalog.to_xml_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_str_empty_input() {
        let xml = convert_str("", &TeiConfig::new()).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<listBibl/>"));
    }

    #[test]
    fn test_convert_str_book() {
        let content = "TY  - BOOK\nTI  - Don't Stop\nAU  - Smith, John\nPY  - 2001\nER  -\n";
        let xml = convert_str(content, &TeiConfig::new()).unwrap();
        assert!(xml.contains("<title>Don’t Stop</title>"));
        assert!(xml.contains("<surname>Smith</surname>"));
        assert!(xml.contains("<forename>John</forename>"));
        assert!(xml.contains("<date when=\"2001\">2001</date>"));
    }
}
