//! Error types for RIS to TEI conversion.
//!
//! Only [`TeiError`] ever reaches a caller of the conversion pipeline. Date and
//! value errors are raised while rendering single fields; the record renderers
//! log them and leave the offending element out.

use std::path::PathBuf;
use thiserror::Error;

/// Field name constants for consistent error reporting.
pub mod fields {
    pub const AUTHOR: &str = "author";
    pub const PAGES: &str = "pages";
    pub const TITLE: &str = "title";
    pub const CITATION_TYPE: &str = "citation_type";
}

/// Top-level error type for conversion operations.
#[derive(Error, Debug)]
pub enum TeiError {
    #[error("Unable to read file \"{}\": {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to write TEI document: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// A RIS date string that cannot be turned into a TEI date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidDateError {
    #[error("Empty date")]
    Empty,

    #[error("Missing year in date \"{0}\"")]
    MissingYear(String),

    #[error("Year is not a number in date \"{0}\"")]
    InvalidYear(String),

    #[error("Month must be a number between 1 and 12, found \"{0}\"")]
    InvalidMonth(String),
}

/// Specific value-level errors raised while rendering a record field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Missing value for {key}")]
    MissingValue {
        field: &'static str,
        key: &'static str,
    },

    #[error("Bad value for {key}: \"{value}\" ({reason})")]
    BadValue {
        field: &'static str,
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_error_display() {
        let error = ValueError::MissingValue {
            field: fields::PAGES,
            key: "EP",
        };
        assert_eq!(format!("{}", error), "Missing value for EP");

        let error = ValueError::BadValue {
            field: fields::PAGES,
            key: "SP",
            value: "100".to_string(),
            reason: "no end page".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Bad value for SP: \"100\" (no end page)"
        );
    }

    #[test]
    fn test_invalid_date_display() {
        assert_eq!(InvalidDateError::Empty.to_string(), "Empty date");
        assert_eq!(
            InvalidDateError::InvalidMonth("13".to_string()).to_string(),
            "Month must be a number between 1 and 12, found \"13\""
        );
    }

    #[test]
    fn test_read_error_display() {
        let error = TeiError::Read {
            path: PathBuf::from("missing.ris"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let display = error.to_string();
        assert!(display.contains("missing.ris"));
        assert!(display.contains("not found"));
    }
}
