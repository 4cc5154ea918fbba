//! Catalog of records gathered from RIS sources.
//!
//! The catalog reads RIS files, turns every record into the variant its type
//! code maps to, and assembles the records into a single TEI `listBibl`.
//!
//! # Example
//!
//! ```
//! use ristei::Catalog;
//!
//! let mut catalog = Catalog::new();
//! catalog.parse_str("TY  - BOOK\nTI  - A Book\nER  -\n");
//!
//! let xml = catalog.to_xml_string().unwrap();
//! assert!(xml.contains("<title>A Book</title>"));
//! ```

use crate::config::TeiConfig;
use crate::error::{TeiError, ValueError, fields};
use crate::record::{BiblioItem, RecordFields};
use crate::ris::{FieldMap, RisParser};
use crate::xml::{Document, Element};
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, warn};

/// An ordered collection of bibliographic records.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<Box<dyn BiblioItem>>,
    config: TeiConfig,
}

impl Catalog {
    /// Creates an empty catalog with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog with a custom configuration.
    #[must_use]
    pub fn with_config(config: TeiConfig) -> Self {
        Self {
            records: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &TeiConfig {
        &self.config
    }

    /// Reads RIS files in order and adds their records.
    ///
    /// Files that cannot be read are logged and skipped.
    ///
    /// # Returns
    ///
    /// The number of files that were read.
    pub fn parse<I, P>(&mut self, source_files: I) -> usize
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut files_read = 0;
        for source_file in source_files {
            match read_source(source_file.as_ref()) {
                Ok(text) => {
                    let added = self.parse_str(&text);
                    debug!(
                        path = %source_file.as_ref().display(),
                        records = added,
                        "Read RIS file"
                    );
                    files_read += 1;
                }
                Err(e) => error!("{e}"),
            }
        }
        files_read
    }

    /// Parses RIS text and adds its records.
    ///
    /// # Returns
    ///
    /// The number of records that were added.
    pub fn parse_str(&mut self, text: &str) -> usize {
        RisParser::new()
            .parse(text)
            .into_iter()
            .map(|field_map| self.add_record(field_map))
            .filter(|added| *added)
            .count()
    }

    /// Adds a record, choosing its variant from the RIS type code.
    ///
    /// The type code is the value of the record's first field. Empty records
    /// and unsupported type codes are logged and skipped.
    ///
    /// # Returns
    ///
    /// `true` if the record was added.
    pub fn add_record(&mut self, field_map: FieldMap) -> bool {
        if field_map.is_empty() {
            warn!(line = field_map.line(), "Skipping empty record");
            return false;
        }

        let Some(code) = field_map.type_code() else {
            let missing = ValueError::MissingValue {
                field: fields::CITATION_TYPE,
                key: "TY",
            };
            warn!(line = field_map.line(), "Skipping record: {missing}");
            return false;
        };

        let Some(kind) = self.config.kind_for(code) else {
            warn!(line = field_map.line(), "{code} is not a supported RIS type.");
            return false;
        };

        let record_fields =
            RecordFields::new(field_map).with_date_style(self.config.date_style());
        self.records.push(kind.build(record_fields));
        true
    }

    pub fn records(&self) -> &[Box<dyn BiblioItem>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Assembles the `listBibl` document, one `biblStruct` per record in the
    /// order the records were added.
    pub fn to_xml(&self) -> Document {
        let mut root = Element::new("listBibl");
        for fragment in self.render_fragments() {
            root.append(fragment);
        }
        Document::new(root)
    }

    /// Serializes the document with the configured indentation.
    pub fn to_xml_string(&self) -> Result<String, TeiError> {
        self.to_xml().to_xml_string(self.config.indent())
    }

    /// Writes the document with the configured indentation.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), TeiError> {
        self.to_xml().write_to(writer, self.config.indent())
    }

    /// Renders every record into a detached fragment, preserving record order.
    fn render_fragments(&self) -> Vec<Element> {
        #[cfg(feature = "parallel")]
        {
            if self.config.run_in_parallel() {
                use rayon::prelude::*;
                return self.records.par_iter().map(|record| record.to_xml()).collect();
            }
        }

        self.records.iter().map(|record| record.to_xml()).collect()
    }
}

fn read_source(path: &Path) -> Result<String, TeiError> {
    std::fs::read_to_string(path).map_err(|source| TeiError::Read {
        path: path.to_path_buf(),
        source,
    })
}
