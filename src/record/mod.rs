//! Bibliographic records and their TEI rendering.
//!
//! Every supported RIS type maps onto one record variant. The variants share
//! the field helpers of [`RecordFields`] and only decide which TEI parts
//! (`analytic`, `monogr`, `series`) they produce.
//!
//! # Example
//!
//! ```
//! use ristei::record::{BiblioItem, Journal, RecordFields};
//! use ristei::ris::FieldMap;
//!
//! let fields = FieldMap::from_pairs([
//!     ("TY", "JOUR"),
//!     ("TI", "On Things"),
//!     ("JO", "Journal of Stuff"),
//! ]);
//! let journal = Journal::new(RecordFields::new(fields));
//! let struct_ = journal.to_xml();
//! assert!(struct_.child("analytic").is_some());
//! assert!(struct_.child("monogr").is_some());
//! ```

mod book;
mod journal;

pub use book::Book;
pub use journal::Journal;

use crate::date::{DateAttrStyle, RisDate};
use crate::error::{ValueError, fields};
use crate::ris::{FieldMap, RisTag};
use crate::utils::{fix_typography, split_person_name};
use crate::xml::Element;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The TEI rendering contract shared by all record variants.
///
/// Variants override the parts that differ; the defaults render nothing for
/// `analytic` and `monogr` and a title-only series for `series`.
pub trait BiblioItem: std::fmt::Debug + Send + Sync {
    /// Shared record state.
    fn fields(&self) -> &RecordFields;

    /// The part describing the contained work, such as an article.
    fn analytic(&self) -> Option<Element> {
        None
    }

    /// The part describing the containing publication.
    fn monogr(&self) -> Option<Element> {
        None
    }

    fn series(&self) -> Option<Element> {
        self.fields().series_element()
    }

    /// Renders the record as a detached `biblStruct` element.
    fn to_xml(&self) -> Element {
        let mut struct_ = Element::new("biblStruct");
        struct_.append_opt(self.analytic());
        struct_.append_opt(self.monogr());
        struct_.append_opt(self.series());
        struct_
    }
}

/// Record variants a RIS type code can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Book,
    Journal,
}

impl RecordKind {
    /// Builds the variant for this kind.
    pub fn build(self, fields: RecordFields) -> Box<dyn BiblioItem> {
        match self {
            RecordKind::Book => Box::new(Book::new(fields)),
            RecordKind::Journal => Box::new(Journal::new(fields)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Book => "book",
            RecordKind::Journal => "journal",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "book" => Ok(RecordKind::Book),
            "journal" => Ok(RecordKind::Journal),
            other => Err(format!(
                "unknown record kind \"{}\" (expected \"book\" or \"journal\")",
                other
            )),
        }
    }
}

const TITLE_TAGS: &[RisTag] = &[RisTag::Title, RisTag::TitleAlternative];
const SERIES_TITLE_TAGS: &[RisTag] = &[RisTag::SecondaryTitle, RisTag::TertiaryTitle];
const DATE_TAGS: &[RisTag] = &[RisTag::DatePrimary, RisTag::PublicationYear];

/// State and field helpers common to every record variant.
#[derive(Debug, Clone)]
pub struct RecordFields {
    values: FieldMap,
    authors: Vec<String>,
    editors: Vec<String>,
    date_style: DateAttrStyle,
}

impl RecordFields {
    pub fn new(values: FieldMap) -> Self {
        let authors = values.values_where(RisTag::is_author_tag);
        let editors = values.values_where(RisTag::is_editor_tag);
        Self {
            values,
            authors,
            editors,
            date_style: DateAttrStyle::default(),
        }
    }

    /// Sets how the month is written in the date `when` attribute.
    #[must_use]
    pub fn with_date_style(mut self, date_style: DateAttrStyle) -> Self {
        self.date_style = date_style;
        self
    }

    pub fn values(&self) -> &FieldMap {
        &self.values
    }

    /// Author names (`AU`, `A1`) in input order.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Editor names (`A3`) in input order.
    pub fn editors(&self) -> &[String] {
        &self.editors
    }

    /// Builds a text element from the first of `tags` that holds a value.
    ///
    /// The value goes through typographic cleanup. `attribute` is an optional
    /// `(name, value)` pair set on the element.
    pub fn field_element(
        &self,
        name: &str,
        tags: &[RisTag],
        attribute: Option<(&str, &str)>,
    ) -> Option<Element> {
        let value = self.values.first_of(tags)?;
        let mut element = Element::with_text(name, fix_typography(value));
        if let Some((attr_name, attr_value)) = attribute {
            element.set_attribute(attr_name, attr_value);
        }
        Some(element)
    }

    /// Builds a `persName` from a `"Last, First"` name.
    ///
    /// A name without a comma is kept whole as the surname.
    pub fn person(&self, name: &str) -> Option<Element> {
        let mut pers_name = Element::new("persName");
        match split_person_name(name) {
            Ok((surname, forename)) => {
                pers_name.append(Element::with_text("surname", fix_typography(surname)));
                if let Some(forename) = forename {
                    pers_name.append(Element::with_text("forename", fix_typography(forename)));
                }
            }
            Err(ValueError::BadValue { value, .. }) => {
                debug!("Name has no surname/forename separator, keeping it whole: {value}");
                pers_name.append(Element::with_text("surname", fix_typography(&value)));
            }
            Err(_) => return None,
        }
        Some(pers_name)
    }

    pub fn authorship(&self, name: &str) -> Option<Element> {
        self.wrap_person("author", name)
    }

    pub fn editorship(&self, name: &str) -> Option<Element> {
        self.wrap_person("editor", name)
    }

    fn wrap_person(&self, role: &str, name: &str) -> Option<Element> {
        let mut element = Element::new(role);
        element.append(self.person(name)?);
        Some(element)
    }

    /// Appends one `author` element per author to `parent`.
    pub fn append_authors(&self, parent: &mut Element) {
        for name in &self.authors {
            parent.append_opt(self.authorship(name));
        }
    }

    /// Appends one `editor` element per editor to `parent`.
    pub fn append_editors(&self, parent: &mut Element) {
        for name in &self.editors {
            parent.append_opt(self.editorship(name));
        }
    }

    /// The work's own title (`TI`, then `T1`).
    pub fn title(&self) -> Option<Element> {
        let title = self.field_element("title", TITLE_TAGS, None);
        if title.is_none() {
            let missing = ValueError::MissingValue {
                field: fields::TITLE,
                key: "TI",
            };
            warn!(line = self.values.line(), "{missing}; rendering record without a title");
        }
        title
    }

    pub fn series_title(&self) -> Option<Element> {
        self.field_element("title", SERIES_TITLE_TAGS, Some(("level", "s")))
    }

    pub fn pub_place(&self) -> Option<Element> {
        self.field_element("pubPlace", &[RisTag::Place], None)
    }

    pub fn publisher(&self) -> Option<Element> {
        self.field_element("publisher", &[RisTag::Publisher], None)
    }

    /// The `imprint`, holding place, publisher and date when available.
    pub fn imprint(&self) -> Element {
        let mut imprint = Element::new("imprint");
        imprint.append_opt(self.pub_place());
        imprint.append_opt(self.publisher());
        imprint.append_opt(self.date());
        imprint
    }

    /// The imprint date from `Y1`, falling back to `PY`.
    ///
    /// Unparseable dates are logged and left out.
    pub fn date(&self) -> Option<Element> {
        let raw = self.values.first_of(DATE_TAGS)?;
        let rendered = RisDate::parse(raw).and_then(|date| {
            let display = date.display_value()?;
            Ok((display, date.attribute_value_with(self.date_style)))
        });

        match rendered {
            Ok((display, when)) => Some(Element::with_text("date", display).attr("when", when)),
            Err(e) => {
                warn!(line = self.values.line(), "Unable to parse imprint date \"{raw}\": {e}");
                None
            }
        }
    }

    /// A `series` holding the series title, if there is one.
    pub fn series_element(&self) -> Option<Element> {
        let mut series = Element::new("series");
        series.append(self.series_title()?);
        Some(series)
    }
}
