use super::{BiblioItem, RecordFields};
use crate::ris::RisTag;
use crate::xml::Element;

/// A book, edited book or e-book.
///
/// Books describe themselves in `monogr`, which also carries the series;
/// there is no `analytic` part.
#[derive(Debug, Clone)]
pub struct Book {
    fields: RecordFields,
}

impl Book {
    pub fn new(fields: RecordFields) -> Self {
        Self { fields }
    }

    /// The `idno` carrying the ISBN from `SN`.
    pub fn isbn(&self) -> Option<Element> {
        self.fields
            .field_element("idno", &[RisTag::SerialNumber], Some(("type", "ISBN")))
    }
}

impl BiblioItem for Book {
    fn fields(&self) -> &RecordFields {
        &self.fields
    }

    fn monogr(&self) -> Option<Element> {
        let mut root = Element::new("monogr");

        self.fields.append_authors(&mut root);
        self.fields.append_editors(&mut root);
        root.append_opt(self.fields.title());
        root.append_opt(self.isbn());
        root.append(self.fields.imprint());
        root.append_opt(self.fields.series_element());

        Some(root)
    }
}
