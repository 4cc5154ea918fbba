use super::{BiblioItem, RecordFields};
use crate::ris::RisTag;
use crate::utils::{resolve_page_range, strip_doi_prefix};
use crate::xml::Element;
use tracing::warn;

const JOURNAL_TITLE_TAGS: &[RisTag] = &[RisTag::Journal, RisTag::SecondaryTitle];

/// A journal article.
///
/// The article goes in `analytic`, the journal issue containing it in
/// `monogr`.
#[derive(Debug, Clone)]
pub struct Journal {
    fields: RecordFields,
}

impl Journal {
    pub fn new(fields: RecordFields) -> Self {
        Self { fields }
    }

    /// The `idno` carrying the DOI, without a leading `DOI:` prefix.
    pub fn doi(&self) -> Option<Element> {
        let doi = strip_doi_prefix(self.fields.values().get_first(&RisTag::Doi)?);
        if doi.is_empty() {
            return None;
        }
        Some(Element::with_text("idno", doi).attr("type", "DOI"))
    }

    pub fn issn(&self) -> Option<Element> {
        self.fields
            .field_element("idno", &[RisTag::SerialNumber], Some(("type", "ISSN")))
    }

    pub fn journal_title(&self) -> Option<Element> {
        self.fields
            .field_element("title", JOURNAL_TITLE_TAGS, Some(("level", "j")))
    }

    pub fn volume(&self) -> Option<Element> {
        self.fields
            .field_element("biblScope", &[RisTag::Volume], Some(("unit", "volume")))
    }

    pub fn issue(&self) -> Option<Element> {
        self.fields
            .field_element("biblScope", &[RisTag::Issue], Some(("unit", "issue")))
    }

    /// The page range from `SP`/`EP`, or from an `SP` holding `start-end`.
    pub fn pages(&self) -> Option<Element> {
        let values = self.fields.values();
        let start_page = values.get_first(&RisTag::StartPage)?;
        let end_page = values.get_first(&RisTag::EndPage);

        match resolve_page_range(start_page, end_page) {
            Ok((start, end)) => Some(
                Element::with_text("biblScope", format!("{start}–{end}"))
                    .attr("unit", "page")
                    .attr("from", start)
                    .attr("to", end),
            ),
            Err(e) => {
                warn!(line = values.line(), "Unable to parse SP as range: {e}");
                None
            }
        }
    }
}

impl BiblioItem for Journal {
    fn fields(&self) -> &RecordFields {
        &self.fields
    }

    fn analytic(&self) -> Option<Element> {
        let mut root = Element::new("analytic");

        self.fields.append_authors(&mut root);
        root.append_opt(self.fields.title());
        root.append_opt(self.doi());
        root.append_opt(self.issn());

        Some(root)
    }

    fn monogr(&self) -> Option<Element> {
        let mut root = Element::new("monogr");

        root.append_opt(self.journal_title());
        root.append(self.fields.imprint());
        root.append_opt(self.volume());
        root.append_opt(self.issue());
        root.append_opt(self.pages());

        Some(root)
    }
}
