//! RIS record data structures.
//!
//! A [`FieldMap`] is the flat tag/value view of one RIS record, kept in input
//! order with duplicate tags allowed.
//!
//! # Lookup Strategy
//! - **First-wins**: for a single tag, the first non-blank value is used
//! - **Candidate order**: for a list of tags, the first tag holding a
//!   non-blank value wins, regardless of where it appears in the record

use crate::ris::tags::RisTag;

/// Tag/value pairs of a single RIS record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    /// Tag-value pairs in input order; values are trimmed.
    pairs: Vec<(RisTag, String)>,
    /// 1-based line number of the first line of the record, if known.
    line: Option<usize>,
    /// Lines without a tag separator, with their line numbers.
    ignored_lines: Vec<(usize, String)>,
}

impl FieldMap {
    /// Create a new empty FieldMap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a FieldMap from raw string pairs.
    ///
    /// ```
    /// use ristei::ris::FieldMap;
    ///
    /// let fields = FieldMap::from_pairs([("TY", "BOOK"), ("TI", " A Title ")]);
    /// assert_eq!(fields.type_code(), Some("BOOK"));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut fields = Self::new();
        for (tag, value) in pairs {
            fields.push(RisTag::from_tag(tag.as_ref().trim()), value.as_ref());
        }
        fields
    }

    /// Add a tag-value pair; the value is trimmed.
    pub fn push(&mut self, tag: RisTag, value: &str) {
        self.pairs.push((tag, value.trim().to_string()));
    }

    pub(crate) fn set_line(&mut self, line: usize) {
        if self.line.is_none() {
            self.line = Some(line);
        }
    }

    /// Add an ignored line with context.
    pub(crate) fn add_ignored_line(&mut self, line_number: usize, line: String) {
        self.ignored_lines.push((line_number, line));
    }

    pub fn pairs(&self) -> &[(RisTag, String)] {
        &self.pairs
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn ignored_lines(&self) -> &[(usize, String)] {
        &self.ignored_lines
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The RIS type code: the value of the first pair, which a well-formed
    /// record opens with `TY`.
    pub fn type_code(&self) -> Option<&str> {
        self.pairs
            .first()
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }

    /// Get the first non-blank value for a tag, if it exists.
    pub fn get_first(&self, tag: &RisTag) -> Option<&str> {
        self.pairs
            .iter()
            .filter(|(t, _)| t == tag)
            .map(|(_, value)| value.as_str())
            .find(|value| !value.is_empty())
    }

    /// Get the value of the first candidate tag that is present.
    pub fn first_of(&self, tags: &[RisTag]) -> Option<&str> {
        tags.iter().find_map(|tag| self.get_first(tag))
    }

    /// Iterate over every value of a tag in input order.
    pub fn get_all<'a>(&'a self, tag: &'a RisTag) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(t, _)| t == tag)
            .map(|(_, value)| value.as_str())
    }

    /// Values of every pair whose tag matches the predicate, in input order.
    pub fn values_where(&self, predicate: impl Fn(&RisTag) -> bool) -> Vec<String> {
        self.pairs
            .iter()
            .filter(|(tag, value)| predicate(tag) && !value.is_empty())
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn contains(&self, tag: &RisTag) -> bool {
        self.get_first(tag).is_some()
    }
}
