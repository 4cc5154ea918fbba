//! RIS format parsing implementation.
//!
//! This module handles the low-level splitting of RIS text into records.

use crate::ris::structure::FieldMap;
use crate::ris::tags::RisTag;
use itertools::Itertools;
use tracing::{debug, warn};

/// Separator between a tag and its value: `TY  - JOUR`.
pub const SEPARATOR: &str = "  -";

/// Classification of a single RIS line.
#[derive(Debug, PartialEq, Eq)]
enum RisLine<'a> {
    Blank,
    EndOfReference,
    Field(RisTag, &'a str),
    Untagged,
}

/// Split RIS text into one [`FieldMap`] per `ER`-terminated record.
///
/// A record with no `ER` line at the end of the input is still returned.
/// Records consisting only of an `ER` line come back empty; deciding what to
/// do with them is up to the caller.
pub(crate) fn ris_parse<S: AsRef<str>>(ris_text: S) -> Vec<FieldMap> {
    let text = ris_text.as_ref();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut records = Vec::new();
    let mut current = FieldMap::new();

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;

        match parse_ris_line(line) {
            RisLine::Blank => continue,
            RisLine::EndOfReference => {
                current.set_line(line_number);
                finish_record(&mut records, std::mem::take(&mut current));
            }
            RisLine::Field(tag, value) => {
                current.set_line(line_number);
                current.push(tag, value);
            }
            RisLine::Untagged => {
                current.add_ignored_line(line_number, line.to_string());
            }
        }
    }

    if !current.is_empty() {
        warn!(
            line = current.line(),
            "Record is not terminated by an ER line; keeping it"
        );
        finish_record(&mut records, current);
    }

    records
}

fn finish_record(records: &mut Vec<FieldMap>, fields: FieldMap) {
    if !fields.ignored_lines().is_empty() {
        debug!(
            line = fields.line(),
            "Ignored lines without a tag separator: {}",
            fields.ignored_lines().iter().map(|(n, _)| n).join(", ")
        );
    }
    records.push(fields);
}

/// Classify a single RIS line.
///
/// Everything after the first separator is the value, so values may contain
/// the separator themselves.
fn parse_ris_line(line: &str) -> RisLine<'_> {
    if line.trim().is_empty() {
        return RisLine::Blank;
    }

    match line.split_once(SEPARATOR) {
        Some((tag, value)) => match RisTag::from_tag(tag.trim()) {
            RisTag::EndOfReference => RisLine::EndOfReference,
            tag => RisLine::Field(tag, value.trim()),
        },
        None if line.trim() == RisTag::EndOfReference.as_tag() => RisLine::EndOfReference,
        None => RisLine::Untagged,
    }
}
