use crate::error::{ValueError, fields};
use crate::regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static DUMB_APOSTROPHE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\S)'([std]|ll)").unwrap());

static DOI_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*DOI:\s*").unwrap());

/// Replaces straight apostrophes in contractions and possessives with `’`.
///
/// Only apostrophes that follow a non-space character and precede `s`, `t`,
/// `d` or `ll` are touched, so quoted text keeps its straight quotes.
///
/// # Arguments
///
/// * `value` - The text to clean up
pub fn fix_typography(value: &str) -> Cow<'_, str> {
    DUMB_APOSTROPHE_REGEX.replace_all(value, "${1}’${2}")
}

/// Removes a leading `DOI:` prefix (any case, optional whitespace) from a DOI value.
///
/// # Arguments
///
/// * `doi_str` - The DOI string to clean
pub fn strip_doi_prefix(doi_str: &str) -> String {
    DOI_PREFIX_REGEX.replace(doi_str, "").trim().to_string()
}

/// Splits a `"Last, First"` name on its first comma.
///
/// Returns the surname and the forename; the forename is `None` when nothing
/// follows the comma.
///
/// # Errors
///
/// Returns `ValueError::MissingValue` for a blank name and
/// `ValueError::BadValue` when the name has no comma.
pub fn split_person_name(name: &str) -> Result<(&str, Option<&str>), ValueError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValueError::MissingValue {
            field: fields::AUTHOR,
            key: "AU",
        });
    }

    match name.split_once(',') {
        Some((surname, forename)) => {
            let forename = forename.trim();
            Ok((
                surname.trim(),
                (!forename.is_empty()).then_some(forename),
            ))
        }
        None => Err(ValueError::BadValue {
            field: fields::AUTHOR,
            key: "AU",
            value: name.to_string(),
            reason: "no comma between surname and forename".to_string(),
        }),
    }
}

/// Resolves a start/end page pair from RIS `SP` and `EP` values.
///
/// With an explicit end page both values are used as given. Otherwise the start
/// page is treated as a `start-end` range, as some exporters put the whole
/// range in `SP`.
///
/// # Errors
///
/// Returns `ValueError::BadValue` when no non-empty start and end page can be
/// found.
pub fn resolve_page_range<'a>(
    start_page: &'a str,
    end_page: Option<&'a str>,
) -> Result<(&'a str, &'a str), ValueError> {
    let bad_range = || ValueError::BadValue {
        field: fields::PAGES,
        key: "SP",
        value: start_page.to_string(),
        reason: "unable to parse as a page range".to_string(),
    };

    let (start, end) = match end_page {
        Some(end) => (start_page.trim(), end.trim()),
        None => {
            let mut parts = start_page.split('-').map(str::trim);
            let start = parts.next().unwrap_or_default();
            let end = parts.next().ok_or_else(bad_range)?;
            (start, end)
        }
    };

    if start.is_empty() || end.is_empty() {
        return Err(bad_range());
    }
    Ok((start, end))
}
