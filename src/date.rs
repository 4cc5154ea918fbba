//! RIS date handling.
//!
//! RIS dates look like `year/month/day/season`, where everything but the year
//! is optional and any segment may be left empty (`1998///`). TEI wants two
//! forms of the same date: a human-readable one for the element text and a
//! machine-readable one for the `when` attribute.

use crate::error::InvalidDateError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the month is written in the `when` attribute of a TEI date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateAttrStyle {
    /// Month copied exactly as found in the RIS file (`1998-5`).
    #[default]
    Verbatim,
    /// Numeric month padded to two digits (`1998-05`).
    ZeroPadded,
}

/// A parsed RIS date.
///
/// # Examples
///
/// ```
/// use ristei::RisDate;
///
/// let date = RisDate::parse("2004/3/12/Spring").unwrap();
/// assert_eq!(date.display_value().unwrap(), "Spring 2004");
/// assert_eq!(date.attribute_value(), "2004-3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RisDate {
    year: String,
    month: Option<String>,
    season: Option<String>,
}

impl RisDate {
    /// Parses a RIS date string. The day segment is accepted and dropped.
    pub fn parse(value: &str) -> Result<Self, InvalidDateError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(InvalidDateError::Empty);
        }

        let mut segments = value.split('/').map(str::trim);
        let year = segments.next().unwrap_or_default();
        if year.is_empty() {
            return Err(InvalidDateError::MissingYear(value.to_string()));
        }

        let non_empty = |s: Option<&str>| s.filter(|s| !s.is_empty()).map(str::to_string);
        let month = non_empty(segments.next());
        let _day = segments.next();
        let season = non_empty(segments.next());

        Ok(Self {
            year: year.to_string(),
            month,
            season,
        })
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }

    pub fn season(&self) -> Option<&str> {
        self.season.as_deref()
    }

    /// Returns the human-readable form: `"Spring 2004"`, `"March 2004"` or `"2004"`.
    ///
    /// # Errors
    ///
    /// Fails when a month has to be named but the month or the year is not a
    /// valid calendar value.
    pub fn display_value(&self) -> Result<String, InvalidDateError> {
        if let Some(season) = &self.season {
            return Ok(format!("{} {}", season, self.year));
        }

        match &self.month {
            Some(month) => {
                let date = self.calendar_date(month)?;
                Ok(format!("{} {}", date.format("%B"), self.year))
            }
            None => Ok(self.year.clone()),
        }
    }

    /// Returns the attribute form with the month as given: `"2004-3"` or `"2004"`.
    pub fn attribute_value(&self) -> String {
        match &self.month {
            Some(month) => format!("{}-{}", self.year, month),
            None => self.year.clone(),
        }
    }

    /// Returns the attribute form with a numeric month padded to two digits.
    pub fn iso_attribute_value(&self) -> String {
        match &self.month {
            Some(month) => match month.parse::<u32>() {
                Ok(number) => format!("{}-{:02}", self.year, number),
                Err(_) => format!("{}-{}", self.year, month),
            },
            None => self.year.clone(),
        }
    }

    /// Returns the attribute form for the requested style.
    pub fn attribute_value_with(&self, style: DateAttrStyle) -> String {
        match style {
            DateAttrStyle::Verbatim => self.attribute_value(),
            DateAttrStyle::ZeroPadded => self.iso_attribute_value(),
        }
    }

    fn calendar_date(&self, month: &str) -> Result<NaiveDate, InvalidDateError> {
        let year = self
            .year
            .parse::<i32>()
            .map_err(|_| InvalidDateError::InvalidYear(self.year.clone()))?;
        let month_number = month
            .parse::<u32>()
            .map_err(|_| InvalidDateError::InvalidMonth(month.to_string()))?;
        NaiveDate::from_ymd_opt(year, month_number, 1)
            .ok_or_else(|| InvalidDateError::InvalidMonth(month.to_string()))
    }
}

impl std::str::FromStr for RisDate {
    type Err = InvalidDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("1999/12/25/Christmas edition", "Christmas edition 1999")]
    #[case("2020//1/Winter", "Winter 2020")]
    #[case("1871/2///", "February 1871")]
    #[case("2023/05/30", "May 2023")]
    #[case("1998///", "1998")]
    #[case("1998", "1998")]
    fn test_display_value(#[case] input: &str, #[case] expected: &str) {
        let date = RisDate::parse(input).unwrap();
        assert_eq!(date.display_value().unwrap(), expected);
    }

    #[rstest]
    #[case("1999/12/25/Christmas edition", "1999-12")]
    #[case("2020//1/Winter", "2020")]
    #[case("2023/05/30", "2023-05")]
    #[case("2023/5", "2023-5")]
    #[case("1998///", "1998")]
    fn test_attribute_value(#[case] input: &str, #[case] expected: &str) {
        let date = RisDate::parse(input).unwrap();
        assert_eq!(date.attribute_value(), expected);
    }

    #[test]
    fn test_season_without_month_keeps_bare_year_attribute() {
        let date = RisDate::parse("2011///Fall").unwrap();
        assert_eq!(date.display_value().unwrap(), "Fall 2011");
        assert_eq!(date.attribute_value(), "2011");
    }

    #[test]
    fn test_iso_attribute_value_pads_month() {
        let date = RisDate::parse("2023/5/1").unwrap();
        assert_eq!(date.iso_attribute_value(), "2023-05");
        assert_eq!(
            date.attribute_value_with(DateAttrStyle::ZeroPadded),
            "2023-05"
        );
        assert_eq!(date.attribute_value_with(DateAttrStyle::Verbatim), "2023-5");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_empty_date_fails(#[case] input: &str) {
        assert_eq!(RisDate::parse(input), Err(InvalidDateError::Empty));
    }

    #[test]
    fn test_missing_year_fails() {
        assert!(matches!(
            RisDate::parse("/5/1"),
            Err(InvalidDateError::MissingYear(_))
        ));
    }

    #[rstest]
    #[case("2023/13")]
    #[case("2023/0")]
    #[case("2023/May")]
    fn test_bad_month_fails_on_display(#[case] input: &str) {
        let date = RisDate::parse(input).unwrap();
        assert!(matches!(
            date.display_value(),
            Err(InvalidDateError::InvalidMonth(_))
        ));
    }

    #[test]
    fn test_non_numeric_year_with_month_fails_on_display() {
        let date = RisDate::parse("circa/5").unwrap();
        assert_eq!(
            date.display_value(),
            Err(InvalidDateError::InvalidYear("circa".to_string()))
        );
    }

    #[test]
    fn test_non_numeric_year_alone_is_kept() {
        let date = RisDate::parse("n.d.").unwrap();
        assert_eq!(date.display_value().unwrap(), "n.d.");
        assert_eq!(date.year(), "n.d.");
    }

    #[test]
    fn test_from_str() {
        let date: RisDate = "2001/7".parse().unwrap();
        assert_eq!(date.month(), Some("7"));
        assert_eq!(date.season(), None);
    }
}
