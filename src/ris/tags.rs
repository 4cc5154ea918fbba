//! RIS tags consumed by the TEI renderers.
//!
//! See: http://en.wikipedia.org/wiki/RIS_(file_format)

use compact_str::CompactString;

/// RIS format tags.
///
/// Only the tags that influence TEI output get a variant; everything else is
/// kept as [`RisTag::Unknown`] so that records still round-trip their data.
#[allow(clippy::upper_case_acronyms)]
#[non_exhaustive]
#[derive(Debug, Eq, PartialEq, Hash, Clone)]
pub enum RisTag {
    /// TY - Type of reference
    Type,
    /// TI - Primary title
    Title,
    /// T1 - Primary title (alternative)
    TitleAlternative,
    /// T2 - Secondary title (series or journal title)
    SecondaryTitle,
    /// T3 - Tertiary title (series title)
    TertiaryTitle,
    /// AU - Author
    Author,
    /// A1 - Primary author
    AuthorPrimary,
    /// A3 - Tertiary author (editor)
    AuthorTertiary,
    /// JO - Journal/Periodical name
    Journal,
    /// SN - ISSN/ISBN
    SerialNumber,
    /// DO - DOI
    Doi,
    /// VL - Volume number
    Volume,
    /// IS - Issue number
    Issue,
    /// SP - Start page
    StartPage,
    /// EP - End page
    EndPage,
    /// CY - Place of publication
    Place,
    /// PB - Publisher
    Publisher,
    /// Y1 - Primary date
    DatePrimary,
    /// PY - Publication year
    PublicationYear,
    /// ER - End of reference
    EndOfReference,
    /// Unknown tag
    Unknown(CompactString),
}

impl RisTag {
    /// Convert a string tag to a RisTag enum.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "TY" => RisTag::Type,
            "TI" => RisTag::Title,
            "T1" => RisTag::TitleAlternative,
            "T2" => RisTag::SecondaryTitle,
            "T3" => RisTag::TertiaryTitle,
            "AU" => RisTag::Author,
            "A1" => RisTag::AuthorPrimary,
            "A3" => RisTag::AuthorTertiary,
            "JO" => RisTag::Journal,
            "SN" => RisTag::SerialNumber,
            "DO" => RisTag::Doi,
            "VL" => RisTag::Volume,
            "IS" => RisTag::Issue,
            "SP" => RisTag::StartPage,
            "EP" => RisTag::EndPage,
            "CY" => RisTag::Place,
            "PB" => RisTag::Publisher,
            "Y1" => RisTag::DatePrimary,
            "PY" => RisTag::PublicationYear,
            "ER" => RisTag::EndOfReference,
            _ => RisTag::Unknown(CompactString::from(tag)),
        }
    }

    /// Convert a RisTag enum back to its string representation.
    pub fn as_tag(&self) -> &str {
        match self {
            RisTag::Type => "TY",
            RisTag::Title => "TI",
            RisTag::TitleAlternative => "T1",
            RisTag::SecondaryTitle => "T2",
            RisTag::TertiaryTitle => "T3",
            RisTag::Author => "AU",
            RisTag::AuthorPrimary => "A1",
            RisTag::AuthorTertiary => "A3",
            RisTag::Journal => "JO",
            RisTag::SerialNumber => "SN",
            RisTag::Doi => "DO",
            RisTag::Volume => "VL",
            RisTag::Issue => "IS",
            RisTag::StartPage => "SP",
            RisTag::EndPage => "EP",
            RisTag::Place => "CY",
            RisTag::Publisher => "PB",
            RisTag::DatePrimary => "Y1",
            RisTag::PublicationYear => "PY",
            RisTag::EndOfReference => "ER",
            RisTag::Unknown(tag) => tag,
        }
    }

    /// Check if this tag names an author (not an editor).
    pub fn is_author_tag(&self) -> bool {
        matches!(self, RisTag::Author | RisTag::AuthorPrimary)
    }

    /// Check if this tag names an editor.
    pub fn is_editor_tag(&self) -> bool {
        matches!(self, RisTag::AuthorTertiary)
    }
}

impl std::fmt::Display for RisTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("TY", RisTag::Type)]
    #[case("TI", RisTag::Title)]
    #[case("A3", RisTag::AuthorTertiary)]
    #[case("JO", RisTag::Journal)]
    #[case("ER", RisTag::EndOfReference)]
    #[case("KW", RisTag::Unknown("KW".into()))]
    fn test_from_tag(#[case] input: &str, #[case] expected: RisTag) {
        assert_eq!(RisTag::from_tag(input), expected);
    }

    #[rstest]
    #[case(RisTag::Type, "TY")]
    #[case(RisTag::Place, "CY")]
    #[case(RisTag::Unknown("N1".into()), "N1")]
    fn test_as_tag(#[case] input: RisTag, #[case] expected: &str) {
        assert_eq!(input.as_tag(), expected);
        assert_eq!(input.to_string(), expected);
    }

    #[rstest]
    #[case(RisTag::Author, true, false)]
    #[case(RisTag::AuthorPrimary, true, false)]
    #[case(RisTag::AuthorTertiary, false, true)]
    #[case(RisTag::Title, false, false)]
    fn test_person_tags(#[case] tag: RisTag, #[case] author: bool, #[case] editor: bool) {
        assert_eq!(tag.is_author_tag(), author);
        assert_eq!(tag.is_editor_tag(), editor);
    }
}
