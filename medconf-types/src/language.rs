//! Supported display languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// A display language of the site.
///
/// Arabic is the primary language: every lenient lookup that cannot
/// recognize a tag lands on [`Language::Ar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

/// Text direction for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Language {
    /// Both languages, primary first.
    pub const ALL: [Language; 2] = [Language::Ar, Language::En];

    /// The primary language.
    pub const PRIMARY: Language = Language::Ar;

    /// Parses a language tag leniently.
    ///
    /// Case-insensitive, ignores region subtags (`en-US`, `ar_EG`), and
    /// falls back to the primary language for anything else.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        Self::parse_primary_subtag(tag).unwrap_or(Self::PRIMARY)
    }

    fn parse_primary_subtag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        if primary.eq_ignore_ascii_case("ar") {
            Some(Language::Ar)
        } else if primary.eq_ignore_ascii_case("en") {
            Some(Language::En)
        } else {
            None
        }
    }

    /// Suffix used to namespace override keys (`mission_text_ar`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }

    /// The language the language switcher toggles to.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Strict parse: unknown tags are an error rather than a fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_primary_subtag(s).ok_or_else(|| Error::UnknownLanguage(s.to_string()))
    }
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}
