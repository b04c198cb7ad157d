//! Persisted display preferences.
//!
//! The site stores the reader's language and font selection locally. This
//! module only reads and writes that small JSON document; where it lives is
//! the caller's concern.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::{Error, Language, Result};

/// A selectable font for page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Cairo,
    Tajawal,
    Almarai,
    NotoKufiArabic,
    System,
}

impl FontFamily {
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Cairo,
        FontFamily::Tajawal,
        FontFamily::Almarai,
        FontFamily::NotoKufiArabic,
        FontFamily::System,
    ];

    /// The key stored in the preferences document.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            FontFamily::Cairo => "cairo",
            FontFamily::Tajawal => "tajawal",
            FontFamily::Almarai => "almarai",
            FontFamily::NotoKufiArabic => "noto-kufi-arabic",
            FontFamily::System => "system",
        }
    }

    /// CSS `font-family` value.
    #[must_use]
    pub const fn css_family(self) -> &'static str {
        match self {
            FontFamily::Cairo => "'Cairo', sans-serif",
            FontFamily::Tajawal => "'Tajawal', sans-serif",
            FontFamily::Almarai => "'Almarai', sans-serif",
            FontFamily::NotoKufiArabic => "'Noto Kufi Arabic', sans-serif",
            FontFamily::System => "system-ui, sans-serif",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FontFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FontFamily::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownFont(s.to_string()))
    }
}

/// The reader's saved display preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub font_family: FontFamily,
}

impl Preferences {
    /// Loads preferences from `path`.
    ///
    /// Never fails: a missing file yields defaults, an unreadable or corrupt
    /// one yields defaults and a warning.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(prefs) => prefs,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Corrupt preferences file, using defaults");
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No saved preferences, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read preferences, using defaults");
                Self::default()
            }
        }
    }

    /// Writes preferences to `path` as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
