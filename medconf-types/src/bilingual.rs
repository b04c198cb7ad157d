//! Bilingual values and the locale string resolver.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::Language;

/// A pair of equivalent strings, one per supported language.
///
/// Both branches are always present (possibly empty), so resolution never
/// fails. Compiled-in defaults borrow `'static` text; values read from JSON
/// own theirs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BilingualValue {
    #[serde(default)]
    pub ar: Cow<'static, str>,
    #[serde(default)]
    pub en: Cow<'static, str>,
}

impl BilingualValue {
    /// Creates a value from owned or borrowed text.
    pub fn new(ar: impl Into<Cow<'static, str>>, en: impl Into<Cow<'static, str>>) -> Self {
        Self {
            ar: ar.into(),
            en: en.into(),
        }
    }

    /// Creates a value from static text; usable in `const` declarations.
    #[must_use]
    pub const fn new_static(ar: &'static str, en: &'static str) -> Self {
        Self {
            ar: Cow::Borrowed(ar),
            en: Cow::Borrowed(en),
        }
    }

    /// Creates a value with the same text in both languages (numbers, names).
    #[must_use]
    pub const fn same(text: &'static str) -> Self {
        Self::new_static(text, text)
    }

    /// Returns the branch for `lang`, verbatim.
    ///
    /// No trimming, no escaping; the caller decides whether the text is
    /// rendered as plain text or as markup.
    #[must_use]
    pub fn resolve(&self, lang: Language) -> &str {
        match lang {
            Language::Ar => &self.ar,
            Language::En => &self.en,
        }
    }

    /// Resolves against a raw language tag; unknown tags get the primary branch.
    #[must_use]
    pub fn resolve_tag(&self, tag: &str) -> &str {
        self.resolve(Language::from_tag(tag))
    }

    /// True when both branches are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ar.is_empty() && self.en.is_empty()
    }
}
