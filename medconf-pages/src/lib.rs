//! Compiled-in content for every page of the MedConf site.
//!
//! Each page declares its fields once, in display order, with Arabic and
//! English defaults. The content-management backend may override any of
//! them at runtime; see `medconf_content::resolve_page`.

mod about;
mod articles;
mod conferences;
mod contact;
mod founder;
mod home;

use medconf_content::ContentSpec;
use medconf_types::BilingualValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A page of the site that carries content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Contact,
    Founder,
    Conferences,
    Articles,
}

/// Errors from page lookup.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::About,
        Page::Contact,
        Page::Founder,
        Page::Conferences,
        Page::Articles,
    ];

    /// URL slug; also the page key used by the content-management backend.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Contact => "contact",
            Page::Founder => "founder",
            Page::Conferences => "conferences",
            Page::Articles => "articles",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Page::ALL.into_iter().find(|page| page.slug() == slug)
    }

    /// Navigation label.
    #[must_use]
    pub const fn title(self) -> BilingualValue {
        match self {
            Page::Home => bi("الرئيسية", "Home"),
            Page::About => bi("من نحن", "About"),
            Page::Contact => bi("تواصل معنا", "Contact"),
            Page::Founder => bi("المؤسس", "Founder"),
            Page::Conferences => bi("المؤتمرات", "Conferences"),
            Page::Articles => bi("المقالات", "Articles"),
        }
    }

    /// The page's default content specification.
    pub fn spec(self) -> ContentSpec {
        match self {
            Page::Home => home::spec(),
            Page::About => about::spec(),
            Page::Contact => contact::spec(),
            Page::Founder => founder::spec(),
            Page::Conferences => conferences::spec(),
            Page::Articles => articles::spec(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Page::from_slug(s).ok_or_else(|| PageError::UnknownPage(s.to_string()))
    }
}

pub(crate) const fn bi(ar: &'static str, en: &'static str) -> BilingualValue {
    BilingualValue::new_static(ar, en)
}
