//! Uniform item shapes shared by static defaults and override records.

use medconf_types::{BilingualValue, Language};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::overrides::scalar_text;

/// Icon used for override records that do not carry one.
pub const DEFAULT_ICON: &str = "⭐";

/// The declared shape of a collection's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemShape {
    /// Icon, title and description.
    Card,
    /// Label and value (statistics, milestones, contact details).
    Stat,
}

/// A finished, single-language collection item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum UniformItem {
    Card {
        icon: String,
        title: String,
        description: String,
    },
    Stat {
        label: String,
        value: String,
    },
}

impl UniformItem {
    pub fn card(
        icon: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        UniformItem::Card {
            icon: icon.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn stat(label: impl Into<String>, value: impl Into<String>) -> Self {
        UniformItem::Stat {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn shape(&self) -> ItemShape {
        match self {
            UniformItem::Card { .. } => ItemShape::Card,
            UniformItem::Stat { .. } => ItemShape::Stat,
        }
    }

    /// Maps one override record into `shape` for `lang`.
    ///
    /// Sub-fields are read from `<name>_<lang>`, then from the bare `<name>`
    /// (values such as `"500+"` are often stored once). Missing sub-fields
    /// become empty strings; a missing icon becomes [`DEFAULT_ICON`].
    pub fn from_record(record: &Map<String, Value>, shape: ItemShape, lang: Language) -> Self {
        match shape {
            ItemShape::Card => {
                let icon = record_text(record, "icon")
                    .filter(|icon| !icon.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_ICON.to_string());
                UniformItem::Card {
                    icon,
                    title: localized(record, "title", lang),
                    description: localized(record, "description", lang),
                }
            }
            ItemShape::Stat => UniformItem::Stat {
                label: localized(record, "label", lang),
                value: localized(record, "value", lang),
            },
        }
    }
}

fn record_text(record: &Map<String, Value>, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(scalar_text)
        .map(|text| text.into_owned())
}

fn localized(record: &Map<String, Value>, name: &str, lang: Language) -> String {
    record_text(record, &format!("{}_{}", name, lang.suffix()))
        .filter(|text| !text.is_empty())
        .or_else(|| record_text(record, name))
        .unwrap_or_default()
}

/// A compiled-in collection item with bilingual text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaticItem {
    Card {
        icon: &'static str,
        title: BilingualValue,
        description: BilingualValue,
    },
    Stat {
        label: BilingualValue,
        value: BilingualValue,
    },
}

impl StaticItem {
    #[must_use]
    pub const fn card(icon: &'static str, title: BilingualValue, description: BilingualValue) -> Self {
        StaticItem::Card {
            icon,
            title,
            description,
        }
    }

    #[must_use]
    pub const fn stat(label: BilingualValue, value: BilingualValue) -> Self {
        StaticItem::Stat { label, value }
    }

    pub fn shape(&self) -> ItemShape {
        match self {
            StaticItem::Card { .. } => ItemShape::Card,
            StaticItem::Stat { .. } => ItemShape::Stat,
        }
    }

    /// Resolves the embedded bilingual values for `lang`.
    pub fn to_uniform(&self, lang: Language) -> UniformItem {
        match self {
            StaticItem::Card {
                icon,
                title,
                description,
            } => UniformItem::card(*icon, title.resolve(lang), description.resolve(lang)),
            StaticItem::Stat { label, value } => {
                UniformItem::stat(label.resolve(lang), value.resolve(lang))
            }
        }
    }
}
