//! The dynamic override document supplied by the content-management backend.
//!
//! The backend returns a loosely-typed JSON object per page. Scalar fields
//! arrive as two sibling keys (`<field>_ar`, `<field>_en`); collection
//! fields arrive as an ordered list of records under the bare field key.
//! Shapes are validated here, once, into [`FieldOverride`] so downstream
//! code never re-derives assumptions about the payload.

use medconf_types::Language;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::{debug, warn};

/// Builds the per-language lookup key for a field (`mission_text_en`).
#[must_use]
pub fn namespaced_key(field_key: &str, lang: Language) -> String {
    format!("{}_{}", field_key, lang.suffix())
}

/// A validated view of one field in an [`OverrideDocument`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOverride<'a> {
    /// A non-empty text value (plain text or markup).
    Scalar(Cow<'a, str>),
    /// A non-empty ordered list of records.
    Collection(&'a [Value]),
    /// Missing, empty, or unusable.
    Absent,
}

impl<'a> FieldOverride<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldOverride::Absent)
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldOverride::Scalar(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&'a [Value]> {
        match self {
            FieldOverride::Collection(items) => Some(*items),
            _ => None,
        }
    }
}

/// Runtime content overrides for one page.
///
/// Read-only once constructed; held only for the page visit it was
/// fetched for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideDocument {
    fields: Map<String, Value>,
}

impl OverrideDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a backend payload. Anything other than an object (or null) is
    /// logged and treated as an empty document.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            Value::Null => Self::default(),
            other => {
                warn!(kind = json_kind(&other), "Override payload is not an object, ignoring it");
                Self::default()
            }
        }
    }

    /// Parses a document from raw JSON text.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        Ok(Self::from_value(serde_json::from_str(raw)?))
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a raw value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Raw value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Looks up the scalar override for `field_key` in `lang`.
    ///
    /// Strings and numbers are usable; an empty string counts as absent.
    /// Any other shape is logged as malformed and treated as absent.
    pub fn scalar(&self, field_key: &str, lang: Language) -> FieldOverride<'_> {
        let key = namespaced_key(field_key, lang);
        match self.fields.get(&key) {
            None | Some(Value::Null) => FieldOverride::Absent,
            Some(value) => match scalar_text(value) {
                Some(text) if text.is_empty() => FieldOverride::Absent,
                Some(text) => FieldOverride::Scalar(text),
                None => {
                    warn!(key = %key, kind = json_kind(value), "Malformed scalar override, using default");
                    FieldOverride::Absent
                }
            },
        }
    }

    /// Looks up the collection override for `field_key`.
    ///
    /// An empty list is indistinguishable from a field that was never set
    /// and is treated as absent.
    pub fn collection(&self, field_key: &str) -> FieldOverride<'_> {
        match self.fields.get(field_key) {
            None | Some(Value::Null) => FieldOverride::Absent,
            Some(Value::Array(items)) if items.is_empty() => {
                debug!(key = %field_key, "Empty collection override, using default");
                FieldOverride::Absent
            }
            Some(Value::Array(items)) => FieldOverride::Collection(items),
            Some(value) => {
                warn!(key = %field_key, kind = json_kind(value), "Malformed collection override, using default");
                FieldOverride::Absent
            }
        }
    }

    /// Raw media reference for `field_key`. Media is language-independent,
    /// so the bare key is used. Empty strings count as absent.
    pub fn media(&self, field_key: &str) -> Option<&Value> {
        match self.fields.get(field_key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) if s.trim().is_empty() => None,
            Some(value) => Some(value),
        }
    }
}

impl From<Map<String, Value>> for OverrideDocument {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Text of a scalar JSON value; numbers are rendered with their JSON form.
pub(crate) fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
