//! Media reference resolution.
//!
//! Upstream endpoints describe the same image or video in several shapes:
//! an absolute URL, a path relative to the media origin, or a
//! `{base_path, file_name}` pair (sometimes spelled `{path, name}`, or
//! wrapped as `{url}`). All of them are permanently supported and resolve to
//! the same absolute URL.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::overrides::json_kind;

/// Placeholder used when neither a reference nor a fallback is available.
pub const DEFAULT_PLACEHOLDER: &str = "/images/placeholder.png";

/// An unresolved media reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    /// An absolute URL or a path relative to the media origin.
    Url(String),
    Pair {
        #[serde(alias = "path")]
        base_path: String,
        #[serde(alias = "name")]
        file_name: String,
    },
}

impl MediaRef {
    pub fn url(url: impl Into<String>) -> Self {
        MediaRef::Url(url.into())
    }

    pub fn pair(base_path: impl Into<String>, file_name: impl Into<String>) -> Self {
        MediaRef::Pair {
            base_path: base_path.into(),
            file_name: file_name.into(),
        }
    }

    /// Reads a reference from a loosely-typed payload value.
    ///
    /// Returns `None` for shapes that are not recognized.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(MediaRef::Url(s.clone())),
            Value::Object(obj) => {
                if let Some(file_name) = first_str(obj, &["file_name", "name"]) {
                    let base_path = first_str(obj, &["base_path", "path"]).unwrap_or_default();
                    Some(MediaRef::Pair {
                        base_path,
                        file_name,
                    })
                } else {
                    first_str(obj, &["url"]).map(MediaRef::Url)
                }
            }
            _ => None,
        }
    }

    /// True when the reference names no file.
    pub fn is_empty(&self) -> bool {
        match self {
            MediaRef::Url(url) => url.trim().is_empty(),
            MediaRef::Pair { file_name, .. } => file_name.trim().is_empty(),
        }
    }
}

fn first_str(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| obj.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

/// Image or video; selects the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// Media origin and placeholders, supplied at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Prefix every relative path resolves under.
    pub domain_prefix: String,
    pub image_placeholder: String,
    pub video_placeholder: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            domain_prefix: "https://api.medconf-eval.com".to_string(),
            image_placeholder: DEFAULT_PLACEHOLDER.to_string(),
            video_placeholder: "/videos/placeholder.mp4".to_string(),
        }
    }
}

impl MediaConfig {
    /// Creates a config for `domain_prefix` with default placeholders.
    pub fn with_domain(domain_prefix: impl Into<String>) -> Self {
        Self {
            domain_prefix: domain_prefix.into(),
            ..Self::default()
        }
    }

    pub fn placeholder(&self, kind: MediaKind) -> &str {
        match kind {
            MediaKind::Image => &self.image_placeholder,
            MediaKind::Video => &self.video_placeholder,
        }
    }

    /// Resolves `media` against this origin, falling back to the kind's
    /// placeholder.
    pub fn resolve(&self, kind: MediaKind, media: Option<&MediaRef>) -> String {
        resolve_media(media, self.placeholder(kind), &self.domain_prefix)
    }
}

/// True for references the browser can load without a prefix.
pub fn is_absolute_url(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    ["http://", "https://", "//", "data:", "blob:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
}

/// Joins two URL segments with exactly one `/` at the seam.
pub fn join_url(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return prefix.to_string();
    }
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Resolves a media reference to a browser-loadable URL.
///
/// In order: no reference gives `fallback_url`; an absolute URL is returned
/// unchanged; a pair resolves to `domain_prefix + base_path + file_name`; a
/// relative path resolves to `domain_prefix + path`. Never returns an empty
/// string.
pub fn resolve_media(media: Option<&MediaRef>, fallback_url: &str, domain_prefix: &str) -> String {
    let fallback = || {
        if fallback_url.trim().is_empty() {
            DEFAULT_PLACEHOLDER.to_string()
        } else {
            fallback_url.to_string()
        }
    };

    match media {
        None => fallback(),
        Some(media) if media.is_empty() => fallback(),
        Some(MediaRef::Url(url)) => {
            let url = url.trim();
            if is_absolute_url(url) {
                url.to_string()
            } else {
                join_url(domain_prefix, url)
            }
        }
        Some(MediaRef::Pair {
            base_path,
            file_name,
        }) => {
            let base_path = base_path.trim();
            let file_name = file_name.trim();
            if is_absolute_url(base_path) {
                join_url(base_path, file_name)
            } else {
                join_url(&join_url(domain_prefix, base_path), file_name)
            }
        }
    }
}

/// Resolves a raw payload value; unrecognized shapes degrade to
/// `fallback_url` with a warning.
pub fn resolve_media_value(value: Option<&Value>, fallback_url: &str, domain_prefix: &str) -> String {
    let media = value.and_then(|v| {
        let media = MediaRef::from_value(v);
        if media.is_none() && !v.is_null() {
            warn!(kind = json_kind(v), "Unrecognized media reference, using fallback");
        }
        media
    });
    resolve_media(media.as_ref(), fallback_url, domain_prefix)
}
