//! Whole-page resolution.

use medconf_types::{Direction, Language};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::media::{MediaConfig, MediaRef};
use crate::normalize::{RenderableBlock, Sanitizer, TrustedMarkup, normalize_with};
use crate::overrides::{OverrideDocument, json_kind};
use crate::resolver::{resolve_collection, resolve_field};
use crate::spec::{ContentSpec, FieldSpec};
use crate::uniform::{StaticItem, UniformItem};

/// Read-only render configuration threaded into every page render.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub media: &'a MediaConfig,
    pub sanitizer: &'a dyn Sanitizer,
}

impl<'a> RenderContext<'a> {
    pub fn new(media: &'a MediaConfig, sanitizer: &'a dyn Sanitizer) -> Self {
        Self { media, sanitizer }
    }

    /// A context that passes backend markup through unsanitized.
    pub fn trusted(media: &'a MediaConfig) -> Self {
        Self {
            media,
            sanitizer: &TrustedMarkup,
        }
    }
}

/// The finished value of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResolvedNode {
    Text(String),
    Blocks(Vec<RenderableBlock>),
    Items(Vec<UniformItem>),
    Media(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedField {
    pub key: String,
    pub node: ResolvedNode,
}

/// A page ready for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPage {
    pub page: String,
    pub language: Language,
    pub direction: Direction,
    pub fields: Vec<ResolvedField>,
}

impl ResolvedPage {
    pub fn get(&self, key: &str) -> Option<&ResolvedNode> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| &field.node)
    }

    /// Text of a `Text` or `Media` field.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            ResolvedNode::Text(text) | ResolvedNode::Media(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn blocks(&self, key: &str) -> Option<&[RenderableBlock]> {
        match self.get(key)? {
            ResolvedNode::Blocks(blocks) => Some(blocks.as_slice()),
            _ => None,
        }
    }

    pub fn items(&self, key: &str) -> Option<&[UniformItem]> {
        match self.get(key)? {
            ResolvedNode::Items(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

/// Resolves every declared field of `spec`, in declaration order.
///
/// Always yields exactly one node per declared field, whether or not
/// `overrides` is present.
pub fn resolve_page(
    spec: &ContentSpec,
    lang: Language,
    overrides: Option<&OverrideDocument>,
    ctx: &RenderContext<'_>,
) -> ResolvedPage {
    let fields = spec
        .fields
        .iter()
        .map(|decl| ResolvedField {
            key: decl.key.to_string(),
            node: resolve_node(decl.key, &decl.spec, lang, overrides, ctx),
        })
        .collect();

    ResolvedPage {
        page: spec.page.to_string(),
        language: lang,
        direction: lang.direction(),
        fields,
    }
}

fn resolve_node(
    key: &str,
    spec: &FieldSpec,
    lang: Language,
    overrides: Option<&OverrideDocument>,
    ctx: &RenderContext<'_>,
) -> ResolvedNode {
    match spec {
        FieldSpec::Text(default) => {
            ResolvedNode::Text(resolve_field(key, lang, default, overrides).into_owned())
        }
        FieldSpec::Rich(default) => {
            let raw = resolve_field(key, lang, default, overrides);
            ResolvedNode::Blocks(normalize_with(&raw, ctx.sanitizer))
        }
        FieldSpec::Collection { shape, items } => ResolvedNode::Items(resolve_collection(
            key,
            lang,
            items,
            *shape,
            StaticItem::to_uniform,
            overrides,
        )),
        FieldSpec::Media { kind, default } => {
            let media = override_media(key, overrides).or_else(|| default.clone());
            ResolvedNode::Media(ctx.media.resolve(*kind, media.as_ref()))
        }
    }
}

/// A usable media override; empty references and unrecognized shapes fall
/// back to the default.
fn override_media(key: &str, overrides: Option<&OverrideDocument>) -> Option<MediaRef> {
    let value = overrides?.media(key)?;
    match MediaRef::from_value(value) {
        Some(media) if media.is_empty() => {
            debug!(key = %key, "Empty media override, using default");
            None
        }
        Some(media) => Some(media),
        None => {
            warn!(key = %key, kind = json_kind(value), "Unrecognized media override, using default");
            None
        }
    }
}
