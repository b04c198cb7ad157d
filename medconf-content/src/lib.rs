//! Bilingual content resolution for the MedConf site.
//!
//! Every page decides, field by field, what to display from three inputs:
//! the selected [`Language`](medconf_types::Language), a compiled-in
//! [`ContentSpec`], and an optional [`OverrideDocument`] fetched from the
//! content-management backend. This crate holds that pipeline:
//! - [`resolve_field`] / [`resolve_collection`]: dynamic override beats
//!   static default, per field and per language, never merged
//! - [`normalize`]: classifies text as markup or plain text and segments
//!   plain text into paragraphs, lists and spacers
//! - [`resolve_media`]: turns any of the upstream image/video reference
//!   shapes into one absolute URL, with placeholder fallback
//! - [`resolve_page`]: runs all of the above over a whole [`ContentSpec`]
//!
//! All of it is synchronous and total: malformed input degrades to the most
//! conservative default and is reported through `tracing`, never as an error.
//!
//! # Trust boundary
//!
//! Markup supplied by the backend is passed to the renderer after going
//! through an injected [`Sanitizer`]. [`TrustedMarkup`] performs no
//! sanitization at all; deployments that use it rely on the backend having
//! cleaned the markup before publishing it.

mod media;
mod normalize;
mod overrides;
mod page;
mod resolver;
mod spec;
mod uniform;

pub use media::{
    DEFAULT_PLACEHOLDER, MediaConfig, MediaKind, MediaRef, is_absolute_url, join_url,
    resolve_media, resolve_media_value,
};
pub use normalize::{
    EscapeMarkup, RenderableBlock, Sanitizer, TrustedMarkup, blocks_to_text, is_markup, normalize,
    normalize_with,
};
pub use overrides::{FieldOverride, OverrideDocument, namespaced_key};
pub use page::{RenderContext, ResolvedField, ResolvedNode, ResolvedPage, resolve_page};
pub use resolver::{override_items, resolve_collection, resolve_field};
pub use spec::{ContentSpec, FieldDecl, FieldSpec};
pub use uniform::{DEFAULT_ICON, ItemShape, StaticItem, UniformItem};
