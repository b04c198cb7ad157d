//! Compiled-in content specifications.

use medconf_types::BilingualValue;

use crate::media::{MediaKind, MediaRef};
use crate::uniform::{ItemShape, StaticItem};

/// How a declared field is defaulted and rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSpec {
    /// Short display text (headings, labels, button captions).
    Text(BilingualValue),
    /// Longer text that may be markup or structured plain text.
    Rich(BilingualValue),
    /// A repeating list of uniform items.
    Collection {
        shape: ItemShape,
        items: Vec<StaticItem>,
    },
    /// An image or video; `None` renders the placeholder unless overridden.
    Media {
        kind: MediaKind,
        default: Option<MediaRef>,
    },
}

/// One declared field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub key: &'static str,
    pub spec: FieldSpec,
}

/// The default content of one page or section, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSpec {
    pub page: &'static str,
    pub fields: Vec<FieldDecl>,
}

impl ContentSpec {
    /// Creates an empty specification for `page`.
    pub fn new(page: &'static str) -> Self {
        Self {
            page,
            fields: Vec::new(),
        }
    }

    /// Declares a field. Redeclaring a key replaces the earlier spec in place.
    #[must_use]
    pub fn field(mut self, key: &'static str, spec: FieldSpec) -> Self {
        match self.fields.iter_mut().find(|decl| decl.key == key) {
            Some(decl) => decl.spec = spec,
            None => self.fields.push(FieldDecl { key, spec }),
        }
        self
    }

    #[must_use]
    pub fn text(self, key: &'static str, default: BilingualValue) -> Self {
        self.field(key, FieldSpec::Text(default))
    }

    #[must_use]
    pub fn rich(self, key: &'static str, default: BilingualValue) -> Self {
        self.field(key, FieldSpec::Rich(default))
    }

    /// Declares a collection; every item must have the declared shape.
    #[must_use]
    pub fn collection(self, key: &'static str, shape: ItemShape, items: Vec<StaticItem>) -> Self {
        debug_assert!(
            items.iter().all(|item| item.shape() == shape),
            "collection {key} mixes item shapes"
        );
        self.field(key, FieldSpec::Collection { shape, items })
    }

    #[must_use]
    pub fn media(self, key: &'static str, kind: MediaKind, default: Option<MediaRef>) -> Self {
        self.field(key, FieldSpec::Media { kind, default })
    }

    /// Looks up a declared field.
    pub fn get(&self, key: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|decl| decl.key == key)
            .map(|decl| &decl.spec)
    }

    /// Declared keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|decl| decl.key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
