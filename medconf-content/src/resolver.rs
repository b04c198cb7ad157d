//! CMS override resolution: dynamic beats static, per field and language.

use medconf_types::{BilingualValue, Language};
use std::borrow::Cow;
use tracing::warn;

use crate::overrides::{FieldOverride, OverrideDocument};
use crate::uniform::{ItemShape, UniformItem};

/// Resolves a scalar field.
///
/// A non-empty override at `<field_key>_<lang>` wins verbatim; otherwise the
/// static default's `lang` branch is used. The other language's override
/// state never matters, and there is no partial merge.
pub fn resolve_field<'a>(
    field_key: &str,
    lang: Language,
    static_default: &'a BilingualValue,
    overrides: Option<&'a OverrideDocument>,
) -> Cow<'a, str> {
    if let Some(FieldOverride::Scalar(text)) = overrides.map(|doc| doc.scalar(field_key, lang)) {
        return text;
    }
    Cow::Borrowed(static_default.resolve(lang))
}

/// Resolves a collection field.
///
/// A usable override list replaces the static items entirely; otherwise each
/// static item goes through `uniform_mapper`. The result always has the
/// length of whichever source was selected.
pub fn resolve_collection<T, F>(
    field_key: &str,
    lang: Language,
    static_items: &[T],
    shape: ItemShape,
    uniform_mapper: F,
    overrides: Option<&OverrideDocument>,
) -> Vec<UniformItem>
where
    F: Fn(&T, Language) -> UniformItem,
{
    if let Some(items) = overrides.and_then(|doc| override_items(doc, field_key, shape, lang)) {
        return items;
    }
    static_items
        .iter()
        .map(|item| uniform_mapper(item, lang))
        .collect()
}

/// Maps the override list for `field_key` into `shape`.
///
/// Returns `None` when there is no usable list. A list containing a
/// non-object record is unusable as a whole.
pub fn override_items(
    doc: &OverrideDocument,
    field_key: &str,
    shape: ItemShape,
    lang: Language,
) -> Option<Vec<UniformItem>> {
    let records = doc.collection(field_key).as_collection()?;
    let items = records
        .iter()
        .map(|record| {
            record
                .as_object()
                .map(|obj| UniformItem::from_record(obj, shape, lang))
        })
        .collect::<Option<Vec<_>>>();
    if items.is_none() {
        warn!(key = %field_key, "Collection override has non-object records, using default");
    }
    items
}
