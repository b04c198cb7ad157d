use medconf_content::{
    FieldSpec, MediaConfig, OverrideDocument, RenderContext, ResolvedNode, resolve_page,
};
use medconf_pages::{Page, PageError};
use medconf_types::Language;
use serde_json::json;
use std::collections::HashSet;

// ── Slugs ────────────────────────────────────────────────────────

#[test]
fn slugs_round_trip() {
    for page in Page::ALL {
        assert_eq!(Page::from_slug(page.slug()), Some(page));
        assert_eq!(page.to_string().parse::<Page>().unwrap(), page);
    }
}

#[test]
fn unknown_slug() {
    assert_eq!(Page::from_slug("pricing"), None);
    let err = "pricing".parse::<Page>().unwrap_err();
    assert!(matches!(err, PageError::UnknownPage(ref s) if s == "pricing"));
}

#[test]
fn serde_uses_slug() {
    assert_eq!(serde_json::to_value(Page::Conferences).unwrap(), json!("conferences"));
}

#[test]
fn titles_are_bilingual() {
    for page in Page::ALL {
        let title = page.title();
        assert!(!title.resolve(Language::Ar).is_empty());
        assert!(!title.resolve(Language::En).is_empty());
    }
}

// ── Specifications ───────────────────────────────────────────────

#[test]
fn spec_page_matches_slug() {
    for page in Page::ALL {
        assert_eq!(page.spec().page, page.slug());
    }
}

#[test]
fn spec_keys_are_unique() {
    for page in Page::ALL {
        let spec = page.spec();
        let keys: HashSet<_> = spec.keys().collect();
        assert_eq!(keys.len(), spec.len(), "duplicate key on {page}");
    }
}

#[test]
fn every_text_default_has_both_languages() {
    for page in Page::ALL {
        for decl in page.spec().fields {
            if let FieldSpec::Text(value) | FieldSpec::Rich(value) = &decl.spec {
                assert!(!value.ar.is_empty(), "{page}.{} missing ar", decl.key);
                assert!(!value.en.is_empty(), "{page}.{} missing en", decl.key);
            }
        }
    }
}

#[test]
fn collections_are_uniform() {
    for page in Page::ALL {
        for decl in page.spec().fields {
            if let FieldSpec::Collection { shape, items } = &decl.spec {
                assert!(!items.is_empty());
                assert!(items.iter().all(|item| item.shape() == *shape));
            }
        }
    }
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn every_page_renders_every_field_in_both_languages() {
    let media = MediaConfig::default();
    let ctx = RenderContext::trusted(&media);
    for page in Page::ALL {
        let spec = page.spec();
        for lang in Language::ALL {
            let resolved = resolve_page(&spec, lang, None, &ctx);
            assert_eq!(resolved.fields.len(), spec.len());
            assert_eq!(resolved.language, lang);
        }
    }
}

#[test]
fn home_services_override() {
    let media = MediaConfig::default();
    let ctx = RenderContext::trusted(&media);
    let doc = OverrideDocument::new().with(
        "services",
        json!([
            {"icon": "🧠", "title_ar": "أعصاب", "title_en": "Neurology", "description_en": "Neuro events"},
            {"title_en": "Cardiology"},
        ]),
    );
    let page = resolve_page(&Page::Home.spec(), Language::En, Some(&doc), &ctx);
    let items = page.items("services").unwrap();
    assert_eq!(items.len(), 2);
}

#[test]
fn founder_milestones_default() {
    let media = MediaConfig::default();
    let page = resolve_page(
        &Page::Founder.spec(),
        Language::Ar,
        None,
        &RenderContext::trusted(&media),
    );
    let Some(ResolvedNode::Items(items)) = page.get("milestones") else {
        panic!("milestones should resolve to items");
    };
    assert_eq!(items.len(), 3);
}

#[test]
fn founder_bio_has_list() {
    let media = MediaConfig::default();
    let page = resolve_page(
        &Page::Founder.spec(),
        Language::En,
        None,
        &RenderContext::trusted(&media),
    );
    let blocks = page.blocks("bio_text").unwrap();
    assert!(blocks.iter().any(|b| matches!(b, medconf_content::RenderableBlock::List(items) if items.len() == 2)));
}
