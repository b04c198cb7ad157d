use medconf_content::{
    DEFAULT_PLACEHOLDER, MediaConfig, MediaKind, MediaRef, is_absolute_url, join_url,
    resolve_media, resolve_media_value,
};
use proptest::prelude::*;
use serde_json::json;

const CDN: &str = "https://cdn.example";
const FALLBACK: &str = "/images/fallback.png";

// ── Resolution rules ─────────────────────────────────────────────

#[test]
fn pair_resolves_under_domain() {
    let media = MediaRef::pair("/img/", "a.png");
    assert_eq!(resolve_media(Some(&media), FALLBACK, CDN), "https://cdn.example/img/a.png");
}

#[test]
fn absent_returns_fallback() {
    assert_eq!(resolve_media(None, FALLBACK, CDN), FALLBACK);
    assert_eq!(resolve_media(Some(&MediaRef::url("")), FALLBACK, CDN), FALLBACK);
    assert_eq!(resolve_media(Some(&MediaRef::pair("/img/", " ")), FALLBACK, CDN), FALLBACK);
}

#[test]
fn absolute_url_unchanged() {
    let url = "https://other.example/x.jpg";
    assert_eq!(resolve_media(Some(&MediaRef::url(url)), FALLBACK, CDN), url);
    let data = "data:image/png;base64,AAAA";
    assert_eq!(resolve_media(Some(&MediaRef::url(data)), FALLBACK, CDN), data);
}

#[test]
fn relative_path_prefixed() {
    assert_eq!(
        resolve_media(Some(&MediaRef::url("uploads/x.jpg")), FALLBACK, CDN),
        "https://cdn.example/uploads/x.jpg"
    );
}

#[test]
fn pair_with_absolute_base_skips_prefix() {
    let media = MediaRef::pair("https://s3.example/bucket", "v.mp4");
    assert_eq!(resolve_media(Some(&media), FALLBACK, CDN), "https://s3.example/bucket/v.mp4");
}

#[test]
fn empty_fallback_uses_placeholder() {
    assert_eq!(resolve_media(None, "", CDN), DEFAULT_PLACEHOLDER);
}

// ── Loose payload values ─────────────────────────────────────────

#[test]
fn from_value_shapes() {
    assert_eq!(MediaRef::from_value(&json!("/a.png")), Some(MediaRef::url("/a.png")));
    assert_eq!(
        MediaRef::from_value(&json!({"base_path": "/img/", "file_name": "a.png"})),
        Some(MediaRef::pair("/img/", "a.png"))
    );
    assert_eq!(
        MediaRef::from_value(&json!({"path": "/img/", "name": "a.png"})),
        Some(MediaRef::pair("/img/", "a.png"))
    );
    assert_eq!(
        MediaRef::from_value(&json!({"url": "https://x/a.png"})),
        Some(MediaRef::url("https://x/a.png"))
    );
    assert_eq!(MediaRef::from_value(&json!(42)), None);
    assert_eq!(MediaRef::from_value(&json!({"width": 10})), None);
}

#[test]
fn unrecognized_value_degrades_to_fallback() {
    assert_eq!(resolve_media_value(Some(&json!([1])), FALLBACK, CDN), FALLBACK);
    assert_eq!(resolve_media_value(None, FALLBACK, CDN), FALLBACK);
}

#[test]
fn serde_untagged() {
    let media: MediaRef = serde_json::from_value(json!({"path": "/p/", "name": "f.jpg"})).unwrap();
    assert_eq!(media, MediaRef::pair("/p/", "f.jpg"));
    let media: MediaRef = serde_json::from_value(json!("x.jpg")).unwrap();
    assert_eq!(media, MediaRef::url("x.jpg"));
}

// ── Config ───────────────────────────────────────────────────────

#[test]
fn config_placeholders_per_kind() {
    let config = MediaConfig::with_domain(CDN);
    assert_eq!(config.resolve(MediaKind::Image, None), config.image_placeholder);
    assert_eq!(config.resolve(MediaKind::Video, None), config.video_placeholder);
    assert_eq!(
        config.resolve(MediaKind::Image, Some(&MediaRef::url("/a.png"))),
        "https://cdn.example/a.png"
    );
}

// ── Helpers ──────────────────────────────────────────────────────

#[test]
fn absolute_detection() {
    assert!(is_absolute_url("HTTPS://x"));
    assert!(is_absolute_url("//cdn/x"));
    assert!(!is_absolute_url("/x"));
    assert!(!is_absolute_url("img/x"));
}

#[test]
fn join_single_slash() {
    assert_eq!(join_url("a/", "/b"), "a/b");
    assert_eq!(join_url("a", "b"), "a/b");
    assert_eq!(join_url("", "/b"), "/b");
    assert_eq!(join_url("a", ""), "a");
}

proptest! {
    /// All shapes naming the same file resolve to the same URL.
    #[test]
    fn shapes_agree(dir in "[a-z]{1,8}", file in "[a-z]{1,8}\\.(png|jpg)") {
        let expected = format!("{CDN}/{dir}/{file}");
        let shapes = [
            MediaRef::url(expected.clone()),
            MediaRef::url(format!("/{dir}/{file}")),
            MediaRef::url(format!("{dir}/{file}")),
            MediaRef::pair(format!("/{dir}/"), file.clone()),
            MediaRef::pair(format!("/{dir}"), file.clone()),
        ];
        for media in &shapes {
            prop_assert_eq!(resolve_media(Some(media), FALLBACK, CDN), expected.clone());
        }
    }

    /// Never returns an empty string.
    #[test]
    fn never_empty(reference in ".{0,20}", fallback in ".{0,10}", prefix in ".{0,10}") {
        let media = MediaRef::url(reference);
        prop_assert!(!resolve_media(Some(&media), &fallback, &prefix).is_empty());
        prop_assert!(!resolve_media(None, &fallback, &prefix).is_empty());
    }
}
