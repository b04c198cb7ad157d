use medconf_cms::{CmsConfig, CmsError, HttpOverrideSource, OverrideSource};
use medconf_types::Language;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn source_for(server: &MockServer) -> HttpOverrideSource {
    let config = CmsConfig {
        api_base_url: format!("{}/api", server.uri()),
        timeout_secs: 5,
        max_retries: 2,
        retry_backoff_ms: 1,
    };
    HttpOverrideSource::new(config).unwrap()
}

// ── Config ───────────────────────────────────────────────────────

#[test]
fn config_default() {
    let cfg = CmsConfig::default();
    assert_eq!(cfg.api_base_url, "https://cms.medconf-eval.com/api");
    assert_eq!(cfg.max_retries, 2);
}

#[test]
fn page_url_trims_slash() {
    let cfg = CmsConfig::with_base_url("https://cms.example/api/");
    assert_eq!(cfg.page_url("about"), "https://cms.example/api/pages/about");
}

#[test]
fn config_serde_roundtrip() {
    let cfg = CmsConfig::with_base_url("http://localhost:9000");
    let json = serde_json::to_string(&cfg).unwrap();
    let back: CmsConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.api_base_url, "http://localhost:9000");
    assert_eq!(back.timeout_secs, cfg.timeout_secs);
}

#[test]
fn empty_base_url_rejected() {
    let err = HttpOverrideSource::new(CmsConfig::with_base_url(" ")).err().unwrap();
    assert!(matches!(err, CmsError::Config(_)));
}

// ── Fetching ─────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_returns_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pages/about"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "title_en": "About the team",
            "values": [{"title_en": "Rigor"}],
        })))
        .mount(&server)
        .await;

    let source = source_for(&server);
    assert_eq!(source.name(), "http");
    let doc = source.fetch("about").await.unwrap().unwrap();
    assert_eq!(doc.scalar("title", Language::En).as_scalar(), Some("About the team"));
    assert_eq!(doc.collection("values").as_collection().unwrap().len(), 1);
}

#[tokio::test]
async fn fetch_not_found_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/pages/home"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(source_for(&server).fetch("home").await.unwrap().is_none());
}

#[tokio::test]
async fn fetch_client_error_is_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let err = source_for(&server).fetch("home").await.unwrap_err();
    assert!(matches!(err, CmsError::Api { status: 403 }));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn fetch_retries_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let err = source_for(&server).fetch("home").await.unwrap_err();
    assert!(matches!(err, CmsError::Api { status: 503 }));
    assert!(err.is_transient());
}

#[tokio::test]
async fn fetch_recovers_after_transient_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"title_ar": "عنوان"})))
        .mount(&server)
        .await;

    let doc = source_for(&server).fetch("home").await.unwrap().unwrap();
    assert_eq!(doc.scalar("title", Language::Ar).as_scalar(), Some("عنوان"));
}

#[tokio::test]
async fn fetch_non_object_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
        .mount(&server)
        .await;

    let err = source_for(&server).fetch("home").await.unwrap_err();
    assert!(matches!(err, CmsError::MalformedDocument(_)));
}

#[tokio::test]
async fn fetch_invalid_json_is_http_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{oops"))
        .expect(1)
        .mount(&server)
        .await;

    let err = source_for(&server).fetch("home").await.unwrap_err();
    assert!(matches!(err, CmsError::Http(_)));
}
