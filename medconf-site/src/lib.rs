//! HTTP API for resolved MedConf page content.
//!
//! Each request to a page endpoint is one page visit: overrides are fetched
//! once from the configured source, merged over the page's compiled-in
//! defaults, and returned as renderer-ready JSON.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use medconf_cms::OverrideSource;
use medconf_content::{
    MediaConfig, OverrideDocument, RenderContext, ResolvedPage, Sanitizer, resolve_page,
};
use medconf_pages::Page;
use medconf_types::{Direction, Language};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Shared, read-only state threaded into every handler.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn OverrideSource>,
    pub media: Arc<MediaConfig>,
    pub sanitizer: Arc<dyn Sanitizer>,
    /// Used when a request carries no `lang` parameter.
    pub default_language: Language,
}

impl AppState {
    pub fn new(
        source: Arc<dyn OverrideSource>,
        media: MediaConfig,
        sanitizer: Arc<dyn Sanitizer>,
        default_language: Language,
    ) -> Self {
        Self {
            source,
            media: Arc::new(media),
            sanitizer,
            default_language,
        }
    }

    fn language(&self, tag: Option<&str>) -> Language {
        tag.map_or(self.default_language, Language::from_tag)
    }
}

#[derive(Debug, Deserialize)]
pub struct LangQuery {
    pub lang: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PageSummary {
    pub slug: String,
    pub title: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PageIndex {
    pub language: Language,
    pub direction: Direction,
    pub pages: Vec<PageSummary>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors returned by the API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::UnknownPage(_) => StatusCode::NOT_FOUND,
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Resolves `page` in `lang`, using whatever overrides the source has.
///
/// A failed fetch is logged and the page renders its static defaults.
pub async fn render_page(state: &AppState, page: Page, lang: Language) -> ResolvedPage {
    let overrides = fetch_overrides(state.source.as_ref(), page).await;
    let ctx = RenderContext::new(&state.media, state.sanitizer.as_ref());
    resolve_page(&page.spec(), lang, overrides.as_ref(), &ctx)
}

async fn fetch_overrides(source: &dyn OverrideSource, page: Page) -> Option<OverrideDocument> {
    match source.fetch(page.slug()).await {
        Ok(doc) => doc,
        Err(e) => {
            warn!(page = %page, backend = source.name(), error = %e, "Override fetch failed, showing defaults");
            None
        }
    }
}

async fn page_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<LangQuery>,
) -> Result<Json<ResolvedPage>, ApiError> {
    let page = Page::from_slug(&slug).ok_or(ApiError::UnknownPage(slug))?;
    let lang = state.language(query.lang.as_deref());
    Ok(Json(render_page(&state, page, lang).await))
}

async fn index_handler(
    State(state): State<AppState>,
    Query(query): Query<LangQuery>,
) -> Json<PageIndex> {
    let lang = state.language(query.lang.as_deref());
    let pages = Page::ALL
        .into_iter()
        .map(|page| PageSummary {
            slug: page.slug().to_string(),
            title: page.title().resolve(lang).to_string(),
        })
        .collect();
    Json(PageIndex {
        language: lang,
        direction: lang.direction(),
        pages,
    })
}

/// Build the HTTP API router with the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/pages", get(index_handler))
        .route("/api/v1/pages/{slug}", get(page_handler))
        .with_state(state)
}
