//! Page-visit sessions.
//!
//! Overrides are fetched once per visit. Until they arrive every field shows
//! its static default. A fetch that completes after the reader has moved to
//! another page is discarded instead of being applied to the new page.

use medconf_content::OverrideDocument;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::source::OverrideSource;

/// Identifies one page visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitToken {
    generation: u64,
    page: String,
}

impl VisitToken {
    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// What happened to a fetch started by [`PageSession::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The document is now held for the visit.
    Applied,
    /// The backend has no overrides for the page.
    NoOverrides,
    /// The visit ended before the fetch finished.
    Discarded,
    /// The fetch failed; static defaults stay in place.
    Failed(String),
}

#[derive(Debug, Default)]
struct VisitState {
    generation: u64,
    page: Option<String>,
    overrides: Option<Arc<OverrideDocument>>,
}

/// Holds the override document for the current page visit.
pub struct PageSession<S: ?Sized> {
    source: Arc<S>,
    state: Arc<RwLock<VisitState>>,
}

impl<S: ?Sized> Clone for PageSession<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: OverrideSource> PageSession<S> {
    pub fn new(source: S) -> Self {
        Self::from_arc(Arc::new(source))
    }
}

impl<S: OverrideSource + ?Sized> PageSession<S> {
    pub fn from_arc(source: Arc<S>) -> Self {
        Self {
            source,
            state: Arc::new(RwLock::new(VisitState::default())),
        }
    }

    /// Starts a visit to `page`, ending the previous one and dropping its
    /// overrides.
    pub async fn navigate(&self, page: impl Into<String>) -> VisitToken {
        let page = page.into();
        let mut state = self.state.write().await;
        state.generation += 1;
        state.page = Some(page.clone());
        state.overrides = None;
        debug!(page = %page, generation = state.generation, "Page visit started");
        VisitToken {
            generation: state.generation,
            page,
        }
    }

    /// Ends the current visit without starting another.
    pub async fn leave(&self) {
        let mut state = self.state.write().await;
        state.generation += 1;
        state.page = None;
        state.overrides = None;
    }

    /// True while `token` is the active visit.
    pub async fn is_current(&self, token: &VisitToken) -> bool {
        self.state.read().await.generation == token.generation
    }

    /// Fetches overrides for the visit and applies them if it is still
    /// current.
    pub async fn load(&self, token: &VisitToken) -> LoadOutcome {
        let fetched = self.source.fetch(&token.page).await;

        let mut state = self.state.write().await;
        if state.generation != token.generation {
            debug!(page = %token.page, "Visit ended before overrides arrived, discarding");
            return LoadOutcome::Discarded;
        }
        match fetched {
            Ok(Some(doc)) => {
                state.overrides = Some(Arc::new(doc));
                LoadOutcome::Applied
            }
            Ok(None) => LoadOutcome::NoOverrides,
            Err(e) => {
                warn!(page = %token.page, backend = self.source.name(), error = %e, "Override fetch failed, showing defaults");
                LoadOutcome::Failed(e.to_string())
            }
        }
    }

    /// Overrides held for the current visit, if any.
    pub async fn overrides(&self) -> Option<Arc<OverrideDocument>> {
        self.state.read().await.overrides.clone()
    }

    /// The page of the current visit.
    pub async fn current_page(&self) -> Option<String> {
        self.state.read().await.page.clone()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
