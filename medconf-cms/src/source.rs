//! Override source abstraction.

use async_trait::async_trait;
use medconf_content::OverrideDocument;
use std::collections::HashMap;

use crate::error::CmsResult;

/// Supplies the override document for a page.
#[async_trait]
pub trait OverrideSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Fetches overrides for `page`. `Ok(None)` means the backend has none.
    async fn fetch(&self, page: &str) -> CmsResult<Option<OverrideDocument>>;
}

/// Default mode: no backend, every page renders its static content.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

#[async_trait]
impl OverrideSource for OfflineSource {
    fn name(&self) -> &'static str {
        "offline"
    }

    async fn fetch(&self, _page: &str) -> CmsResult<Option<OverrideDocument>> {
        Ok(None)
    }
}

/// In-memory documents keyed by page slug.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: HashMap<String, OverrideDocument>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, page: impl Into<String>, doc: OverrideDocument) -> Self {
        self.documents.insert(page.into(), doc);
        self
    }
}

#[async_trait]
impl OverrideSource for StaticSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self, page: &str) -> CmsResult<Option<OverrideDocument>> {
        Ok(self.documents.get(page).cloned())
    }
}
