//! HTTP override source backed by the content-management API.

use async_trait::async_trait;
use medconf_content::OverrideDocument;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::error::{CmsError, CmsResult};
use crate::source::OverrideSource;

/// Content-management API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Base URL, e.g. `https://cms.medconf-eval.com/api`.
    pub api_base_url: String,
    /// Per-request timeout (in seconds).
    pub timeout_secs: u64,
    /// Extra attempts after a transient failure.
    pub max_retries: u32,
    /// Delay before the first retry, grown linearly (in milliseconds).
    pub retry_backoff_ms: u64,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://cms.medconf-eval.com/api".to_string(),
            timeout_secs: 10,
            max_retries: 2,
            retry_backoff_ms: 250,
        }
    }
}

impl CmsConfig {
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }

    /// URL of the override document for `page`.
    pub fn page_url(&self, page: &str) -> String {
        format!("{}/pages/{}", self.api_base_url.trim_end_matches('/'), page)
    }
}

/// Fetches override documents over HTTP.
pub struct HttpOverrideSource {
    config: CmsConfig,
    client: Client,
}

impl HttpOverrideSource {
    pub fn new(config: CmsConfig) -> CmsResult<Self> {
        if config.api_base_url.trim().is_empty() {
            return Err(CmsError::Config("api_base_url is empty".to_string()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &CmsConfig {
        &self.config
    }

    async fn fetch_once(&self, url: &str) -> CmsResult<Option<OverrideDocument>> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CmsError::Api {
                status: status.as_u16(),
            });
        }

        let body: Value = resp.json().await?;
        match body {
            Value::Object(fields) => Ok(Some(OverrideDocument::from(fields))),
            Value::Null => Ok(None),
            other => Err(CmsError::MalformedDocument(format!(
                "expected a JSON object, got {}",
                match other {
                    Value::Array(_) => "an array",
                    Value::String(_) => "a string",
                    Value::Number(_) => "a number",
                    _ => "a boolean",
                }
            ))),
        }
    }
}

#[async_trait]
impl OverrideSource for HttpOverrideSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self, page: &str) -> CmsResult<Option<OverrideDocument>> {
        let url = self.config.page_url(page);
        let mut attempt = 0;
        loop {
            match self.fetch_once(&url).await {
                Ok(doc) => {
                    debug!(page = %page, found = doc.is_some(), "Fetched override document");
                    return Ok(doc);
                }
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(page = %page, attempt, error = %e, "Override fetch failed, retrying");
                    let delay = self.config.retry_backoff_ms * u64::from(attempt);
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
