use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;
use crate::sources::ListingSource;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";
pub const DEFAULT_USER_AGENT: &str = "HH-User-Agent";
pub const DEFAULT_PER_PAGE: u32 = 100;
pub const DEFAULT_MAX_PAGES: u32 = 20;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`HeadHunter`].
#[derive(Debug, Clone)]
pub struct HeadHunterOptions {
    pub base_url: String,
    pub user_agent: String,
    pub per_page: u32,
    pub max_pages: u32,
    pub timeout: Duration,
}

impl Default for HeadHunterOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// One page of `GET /vacancies`.
#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<Value>,
    /// Total number of pages the provider is willing to serve.
    pages: Option<u32>,
}

/// hh.ru vacancy search.
pub struct HeadHunter {
    client: reqwest::Client,
    endpoint: String,
    per_page: u32,
    max_pages: u32,
}

impl HeadHunter {
    pub fn new(options: HeadHunterOptions) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(&options.user_agent)
            .timeout(options.timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: format!("{}/vacancies", options.base_url.trim_end_matches('/')),
            per_page: options.per_page,
            max_pages: options.max_pages,
        })
    }

    /// Check the endpoint answers at all before paging through results.
    async fn check_connectivity(&self) -> Result<(), AppError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| AppError::Connectivity(format!("{}: {e}", self.endpoint)))?;

        if !resp.status().is_success() {
            return Err(AppError::Connectivity(format!(
                "{} returned {}",
                self.endpoint,
                resp.status()
            )));
        }
        Ok(())
    }

    async fn fetch_page(&self, keyword: &str, page: u32) -> Result<SearchPage, String> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("text", keyword)])
            .query(&[("page", page), ("per_page", self.per_page)])
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        if !resp.status().is_success() {
            return Err(format!("returned {}", resp.status()));
        }

        resp.json()
            .await
            .map_err(|e| format!("failed to parse response: {e}"))
    }
}

#[async_trait]
impl ListingSource for HeadHunter {
    fn name(&self) -> &str {
        "hh.ru"
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Value>, AppError> {
        self.check_connectivity().await?;

        let mut items = Vec::new();
        let mut page = 0;

        while page < self.max_pages {
            let batch = match self.fetch_page(keyword, page).await {
                Ok(batch) => batch,
                Err(e) => {
                    tracing::warn!(
                        "hh.ru page {page} for '{keyword}' {e}; keeping {} items",
                        items.len()
                    );
                    break;
                }
            };

            tracing::debug!("hh.ru page {page}: {} items", batch.items.len());
            let exhausted = batch.items.is_empty();
            items.extend(batch.items);
            page += 1;

            if exhausted || batch.pages.is_some_and(|pages| page >= pages) {
                break;
            }
        }

        tracing::info!(
            "hh.ru search '{keyword}': {} items from {page} pages",
            items.len()
        );
        Ok(items)
    }
}

#[cfg(test)]
#[path = "headhunter_tests.rs"]
mod tests;
