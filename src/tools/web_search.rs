//! Web search tool
//!
//! Queries a Serper-style JSON search backend and formats the top hits as
//! plain text for the follow-up prompt. Hit records are tolerated in both
//! historically-observed field conventions (`link` and `href`). Backend
//! failures come back as `"Error performing search: ..."` text; no caching,
//! no retry.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::SearchConfig;

/// Search client over a JSON search backend
pub struct SearchProvider {
    config: SearchConfig,
    client: Client,
}

/// A single search hit as returned by the backend
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    // Older backend versions name this field `href`.
    #[serde(alias = "href")]
    pub link: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<SearchHit>,
}

impl SearchProvider {
    /// Create a new search provider from configuration.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SearchError::Client(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Run a search and return formatted hits, `"No results found."`, or
    /// `"Error performing search: <message>"`.
    pub async fn search(&self, query: &str) -> String {
        match self.fetch(query).await {
            Ok(hits) if hits.is_empty() => "No results found.".to_string(),
            Ok(hits) => format_hits(&hits),
            Err(e) => format!("Error performing search: {e}"),
        }
    }

    async fn fetch(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        if self.config.api_key.is_empty() {
            return Err(SearchError::NotConfigured(
                "search API key is not set".to_string(),
            ));
        }

        let payload = build_search_payload(query, self.config.max_results);

        let response = self
            .client
            .post(&self.config.endpoint)
            .header("X-API-KEY", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| SearchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SearchError::Status(status.as_u16(), error_text));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(parsed
            .organic
            .into_iter()
            .take(self.config.max_results)
            .collect())
    }
}

/// Build the backend request payload (pure function).
fn build_search_payload(query: &str, max_results: usize) -> Value {
    json!({
        "q": query,
        "num": max_results,
    })
}

/// Format hits as three-line blocks: title, snippet, link (pure function).
fn format_hits(hits: &[SearchHit]) -> String {
    hits.iter()
        .map(|hit| format!("- {}\n  {}\n  Link: {}", hit.title, hit.snippet, hit.link))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Search backend errors (internal; folded to text in `search`)
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),
    #[error("{0}")]
    NotConfigured(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("backend returned status {0}: {1}")]
    Status(u16, String),
    #[error("failed to parse response: {0}")]
    Parse(String),
}
