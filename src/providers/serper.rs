// Serper web search client

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{http_client, ProviderError, ProviderResult, SearchHit, SearchProvider};
use async_trait::async_trait;

const SERPER_BASE_URL: &str = "https://google.serper.dev";

/// Serper (Google search) API client.
#[derive(Clone)]
pub struct SerperClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl SerperClient {
    pub fn new(api_key: Option<String>) -> ProviderResult<Self> {
        Ok(Self {
            client: http_client()?,
            api_key,
            base_url: SERPER_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (used by tests against a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn search(&self, query: &str, limit: usize) -> ProviderResult<Vec<SearchHit>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("Serper"))?;

        let url = format!("{}/search", self.base_url);
        let request = SearchRequest {
            q: query.to_string(),
            num: limit,
        };

        tracing::debug!(query = %query, limit, "sending Serper search request");

        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, body = %body, "Serper request failed");
            return Err(ProviderError::Status(status));
        }

        let parsed: SearchResponse = response.json().await?;

        // An empty organic list is a valid "found nothing" response.
        let hits = parsed
            .organic
            .into_iter()
            .map(|r| SearchHit {
                title: r.title,
                snippet: r.snippet,
                link: r.link,
            })
            .collect();

        Ok(hits)
    }
}

// Serper wire types

#[derive(Debug, Serialize)]
struct SearchRequest {
    q: String,
    num: usize,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}
