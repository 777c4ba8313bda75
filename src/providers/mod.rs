// External capability providers
//
// This module provides an abstraction layer over the three external
// capabilities a turn can dispatch to: LLM completion (Gemini), web search
// (Serper), and weather lookup (WeatherAPI). Each sits behind a trait so the
// dispatcher can be exercised with test doubles.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;
pub mod serper;
pub mod weather;

pub use gemini::GeminiClient;
pub use serper::SerperClient;
pub use weather::WeatherApiClient;

/// Shared request timeout for all provider HTTP calls.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Failure modes at the provider boundary.
///
/// Every variant is caught by the dispatcher and converted to a user-facing
/// message; none of these propagate past a turn.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0} API key not configured")]
    MissingCredential(&'static str),

    #[error("request failed with status {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected payload: {0}")]
    Payload(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// One web search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

/// Current weather at a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub temp_c: f64,
    pub condition: String,
}

/// LLM completion: single prompt in, text out. No system instructions and no
/// conversation history are attached.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> ProviderResult<String>;
}

/// Web search: query plus result-count limit, ordered hits out. An empty hit
/// list is a successful response, not an error.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, limit: usize) -> ProviderResult<Vec<SearchHit>>;
}

/// Weather lookup by free-text location.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, location: &str) -> ProviderResult<Observation>;
}

/// Build the shared HTTP client used by all providers.
pub(crate) fn http_client() -> ProviderResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}
