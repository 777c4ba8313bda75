// Google Gemini completion client
//
// Single-prompt generateContent calls only; the routing core never attaches
// conversation history or system instructions.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{http_client, CompletionProvider, ProviderError, ProviderResult};
use async_trait::async_trait;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client. A missing key is not an error until a
    /// completion is actually requested.
    pub fn new(api_key: Option<String>) -> ProviderResult<Self> {
        Ok(Self {
            client: http_client()?,
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Override the default model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the API base URL (used by tests against a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn complete(&self, prompt: &str) -> ProviderResult<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("Gemini"))?;

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        tracing::debug!(model = %self.model, "sending Gemini completion request");

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, body = %body, "Gemini request failed");
            return Err(ProviderError::Status(status));
        }

        let parsed: GenerateResponse = response.json().await?;
        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::Payload("no candidates in response".to_string()))?;

        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(text)
    }
}

// Gemini wire types

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = GeminiClient::new(Some("test-key".to_string()));
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_model() {
        let client = GeminiClient::new(Some("test-key".to_string())).unwrap();
        assert_eq!(client.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_custom_model() {
        let client = GeminiClient::new(Some("test-key".to_string()))
            .unwrap()
            .with_model("gemini-1.5-pro");
        assert_eq!(client.model, "gemini-1.5-pro");
    }

    #[tokio::test]
    async fn test_missing_key_fails_at_call_time() {
        let client = GeminiClient::new(None).unwrap();
        let err = client.complete("hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredential("Gemini")));
    }

    #[tokio::test]
    async fn test_complete_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/models/gemini-1.5-flash:generateContent?key=test-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hello "},{"text":"there"}]}}]}"#,
            )
            .create_async()
            .await;

        let client = GeminiClient::new(Some("test-key".to_string()))
            .unwrap()
            .with_base_url(server.url());

        let text = client.complete("hi").await.unwrap();
        assert_eq!(text, "Hello there");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_complete_http_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/models/gemini-1.5-flash:generateContent?key=test-key",
            )
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let client = GeminiClient::new(Some("test-key".to_string()))
            .unwrap()
            .with_base_url(server.url());

        let err = client.complete("hi").await.unwrap_err();
        assert!(matches!(err, ProviderError::Status(s) if s.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_complete_no_candidates() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "POST",
                "/models/gemini-1.5-flash:generateContent?key=test-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let client = GeminiClient::new(Some("test-key".to_string()))
            .unwrap()
            .with_base_url(server.url());

        let err = client.complete("hi").await.unwrap_err();
        assert!(matches!(err, ProviderError::Payload(_)));
    }
}
