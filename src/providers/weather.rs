// WeatherAPI.com current-conditions client
//
// WeatherAPI reports some failures as an "error" object inside an HTTP 200
// body, so the payload is checked even on success status.

use reqwest::Client;
use serde::Deserialize;

use super::{http_client, Observation, ProviderError, ProviderResult, WeatherProvider};
use async_trait::async_trait;

const WEATHER_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// WeatherAPI.com client.
#[derive(Clone)]
pub struct WeatherApiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherApiClient {
    pub fn new(api_key: Option<String>) -> ProviderResult<Self> {
        Ok(Self {
            client: http_client()?,
            api_key,
            base_url: WEATHER_BASE_URL.to_string(),
        })
    }

    /// Override the API base URL (used by tests against a local mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, location: &str) -> ProviderResult<Observation> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential("Weather"))?;

        let url = format!("{}/current.json", self.base_url);

        tracing::debug!(location = %location, "sending weather request");

        let response = self
            .client
            .get(&url)
            .query(&[("key", api_key), ("q", location), ("aqi", "no")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, location = %location, "weather request failed");
            return Err(ProviderError::Status(status));
        }

        let parsed: CurrentResponse = response.json().await?;

        if let Some(err) = parsed.error {
            return Err(ProviderError::Payload(err.message));
        }

        let current = parsed
            .current
            .ok_or_else(|| ProviderError::Payload("missing current conditions".to_string()))?;

        Ok(Observation {
            temp_c: current.temp_c,
            condition: current.condition.text,
        })
    }
}

// WeatherAPI wire types

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: Option<Current>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Current {
    temp_c: f64,
    condition: Condition,
}

#[derive(Debug, Deserialize)]
struct Condition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}
