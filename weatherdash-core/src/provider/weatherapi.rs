use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::{error::FetchError, model::Location};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

// Keeps the API key out of logs.
impl std::fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("base_url", &self.base_url)
            .field("api_key_set", &!self.api_key.is_empty())
            .finish()
    }
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn get_json(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!(endpoint, %url, "requesting WeatherAPI");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Request { endpoint, source })?;

        let status = res.status();
        let body = res.text().await.map_err(|source| FetchError::Request { endpoint, source })?;

        if !status.is_success() {
            let (code, message) = provider_error(&body);
            tracing::warn!(endpoint, status = status.as_u16(), ?code, "WeatherAPI request failed");
            return Err(FetchError::Status { endpoint, status: status.as_u16(), code, message });
        }

        serde_json::from_str(&body).map_err(|source| FetchError::InvalidBody { endpoint, source })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn fetch_current(&self, location: &Location) -> Result<Value, FetchError> {
        self.get_json("current", "current.json", &[("q", location.query()), ("aqi", "no")])
            .await
    }

    async fn fetch_forecast(&self, location: &Location, days: u8) -> Result<Value, FetchError> {
        let days = days.to_string();
        self.get_json(
            "forecast",
            "forecast.json",
            &[("q", location.query()), ("days", days.as_str()), ("aqi", "no")],
        )
        .await
    }
}

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: WaErrorDetail,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    code: Option<i64>,
    message: String,
}

/// Extract WeatherAPI's `{"error": {"code", "message"}}` envelope, falling back to the raw body.
fn provider_error(body: &str) -> (Option<i64>, String) {
    match serde_json::from_str::<WaErrorBody>(body) {
        Ok(parsed) => (parsed.error.code, parsed.error.message),
        Err(_) => (None, truncate_body(body)),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
