use crate::{
    config::ResolvedConfig,
    error::FetchError,
    model::Location,
    provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

pub mod weatherapi;

/// Forecast horizon requested from the provider, in days.
pub const FORECAST_DAYS: u8 = 5;

/// A source of provider-native weather JSON.
///
/// Both calls return the payload untouched; shaping it is the normalizer's job.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, location: &Location) -> Result<Value, FetchError>;

    async fn fetch_forecast(&self, location: &Location, days: u8) -> Result<Value, FetchError>;
}

/// Construct the WeatherAPI.com provider from resolved configuration.
pub fn provider_from_config(config: &ResolvedConfig) -> Box<dyn WeatherProvider> {
    if config.api_key.is_empty() {
        tracing::warn!("no WeatherAPI key configured; requests will be rejected by the provider");
    }

    Box::new(WeatherApiProvider::with_base_url(
        config.api_key.clone(),
        config.base_url.clone(),
    ))
}
