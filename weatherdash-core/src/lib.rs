//! Core library for the `weatherdash` weather dashboard.
//!
//! This crate defines:
//! - Configuration & API key resolution
//! - The WeatherAPI.com fetcher behind a provider trait
//! - Normalization of provider JSON into unit-consistent records
//! - Renderer-agnostic chart, map and metric-card specifications
//!
//! It is used by `weatherdash-cli`, but any renderer can consume [`Dashboard`].

pub mod config;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod normalize;
pub mod present;
pub mod provider;

pub use config::{Config, ResolvedConfig};
pub use dashboard::Dashboard;
pub use error::{DashboardError, FetchError, LocationError, NormalizationError};
pub use model::{Coordinate, CurrentConditions, HourlyObservation, Location, UnitSystem};
pub use normalize::{normalize_current, normalize_forecast};
pub use provider::{FORECAST_DAYS, WeatherProvider, provider_from_config};
