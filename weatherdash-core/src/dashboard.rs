use serde::Serialize;

use crate::{
    error::DashboardError,
    model::{CurrentConditions, HourlyObservation, Location, UnitSystem},
    normalize::{normalize_current, normalize_forecast},
    present::{
        ChartSpec, MapSpec, MetricCard, SeriesField, metric_cards, render_bar_chart,
        render_line_chart, render_location_marker, render_polar_chart,
    },
    provider::{FORECAST_DAYS, WeatherProvider},
};

/// Everything one dashboard render needs, built from a single request.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub units: UnitSystem,
    pub current: CurrentConditions,
    pub forecast: Vec<HourlyObservation>,
    pub cards: [MetricCard; 4],
    pub temperature_chart: ChartSpec,
    pub precipitation_chart: ChartSpec,
    pub wind_rose: ChartSpec,
    pub map: MapSpec,
}

impl Dashboard {
    /// Fetch, normalize and present.
    ///
    /// Both fetches run concurrently; the first failure aborts the whole
    /// build so a dashboard is either complete or not produced at all.
    pub async fn build(
        provider: &dyn WeatherProvider,
        location: &Location,
    ) -> Result<Self, DashboardError> {
        let units = location.units();
        tracing::info!(query = location.query(), %units, "building dashboard");

        let (raw_current, raw_forecast) = tokio::try_join!(
            provider.fetch_current(location),
            provider.fetch_forecast(location, FORECAST_DAYS),
        )?;

        let current = normalize_current(&raw_current, units)?;
        let forecast = normalize_forecast(&raw_forecast, units)?;

        Ok(Self::present(location, current, forecast))
    }

    /// Pure presentation step over already-normalized records.
    pub fn present(
        location: &Location,
        current: CurrentConditions,
        forecast: Vec<HourlyObservation>,
    ) -> Self {
        let units = location.units();

        Self {
            title: title_case(location.query()),
            units,
            cards: metric_cards(&current, units),
            temperature_chart: render_line_chart(&forecast, SeriesField::Temperature, units),
            precipitation_chart: render_bar_chart(
                &forecast,
                SeriesField::PrecipitationProbability,
                units,
            ),
            wind_rose: render_polar_chart(&forecast, units),
            map: render_location_marker(current.coordinate),
            current,
            forecast,
        }
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;

    for ch in s.trim().chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }

    out
}
