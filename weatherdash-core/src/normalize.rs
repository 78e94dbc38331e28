//! Provider JSON → internal records.
//!
//! The provider pre-computes every measurement in both unit systems, so
//! normalization only *selects* the branch matching [`UnitSystem`]; it never
//! converts between units. Only the selected branch has to be present.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::NormalizationError,
    model::{Coordinate, CurrentConditions, HourlyObservation, UnitSystem},
};

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: Option<f64>,
    temp_f: Option<f64>,
    feelslike_c: Option<f64>,
    feelslike_f: Option<f64>,
    humidity: u8,
    pressure_mb: f64,
    wind_kph: Option<f64>,
    wind_mph: Option<f64>,
    wind_degree: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaCurrentResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaForecastHour {
    time_epoch: i64,
    temp_c: Option<f64>,
    temp_f: Option<f64>,
    humidity: u8,
    chance_of_rain: u8,
    wind_kph: Option<f64>,
    wind_mph: Option<f64>,
    wind_degree: f64,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    hour: Vec<WaForecastHour>,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    forecast: WaForecast,
}

fn parse<T: DeserializeOwned>(raw: &Value, record: &'static str) -> Result<T, NormalizationError> {
    T::deserialize(raw).map_err(|source| NormalizationError::Malformed { record, source })
}

/// Pick the `(field, value)` branch for `units`; the other branch is never read.
fn select(
    units: UnitSystem,
    record: &'static str,
    metric: (&'static str, Option<f64>),
    imperial: (&'static str, Option<f64>),
) -> Result<f64, NormalizationError> {
    let (field, value) = match units {
        UnitSystem::Metric => metric,
        UnitSystem::Imperial => imperial,
    };
    value.ok_or(NormalizationError::MissingField { record, field })
}

fn percent(record: &'static str, field: &'static str, value: u8) -> Result<u8, NormalizationError> {
    if value > 100 {
        return Err(NormalizationError::OutOfRange { record, field, value });
    }
    Ok(value)
}

/// Round to one decimal place, ties to even on the exact binary value.
///
/// Goes through correctly-rounded decimal formatting, so `0.25` becomes `0.2`
/// and `0.15` (stored just below the tie) becomes `0.1`.
pub fn round1(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.1}").parse().unwrap_or(value)
}

pub fn normalize_current(
    raw: &Value,
    units: UnitSystem,
) -> Result<CurrentConditions, NormalizationError> {
    const RECORD: &str = "current";
    let parsed: WaCurrentResponse = parse(raw, RECORD)?;
    let current = parsed.current;

    Ok(CurrentConditions {
        temperature: round1(select(
            units,
            RECORD,
            ("temp_c", current.temp_c),
            ("temp_f", current.temp_f),
        )?),
        feels_like: round1(select(
            units,
            RECORD,
            ("feelslike_c", current.feelslike_c),
            ("feelslike_f", current.feelslike_f),
        )?),
        humidity_pct: percent(RECORD, "humidity", current.humidity)?,
        pressure_hpa: current.pressure_mb,
        wind_speed: select(
            units,
            RECORD,
            ("wind_kph", current.wind_kph),
            ("wind_mph", current.wind_mph),
        )?,
        wind_direction_deg: current.wind_degree,
        condition_text: current.condition.text,
        condition_icon_ref: current.condition.icon,
        coordinate: Coordinate { lat: parsed.location.lat, lon: parsed.location.lon },
    })
}

/// Flatten the provider's day buckets into one sequence, day-then-hour, as given.
pub fn normalize_forecast(
    raw: &Value,
    units: UnitSystem,
) -> Result<Vec<HourlyObservation>, NormalizationError> {
    const RECORD: &str = "forecast";
    let parsed: WaForecastResponse = parse(raw, RECORD)?;

    let observations = parsed
        .forecast
        .forecastday
        .into_iter()
        .flat_map(|day| day.hour)
        .map(|hour| {
            let timestamp = DateTime::<Utc>::from_timestamp(hour.time_epoch, 0)
                .ok_or(NormalizationError::TimestampOutOfRange(hour.time_epoch))?;

            Ok(HourlyObservation {
                timestamp,
                temperature: select(
                    units,
                    RECORD,
                    ("temp_c", hour.temp_c),
                    ("temp_f", hour.temp_f),
                )?,
                humidity_pct: percent(RECORD, "humidity", hour.humidity)?,
                precipitation_probability_pct: percent(
                    RECORD,
                    "chance_of_rain",
                    hour.chance_of_rain,
                )?,
                wind_speed: select(
                    units,
                    RECORD,
                    ("wind_kph", hour.wind_kph),
                    ("wind_mph", hour.wind_mph),
                )?,
                wind_direction_deg: hour.wind_degree,
            })
        })
        .collect::<Result<Vec<_>, NormalizationError>>()?;

    tracing::debug!(hours = observations.len(), %units, "normalized forecast");
    Ok(observations)
}
