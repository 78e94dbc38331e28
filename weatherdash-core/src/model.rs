use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LocationError;

/// Which of the provider's pre-computed unit branches to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn temperature_symbol(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "°C",
            UnitSystem::Imperial => "°F",
        }
    }

    pub fn speed_symbol(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "mph",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.trim().to_lowercase();

        match lower.as_str() {
            "metric" | "celsius" | "c" => Ok(UnitSystem::Metric),
            "imperial" | "fahrenheit" | "f" => Ok(UnitSystem::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown unit system '{value}'. Supported: metric, imperial."
            )),
        }
    }
}

/// A user-submitted location query together with the unit choice.
///
/// The query is opaque: resolving it (and any ambiguity) is left to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    query: String,
    units: UnitSystem,
}

impl Location {
    pub fn new(query: impl Into<String>, units: UnitSystem) -> Result<Self, LocationError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(LocationError::Empty);
        }
        Ok(Self { query, units })
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: f64,
    pub wind_speed: f64,
    /// Meteorological convention: the direction the wind blows from.
    pub wind_direction_deg: f64,
    pub condition_text: String,
    pub condition_icon_ref: String,
    pub coordinate: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub humidity_pct: u8,
    pub precipitation_probability_pct: u8,
    pub wind_speed: f64,
    pub wind_direction_deg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_system_as_str_roundtrip() {
        for units in [UnitSystem::Metric, UnitSystem::Imperial] {
            let parsed = UnitSystem::try_from(units.as_str()).expect("roundtrip should succeed");
            assert_eq!(units, parsed);
        }
    }

    #[test]
    fn unit_system_accepts_temperature_aliases() {
        assert_eq!(UnitSystem::try_from("Celsius").unwrap(), UnitSystem::Metric);
        assert_eq!(UnitSystem::try_from("fahrenheit").unwrap(), UnitSystem::Imperial);
    }

    #[test]
    fn unknown_unit_system_error() {
        let err = UnitSystem::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown unit system"));
    }

    #[test]
    fn unit_symbols() {
        assert_eq!(UnitSystem::Metric.temperature_symbol(), "°C");
        assert_eq!(UnitSystem::Imperial.temperature_symbol(), "°F");
        assert_eq!(UnitSystem::Metric.speed_symbol(), "km/h");
        assert_eq!(UnitSystem::Imperial.speed_symbol(), "mph");
    }

    #[test]
    fn location_rejects_blank_query() {
        assert_eq!(Location::new("", UnitSystem::Metric), Err(LocationError::Empty));
        assert_eq!(Location::new("   ", UnitSystem::Metric), Err(LocationError::Empty));
    }

    #[test]
    fn location_keeps_query_verbatim() {
        let loc = Location::new("new york", UnitSystem::Imperial).unwrap();
        assert_eq!(loc.query(), "new york");
        assert_eq!(loc.units(), UnitSystem::Imperial);
    }
}
