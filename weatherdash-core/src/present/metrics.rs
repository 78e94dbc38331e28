use serde::{Deserialize, Serialize};

use crate::model::{CurrentConditions, UnitSystem};

/// One labeled value in the "current conditions" row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub detail: Option<String>,
}

impl MetricCard {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self { label: label.into(), value: value.into(), detail: None }
    }

    fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }
}

// Rounded temperatures keep their one decimal ("17.0").
fn one_decimal(value: f64) -> String {
    format!("{value:?}")
}

/// Temperature, humidity, wind speed and pressure, in that order.
pub fn metric_cards(current: &CurrentConditions, units: UnitSystem) -> [MetricCard; 4] {
    let temp_unit = units.temperature_symbol();

    [
        MetricCard::new("Temperature", format!("{}{temp_unit}", one_decimal(current.temperature)))
            .with_detail(format!("Feels like: {}{temp_unit}", one_decimal(current.feels_like))),
        MetricCard::new("Humidity", format!("{}%", current.humidity_pct)),
        MetricCard::new(
            format!("Wind Speed ({})", units.speed_symbol()),
            current.wind_speed.to_string(),
        ),
        MetricCard::new("Pressure (hPa)", current.pressure_hpa.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Coordinate;

    fn current() -> CurrentConditions {
        CurrentConditions {
            temperature: 18.3,
            feels_like: 17.0,
            humidity_pct: 55,
            pressure_hpa: 1012.0,
            wind_speed: 10.0,
            wind_direction_deg: 270.0,
            condition_text: "Cloudy".to_string(),
            condition_icon_ref: "x".to_string(),
            coordinate: Coordinate { lat: 51.5, lon: -0.12 },
        }
    }

    #[test]
    fn metric_cards_in_fixed_order() {
        let cards = metric_cards(&current(), UnitSystem::Metric);
        let labels: Vec<&str> = cards.iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["Temperature", "Humidity", "Wind Speed (km/h)", "Pressure (hPa)"]);
    }

    #[test]
    fn metric_card_values() {
        let cards = metric_cards(&current(), UnitSystem::Metric);

        assert_eq!(cards[0].value, "18.3°C");
        assert_eq!(cards[0].detail.as_deref(), Some("Feels like: 17.0°C"));
        assert_eq!(cards[1].value, "55%");
        assert_eq!(cards[2].value, "10");
        assert_eq!(cards[3].value, "1012");
        assert!(cards[1..].iter().all(|c| c.detail.is_none()));
    }

    #[test]
    fn provider_precision_passes_through_unpadded() {
        let mut c = current();
        c.pressure_hpa = 1013.2;
        c.wind_speed = 6.3;

        let cards = metric_cards(&c, UnitSystem::Metric);
        assert_eq!(cards[2].value, "6.3");
        assert_eq!(cards[3].value, "1013.2");
    }

    #[test]
    fn imperial_cards_use_imperial_units() {
        let cards = metric_cards(&current(), UnitSystem::Imperial);

        assert!(cards[0].value.ends_with("°F"));
        assert_eq!(cards[2].label, "Wind Speed (mph)");
    }
}
