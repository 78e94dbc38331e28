//! Plain-text rendering of a [`Dashboard`] for the terminal.

use std::fmt;

use chrono::NaiveDate;
use weatherdash_core::{Dashboard, HourlyObservation, UnitSystem};

/// Per-day aggregate of the hourly forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub min_temp: f64,
    pub max_temp: f64,
    pub max_rain_chance: u8,
    pub mean_wind: f64,
}

/// Group consecutive observations by UTC date, keeping the forecast order.
pub fn summarize_days(observations: &[HourlyObservation]) -> Vec<DaySummary> {
    let mut days: Vec<(DaySummary, usize)> = Vec::new();

    for obs in observations {
        let date = obs.timestamp.date_naive();
        match days.last_mut() {
            Some((day, count)) if day.date == date => {
                day.min_temp = day.min_temp.min(obs.temperature);
                day.max_temp = day.max_temp.max(obs.temperature);
                day.max_rain_chance = day.max_rain_chance.max(obs.precipitation_probability_pct);
                day.mean_wind += obs.wind_speed;
                *count += 1;
            }
            _ => days.push((
                DaySummary {
                    date,
                    min_temp: obs.temperature,
                    max_temp: obs.temperature,
                    max_rain_chance: obs.precipitation_probability_pct,
                    mean_wind: obs.wind_speed,
                },
                1,
            )),
        }
    }

    days.into_iter()
        .map(|(mut day, count)| {
            day.mean_wind /= count as f64;
            day
        })
        .collect()
}

fn compass_point(deg: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    let idx = ((deg.rem_euclid(360.0) / 22.5).round() as usize) % POINTS.len();
    POINTS[idx]
}

/// Terminal view of a dashboard.
pub struct TextView<'a>(pub &'a Dashboard);

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dashboard = self.0;
        let units: UnitSystem = dashboard.units;
        let current = &dashboard.current;

        writeln!(f, "{}", dashboard.title)?;
        writeln!(
            f,
            "{} (wind from {} at {}°)",
            current.condition_text,
            compass_point(current.wind_direction_deg),
            current.wind_direction_deg
        )?;
        writeln!(f)?;

        writeln!(f, "Current Conditions")?;
        for card in &dashboard.cards {
            write!(f, "  {:<18} {}", card.label, card.value)?;
            if let Some(detail) = &card.detail {
                write!(f, "  ({detail})")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "5-Day Forecast ({} hourly points)", dashboard.forecast.len())?;
        let days = summarize_days(&dashboard.forecast);
        if days.is_empty() {
            writeln!(f, "  no forecast data")?;
        }
        for day in days {
            writeln!(
                f,
                "  {}  {:>6.1} .. {:>6.1}{}  rain {:>3}%  wind {:>5.1} {}",
                day.date.format("%a %d %b"),
                day.min_temp,
                day.max_temp,
                units.temperature_symbol(),
                day.max_rain_chance,
                day.mean_wind,
                units.speed_symbol(),
            )?;
        }
        writeln!(f)?;

        let map = &dashboard.map;
        write!(
            f,
            "Map: {} at {:.4}, {:.4} (zoom {})",
            map.marker.popup, map.center.lat, map.center.lon, map.zoom
        )
    }
}

pub fn render_text(dashboard: &Dashboard) -> String {
    TextView(dashboard).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use weatherdash_core::{Coordinate, CurrentConditions, Location};

    fn obs(day: u32, hour: u32, temp: f64, rain: u8, wind: f64) -> HourlyObservation {
        HourlyObservation {
            timestamp: Utc.with_ymd_and_hms(2026, 10, day, hour, 0, 0).unwrap(),
            temperature: temp,
            humidity_pct: 50,
            precipitation_probability_pct: rain,
            wind_speed: wind,
            wind_direction_deg: 90.0,
        }
    }

    #[test]
    fn summarize_days_groups_by_date() {
        let data = vec![
            obs(19, 0, 10.0, 10, 4.0),
            obs(19, 12, 16.0, 60, 8.0),
            obs(20, 0, 9.0, 0, 2.0),
        ];

        let days = summarize_days(&data);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].min_temp, 10.0);
        assert_eq!(days[0].max_temp, 16.0);
        assert_eq!(days[0].max_rain_chance, 60);
        assert_eq!(days[0].mean_wind, 6.0);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    }

    #[test]
    fn summarize_days_empty() {
        assert!(summarize_days(&[]).is_empty());
    }

    #[test]
    fn compass_points() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(270.0), "W");
        assert_eq!(compass_point(359.0), "N");
        assert_eq!(compass_point(135.0), "SE");
    }

    #[test]
    fn render_text_contains_cards_and_map() {
        let location = Location::new("london", UnitSystem::Metric).unwrap();
        let current = CurrentConditions {
            temperature: 18.3,
            feels_like: 17.0,
            humidity_pct: 55,
            pressure_hpa: 1012.0,
            wind_speed: 10.0,
            wind_direction_deg: 270.0,
            condition_text: "Cloudy".to_string(),
            condition_icon_ref: "x".to_string(),
            coordinate: Coordinate { lat: 51.5, lon: -0.12 },
        };
        let dash = Dashboard::present(&location, current, vec![obs(19, 0, 10.0, 10, 4.0)]);

        let text = render_text(&dash);
        assert!(text.starts_with("London\n"));
        assert!(text.contains("wind from W"));
        assert!(text.contains("18.3°C"));
        assert!(text.contains("Feels like: 17.0°C"));
        assert!(text.contains("Pressure (hPa)"));
        assert!(text.contains("1 hourly points"));
        assert!(text.contains("Selected Location at 51.5000, -0.1200"));
    }

    #[test]
    fn text_view_writes_into_any_formatter() {
        let location = Location::new("paris", UnitSystem::Metric).unwrap();
        let current = CurrentConditions {
            temperature: 12.0,
            feels_like: 11.4,
            humidity_pct: 70,
            pressure_hpa: 1020.0,
            wind_speed: 8.0,
            wind_direction_deg: 45.0,
            condition_text: "Mist".to_string(),
            condition_icon_ref: "m".to_string(),
            coordinate: Coordinate { lat: 48.85, lon: 2.35 },
        };
        let dash = Dashboard::present(&location, current, vec![obs(19, 6, 12.0, 5, 8.0)]);

        let text = format!("{}", TextView(&dash));
        assert_eq!(text, render_text(&dash));
        assert!(text.contains("wind from NE"));
        assert!(text.ends_with("(zoom 10)"));
    }

    #[test]
    fn render_text_handles_empty_forecast() {
        let location = Location::new("oslo", UnitSystem::Imperial).unwrap();
        let current = CurrentConditions {
            temperature: 40.1,
            feels_like: 35.2,
            humidity_pct: 90,
            pressure_hpa: 1001.0,
            wind_speed: 12.0,
            wind_direction_deg: 0.0,
            condition_text: "Snow".to_string(),
            condition_icon_ref: "s".to_string(),
            coordinate: Coordinate { lat: 59.9, lon: 10.75 },
        };
        let dash = Dashboard::present(&location, current, Vec::new());

        let text = render_text(&dash);
        assert!(text.contains("no forecast data"));
        assert!(text.contains("Wind Speed (mph)"));
    }
}
