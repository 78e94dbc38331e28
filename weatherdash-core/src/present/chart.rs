use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{HourlyObservation, UnitSystem};

/// A per-hour quantity that can be drawn against time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesField {
    Temperature,
    Humidity,
    PrecipitationProbability,
    WindSpeed,
}

impl SeriesField {
    fn value(&self, obs: &HourlyObservation) -> f64 {
        match self {
            SeriesField::Temperature => obs.temperature,
            SeriesField::Humidity => f64::from(obs.humidity_pct),
            SeriesField::PrecipitationProbability => f64::from(obs.precipitation_probability_pct),
            SeriesField::WindSpeed => obs.wind_speed,
        }
    }

    pub fn axis_label(&self, units: UnitSystem) -> String {
        match self {
            SeriesField::Temperature => format!("Temperature ({})", units.temperature_symbol()),
            SeriesField::Humidity => "Humidity (%)".to_string(),
            SeriesField::PrecipitationProbability => "Probability (%)".to_string(),
            SeriesField::WindSpeed => format!("Wind Speed ({})", units.speed_symbol()),
        }
    }

    pub fn title(&self, units: UnitSystem) -> String {
        match self {
            SeriesField::Temperature => {
                format!("Temperature Forecast ({})", units.temperature_symbol())
            }
            SeriesField::Humidity => "Humidity Forecast".to_string(),
            SeriesField::PrecipitationProbability => "Precipitation Probability".to_string(),
            SeriesField::WindSpeed => format!("Wind Speed Forecast ({})", units.speed_symbol()),
        }
    }

    fn style(&self, kind: ChartKind) -> ChartStyle {
        match (self, kind) {
            (SeriesField::Temperature, _) => ChartStyle::new("#FF9F1C", 1.0, Some(3.0)),
            (SeriesField::PrecipitationProbability, _) => ChartStyle::new("#2EC4B6", 0.7, None),
            (_, ChartKind::Line) => ChartStyle::new("#0066cc", 1.0, Some(2.0)),
            (_, _) => ChartStyle::new("#0066cc", 0.7, None),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    BarPolar,
}

/// Cosmetic hints only; renderers are free to ignore them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub color: String,
    pub opacity: f64,
    pub line_width: Option<f64>,
}

impl ChartStyle {
    fn new(color: &str, opacity: f64, line_width: Option<f64>) -> Self {
        Self { color: color.to_string(), opacity, line_width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    pub x: DateTime<Utc>,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub r: f64,
    pub theta: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngularDirection {
    Clockwise,
    CounterClockwise,
}

/// Orientation of the angular axis.
///
/// `rotation_deg` is where 0° sits, measured counter-clockwise from the
/// positive x-axis: 90 puts 0° (north) at the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularAxis {
    pub rotation_deg: f64,
    pub direction: AngularDirection,
}

impl AngularAxis {
    pub const COMPASS: AngularAxis =
        AngularAxis { rotation_deg: 90.0, direction: AngularDirection::Clockwise };
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartData {
    TimeSeries { points: Vec<TimePoint> },
    Polar { points: Vec<PolarPoint>, angular_axis: AngularAxis },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub data: ChartData,
    pub style: ChartStyle,
}

impl ChartSpec {
    pub fn len(&self) -> usize {
        match &self.data {
            ChartData::TimeSeries { points } => points.len(),
            ChartData::Polar { points, .. } => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Time-series points, or an empty slice for polar charts.
    pub fn time_points(&self) -> &[TimePoint] {
        match &self.data {
            ChartData::TimeSeries { points } => points,
            ChartData::Polar { .. } => &[],
        }
    }
}

fn time_series(
    kind: ChartKind,
    observations: &[HourlyObservation],
    field: SeriesField,
    units: UnitSystem,
) -> ChartSpec {
    let points = observations
        .iter()
        .map(|obs| TimePoint { x: obs.timestamp, y: field.value(obs) })
        .collect();

    ChartSpec {
        kind,
        title: field.title(units),
        x_label: "Date & Time".to_string(),
        y_label: field.axis_label(units),
        data: ChartData::TimeSeries { points },
        style: field.style(kind),
    }
}

/// One line point per observation, in observation order.
pub fn render_line_chart(
    observations: &[HourlyObservation],
    field: SeriesField,
    units: UnitSystem,
) -> ChartSpec {
    time_series(ChartKind::Line, observations, field, units)
}

/// One bar per observation, in observation order.
pub fn render_bar_chart(
    observations: &[HourlyObservation],
    field: SeriesField,
    units: UnitSystem,
) -> ChartSpec {
    time_series(ChartKind::Bar, observations, field, units)
}

/// Wind rose: radius is wind speed, angle is the direction the wind blows from.
pub fn render_polar_chart(observations: &[HourlyObservation], units: UnitSystem) -> ChartSpec {
    let points = observations
        .iter()
        .map(|obs| PolarPoint { r: obs.wind_speed, theta: obs.wind_direction_deg })
        .collect();

    ChartSpec {
        kind: ChartKind::BarPolar,
        title: "Wind Direction and Speed".to_string(),
        x_label: "Direction (°)".to_string(),
        y_label: SeriesField::WindSpeed.axis_label(units),
        data: ChartData::Polar { points, angular_axis: AngularAxis::COMPASS },
        style: ChartStyle::new("#011627", 0.7, None),
    }
}
