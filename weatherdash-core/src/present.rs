//! Renderer-agnostic descriptions of what the dashboard draws.

pub mod chart;
pub mod map;
pub mod metrics;

pub use chart::{
    AngularAxis, AngularDirection, ChartData, ChartKind, ChartSpec, ChartStyle, PolarPoint,
    SeriesField, TimePoint, render_bar_chart, render_line_chart, render_polar_chart,
};
pub use map::{CircleMarker, MapSpec, render_location_marker};
pub use metrics::{MetricCard, metric_cards};
