use serde::{Deserialize, Serialize};

use crate::model::Coordinate;

pub const DEFAULT_ZOOM: u8 = 10;
pub const DEFAULT_TILES: &str = "CartoDB positron";
pub const MARKER_POPUP: &str = "Selected Location";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleMarker {
    pub position: Coordinate,
    pub radius: u32,
    pub popup: String,
    pub color: String,
    pub fill_opacity: f64,
}

/// A map centred on one marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapSpec {
    pub center: Coordinate,
    pub zoom: u8,
    pub tiles: String,
    pub marker: CircleMarker,
}

pub fn render_location_marker(coordinate: Coordinate) -> MapSpec {
    MapSpec {
        center: coordinate,
        zoom: DEFAULT_ZOOM,
        tiles: DEFAULT_TILES.to_string(),
        marker: CircleMarker {
            position: coordinate,
            radius: 8,
            popup: MARKER_POPUP.to_string(),
            color: "#0066cc".to_string(),
            fill_opacity: 0.7,
        },
    }
}
