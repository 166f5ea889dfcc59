use serde::{Deserialize, Serialize};

/// Named coordinate pair used inside agency addresses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// GeoJSON-style location: `coordinates` is a [longitude, latitude] pair,
/// matching what the 2dsphere indexes expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
