//! Input document types.
//!
//! One [`TripRecord`] is parsed from each trip JSON file. Keys are camelCase on
//! the wire; unknown keys are ignored.

use serde::Deserialize;

/// Contributor name used when a document has no `collectedBy`.
pub const UNKNOWN_COLLECTOR: &str = "Unknown";

/// A single observed trip as submitted by a contributor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub agency: String,
    pub route_id: String,
    #[serde(default)]
    pub route_name: Option<String>,
    pub service_id: String,
    pub trip_id: String,
    pub direction: u8,
    pub headsign: String,
    #[serde(default)]
    pub collected_by: Option<String>,
    pub stops: Vec<StopObservation>,
}

/// A stop visit inside a trip, in the order it was recorded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopObservation {
    pub stop_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Coordinates were confirmed by GPS.
    pub verified: bool,
    pub seq: u32,
    pub arrival_time: String,
    pub departure_time: String,
}

impl TripRecord {
    /// Long route name, falling back to the route id.
    pub fn route_long_name(&self) -> &str {
        self.route_name.as_deref().unwrap_or(&self.route_id)
    }

    pub fn collector(&self) -> &str {
        self.collected_by.as_deref().unwrap_or(UNKNOWN_COLLECTOR)
    }
}
