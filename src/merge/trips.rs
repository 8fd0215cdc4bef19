use serde::Serialize;

use crate::output::Table;
use crate::types::TripRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRow {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    pub direction_id: u8,
    pub trip_headsign: String,
}

impl Table for TripRow {
    const FILE_NAME: &'static str = "trips.txt";
    const COLUMNS: &'static [&'static str] = &[
        "route_id",
        "service_id",
        "trip_id",
        "direction_id",
        "trip_headsign",
    ];
}

impl From<&TripRecord> for TripRow {
    fn from(trip: &TripRecord) -> Self {
        TripRow {
            route_id: trip.route_id.clone(),
            service_id: trip.service_id.clone(),
            trip_id: trip.trip_id.clone(),
            direction_id: trip.direction,
            trip_headsign: trip.headsign.clone(),
        }
    }
}

/// One row per input trip. Repeated trip ids are kept as separate rows.
pub fn build_trips(trips: &[TripRecord]) -> Vec<TripRow> {
    trips.iter().map(TripRow::from).collect()
}
