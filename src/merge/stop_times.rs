use serde::Serialize;

use crate::output::Table;
use crate::types::TripRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopTimeRow {
    pub trip_id: String,
    pub arrival_time: String,
    pub departure_time: String,
    pub stop_id: String,
    pub stop_sequence: u32,
}

impl Table for StopTimeRow {
    const FILE_NAME: &'static str = "stop_times.txt";
    const COLUMNS: &'static [&'static str] = &[
        "trip_id",
        "arrival_time",
        "departure_time",
        "stop_id",
        "stop_sequence",
    ];
}

/// One row per stop observation, trips in input order and stops in the order
/// they appear in each trip. Rows are not re-sorted by `seq`.
pub fn build_stop_times(trips: &[TripRecord]) -> Vec<StopTimeRow> {
    trips
        .iter()
        .flat_map(|trip| {
            trip.stops.iter().map(move |obs| StopTimeRow {
                trip_id: trip.trip_id.clone(),
                arrival_time: obs.arrival_time.clone(),
                departure_time: obs.departure_time.clone(),
                stop_id: obs.stop_id.clone(),
                stop_sequence: obs.seq,
            })
        })
        .collect()
}
