use serde::Serialize;
use tracing::debug;

use crate::merge::ordered::OrderedMap;
use crate::output::{Table, title_case_bool};
use crate::types::{StopObservation, TripRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopRow {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
    #[serde(serialize_with = "title_case_bool")]
    pub verified: bool,
}

impl Table for StopRow {
    const FILE_NAME: &'static str = "stops.txt";
    const COLUMNS: &'static [&'static str] =
        &["stop_id", "stop_name", "stop_lat", "stop_lon", "verified"];
}

impl From<&StopObservation> for StopRow {
    fn from(obs: &StopObservation) -> Self {
        StopRow {
            stop_id: obs.stop_id.clone(),
            stop_name: obs.name.clone(),
            stop_lat: obs.lat,
            stop_lon: obs.lon,
            verified: obs.verified,
        }
    }
}

impl StopRow {
    /// Folds a later observation of the same stop into this one.
    ///
    /// Only an unverified stop takes coordinates from a verified observation.
    /// Every other combination keeps what is already here. `stop_id` never
    /// changes.
    pub fn absorb(&mut self, obs: &StopObservation) {
        if !self.verified && obs.verified {
            debug!(stop_name = %self.stop_name, "Upgrading stop to GPS-verified coordinates");
            self.stop_lat = obs.lat;
            self.stop_lon = obs.lon;
            self.verified = true;
        }
    }
}

/// Distinct stops keyed by exact name, in first-seen order across all trips.
pub fn build_stops(trips: &[TripRecord]) -> Vec<StopRow> {
    trips
        .iter()
        .flat_map(|trip| trip.stops.iter())
        .fold(OrderedMap::new(), |mut seen: OrderedMap<StopRow>, obs| {
            match seen.get_mut(&obs.name) {
                Some(existing) => existing.absorb(obs),
                None => {
                    seen.get_or_insert_with(&obs.name, || StopRow::from(obs));
                }
            }
            seen
        })
        .into_values()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::test_support::{stop, trip_with_stops};

    #[test]
    fn test_unverified_upgraded_by_verified() {
        let trips = vec![
            trip_with_stops("T1", vec![stop("S1", "Park St", 22.50, 88.30, false, 0)]),
            trip_with_stops("T2", vec![stop("S77", "Park St", 22.55, 88.35, true, 3)]),
        ];

        let rows = build_stops(&trips);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].stop_id, "S1");
        assert_eq!(rows[0].stop_lat, 22.55);
        assert_eq!(rows[0].stop_lon, 88.35);
        assert!(rows[0].verified);
    }

    #[test]
    fn test_verified_conflict_keeps_first() {
        let trips = vec![
            trip_with_stops("T1", vec![stop("S1", "Park St", 22.55, 88.35, true, 0)]),
            trip_with_stops("T2", vec![stop("S2", "Park St", 22.60, 88.40, true, 0)]),
        ];

        let rows = build_stops(&trips);

        assert_eq!(rows.len(), 1);
        assert_eq!((rows[0].stop_lat, rows[0].stop_lon), (22.55, 88.35));
    }

    #[test]
    fn test_unverified_conflict_keeps_first() {
        let trips = vec![trip_with_stops(
            "T1",
            vec![
                stop("S1", "Esplanade", 22.56, 88.35, false, 0),
                stop("S2", "Esplanade", 22.57, 88.36, false, 1),
            ],
        )];

        let rows = build_stops(&trips);

        assert_eq!((rows[0].stop_lat, rows[0].stop_lon), (22.56, 88.35));
        assert!(!rows[0].verified);
    }

    #[test]
    fn test_verified_not_downgraded() {
        let trips = vec![
            trip_with_stops("T1", vec![stop("S1", "Park St", 22.55, 88.35, true, 0)]),
            trip_with_stops("T2", vec![stop("S1", "Park St", 22.50, 88.30, false, 0)]),
        ];

        let rows = build_stops(&trips);

        assert_eq!((rows[0].stop_lat, rows[0].stop_lon), (22.55, 88.35));
        assert!(rows[0].verified);
    }

    #[test]
    fn test_dedup_by_name_not_id() {
        let trips = vec![trip_with_stops(
            "T1",
            vec![
                stop("S1", "Park St", 22.55, 88.35, true, 0),
                stop("S1", "Park Street", 22.55, 88.35, true, 1),
                stop("S1", "park st", 22.55, 88.35, true, 2),
            ],
        )];

        let names: Vec<_> = build_stops(&trips)
            .into_iter()
            .map(|s| s.stop_name)
            .collect();
        assert_eq!(names, vec!["Park St", "Park Street", "park st"]);
    }

    #[test]
    fn test_empty_stop_lists() {
        let trips = vec![trip_with_stops("T1", vec![])];
        assert!(build_stops(&trips).is_empty());
    }
}
