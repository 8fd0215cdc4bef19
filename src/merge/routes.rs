use serde::Serialize;

use crate::merge::ordered::OrderedMap;
use crate::output::Table;
use crate::types::TripRecord;

/// GTFS `route_type` for bus service.
pub const ROUTE_TYPE_BUS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRow {
    pub route_id: String,
    pub agency_id: String,
    pub route_short_name: String,
    pub route_long_name: String,
    pub route_type: u8,
}

impl Table for RouteRow {
    const FILE_NAME: &'static str = "routes.txt";
    const COLUMNS: &'static [&'static str] = &[
        "route_id",
        "agency_id",
        "route_short_name",
        "route_long_name",
        "route_type",
    ];
}

impl From<&TripRecord> for RouteRow {
    fn from(trip: &TripRecord) -> Self {
        RouteRow {
            route_id: trip.route_id.clone(),
            agency_id: trip.agency.clone(),
            route_short_name: trip.route_id.clone(),
            route_long_name: trip.route_long_name().to_string(),
            route_type: ROUTE_TYPE_BUS,
        }
    }
}

/// One row per distinct route id. The first trip seen for a route decides its
/// agency and long name; later trips never change them.
pub fn build_routes(trips: &[TripRecord]) -> Vec<RouteRow> {
    trips
        .iter()
        .fold(OrderedMap::new(), |mut seen, trip| {
            seen.get_or_insert_with(&trip.route_id, || RouteRow::from(trip));
            seen
        })
        .into_values()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::test_support::trip;

    #[test]
    fn test_route_fields() {
        let mut t = trip("WBTC", "12A", "T1");
        t.route_name = Some("Howrah - Esplanade".to_string());

        let rows = build_routes(&[t]);

        assert_eq!(
            rows,
            vec![RouteRow {
                route_id: "12A".to_string(),
                agency_id: "WBTC".to_string(),
                route_short_name: "12A".to_string(),
                route_long_name: "Howrah - Esplanade".to_string(),
                route_type: 3,
            }]
        );
    }

    #[test]
    fn test_long_name_defaults_to_route_id() {
        let rows = build_routes(&[trip("WBTC", "12A", "T1")]);
        assert_eq!(rows[0].route_long_name, "12A");
    }

    #[test]
    fn test_first_seen_route_wins() {
        let mut first = trip("WBTC", "12A", "T1");
        first.route_name = Some("Howrah - Esplanade".to_string());
        let mut second = trip("Private", "12A", "T2");
        second.route_name = Some("Something Else".to_string());
        let third = trip("WBTC", "S9", "T3");

        let rows = build_routes(&[first, second, third]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].route_id, "12A");
        assert_eq!(rows[0].agency_id, "WBTC");
        assert_eq!(rows[0].route_long_name, "Howrah - Esplanade");
        assert_eq!(rows[1].route_id, "S9");
    }
}
