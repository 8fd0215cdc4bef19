//! Folding trip records into the six feed tables.
//!
//! Each table is built by its own pass over the same immutable trip list.
//! Passes run left to right with no lookahead, so the first trip that mentions
//! an agency, route, or stop decides its row. The one exception is a stop's
//! coordinates, which a later GPS-verified observation may upgrade (see
//! [`stops::StopRow::absorb`]).

pub mod agency;
pub mod calendar;
pub mod ordered;
pub mod routes;
pub mod stop_times;
pub mod stops;
pub mod trips;

use anyhow::Result;

use crate::lookup::LookupTables;
use crate::types::TripRecord;

pub use agency::{AgencyRow, build_agencies};
pub use calendar::{CalendarRow, build_calendar, services_used};
pub use ordered::OrderedMap;
pub use routes::{ROUTE_TYPE_BUS, RouteRow, build_routes};
pub use stop_times::{StopTimeRow, build_stop_times};
pub use stops::{StopRow, build_stops};
pub use trips::{TripRow, build_trips};

/// The merged dataset, one collection per output table.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    pub agencies: Vec<AgencyRow>,
    pub routes: Vec<RouteRow>,
    pub stops: Vec<StopRow>,
    pub trips: Vec<TripRow>,
    pub stop_times: Vec<StopTimeRow>,
    pub calendar: Vec<CalendarRow>,
}

/// Runs all six passes over `trips`.
pub fn merge_trips(trips: &[TripRecord], lookups: &LookupTables) -> Result<Feed> {
    Ok(Feed {
        agencies: build_agencies(trips, lookups),
        routes: build_routes(trips),
        stops: build_stops(trips),
        trips: build_trips(trips),
        stop_times: build_stop_times(trips),
        calendar: build_calendar(trips, lookups)?,
    })
}
