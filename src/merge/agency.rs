use serde::Serialize;

use crate::lookup::LookupTables;
use crate::merge::ordered::OrderedMap;
use crate::output::Table;
use crate::types::TripRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgencyRow {
    pub agency_id: String,
    pub agency_name: String,
    pub agency_url: String,
    pub agency_timezone: String,
}

impl Table for AgencyRow {
    const FILE_NAME: &'static str = "agency.txt";
    const COLUMNS: &'static [&'static str] =
        &["agency_id", "agency_name", "agency_url", "agency_timezone"];
}

impl AgencyRow {
    pub fn from_code(code: &str, lookups: &LookupTables) -> Self {
        let info = lookups.agency(code);
        AgencyRow {
            agency_id: code.to_string(),
            agency_name: info.name.clone(),
            agency_url: info.url.clone(),
            agency_timezone: lookups.timezone.clone(),
        }
    }
}

/// One row per distinct agency code, in first-seen order.
pub fn build_agencies(trips: &[TripRecord], lookups: &LookupTables) -> Vec<AgencyRow> {
    trips
        .iter()
        .fold(OrderedMap::new(), |mut seen, trip| {
            seen.get_or_insert_with(&trip.agency, || AgencyRow::from_code(&trip.agency, lookups));
            seen
        })
        .into_values()
}
