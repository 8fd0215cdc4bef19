use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeSet;

use crate::lookup::LookupTables;
use crate::output::Table;
use crate::types::TripRecord;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarRow {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    pub start_date: String,
    pub end_date: String,
}

impl Table for CalendarRow {
    const FILE_NAME: &'static str = "calendar.txt";
    const COLUMNS: &'static [&'static str] = &[
        "service_id",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
        "start_date",
        "end_date",
    ];
}

/// Distinct service ids referenced by any trip.
///
/// This is a set: row order in `calendar.txt` is not part of the contract.
pub fn services_used(trips: &[TripRecord]) -> BTreeSet<&str> {
    trips.iter().map(|t| t.service_id.as_str()).collect()
}

pub fn build_calendar(trips: &[TripRecord], lookups: &LookupTables) -> Result<Vec<CalendarRow>> {
    let (start_date, end_date) = lookups.validity_window()?;

    Ok(services_used(trips)
        .into_iter()
        .map(|service_id| {
            let [monday, tuesday, wednesday, thursday, friday, saturday, sunday] =
                lookups.service_days(service_id);
            CalendarRow {
                service_id: service_id.to_string(),
                monday,
                tuesday,
                wednesday,
                thursday,
                friday,
                saturday,
                sunday,
                start_date: start_date.clone(),
                end_date: end_date.clone(),
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::test_support::trip;

    fn with_service(service_id: &str, trip_id: &str) -> TripRecord {
        let mut t = trip("WBTC", "12A", trip_id);
        t.service_id = service_id.to_string();
        t
    }

    fn days(row: &CalendarRow) -> [u8; 7] {
        [
            row.monday,
            row.tuesday,
            row.wednesday,
            row.thursday,
            row.friday,
            row.saturday,
            row.sunday,
        ]
    }

    #[test]
    fn test_each_service_once() {
        let trips = vec![
            with_service("WEEKDAY", "T1"),
            with_service("WEEKEND", "T2"),
            with_service("WEEKDAY", "T3"),
            with_service("DAILY", "T4"),
        ];

        let rows = build_calendar(&trips, &LookupTables::default()).unwrap();

        let ids: BTreeSet<_> = rows.iter().map(|r| r.service_id.as_str()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(ids, BTreeSet::from(["DAILY", "WEEKDAY", "WEEKEND"]));
    }

    #[test]
    fn test_patterns_and_window() {
        let trips = vec![with_service("WEEKEND", "T1"), with_service("DAILY", "T2")];
        let rows = build_calendar(&trips, &LookupTables::default()).unwrap();

        let weekend = rows.iter().find(|r| r.service_id == "WEEKEND").unwrap();
        assert_eq!(days(weekend), [0, 0, 0, 0, 0, 1, 1]);
        assert_eq!(weekend.start_date, "20260101");
        assert_eq!(weekend.end_date, "20261231");

        let daily = rows.iter().find(|r| r.service_id == "DAILY").unwrap();
        assert_eq!(days(daily), [1, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_unrecognized_service_runs_weekdays() {
        let rows =
            build_calendar(&[with_service("HOLIDAY", "T1")], &LookupTables::default()).unwrap();

        assert_eq!(rows[0].service_id, "HOLIDAY");
        assert_eq!(days(&rows[0]), [1, 1, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_invalid_year_is_an_error() {
        let lookups = LookupTables::default().with_year(i32::MIN);
        assert!(build_calendar(&[with_service("WEEKDAY", "T1")], &lookups).is_err());
    }
}
