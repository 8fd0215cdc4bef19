//! Fixed lookup tables used while building the feed.
//!
//! [`LookupTables`] is handed to the merger explicitly so every table-building
//! pass can be exercised with its own configuration.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";
pub const DEFAULT_CALENDAR_YEAR: i32 = 2026;

/// Display name and homepage of an operator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgencyInfo {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl AgencyInfo {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Monday-first day-of-week flags.
pub type DaysOfWeek = [u8; 7];

pub const WEEKDAY: DaysOfWeek = [1, 1, 1, 1, 1, 0, 0];
pub const WEEKEND: DaysOfWeek = [0, 0, 0, 0, 0, 1, 1];
pub const DAILY: DaysOfWeek = [1, 1, 1, 1, 1, 1, 1];

#[derive(Debug, Clone)]
pub struct LookupTables {
    agencies: HashMap<String, AgencyInfo>,
    fallback_agency: AgencyInfo,
    pub timezone: String,
    service_patterns: HashMap<String, DaysOfWeek>,
    fallback_pattern: DaysOfWeek,
    pub calendar_year: i32,
}

impl Default for LookupTables {
    fn default() -> Self {
        let agencies = HashMap::from([
            (
                "WBTC".to_string(),
                AgencyInfo::new("West Bengal Transport Corporation", "https://www.wbtc.co.in"),
            ),
            ("Private".to_string(), AgencyInfo::new("Private Operator", "")),
        ]);
        let service_patterns = HashMap::from([
            ("WEEKDAY".to_string(), WEEKDAY),
            ("WEEKEND".to_string(), WEEKEND),
            ("DAILY".to_string(), DAILY),
        ]);

        Self {
            agencies,
            fallback_agency: AgencyInfo::new("Unknown", ""),
            timezone: DEFAULT_TIMEZONE.to_string(),
            service_patterns,
            fallback_pattern: WEEKDAY,
            calendar_year: DEFAULT_CALENDAR_YEAR,
        }
    }
}

impl LookupTables {
    /// Name and URL for an agency code. Unknown codes get a generic placeholder.
    pub fn agency(&self, code: &str) -> &AgencyInfo {
        self.agencies.get(code).unwrap_or(&self.fallback_agency)
    }

    /// Day-of-week flags for a service id. Unrecognized ids run on weekdays.
    pub fn service_days(&self, service_id: &str) -> DaysOfWeek {
        self.service_patterns
            .get(service_id)
            .copied()
            .unwrap_or(self.fallback_pattern)
    }

    /// `(start_date, end_date)` as `YYYYMMDD`, covering the whole calendar year.
    pub fn validity_window(&self) -> Result<(String, String)> {
        let year = self.calendar_year;
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| anyhow!("calendar year {year} is out of range"))?;
        let end = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| anyhow!("calendar year {year} is out of range"))?;

        Ok((
            start.format("%Y%m%d").to_string(),
            end.format("%Y%m%d").to_string(),
        ))
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.calendar_year = year;
        self
    }

    pub fn with_timezone(mut self, timezone: &str) -> Self {
        self.timezone = timezone.to_string();
        self
    }

    /// Adds or replaces agency entries.
    pub fn with_agencies(mut self, entries: HashMap<String, AgencyInfo>) -> Self {
        self.agencies.extend(entries);
        self
    }

    /// Merges agency entries from a JSON file on top of the built-in ones.
    ///
    /// The file is a plain JSON object keyed by agency code:
    /// ```json
    /// {
    ///   "CSTC": { "name": "Calcutta State Transport Corporation", "url": "" }
    /// }
    /// ```
    pub fn with_agency_file(self, path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read agency file '{path}'"))?;
        let entries: HashMap<String, AgencyInfo> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse agency file '{path}'"))?;
        Ok(self.with_agencies(entries))
    }
}
