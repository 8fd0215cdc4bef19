use std::fmt;
use tracing::info;

use crate::merge::OrderedMap;
use crate::types::TripRecord;

/// Trips per contributor, in the order contributors were first seen.
#[derive(Debug, Clone, Default)]
pub struct ContributorSummary {
    counts: OrderedMap<usize>,
}

impl ContributorSummary {
    pub fn from_trips(trips: &[TripRecord]) -> Self {
        let counts = trips.iter().fold(OrderedMap::new(), |mut counts, trip| {
            *counts.get_or_insert_with(trip.collector(), || 0) += 1;
            counts
        });
        Self { counts }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(name, &n)| (name, n))
    }

    pub fn contributors(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Logs one line per contributor.
    pub fn report(&self) {
        for (collected_by, trips) in self.iter() {
            info!(collected_by, trips, "Trips collected");
        }
    }
}

impl fmt::Display for ContributorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trips collected by:")?;
        for (name, trips) in self.iter() {
            writeln!(f, "    {name}: {trips} trip(s)")?;
        }
        Ok(())
    }
}
