//! Trip document discovery and parsing.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::types::TripRecord;

/// File extension of trip documents.
pub const TRIP_EXTENSION: &str = "json";

/// Lists trip documents in `dir`, in the order the filesystem returns them.
///
/// Only regular files with a `.json` extension are returned. The listing is
/// not sorted.
pub fn find_trip_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(TRIP_EXTENSION) {
            debug!(path = %path.display(), "Skipping non-trip file");
            continue;
        }

        files.push(path);
    }

    Ok(files)
}

/// Decodes a single trip document.
///
/// # Errors
///
/// Returns an error if the text is not JSON or a required field is missing.
pub fn parse_trip(text: &str) -> Result<TripRecord> {
    Ok(serde_json::from_str(text)?)
}

/// Reads and parses the trip document at `path`.
pub fn load_trip_file(path: &Path) -> Result<TripRecord> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_trip(&text).with_context(|| format!("failed to parse trip file {}", path.display()))
}

/// Loads every trip document in `dir`.
///
/// Stops at the first document that fails to parse, so a single bad file
/// aborts the whole batch.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn load_trips(dir: &Path) -> Result<Vec<TripRecord>> {
    let files = find_trip_files(dir)?;
    let mut trips = Vec::with_capacity(files.len());

    for path in files {
        let trip = load_trip_file(&path)?;

        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        info!(
            file = %file,
            route_id = %trip.route_id,
            collected_by = trip.collector(),
            "Loaded trip"
        );

        trips.push(trip);
    }

    Ok(trips)
}
