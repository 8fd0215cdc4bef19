//! End-to-end run: load, merge, write, summarize.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::loader::load_trips;
use crate::lookup::LookupTables;
use crate::merge::merge_trips;
use crate::output::{TableCount, write_feed};
use crate::summary::ContributorSummary;

/// Printed when the input directory holds no trip documents.
pub fn no_input_guidance(input_dir: &Path) -> String {
    format!(
        "No JSON files found in {}/ folder.\n\
         Drop collected trip JSON files into that folder and run again.",
        input_dir.display()
    )
}

#[derive(Debug)]
pub enum Outcome {
    /// Nothing to do; no tables were written.
    NoInput,
    Built {
        tables: Vec<TableCount>,
        summary: ContributorSummary,
    },
}

/// Creates the input and output directories if they are missing.
pub fn prepare_dirs(input_dir: &Path, output_dir: &Path) -> Result<()> {
    for dir in [input_dir, output_dir] {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }
    Ok(())
}

/// Builds the feed from every trip document in `input_dir` into `output_dir`.
///
/// All documents are parsed before anything is written, so a malformed
/// document leaves the output directory untouched.
#[tracing::instrument(skip_all, fields(input_dir = %input_dir.display(), output_dir = %output_dir.display()))]
pub fn run(input_dir: &Path, output_dir: &Path, lookups: &LookupTables) -> Result<Outcome> {
    prepare_dirs(input_dir, output_dir)?;

    let trips = load_trips(input_dir)?;
    if trips.is_empty() {
        return Ok(Outcome::NoInput);
    }
    info!(trips = trips.len(), "Trips loaded");

    let feed = merge_trips(&trips, lookups)?;
    let tables = write_feed(output_dir, &feed)?;

    Ok(Outcome::Built {
        tables,
        summary: ContributorSummary::from_trips(&trips),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_dirs_creates_missing() {
        let root = tempfile::tempdir().unwrap();
        let input = root.path().join("received_trips");
        let output = root.path().join("out/gtfs");

        prepare_dirs(&input, &output).unwrap();

        assert!(input.is_dir());
        assert!(output.is_dir());
    }

    #[test]
    fn test_run_without_input_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let input = root.path().join("received_trips");
        let output = root.path().join("gtfs");

        let outcome = run(&input, &output, &LookupTables::default()).unwrap();

        assert!(matches!(outcome, Outcome::NoInput));
        assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
    }

    #[test]
    fn test_guidance_names_folder() {
        let text = no_input_guidance(Path::new("received_trips"));
        assert!(text.starts_with("No JSON files found in received_trips/ folder."));
        assert_eq!(text.lines().count(), 2);
    }
}
