//! CSV output for the feed tables.
//!
//! Each table is written as a header line followed by one line per row.
//! Existing files are overwritten.

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::{Serialize, Serializer};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::merge::Feed;

/// A row type that is written as one feed table.
pub trait Table: Serialize {
    /// File name inside the output directory, e.g. `stops.txt`.
    const FILE_NAME: &'static str;
    /// Header, in the same order as the serialized fields.
    const COLUMNS: &'static [&'static str];
}

/// Rows written to a single table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: usize,
}

/// Renders booleans as `True` / `False`.
pub fn title_case_bool<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

/// Writes the header and `rows` to `writer`.
///
/// The header is written even when `rows` is empty.
pub fn write_rows<W: Write, T: Table>(writer: W, rows: &[T]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false) // header comes from T::COLUMNS
        .from_writer(writer);

    writer.write_record(T::COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes `rows` to `dir/T::FILE_NAME`, replacing any existing file.
pub fn write_table<T: Table>(dir: &Path, rows: &[T]) -> Result<TableCount> {
    let path = dir.join(T::FILE_NAME);
    debug!(path = %path.display(), rows = rows.len(), "Writing table");

    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    write_rows(file, rows).with_context(|| format!("failed to write {}", path.display()))?;

    info!(table = T::FILE_NAME, rows = rows.len(), "Table written");

    Ok(TableCount {
        table: T::FILE_NAME,
        rows: rows.len(),
    })
}

/// Writes all six tables of `feed` into `dir`.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn write_feed(dir: &Path, feed: &Feed) -> Result<Vec<TableCount>> {
    Ok(vec![
        write_table(dir, &feed.agencies)?,
        write_table(dir, &feed.routes)?,
        write_table(dir, &feed.stops)?,
        write_table(dir, &feed.trips)?,
        write_table(dir, &feed.stop_times)?,
        write_table(dir, &feed.calendar)?,
    ])
}
