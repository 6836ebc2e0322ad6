//! Feature table file I/O operations
//!
//! This module provides functions for reading and writing comma-separated
//! feature tables with a header row.

use crate::domain::table::{FeatureTable, TableError};
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Read a table from any CSV source
pub fn read_table<R: Read>(source: R) -> Result<FeatureTable, TableError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

    let headers = reader.headers()?.clone();
    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureTable::new(headers, rows))
}

/// Load table from file
pub fn load_table(path: impl AsRef<Path>) -> Result<FeatureTable, TableError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = read_table(file)?;

    debug!(
        "Loaded {} rows ({} columns) from {}",
        table.len(),
        table.headers().len(),
        path.display()
    );
    Ok(table)
}

/// Write a table (header first) to any sink
pub fn write_table<W: Write>(sink: W, table: &FeatureTable) -> Result<(), TableError> {
    let mut writer = WriterBuilder::new().from_writer(sink);

    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Save table to file, replacing any existing file
pub fn save_table(path: impl AsRef<Path>, table: &FeatureTable) -> Result<(), TableError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_table(file, table)?;

    debug!("Saved {} rows to {}", table.len(), path.display());
    Ok(())
}
