//! In-memory feature table
//!
//! A table is a header record plus its data rows, both kept as raw
//! `csv::StringRecord`s so that columns the tools never look at are carried
//! through untouched.

use crate::domain::feature::{FeatureKey, KeyColumns};
use csv::StringRecord;
use thiserror::Error;

/// Feature table held fully in memory
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl FeatureTable {
    pub fn new(headers: StringRecord, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    pub fn headers(&self) -> &StringRecord {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Number of data rows (header excluded)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the first column named `name`
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::MissingColumn {
                column: name.to_string(),
            })
    }

    pub fn key_columns(&self) -> Result<KeyColumns, TableError> {
        KeyColumns::resolve(self)
    }

    /// Match key of every row, in row order
    pub fn keys(&self) -> Result<Vec<FeatureKey>, TableError> {
        let columns = self.key_columns()?;
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| columns.key(row, i + 1))
            .collect()
    }
}

/// Feature table errors
#[derive(Debug, Error)]
pub enum TableError {
    /// File could not be opened, read, created or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed CSV (including rows with the wrong number of fields)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A referenced column is absent from the header
    #[error("Missing required column '{column}'")]
    MissingColumn { column: String },
    /// A key coordinate is not an integer
    #[error("Invalid {column} value '{value}' at row {row}: expected an integer")]
    InvalidCoordinate {
        column: String,
        row: usize,
        value: String,
    },
}
