//! Feature match keys
//!
//! Two rows describe the same feature iff their (contig, start, end, strand)
//! tuples are equal. Coordinates compare as integers, so `10` and ` 10`
//! name the same position.

use crate::constants::{CONTIG_COLUMN, END_COLUMN, START_COLUMN, STRAND_COLUMN};
use crate::domain::table::{FeatureTable, TableError};
use csv::StringRecord;

/// Match key of a feature row
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureKey {
    pub contig: String,
    pub start: i64,
    pub end: i64,
    pub strand: String,
}

impl FeatureKey {
    pub fn new(contig: impl Into<String>, start: i64, end: i64, strand: impl Into<String>) -> Self {
        Self {
            contig: contig.into(),
            start,
            end,
            strand: strand.into(),
        }
    }
}

/// Resolved positions of the key columns within one table's header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyColumns {
    pub contig: usize,
    pub start: usize,
    pub end: usize,
    pub strand: usize,
}

impl KeyColumns {
    /// Resolve key column positions, failing on the first absent column
    pub fn resolve(table: &FeatureTable) -> Result<Self, TableError> {
        Ok(Self {
            contig: table.column_index(CONTIG_COLUMN)?,
            start: table.column_index(START_COLUMN)?,
            end: table.column_index(END_COLUMN)?,
            strand: table.column_index(STRAND_COLUMN)?,
        })
    }

    /// Build the key of `record`
    ///
    /// `row` is the 1-based data row number, used only for error reporting.
    pub fn key(&self, record: &StringRecord, row: usize) -> Result<FeatureKey, TableError> {
        Ok(FeatureKey {
            contig: field(record, self.contig).to_string(),
            start: parse_coordinate(field(record, self.start), START_COLUMN, row)?,
            end: parse_coordinate(field(record, self.end), END_COLUMN, row)?,
            strand: field(record, self.strand).to_string(),
        })
    }
}

/// Field text at `index`, empty when the record is shorter than the header
pub(crate) fn field(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or("")
}

/// Parse an integer coordinate field
pub fn parse_coordinate(value: &str, column: &str, row: usize) -> Result<i64, TableError> {
    value
        .trim()
        .parse()
        .map_err(|_| TableError::InvalidCoordinate {
            column: column.to_string(),
            row,
            value: value.to_string(),
        })
}
