//! Removal of shared features
//!
//! Keeps the rows of the second table whose match key does not occur in the
//! first table. Columns and row order of the second table are preserved.

use crate::domain::feature::FeatureKey;
use crate::domain::table::{FeatureTable, TableError};
use crate::infra::table_io::{load_table, save_table};
use log::info;
use rustc_hash::FxHashSet;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubtractSummary {
    pub kept: usize,
    pub removed: usize,
}

/// Filter `second`, dropping rows keyed in `first`
pub fn subtract_tables(
    first: &FeatureTable,
    second: &FeatureTable,
) -> Result<(FeatureTable, SubtractSummary), TableError> {
    let first_keys: FxHashSet<FeatureKey> = first.keys()?.into_iter().collect();
    let second_keys = second.keys()?;

    let rows: Vec<_> = second
        .rows()
        .iter()
        .zip(second_keys.iter())
        .filter(|(_, key)| !first_keys.contains(*key))
        .map(|(row, _)| row.clone())
        .collect();

    let summary = SubtractSummary {
        kept: rows.len(),
        removed: second.len() - rows.len(),
    };
    Ok((FeatureTable::new(second.headers().clone(), rows), summary))
}

/// Subtract table files and save the filtered second table to `output`
pub fn subtract_files(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<SubtractSummary, TableError> {
    let first = load_table(first)?;
    let second = load_table(second)?;

    let (filtered, summary) = subtract_tables(&first, &second)?;
    save_table(output, &filtered)?;

    info!(
        "Kept {} rows, removed {} shared rows",
        summary.kept, summary.removed
    );
    Ok(summary)
}
