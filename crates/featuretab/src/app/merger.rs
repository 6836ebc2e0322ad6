//! Tagged union of two feature tables
//!
//! Every row of both inputs is kept and labelled with its provenance:
//! `1`/`2` when its match key exists only in its own table, `B1`/`B2` when
//! the other table has a row with the same key. The union is then ordered by
//! `end` with a stable sort, file1 rows ahead of file2 rows on ties.
//!
//! Output columns are file1's columns, then `source` (overwritten in place if
//! file1 already has one), then file2's remaining columns. Cells a row's own
//! table has no column for are left empty.

use crate::constants::SOURCE_COLUMN;
use crate::domain::feature::{FeatureKey, field};
use crate::domain::provenance::{Origin, Provenance};
use crate::domain::table::{FeatureTable, TableError};
use crate::infra::table_io::{load_table, save_table};
use csv::StringRecord;
use log::info;
use rustc_hash::FxHashSet;
use std::path::Path;

/// Row counts per provenance tag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub first_only: usize,
    pub second_only: usize,
    pub shared_first: usize,
    pub shared_second: usize,
}

impl MergeSummary {
    fn record(&mut self, tag: Provenance) {
        match tag {
            Provenance::FirstOnly => self.first_only += 1,
            Provenance::SecondOnly => self.second_only += 1,
            Provenance::SharedFirst => self.shared_first += 1,
            Provenance::SharedSecond => self.shared_second += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.first_only + self.second_only + self.shared_first + self.shared_second
    }
}

/// Column layout of the merged table
struct MergeLayout {
    headers: StringRecord,
    source: usize,
    /// Output column -> file1 column
    first: Vec<Option<usize>>,
    /// Output column -> file2 column
    second: Vec<Option<usize>>,
}

impl MergeLayout {
    fn new(first: &StringRecord, second: &StringRecord) -> Self {
        let mut names: Vec<&str> = first.iter().collect();
        if !names.contains(&SOURCE_COLUMN) {
            names.push(SOURCE_COLUMN);
        }
        for name in second.iter() {
            if !names.contains(&name) {
                names.push(name);
            }
        }

        let source = names
            .iter()
            .position(|n| *n == SOURCE_COLUMN)
            .unwrap_or(names.len());
        let first_map = (0..names.len())
            .map(|i| (i < first.len()).then_some(i))
            .collect();
        let second_map = names
            .iter()
            .map(|n| second.iter().position(|h| h == *n))
            .collect();

        Self {
            headers: StringRecord::from(names),
            source,
            first: first_map,
            second: second_map,
        }
    }

    fn project(&self, row: &StringRecord, origin: Origin, tag: Provenance) -> StringRecord {
        let mapping = match origin {
            Origin::First => &self.first,
            Origin::Second => &self.second,
        };

        mapping
            .iter()
            .enumerate()
            .map(|(i, column)| {
                if i == self.source {
                    tag.as_str()
                } else {
                    column.map(|j| field(row, j)).unwrap_or("")
                }
            })
            .collect()
    }
}

/// Merge two tables into a provenance-tagged union sorted by `end`
///
/// Both inputs are validated (key columns present, integer coordinates)
/// before any output row is built.
pub fn merge_tables(
    first: &FeatureTable,
    second: &FeatureTable,
) -> Result<(FeatureTable, MergeSummary), TableError> {
    let first_keys = first.keys()?;
    let second_keys = second.keys()?;

    let first_set: FxHashSet<&FeatureKey> = first_keys.iter().collect();
    let second_set: FxHashSet<&FeatureKey> = second_keys.iter().collect();

    let layout = MergeLayout::new(first.headers(), second.headers());
    let mut summary = MergeSummary::default();
    let mut tagged: Vec<(i64, StringRecord)> = Vec::with_capacity(first.len() + second.len());

    let inputs = [
        (Origin::First, first, &first_keys, &second_set),
        (Origin::Second, second, &second_keys, &first_set),
    ];
    for (origin, table, keys, other) in inputs {
        for (row, key) in table.rows().iter().zip(keys.iter()) {
            let tag = Provenance::classify(origin, other.contains(key));
            summary.record(tag);
            tagged.push((key.end, layout.project(row, origin, tag)));
        }
    }

    // Stable: equal ends keep file1-then-file2 input order
    tagged.sort_by_key(|(end, _)| *end);

    let rows = tagged.into_iter().map(|(_, row)| row).collect();
    Ok((FeatureTable::new(layout.headers, rows), summary))
}

/// Merge two table files and save the union to `output`
pub fn merge_files(
    first: impl AsRef<Path>,
    second: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<MergeSummary, TableError> {
    let first = load_table(first)?;
    let second = load_table(second)?;

    let (merged, summary) = merge_tables(&first, &second)?;
    save_table(output, &merged)?;

    info!(
        "Merged {} rows: {} only in file1, {} only in file2, {}+{} shared",
        summary.total(),
        summary.first_only,
        summary.second_only,
        summary.shared_first,
        summary.shared_second
    );
    Ok(summary)
}
