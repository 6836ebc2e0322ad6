//! RNA FASTA extraction
//!
//! Every `.csv` table in an input directory becomes one `.fasta` file in the
//! output directory, one record per row, in row order.

use crate::constants::{CONTIG_COLUMN, END_COLUMN, SEQUENCE_COLUMN};
use crate::domain::feature::field;
use crate::domain::rna::{FastaRecord, RnaWindow, rna_window};
use crate::domain::table::{FeatureTable, TableError};
use crate::infra::fasta_io::{get_fasta_path, list_table_files, save_fasta};
use crate::infra::table_io::load_table;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Result of extracting one table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records: usize,
}

/// Result of a directory run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub files: Vec<ExtractedFile>,
}

impl ExtractReport {
    pub fn total_records(&self) -> usize {
        self.files.iter().map(|f| f.records).sum()
    }
}

/// Build one FASTA record per row
///
/// Requires `contig`, `end` and `sequence` columns.
pub fn extract_records(
    table: &FeatureTable,
    window: &RnaWindow,
) -> Result<Vec<FastaRecord>, TableError> {
    let contig = table.column_index(CONTIG_COLUMN)?;
    let end = table.column_index(END_COLUMN)?;
    let sequence = table.column_index(SEQUENCE_COLUMN)?;

    let mut short = 0usize;
    let records: Vec<FastaRecord> = table
        .rows()
        .iter()
        .map(|row| {
            let seq = field(row, sequence);
            if seq.chars().count() < window.required_length() {
                short += 1;
            }
            FastaRecord::for_feature(field(row, contig), field(row, end), rna_window(seq, window))
        })
        .collect();

    if short > 0 {
        debug!(
            "{} sequence(s) shorter than {} characters, window truncated",
            short,
            window.required_length()
        );
    }

    Ok(records)
}

/// Extract one table file into one FASTA file
pub fn extract_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    window: &RnaWindow,
) -> Result<usize, TableError> {
    let table = load_table(input)?;
    let records = extract_records(&table, window)?;
    save_fasta(output, &records)?;
    Ok(records.len())
}

/// Extract every table in `input_dir` into `output_dir`
///
/// The output directory is created if absent. The first failing file aborts
/// the run; files already written are left in place.
pub fn extract_dir(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    window: &RnaWindow,
) -> Result<ExtractReport, TableError> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let inputs = list_table_files(input_dir.as_ref())?;
    info!(
        "Found {} table(s) in {}",
        inputs.len(),
        input_dir.as_ref().display()
    );

    let mut report = ExtractReport::default();
    for input in inputs {
        let output = get_fasta_path(output_dir, &input);
        let records = extract_file(&input, &output, window)?;
        debug!(
            "{} -> {} ({} records)",
            input.display(),
            output.display(),
            records
        );
        report.files.push(ExtractedFile {
            input,
            output,
            records,
        });
    }

    Ok(report)
}
