//! FASTA output and input directory handling for the extractor

use crate::constants::{FASTA_EXTENSION, TABLE_EXTENSION};
use crate::domain::rna::FastaRecord;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// List feature tables directly inside `dir`
///
/// Regular files whose name ends in `.csv` (case-sensitive), sorted by name.
/// Subdirectories are not descended into.
pub fn list_table_files(dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let suffix = format!(".{}", TABLE_EXTENSION);
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_table = path
            .file_name()
            .map(|name| name.to_string_lossy().ends_with(&suffix))
            .unwrap_or(false);

        if is_table && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Get the FASTA output path for an input table
///
/// Format: `{output_dir}/{input stem}.fasta`
pub fn get_fasta_path(output_dir: impl AsRef<Path>, input: impl AsRef<Path>) -> PathBuf {
    let stem = input
        .as_ref()
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();

    let mut name = stem;
    name.push(".");
    name.push(FASTA_EXTENSION);
    output_dir.as_ref().join(name)
}

/// Write records to any sink
pub fn write_fasta<W: Write>(sink: &mut W, records: &[FastaRecord]) -> io::Result<()> {
    for record in records {
        write!(sink, "{}", record)?;
    }
    Ok(())
}

/// Save records to file, replacing any existing file
pub fn save_fasta(path: impl AsRef<Path>, records: &[FastaRecord]) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    write_fasta(&mut writer, records)?;
    writer.flush()
}
