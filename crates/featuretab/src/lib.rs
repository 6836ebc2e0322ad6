//! featuretab - Post-processing of genomic feature tables
//!
//! This crate provides functionality to:
//! - Extract a fixed window of each row's sequence as an RNA FASTA record
//! - Merge two feature tables into a provenance-tagged union sorted by `end`
//! - Remove from one table the features that also appear in another
//!
//! Rows are matched on their (contig, start, end, strand) key.

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::extractor::{ExtractReport, extract_dir};
pub use app::merger::{MergeSummary, merge_files, merge_tables};
pub use app::subtractor::{SubtractSummary, subtract_files, subtract_tables};
pub use domain::feature::FeatureKey;
pub use domain::provenance::Provenance;
pub use domain::rna::{FastaRecord, RnaWindow};
pub use domain::table::{FeatureTable, TableError};
