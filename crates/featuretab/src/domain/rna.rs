//! RNA window extraction and FASTA records
//!
//! The window is taken by character position. A sequence too short to cover
//! the whole window yields whatever part of it exists, down to an empty
//! string; that is not treated as an error.

use crate::constants::{WINDOW_LENGTH, WINDOW_OFFSET};
use std::fmt;

/// Fixed-offset extraction window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RnaWindow {
    /// Zero-based start position
    pub offset: usize,
    /// Maximum number of characters taken
    pub length: usize,
}

impl RnaWindow {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Minimum sequence length that fills the window completely
    pub fn required_length(&self) -> usize {
        self.offset + self.length
    }
}

impl Default for RnaWindow {
    /// Positions 6..=21 (1-based)
    fn default() -> Self {
        Self::new(WINDOW_OFFSET, WINDOW_LENGTH)
    }
}

/// Cut the window out of `sequence` and transcribe it (`T` -> `U`)
///
/// Only uppercase `T` is replaced.
pub fn rna_window(sequence: &str, window: &RnaWindow) -> String {
    sequence
        .chars()
        .skip(window.offset)
        .take(window.length)
        .map(|c| if c == 'T' { 'U' } else { c })
        .collect()
}

/// Single FASTA record, written unwrapped
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FastaRecord {
    /// Header text without the leading `>`
    pub header: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(header: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Record for a feature row: header `{contig} ({end})`
    pub fn for_feature(contig: &str, end: &str, sequence: impl Into<String>) -> Self {
        Self::new(format!("{} ({})", contig, end), sequence)
    }
}

impl fmt::Display for FastaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ">{}", self.header)?;
        writeln!(f, "{}", self.sequence)
    }
}
