//! Feature table related constants

// =============================================================================
// Column names
// =============================================================================

/// Contig (source sequence) column
pub const CONTIG_COLUMN: &str = "contig";

/// Start coordinate column
pub const START_COLUMN: &str = "start";

/// End coordinate column (also the merge sort column)
pub const END_COLUMN: &str = "end";

/// Strand column
pub const STRAND_COLUMN: &str = "strand";

/// Nucleotide sequence column (extractor only)
pub const SEQUENCE_COLUMN: &str = "sequence";

/// Provenance column added by the merger
pub const SOURCE_COLUMN: &str = "source";

/// Columns forming the match key, in key order
pub const KEY_COLUMNS: [&str; 4] = [CONTIG_COLUMN, START_COLUMN, END_COLUMN, STRAND_COLUMN];

// =============================================================================
// RNA window parameters
// =============================================================================

/// Zero-based offset of the extraction window (1-based position 6)
pub const WINDOW_OFFSET: usize = 5;

/// Length of the extraction window (1-based positions 6..=21)
pub const WINDOW_LENGTH: usize = 16;

// =============================================================================
// File format
// =============================================================================

/// Extension of input feature tables
pub const TABLE_EXTENSION: &str = "csv";

/// Extension of extractor outputs
pub const FASTA_EXTENSION: &str = "fasta";
