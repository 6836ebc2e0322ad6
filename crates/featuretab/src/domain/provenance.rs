//! Provenance tags written to the merger's `source` column

use std::fmt;

/// Which merge input a row was read from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    First,
    Second,
}

/// Provenance tag of a merged row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Only in file1 (`1`)
    FirstOnly,
    /// Only in file2 (`2`)
    SecondOnly,
    /// From file1, key also present in file2 (`B1`)
    SharedFirst,
    /// From file2, key also present in file1 (`B2`)
    SharedSecond,
}

impl Provenance {
    pub fn classify(origin: Origin, shared: bool) -> Self {
        match (origin, shared) {
            (Origin::First, false) => Self::FirstOnly,
            (Origin::Second, false) => Self::SecondOnly,
            (Origin::First, true) => Self::SharedFirst,
            (Origin::Second, true) => Self::SharedSecond,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstOnly => "1",
            Self::SecondOnly => "2",
            Self::SharedFirst => "B1",
            Self::SharedSecond => "B2",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
