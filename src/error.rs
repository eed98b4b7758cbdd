//! Error types for colorspan.
//!
//! The range operations themselves never fail; malformed input is clamped or
//! dropped. Errors only come from the parsing and validation edges.

use std::fmt;

/// Result type alias for colorspan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for colorspan operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Invalid color format (e.g., malformed hex string).
    InvalidColor(String),
    /// Unknown theme name.
    InvalidTheme(String),
    /// A range with `start >= end`.
    InvalidRange {
        index: usize,
        start: usize,
        end: usize,
    },
    /// A range that starts before the end of its predecessor.
    UnsortedRanges { index: usize },
    /// A range that touches its predecessor and shares its color.
    UnmergedRanges { index: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor(s) => write!(f, "invalid color format: {s}"),
            Self::InvalidTheme(s) => write!(f, "unknown theme: {s}"),
            Self::InvalidRange { index, start, end } => {
                write!(f, "range #{index} is empty or inverted: [{start}, {end})")
            }
            Self::UnsortedRanges { index } => {
                write!(f, "range #{index} overlaps or precedes the previous range")
            }
            Self::UnmergedRanges { index } => {
                write!(
                    f,
                    "range #{index} touches the previous range with the same color"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
