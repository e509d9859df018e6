//! Error types for diagram writes.

use parse2d_core::Index;
use std::fmt;

/// Errors arising from writing to a [`Diagram`](crate::Diagram).
///
/// Reads never fail: a read outside the populated extent yields the
/// whitespace sentinel instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagramError {
    /// A write or delete touched a cell outside the populated extent.
    OutOfBounds {
        /// The first offending cell.
        index: Index,
    },
    /// A slice replacement does not have the shape of the target box.
    ShapeMismatch {
        /// Rows in the target box.
        expected_rows: usize,
        /// Columns in the target box.
        expected_cols: usize,
        /// Rows in the replacement.
        found_rows: usize,
        /// Width of the first replacement row whose width differs, or
        /// `expected_cols` when only the row count is wrong.
        found_cols: usize,
    },
}

impl fmt::Display for DiagramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index } => {
                write!(f, "index {index} is outside the populated diagram")
            }
            Self::ShapeMismatch {
                expected_rows,
                expected_cols,
                found_rows,
                found_cols,
            } => write!(
                f,
                "shape mismatch: box is {expected_cols}x{expected_rows}, replacement is {found_cols}x{found_rows}"
            ),
        }
    }
}

impl std::error::Error for DiagramError {}
