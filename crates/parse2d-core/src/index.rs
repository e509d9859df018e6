//! The [`Index`] grid coordinate.

use std::cmp::Ordering;
use std::fmt;

/// A cell coordinate within a diagram: column `x`, row `y`.
///
/// Coordinates are signed so that stepping off the top or left edge of a
/// diagram produces a valid (if unpopulated) index rather than wrapping.
///
/// Indices order by row first, then column, which is the row-major scan
/// order used by `Diagram::items` and the tokenize dispatcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Index {
    /// Column, increasing to the right.
    pub x: i32,
    /// Row, increasing downwards.
    pub y: i32,
}

impl Index {
    /// Create an index at column `x`, row `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Ord for Index {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Index {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Index {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Index> for (i32, i32) {
    fn from(index: Index) -> Self {
        (index.x, index.y)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
