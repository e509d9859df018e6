//! Single-cell region.

use crate::region::Region;
use parse2d_core::Index;
use std::iter;

/// A region of exactly one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TinyRegion {
    /// The region's only cell.
    pub location: Index,
}

impl TinyRegion {
    /// Create a region covering `location`.
    pub const fn new(location: Index) -> Self {
        Self { location }
    }
}

impl Region for TinyRegion {
    fn contains(&self, index: Index) -> bool {
        index == self.location
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Index> + '_> {
        Box::new(iter::once(self.location))
    }

    fn len(&self) -> usize {
        1
    }
}
