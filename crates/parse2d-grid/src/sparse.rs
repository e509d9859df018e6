//! Explicit point-set region.

use crate::rect::RectRegion;
use crate::region::Region;
use indexmap::IndexSet;
use parse2d_core::Index;

/// A region stored as an explicit set of cells.
///
/// Backed by an [`IndexSet`], so membership is an amortized O(1) hash lookup
/// and iteration follows insertion order, which is stable for the lifetime
/// of the region. Equality ignores that order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseRegion {
    points: IndexSet<Index>,
}

impl SparseRegion {
    /// Create a region from a set of cells.
    pub fn new(points: IndexSet<Index>) -> Self {
        Self { points }
    }

    /// The smallest half-open box containing every cell, or `None` when
    /// empty.
    pub fn bounding_box(&self) -> Option<RectRegion> {
        let first = *self.points.first()?;
        let (min, max) = self.points.iter().fold((first, first), |(min, max), p| {
            (
                Index::new(min.x.min(p.x), min.y.min(p.y)),
                Index::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(RectRegion::new(min, Index::new(max.x + 1, max.y + 1)))
    }
}

impl FromIterator<Index> for SparseRegion {
    fn from_iter<I: IntoIterator<Item = Index>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Region for SparseRegion {
    fn contains(&self, index: Index) -> bool {
        self.points.contains(&index)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Index> + '_> {
        Box::new(self.points.iter().copied())
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn i(x: i32, y: i32) -> Index {
        Index::new(x, y)
    }

    #[test]
    fn membership_and_len() {
        let region: SparseRegion = [i(0, 0), i(1, 1), i(2, 3)].into_iter().collect();
        assert!(region.contains(i(0, 0)));
        assert!(region.contains(i(1, 1)));
        assert!(region.contains(i(2, 3)));
        assert!(!region.contains(i(1, 0)));
        assert!(!region.contains(i(0, 1)));
        assert!(!region.contains(i(2, 2)));
        assert_eq!(region.len(), 3);
        let seen: HashSet<_> = region.iter().collect();
        assert_eq!(seen, HashSet::from([i(0, 0), i(1, 1), i(2, 3)]));
    }

    #[test]
    fn duplicates_collapse() {
        let region: SparseRegion = [i(1, 1), i(1, 1), i(0, 0)].into_iter().collect();
        assert_eq!(region.len(), 2);
        compliance::run_full_compliance(&region);
    }

    #[test]
    fn equality_ignores_order() {
        let a: SparseRegion = [i(0, 0), i(0, 1)].into_iter().collect();
        let b: SparseRegion = [i(0, 1), i(0, 0)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_region_has_no_bounding_box() {
        let region = SparseRegion::default();
        assert!(region.is_empty());
        assert_eq!(region.bounding_box(), None);
    }

    proptest! {
        #[test]
        fn compliance_arbitrary_sets(
            points in proptest::collection::vec((-8i32..8, -8i32..8), 0..24)
        ) {
            let region: SparseRegion = points.into_iter().map(Index::from).collect();
            compliance::run_full_compliance(&region);
        }
    }
}
