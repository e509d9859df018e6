//! The [`Region`] trait and the [`AnyRegion`] sum type.

use crate::rect::RectRegion;
use crate::sparse::SparseRegion;
use crate::tiny::TinyRegion;
use parse2d_core::Index;

/// An immutable, finite set of diagram cells.
///
/// # Contract
///
/// - `len()` equals the number of items yielded by `iter()`.
/// - `iter()` yields no duplicates and is restartable: every call starts a
///   fresh, identical traversal of the same region instance.
/// - `contains(p)` is true exactly for the points `iter()` yields.
///
/// The compliance suite in this crate checks all three for every variant.
pub trait Region {
    /// Whether `index` is one of the region's cells.
    fn contains(&self, index: Index) -> bool;

    /// Iterate over the region's cells.
    fn iter(&self) -> Box<dyn Iterator<Item = Index> + '_>;

    /// Number of cells in the region.
    fn len(&self) -> usize;

    /// Whether the region has no cells.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One of the three region representations.
///
/// Tokens carry an `AnyRegion` so that a single token type can hold the
/// cheapest representation for whatever shape its tokenizer produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnyRegion {
    /// A single cell.
    Tiny(TinyRegion),
    /// A half-open rectangle.
    Rect(RectRegion),
    /// An explicit point set.
    Sparse(SparseRegion),
}

impl AnyRegion {
    /// The single cell of a [`TinyRegion`], or `None` for other variants.
    pub fn location(&self) -> Option<Index> {
        match self {
            Self::Tiny(tiny) => Some(tiny.location),
            Self::Rect(_) | Self::Sparse(_) => None,
        }
    }

    /// The smallest half-open box containing every cell, or `None` when
    /// the region is empty.
    pub fn bounding_box(&self) -> Option<RectRegion> {
        match self {
            Self::Tiny(tiny) => Some(RectRegion::new(
                tiny.location,
                Index::new(tiny.location.x + 1, tiny.location.y + 1),
            )),
            Self::Rect(rect) if rect.is_empty() => None,
            Self::Rect(rect) => Some(rect.clone()),
            Self::Sparse(sparse) => sparse.bounding_box(),
        }
    }
}

impl Region for AnyRegion {
    fn contains(&self, index: Index) -> bool {
        match self {
            Self::Tiny(r) => r.contains(index),
            Self::Rect(r) => r.contains(index),
            Self::Sparse(r) => r.contains(index),
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Index> + '_> {
        match self {
            Self::Tiny(r) => r.iter(),
            Self::Rect(r) => r.iter(),
            Self::Sparse(r) => r.iter(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Tiny(r) => r.len(),
            Self::Rect(r) => r.len(),
            Self::Sparse(r) => r.len(),
        }
    }
}

impl From<TinyRegion> for AnyRegion {
    fn from(region: TinyRegion) -> Self {
        Self::Tiny(region)
    }
}

impl From<RectRegion> for AnyRegion {
    fn from(region: RectRegion) -> Self {
        Self::Rect(region)
    }
}

impl From<SparseRegion> for AnyRegion {
    fn from(region: SparseRegion) -> Self {
        Self::Sparse(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    fn samples() -> Vec<AnyRegion> {
        vec![
            TinyRegion::new(Index::new(1, 1)).into(),
            RectRegion::new(Index::new(0, 0), Index::new(2, 3)).into(),
            RectRegion::new(Index::new(2, 2), Index::new(2, 5)).into(),
            [Index::new(0, 0), Index::new(1, 1), Index::new(2, 3)]
                .into_iter()
                .collect::<SparseRegion>()
                .into(),
        ]
    }

    #[test]
    fn compliance_all_variants() {
        for region in samples() {
            compliance::run_full_compliance(&region);
        }
    }

    #[test]
    fn location_only_for_tiny() {
        let regions = samples();
        assert_eq!(regions[0].location(), Some(Index::new(1, 1)));
        assert!(regions[1..].iter().all(|r| r.location().is_none()));
    }

    #[test]
    fn bounding_boxes() {
        let regions = samples();
        assert_eq!(
            regions[0].bounding_box(),
            Some(RectRegion::new(Index::new(1, 1), Index::new(2, 2)))
        );
        assert_eq!(
            regions[1].bounding_box(),
            Some(RectRegion::new(Index::new(0, 0), Index::new(2, 3)))
        );
        assert_eq!(regions[2].bounding_box(), None);
        assert_eq!(
            regions[3].bounding_box(),
            Some(RectRegion::new(Index::new(0, 0), Index::new(3, 4)))
        );
    }
}
