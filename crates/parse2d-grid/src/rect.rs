//! Half-open axis-aligned rectangle region.

use crate::region::Region;
use parse2d_core::Index;

/// A half-open box: `top_left` is inside, `bottom_right` is just outside.
///
/// Membership and size are computed arithmetically, so a rectangle costs the
/// same regardless of how many cells it covers. A box with a non-positive
/// width or height is empty.
///
/// Iteration is row-major within the box.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RectRegion {
    /// Inclusive top-left corner.
    pub top_left: Index,
    /// Exclusive bottom-right corner.
    pub bottom_right: Index,
}

impl RectRegion {
    /// Create the box `[top_left, bottom_right)`.
    pub const fn new(top_left: Index, bottom_right: Index) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Number of columns, clamped at zero.
    pub fn width(&self) -> usize {
        usize::try_from(self.bottom_right.x - self.top_left.x).unwrap_or(0)
    }

    /// Number of rows, clamped at zero.
    pub fn height(&self) -> usize {
        usize::try_from(self.bottom_right.y - self.top_left.y).unwrap_or(0)
    }
}

impl Region for RectRegion {
    fn contains(&self, index: Index) -> bool {
        (self.top_left.x..self.bottom_right.x).contains(&index.x)
            && (self.top_left.y..self.bottom_right.y).contains(&index.y)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = Index> + '_> {
        let xs = self.top_left.x..self.bottom_right.x;
        Box::new(
            (self.top_left.y..self.bottom_right.y)
                .flat_map(move |y| xs.clone().map(move |x| Index::new(x, y))),
        )
    }

    fn len(&self) -> usize {
        self.width() * self.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn i(x: i32, y: i32) -> Index {
        Index::new(x, y)
    }

    #[test]
    fn membership_is_half_open() {
        let region = RectRegion::new(i(0, 0), i(2, 3));
        assert!(region.contains(i(0, 0)));
        assert!(region.contains(i(1, 1)));
        assert!(region.contains(i(1, 2)));
        assert!(!region.contains(i(2, 2)));
        assert!(!region.contains(i(-1, 0)));
        assert!(!region.contains(i(0, 3)));
    }

    #[test]
    fn iterates_row_major() {
        let region = RectRegion::new(i(0, 0), i(2, 3));
        assert_eq!(
            region.iter().collect::<Vec<_>>(),
            vec![i(0, 0), i(1, 0), i(0, 1), i(1, 1), i(0, 2), i(1, 2)]
        );
        assert_eq!(region.len(), 6);
    }

    #[test]
    fn degenerate_boxes_are_empty() {
        for region in [
            RectRegion::new(i(3, 3), i(3, 5)),
            RectRegion::new(i(3, 3), i(5, 3)),
            RectRegion::new(i(3, 3), i(1, 1)),
            RectRegion::new(i(0, 0), i(-2, 4)),
        ] {
            assert_eq!(region.len(), 0);
            assert!(region.is_empty());
            assert_eq!(region.iter().count(), 0);
            compliance::run_full_compliance(&region);
        }
    }

    proptest! {
        #[test]
        fn compliance_arbitrary_boxes(
            x0 in -6i32..6, y0 in -6i32..6,
            x1 in -6i32..6, y1 in -6i32..6,
        ) {
            compliance::run_full_compliance(&RectRegion::new(i(x0, y0), i(x1, y1)));
        }
    }
}
