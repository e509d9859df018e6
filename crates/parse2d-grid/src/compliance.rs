//! Region trait compliance test helpers.
//!
//! These functions verify that a Region implementation satisfies the
//! invariants required by the trait contract. Reused across all region
//! test modules (TinyRegion, RectRegion, SparseRegion, AnyRegion).

use crate::region::Region;
use indexmap::IndexSet;
use parse2d_core::Index;

/// Half-width of the window of cells probed for membership.
const PROBE_RADIUS: i32 = 12;

/// Assert that `len()` equals the number of iterated cells.
pub fn assert_len_matches_iteration(region: &dyn Region) {
    let count = region.iter().count();
    assert_eq!(
        region.len(),
        count,
        "len() ({}) != iteration count ({count})",
        region.len()
    );
    assert_eq!(region.is_empty(), count == 0, "is_empty() disagrees with len()");
}

/// Assert that iteration yields no cell twice.
pub fn assert_no_duplicates(region: &dyn Region) {
    let cells: Vec<Index> = region.iter().collect();
    let unique: IndexSet<Index> = cells.iter().copied().collect();
    assert_eq!(unique.len(), cells.len(), "iteration has duplicates: {cells:?}");
}

/// Assert that two iterations produce the same sequence.
pub fn assert_iteration_restartable(region: &dyn Region) {
    let a: Vec<Index> = region.iter().collect();
    let b: Vec<Index> = region.iter().collect();
    assert_eq!(a, b, "iteration is not restartable");
}

/// Assert that `contains` holds for every iterated cell and for no other
/// cell in a window around the origin.
pub fn assert_contains_agrees_with_iteration(region: &dyn Region) {
    let cells: IndexSet<Index> = region.iter().collect();
    for cell in &cells {
        assert!(region.contains(*cell), "{cell} iterated but not contained");
    }
    for y in -PROBE_RADIUS..=PROBE_RADIUS {
        for x in -PROBE_RADIUS..=PROBE_RADIUS {
            let probe = Index::new(x, y);
            assert_eq!(
                region.contains(probe),
                cells.contains(&probe),
                "contains({probe}) disagrees with iteration"
            );
        }
    }
}

/// Run all 4 compliance checks on a region.
pub fn run_full_compliance(region: &dyn Region) {
    assert_len_matches_iteration(region);
    assert_no_duplicates(region);
    assert_iteration_restartable(region);
    assert_contains_agrees_with_iteration(region);
}
