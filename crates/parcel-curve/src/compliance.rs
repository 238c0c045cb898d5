//! Curve trait compliance test helpers.
//!
//! These functions verify that a [`Curve`] implementation satisfies the
//! contract the allocator depends on. Reused across all backend test
//! modules (Hilbert, ZOrder).

use crate::curve::Curve;
use crate::grid::GridPoint;
use indexmap::IndexSet;

/// Assert that every index maps to a distinct in-bounds cell.
pub fn assert_bijective(curve: &dyn Curve, level: u32) {
    let side = 1u32 << level;
    let cells = 1u64 << (2 * level);
    let mut seen: IndexSet<GridPoint> = IndexSet::new();
    for index in 0..cells {
        let p = curve.index_to_point(index, level);
        assert!(
            p.x < side && p.y < side,
            "{}: index {index} maps outside the {side}x{side} grid: {p}",
            curve.name()
        );
        assert!(
            seen.insert(p),
            "{}: cell {p} visited twice (second at index {index})",
            curve.name()
        );
    }
    assert_eq!(seen.len() as u64, cells);
}

/// Assert that `point_to_index` inverts `index_to_point`.
pub fn assert_round_trip(curve: &dyn Curve, level: u32) {
    for index in 0..(1u64 << (2 * level)) {
        let p = curve.index_to_point(index, level);
        let back = curve.point_to_index(p, level);
        assert_eq!(
            back,
            index,
            "{}: index {index} -> {p} -> {back}",
            curve.name()
        );
    }
}

/// Assert the locality invariant: each aligned tier range is one
/// aligned square.
pub fn assert_locality(curve: &dyn Curve, level: u32) {
    let cells = 1u64 << (2 * level);
    for k in 0..=level {
        let area = 1u64 << (2 * k);
        let side = 1u32 << k;
        let mut m = 0;
        while m < cells {
            let corner = curve.index_to_point(m, level);
            let (x0, y0) = (corner.x & !(side - 1), corner.y & !(side - 1));
            for index in m..m + area {
                let p = curve.index_to_point(index, level);
                assert!(
                    p.x >= x0 && p.x < x0 + side && p.y >= y0 && p.y < y0 + side,
                    "{}: tier {k} block at {m} leaks to {p} (square at ({x0}, {y0}) side {side})",
                    curve.name()
                );
            }
            m += area;
        }
    }
}

/// Run all compliance checks on a curve at the given level.
pub fn run_full_compliance(curve: &dyn Curve, level: u32) {
    assert_bijective(curve, level);
    assert_round_trip(curve, level);
    assert_locality(curve, level);
}
