//! Hilbert curve backend.

use crate::curve::Curve;
use crate::grid::GridPoint;

/// Hilbert curve linearization.
///
/// Quadrants are visited recursively in the order lower-left,
/// upper-left, upper-right, lower-right, with sub-quadrants rotated so
/// that consecutive indices are always edge-adjacent. Each quadrant at
/// every recursion depth is a contiguous index range, which gives the
/// locality invariant directly.
///
/// # Examples
///
/// ```
/// use parcel_curve::{Curve, GridPoint, Hilbert};
///
/// // The 2x2 base pattern.
/// let first: Vec<GridPoint> = (0..4).map(|d| Hilbert.index_to_point(d, 1)).collect();
/// assert_eq!(
///     first,
///     vec![
///         GridPoint::new(0, 0),
///         GridPoint::new(0, 1),
///         GridPoint::new(1, 1),
///         GridPoint::new(1, 0),
///     ]
/// );
/// assert_eq!(Hilbert.point_to_index(GridPoint::new(1, 1), 1), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hilbert;

/// Rotate/flip a quadrant so the sub-curve has the right orientation.
fn rotate(n: u64, x: &mut u64, y: &mut u64, rx: u64, ry: u64) {
    if ry == 0 {
        if rx == 1 {
            *x = n - 1 - *x;
            *y = n - 1 - *y;
        }
        std::mem::swap(x, y);
    }
}

impl Curve for Hilbert {
    fn name(&self) -> &'static str {
        "hilbert"
    }

    fn index_to_point(&self, index: u64, level: u32) -> GridPoint {
        let n = 1u64 << level;
        let mut t = index;
        let (mut x, mut y) = (0u64, 0u64);
        let mut s = 1u64;
        while s < n {
            let rx = 1 & (t / 2);
            let ry = 1 & (t ^ rx);
            rotate(s, &mut x, &mut y, rx, ry);
            x += s * rx;
            y += s * ry;
            t /= 4;
            s *= 2;
        }
        GridPoint::new(x as u32, y as u32)
    }

    fn point_to_index(&self, point: GridPoint, level: u32) -> u64 {
        let n = 1u64 << level;
        let (mut x, mut y) = (u64::from(point.x), u64::from(point.y));
        let mut d = 0u64;
        let mut s = n / 2;
        while s > 0 {
            let rx = u64::from(x & s > 0);
            let ry = u64::from(y & s > 0);
            d += s * s * ((3 * rx) ^ ry);
            rotate(n, &mut x, &mut y, rx, ry);
            s /= 2;
        }
        d
    }
}
