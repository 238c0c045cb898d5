//! Morton (Z-order) curve backend.

use crate::curve::Curve;
use crate::grid::GridPoint;

/// Morton / Z-order linearization: bit `2i` of the index is bit `i` of
/// `x`, bit `2i + 1` is bit `i` of `y`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZOrder;

/// Spread the low 32 bits of `v` so bit `i` lands at bit `2i`.
fn spread(v: u32) -> u64 {
    let mut v = u64::from(v);
    v = (v | (v << 16)) & 0x0000_FFFF_0000_FFFF;
    v = (v | (v << 8)) & 0x00FF_00FF_00FF_00FF;
    v = (v | (v << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    v = (v | (v << 2)) & 0x3333_3333_3333_3333;
    v = (v | (v << 1)) & 0x5555_5555_5555_5555;
    v
}

/// Inverse of [`spread`]: gather the even bits of `v`.
fn compact(v: u64) -> u32 {
    let mut v = v & 0x5555_5555_5555_5555;
    v = (v | (v >> 1)) & 0x3333_3333_3333_3333;
    v = (v | (v >> 2)) & 0x0F0F_0F0F_0F0F_0F0F;
    v = (v | (v >> 4)) & 0x00FF_00FF_00FF_00FF;
    v = (v | (v >> 8)) & 0x0000_FFFF_0000_FFFF;
    v = (v | (v >> 16)) & 0x0000_0000_FFFF_FFFF;
    v as u32
}

impl Curve for ZOrder {
    fn name(&self) -> &'static str {
        "zorder"
    }

    fn index_to_point(&self, index: u64, _level: u32) -> GridPoint {
        GridPoint::new(compact(index), compact(index >> 1))
    }

    fn point_to_index(&self, point: GridPoint, _level: u32) -> u64 {
        spread(point.x) | (spread(point.y) << 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;

    #[test]
    fn base_pattern_is_z_shaped() {
        let pts: Vec<GridPoint> = (0..4).map(|d| ZOrder.index_to_point(d, 1)).collect();
        assert_eq!(
            pts,
            vec![
                GridPoint::new(0, 0),
                GridPoint::new(1, 0),
                GridPoint::new(0, 1),
                GridPoint::new(1, 1),
            ]
        );
    }

    #[test]
    fn spread_compact_inverse() {
        for v in [0u32, 1, 2, 0xAB, 0x1FFF, u32::MAX] {
            assert_eq!(compact(spread(v)), v);
        }
    }

    #[test]
    fn compliance_small_levels() {
        for level in 0..=5 {
            compliance::run_full_compliance(&ZOrder, level);
        }
    }
}
