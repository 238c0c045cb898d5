//! Grid geometry: [`GridSpec`], [`GridPoint`] and [`CellRect`].

use std::fmt;

use parcel_core::Tier;

use crate::align;
use crate::curve::{Curve, CurveKind};
use crate::error::CurveError;

/// A cell coordinate: `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl GridPoint {
    /// Create a point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned square of cells with its lower corner at `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Lowest column.
    pub x: u32,
    /// Lowest row.
    pub y: u32,
    /// Edge length in cells.
    pub side: u32,
}

impl CellRect {
    /// Whether `point` lies inside the square.
    pub fn contains(&self, point: GridPoint) -> bool {
        point.x >= self.x
            && point.x - self.x < self.side
            && point.y >= self.y
            && point.y - self.y < self.side
    }

    /// Number of cells covered.
    pub fn area(&self) -> u64 {
        u64::from(self.side) * u64::from(self.side)
    }
}

/// A `2^level × 2^level` grid linearized by a [`Curve`].
///
/// Construction validates the level; all values are immutable after
/// creation. Indices are `u64` so that `cell_count` and footprint ends
/// never overflow.
///
/// # Examples
///
/// ```
/// use parcel_core::Tier;
/// use parcel_curve::GridSpec;
///
/// let grid = GridSpec::new(5).unwrap();
/// assert_eq!(grid.side(), 32);
/// assert_eq!(grid.cell_count(), 1024);
/// assert!(grid.within_grid(0, Tier::XXLarge));
/// assert!(!grid.within_grid(1024, Tier::XSmall));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSpec {
    level: u32,
    curve: CurveKind,
}

impl GridSpec {
    /// Largest supported level: 8192 × 8192 cells.
    ///
    /// Bounds the occupancy bitmaps of a registry to about 21 MiB.
    pub const MAX_LEVEL: u32 = 13;

    /// Create a Hilbert-ordered grid of side `2^level`.
    pub fn new(level: u32) -> Result<Self, CurveError> {
        Self::with_curve(level, CurveKind::Hilbert)
    }

    /// Create a grid of side `2^level` ordered by `curve`.
    pub fn with_curve(level: u32, curve: CurveKind) -> Result<Self, CurveError> {
        if level > Self::MAX_LEVEL {
            return Err(CurveError::LevelTooLarge {
                level,
                max: Self::MAX_LEVEL,
            });
        }
        Ok(Self { level, curve })
    }

    /// Grid level `L`.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Edge length `2^L` in cells.
    pub fn side(&self) -> u32 {
        1u32 << self.level
    }

    /// Total number of cells `4^L`.
    pub fn cell_count(&self) -> u64 {
        1u64 << (2 * self.level)
    }

    /// Which curve orders the cells.
    pub fn curve_kind(&self) -> CurveKind {
        self.curve
    }

    fn curve(&self) -> &'static dyn Curve {
        self.curve.curve()
    }

    /// Whether `index` addresses a cell of this grid.
    pub fn contains(&self, index: u64) -> bool {
        index < self.cell_count()
    }

    /// Whether the tier footprint starting at `start` fits inside the grid.
    pub fn within_grid(&self, start: u64, tier: Tier) -> bool {
        start
            .checked_add(tier.area())
            .is_some_and(|end| end <= self.cell_count())
    }

    /// Number of aligned tier blocks in the grid (at least one).
    pub fn block_count(&self, tier: Tier) -> u64 {
        (self.cell_count() >> (2 * tier.level())).max(1)
    }

    /// The cell addressed by `index`.
    pub fn point_of(&self, index: u64) -> Result<GridPoint, CurveError> {
        if !self.contains(index) {
            return Err(CurveError::IndexOutOfBounds {
                index,
                cell_count: self.cell_count(),
            });
        }
        Ok(self.curve().index_to_point(index, self.level))
    }

    /// The curve index of `point`.
    pub fn index_of(&self, point: GridPoint) -> Result<u64, CurveError> {
        let side = self.side();
        if point.x >= side || point.y >= side {
            return Err(CurveError::PointOutOfBounds { point, side });
        }
        Ok(self.curve().point_to_index(point, self.level))
    }

    /// The square of cells covered by the tier block anchored at `start`.
    ///
    /// `start` need not be aligned; the block containing it is used.
    pub fn footprint_rect(&self, start: u64, tier: Tier) -> Result<CellRect, CurveError> {
        let anchor = align::ancestor_anchor(start, tier);
        if !self.within_grid(anchor, tier) {
            return Err(CurveError::IndexOutOfBounds {
                index: start,
                cell_count: self.cell_count(),
            });
        }
        let p = self.point_of(anchor)?;
        let mask = !(tier.side() - 1);
        Ok(CellRect {
            x: p.x & mask,
            y: p.y & mask,
            side: tier.side(),
        })
    }
}

impl Default for GridSpec {
    /// 1024 × 1024 Hilbert grid.
    fn default() -> Self {
        Self {
            level: 10,
            curve: CurveKind::Hilbert,
        }
    }
}
