//! Error types for grid construction and coordinate conversion.

use std::fmt;

use crate::grid::GridPoint;

/// Errors arising from grid construction or index/coordinate mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurveError {
    /// A curve index is outside `[0, cell_count)`.
    IndexOutOfBounds {
        /// The offending index.
        index: u64,
        /// Total number of cells in the grid.
        cell_count: u64,
    },
    /// A 2D point lies outside the grid.
    PointOutOfBounds {
        /// The offending point.
        point: GridPoint,
        /// Grid edge length in cells.
        side: u32,
    },
    /// The requested grid level exceeds the supported maximum.
    LevelTooLarge {
        /// The requested level.
        level: u32,
        /// The largest supported level.
        max: u32,
    },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, cell_count } => {
                write!(f, "curve index {index} out of bounds: [0, {cell_count})")
            }
            Self::PointOutOfBounds { point, side } => {
                write!(f, "point {point} out of bounds for {side}x{side} grid")
            }
            Self::LevelTooLarge { level, max } => {
                write!(f, "grid level {level} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for CurveError {}
