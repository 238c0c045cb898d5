//! Curve-order footprints and allocation handles.

use crate::tier::Tier;
use std::fmt;

/// A half-open range `[start, start + len)` of curve indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    start: u64,
    len: u64,
}

impl Footprint {
    /// Footprint of a tier-sized block beginning at `start`.
    pub fn of(start: u64, tier: Tier) -> Self {
        Self {
            start,
            len: tier.area(),
        }
    }

    /// First index covered.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Number of indices covered.
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Always `false`: every tier covers at least one cell.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// One past the last index covered.
    ///
    /// Saturates at `u64::MAX` rather than wrapping, so an oversized
    /// footprint still compares as past the end of any grid.
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.len)
    }

    /// Whether `index` falls inside this footprint.
    pub fn contains(&self, index: u64) -> bool {
        index >= self.start && index < self.end()
    }

    /// Whether the two footprints share at least one index.
    pub fn intersects(&self, other: &Footprint) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// Returned by a successful allocation: identifies the new parcel by its
/// canonical start and tier.
///
/// The handle carries no ownership data; query the registry for the
/// current owner, which may change after transfers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AllocationHandle {
    start: u64,
    tier: Tier,
}

impl AllocationHandle {
    /// Create a handle for the parcel rooted at `start`.
    pub fn new(start: u64, tier: Tier) -> Self {
        Self { start, tier }
    }

    /// Canonical start index.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Size tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// The curve-order range the parcel occupies.
    pub fn footprint(&self) -> Footprint {
        Footprint::of(self.start, self.tier)
    }
}
