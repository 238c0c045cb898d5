//! Containment resolution: which parcel covers an arbitrary cell.
//!
//! Deliberately separate from the exact-key lookups in
//! [`registry`](crate::registry): resolution accepts any cell, while
//! mutations only ever address a parcel by its canonical start.

use parcel_core::Identity;
use parcel_curve::{ancestors, CurveError, GridPoint};
use parcel_ledger::AllocationRecord;

use crate::registry::LandRegistry;

impl LandRegistry {
    /// The parcel whose footprint contains `index`, if any.
    ///
    /// Walks the tier-anchors of `index` from finest to coarsest and
    /// returns the first ledger record rooted at the anchor with exactly
    /// that tier. Parcels never overlap, so the first match is the only
    /// one. Indices outside the grid resolve to `None`.
    pub fn resolve(&self, index: u64) -> Option<&AllocationRecord> {
        if !self.grid.contains(index) {
            return None;
        }
        ancestors(index).into_iter().find_map(|(tier, anchor)| {
            self.ledger.get(anchor).filter(|record| record.tier == tier)
        })
    }

    /// Owner of the cell at `index`, or `None` if unallocated.
    pub fn owner_of(&self, index: u64) -> Option<Identity> {
        self.resolve(index).map(|record| record.owner)
    }

    /// Owner of the cell at a 2D point, via the grid's curve.
    pub fn owner_at(&self, point: GridPoint) -> Result<Option<Identity>, CurveError> {
        let index = self.grid.index_of(point)?;
        Ok(self.owner_of(index))
    }
}
