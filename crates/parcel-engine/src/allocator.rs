//! Parcel creation: alignment, bounds, freeness, commit.

use parcel_core::{AllocError, AllocationHandle, Identity, Tier};
use parcel_curve::anchor_tier;
use parcel_ledger::AllocationRecord;
use tracing::debug;

use crate::registry::LandRegistry;

impl LandRegistry {
    /// Allocate a tier-`tier` parcel anchored at `start` to `owner`.
    ///
    /// Checks, in order: `start` is aligned to `tier`
    /// ([`AllocError::MisalignedAnchor`]), the footprint fits in the grid
    /// ([`AllocError::OutOfBounds`]), and nothing already intersects the
    /// footprint at any tier ([`AllocError::RegionOccupied`]). On success
    /// the parcel is committed and `4^tier` cells are credited to `owner`.
    /// On failure nothing changes except the rejection counters.
    pub fn allocate(
        &mut self,
        start: u64,
        tier: Tier,
        owner: Identity,
    ) -> Result<AllocationHandle, AllocError> {
        self.allocate_with_uri(start, tier, owner, String::new())
    }

    /// [`allocate`](LandRegistry::allocate) with a metadata string stored
    /// alongside the parcel.
    pub fn allocate_with_uri(
        &mut self,
        start: u64,
        tier: Tier,
        owner: Identity,
        uri: impl Into<String>,
    ) -> Result<AllocationHandle, AllocError> {
        if let Err(e) = self.check_allocation(start, tier) {
            match e {
                AllocError::MisalignedAnchor { .. } => self.metrics.misaligned_rejections += 1,
                AllocError::OutOfBounds { .. } => self.metrics.out_of_bounds_rejections += 1,
                AllocError::RegionOccupied { .. } => self.metrics.occupied_rejections += 1,
            }
            debug!(start, %tier, %owner, reason = %e, "allocation rejected");
            return Err(e);
        }

        let record = AllocationRecord::new(start, tier, owner, uri);
        let handle = record.handle();
        let inserted = self.ledger.put(record);
        debug_assert!(inserted, "overlap index missed parcel at {start}");
        self.overlap.mark_occupied(start, tier);
        self.balances.credit(owner, tier.area());

        self.metrics.allocations += 1;
        self.metrics.cells_allocated += tier.area();
        debug!(start, %tier, %owner, "parcel allocated");
        Ok(handle)
    }

    /// Every allocation precondition, without side effects.
    fn check_allocation(&self, start: u64, tier: Tier) -> Result<(), AllocError> {
        let anchor = anchor_tier(start);
        if anchor < tier {
            return Err(AllocError::MisalignedAnchor {
                start,
                tier,
                anchor,
            });
        }
        if !self.grid.within_grid(start, tier) {
            return Err(AllocError::OutOfBounds {
                start,
                tier,
                cell_count: self.grid.cell_count(),
            });
        }
        if !self.overlap.is_range_free(start, tier) {
            return Err(AllocError::RegionOccupied { start, tier });
        }
        Ok(())
    }
}
