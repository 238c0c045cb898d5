//! Operation counters for a registry.
//!
//! [`RegistryMetrics`] is updated in place by every allocate, approve
//! and transfer call, successful or not. Counters are cumulative over the
//! registry's lifetime.

/// Cumulative operation counters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistryMetrics {
    /// Successful allocations.
    pub allocations: u64,
    /// Cells covered by successful allocations.
    pub cells_allocated: u64,
    /// Allocations rejected with `MisalignedAnchor`.
    pub misaligned_rejections: u64,
    /// Allocations rejected with `OutOfBounds`.
    pub out_of_bounds_rejections: u64,
    /// Allocations rejected with `RegionOccupied`.
    pub occupied_rejections: u64,
    /// Successful approvals.
    pub approvals: u64,
    /// Successful transfers.
    pub transfers: u64,
    /// Approvals and transfers rejected for any reason.
    pub transfer_rejections: u64,
}

impl RegistryMetrics {
    /// Allocation attempts rejected for any reason.
    pub fn allocation_rejections(&self) -> u64 {
        self.misaligned_rejections + self.out_of_bounds_rejections + self.occupied_rejections
    }
}
