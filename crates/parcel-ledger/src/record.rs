//! The per-parcel allocation record.

use parcel_core::{AllocationHandle, Footprint, Identity, Tier};

/// A committed parcel.
///
/// Stored only at its canonical start index; interior cells have no
/// record of their own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationRecord {
    /// Canonical start index.
    pub start: u64,
    /// Size tier.
    pub tier: Tier,
    /// Current owner.
    pub owner: Identity,
    /// Single delegate allowed to transfer on the owner's behalf.
    ///
    /// Cleared on every ownership change.
    pub approved: Option<Identity>,
    /// Opaque metadata supplied at allocation time.
    pub uri: String,
}

impl AllocationRecord {
    /// A fresh record with no delegate.
    pub fn new(start: u64, tier: Tier, owner: Identity, uri: impl Into<String>) -> Self {
        Self {
            start,
            tier,
            owner,
            approved: None,
            uri: uri.into(),
        }
    }

    /// The curve range this parcel occupies.
    pub fn footprint(&self) -> Footprint {
        Footprint::of(self.start, self.tier)
    }

    /// Handle identifying this parcel.
    pub fn handle(&self) -> AllocationHandle {
        AllocationHandle::new(self.start, self.tier)
    }

    /// Whether `caller` may move this parcel: the owner or the delegate.
    pub fn may_transfer(&self, caller: Identity) -> bool {
        caller == self.owner || self.approved == Some(caller)
    }
}
