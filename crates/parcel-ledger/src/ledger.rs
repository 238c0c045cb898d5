//! Exact-key store of committed parcels.

use indexmap::IndexMap;
use parcel_core::Identity;

use crate::record::AllocationRecord;

/// Sparse mapping from canonical start index to [`AllocationRecord`].
///
/// Lookups are exact-key only: asking for an interior cell of a parcel
/// returns `None`. Iteration follows commit order.
#[derive(Clone, Debug, Default)]
pub struct OccupancyLedger {
    records: IndexMap<u64, AllocationRecord>,
}

impl OccupancyLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }

    /// The record rooted at exactly `start`.
    pub fn get(&self, start: u64) -> Option<&AllocationRecord> {
        self.records.get(&start)
    }

    /// Whether a parcel is rooted at exactly `start`.
    pub fn contains(&self, start: u64) -> bool {
        self.records.contains_key(&start)
    }

    /// Insert a freshly allocated record.
    ///
    /// Callers check freeness first; a second record at the same start is
    /// an invariant breach. In release builds the existing record is kept
    /// and `false` is returned.
    pub fn put(&mut self, record: AllocationRecord) -> bool {
        debug_assert!(
            !self.records.contains_key(&record.start),
            "duplicate ledger key {}",
            record.start
        );
        match self.records.entry(record.start) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    /// Change the owner of an existing record and clear its delegate.
    ///
    /// Returns the previous owner, or `None` if no record is rooted at
    /// `start`.
    pub fn set_owner(&mut self, start: u64, owner: Identity) -> Option<Identity> {
        let record = self.records.get_mut(&start)?;
        let previous = std::mem::replace(&mut record.owner, owner);
        record.approved = None;
        Some(previous)
    }

    /// Set or clear the delegate of an existing record.
    ///
    /// Returns `false` if no record is rooted at `start`.
    pub fn set_approved(&mut self, start: u64, delegate: Option<Identity>) -> bool {
        match self.records.get_mut(&start) {
            Some(record) => {
                record.approved = delegate;
                true
            }
            None => false,
        }
    }

    /// Number of committed parcels.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no parcel has been committed.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in commit order.
    pub fn iter(&self) -> impl Iterator<Item = &AllocationRecord> {
        self.records.values()
    }
}
