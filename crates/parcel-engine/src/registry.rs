//! The [`LandRegistry`] state container and its exact-key queries.
//!
//! Operations are split by component:
//!
//! - allocation in [`allocator`](crate::allocator)
//! - containment resolution in [`resolver`](crate::resolver)
//! - approval and ownership change in [`transfer`](crate::transfer)
//!
//! This module holds the state they share and the read-only queries that
//! address a parcel by its exact canonical start.

use parcel_core::{Identity, TransferError};
use parcel_curve::GridSpec;
use parcel_ledger::{AllocationRecord, OccupancyLedger, OverlapIndex};

use crate::balance::BalanceBook;
use crate::config::{ConfigError, RegistryConfig};
use crate::metrics::RegistryMetrics;

/// Exclusive allocator of square parcels on a curve-indexed grid.
///
/// Mutating operations take `&mut self` and are all-or-nothing: every
/// precondition is checked before any state changes. For shared access
/// from several threads, wrap the registry in a
/// [`RegistryService`](crate::RegistryService).
///
/// # Examples
///
/// ```
/// use parcel_core::{Identity, Tier};
/// use parcel_engine::{LandRegistry, RegistryConfig};
///
/// let alice = Identity(1);
/// let bob = Identity(2);
/// let mut registry = LandRegistry::new(RegistryConfig::new(5)).unwrap();
///
/// registry.allocate(0, Tier::Medium, alice).unwrap();
/// assert_eq!(registry.owner_of(5), Some(alice));
///
/// registry.transfer(0, alice, bob, alice).unwrap();
/// assert_eq!(registry.owner_of(5), Some(bob));
/// assert_eq!(registry.balance_of(alice), 0);
/// assert_eq!(registry.balance_of(bob), 16);
/// ```
#[derive(Clone, Debug)]
pub struct LandRegistry {
    pub(crate) grid: GridSpec,
    pub(crate) ledger: OccupancyLedger,
    pub(crate) overlap: OverlapIndex,
    pub(crate) balances: BalanceBook,
    pub(crate) metrics: RegistryMetrics,
}

impl LandRegistry {
    /// Validate `config` and build an empty registry.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        let grid = config.validate()?;
        Ok(Self::with_grid(grid))
    }

    /// Build an empty registry over an already-validated grid.
    pub fn with_grid(grid: GridSpec) -> Self {
        Self {
            overlap: OverlapIndex::new(&grid),
            grid,
            ledger: OccupancyLedger::new(),
            balances: BalanceBook::new(),
            metrics: RegistryMetrics::default(),
        }
    }

    /// The grid this registry allocates on.
    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    /// The record rooted at exactly `start`.
    ///
    /// Interior cells return `None`; use
    /// [`resolve`](LandRegistry::resolve) for containment.
    pub fn record(&self, start: u64) -> Option<&AllocationRecord> {
        self.ledger.get(start)
    }

    /// Cells owned by `owner`.
    pub fn balance_of(&self, owner: Identity) -> u64 {
        self.balances.balance_of(owner)
    }

    /// Metadata string stored with the parcel rooted at `start`.
    pub fn uri_of(&self, start: u64) -> Result<&str, TransferError> {
        self.ledger
            .get(start)
            .map(|r| r.uri.as_str())
            .ok_or(TransferError::NoSuchAllocation { index: start })
    }

    /// All parcels in commit order.
    pub fn records(&self) -> impl Iterator<Item = &AllocationRecord> {
        self.ledger.iter()
    }

    /// Number of committed parcels.
    pub fn parcel_count(&self) -> usize {
        self.ledger.len()
    }

    /// Cells covered by all committed parcels.
    pub fn total_allocated(&self) -> u64 {
        self.balances.total()
    }

    /// Balance book, for diagnostics.
    pub fn balances(&self) -> &BalanceBook {
        &self.balances
    }

    /// Overlap markers, for diagnostics.
    pub fn overlap(&self) -> &OverlapIndex {
        &self.overlap
    }

    /// Cumulative operation counters.
    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}

impl Default for LandRegistry {
    fn default() -> Self {
        Self::with_grid(GridSpec::default())
    }
}
