//! Incrementally maintained per-identity cell balances.

use indexmap::IndexMap;
use parcel_core::Identity;

/// Cells owned per identity, updated on every allocation and transfer.
///
/// Identities owning nothing have no entry and read as zero.
#[derive(Clone, Debug, Default)]
pub struct BalanceBook {
    balances: IndexMap<Identity, u64>,
}

impl BalanceBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self {
            balances: IndexMap::new(),
        }
    }

    /// Cells owned by `owner`.
    pub fn balance_of(&self, owner: Identity) -> u64 {
        self.balances.get(&owner).copied().unwrap_or(0)
    }

    /// Add `cells` to `owner`.
    pub fn credit(&mut self, owner: Identity, cells: u64) {
        *self.balances.entry(owner).or_insert(0) += cells;
    }

    /// Remove `cells` from `owner`, dropping the entry at zero.
    ///
    /// The registry only debits cells the owner holds; an underflow is an
    /// invariant breach and clamps to zero in release builds.
    pub fn debit(&mut self, owner: Identity, cells: u64) {
        let Some(balance) = self.balances.get_mut(&owner) else {
            debug_assert!(cells == 0, "debit of {cells} from empty balance {owner}");
            return;
        };
        debug_assert!(*balance >= cells, "balance underflow for {owner}");
        *balance = balance.saturating_sub(cells);
        if *balance == 0 {
            self.balances.swap_remove(&owner);
        }
    }

    /// Number of identities with a non-zero balance.
    pub fn holders(&self) -> usize {
        self.balances.len()
    }

    /// Sum of all balances.
    pub fn total(&self) -> u64 {
        self.balances.values().sum()
    }

    /// Non-zero balances in first-credit order.
    pub fn iter(&self) -> impl Iterator<Item = (Identity, u64)> + '_ {
        self.balances.iter().map(|(&id, &cells)| (id, cells))
    }
}
