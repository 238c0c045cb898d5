//! Per-tier occupancy markers for constant-time freeness checks.
//!
//! Two bitmap families, one bitmap per tier, each indexed by aligned
//! block number (`index >> 2k`):
//!
//! - `occupied[k]`: the tier-`k` block contains a parcel of tier `<= k`.
//! - `roots[k]`: a tier-`k` parcel is rooted at the start of the block.
//!
//! Aligned blocks either nest or are disjoint, so an existing parcel `P`
//! intersects a candidate `C` in exactly one of two shapes: `P` is no
//! coarser than `C` and sits inside it (caught by `occupied[tier(C)]`), or
//! `P` is strictly coarser and contains `C` (caught by `roots[tier(P)]` at
//! `C`'s ancestor block). Both checks are one bit read per tier.

use parcel_core::Tier;
use parcel_curve::{ancestor_anchor, block_of, GridSpec};

use crate::bitmap::TierBitmap;

/// Auxiliary index over committed footprints.
#[derive(Clone, Debug)]
pub struct OverlapIndex {
    occupied: Vec<TierBitmap>,
    roots: Vec<TierBitmap>,
}

impl OverlapIndex {
    /// Empty markers sized for `grid`.
    pub fn new(grid: &GridSpec) -> Self {
        let sized = |tier: Tier| TierBitmap::new(grid.block_count(tier));
        Self {
            occupied: Tier::ALL.iter().map(|&t| sized(t)).collect(),
            roots: Tier::ALL.iter().map(|&t| sized(t)).collect(),
        }
    }

    /// Whether the aligned range `[start, start + 4^tier)` is untouched.
    ///
    /// True iff no committed parcel lies inside the range and no coarser
    /// committed parcel contains `start`. The caller guarantees `start`
    /// is aligned to `tier` and the footprint is inside the grid.
    pub fn is_range_free(&self, start: u64, tier: Tier) -> bool {
        debug_assert_eq!(ancestor_anchor(start, tier), start, "unaligned {start} for {tier}");
        if self.occupied[tier as usize].get(block_of(start, tier)) {
            return false;
        }
        Tier::ALL[tier as usize + 1..]
            .iter()
            .all(|&coarser| !self.roots[coarser as usize].get(block_of(start, coarser)))
    }

    /// Record a committed parcel in every marker that must see it.
    pub fn mark_occupied(&mut self, start: u64, tier: Tier) {
        self.roots[tier as usize].set(block_of(start, tier));
        for &k in &Tier::ALL[tier as usize..] {
            self.occupied[k as usize].set(block_of(start, k));
        }
    }

    /// The parcel root covering `index`, as `(tier, anchor)`, finest first.
    ///
    /// Marker-level answer only; the ledger remains the source of truth
    /// for the record itself.
    pub fn covering_root(&self, index: u64) -> Option<(Tier, u64)> {
        Tier::ALL
            .iter()
            .find(|&&k| self.roots[k as usize].get(block_of(index, k)))
            .map(|&k| (k, ancestor_anchor(index, k)))
    }

    /// Number of tier-`tier` blocks holding at least one parcel of that
    /// tier or finer.
    pub fn occupied_blocks(&self, tier: Tier) -> u64 {
        self.occupied[tier as usize].count_ones()
    }

    /// Number of parcels rooted at `tier`.
    pub fn roots_at(&self, tier: Tier) -> u64 {
        self.roots[tier as usize].count_ones()
    }

    /// Heap bytes held by all markers.
    pub fn memory_bytes(&self) -> usize {
        self.occupied
            .iter()
            .chain(self.roots.iter())
            .map(TierBitmap::memory_bytes)
            .sum()
    }
}
