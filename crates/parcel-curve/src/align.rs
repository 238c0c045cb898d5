//! Tier alignment arithmetic on curve indices.
//!
//! Under the locality invariant, an index `m` anchors a tier-`k` block
//! iff `m mod 4^k == 0`, and the tier-`k` block containing any index `i`
//! starts at `floor(i / 4^k) * 4^k`. Everything here is a pure function
//! of the index; no grid or curve is consulted.

use parcel_core::{Footprint, Tier};
use smallvec::SmallVec;

/// The tier-anchors containing an index, finest first.
///
/// Always holds [`Tier::COUNT`] entries, so it never spills to the heap.
pub type Ancestors = SmallVec<[(Tier, u64); Tier::COUNT]>;

/// Natural alignment class of `index`: the coarsest tier it can anchor.
///
/// Index 0 is aligned to every tier and returns [`Tier::MAX`].
///
/// # Examples
///
/// ```
/// use parcel_core::Tier;
/// use parcel_curve::anchor_tier;
///
/// assert_eq!(anchor_tier(34), Tier::XSmall);
/// assert_eq!(anchor_tier(32), Tier::Small);
/// assert_eq!(anchor_tier(1024), Tier::XXLarge);
/// assert_eq!(anchor_tier(8192), Tier::XXLarge);
/// ```
pub fn anchor_tier(index: u64) -> Tier {
    if index == 0 {
        return Tier::MAX;
    }
    let level = (index.trailing_zeros() / 2).min(Tier::MAX.level());
    // `level <= Tier::MAX.level()`, so the lookup always succeeds.
    Tier::from_level(level as u8).unwrap_or(Tier::MAX)
}

/// Whether `index` is a valid anchor for `tier`.
pub fn is_aligned(index: u64, tier: Tier) -> bool {
    index & (tier.area() - 1) == 0
}

/// Curve range `[start, start + 4^tier)` occupied by a tier block.
pub fn range_of(start: u64, tier: Tier) -> Footprint {
    Footprint::of(start, tier)
}

/// Start of the tier-`tier` block containing `index`.
pub fn ancestor_anchor(index: u64, tier: Tier) -> u64 {
    index & !(tier.area() - 1)
}

/// Aligned block number of `index` at `tier` (`index / 4^tier`).
pub fn block_of(index: u64, tier: Tier) -> u64 {
    index >> (2 * tier.level())
}

/// Every tier-anchor containing `index`, from [`Tier::XSmall`] (the
/// index itself) up to [`Tier::MAX`].
pub fn ancestors(index: u64) -> Ancestors {
    Tier::ALL
        .iter()
        .map(|&tier| (tier, ancestor_anchor(index, tier)))
        .collect()
}
