//! Benchmark workloads for the Parcel allocator.
//!
//! Provides deterministic request streams and pre-filled registries for
//! benches and profiling:
//!
//! - [`mixed_requests`]: aligned requests with a tier mix skewed to small
//!   parcels
//! - [`filled_registry`]: a registry after replaying a request stream
//! - [`probe_indices`]: scattered cells for resolver lookups

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use parcel_core::{Identity, Tier};
use parcel_curve::GridSpec;
use parcel_engine::LandRegistry;

/// One allocation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Request {
    /// Anchor index, aligned to `tier`.
    pub start: u64,
    /// Requested size class.
    pub tier: Tier,
    /// Requesting owner.
    pub owner: Identity,
}

/// Weighted tier pick: half XSmall, then halving per tier.
fn tier_for(roll: u64) -> Tier {
    match roll % 64 {
        0..=31 => Tier::XSmall,
        32..=47 => Tier::Small,
        48..=55 => Tier::Medium,
        56..=59 => Tier::Large,
        60..=61 => Tier::XLarge,
        _ => Tier::XXLarge,
    }
}

/// Generate `n` aligned requests on `grid`, deterministic in `seed`.
///
/// Starts are snapped down to the tier's alignment, so every request is
/// well-formed; a fraction will still collide with earlier ones.
pub fn mixed_requests(grid: &GridSpec, n: usize, seed: u64) -> Vec<Request> {
    let cells = grid.cell_count();
    (0..n as u64)
        .map(|i| {
            let h = (i ^ seed).wrapping_mul(6364136223846793007);
            let mut tier = tier_for(h >> 58);
            while tier.area() > cells {
                tier = Tier::from_level(tier as u8 - 1).unwrap_or(Tier::XSmall);
            }
            let raw = (i.wrapping_add(seed)).wrapping_mul(1442695040888963407) % cells;
            let start = raw & !(tier.area() - 1);
            let owner = Identity(h % 16);
            Request { start, tier, owner }
        })
        .collect()
}

/// Replay `requests` into a fresh registry over `grid`, ignoring
/// rejections.
pub fn filled_registry(grid: GridSpec, requests: &[Request]) -> LandRegistry {
    let mut registry = LandRegistry::with_grid(grid);
    for r in requests {
        let _ = registry.allocate(r.start, r.tier, r.owner);
    }
    registry
}

/// `n` scattered cell indices on `grid`, deterministic in `seed`.
pub fn probe_indices(grid: &GridSpec, n: usize, seed: u64) -> Vec<u64> {
    let cells = grid.cell_count();
    (0..n as u64)
        .map(|i| (i.wrapping_add(seed)).wrapping_mul(2862933555777941757) % cells)
        .collect()
}
