//! Test utilities for Parcel development.
//!
//! Provides named identities and registry constructors in [`fixtures`],
//! and [`assert_registry_invariants`], a brute-force cross-check of every
//! structural invariant a [`LandRegistry`] must hold after any sequence
//! of operations.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::BTreeMap;

use parcel_core::{Identity, Tier};
use parcel_curve::is_aligned;
use parcel_engine::LandRegistry;

pub use fixtures::{alice, bob, carol, registry, registry_with_curve, sample_registry};

/// Panic with a description of the first broken invariant in `registry`.
///
/// Checks that every parcel is aligned and inside the grid, that no two
/// footprints intersect, that the resolver and overlap markers agree with
/// the ledger at both ends of every footprint, that root counts per tier
/// match the ledger, and that the balance book equals the per-owner sum
/// of committed areas.
pub fn assert_registry_invariants(registry: &LandRegistry) {
    let grid = registry.grid();
    let mut by_start: Vec<_> = registry.records().collect();
    by_start.sort_by_key(|r| r.start);

    for rec in &by_start {
        assert!(
            is_aligned(rec.start, rec.tier),
            "parcel at {} is not aligned to {}",
            rec.start,
            rec.tier
        );
        assert!(
            grid.within_grid(rec.start, rec.tier),
            "parcel {} leaves the grid of {} cells",
            rec.footprint(),
            grid.cell_count()
        );
    }

    for pair in by_start.windows(2) {
        let (a, b) = (pair[0].footprint(), pair[1].footprint());
        assert!(!a.intersects(&b), "parcels {a} and {b} overlap");
    }

    for rec in &by_start {
        let fp = rec.footprint();
        for probe in [fp.start(), fp.end() - 1] {
            let resolved = registry
                .resolve(probe)
                .unwrap_or_else(|| panic!("cell {probe} of {fp} resolves to nothing"));
            assert_eq!(
                resolved.start, rec.start,
                "cell {probe} resolves to the parcel at {}, not {}",
                resolved.start, rec.start
            );
            assert_eq!(
                registry.overlap().covering_root(probe),
                Some((rec.tier, rec.start)),
                "overlap markers disagree with the ledger at cell {probe}"
            );
        }
    }

    for tier in Tier::ALL {
        let in_ledger = by_start.iter().filter(|r| r.tier == tier).count() as u64;
        assert_eq!(
            registry.overlap().roots_at(tier),
            in_ledger,
            "root markers for {tier} disagree with the ledger"
        );
    }

    let mut expected: BTreeMap<Identity, u64> = BTreeMap::new();
    for rec in &by_start {
        *expected.entry(rec.owner).or_insert(0) += rec.tier.area();
    }
    for (&owner, &cells) in &expected {
        assert_eq!(
            registry.balance_of(owner),
            cells,
            "balance of {owner} disagrees with its parcels"
        );
    }
    assert_eq!(
        registry.balances().holders(),
        expected.len(),
        "balance book holds identities that own no parcels"
    );
    assert_eq!(
        registry.total_allocated(),
        expected.values().sum::<u64>(),
        "total allocated disagrees with the ledger"
    );
}
