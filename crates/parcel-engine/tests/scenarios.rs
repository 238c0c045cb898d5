//! Integration test: allocation, ownership, approval and transfer
//! scenarios on small grids.
//!
//! Level 5 (32 × 32, 1024 cells) is the default grid here; level 6 is
//! used where an XXLarge parcel must sit away from index 0, and level 7
//! for parcels anchored at 8192.

use parcel_core::{AllocError, Identity, Tier, TransferError};
use parcel_engine::LandRegistry;
use parcel_test_utils::{alice, assert_registry_invariants, bob, carol, registry};

fn small() -> LandRegistry {
    registry(5)
}

// ── Allocation ───────────────────────────────────────────────────────

#[test]
fn single_cell_parcel_owns_only_itself() {
    let mut r = small();
    r.allocate(34, Tier::XSmall, alice()).unwrap();
    assert_eq!(r.owner_of(34), Some(alice()));
    for index in (0..1024).filter(|&i| i != 34) {
        assert_eq!(r.owner_of(index), None, "cell {index}");
    }
    assert_registry_invariants(&r);
}

#[test]
fn small_parcel_covers_four_cells() {
    let mut r = small();
    r.allocate(32, Tier::Small, alice()).unwrap();
    for index in 32..36 {
        assert_eq!(r.owner_of(index), Some(alice()));
    }
    assert_eq!(r.owner_of(36), None);
    assert_eq!(r.owner_of(31), None);
}

#[test]
fn coarse_parcel_over_existing_cell_is_occupied() {
    let mut r = small();
    r.allocate(43, Tier::XSmall, alice()).unwrap();
    assert_eq!(
        r.allocate(0, Tier::Large, alice()),
        Err(AllocError::RegionOccupied {
            start: 0,
            tier: Tier::Large,
        })
    );
    assert_eq!(r.balance_of(alice()), 1);
}

#[test]
fn cell_inside_existing_small_parcel_is_occupied() {
    let mut r = small();
    r.allocate(40, Tier::Small, alice()).unwrap();
    assert!(matches!(
        r.allocate(42, Tier::XSmall, bob()),
        Err(AllocError::RegionOccupied { start: 42, .. })
    ));
}

#[test]
fn same_start_twice_is_occupied() {
    let mut r = registry(7);
    r.allocate(8192, Tier::XSmall, alice()).unwrap();
    assert!(matches!(
        r.allocate(8192, Tier::XSmall, alice()),
        Err(AllocError::RegionOccupied { .. })
    ));
    assert!(matches!(
        r.allocate(8192, Tier::XSmall, bob()),
        Err(AllocError::RegionOccupied { .. })
    ));
    assert_eq!(r.parcel_count(), 1);
}

#[test]
fn misaligned_small_parcel() {
    let mut r = small();
    assert_eq!(
        r.allocate(34, Tier::Small, alice()),
        Err(AllocError::MisalignedAnchor {
            start: 34,
            tier: Tier::Small,
            anchor: Tier::XSmall,
        })
    );
    assert_eq!(r.owner_of(34), None);
}

// ── Balances ─────────────────────────────────────────────────────────

#[test]
fn two_single_cells_balance_two() {
    let mut r = small();
    r.allocate(32, Tier::XSmall, alice()).unwrap();
    r.allocate(34, Tier::XSmall, alice()).unwrap();
    assert_eq!(r.balance_of(alice()), 2);
}

#[test]
fn medium_plus_cell_balance_seventeen() {
    let mut r = small();
    r.allocate(0, Tier::Medium, alice()).unwrap();
    r.allocate(41, Tier::XSmall, alice()).unwrap();
    assert_eq!(r.balance_of(alice()), 17);
}

#[test]
fn medium_plus_small_balance_twenty() {
    let mut r = small();
    r.allocate(0, Tier::Medium, alice()).unwrap();
    r.allocate(32, Tier::Small, alice()).unwrap();
    assert_eq!(r.balance_of(alice()), 20);
}

#[test]
fn xxlarge_balance_is_full_area() {
    let mut r = registry(7);
    r.allocate(8192, Tier::XXLarge, alice()).unwrap();
    assert_eq!(r.balance_of(alice()), 1024);
}

#[test]
fn xlarge_plus_cell_balance() {
    let mut r = registry(7);
    r.allocate(8192, Tier::XLarge, alice()).unwrap();
    r.allocate(9215, Tier::XSmall, alice()).unwrap();
    assert_eq!(r.balance_of(alice()), 257);
    assert_registry_invariants(&r);
}

#[test]
fn four_adjacent_cells_balance_four() {
    let mut r = small();
    for index in 32..=35 {
        r.allocate(index, Tier::XSmall, alice()).unwrap();
    }
    assert_eq!(r.balance_of(alice()), 4);
    // The four cells fill the Small block at 32 without forming a parcel.
    assert!(matches!(
        r.allocate(32, Tier::Small, bob()),
        Err(AllocError::RegionOccupied { .. })
    ));
}

// ── Transfer ─────────────────────────────────────────────────────────

#[test]
fn owner_transfers_medium_parcel() {
    let mut r = small();
    r.allocate(0, Tier::Medium, alice()).unwrap();
    r.transfer(0, alice(), bob(), alice()).unwrap();
    assert_eq!(r.owner_of(5), Some(bob()));
    assert_eq!(r.balance_of(alice()), 0);
    assert_eq!(r.balance_of(bob()), 16);
    assert_registry_invariants(&r);
}

#[test]
fn interior_index_rejected_for_mutation() {
    let mut r = registry(6);
    r.allocate(1024, Tier::XXLarge, alice()).unwrap();
    assert_eq!(
        r.approve(1000, bob(), alice()),
        Err(TransferError::NoSuchAllocation { index: 1000 })
    );
    assert_eq!(
        r.transfer(1030, alice(), bob(), alice()),
        Err(TransferError::NoSuchAllocation { index: 1030 })
    );
    assert_eq!(r.owner_of(1030), Some(alice()));
}

#[test]
fn approve_on_interior_of_root_parcel() {
    let mut r = registry(6);
    r.allocate(0, Tier::XXLarge, alice()).unwrap();
    assert_eq!(
        r.approve(1, bob(), alice()),
        Err(TransferError::NoSuchAllocation { index: 1 })
    );
}

#[test]
fn delegate_transfers_single_cell() {
    let mut r = small();
    r.allocate(34, Tier::XSmall, alice()).unwrap();
    r.approve(34, bob(), alice()).unwrap();
    assert_eq!(r.get_approved(34), Ok(Some(bob())));
    r.transfer(34, alice(), carol(), bob()).unwrap();
    assert_eq!(r.owner_of(34), Some(carol()));
    assert_eq!(r.get_approved(34), Ok(None));
    assert_eq!(r.balance_of(alice()), 0);
    assert_eq!(r.balance_of(carol()), 1);
}

#[test]
fn delegate_transfers_xxlarge_parcel() {
    let mut r = registry(6);
    r.allocate(1024, Tier::XXLarge, alice()).unwrap();
    r.approve(1024, bob(), alice()).unwrap();
    r.transfer(1024, alice(), bob(), bob()).unwrap();
    assert_eq!(r.owner_of(2047), Some(bob()));
    assert_eq!(r.balance_of(bob()), 1024);
    assert_eq!(r.get_approved(1024), Ok(None));
    assert_registry_invariants(&r);
}

#[test]
fn non_delegate_cannot_transfer() {
    let mut r = small();
    r.allocate(0, Tier::Medium, alice()).unwrap();
    r.approve(0, bob(), alice()).unwrap();
    assert_eq!(
        r.transfer(0, alice(), carol(), carol()),
        Err(TransferError::NotApproved {
            start: 0,
            caller: carol(),
        })
    );
    assert_eq!(r.owner_of(0), Some(alice()));
}

#[test]
fn uri_survives_transfer() {
    let mut r = small();
    r.allocate_with_uri(16, Tier::Medium, alice(), "https://example.org/16")
        .unwrap();
    r.transfer(16, alice(), Identity(99), alice()).unwrap();
    assert_eq!(r.uri_of(16), Ok("https://example.org/16"));
}

// ── Mixed workload ──────────────────────────────────────────────────

#[test]
fn every_tier_side_by_side() {
    let r = parcel_test_utils::sample_registry();
    assert_eq!(r.balance_of(alice()), 1024 + 16);
    assert_eq!(r.balance_of(bob()), 256 + 4);
    assert_eq!(r.balance_of(carol()), 64 + 1);
    assert_eq!(r.owner_of(1365), None);
    let starts: Vec<u64> = r.records().map(|rec| rec.start).collect();
    assert_eq!(starts, vec![0, 1024, 1280, 1344, 1360, 1364]);
    assert_registry_invariants(&r);
}
