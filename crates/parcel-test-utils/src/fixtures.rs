//! Reusable identities and registries.
//!
//! - [`alice`], [`bob`], [`carol`]: three distinct owners
//! - [`registry`]: an empty Hilbert registry at a given level
//! - [`sample_registry`]: a level-6 registry holding one parcel per tier

use parcel_core::{Identity, Tier};
use parcel_curve::CurveKind;
use parcel_engine::{LandRegistry, RegistryConfig};

pub fn alice() -> Identity {
    Identity(0xA11CE)
}

pub fn bob() -> Identity {
    Identity(0xB0B)
}

pub fn carol() -> Identity {
    Identity(0xCA201)
}

/// Empty Hilbert-ordered registry of side `2^level`.
///
/// # Panics
///
/// If `level` is rejected by [`RegistryConfig::validate`].
pub fn registry(level: u32) -> LandRegistry {
    registry_with_curve(level, CurveKind::Hilbert)
}

/// Empty registry of side `2^level` ordered by `curve`.
pub fn registry_with_curve(level: u32, curve: CurveKind) -> LandRegistry {
    LandRegistry::new(RegistryConfig::new(level).with_curve(curve))
        .unwrap_or_else(|e| panic!("fixture registry at level {level}: {e}"))
}

/// A level-6 registry holding one parcel of every tier.
///
/// | start | tier | owner |
/// |-------|------|-------|
/// | 0     | 5    | alice |
/// | 1024  | 4    | bob   |
/// | 1280  | 3    | carol |
/// | 1344  | 2    | alice |
/// | 1360  | 1    | bob   |
/// | 1364  | 0    | carol |
pub fn sample_registry() -> LandRegistry {
    let mut r = registry(6);
    let plan = [
        (0, Tier::XXLarge, alice()),
        (1024, Tier::XLarge, bob()),
        (1280, Tier::Large, carol()),
        (1344, Tier::Medium, alice()),
        (1360, Tier::Small, bob()),
        (1364, Tier::XSmall, carol()),
    ];
    for (start, tier, owner) in plan {
        if let Err(e) = r.allocate(start, tier, owner) {
            panic!("fixture allocation at {start}: {e}");
        }
    }
    r
}
