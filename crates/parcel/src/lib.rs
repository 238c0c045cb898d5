//! Parcel: tiered land-parcel allocation on a space-filling curve.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Parcel sub-crates. For most users, adding `parcel` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use parcel::prelude::*;
//!
//! let alice = Identity(1);
//! let bob = Identity(2);
//!
//! // A 32×32 Hilbert-ordered grid.
//! let mut registry = LandRegistry::new(RegistryConfig::new(5)).unwrap();
//!
//! // A 4×4 parcel at index 0 and a single cell further along the curve.
//! registry.allocate(0, Tier::Medium, alice).unwrap();
//! registry.allocate(41, Tier::XSmall, alice).unwrap();
//! assert_eq!(registry.balance_of(alice), 17);
//!
//! // Anything inside an existing parcel is taken.
//! assert!(matches!(
//!     registry.allocate(0, Tier::Large, bob),
//!     Err(AllocError::RegionOccupied { .. })
//! ));
//!
//! // Approve a delegate, who then moves the parcel.
//! registry.approve(0, bob, alice).unwrap();
//! registry.transfer(0, alice, bob, bob).unwrap();
//! assert_eq!(registry.owner_of(7), Some(bob));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `parcel-core` | Identities, tiers, footprints, error types |
//! | [`curve`] | `parcel-curve` | Curve backends, grid geometry, alignment arithmetic |
//! | [`ledger`] | `parcel-ledger` | Allocation records and overlap markers |
//! | [`engine`] | `parcel-engine` | The registry, its service wrapper, config and metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`parcel-core`).
///
/// [`types::Identity`], [`types::Tier`], [`types::Footprint`], and the
/// [`types::AllocError`] and [`types::TransferError`] enums.
pub use parcel_core as types;

/// Space-filling curves and grid geometry (`parcel-curve`).
///
/// The [`curve::Curve`] trait with [`curve::Hilbert`] and
/// [`curve::ZOrder`] backends, [`curve::GridSpec`], and the alignment
/// helpers such as [`curve::anchor_tier`].
pub use parcel_curve as curve;

/// Allocation records and occupancy markers (`parcel-ledger`).
pub use parcel_ledger as ledger;

/// The allocation engine (`parcel-engine`).
///
/// [`engine::LandRegistry`] for single-threaded use,
/// [`engine::RegistryService`] for shared access from many threads.
pub use parcel_engine as engine;

/// Common imports for typical Parcel usage.
///
/// ```rust
/// use parcel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use parcel_core::{AllocationHandle, Footprint, Identity, Tier};

    // Errors
    pub use parcel_core::{AllocError, TransferError};
    pub use parcel_engine::{ConfigError, ServiceError};

    // Geometry
    pub use parcel_curve::{CurveKind, GridPoint, GridSpec};

    // Engine
    pub use parcel_engine::{
        LandRegistry, RegistryConfig, RegistryMetrics, RegistryService, ServiceConfig,
    };
}
