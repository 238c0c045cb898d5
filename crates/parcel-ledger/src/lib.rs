//! Occupancy storage for Parcel allocations.
//!
//! Two structures, both owned by the registry and mutated only through
//! its allocation and transfer paths:
//!
//! ```text
//! OccupancyLedger   start -> AllocationRecord   (exact-key source of truth)
//! OverlapIndex      per-tier bitmaps            (O(T_MAX) freeness checks)
//! ├── occupied[k]   block holds a parcel of tier <= k
//! └── roots[k]      block is exactly a tier-k parcel
//! ```
//!
//! The ledger answers "is this exact index a parcel root"; the overlap
//! index answers "does anything already intersect this aligned range"
//! without scanning the ledger. Neither does containment resolution;
//! that lives in the engine's resolver.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bitmap;
pub mod ledger;
pub mod overlap;
pub mod record;

pub use bitmap::TierBitmap;
pub use ledger::OccupancyLedger;
pub use overlap::OverlapIndex;
pub use record::AllocationRecord;
