//! Core types for the Parcel land allocator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace:
//! identities, size tiers, footprints, and the error enums surfaced by
//! the allocation and transfer paths.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod footprint;
pub mod id;
pub mod tier;

pub use error::{AllocError, TransferError};
pub use footprint::{AllocationHandle, Footprint};
pub use id::Identity;
pub use tier::Tier;
