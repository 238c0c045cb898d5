//! Space-filling curve indexing for Parcel grids.
//!
//! A grid of `2^L × 2^L` cells is linearized by a [`Curve`] into curve
//! indices `[0, 4^L)`. Every backend in this crate satisfies the
//! locality invariant the allocator relies on: for any tier `k` and any
//! multiple `m` of `4^k`, the indices `[m, m + 4^k)` cover exactly one
//! axis-aligned `2^k × 2^k` square. Alignment is therefore pure
//! arithmetic on the index, independent of which curve is in use.
//!
//! # Backends
//!
//! - [`Hilbert`]: Hilbert curve (default)
//! - [`ZOrder`]: Morton / Z-order curve
//!
//! # Alignment
//!
//! [`anchor_tier`], [`range_of`], [`ancestor_anchor`] and [`ancestors`]
//! are the shared arithmetic of the overlap index and the resolver.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod align;
pub mod curve;
pub mod error;
pub mod grid;
pub mod hilbert;
pub mod zorder;

#[cfg(test)]
pub(crate) mod compliance;

pub use align::{
    ancestor_anchor, ancestors, anchor_tier, block_of, is_aligned, range_of, Ancestors,
};
pub use curve::{Curve, CurveKind};
pub use error::CurveError;
pub use grid::{CellRect, GridPoint, GridSpec};
pub use hilbert::Hilbert;
pub use zorder::ZOrder;
