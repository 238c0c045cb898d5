//! Error types for the allocation and transfer paths.
//!
//! Every variant is detected locally and reported synchronously. None
//! are transient: a rejected request leaves the registry untouched and
//! will be rejected again until the caller changes the request (or, for
//! [`AllocError::RegionOccupied`], until the occupying state changes).

use std::error::Error;
use std::fmt;

use crate::id::Identity;
use crate::tier::Tier;

/// Errors from `allocate()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested tier exceeds the natural alignment class of `start`.
    ///
    /// Resubmit at the canonical anchor for that tier.
    MisalignedAnchor {
        /// The requested start index.
        start: u64,
        /// The requested tier.
        tier: Tier,
        /// The coarsest tier `start` is aligned to.
        anchor: Tier,
    },
    /// The footprint extends past the end of the grid.
    OutOfBounds {
        /// The requested start index.
        start: u64,
        /// The requested tier.
        tier: Tier,
        /// Total number of cells in the grid.
        cell_count: u64,
    },
    /// The footprint intersects an existing parcel, either a finer one
    /// inside the range or a coarser one containing it.
    RegionOccupied {
        /// The requested start index.
        start: u64,
        /// The requested tier.
        tier: Tier,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MisalignedAnchor {
                start,
                tier,
                anchor,
            } => write!(
                f,
                "index {start} is aligned to {anchor}, cannot anchor {tier}"
            ),
            Self::OutOfBounds {
                start,
                tier,
                cell_count,
            } => write!(
                f,
                "{tier} at index {start} exceeds grid of {cell_count} cells"
            ),
            Self::RegionOccupied { start, tier } => {
                write!(f, "region for {tier} at index {start} is not free")
            }
        }
    }
}

impl Error for AllocError {}

/// Errors from `approve()`, `get_approved()` and `transfer()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferError {
    /// The index is not the exact canonical start of any parcel.
    ///
    /// Interior cells of a parcel also produce this error: mutations
    /// address parcels by anchor, never by containment.
    NoSuchAllocation {
        /// The addressed index.
        index: u64,
    },
    /// The identity acting as owner does not own the parcel.
    NotOwner {
        /// The parcel's start index.
        start: u64,
        /// The identity that claimed ownership.
        claimed: Identity,
        /// The parcel's actual owner.
        owner: Identity,
    },
    /// The caller is neither the owner nor the approved delegate.
    NotApproved {
        /// The parcel's start index.
        start: u64,
        /// The rejected caller.
        caller: Identity,
    },
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchAllocation { index } => {
                write!(f, "no parcel starts at index {index}")
            }
            Self::NotOwner {
                start,
                claimed,
                owner,
            } => write!(
                f,
                "parcel {start} is owned by {owner}, not {claimed}"
            ),
            Self::NotApproved { start, caller } => {
                write!(f, "{caller} is not approved for parcel {start}")
            }
        }
    }
}

impl Error for TransferError {}
