//! Strongly-typed caller and owner identities.

use std::fmt;

/// An opaque owner identity, supplied by the surrounding authorization
/// layer.
///
/// The engine never interprets the value; it only compares identities
/// for equality and uses them as balance keys. "No identity" is
/// expressed as `Option<Identity>::None`, never as a sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(pub u64);

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl From<u64> for Identity {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
