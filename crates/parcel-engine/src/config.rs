//! Registry and service configuration, validation, and error types.
//!
//! [`RegistryConfig`] is the builder-input for a [`LandRegistry`]:
//! [`validate()`](RegistryConfig::validate) turns it into a [`GridSpec`]
//! or reports what is wrong. [`ServiceConfig`] sizes the request channel
//! of a [`RegistryService`].
//!
//! [`LandRegistry`]: crate::LandRegistry
//! [`RegistryService`]: crate::RegistryService

use std::error::Error;
use std::fmt;

use parcel_curve::{CurveError, CurveKind, GridSpec};

// ── RegistryConfig ────────────────────────────────────────────────

/// Grid shape and linearization for a registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Grid level `L`: the grid is `2^L × 2^L` cells. Default: 10.
    pub level: u32,
    /// Space-filling curve ordering the cells. Default: Hilbert.
    pub curve: CurveKind,
}

impl RegistryConfig {
    /// Default grid level: 1024 × 1024 cells.
    pub const DEFAULT_LEVEL: u32 = 10;

    /// A Hilbert-ordered grid of side `2^level`.
    pub fn new(level: u32) -> Self {
        Self {
            level,
            curve: CurveKind::Hilbert,
        }
    }

    /// Replace the curve.
    pub fn with_curve(mut self, curve: CurveKind) -> Self {
        self.curve = curve;
        self
    }

    /// Check structural invariants and build the grid.
    pub fn validate(&self) -> Result<GridSpec, ConfigError> {
        GridSpec::with_curve(self.level, self.curve).map_err(ConfigError::Grid)
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LEVEL)
    }
}

// ── ServiceConfig ─────────────────────────────────────────────────

/// Configuration for [`RegistryService`](crate::RegistryService).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Capacity of the bounded request channel feeding the writer
    /// thread. Senders block while it is full. Default: 64.
    pub queue_capacity: usize,
}

impl ServiceConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::QueueCapacityZero);
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { queue_capacity: 64 }
    }
}

// ── ConfigError ───────────────────────────────────────────────────

/// Errors detected while validating configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid could not be built.
    Grid(CurveError),
    /// The service request queue has zero capacity.
    QueueCapacityZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::QueueCapacityZero => write!(f, "service queue capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::QueueCapacityZero => None,
        }
    }
}
