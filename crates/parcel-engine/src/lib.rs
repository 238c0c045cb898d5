//! Allocation engine for Parcel grids.
//!
//! [`LandRegistry`] owns the complete registry state and exposes the
//! allocation, ownership resolution, approval and transfer operations.
//! [`RegistryService`] wraps a registry for concurrent use with a single
//! writer thread and shared readers.
//!
//! # Components
//!
//! - [`allocator`]: alignment, bounds and freeness checks, then commit
//! - [`resolver`]: which parcel covers a given cell
//! - [`transfer`]: single-use delegates and ownership change
//! - [`balance`]: per-identity cell totals
//! - [`metrics`]: operation counters
//! - [`service`]: single-writer shared access

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod allocator;
pub mod balance;
pub mod config;
pub mod metrics;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod transfer;

pub use balance::BalanceBook;
pub use config::{ConfigError, RegistryConfig, ServiceConfig};
pub use metrics::RegistryMetrics;
pub use registry::LandRegistry;
pub use service::{RegistryService, ServiceError};
