//! Single-writer shared registry.
//!
//! [`RegistryService`] serializes every mutation through one writer
//! thread while letting any number of threads read concurrently.
//!
//! ```text
//! Caller threads                      Writer thread
//!     |                                   |
//!     |--allocate()/approve()/transfer()->| req_rx.recv()
//!     |   [req_tx: bounded(queue)]        | state.write()
//!     |                                   | registry.<op>()
//!     |<--result via per-request reply----| drop write guard
//!     |                                   |
//!     |--owner_of()/balance_of()/read()   |
//!     |   state.read() on caller thread   |
//! ```
//!
//! The write lock is held for exactly one request, so readers see either
//! all or none of each operation.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use parcel_core::{AllocError, AllocationHandle, Identity, Tier, TransferError};
use tracing::{debug, info};

use crate::config::{ConfigError, ServiceConfig};
use crate::registry::LandRegistry;

// ── Error types ──────────────────────────────────────────────────

/// Errors from a [`RegistryService`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ServiceError {
    /// The writer thread has shut down.
    Shutdown,
    /// A thread panicked while holding the registry lock.
    Poisoned,
    /// The allocation was rejected.
    Alloc(AllocError),
    /// The approval, lookup, or transfer was rejected.
    Transfer(TransferError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shutdown => write!(f, "registry writer has shut down"),
            Self::Poisoned => write!(f, "registry lock poisoned"),
            Self::Alloc(e) => write!(f, "allocation rejected: {e}"),
            Self::Transfer(e) => write!(f, "transfer rejected: {e}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Alloc(e) => Some(e),
            Self::Transfer(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AllocError> for ServiceError {
    fn from(e: AllocError) -> Self {
        Self::Alloc(e)
    }
}

impl From<TransferError> for ServiceError {
    fn from(e: TransferError) -> Self {
        Self::Transfer(e)
    }
}

// ── Requests ─────────────────────────────────────────────────────

/// A mutation submitted to the writer thread, paired with its reply
/// channel.
enum Request {
    Allocate {
        start: u64,
        tier: Tier,
        owner: Identity,
        uri: String,
        reply: Sender<Result<AllocationHandle, AllocError>>,
    },
    Approve {
        start: u64,
        delegate: Identity,
        caller: Identity,
        reply: Sender<Result<(), TransferError>>,
    },
    Transfer {
        start: u64,
        from: Identity,
        to: Identity,
        caller: Identity,
        reply: Sender<Result<(), TransferError>>,
    },
}

/// Writer loop: apply requests one at a time until every sender is gone.
fn writer_loop(state: Arc<RwLock<LandRegistry>>, req_rx: Receiver<Request>) {
    let mut applied = 0u64;
    for request in req_rx.iter() {
        let Ok(mut registry) = state.write() else {
            // Only this thread writes; a poisoned lock means a reader
            // panicked mid-read. Stop rather than write through it.
            break;
        };
        // Reply send failures mean the caller stopped waiting; the
        // operation has still been applied.
        match request {
            Request::Allocate {
                start,
                tier,
                owner,
                uri,
                reply,
            } => {
                let _ = reply.send(registry.allocate_with_uri(start, tier, owner, uri));
            }
            Request::Approve {
                start,
                delegate,
                caller,
                reply,
            } => {
                let _ = reply.send(registry.approve(start, delegate, caller));
            }
            Request::Transfer {
                start,
                from,
                to,
                caller,
                reply,
            } => {
                let _ = reply.send(registry.transfer(start, from, to, caller));
            }
        }
        applied += 1;
    }
    debug!(applied, "registry writer drained");
}

// ── RegistryService ──────────────────────────────────────────────

/// A [`LandRegistry`] shared across threads with a single writer.
///
/// Mutations block the calling thread until the writer has applied
/// them. Reads run on the calling thread under a shared lock.
///
/// # Examples
///
/// ```
/// use parcel_core::{Identity, Tier};
/// use parcel_engine::{LandRegistry, RegistryConfig, RegistryService, ServiceConfig};
///
/// let registry = LandRegistry::new(RegistryConfig::new(5)).unwrap();
/// let service = RegistryService::new(registry, ServiceConfig::default()).unwrap();
///
/// service.allocate(32, Tier::Small, Identity(1)).unwrap();
/// assert_eq!(service.owner_of(33).unwrap(), Some(Identity(1)));
///
/// let registry = service.shutdown().unwrap();
/// assert_eq!(registry.parcel_count(), 1);
/// ```
pub struct RegistryService {
    state: Arc<RwLock<LandRegistry>>,
    req_tx: Option<Sender<Request>>,
    writer: Option<JoinHandle<()>>,
}

impl RegistryService {
    /// Take ownership of `registry` and spawn the writer thread.
    pub fn new(registry: LandRegistry, config: ServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = Arc::new(RwLock::new(registry));
        let (req_tx, req_rx) = crossbeam_channel::bounded(config.queue_capacity);

        let writer_state = Arc::clone(&state);
        let writer = thread::Builder::new()
            .name("parcel-writer".into())
            .spawn(move || writer_loop(writer_state, req_rx))
            .expect("failed to spawn registry writer thread");

        info!(queue_capacity = config.queue_capacity, "registry service started");
        Ok(Self {
            state,
            req_tx: Some(req_tx),
            writer: Some(writer),
        })
    }

    /// Submit a request and wait for its reply.
    fn submit<T>(
        &self,
        build: impl FnOnce(Sender<T>) -> Request,
    ) -> Result<T, ServiceError> {
        let req_tx = self.req_tx.as_ref().ok_or(ServiceError::Shutdown)?;
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        req_tx
            .send(build(reply_tx))
            .map_err(|_| ServiceError::Shutdown)?;
        reply_rx.recv().map_err(|_| ServiceError::Shutdown)
    }

    /// See [`LandRegistry::allocate`].
    pub fn allocate(
        &self,
        start: u64,
        tier: Tier,
        owner: Identity,
    ) -> Result<AllocationHandle, ServiceError> {
        self.allocate_with_uri(start, tier, owner, String::new())
    }

    /// See [`LandRegistry::allocate_with_uri`].
    pub fn allocate_with_uri(
        &self,
        start: u64,
        tier: Tier,
        owner: Identity,
        uri: impl Into<String>,
    ) -> Result<AllocationHandle, ServiceError> {
        let uri = uri.into();
        Ok(self.submit(|reply| Request::Allocate {
            start,
            tier,
            owner,
            uri,
            reply,
        })??)
    }

    /// See [`LandRegistry::approve`].
    pub fn approve(
        &self,
        start: u64,
        delegate: Identity,
        caller: Identity,
    ) -> Result<(), ServiceError> {
        Ok(self.submit(|reply| Request::Approve {
            start,
            delegate,
            caller,
            reply,
        })??)
    }

    /// See [`LandRegistry::transfer`].
    pub fn transfer(
        &self,
        start: u64,
        from: Identity,
        to: Identity,
        caller: Identity,
    ) -> Result<(), ServiceError> {
        Ok(self.submit(|reply| Request::Transfer {
            start,
            from,
            to,
            caller,
            reply,
        })??)
    }

    /// Run `f` against a consistent view of the registry.
    pub fn read<R>(&self, f: impl FnOnce(&LandRegistry) -> R) -> Result<R, ServiceError> {
        let registry = self.state.read().map_err(|_| ServiceError::Poisoned)?;
        Ok(f(&registry))
    }

    /// See [`LandRegistry::owner_of`].
    pub fn owner_of(&self, index: u64) -> Result<Option<Identity>, ServiceError> {
        self.read(|r| r.owner_of(index))
    }

    /// See [`LandRegistry::balance_of`].
    pub fn balance_of(&self, owner: Identity) -> Result<u64, ServiceError> {
        self.read(|r| r.balance_of(owner))
    }

    /// See [`LandRegistry::get_approved`].
    pub fn get_approved(&self, start: u64) -> Result<Option<Identity>, ServiceError> {
        Ok(self.read(|r| r.get_approved(start))??)
    }

    /// Stop accepting requests, drain the queue, join the writer, and
    /// return the final registry.
    ///
    /// Fails with [`ServiceError::Poisoned`] if a thread panicked while
    /// holding the registry lock.
    pub fn shutdown(mut self) -> Result<LandRegistry, ServiceError> {
        self.stop_writer();
        let state = Arc::clone(&self.state);
        drop(self);
        let lock = Arc::try_unwrap(state).map_err(|_| ServiceError::Shutdown)?;
        lock.into_inner().map_err(|_| ServiceError::Poisoned)
    }

    fn stop_writer(&mut self) {
        // Dropping the last sender ends the writer's receive loop.
        self.req_tx.take();
        if let Some(handle) = self.writer.take() {
            let joined = handle.join().is_ok();
            info!(joined, "registry service stopped");
        }
    }
}

impl Drop for RegistryService {
    fn drop(&mut self) {
        self.stop_writer();
    }
}
