//! Single-slot asynchronous pick requests
//!
//! Resolving a click means a round trip to the render device, so the oracle
//! hands back a future instead of an answer. [`PickSlot`] keeps at most one of
//! those in flight: a click arriving while a request is pending is dropped, not
//! queued. Nothing is ever cancelled and nothing times out, so an oracle that
//! never answers leaves the slot busy for good.
//!
//! Each request is tagged with the board generation it was issued against.
//! Replacing the board bumps the generation, and a result that arrives for an
//! older generation is discarded instead of being resolved on the new board.

use crate::game::types::RawPick;
use bevy::prelude::*;
use bevy::tasks::{block_on, AsyncComputeTaskPool, Task, TaskPool};
use futures_lite::future;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, warn};

/// Future returned by a [`PickOracle`]; `None` means no object at that pixel
pub type PickFuture = Pin<Box<dyn Future<Output = Option<RawPick>> + Send + 'static>>;

/// "What did the user click on" - supplied by the rendering layer
pub trait PickOracle: Send + Sync + 'static {
    fn resolve(&self, x: u32, y: u32) -> PickFuture;
}

/// Resource wrapping the installed oracle
#[derive(Resource, Clone)]
pub struct PickOracleHandle(pub Arc<dyn PickOracle>);

impl PickOracleHandle {
    pub fn new(oracle: impl PickOracle) -> Self {
        Self(Arc::new(oracle))
    }
}

/// Progress of the outstanding request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickPoll {
    Idle,
    Pending,
    Resolved(Option<RawPick>),
    /// The request finished but was issued against a replaced board
    Outdated,
}

struct PendingPick {
    x: u32,
    y: u32,
    generation: u64,
    task: Task<Option<RawPick>>,
}

/// Resource holding the single outstanding pick request
#[derive(Resource, Default)]
pub struct PickSlot {
    pending: Option<PendingPick>,
    generation: u64,
    dropped: u64,
    resolved: u64,
    outdated: u64,
}

impl PickSlot {
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Clicks ignored because a request was already pending
    pub fn dropped_requests(&self) -> u64 {
        self.dropped
    }

    pub fn resolved_requests(&self) -> u64 {
        self.resolved
    }

    /// Results discarded because the board was replaced while they were pending
    pub fn outdated_requests(&self) -> u64 {
        self.outdated
    }

    /// Mark every request issued so far as belonging to a replaced board
    ///
    /// A pending request keeps the slot busy until it finishes; its result is
    /// then reported as [`PickPoll::Outdated`].
    pub fn invalidate(&mut self) {
        self.generation += 1;
        if let Some(pending) = &self.pending {
            debug!(
                "[PICK] Board replaced while ({}, {}) pending, result will be ignored",
                pending.x, pending.y
            );
        }
    }

    /// Start resolving `(x, y)` unless a request is already pending
    ///
    /// Returns `false` when the click was dropped.
    pub fn begin(&mut self, x: u32, y: u32, oracle: &dyn PickOracle) -> bool {
        if let Some(pending) = &self.pending {
            self.dropped += 1;
            debug!(
                "[PICK] Dropping click at ({}, {}): ({}, {}) still pending",
                x, y, pending.x, pending.y
            );
            return false;
        }

        let request = oracle.resolve(x, y);
        let task = AsyncComputeTaskPool::get_or_init(TaskPool::default).spawn(request);
        self.pending = Some(PendingPick {
            x,
            y,
            generation: self.generation,
            task,
        });
        debug!("[PICK] Resolving click at ({}, {})", x, y);
        true
    }

    /// Check the outstanding request without blocking
    ///
    /// A finished request frees the slot, whether its result is used or not.
    pub fn poll(&mut self) -> PickPoll {
        let Some(pending) = self.pending.as_mut() else {
            return PickPoll::Idle;
        };

        if !pending.task.is_finished() {
            return PickPoll::Pending;
        }

        match block_on(future::poll_once(&mut pending.task)) {
            Some(result) => {
                let issued = pending.generation;
                self.pending = None;
                if issued != self.generation {
                    self.outdated += 1;
                    debug!("[PICK] Discarding {:?} from a replaced board", result);
                    return PickPoll::Outdated;
                }
                self.resolved += 1;
                PickPoll::Resolved(result)
            }
            None => {
                warn!("[PICK] Task reported finished but result not available");
                PickPoll::Pending
            }
        }
    }
}
