//! Session state shared between the gate and its owner.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use vellum_core::{ResourceState, UsageMetrics};

use crate::{GatePhase, SessionSnapshot};

#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) resources: ResourceState,
    pub(crate) metrics: UsageMetrics,
    pub(crate) phase: GatePhase,
}

/// Owning handle to one session's gauges, usage counters and gate phase.
///
/// Cloning shares the same session. Only the [`ActionGate`](crate::ActionGate)
/// mutates it; everyone else reads through [`snapshot`](Self::snapshot).
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    state: Arc<Mutex<SessionState>>,
}

impl SessionContext {
    /// Session starting from the given gauges and empty usage counters.
    pub fn new(resources: ResourceState) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                resources,
                ..SessionState::default()
            })),
        }
    }

    /// Point-in-time copy of the whole session.
    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot::new(state.resources, state.metrics.clone(), state.phase)
    }

    /// Current gauges.
    pub fn resources(&self) -> ResourceState {
        self.lock().resources
    }

    /// Current usage counters.
    pub fn metrics(&self) -> UsageMetrics {
        self.lock().metrics.clone()
    }

    /// Current gate phase.
    pub fn phase(&self) -> GatePhase {
        self.lock().phase
    }

    /// Whether an invocation is between dispatch and settlement.
    pub fn is_busy(&self) -> bool {
        self.phase().is_busy()
    }

    /// Runs `f` with exclusive access to the state.
    ///
    /// The lock is never held across an await point.
    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // Success handlers run outside the lock. Every closure under it writes
        // whole values, so a poisoned guard still holds a usable state.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
