//! Gate lifecycle state machine.

use serde::{Deserialize, Serialize};
use vellum_error::{GateError, GateErrorKind};

/// Where the gate is in the lifecycle of one invocation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GatePhase {
    /// No invocation in flight; dispatch allowed
    #[default]
    Idle,
    /// Waiting on the provider
    InFlight,
    /// Provider resolved; handlers and counters are being settled
    Settling,
}

/// Events that drive the gate lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum GateEvent {
    /// An invocation was handed to the provider
    Dispatch,
    /// The provider returned text
    ResolveSuccess,
    /// The provider failed or timed out
    ResolveFailure,
    /// Counters are settled and the busy state is released
    Settled,
}

/// Every legal transition as `(from, event, to)`.
pub const TRANSITIONS: [(GatePhase, GateEvent, GatePhase); 4] = [
    (GatePhase::Idle, GateEvent::Dispatch, GatePhase::InFlight),
    (GatePhase::InFlight, GateEvent::ResolveSuccess, GatePhase::Settling),
    (GatePhase::InFlight, GateEvent::ResolveFailure, GatePhase::Settling),
    (GatePhase::Settling, GateEvent::Settled, GatePhase::Idle),
];

impl GatePhase {
    /// Phase reached by applying `event`, per [`TRANSITIONS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_gate::{GateEvent, GatePhase};
    ///
    /// let phase = GatePhase::Idle.apply(GateEvent::Dispatch).unwrap();
    /// assert_eq!(phase, GatePhase::InFlight);
    /// assert!(GatePhase::Idle.apply(GateEvent::Settled).is_err());
    /// ```
    pub fn apply(self, event: GateEvent) -> Result<GatePhase, GateError> {
        TRANSITIONS
            .iter()
            .find(|(from, on, _)| *from == self && *on == event)
            .map(|(_, _, to)| *to)
            .ok_or_else(|| {
                GateError::new(GateErrorKind::InvalidTransition {
                    from: self.to_string(),
                    event: event.to_string(),
                })
            })
    }

    /// Whether an invocation currently owns the gate.
    pub fn is_busy(self) -> bool {
        self != GatePhase::Idle
    }
}
