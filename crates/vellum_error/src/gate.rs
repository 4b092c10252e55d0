//! Action gate error types.

/// Conditions under which the action gate refuses or abandons an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GateErrorKind {
    /// Not enough mana to pay for an invocation
    #[display("Not enough mana: {} available, {} required", available, required)]
    InsufficientResource {
        /// Mana currently available
        available: u32,
        /// Mana the gate requires before dispatch
        required: u32,
    },
    /// Another invocation is already in flight
    #[display("An invocation is already in flight")]
    Busy,
    /// The provider did not answer in time
    #[display("Invocation timed out after {} seconds", seconds)]
    Timeout {
        /// Configured timeout
        seconds: u64,
    },
    /// The lifecycle state machine rejected an event
    #[display("Invalid gate transition: {} on {}", event, from)]
    InvalidTransition {
        /// Phase the gate was in
        from: String,
        /// Event that was applied
        event: String,
    },
}

/// Gate error with source location tracking.
///
/// # Examples
///
/// ```
/// use vellum_error::{GateError, GateErrorKind};
///
/// let err = GateError::new(GateErrorKind::InsufficientResource { available: 3, required: 5 });
/// assert!(err.kind.to_string().contains("3 available"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gate Error: {} at line {} in {}", kind, line, file)]
pub struct GateError {
    /// The kind of error that occurred
    pub kind: GateErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GateError {
    /// Create a new GateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
