//! Provider (text-generation endpoint) error types.

/// Provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProviderErrorKind {
    /// Neither an explicit key nor an environment key is available
    #[display("No API key available: supply one or set GEMINI_API_KEY")]
    MissingCredential,
    /// Model belongs to a provider family this code path cannot call
    #[display("Model '{}' is not supported by this provider", _0)]
    UnsupportedModel(String),
    /// Request parameters are out of range
    #[display("Invalid request: {}", _0)]
    InvalidRequest(String),
    /// Endpoint answered with a non-success status
    #[display("{}", message)]
    Endpoint {
        /// HTTP status code
        status_code: u16,
        /// Message reported by the endpoint, or a generic fallback
        message: String,
    },
    /// Request never produced an HTTP response
    #[display("{}", _0)]
    Transport(String),
    /// Provider is declared but has no client implementation
    #[display("Provider '{}' is not implemented yet", _0)]
    NotImplemented(String),
}

impl ProviderErrorKind {
    /// Short label used when logging failures.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderErrorKind::MissingCredential => "missing_credential",
            ProviderErrorKind::UnsupportedModel(_) => "unsupported_model",
            ProviderErrorKind::InvalidRequest(_) => "invalid_request",
            ProviderErrorKind::Endpoint { .. } => "endpoint",
            ProviderErrorKind::Transport(_) => "transport",
            ProviderErrorKind::NotImplemented(_) => "not_implemented",
        }
    }
}

/// Provider error with source location tracking.
///
/// # Examples
///
/// ```
/// use vellum_error::{ProviderError, ProviderErrorKind};
///
/// let err = ProviderError::new(ProviderErrorKind::Endpoint {
///     status_code: 400,
///     message: "API key not valid".to_string(),
/// });
/// assert_eq!(err.kind.to_string(), "API key not valid");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Provider Error: {} at line {} in {}", kind, line, file)]
pub struct ProviderError {
    /// The kind of error that occurred
    pub kind: ProviderErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProviderError {
    /// Create a new ProviderError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProviderErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
