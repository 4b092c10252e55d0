//! Provider HTTP client errors.

/// A provider client could not build its HTTP transport.
///
/// Only construction fails this way (TLS backend, connect timeout settings).
/// Failures of an individual call surface as
/// [`ProviderErrorKind::Transport`](crate::ProviderErrorKind::Transport).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Client Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// Why the client could not be built
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Error raised at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_error::HttpError;
    ///
    /// let err = HttpError::new("Failed to build HTTP client: TLS backend unavailable");
    /// assert!(err.message.contains("TLS"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
