//! Configuration errors.

/// Settings that could not be loaded or do not make sense.
///
/// Covers the layered `vellum.toml` sources, the agent roster, and the log
/// filter and subscriber installed at startup. The message names the
/// offending key or file.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Offending key or source, and what is wrong with it
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Error raised at the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_error::ConfigError;
    ///
    /// let err = ConfigError::new("Duplicate agent id 'predicate-analyst'");
    /// assert!(err.to_string().contains("predicate-analyst"));
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
