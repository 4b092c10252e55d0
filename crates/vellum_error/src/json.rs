//! Preferences document errors.

/// The preferences file could not be parsed or serialized.
///
/// Raised by the preference store when `preferences.json` holds malformed
/// JSON or an unexpected shape, and when the current values fail to encode.
/// Provider response bodies are reported as provider errors instead.
///
/// # Examples
///
/// ```
/// use vellum_error::JsonError;
///
/// let err = JsonError::new("Failed to parse preferences /tmp/preferences.json: EOF");
/// assert!(err.to_string().starts_with("Preferences JSON Error"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Preferences JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What failed, including the preferences path when known
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Error raised at the caller's location.
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
