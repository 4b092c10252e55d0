//! Top-level error wrapper types.

use crate::{ConfigError, GateError, HttpError, JsonError, ProviderError, StorageError};

/// Every error the Vellum crates can produce.
///
/// # Examples
///
/// ```
/// use vellum_error::{VellumError, HttpError};
///
/// let err: VellumError = HttpError::new("Failed to build HTTP client").into();
/// assert!(format!("{}", err).contains("HTTP Client Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VellumErrorKind {
    /// Provider HTTP client setup error
    #[from(HttpError)]
    Http(HttpError),
    /// Preferences document error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Preference storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Text-generation provider error
    #[from(ProviderError)]
    Provider(ProviderError),
    /// Action gate error
    #[from(GateError)]
    Gate(GateError),
}

/// Vellum error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vellum Error: {}", _0)]
pub struct VellumError(Box<VellumErrorKind>);

impl VellumError {
    /// Create a new error from a kind.
    pub fn new(kind: VellumErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VellumErrorKind {
        &self.0
    }

    /// Message suitable for a blocking notification, without source locations.
    pub fn user_message(&self) -> String {
        match self.kind() {
            VellumErrorKind::Provider(e) => e.kind.to_string(),
            VellumErrorKind::Gate(e) => e.kind.to_string(),
            VellumErrorKind::Storage(e) => e.kind.to_string(),
            VellumErrorKind::Config(e) => e.message.clone(),
            VellumErrorKind::Http(e) => e.message.clone(),
            VellumErrorKind::Json(e) => e.message.clone(),
        }
    }
}

impl<T> From<T> for VellumError
where
    T: Into<VellumErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vellum operations.
pub type VellumResult<T> = std::result::Result<T, VellumError>;
