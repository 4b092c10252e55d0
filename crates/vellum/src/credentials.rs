//! Choice of the key a request is sent with.

use std::fmt;

use crate::mask_secret;

/// Where the Gemini key for the next invocation comes from.
///
/// The environment key wins when present; otherwise the stored preference is
/// sent as the per-call key.
///
/// # Examples
///
/// ```
/// use vellum::CredentialSource;
///
/// let source = CredentialSource::resolve(false, Some("stored-key-9876"));
/// assert_eq!(source.per_call_key(), Some("stored-key-9876"));
///
/// let source = CredentialSource::resolve(true, Some("stored-key-9876"));
/// assert_eq!(source, CredentialSource::Environment);
/// assert_eq!(source.per_call_key(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Process-wide environment key, applied by the client
    Environment,
    /// User-supplied key from the preference store
    Stored(String),
    /// No usable key
    Missing,
}

impl CredentialSource {
    /// Pick the source given whether the client holds an environment key.
    pub fn resolve(has_env_key: bool, stored: Option<&str>) -> Self {
        if has_env_key {
            return CredentialSource::Environment;
        }
        match stored.map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => CredentialSource::Stored(key.to_string()),
            None => CredentialSource::Missing,
        }
    }

    /// Key to attach to the request, if any.
    pub fn per_call_key(&self) -> Option<&str> {
        match self {
            CredentialSource::Stored(key) => Some(key),
            CredentialSource::Environment | CredentialSource::Missing => None,
        }
    }

    /// Whether any key is available.
    pub fn is_available(&self) -> bool {
        !matches!(self, CredentialSource::Missing)
    }
}

impl fmt::Debug for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Stored(key) => write!(f, "preferences ({})", mask_secret(key)),
            CredentialSource::Missing => write!(f, "missing"),
        }
    }
}
