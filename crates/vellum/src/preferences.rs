//! File-backed user preferences.
//!
//! Preferences live in a small JSON document, by default
//! `<config dir>/vellum/preferences.json`. The file is read once when the
//! store is opened and rewritten on every change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};
use vellum_core::StorageSettings;
use vellum_error::{JsonError, StorageError, StorageErrorKind, VellumResult};

/// Names of the persisted preference entries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum PreferenceKey {
    /// Key for the Gemini endpoint
    GeminiApiKey,
    /// Key for OpenAI, collected for future providers
    OpenaiApiKey,
    /// Model identifier chosen by the user
    SelectedModel,
    /// Colour theme identifier
    ThemeId,
}

impl PreferenceKey {
    /// Whether the value is a credential and must be masked on display.
    pub fn is_secret(self) -> bool {
        matches!(self, PreferenceKey::GeminiApiKey | PreferenceKey::OpenaiApiKey)
    }
}

/// Persisted preference values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Key for the Gemini endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    /// Key for OpenAI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    /// Model identifier chosen by the user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_model: Option<String>,
    /// Colour theme identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
}

impl Preferences {
    fn slot(&mut self, key: PreferenceKey) -> &mut Option<String> {
        match key {
            PreferenceKey::GeminiApiKey => &mut self.gemini_api_key,
            PreferenceKey::OpenaiApiKey => &mut self.openai_api_key,
            PreferenceKey::SelectedModel => &mut self.selected_model,
            PreferenceKey::ThemeId => &mut self.theme_id,
        }
    }

    /// Value stored under `key`.
    pub fn get(&self, key: PreferenceKey) -> Option<&str> {
        match key {
            PreferenceKey::GeminiApiKey => self.gemini_api_key.as_deref(),
            PreferenceKey::OpenaiApiKey => self.openai_api_key.as_deref(),
            PreferenceKey::SelectedModel => self.selected_model.as_deref(),
            PreferenceKey::ThemeId => self.theme_id.as_deref(),
        }
    }
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("gemini_api_key", &self.gemini_api_key.as_deref().map(mask_secret))
            .field("openai_api_key", &self.openai_api_key.as_deref().map(mask_secret))
            .field("selected_model", &self.selected_model)
            .field("theme_id", &self.theme_id)
            .finish()
    }
}

/// Masks all but the last four characters of a secret.
///
/// # Examples
///
/// ```
/// use vellum::mask_secret;
///
/// assert_eq!(mask_secret("AIzaSyExample1234"), "****1234");
/// assert_eq!(mask_secret("abc"), "****");
/// ```
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{}", tail)
}

/// Preference document bound to a file.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    preferences: Preferences,
}

impl PreferenceStore {
    /// Default location, `<config dir>/vellum/preferences.json`.
    pub fn default_path() -> VellumResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("vellum").join("preferences.json"))
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::InvalidPath(
                    "no configuration directory for this platform".to_string(),
                ))
                .into()
            })
    }

    /// Open the store configured in the storage settings.
    pub fn from_settings(settings: &StorageSettings) -> VellumResult<Self> {
        match &settings.preferences_path {
            Some(path) => Self::open(path),
            None => Self::open(Self::default_path()?),
        }
    }

    /// Open the store at `path`; a missing file yields default preferences.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> VellumResult<Self> {
        let path = path.as_ref().to_path_buf();

        let preferences = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                JsonError::new(format!(
                    "Failed to parse preferences {}: {}",
                    path.display(),
                    e
                ))
            })?
        } else {
            debug!("No preferences file, using defaults");
            Preferences::default()
        };

        Ok(Self { path, preferences })
    }

    /// File backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current values.
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Value stored under `key`.
    pub fn get(&self, key: PreferenceKey) -> Option<&str> {
        self.preferences.get(key)
    }

    /// Value for display: secrets are masked, unset values are `None`.
    pub fn masked(&self, key: PreferenceKey) -> Option<String> {
        self.get(key).map(|value| {
            if key.is_secret() {
                mask_secret(value)
            } else {
                value.to_string()
            }
        })
    }

    /// Store a value and persist immediately. A blank value clears the entry.
    ///
    /// Values in memory change only once the write succeeds.
    #[instrument(skip(self, value), fields(key = %key))]
    pub fn set(&mut self, key: PreferenceKey, value: impl Into<String>) -> VellumResult<()> {
        let value = value.into();
        let value = value.trim();
        let next = (!value.is_empty()).then(|| value.to_string());

        if self.preferences.get(key) == next.as_deref() {
            debug!("Preference unchanged, skipping write");
            return Ok(());
        }

        let mut updated = self.preferences.clone();
        *updated.slot(key) = next;
        Self::save(&self.path, &updated)?;
        self.preferences = updated;
        info!("Preference updated");
        Ok(())
    }

    /// Write the document via a temporary file and rename.
    fn save(path: &Path, preferences: &Preferences) -> VellumResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let contents = serde_json::to_string_pretty(preferences)
            .map_err(|e| JsonError::new(format!("Failed to serialize preferences: {}", e)))?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, contents).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;
        std::fs::rename(&temp_path, path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(())
    }
}
