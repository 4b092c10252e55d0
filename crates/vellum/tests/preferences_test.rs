//! PreferenceStore persistence tests.

use vellum::{PreferenceKey, PreferenceStore, Preferences, StorageSettings};

#[test]
fn test_missing_file_yields_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("preferences.json");

    let store = PreferenceStore::open(&path)?;
    assert_eq!(store.preferences(), &Preferences::default());
    assert_eq!(store.get(PreferenceKey::SelectedModel), None);
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_set_persists_immediately() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("nested").join("preferences.json");

    let mut store = PreferenceStore::open(&path)?;
    store.set(PreferenceKey::GeminiApiKey, "AIzaSyTestKey0042")?;
    store.set(PreferenceKey::SelectedModel, "gemini-3-pro-preview")?;

    let reopened = PreferenceStore::open(&path)?;
    assert_eq!(reopened.get(PreferenceKey::GeminiApiKey), Some("AIzaSyTestKey0042"));
    assert_eq!(
        reopened.get(PreferenceKey::SelectedModel),
        Some("gemini-3-pro-preview")
    );
    assert_eq!(reopened.get(PreferenceKey::OpenaiApiKey), None);

    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(raw["selected_model"], "gemini-3-pro-preview");
    assert!(raw.get("theme_id").is_none());
    Ok(())
}

#[test]
fn test_blank_value_clears_entry() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("preferences.json");

    let mut store = PreferenceStore::open(&path)?;
    store.set(PreferenceKey::ThemeId, "dark")?;
    store.set(PreferenceKey::ThemeId, "   ")?;

    assert_eq!(PreferenceStore::open(&path)?.get(PreferenceKey::ThemeId), None);
    Ok(())
}

#[test]
fn test_secrets_are_masked() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = PreferenceStore::open(dir.path().join("preferences.json"))?;
    store.set(PreferenceKey::OpenaiApiKey, "sk-live-abcdef5678")?;
    store.set(PreferenceKey::ThemeId, "light")?;

    assert_eq!(
        store.masked(PreferenceKey::OpenaiApiKey).as_deref(),
        Some("****5678")
    );
    assert_eq!(store.masked(PreferenceKey::ThemeId).as_deref(), Some("light"));
    assert!(!format!("{:?}", store).contains("abcdef"));
    Ok(())
}

#[test]
fn test_corrupt_file_is_an_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ not json")?;

    let err = PreferenceStore::open(&path).expect_err("corrupt preferences");
    assert!(err.user_message().contains("Failed to parse preferences"));
    Ok(())
}

#[test]
fn test_failed_write_leaves_value_unset() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "regular file")?;
    let path = blocker.join("preferences.json");

    let mut store = PreferenceStore::open(&path)?;
    let err = store
        .set(PreferenceKey::GeminiApiKey, "AIzaSyTestKey0042")
        .expect_err("parent is a regular file");
    assert!(err.user_message().contains("blocker"));

    assert_eq!(store.get(PreferenceKey::GeminiApiKey), None);
    assert_eq!(store.preferences(), &Preferences::default());
    Ok(())
}

#[test]
fn test_settings_override_location() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("custom.json");
    let settings = StorageSettings {
        preferences_path: Some(path.clone()),
    };

    let store = PreferenceStore::from_settings(&settings)?;
    assert_eq!(store.path(), path.as_path());
    Ok(())
}

#[test]
fn test_keys_parse_from_snake_case() {
    use std::str::FromStr;

    assert_eq!(
        PreferenceKey::from_str("gemini_api_key").ok(),
        Some(PreferenceKey::GeminiApiKey)
    );
    assert_eq!(
        PreferenceKey::from_str("theme_id").ok(),
        Some(PreferenceKey::ThemeId)
    );
    assert!(PreferenceKey::from_str("password").is_err());
    assert!(PreferenceKey::GeminiApiKey.is_secret());
    assert!(!PreferenceKey::SelectedModel.is_secret());
}
