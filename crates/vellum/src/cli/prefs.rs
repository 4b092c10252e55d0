//! `prefs` command handler.

use std::str::FromStr;
use strum::IntoEnumIterator;
use vellum::{Assistant, PreferenceKey, StorageError, StorageErrorKind, VellumResult};

use super::PrefsCommands;

/// Show or update stored preferences.
pub fn handle_prefs_command(assistant: &mut Assistant, command: PrefsCommands) -> VellumResult<()> {
    match command {
        PrefsCommands::Show => {
            let store = assistant.preferences();
            println!("Preferences file: {}", store.path().display());
            for key in PreferenceKey::iter() {
                let value = store.masked(key).unwrap_or_else(|| "(unset)".to_string());
                println!("{:<16} {}", key.as_ref(), value);
            }
            println!("{:<16} {}", "credential", assistant.credential_source());
        }
        PrefsCommands::Set { key, value } => {
            let key = PreferenceKey::from_str(&key)
                .map_err(|_| StorageError::new(StorageErrorKind::UnknownKey(key.clone())))?;
            assistant.preferences_mut().set(key, value)?;
            let shown = assistant
                .preferences()
                .masked(key)
                .unwrap_or_else(|| "(unset)".to_string());
            println!("{} = {}", key, shown);
        }
    }
    Ok(())
}
