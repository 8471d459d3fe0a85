//! Browser localStorage helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers keep web-sys glue out of pages. Only the validation settings
//! survive a page load; every other cell starts from its default.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::state::registry::AppState;
use crate::state::settings::{SETTINGS_STORAGE_KEY, ValidationSettings};

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        parse_stored(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Stored values written by older builds may not parse; treat them as absent.
pub fn parse_stored<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

/// Restore persisted settings into `state` and keep them saved on change.
pub fn restore_settings(state: &AppState) {
    if let Some(settings) = load_json::<ValidationSettings>(SETTINGS_STORAGE_KEY) {
        state.validation_settings.set(settings);
    }
    state
        .validation_settings
        .subscribe(|settings| save_json(SETTINGS_STORAGE_KEY, settings))
        .detach();
}
