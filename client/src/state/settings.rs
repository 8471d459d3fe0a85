//! Backend credentials and method override.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

use super::mode::ValidationMode;

/// `localStorage` key the settings page persists under.
pub const SETTINGS_STORAGE_KEY: &str = "repocheck_validation_settings";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSettings {
    /// GitHub token forwarded to the backend. Empty means anonymous access.
    #[serde(default)]
    pub access_token: String,
    /// Pins every run to one method regardless of the selected mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<ValidationMode>,
}

impl ValidationSettings {
    pub fn has_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    /// Method a run should use given the currently selected mode.
    pub fn effective_method(&self, mode: ValidationMode) -> ValidationMode {
        self.method.unwrap_or(mode)
    }
}
