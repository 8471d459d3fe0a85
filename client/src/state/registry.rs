//! Application state registry.
//!
//! DESIGN
//! ======
//! One `AppState` is constructed per page load and handed to components
//! through Leptos context. Each field is an independent `StateCell`; no
//! cross-cell consistency is enforced, so components can subscribe to only
//! what they render.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use super::cell::StateCell;
use super::mode::ValidationMode;
use super::page::Page;
use super::settings::ValidationSettings;
use super::specs::ProjectTypeSpecifications;
use super::validation::{RunStatus, ValidationData, ValidationRun};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: StateCell<ValidationMode>,
    pub selected_page: StateCell<Page>,
    pub project_type_specifications: StateCell<ProjectTypeSpecifications>,
    pub validation_settings: StateCell<ValidationSettings>,
    pub validation_data: StateCell<ValidationData>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore every cell to its default, notifying subscribers of each.
    pub fn reset(&self) {
        self.mode.set(ValidationMode::default());
        self.selected_page.set(Page::default());
        self.project_type_specifications.set(ProjectTypeSpecifications::default());
        self.validation_settings.set(ValidationSettings::default());
        self.validation_data.set(ValidationData::default());
    }

    /// Record a pending run and return its report index.
    pub fn begin_run(&self, repo_name: &str, repo_type: &str) -> u32 {
        let mut index = 0;
        self.validation_data.update(|data| {
            index = data.record(ValidationRun::pending(repo_name, repo_type));
        });
        index
    }

    /// Replace the pending run at `index` with its outcome. Does nothing when
    /// that run is gone, e.g. after `reset`.
    pub fn finish_run(&self, index: u32, run: ValidationRun) {
        let pending =
            self.validation_data.with(|data| data.run(index).is_some_and(|r| r.status == RunStatus::Pending));
        if pending {
            self.validation_data.update(|data| data.insert(index, run));
        }
    }
}
