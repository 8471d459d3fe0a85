//! User-triggered operations that span state and network.
//!
//! LIFECYCLE
//! =========
//! `submit_validation` records a pending run before the request leaves, so
//! the report list shows it immediately, then overwrites that same index
//! with the backend outcome or a failed run carrying the error text.
//! `load_specifications` replaces the specification cell only on success;
//! a failed fetch leaves the pre-seeded families in place.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::api::{self, ApiError};
use crate::net::types::ValidateRequest;
use crate::state::registry::AppState;
use crate::state::validation::ValidationRun;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("repository name is required")]
    MissingRepoName,
    #[error("project type is required")]
    MissingProjectType,
}

/// Check the form before anything is recorded.
///
/// # Errors
///
/// Returns a [`SubmitError`] naming the first empty field.
pub fn check_submission(repo_name: &str, repo_type: &str) -> Result<(), SubmitError> {
    if repo_name.trim().is_empty() {
        return Err(SubmitError::MissingRepoName);
    }
    if repo_type.trim().is_empty() {
        return Err(SubmitError::MissingProjectType);
    }
    Ok(())
}

/// Validate one repository and store the outcome. Returns the run's index.
///
/// # Errors
///
/// Returns a [`SubmitError`] when the form is incomplete; nothing is
/// recorded in that case. Backend failures are not errors here: they are
/// stored as a failed run.
pub async fn submit_validation(state: &AppState, repo_name: &str, repo_type: &str) -> Result<u32, SubmitError> {
    check_submission(repo_name, repo_type)?;
    let repo_name = repo_name.trim();
    let repo_type = repo_type.trim();

    let request = ValidateRequest::new(&state.validation_settings.get(), state.mode.get(), repo_name, repo_type);
    let index = state.begin_run(repo_name, repo_type);

    let run = match api::validate_repository(&request).await {
        Ok(run) => run,
        Err(e) => {
            log_failure("validate", &e);
            ValidationRun::failed(repo_name, repo_type, e.to_string())
        }
    };
    state.finish_run(index, run);
    Ok(index)
}

/// Fetch specifications from the backend into `state`.
///
/// # Errors
///
/// Returns the [`ApiError`] from the fetch; the cell is left untouched.
pub async fn load_specifications(state: &AppState) -> Result<(), ApiError> {
    match api::fetch_project_type_specifications().await {
        Ok(specs) => {
            state.project_type_specifications.set(specs);
            Ok(())
        }
        Err(e) => {
            log_failure("specifications", &e);
            Err(e)
        }
    }
}

fn log_failure(what: &str, error: &ApiError) {
    #[cfg(feature = "hydrate")]
    log::warn!("{what} request failed: {error}");
    #[cfg(not(feature = "hydrate"))]
    let _ = (what, error);
}
