use super::*;
use futures::executor::block_on;

use crate::state::mode::ValidationMode;
use crate::state::specs::ProjectTypeSpecifications;
use crate::state::validation::RunStatus;

#[test]
fn check_submission_requires_both_fields() {
    assert_eq!(check_submission("  ", "TeachingTool"), Err(SubmitError::MissingRepoName));
    assert_eq!(check_submission("o/r", ""), Err(SubmitError::MissingProjectType));
    assert_eq!(check_submission("o/r", "TeachingTool"), Ok(()));
}

#[test]
fn incomplete_form_records_nothing() {
    let state = AppState::new();
    let before = state.validation_data.get();

    let result = block_on(submit_validation(&state, "", "TeachingTool"));

    assert_eq!(result, Err(SubmitError::MissingRepoName));
    assert_eq!(state.validation_data.get(), before);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unreachable_backend_stores_failed_run_in_first_slot() {
    let state = AppState::new();
    state.mode.set(ValidationMode::Owl);

    let index = block_on(submit_validation(&state, " octo/hello ", "TeachingTool")).unwrap();

    assert_eq!(index, 0);
    let data = state.validation_data.get();
    let run = data.run(0).unwrap();
    assert_eq!(run.status, RunStatus::Failed);
    assert_eq!(run.repo_name, "octo/hello");
    assert_eq!(run.repo_type, "TeachingTool");
    assert_eq!(run.report, ApiError::Unavailable.to_string());
    assert!(!data.has_pending());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn subscribers_see_pending_then_outcome() {
    use std::sync::{Arc, Mutex};

    let state = AppState::new();
    let statuses = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&statuses);
    let _sub = state.validation_data.subscribe(move |data| {
        sink.lock().unwrap().push(data.run(0).map(|run| run.status));
    });

    block_on(submit_validation(&state, "o/r", "TeachingTool")).unwrap();

    assert_eq!(*statuses.lock().unwrap(), vec![Some(RunStatus::Pending), Some(RunStatus::Failed)]);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn second_submission_takes_next_index() {
    let state = AppState::new();
    block_on(submit_validation(&state, "o/a", "TeachingTool")).unwrap();
    let index = block_on(submit_validation(&state, "o/b", "TeachingTool")).unwrap();
    assert_eq!(index, 1);
    assert_eq!(state.validation_data.get().submitted().count(), 2);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn failed_specification_fetch_keeps_seeded_families() {
    let state = AppState::new();
    let result = block_on(load_specifications(&state));
    assert_eq!(result, Err(ApiError::Unavailable));
    assert_eq!(state.project_type_specifications.get(), ProjectTypeSpecifications::default());
}
