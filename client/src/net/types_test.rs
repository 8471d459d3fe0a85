use super::*;
use serde_json::json;

fn request_for(repo_name: &str, repo_type: &str) -> ValidateRequest {
    ValidateRequest::new(&ValidationSettings::default(), ValidationMode::Shacl, repo_name, repo_type)
}

// =============================================================
// ValidateRequest
// =============================================================

#[test]
fn request_follows_mode_and_trims_inputs() {
    let settings = ValidationSettings { access_token: " ghp_abc ".into(), method: None };
    let req = ValidateRequest::new(&settings, ValidationMode::Owl, " octo/hello ", "TeachingTool ");

    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({
            "accessToken": "ghp_abc",
            "repoName": "octo/hello",
            "repoType": "TeachingTool",
            "method": "owl"
        })
    );
}

#[test]
fn request_uses_pinned_method() {
    let settings = ValidationSettings { access_token: String::new(), method: Some(ValidationMode::Shacl) };
    let req = ValidateRequest::new(&settings, ValidationMode::Owl, "o/r", "TeachingTool");
    assert_eq!(req.method, ValidationMode::Shacl);
}

// =============================================================
// ValidateResponse
// =============================================================

#[test]
fn conforming_response_becomes_valid_run() {
    let resp: ValidateResponse = serde_json::from_value(json!({
        "repoName": "octo/hello",
        "returnCode": 0,
        "report": "Conforms: True",
        "verbalized": "The repository satisfies every criterion."
    }))
    .unwrap();
    assert!(resp.conforms());

    let run = resp.into_run(&request_for("octo/hello", "TeachingTool"));
    assert_eq!(run.status, RunStatus::Valid);
    assert_eq!(run.repo_name, "octo/hello");
    assert_eq!(run.repo_type, "TeachingTool");
    assert_eq!(run.report, "Conforms: True");
}

#[test]
fn nonzero_return_code_becomes_invalid_run() {
    let resp: ValidateResponse =
        serde_json::from_value(json!({ "repoName": "o/r", "returnCode": 1, "message": "Results (2)" })).unwrap();
    let run = resp.into_run(&request_for("o/r", "InternalDocumentation"));
    assert_eq!(run.status, RunStatus::Invalid);
    assert_eq!(run.report, "Results (2)");
    assert_eq!(run.verbalized, "");
}

#[test]
fn run_without_repo_name_takes_request_name() {
    let resp: ValidateResponse = serde_json::from_value(json!({ "returnCode": 0, "report": "ok" })).unwrap();
    let run = resp.into_run(&request_for(" octo/hello ", "TeachingTool"));
    assert_eq!(run.repo_name, "octo/hello");
    assert_eq!(run.status, RunStatus::Valid);
}

#[test]
fn run_prefers_backend_repo_name() {
    let resp: ValidateResponse =
        serde_json::from_value(json!({ "repoName": "octo/Hello", "returnCode": 1 })).unwrap();
    let run = resp.into_run(&request_for("octo/hello", "TeachingTool"));
    assert_eq!(run.repo_name, "octo/Hello");
}

#[test]
fn criteria_counts_carry_into_run() {
    let resp: ValidateResponse = serde_json::from_value(json!({
        "repoName": "o/r",
        "returnCode": 1,
        "numberOfCriteria": 9,
        "numberOfFulfilledCriteria": 7
    }))
    .unwrap();
    let run = resp.into_run(&request_for("o/r", "FinishedResearchProject"));
    assert_eq!(run.criteria_summary().as_deref(), Some("7/9 criteria fulfilled"));
}

#[test]
fn return_code_accepts_float_and_bool() {
    let float: ValidateResponse = serde_json::from_value(json!({ "returnCode": 1.0 })).unwrap();
    assert_eq!(float.return_code, 1);

    let conforms: ValidateResponse = serde_json::from_value(json!({ "returnCode": true })).unwrap();
    assert!(conforms.conforms());

    let violates: ValidateResponse = serde_json::from_value(json!({ "returnCode": false })).unwrap();
    assert_eq!(violates.return_code, 1);
}

#[test]
fn return_code_rejects_strings_and_fractions() {
    assert!(serde_json::from_value::<ValidateResponse>(json!({ "returnCode": "0" })).is_err());
    assert!(serde_json::from_value::<ValidateResponse>(json!({ "returnCode": 0.5 })).is_err());
}

#[test]
fn missing_return_code_is_an_error() {
    assert!(serde_json::from_value::<ValidateResponse>(json!({ "repoName": "o/r" })).is_err());
}

// =============================================================
// ProjectTypeSpecificationsResponse
// =============================================================

#[test]
fn specifications_response_unwraps_envelope() {
    let resp: ProjectTypeSpecificationsResponse = serde_json::from_value(json!({
        "projectTypeSpecifications": {
            "owl": { "TeachingTool": ["DefaultProject"] },
            "shacl": {}
        }
    }))
    .unwrap();
    let specs = resp.project_type_specifications;
    assert!(specs.is_loaded());
    assert_eq!(specs.project_types(ValidationMode::Owl), vec!["TeachingTool"]);
}
