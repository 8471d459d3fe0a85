use super::*;

#[test]
fn endpoint_url_joins_with_single_slash() {
    assert_eq!(endpoint_url("http://localhost:5000", VALIDATE_PATH), "http://localhost:5000/validate");
    assert_eq!(endpoint_url("http://localhost:5000/", VALIDATE_PATH), "http://localhost:5000/validate");
    assert_eq!(
        endpoint_url("https://api.example.org/v1", SPECIFICATIONS_PATH),
        "https://api.example.org/v1/project-type-specifications"
    );
}

#[test]
fn base_url_has_no_trailing_slash() {
    let base = api_base_url();
    assert!(!base.is_empty());
    assert!(!base.ends_with('/'));
}

#[test]
fn status_error_names_endpoint() {
    let err = ApiError::Status { endpoint: VALIDATE_PATH, status: 502 };
    assert_eq!(err.to_string(), "/validate returned status 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let request = ValidateRequest {
        access_token: String::new(),
        repo_name: "o/r".into(),
        repo_type: "TeachingTool".into(),
        method: crate::state::mode::ValidationMode::Shacl,
    };
    assert_eq!(futures::executor::block_on(validate_repository(&request)), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(fetch_project_type_specifications()), Err(ApiError::Unavailable));
}
