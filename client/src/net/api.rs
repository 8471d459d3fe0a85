//! REST helpers for the validation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: every call returns
//! [`ApiError::Unavailable`] since the backend is only reached from the
//! browser.
//!
//! CONFIGURATION
//! =============
//! The backend base URL is baked in at compile time from
//! `REPOCHECK_API_URL` and falls back to [`DEFAULT_API_URL`].
//!
//! ERROR HANDLING
//! ==============
//! Callers get typed [`ApiError`]s instead of panics so a dead backend shows
//! up as a failed run rather than a broken page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::ValidateRequest;
#[cfg(feature = "hydrate")]
use super::types::{ProjectTypeSpecificationsResponse, ValidateResponse};
use crate::state::specs::ProjectTypeSpecifications;
use crate::state::validation::ValidationRun;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const SPECIFICATIONS_PATH: &str = "/project-type-specifications";
pub const VALIDATE_PATH: &str = "/validate";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("validation backend is not reachable from this environment")]
    Unavailable,
    #[error("request to backend failed: {0}")]
    Request(String),
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("unexpected response body: {0}")]
    Parse(String),
}

/// Backend base URL without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("REPOCHECK_API_URL").map_or(DEFAULT_API_URL, |url| url.trim_end_matches('/'))
}

pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Fetch the project types and criteria known to the backend.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the backend answers with a
/// non-2xx status, or the body does not match the expected envelope.
pub async fn fetch_project_type_specifications() -> Result<ProjectTypeSpecifications, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint_url(api_base_url(), SPECIFICATIONS_PATH);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { endpoint: SPECIFICATIONS_PATH, status: resp.status() });
        }
        let body: ProjectTypeSpecificationsResponse =
            resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(body.project_type_specifications)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to validate one repository.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request cannot be sent, the backend
/// answers with a non-2xx status, or the body is not a validation result.
pub async fn validate_repository(request: &ValidateRequest) -> Result<ValidationRun, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint_url(api_base_url(), VALIDATE_PATH);
        let resp = gloo_net::http::Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { endpoint: VALIDATE_PATH, status: resp.status() });
        }
        let body: ValidateResponse = resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        Ok(body.into_run(request))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
