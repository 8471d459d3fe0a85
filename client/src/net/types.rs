//! Wire DTOs for the validation backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON. Response parsing is
//! lenient where the backend has been inconsistent: `returnCode` may arrive as
//! an integer, an integral float, or a bare "conforms" boolean, and the report
//! may be named `message`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::mode::ValidationMode;
use crate::state::settings::ValidationSettings;
use crate::state::specs::ProjectTypeSpecifications;
use crate::state::validation::{RunStatus, ValidationRun};

/// Body of `POST /validate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub access_token: String,
    pub repo_name: String,
    pub repo_type: String,
    pub method: ValidationMode,
}

impl ValidateRequest {
    /// Build a request from the current settings and selected mode.
    pub fn new(settings: &ValidationSettings, mode: ValidationMode, repo_name: &str, repo_type: &str) -> Self {
        Self {
            access_token: settings.access_token.trim().to_owned(),
            repo_name: repo_name.trim().to_owned(),
            repo_type: repo_type.trim().to_owned(),
            method: settings.effective_method(mode),
        }
    }
}

/// Response of `POST /validate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    #[serde(default)]
    pub repo_name: String,
    /// `0` when the repository conforms to its expected project type.
    #[serde(deserialize_with = "deserialize_return_code")]
    pub return_code: i32,
    #[serde(default, alias = "message")]
    pub report: String,
    #[serde(default)]
    pub verbalized: String,
    #[serde(default)]
    pub number_of_criteria: Option<u32>,
    #[serde(default)]
    pub number_of_fulfilled_criteria: Option<u32>,
}

impl ValidateResponse {
    pub fn conforms(&self) -> bool {
        self.return_code == 0
    }

    /// Convert into the stored run for `request`. The project type always
    /// comes from the request; the repository name does too when the backend
    /// leaves it out.
    pub fn into_run(self, request: &ValidateRequest) -> ValidationRun {
        let status = if self.conforms() { RunStatus::Valid } else { RunStatus::Invalid };
        let repo_name = if self.repo_name.trim().is_empty() { request.repo_name.clone() } else { self.repo_name };
        ValidationRun {
            repo_name,
            repo_type: request.repo_type.clone(),
            status,
            report: self.report,
            verbalized: self.verbalized,
            number_of_criteria: self.number_of_criteria,
            number_of_fulfilled_criteria: self.number_of_fulfilled_criteria,
        }
    }
}

/// Response of `GET /project-type-specifications`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTypeSpecificationsResponse {
    pub project_type_specifications: ProjectTypeSpecifications,
}

fn deserialize_return_code<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return i32::try_from(int).map_err(|_| D::Error::custom(format!("returnCode {int} out of range")));
            }
            #[allow(clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= f64::from(i32::MIN)
                && float <= f64::from(i32::MAX)
            {
                return Ok(float as i32);
            }
            Err(D::Error::custom("expected integer-compatible returnCode"))
        }
        serde_json::Value::Bool(conforms) => Ok(i32::from(!conforms)),
        _ => Err(D::Error::custom("expected number or boolean returnCode")),
    }
}
