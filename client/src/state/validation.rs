//! Per-repository validation results.
//!
//! DESIGN
//! ======
//! Runs are keyed by report index. JSON renders the index as a string key
//! (`"0"`, `"1"`, ...) because object keys are strings; in memory the key is
//! a `u32` so iteration follows submission order rather than string order.
//!
//! The collection always starts with one untouched placeholder run under
//! `"0"`. A placeholder counts as a free slot, so the first real run
//! replaces it instead of sitting behind an empty card.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Lifecycle of one validation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    /// Nothing submitted yet.
    #[default]
    Unknown,
    /// Request in flight.
    Pending,
    /// The repository satisfies its expected project type.
    Valid,
    /// The backend found violations.
    Invalid,
    /// The request itself failed; `report` holds the error.
    Failed,
}

impl RunStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Pending => "running",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Failed => "failed",
        }
    }

    pub fn is_settled(self) -> bool {
        matches!(self, Self::Valid | Self::Invalid | Self::Failed)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRun {
    #[serde(default)]
    pub repo_name: String,
    #[serde(default)]
    pub repo_type: String,
    #[serde(default)]
    pub status: RunStatus,
    /// Raw validator output. Older payloads call this `message`.
    #[serde(default, alias = "message")]
    pub report: String,
    /// Plain-language explanation of `report`.
    #[serde(default)]
    pub verbalized: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_criteria: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_fulfilled_criteria: Option<u32>,
}

impl ValidationRun {
    pub fn pending(repo_name: impl Into<String>, repo_type: impl Into<String>) -> Self {
        Self {
            repo_name: repo_name.into(),
            repo_type: repo_type.into(),
            status: RunStatus::Pending,
            ..Self::default()
        }
    }

    pub fn failed(repo_name: impl Into<String>, repo_type: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            repo_name: repo_name.into(),
            repo_type: repo_type.into(),
            status: RunStatus::Failed,
            report: error.into(),
            ..Self::default()
        }
    }

    /// An untouched default entry.
    pub fn is_placeholder(&self) -> bool {
        self.status == RunStatus::Unknown && self.repo_name.is_empty()
    }

    /// `"3/5 criteria fulfilled"` when both counts are known.
    pub fn criteria_summary(&self) -> Option<String> {
        let total = self.number_of_criteria?;
        let fulfilled = self.number_of_fulfilled_criteria?;
        Some(format!("{fulfilled}/{total} criteria fulfilled"))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationData(BTreeMap<u32, ValidationRun>);

impl Default for ValidationData {
    fn default() -> Self {
        Self(BTreeMap::from([(0, ValidationRun::default())]))
    }
}

impl ValidationData {
    /// Look up a run by its string key (`"0"`, `"1"`, ...).
    pub fn get(&self, key: &str) -> Option<&ValidationRun> {
        let index = key.trim().parse::<u32>().ok()?;
        self.0.get(&index)
    }

    pub fn run(&self, index: u32) -> Option<&ValidationRun> {
        self.0.get(&index)
    }

    /// Lowest index that is missing or holds a placeholder.
    pub fn next_key(&self) -> u32 {
        (0..)
            .find(|index| self.0.get(index).is_none_or(ValidationRun::is_placeholder))
            .unwrap_or(u32::MAX)
    }

    /// Store `run` at the next free index and return that index.
    pub fn record(&mut self, run: ValidationRun) -> u32 {
        let index = self.next_key();
        self.0.insert(index, run);
        index
    }

    pub fn insert(&mut self, index: u32, run: ValidationRun) {
        self.0.insert(index, run);
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &ValidationRun)> {
        self.0.iter().map(|(index, run)| (*index, run))
    }

    /// Runs that carry real content, in submission order.
    pub fn submitted(&self) -> impl Iterator<Item = (u32, &ValidationRun)> {
        self.iter().filter(|(_, run)| !run.is_placeholder())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_pending(&self) -> bool {
        self.0.values().any(|run| run.status == RunStatus::Pending)
    }
}
