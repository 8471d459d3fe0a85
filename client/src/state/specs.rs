//! Project-type specifications published by the backend.
//!
//! DESIGN
//! ======
//! Specifications stay opaque JSON keyed by family (`owl`, `shacl`). Inside a
//! family the backend sends an object of project type -> criteria, where the
//! criteria are either a list of strings or a single string. The accessors
//! below read that shape leniently and never fail; anything else renders as
//! "no criteria".

#[cfg(test)]
#[path = "specs_test.rs"]
mod specs_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::mode::ValidationMode;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectTypeSpecifications(BTreeMap<String, Value>);

impl Default for ProjectTypeSpecifications {
    /// Pre-seeded with an empty object for every known family.
    fn default() -> Self {
        Self(
            ValidationMode::ALL
                .iter()
                .map(|mode| (mode.as_str().to_owned(), Value::Object(serde_json::Map::new())))
                .collect(),
        )
    }
}

impl ProjectTypeSpecifications {
    pub fn get(&self, family: &str) -> Option<&Value> {
        self.0.get(family)
    }

    pub fn for_mode(&self, mode: ValidationMode) -> Option<&Value> {
        self.get(mode.as_str())
    }

    pub fn insert(&mut self, family: impl Into<String>, spec: Value) {
        self.0.insert(family.into(), spec);
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Whether any family carries content beyond the empty placeholder.
    pub fn is_loaded(&self) -> bool {
        self.0.values().any(|spec| match spec {
            Value::Object(map) => !map.is_empty(),
            Value::Null => false,
            _ => true,
        })
    }

    /// Project type names defined for `mode`, sorted.
    pub fn project_types(&self, mode: ValidationMode) -> Vec<String> {
        match self.for_mode(mode) {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Criteria text for one project type.
    pub fn criteria(&self, mode: ValidationMode, project_type: &str) -> Vec<String> {
        let Some(Value::Object(map)) = self.for_mode(mode) else {
            return Vec::new();
        };
        match map.get(project_type) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.trim().to_owned(),
                    other => other.to_string(),
                })
                .filter(|s| !s.is_empty())
                .collect(),
            Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_owned()],
            _ => Vec::new(),
        }
    }
}
