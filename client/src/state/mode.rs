//! Validation strategy selection.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which backend validator runs against a repository.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Shape constraints checked against an RDF graph of the repository.
    #[default]
    Shacl,
    /// Class membership checked by an OWL reasoner.
    Owl,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validation mode: {0}")]
pub struct UnknownMode(pub String);

impl ValidationMode {
    pub const ALL: [Self; 2] = [Self::Shacl, Self::Owl];

    /// Wire value sent as `method` and used as the specification family key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shacl => "shacl",
            Self::Owl => "owl",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Shacl => "SHACL",
            Self::Owl => "OWL",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "shacl" => Ok(Self::Shacl),
            "owl" => Ok(Self::Owl),
            _ => Err(UnknownMode(s.to_owned())),
        }
    }
}
