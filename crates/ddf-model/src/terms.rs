//! Shared value types: coded concepts and transition rules.

use serde::{Deserialize, Serialize};

/// A coded concept in the exchange format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Code {
    pub code: String,
    pub code_system: Option<String>,
    pub code_system_version: Option<String>,
    /// Human-readable decode of the coded value.
    pub decode: Option<String>,
}

impl Code {
    /// Code with a decode but no code-system provenance, as produced when
    /// the source system exposes only a term uid and display name.
    pub fn with_decode(code: impl Into<String>, decode: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            decode: Some(decode.into()),
            ..Self::default()
        }
    }
}

/// A rule governing a transition into or out of a design element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitionRule {
    pub transition_rule_description: String,
}

impl TransitionRule {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            transition_rule_description: description.into(),
        }
    }
}
