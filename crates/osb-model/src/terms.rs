//! Coded terms and durations shared across study-design entities.

use serde::{Deserialize, Serialize};

/// Reference to a controlled-terminology term.
///
/// The authoring API attaches these wherever a field is backed by a CT
/// codelist (arm types, objective levels, duration units).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Code {
    /// Term uid in the library (e.g. `CTTerm_000123`).
    pub term_uid: String,
    /// Sponsor preferred name of the term.
    pub name: String,
}

impl Code {
    pub fn new(term_uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            term_uid: term_uid.into(),
            name: name.into(),
        }
    }
}

/// A duration value paired with its unit term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Duration {
    pub duration_value: i64,
    pub duration_unit_code: Code,
}
