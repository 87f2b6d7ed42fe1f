//! The study aggregate root as returned by `/studies`.

use serde::{Deserialize, Serialize};

/// A study registered in the authoring system.
///
/// Carries identification only; design entities (epochs, arms, visits, ...)
/// are fetched per study through their own endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenStudy {
    pub uid: String,
    pub study_number: Option<String>,
    pub study_acronym: Option<String>,
    /// Sponsor-qualified identifier, e.g. `"CDISC DEV-0002"`.
    pub study_id: Option<String>,
    pub project_number: Option<String>,
    pub study_status: Option<String>,
}
