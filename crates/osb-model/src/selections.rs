//! Objective, endpoint, criteria and population selections.

use serde::{Deserialize, Serialize};

use crate::terms::Code;

/// A study objective selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Objective {
    pub uid: String,
    /// Plain text of the selected objective's latest value.
    pub objective: String,
    pub objective_level: Option<Code>,
    pub order: Option<i64>,
}

/// An endpoint as selected for a study.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub uid: String,
    pub endpoint: String,
    pub endpoint_level: Option<Code>,
    pub endpoint_sublevel: Option<Code>,
    pub units: Vec<String>,
    pub order: Option<i64>,
}

/// One row of the study endpoint section: an endpoint with its optional
/// link to a study objective. The objective link is absent when the
/// endpoint has not been assigned to an objective yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudySelectionEndpoint {
    pub study_endpoint_uid: String,
    pub study_uid: String,
    pub endpoint: Option<Endpoint>,
    pub study_objective: Option<Objective>,
    pub timeframe: Option<String>,
    pub order: Option<i64>,
}

/// An inclusion/exclusion criteria selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub uid: String,
    pub criteria_type: Option<Code>,
    pub name: String,
    pub order: Option<i64>,
}

/// Free-text study population description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Population {
    pub uid: String,
    pub description: String,
    pub order: Option<i64>,
}
