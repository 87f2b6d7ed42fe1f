//! Objectives and their endpoints.

use serde::{Deserialize, Serialize};

use crate::terms::Code;

/// An endpoint attached to a study objective.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Endpoint {
    pub endpoint_description: String,
    pub endpoint_purpose_description: Option<String>,
    pub endpoint_level: Option<Code>,
}

/// A study objective with its attached endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Objective {
    pub objective_description: String,
    pub objective_level: Option<Code>,
    pub objective_endpoints: Vec<Endpoint>,
}
