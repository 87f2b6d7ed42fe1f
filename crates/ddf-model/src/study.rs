//! The study aggregate of the exchange format.

use serde::{Deserialize, Serialize};

use crate::design::{Encounter, StudyArm, StudyElement, StudyEpoch};
use crate::objective::Objective;
use crate::terms::Code;

/// The population a study design is intended for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyDesignPopulation {
    pub population_description: String,
}

/// One complete study definition, composed from the per-entity mappings.
///
/// Sub-lists preserve the order and length of the corresponding source
/// lists; composition never filters or re-sorts design entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Study {
    pub study_identifier: String,
    pub study_title: Option<String>,
    pub study_version: Option<String>,
    pub study_type: Option<Code>,
    pub study_phase: Option<Code>,
    pub encounters: Vec<Encounter>,
    pub study_epochs: Vec<StudyEpoch>,
    pub study_arms: Vec<StudyArm>,
    pub study_elements: Vec<StudyElement>,
    pub study_design_populations: Vec<StudyDesignPopulation>,
    pub objectives: Vec<Objective>,
}
