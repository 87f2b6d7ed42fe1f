//! Study-design entities of the exchange format.

use serde::{Deserialize, Serialize};

use crate::terms::{Code, TransitionRule};

/// A planned subject contact point (maps from a source visit).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Encounter {
    pub encounter_name: String,
    pub encounter_description: Option<String>,
    pub encounter_type: Option<Code>,
    pub encounter_contact_modes: Vec<Code>,
    pub transition_start_rule: Option<TransitionRule>,
    pub transition_end_rule: Option<TransitionRule>,
}

/// A period of the study design timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyEpoch {
    pub study_epoch_name: String,
    pub study_epoch_description: Option<String>,
    pub study_epoch_type: Option<Code>,
    pub sequence_in_study_design: Option<i64>,
}

/// A planned path through the study for a group of subjects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyArm {
    pub study_arm_name: String,
    pub study_arm_description: Option<String>,
    pub study_arm_type: Option<Code>,
    pub study_arm_data_origin_description: Option<String>,
    pub study_arm_data_origin_type: Option<Code>,
}

/// A basic building block of the study design (maps from a source element).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudyElement {
    pub study_element_name: String,
    pub study_element_description: Option<String>,
    pub transition_start_rule: Option<TransitionRule>,
    pub transition_end_rule: Option<TransitionRule>,
}
