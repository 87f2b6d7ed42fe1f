//! Study-design entities: epochs, visits, arms and elements.
//!
//! Field names follow the `/studies/{uid}/study-*` endpoints of the
//! authoring API. Lists are returned in the API's own order; nothing here
//! re-sorts.

use serde::{Deserialize, Serialize};

use crate::terms::{Code, Duration};

/// A study epoch (screening, treatment, follow-up, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Epoch {
    pub uid: String,
    pub study_uid: String,
    pub epoch_name: String,
    pub epoch_type: Option<String>,
    pub epoch_type_name: Option<String>,
    pub epoch_subtype: Option<String>,
    pub epoch_subtype_name: Option<String>,
    pub order: Option<i64>,
    pub description: Option<String>,
    pub start_rule: Option<String>,
    pub end_rule: Option<String>,
    pub duration: Option<Duration>,
    pub color_hash: Option<String>,
}

/// A scheduled study visit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visit {
    pub uid: String,
    pub study_uid: String,
    /// Display label, e.g. `"Visit 1"`.
    pub visit_name: String,
    pub visit_short_name: Option<String>,
    pub visit_type_uid: Option<String>,
    pub visit_type_name: Option<String>,
    pub description: Option<String>,
    pub epoch_uid: String,
    pub study_epoch_name: Option<String>,
    pub visit_contact_mode_uid: Option<String>,
    pub visit_contact_mode_name: Option<String>,
    pub visit_number: Option<i64>,
    pub unique_visit_number: Option<i64>,
    pub show_visit: bool,
    pub start_rule: Option<String>,
    pub end_rule: Option<String>,
    pub min_visit_window_value: Option<i64>,
    pub max_visit_window_value: Option<i64>,
    pub visit_window_unit_name: Option<String>,
    pub study_day_label: Option<String>,
    pub study_week_label: Option<String>,
}

/// A study arm selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arm {
    pub arm_uid: String,
    pub study_uid: String,
    pub name: String,
    pub short_name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub arm_colour: Option<String>,
    pub randomization_group: Option<String>,
    pub number_of_subjects: Option<i64>,
    pub arm_type: Option<Code>,
    pub order: Option<i64>,
}

/// A study element selection (treatment cells reference these).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    pub element_uid: String,
    pub study_uid: String,
    pub name: String,
    pub short_name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub planned_duration: Option<Duration>,
    pub start_rule: Option<String>,
    pub end_rule: Option<String>,
    pub element_colour: Option<String>,
    pub element_subtype: Option<Code>,
    pub order: Option<i64>,
}
