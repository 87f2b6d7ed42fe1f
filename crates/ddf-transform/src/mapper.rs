//! Field-by-field transcription of source entities into DDF entities.
//!
//! Every `map_*` operation is total for well-formed input: present source
//! fields are copied or transcoded, absent optional fields become `None`,
//! and nothing raises on incomplete data. The one exception is
//! [`StudyObjectMapper::map_study`], which performs factory lookups and
//! propagates their failures.

use tracing::debug;

use ddf_model::{
    Code, Encounter, Endpoint, Objective, Study, StudyArm, StudyDesignPopulation, StudyElement,
    StudyEpoch, TransitionRule,
};
use osb_client::{Result, StudyBuilderAdaptor};
use osb_model as osb;

use crate::factory::{SourceMode, StudyObjectFactory};

/// Stateless mapper from source entities to DDF entities.
///
/// Holds no state; a single instance may be shared freely across threads
/// and mapping the same input twice yields equal values.
#[derive(Debug, Default)]
pub struct StudyObjectMapper;

impl StudyObjectMapper {
    pub fn new() -> Self {
        Self
    }

    /// Visit → Encounter. The encounter name is the visit's display label
    /// (e.g. `"Visit 1"`), copied exactly.
    pub fn map_visit(&self, visit: &osb::Visit) -> Encounter {
        Encounter {
            encounter_name: visit.visit_name.clone(),
            encounter_description: visit.description.clone(),
            encounter_type: code_from_parts(
                visit.visit_type_uid.as_deref(),
                visit.visit_type_name.as_deref(),
            ),
            encounter_contact_modes: code_from_parts(
                visit.visit_contact_mode_uid.as_deref(),
                visit.visit_contact_mode_name.as_deref(),
            )
            .into_iter()
            .collect(),
            transition_start_rule: visit.start_rule.as_deref().map(TransitionRule::new),
            transition_end_rule: visit.end_rule.as_deref().map(TransitionRule::new),
        }
    }

    /// Epoch → StudyEpoch, 1:1 field copy.
    pub fn map_epoch(&self, epoch: &osb::Epoch) -> StudyEpoch {
        StudyEpoch {
            study_epoch_name: epoch.epoch_name.clone(),
            study_epoch_description: epoch.description.clone(),
            study_epoch_type: code_from_parts(
                epoch.epoch_type.as_deref(),
                epoch.epoch_type_name.as_deref(),
            ),
            sequence_in_study_design: epoch.order,
        }
    }

    /// Arm → StudyArm, 1:1 field copy.
    pub fn map_arm(&self, arm: &osb::Arm) -> StudyArm {
        StudyArm {
            study_arm_name: arm.name.clone(),
            study_arm_description: arm.description.clone(),
            study_arm_type: arm.arm_type.as_ref().map(map_code),
            study_arm_data_origin_description: None,
            study_arm_data_origin_type: None,
        }
    }

    /// Element → StudyElement, 1:1 field copy; start/end rules become
    /// transition rules.
    pub fn map_element(&self, element: &osb::Element) -> StudyElement {
        StudyElement {
            study_element_name: element.name.clone(),
            study_element_description: element.description.clone(),
            transition_start_rule: element.start_rule.as_deref().map(TransitionRule::new),
            transition_end_rule: element.end_rule.as_deref().map(TransitionRule::new),
        }
    }

    /// Population → StudyDesignPopulation, verbatim description copy.
    pub fn map_population(&self, population: &osb::Population) -> StudyDesignPopulation {
        StudyDesignPopulation {
            population_description: population.description.clone(),
        }
    }

    /// Endpoint selection → Objective.
    ///
    /// Returns `None` when the selection carries no linked study objective;
    /// callers must handle absence. The two retrieval modes diverge here:
    /// file dumps carry only the objective text, while the API also yields
    /// the objective level and the linked endpoint.
    pub fn map_endpoint_selection(
        &self,
        selection: &osb::StudySelectionEndpoint,
        mode: SourceMode,
    ) -> Option<Objective> {
        let objective = selection.study_objective.as_ref()?;
        let mapped = match mode {
            SourceMode::File => Objective {
                objective_description: objective.objective.clone(),
                objective_level: None,
                objective_endpoints: Vec::new(),
            },
            SourceMode::Api => Objective {
                objective_description: objective.objective.clone(),
                objective_level: objective.objective_level.as_ref().map(map_code),
                objective_endpoints: selection
                    .endpoint
                    .as_ref()
                    .map(|endpoint| vec![self.map_endpoint(endpoint)])
                    .unwrap_or_default(),
            },
        };
        Some(mapped)
    }

    /// Endpoint → Endpoint (exchange-format side).
    pub fn map_endpoint(&self, endpoint: &osb::Endpoint) -> Endpoint {
        Endpoint {
            endpoint_description: endpoint.endpoint.clone(),
            endpoint_purpose_description: None,
            endpoint_level: endpoint.endpoint_level.as_ref().map(map_code),
        }
    }

    /// OpenStudy → Study: composes the full aggregate, fetching the
    /// study's design entities through the factory and mapping each list
    /// element-wise, preserving order and length.
    ///
    /// # Errors
    ///
    /// The first failing lookup propagates immediately and abandons the
    /// remaining fetches; the caller may re-invoke.
    pub fn map_study<A: StudyBuilderAdaptor>(
        &self,
        study: &osb::OpenStudy,
        factory: &StudyObjectFactory<A>,
    ) -> Result<Study> {
        let uid = study.uid.as_str();

        let encounters: Vec<Encounter> = factory
            .visits(uid)?
            .iter()
            .map(|visit| self.map_visit(visit))
            .collect();
        let study_epochs: Vec<StudyEpoch> = factory
            .epochs(uid)?
            .iter()
            .map(|epoch| self.map_epoch(epoch))
            .collect();
        let study_arms: Vec<StudyArm> = factory
            .arms(uid)?
            .iter()
            .map(|arm| self.map_arm(arm))
            .collect();
        let study_elements: Vec<StudyElement> = factory
            .elements(uid)?
            .iter()
            .map(|element| self.map_element(element))
            .collect();
        let objectives: Vec<Objective> = factory
            .endpoints(uid)?
            .iter()
            .filter_map(|selection| self.map_endpoint_selection(selection, factory.mode()))
            .collect();
        let population = factory.population(uid)?;

        debug!(
            study_uid = uid,
            encounters = encounters.len(),
            epochs = study_epochs.len(),
            arms = study_arms.len(),
            elements = study_elements.len(),
            objectives = objectives.len(),
            "composed study aggregate"
        );

        Ok(Study {
            study_identifier: study.uid.clone(),
            study_title: study
                .study_acronym
                .clone()
                .or_else(|| study.study_id.clone()),
            study_version: study.study_status.clone(),
            study_type: None,
            study_phase: None,
            encounters,
            study_epochs,
            study_arms,
            study_elements,
            study_design_populations: vec![self.map_population(&population)],
            objectives,
        })
    }
}

/// Source coded term → exchange-format code. The source exposes a term uid
/// and a display name; code-system provenance is not available.
fn map_code(code: &osb::Code) -> Code {
    Code::with_decode(&code.term_uid, &code.name)
}

/// Build a code from separately transported uid and name fields. A name
/// without a uid still yields a decode-only code; both absent yields `None`.
fn code_from_parts(uid: Option<&str>, name: Option<&str>) -> Option<Code> {
    match (uid, name) {
        (None, None) => None,
        (uid, name) => Some(Code {
            code: uid.unwrap_or_default().to_string(),
            decode: name.map(str::to_string),
            ..Code::default()
        }),
    }
}
