//! The retrieval seam: one getter per source entity kind.

use osb_model::{
    Arm, Criteria, Element, Epoch, Objective, OpenStudy, Population, StudySelectionEndpoint, Visit,
};

use crate::error::Result;

/// Typed access to the study-design entities of the authoring system.
///
/// Implementations return lists in the order the source system yields them;
/// no re-sorting happens at this layer. Retrieval failures propagate
/// unchanged.
///
/// Implementations must be safe for concurrent use from multiple threads;
/// every method is a read.
pub trait StudyBuilderAdaptor {
    /// All studies visible to the configured credentials.
    fn get_studies(&self) -> Result<Vec<OpenStudy>>;

    /// A single study by uid.
    fn get_study(&self, study_uid: &str) -> Result<OpenStudy>;

    fn get_epochs(&self, study_uid: &str) -> Result<Vec<Epoch>>;

    fn get_visits(&self, study_uid: &str) -> Result<Vec<Visit>>;

    fn get_arms(&self, study_uid: &str) -> Result<Vec<Arm>>;

    fn get_elements(&self, study_uid: &str) -> Result<Vec<Element>>;

    fn get_objectives(&self, study_uid: &str) -> Result<Vec<Objective>>;

    /// Endpoint section rows, each optionally linked to a study objective.
    fn get_endpoints(&self, study_uid: &str) -> Result<Vec<StudySelectionEndpoint>>;

    fn get_criteria(&self, study_uid: &str) -> Result<Vec<Criteria>>;

    /// The study population description.
    fn get_population(&self, study_uid: &str) -> Result<Population>;
}
