//! Typed accessors over a bound retrieval adaptor.

use std::path::PathBuf;

use osb_client::{ApiAdaptor, FileAdaptor, Result, StudyBuilderAdaptor};
use osb_model::{
    Arm, Criteria, Element, Epoch, Objective, OpenStudy, Population, StudySelectionEndpoint, Visit,
};

/// Which retrieval mode the bound adaptor represents.
///
/// The source system's file dumps and its REST API disagree structurally on
/// the objective link of an endpoint selection, so the mapper needs to know
/// which shape it is looking at. Api is the canonical mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Exported JSON dumps read from disk.
    File,
    /// The live authoring REST API.
    Api,
}

/// Factory binding one pre-configured adaptor for the duration of a
/// mapping session.
///
/// The adaptor is injected explicitly; there is no process-wide shared
/// instance. Every accessor is a pure pass-through: source order is kept
/// and retrieval errors propagate unchanged.
pub struct StudyObjectFactory<A> {
    adaptor: A,
    mode: SourceMode,
}

impl<A: StudyBuilderAdaptor> StudyObjectFactory<A> {
    pub fn new(adaptor: A, mode: SourceMode) -> Self {
        Self { adaptor, mode }
    }

    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    pub fn studies(&self) -> Result<Vec<OpenStudy>> {
        self.adaptor.get_studies()
    }

    pub fn study(&self, study_uid: &str) -> Result<OpenStudy> {
        self.adaptor.get_study(study_uid)
    }

    pub fn epochs(&self, study_uid: &str) -> Result<Vec<Epoch>> {
        self.adaptor.get_epochs(study_uid)
    }

    pub fn visits(&self, study_uid: &str) -> Result<Vec<Visit>> {
        self.adaptor.get_visits(study_uid)
    }

    pub fn arms(&self, study_uid: &str) -> Result<Vec<Arm>> {
        self.adaptor.get_arms(study_uid)
    }

    pub fn elements(&self, study_uid: &str) -> Result<Vec<Element>> {
        self.adaptor.get_elements(study_uid)
    }

    pub fn objectives(&self, study_uid: &str) -> Result<Vec<Objective>> {
        self.adaptor.get_objectives(study_uid)
    }

    pub fn endpoints(&self, study_uid: &str) -> Result<Vec<StudySelectionEndpoint>> {
        self.adaptor.get_endpoints(study_uid)
    }

    pub fn criteria(&self, study_uid: &str) -> Result<Vec<Criteria>> {
        self.adaptor.get_criteria(study_uid)
    }

    pub fn population(&self, study_uid: &str) -> Result<Population> {
        self.adaptor.get_population(study_uid)
    }
}

impl StudyObjectFactory<ApiAdaptor> {
    /// Factory bound to an API adaptor configured from the environment.
    ///
    /// # Errors
    ///
    /// Fails when `OSB_BASE_URL` / `OSB_AUTH_TOKEN` are unset or the HTTP
    /// client cannot be built.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(ApiAdaptor::from_env()?, SourceMode::Api))
    }
}

impl StudyObjectFactory<FileAdaptor> {
    /// Factory bound to a directory of exported JSON dumps.
    pub fn from_dump_dir(root: impl Into<PathBuf>) -> Self {
        Self::new(FileAdaptor::new(root), SourceMode::File)
    }
}
