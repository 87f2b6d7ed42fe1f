//! File-backed adaptor reading exported JSON dumps.
//!
//! Serves the file retrieval mode: a directory of per-study dumps, one
//! JSON file per entity kind. Used for offline operation and as the test
//! double for the HTTP adaptor.
//!
//! Expected layout:
//!
//! ```text
//! <root>/studies.json
//! <root>/<study_uid>/study.json
//! <root>/<study_uid>/epochs.json
//! <root>/<study_uid>/visits.json
//! <root>/<study_uid>/arms.json
//! <root>/<study_uid>/elements.json
//! <root>/<study_uid>/objectives.json
//! <root>/<study_uid>/endpoints.json
//! <root>/<study_uid>/criteria.json
//! <root>/<study_uid>/population.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use osb_model::{
    Arm, Criteria, Element, Epoch, Objective, OpenStudy, Population, StudySelectionEndpoint, Visit,
};

use crate::adaptor::StudyBuilderAdaptor;
use crate::error::Result;
use crate::page::parse_listing;

/// Adaptor backed by a directory of JSON dumps.
pub struct FileAdaptor {
    root: PathBuf,
}

impl FileAdaptor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, relative: &str) -> Result<String> {
        let path = self.root.join(relative);
        debug!(path = %path.display(), "reading dump file");
        Ok(fs::read_to_string(path)?)
    }

    fn load_one<T: DeserializeOwned>(&self, relative: &str) -> Result<T> {
        let body = self.read(relative)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn load_list<T: DeserializeOwned>(&self, study_uid: &str, entity: &str) -> Result<Vec<T>> {
        let body = self.read(&format!("{study_uid}/{entity}.json"))?;
        parse_listing(&body)
    }
}

impl StudyBuilderAdaptor for FileAdaptor {
    fn get_studies(&self) -> Result<Vec<OpenStudy>> {
        let body = self.read("studies.json")?;
        parse_listing(&body)
    }

    fn get_study(&self, study_uid: &str) -> Result<OpenStudy> {
        self.load_one(&format!("{study_uid}/study.json"))
    }

    fn get_epochs(&self, study_uid: &str) -> Result<Vec<Epoch>> {
        self.load_list(study_uid, "epochs")
    }

    fn get_visits(&self, study_uid: &str) -> Result<Vec<Visit>> {
        self.load_list(study_uid, "visits")
    }

    fn get_arms(&self, study_uid: &str) -> Result<Vec<Arm>> {
        self.load_list(study_uid, "arms")
    }

    fn get_elements(&self, study_uid: &str) -> Result<Vec<Element>> {
        self.load_list(study_uid, "elements")
    }

    fn get_objectives(&self, study_uid: &str) -> Result<Vec<Objective>> {
        self.load_list(study_uid, "objectives")
    }

    fn get_endpoints(&self, study_uid: &str) -> Result<Vec<StudySelectionEndpoint>> {
        self.load_list(study_uid, "endpoints")
    }

    fn get_criteria(&self, study_uid: &str) -> Result<Vec<Criteria>> {
        self.load_list(study_uid, "criteria")
    }

    fn get_population(&self, study_uid: &str) -> Result<Population> {
        self.load_one(&format!("{study_uid}/population.json"))
    }
}
