//! HTTP adaptor for the authoring API.
//!
//! Blocking client with bearer authentication. One GET per entity kind,
//! no retry, no caching; the caller owns failure handling.

use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tracing::debug;

use osb_model::{
    Arm, Criteria, Element, Epoch, Objective, OpenStudy, Population, StudySelectionEndpoint, Visit,
};

use crate::adaptor::StudyBuilderAdaptor;
use crate::config::{ClientConfig, REQUEST_TIMEOUT};
use crate::error::{AdaptorError, Result};
use crate::page::parse_listing;

/// Adaptor backed by the live REST API.
pub struct ApiAdaptor {
    client: Client,
    config: ClientConfig,
}

impl ApiAdaptor {
    /// Build an adaptor around a pre-configured authentication context.
    ///
    /// # Errors
    ///
    /// Returns [`AdaptorError::Network`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(AdaptorError::from)?;
        Ok(Self { client, config })
    }

    /// Build an adaptor configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    /// GET a path and return the response body, mapping non-2xx statuses
    /// to [`AdaptorError::Api`].
    fn get_body(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        debug!(%url, "fetching from authoring api");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.auth_token))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_else(|_| "no body".to_string());
            return Err(AdaptorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.text()?)
    }

    fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.get_body(path)?;
        Ok(serde_json::from_str(&body)?)
    }

    fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let body = self.get_body(path)?;
        parse_listing(&body)
    }
}

impl StudyBuilderAdaptor for ApiAdaptor {
    fn get_studies(&self) -> Result<Vec<OpenStudy>> {
        self.get_list("studies")
    }

    fn get_study(&self, study_uid: &str) -> Result<OpenStudy> {
        self.get_one(&format!("studies/{study_uid}"))
    }

    fn get_epochs(&self, study_uid: &str) -> Result<Vec<Epoch>> {
        self.get_list(&format!("studies/{study_uid}/study-epochs"))
    }

    fn get_visits(&self, study_uid: &str) -> Result<Vec<Visit>> {
        self.get_list(&format!("studies/{study_uid}/study-visits"))
    }

    fn get_arms(&self, study_uid: &str) -> Result<Vec<Arm>> {
        self.get_list(&format!("studies/{study_uid}/study-arms"))
    }

    fn get_elements(&self, study_uid: &str) -> Result<Vec<Element>> {
        self.get_list(&format!("studies/{study_uid}/study-elements"))
    }

    fn get_objectives(&self, study_uid: &str) -> Result<Vec<Objective>> {
        self.get_list(&format!("studies/{study_uid}/study-objectives"))
    }

    fn get_endpoints(&self, study_uid: &str) -> Result<Vec<StudySelectionEndpoint>> {
        self.get_list(&format!("studies/{study_uid}/study-endpoints"))
    }

    fn get_criteria(&self, study_uid: &str) -> Result<Vec<Criteria>> {
        self.get_list(&format!("studies/{study_uid}/study-criteria"))
    }

    fn get_population(&self, study_uid: &str) -> Result<Population> {
        self.get_one(&format!("studies/{study_uid}/study-population"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adaptor() -> ApiAdaptor {
        ApiAdaptor::new(ClientConfig::new("https://osb.example.com/api", "token")).unwrap()
    }

    #[test]
    fn url_joins_base_and_path() {
        assert_eq!(
            adaptor().url("studies/Study_000002/study-visits"),
            "https://osb.example.com/api/studies/Study_000002/study-visits"
        );
    }

    #[test]
    fn url_tolerates_leading_slash() {
        assert_eq!(
            adaptor().url("/studies"),
            "https://osb.example.com/api/studies"
        );
    }
}
