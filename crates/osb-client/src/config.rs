//! Client configuration for the API adaptor.

use std::env;
use std::time::Duration;

use crate::error::{AdaptorError, Result};

/// Environment variable holding the API base URL.
pub const BASE_URL_ENV: &str = "OSB_BASE_URL";

/// Environment variable holding the bearer token.
pub const AUTH_TOKEN_ENV: &str = "OSB_AUTH_TOKEN";

/// HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Deployment configuration for talking to the authoring API.
///
/// Constructed explicitly by the caller or from the environment; nothing in
/// this workspace reads configuration through hidden globals.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without trailing slash (e.g.
    /// `https://openstudybuilder.example.com/api`).
    pub base_url: String,
    /// Bearer token presented on every request.
    pub auth_token: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            auth_token: auth_token.into(),
        }
    }

    /// Read configuration from `OSB_BASE_URL` and `OSB_AUTH_TOKEN`.
    ///
    /// # Errors
    ///
    /// Returns [`AdaptorError::MissingConfig`] when either variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self> {
        let base_url = require_env(BASE_URL_ENV)?;
        let auth_token = require_env(AUTH_TOKEN_ENV)?;
        Ok(Self::new(base_url, auth_token))
    }
}

fn require_env(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AdaptorError::MissingConfig(name.to_string())),
    }
}
