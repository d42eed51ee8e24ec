//! PyPI registry client for fetching release metadata

use std::collections::HashMap;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::{DEFAULT_INDEX_URL, FETCH_TIMEOUT_MS};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// PyPI registry client
pub struct PypiRegistry {
    client: Client,
    base_url: String,
}

impl Default for PypiRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_URL.to_string())
    }
}

impl PypiRegistry {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

/// PyPI JSON API response structure
#[derive(Debug, Deserialize)]
struct PypiResponse {
    /// Release version -> distribution files uploaded for that release
    releases: HashMap<String, Vec<PypiDistribution>>,
}

/// Distribution file information from PyPI
#[derive(Debug, Deserialize)]
struct PypiDistribution {
    requires_python: Option<String>,
}

#[async_trait::async_trait]
impl Registry for PypiRegistry {
    async fn fetch_requires_python(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Option<String>, RegistryError> {
        let url = format!("{}/pypi/{}/json", self.base_url, package);
        debug!("Fetching PyPI package: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_millis(FETCH_TIMEOUT_MS))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(package.to_string()));
        }

        if !response.status().is_success() {
            return Err(RegistryError::InvalidResponse(format!(
                "PyPI API returned status {}",
                response.status()
            )));
        }

        let pypi_response: PypiResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        // The constraint lives on the uploaded distribution files. The first
        // file of the matching release wins; a release with no files carries
        // no constraint.
        let requires_python = pypi_response
            .releases
            .get(version)
            .and_then(|distributions| distributions.first())
            .and_then(|distribution| distribution.requires_python.clone());

        debug!(
            "Resolved requires_python {:?} for {} {}",
            requires_python, package, version
        );

        Ok(requires_python)
    }
}
