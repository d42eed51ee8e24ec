//! Registry trait for looking up release metadata on a package index

#[cfg(test)]
use mockall::automock;

use crate::version::error::RegistryError;

/// Trait for fetching the requires-python constraint of a package release
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Registry: Send + Sync {
    /// Fetches the `requires_python` constraint declared by a release
    ///
    /// # Arguments
    /// * `package` - The package name (e.g., "requests")
    /// * `version` - The release version (e.g., "2.25.0")
    ///
    /// # Returns
    /// * `Ok(Some(spec))` - The constraint declared by the release's first distribution
    /// * `Ok(None)` - The release is unknown, has no distributions, or declares no constraint
    /// * `Err(RegistryError)` - If the fetch fails
    async fn fetch_requires_python(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Option<String>, RegistryError>;
}
