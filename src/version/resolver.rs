//! Requires-python constraint lookup
//!
//! Combines the pinned source-install table with a registry client behind a
//! single resolve entry point.

use std::sync::Arc;

use tracing::debug;

use crate::config::{self, DEV_VERSION, SOURCE_INSTALL_REQUIRES_PYTHON};
use crate::version::error::RegistryError;
use crate::version::registry::Registry;

/// Resolves the requires-python constraint for a package release
///
/// "dev" releases of known source-install packages use the pinned table
/// without touching the network; everything else asks the registry.
pub struct RequiresPythonResolver {
    registry: Arc<dyn Registry>,
    source_install: &'static [(&'static str, &'static str)],
}

impl RequiresPythonResolver {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        Self::with_source_install(registry, SOURCE_INSTALL_REQUIRES_PYTHON)
    }

    pub fn with_source_install(
        registry: Arc<dyn Registry>,
        source_install: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            registry,
            source_install,
        }
    }

    /// Resolve the constraint for `package` at `version`
    ///
    /// Returns `Ok(None)` when the release declares no constraint; that is
    /// not an error, the caller falls back to the smallest candidate.
    pub async fn resolve(
        &self,
        package: &str,
        version: &str,
    ) -> Result<Option<String>, RegistryError> {
        if version == DEV_VERSION
            && let Some(spec) = config::source_install_constraint(self.source_install, package)
        {
            debug!("Using pinned requires_python {} for {} dev", spec, package);
            return Ok(Some(spec));
        }

        self.registry.fetch_requires_python(package, version).await
    }
}
