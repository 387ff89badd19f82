use std::sync::Arc;

use crate::config::VersioningConfig;
use crate::domain::VersionInfo;
use crate::engine::VersionEngine;
use crate::error::Result;
use crate::registry::Registries;
use crate::scm::{CommandRunner, ProjectContext, ScmAdapter, SystemRunner};

/// Entry point computing the version of a project from its SCM
pub struct VersionService {
    registries: Registries,
    runner: Arc<dyn CommandRunner>,
}

impl VersionService {
    pub fn new(registries: Registries, runner: Arc<dyn CommandRunner>) -> Self {
        VersionService { registries, runner }
    }

    /// Built-in registries, commands run as child processes
    pub fn standard() -> Self {
        Self::new(Registries::standard(), Arc::new(SystemRunner))
    }

    pub fn registries(&self) -> &Registries {
        &self.registries
    }

    /// Compute the version information of a project.
    ///
    /// The SCM and every strategy key are resolved before the SCM is read.
    ///
    /// # Returns
    /// * `Ok(VersionInfo::none())` - If the project has no metadata for the SCM
    /// * `Ok(VersionInfo)` - The computed version; dirtiness is reported, not enforced
    /// * `Err` - On an unknown configuration key, adapter failure or tag parse error
    pub fn compute_version_info(
        &self,
        project: &ProjectContext,
        config: &VersioningConfig,
    ) -> Result<VersionInfo> {
        let kind = self.registries.scm.resolve(&config.scm)?;
        let adapter = kind.adapter(self.runner.clone());
        self.compute_with(adapter.as_ref(), project, config)
    }

    /// Same as [`compute_version_info`](Self::compute_version_info) with a given adapter
    pub fn compute_with(
        &self,
        adapter: &dyn ScmAdapter,
        project: &ProjectContext,
        config: &VersioningConfig,
    ) -> Result<VersionInfo> {
        let engine = VersionEngine::new(self.registries.bind(config)?);
        tracing::debug!(scm = adapter.name(), root = %project.root().display(), "reading SCM info");
        let scm_info = adapter.info(project, config)?;
        engine.compute(&scm_info, config, adapter.branch_separator(), |base| {
            adapter.base_tags(project, config, base)
        })
    }
}

impl Default for VersionService {
    fn default() -> Self {
        Self::standard()
    }
}
