//! The version computation pipeline.
//!
//! Pure over its inputs: the only call out is the tag lookup, which is
//! invoked once and only for release branches.

use crate::config::VersioningConfig;
use crate::domain::{normalize, next_tag, BranchVersion, ScmInfo, VersionInfo};
use crate::error::Result;
use crate::registry::Strategies;

/// Turns SCM facts into a [`VersionInfo`] using a bound set of strategies
#[derive(Debug, Clone, Copy)]
pub struct VersionEngine {
    strategies: Strategies,
}

impl VersionEngine {
    pub fn new(strategies: Strategies) -> Self {
        VersionEngine { strategies }
    }

    /// Compute the version information of a working copy.
    ///
    /// # Arguments
    /// * `scm_info` - Facts read by the SCM adapter
    /// * `config` - Release set and suffixes
    /// * `separator` - Branch type separator of the SCM in use
    /// * `tags_lookup` - Returns the `base.N` tags of a base, most recent first
    ///
    /// # Returns
    /// * `Ok(VersionInfo::none())` - If `scm_info` is empty
    /// * `Ok(VersionInfo)` - The computed version
    /// * `Err` - If the tag lookup fails or its most recent tag cannot be parsed
    pub fn compute<F>(
        &self,
        scm_info: &ScmInfo,
        config: &VersioningConfig,
        separator: &str,
        tags_lookup: F,
    ) -> Result<VersionInfo>
    where
        F: FnOnce(&str) -> Result<Vec<String>>,
    {
        if scm_info.is_empty() {
            tracing::debug!("no SCM information, version is empty");
            return Ok(VersionInfo::none());
        }

        let branch_info = self.strategies.branch_parser.parse(&scm_info.branch, separator);
        let branch_id = normalize(&scm_info.branch);
        let full = self
            .strategies
            .full_version_builder
            .build(&branch_id, &scm_info.abbreviated);

        let (display, last_tag) = if config.is_release(&branch_info.branch_type) {
            let tags = tags_lookup(&branch_info.base)?;
            tracing::debug!(base = %branch_info.base, candidates = tags.len(), "release branch tags");
            let sequence = next_tag(&branch_info.base, &tags)?;
            let display = self.strategies.release_mode.render(
                &sequence.next_tag,
                &sequence.last_tag,
                scm_info.current_tag(),
                config,
            );
            (display, sequence.last_tag)
        } else {
            let base = if branch_info.base.trim().is_empty() {
                branch_id.as_str()
            } else {
                branch_info.base.as_str()
            };
            let version = BranchVersion {
                branch_type: &branch_info.branch_type,
                branch_id: &branch_id,
                base,
                abbreviated: &scm_info.abbreviated,
                full: &full,
            };
            (self.strategies.display_mode.render(&version, config), String::new())
        };

        Ok(VersionInfo {
            scm: config.scm.clone(),
            branch: scm_info.branch.clone(),
            branch_type: branch_info.branch_type,
            branch_id,
            commit: scm_info.commit.clone(),
            display,
            full,
            base: branch_info.base,
            abbreviated: scm_info.abbreviated.clone(),
            tag: scm_info.current_tag().to_string(),
            last_tag,
            dirty: scm_info.dirty,
        })
    }
}
