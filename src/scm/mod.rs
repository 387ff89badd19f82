//! SCM adapters
//!
//! This module provides a trait-based abstraction over the source-control
//! systems version facts are read from, allowing the engine to stay
//! independent of git, svn and the way their data is obtained.
//!
//! # Overview
//!
//! The primary abstraction is the [ScmAdapter] trait. The implementations are:
//!
//! - [git::GitAdapter]: reads a git repository through the `git2` crate
//! - [svn::SvnAdapter]: runs the `svn` client and parses its XML output
//! - [mock::MockScm]: fixed answers for testing
//!
//! Adapters are selected by name through [ScmKind], registered in
//! [crate::registry::Registries].

pub mod git;
pub mod mock;
pub mod process;
pub mod svn;

pub use git::GitAdapter;
pub use mock::MockScm;
pub use process::{CommandRunner, SystemRunner};
pub use svn::SvnAdapter;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::VersioningConfig;
use crate::domain::ScmInfo;
use crate::error::Result;

/// The project a version is computed for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    root: PathBuf,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProjectContext { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file relative to the project root
    pub fn file(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn has_file(&self, relative: &str) -> bool {
        self.file(relative).exists()
    }
}

/// Source of SCM facts for a project
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync`; adapters hold no per-call state.
///
/// ## Error Handling
///
/// Adapter errors are returned as-is and travel unchanged through the engine.
pub trait ScmAdapter: Send + Sync {
    /// Registry name of the SCM (e.g. "git")
    fn name(&self) -> &'static str;

    /// Read the facts of the working copy
    ///
    /// # Returns
    /// * `Ok(ScmInfo::none())` - If the project is not under this SCM
    /// * `Ok(ScmInfo)` - The branch, commit, exact tag and dirty state
    /// * `Err` - If the SCM data cannot be read
    fn info(&self, project: &ProjectContext, config: &VersioningConfig) -> Result<ScmInfo>;

    /// Tags of the form `<base>.<N>`, most recent first
    fn base_tags(
        &self,
        project: &ProjectContext,
        config: &VersioningConfig,
        base: &str,
    ) -> Result<Vec<String>>;

    /// Separator between the branch type and the base in branch names
    fn branch_separator(&self) -> &'static str;
}

/// Closed set of supported source-control systems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScmKind {
    Git,
    Svn,
}

impl ScmKind {
    /// Create the adapter for this SCM; `runner` executes external commands
    pub fn adapter(&self, runner: Arc<dyn CommandRunner>) -> Box<dyn ScmAdapter> {
        match self {
            ScmKind::Git => Box::new(GitAdapter::new()),
            ScmKind::Svn => Box::new(SvnAdapter::new(runner)),
        }
    }
}
