use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::VersioningConfig;
use crate::domain::ScmInfo;
use crate::error::Result;
use crate::scm::{ProjectContext, ScmAdapter};

/// Mock adapter for testing without any SCM on disk
pub struct MockScm {
    info: ScmInfo,
    separator: &'static str,
    tags: HashMap<String, Vec<String>>,
    lookups: Mutex<Vec<String>>,
}

impl MockScm {
    /// Create a mock answering `info` with a git-style `/` separator
    pub fn new(info: ScmInfo) -> Self {
        MockScm {
            info,
            separator: "/",
            tags: HashMap::new(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn with_separator(mut self, separator: &'static str) -> Self {
        self.separator = separator;
        self
    }

    /// Set the tags returned for a base, most recent first
    pub fn with_tags(mut self, base: impl Into<String>, tags: &[&str]) -> Self {
        self.tags
            .insert(base.into(), tags.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Bases the tags were looked up for, in call order
    pub fn lookups(&self) -> Vec<String> {
        self.lookups
            .lock()
            .map(|lookups| lookups.clone())
            .unwrap_or_default()
    }
}

impl ScmAdapter for MockScm {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn info(&self, _project: &ProjectContext, _config: &VersioningConfig) -> Result<ScmInfo> {
        Ok(self.info.clone())
    }

    fn base_tags(
        &self,
        _project: &ProjectContext,
        _config: &VersioningConfig,
        base: &str,
    ) -> Result<Vec<String>> {
        if let Ok(mut lookups) = self.lookups.lock() {
            lookups.push(base.to_string());
        }
        Ok(self.tags.get(base).cloned().unwrap_or_default())
    }

    fn branch_separator(&self) -> &'static str {
        self.separator
    }
}
