use serde::Serialize;
use std::collections::BTreeMap;

/// Default prefix of the exported version variables
pub const DEFAULT_PREFIX: &str = "VERSION_";

/// Computed version information for a working copy
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VersionInfo {
    pub scm: String,
    pub branch: String,
    pub branch_type: String,
    pub branch_id: String,
    pub commit: String,
    pub display: String,
    pub full: String,
    pub base: String,
    pub abbreviated: String,
    /// Exact tag at HEAD, blank if none
    pub tag: String,
    /// Last tag of the release sequence, blank outside release branches
    pub last_tag: String,
    pub dirty: bool,
}

impl VersionInfo {
    /// The sentinel for a working copy without SCM metadata; every field is blank
    pub fn none() -> Self {
        VersionInfo::default()
    }

    pub fn is_none(&self) -> bool {
        *self == VersionInfo::none()
    }

    /// Maps the fields to `<prefix><NAME>` variables for build-time substitution
    pub fn to_env_vars(&self, prefix: &str) -> BTreeMap<String, String> {
        let fields = [
            ("BUILD", self.abbreviated.clone()),
            ("BRANCH", self.branch.clone()),
            ("BASE", self.base.clone()),
            ("BRANCHID", self.branch_id.clone()),
            ("BRANCHTYPE", self.branch_type.clone()),
            ("COMMIT", self.commit.clone()),
            ("DISPLAY", self.display.clone()),
            ("FULL", self.full.clone()),
            ("SCM", self.scm.clone()),
            ("TAG", self.tag.clone()),
            ("LAST_TAG", self.last_tag.clone()),
            ("DIRTY", self.dirty.to_string()),
        ];

        fields
            .into_iter()
            .map(|(name, value)| (format!("{}{}", prefix, name), value))
            .collect()
    }
}
