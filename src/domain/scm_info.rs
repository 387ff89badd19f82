/// Raw facts read from the source-control system for the current working copy.
///
/// A blank `branch` means no SCM metadata was found; see [`ScmInfo::is_empty`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScmInfo {
    pub branch: String,
    pub commit: String,
    pub abbreviated: String,
    /// Tag pointing exactly at the current commit, if any
    pub tag: Option<String>,
    pub dirty: bool,
}

impl ScmInfo {
    pub fn new(
        branch: impl Into<String>,
        commit: impl Into<String>,
        abbreviated: impl Into<String>,
        tag: Option<String>,
        dirty: bool,
    ) -> Self {
        ScmInfo {
            branch: branch.into(),
            commit: commit.into(),
            abbreviated: abbreviated.into(),
            tag,
            dirty,
        }
    }

    /// The "no SCM metadata available" sentinel
    pub fn none() -> Self {
        ScmInfo::default()
    }

    pub fn is_empty(&self) -> bool {
        self.branch.trim().is_empty()
    }

    /// The exact tag at HEAD, or an empty string
    pub fn current_tag(&self) -> &str {
        self.tag.as_deref().unwrap_or("")
    }
}
