use crate::config::VersioningConfig;

/// Version facts of a non-release branch, as handed to a [`DisplayMode`]
#[derive(Debug, Clone, Copy)]
pub struct BranchVersion<'a> {
    pub branch_type: &'a str,
    pub branch_id: &'a str,
    /// Branch base; the engine substitutes the branch id when the base is blank
    pub base: &'a str,
    pub abbreviated: &'a str,
    pub full: &'a str,
}

/// Rendering of the display version for branches outside the release set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// The full version unchanged
    Full,
    /// The branch base alone
    Base,
    /// The branch base followed by the snapshot suffix
    Snapshot,
}

impl DisplayMode {
    pub fn render(&self, version: &BranchVersion<'_>, config: &VersioningConfig) -> String {
        match self {
            DisplayMode::Full => version.full.to_string(),
            DisplayMode::Base => version.base.to_string(),
            DisplayMode::Snapshot => format!("{}{}", version.base, config.snapshot_suffix),
        }
    }
}
