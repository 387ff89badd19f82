use crate::config::VersioningConfig;

/// Rendering of the display version for release branches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMode {
    /// Always the next tag of the sequence
    Tag,
    /// The exact tag at HEAD when there is one, otherwise the next tag with
    /// the snapshot suffix
    Snapshot,
}

impl ReleaseMode {
    pub fn render(
        &self,
        next_tag: &str,
        _last_tag: &str,
        current_tag: &str,
        config: &VersioningConfig,
    ) -> String {
        match self {
            ReleaseMode::Tag => next_tag.to_string(),
            ReleaseMode::Snapshot => {
                if current_tag.trim().is_empty() {
                    format!("{}{}", next_tag, config.snapshot_suffix)
                } else {
                    current_tag.to_string()
                }
            }
        }
    }
}
