//! Dirty working copy policy, applied by callers around the engine.

use crate::config::VersioningConfig;
use crate::domain::VersionInfo;
use crate::error::{Result, VersioningError};

/// Apply the configured dirty policy to a computed version.
///
/// - clean working copy: unchanged
/// - dirty release branch with `dirty_fail_on_releases`: [`VersioningError::Dirty`]
/// - otherwise: warns (unless `no_warning_on_dirty`) and appends `dirty_suffix`
///   to both the display and the full version
pub fn apply_dirty_policy(mut info: VersionInfo, config: &VersioningConfig) -> Result<VersionInfo> {
    if !info.dirty {
        return Ok(info);
    }

    if config.dirty_fail_on_releases && config.is_release(&info.branch_type) {
        return Err(VersioningError::Dirty);
    }

    if !config.no_warning_on_dirty {
        tracing::warn!(
            branch = %info.branch,
            "dirty working copy, version suffixed with '{}'",
            config.dirty_suffix
        );
    }

    info.display.push_str(&config.dirty_suffix);
    info.full.push_str(&config.dirty_suffix);
    Ok(info)
}
