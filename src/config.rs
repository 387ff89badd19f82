use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Result, VersioningError};

/// File name looked up in the project root and in the user config directory
pub const CONFIG_FILE_NAME: &str = "versioning.toml";

/// Configuration of the version computation.
///
/// Strategy fields hold registry keys; they are resolved against the
/// registries before any computation starts.
#[derive(Deserialize, Clone, PartialEq)]
pub struct VersioningConfig {
    /// SCM to use - `git` by default
    #[serde(default = "default_scm")]
    pub scm: String,

    #[serde(default = "default_strategy")]
    pub branch_parser: String,

    #[serde(default = "default_strategy")]
    pub full_version_builder: String,

    /// Display mode for branches outside `releases`
    #[serde(default = "default_display_mode")]
    pub display_mode: String,

    /// Release mode for branches in `releases`
    #[serde(default = "default_release_mode")]
    pub release_mode: String,

    /// Branch types whose display version comes from the tag sequence
    #[serde(default = "default_releases")]
    pub releases: BTreeSet<String>,

    #[serde(default = "default_snapshot_suffix", alias = "snapshot")]
    pub snapshot_suffix: String,

    /// Suffix appended to the display and full versions of a dirty working copy
    #[serde(default = "default_dirty_suffix")]
    pub dirty_suffix: String,

    /// Fail when the working copy is dirty on a release branch
    #[serde(default)]
    pub dirty_fail_on_releases: bool,

    #[serde(default)]
    pub no_warning_on_dirty: bool,

    /// Credentials (svn only)
    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub password: String,

    /// Accept SSL certificates from unknown authorities (svn only)
    #[serde(default)]
    pub trust_server_cert: bool,
}

fn default_scm() -> String {
    "git".to_string()
}

fn default_strategy() -> String {
    "default".to_string()
}

fn default_display_mode() -> String {
    "full".to_string()
}

fn default_release_mode() -> String {
    "tag".to_string()
}

fn default_releases() -> BTreeSet<String> {
    BTreeSet::from(["release".to_string()])
}

fn default_snapshot_suffix() -> String {
    "-SNAPSHOT".to_string()
}

fn default_dirty_suffix() -> String {
    "-dirty".to_string()
}

impl Default for VersioningConfig {
    fn default() -> Self {
        VersioningConfig {
            scm: default_scm(),
            branch_parser: default_strategy(),
            full_version_builder: default_strategy(),
            display_mode: default_display_mode(),
            release_mode: default_release_mode(),
            releases: default_releases(),
            snapshot_suffix: default_snapshot_suffix(),
            dirty_suffix: default_dirty_suffix(),
            dirty_fail_on_releases: false,
            no_warning_on_dirty: false,
            user: String::new(),
            password: String::new(),
            trust_server_cert: false,
        }
    }
}

impl VersioningConfig {
    pub fn is_release(&self, branch_type: &str) -> bool {
        self.releases.contains(branch_type)
    }
}

impl fmt::Debug for VersioningConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            "***REDACTED***"
        };
        f.debug_struct("VersioningConfig")
            .field("scm", &self.scm)
            .field("branch_parser", &self.branch_parser)
            .field("full_version_builder", &self.full_version_builder)
            .field("display_mode", &self.display_mode)
            .field("release_mode", &self.release_mode)
            .field("releases", &self.releases)
            .field("snapshot_suffix", &self.snapshot_suffix)
            .field("dirty_suffix", &self.dirty_suffix)
            .field("dirty_fail_on_releases", &self.dirty_fail_on_releases)
            .field("no_warning_on_dirty", &self.no_warning_on_dirty)
            .field("user", &self.user)
            .field("password", &password)
            .field("trust_server_cert", &self.trust_server_cert)
            .finish()
    }
}

/// Parses a configuration from TOML text.
pub fn parse_config(content: &str) -> Result<VersioningConfig> {
    toml::from_str(content).map_err(|e| VersioningError::config(e.to_string()))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versioning.toml` in the project root
/// 3. `versioning.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(VersioningConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or if the custom
///   path does not exist
pub fn load_config(config_path: Option<&Path>, project_root: &Path) -> Result<VersioningConfig> {
    let candidate = if let Some(path) = config_path {
        Some(path.to_path_buf())
    } else if project_root.join(CONFIG_FILE_NAME).exists() {
        Some(project_root.join(CONFIG_FILE_NAME))
    } else {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    };

    let Some(path) = candidate else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(VersioningConfig::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let content = fs::read_to_string(&path).map_err(|e| {
        VersioningError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&content).map_err(|e| match e {
        VersioningError::Config(msg) => {
            VersioningError::config(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}
