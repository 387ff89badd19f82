//! Pure rendering of version information.

use std::fmt::Write;

use crate::domain::VersionInfo;
use crate::error::{Result, VersioningError};

/// How a computed version is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// The display version alone
    #[default]
    Display,
    /// `KEY=value` lines, one per variable
    Properties,
    /// The whole `VersionInfo` as a TOML table
    Toml,
}

/// Render version information in the given format.
///
/// # Arguments
/// * `info` - The version to render
/// * `format` - Output format
/// * `prefix` - Variable prefix for the properties format
pub fn render(info: &VersionInfo, format: OutputFormat, prefix: &str) -> Result<String> {
    match format {
        OutputFormat::Display => Ok(format!("{}\n", info.display)),
        OutputFormat::Properties => {
            let mut out = String::new();
            for (key, value) in info.to_env_vars(prefix) {
                // Writing into a String cannot fail
                let _ = writeln!(out, "{}={}", key, value);
            }
            Ok(out)
        }
        OutputFormat::Toml => toml::to_string(info)
            .map_err(|e| VersioningError::config(format!("Cannot serialize version: {}", e))),
    }
}
