//! Main workflow orchestration logic
//!
//! Separates CLI argument parsing from the work itself so the workflow can
//! be driven programmatically without depending on clap.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::config::{load_config, VersioningConfig};
use crate::dirty::apply_dirty_policy;
use crate::domain::version_info::DEFAULT_PREFIX;
use crate::domain::VersionInfo;
use crate::scm::ProjectContext;
use crate::service::VersionService;
use crate::ui::{self, OutputFormat};

/// Arguments for the version workflow
#[derive(Debug, Clone, PartialEq)]
pub struct VersionWorkflowArgs {
    /// Root directory of the project
    pub project: PathBuf,

    /// Path to custom config file
    pub config_path: Option<PathBuf>,

    /// Overrides for the configured registry keys
    pub scm: Option<String>,
    pub display_mode: Option<String>,
    pub release_mode: Option<String>,

    pub format: OutputFormat,

    /// Prefix of variables in the properties format
    pub prefix: String,

    /// Write the rendering to this file instead of returning it for stdout
    pub output: Option<PathBuf>,
}

impl Default for VersionWorkflowArgs {
    fn default() -> Self {
        VersionWorkflowArgs {
            project: PathBuf::from("."),
            config_path: None,
            scm: None,
            display_mode: None,
            release_mode: None,
            format: OutputFormat::default(),
            prefix: DEFAULT_PREFIX.to_string(),
            output: None,
        }
    }
}

/// Result of a successful workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The computed version, dirty policy applied
    pub info: VersionInfo,

    /// The rendered output
    pub rendered: String,

    /// Whether the rendering was written to a file
    pub written: bool,
}

/// Load the configuration and apply command line overrides
pub fn resolve_config(args: &VersionWorkflowArgs) -> Result<VersioningConfig> {
    let mut config = load_config(args.config_path.as_deref(), &args.project)?;
    if let Some(scm) = &args.scm {
        config.scm = scm.clone();
    }
    if let Some(mode) = &args.display_mode {
        config.display_mode = mode.clone();
    }
    if let Some(mode) = &args.release_mode {
        config.release_mode = mode.clone();
    }
    Ok(config)
}

/// Compute, apply the dirty policy, render and optionally write the version
pub fn run_workflow(args: &VersionWorkflowArgs, service: &VersionService) -> Result<WorkflowResult> {
    let config = resolve_config(args)?;
    let project = ProjectContext::new(&args.project);

    let info = service
        .compute_version_info(&project, &config)
        .with_context(|| format!("Cannot compute version of {}", args.project.display()))?;

    if info.is_none() {
        ui::display_warning(&format!(
            "No {} information found in {}",
            config.scm,
            args.project.display()
        ));
    }

    let info = apply_dirty_policy(info, &config)?;

    let rendered = ui::render(&info, args.format, &args.prefix)?;

    let written = if let Some(path) = &args.output {
        fs::write(path, &rendered)
            .with_context(|| format!("Cannot write version file {}", path.display()))?;
        ui::display_success(&format!("Version written to {}", path.display()));
        true
    } else {
        false
    };

    Ok(WorkflowResult {
        info,
        rendered,
        written,
    })
}
