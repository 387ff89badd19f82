use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use scm_version::cli::{run_workflow, VersionWorkflowArgs};
use scm_version::domain::version_info::DEFAULT_PREFIX;
use scm_version::ui::{self, OutputFormat};
use scm_version::{logging, VersionService};

#[derive(clap::Parser)]
#[command(
    name = "scm-version",
    version,
    about = "Compute version information from git or svn metadata"
)]
struct Args {
    #[arg(short, long, default_value = ".", help = "Project root directory")]
    project: PathBuf,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "SCM to read (git, svn)")]
    scm: Option<String>,

    #[arg(long, help = "Display mode for non-release branches (full, base, snapshot)")]
    display_mode: Option<String>,

    #[arg(long, help = "Release mode for release branches (tag, snapshot)")]
    release_mode: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Display, help = "Output format")]
    format: OutputFormat,

    #[arg(long, default_value = DEFAULT_PREFIX, help = "Variable prefix for the properties format")]
    prefix: String,

    #[arg(short, long, help = "Write the output to a file")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Verbose logging")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let workflow_args = VersionWorkflowArgs {
        project: args.project,
        config_path: args.config,
        scm: args.scm,
        display_mode: args.display_mode,
        release_mode: args.release_mode,
        format: args.format,
        prefix: args.prefix,
        output: args.output,
    };

    let result = run_workflow(&workflow_args, &VersionService::standard())?;
    if !result.written {
        print!("{}", result.rendered);
    }
    Ok(())
}
