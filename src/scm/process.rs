use std::path::Path;
use std::process::Command;

use crate::error::{Result, VersioningError};

/// Runs external commands on behalf of adapters
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` in `dir` and return its trimmed stdout
    ///
    /// # Returns
    /// * `Ok(String)` - Trimmed standard output if the command exits with 0
    /// * `Err(Process)` - If the command exits with any other code
    /// * `Err(Io)` - If the command cannot be started
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<String>;
}

/// Runs commands as child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, dir: &Path, program: &str, args: &[String]) -> Result<String> {
        tracing::trace!(program, ?dir, "running command");
        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| {
                VersioningError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Error while executing {} command: {}", program, e),
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VersioningError::process(
                program,
                output.status.code(),
                stderr.trim(),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
