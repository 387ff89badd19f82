//! User interface module - styled status output and version rendering.
//!
//! Separates concerns:
//! - `formatter` - Pure rendering of a `VersionInfo` to text
//! - This module - Styled messages written to the terminal

use console::style;

pub mod formatter;

pub use formatter::{render, OutputFormat};

/// Print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a warning in yellow on stderr.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), message);
}

/// Print a success message with a green checkmark on stderr.
///
/// Status lines go to stderr; stdout is reserved for the rendered version.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}
