use thiserror::Error;

/// Unified error type for version computation
#[derive(Error, Debug)]
pub enum VersioningError {
    /// A configuration key did not resolve in its registry
    #[error("Cannot find {kind} with name: {name}")]
    StrategyNotFound { kind: &'static str, name: String },

    /// The most recent tag of a sequence is not of the `base.N` form
    #[error("Tag '{tag}' does not match the '{base}.N' sequence")]
    TagParse { base: String, tag: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command '{program}' failed with exit code {}: {stderr}", display_code(.code))]
    Process {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("XML error: {0}")]
    Xml(String),

    #[error("The SVN URL cannot be identified as a `trunk` or a branch: {0}")]
    SvnUrl(String),

    #[error("Dirty working copy - cannot compute version.")]
    Dirty,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Convenience type alias for Results in scm-version
pub type Result<T> = std::result::Result<T, VersioningError>;

impl VersioningError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersioningError::Config(msg.into())
    }

    /// Create an XML error with context
    pub fn xml(msg: impl Into<String>) -> Self {
        VersioningError::Xml(msg.into())
    }

    /// Create a process error for a command that exited unsuccessfully
    pub fn process(program: impl Into<String>, code: Option<i32>, stderr: impl Into<String>) -> Self {
        VersioningError::Process {
            program: program.into(),
            code,
            stderr: stderr.into(),
        }
    }

    pub fn tag_parse(base: impl Into<String>, tag: impl Into<String>) -> Self {
        VersioningError::TagParse {
            base: base.into(),
            tag: tag.into(),
        }
    }

    /// True for registry lookup failures
    pub fn is_resolution_error(&self) -> bool {
        matches!(self, VersioningError::StrategyNotFound { .. })
    }
}
