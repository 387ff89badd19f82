pub mod cli;
pub mod config;
pub mod dirty;
pub mod domain;
pub mod engine;
pub mod error;
pub mod logging;
pub mod registry;
pub mod scm;
pub mod service;
pub mod ui;

pub use config::VersioningConfig;
pub use domain::{ScmInfo, VersionInfo};
pub use engine::VersionEngine;
pub use error::{Result, VersioningError};
pub use service::VersionService;
