//! Named lookup tables from configuration keys to strategies.
//!
//! Registries are plain immutable maps built once and handed to whoever
//! binds a configuration; there is no global registry state.

use std::collections::BTreeMap;

use crate::config::VersioningConfig;
use crate::domain::{BranchParser, DisplayMode, FullVersionBuilder, ReleaseMode};
use crate::error::{Result, VersioningError};
use crate::scm::ScmKind;

/// Immutable map from a name to a strategy of one kind
#[derive(Debug, Clone)]
pub struct Registry<T> {
    kind: &'static str,
    entries: BTreeMap<&'static str, T>,
}

impl<T: Copy> Registry<T> {
    /// Create a registry; `kind` names the strategy family in error messages
    pub fn new(kind: &'static str, entries: impl IntoIterator<Item = (&'static str, T)>) -> Self {
        Registry {
            kind,
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up a strategy by name
    ///
    /// # Returns
    /// * `Ok(T)` - The registered strategy
    /// * `Err(StrategyNotFound)` - If no strategy is registered under `name`
    pub fn resolve(&self, name: &str) -> Result<T> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| VersioningError::StrategyNotFound {
                kind: self.kind,
                name: name.to_string(),
            })
    }
}

/// Strategies bound from a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategies {
    pub branch_parser: BranchParser,
    pub full_version_builder: FullVersionBuilder,
    pub display_mode: DisplayMode,
    pub release_mode: ReleaseMode,
}

/// The full set of registries
#[derive(Debug, Clone)]
pub struct Registries {
    pub scm: Registry<ScmKind>,
    pub branch_parsers: Registry<BranchParser>,
    pub full_version_builders: Registry<FullVersionBuilder>,
    pub display_modes: Registry<DisplayMode>,
    pub release_modes: Registry<ReleaseMode>,
}

impl Registries {
    /// The built-in, closed set of strategies
    pub fn standard() -> Self {
        Registries {
            scm: Registry::new(
                "SCM info service",
                [("git", ScmKind::Git), ("svn", ScmKind::Svn)],
            ),
            branch_parsers: Registry::new("branch parser", [("default", BranchParser::Default)]),
            full_version_builders: Registry::new(
                "full version builder",
                [("default", FullVersionBuilder::Default)],
            ),
            display_modes: Registry::new(
                "display mode",
                [
                    ("full", DisplayMode::Full),
                    ("base", DisplayMode::Base),
                    ("snapshot", DisplayMode::Snapshot),
                ],
            ),
            release_modes: Registry::new(
                "release mode",
                [("tag", ReleaseMode::Tag), ("snapshot", ReleaseMode::Snapshot)],
            ),
        }
    }

    /// Resolve every strategy key of the configuration.
    ///
    /// Fails on the first key that is not registered.
    pub fn bind(&self, config: &VersioningConfig) -> Result<Strategies> {
        Ok(Strategies {
            branch_parser: self.branch_parsers.resolve(&config.branch_parser)?,
            full_version_builder: self
                .full_version_builders
                .resolve(&config.full_version_builder)?,
            display_mode: self.display_modes.resolve(&config.display_mode)?,
            release_mode: self.release_modes.resolve(&config.release_mode)?,
        })
    }
}

impl Default for Registries {
    fn default() -> Self {
        Self::standard()
    }
}
