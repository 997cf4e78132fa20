//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every stage failure (directory, read, parse, projection).
//! - Wrap stage failures with the name of the stage that produced them.
//!
//! Does NOT handle:
//! - Mapping errors to process exit codes (see the host CLI).
//!
//! Invariants:
//! - Errors carry paths and underlying causes, never file contents or variable values.
//! - A missing config file never produces an error.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by an individual loader stage.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The fallback config directory (the executable's directory) could not be determined.
    #[error("Unable to determine config directory: {source}")]
    DirectoryUnavailable {
        #[source]
        source: std::io::Error,
    },

    /// The config file exists but could not be read (permissions, a directory, ...).
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not a JSON object.
    #[error("Failed to parse config file at {path}: {source}")]
    FileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The merged overlay does not fit the target type.
    #[error("Failed to project configuration into target type: {source}")]
    Projection {
        #[source]
        source: serde_json::Error,
    },
}

/// Pipeline stage in which a load failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStage {
    ResolveDirectory,
    BaseFile,
    EnvironmentFile,
    EnvVars,
    Args,
    Projection,
}

impl LoadStage {
    fn description(self) -> &'static str {
        match self {
            LoadStage::ResolveDirectory => "resolve config directory",
            LoadStage::BaseFile => "load base config",
            LoadStage::EnvironmentFile => "load environment config",
            LoadStage::EnvVars => "apply environment variables",
            LoadStage::Args => "apply arguments",
            LoadStage::Projection => "project config",
        }
    }
}

impl fmt::Display for LoadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A stage failure together with the stage that produced it.
#[derive(Error, Debug)]
#[error("failed to {stage}: {source}")]
pub struct LoadError {
    pub stage: LoadStage,
    #[source]
    pub source: ConfigError,
}

impl LoadError {
    pub(crate) fn new(stage: LoadStage, source: ConfigError) -> Self {
        Self { stage, source }
    }

    /// The underlying stage error.
    pub fn kind(&self) -> &ConfigError {
        &self.source
    }
}

/// Attaches a stage to a stage-level result.
pub(crate) trait StageContext<T> {
    fn stage(self, stage: LoadStage) -> Result<T, LoadError>;
}

impl<T> StageContext<T> for Result<T, ConfigError> {
    fn stage(self, stage: LoadStage) -> Result<T, LoadError> {
        self.map_err(|source| LoadError::new(stage, source))
    }
}
