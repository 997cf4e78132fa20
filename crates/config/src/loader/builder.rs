//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` collecting the optional sources.
//! - Run the merge pipeline: base file, environment file, environment variables, arguments.
//! - Project the merged overlay into the caller's type.
//!
//! Does NOT handle:
//! - Parsing individual sources (delegated to file.rs, env.rs and args.rs).
//! - Key matching during projection (see project.rs).
//!
//! Invariants / Assumptions:
//! - Arguments take precedence over environment variables.
//! - Environment variables take precedence over the environment file.
//! - The environment file takes precedence over the base file.
//! - `load` never mutates the loader; a configured loader can be shared read-only.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use super::args::apply_args;
use super::directory::resolve_config_dir;
use super::env::apply_env_vars;
use super::error::{LoadError, LoadStage, StageContext};
use super::file::apply_file;
use super::overlay::Overlay;
use super::project::project;
use crate::constants::{BASE_CONFIG_FILE, env_config_file_name};

/// Configuration loader that merges config files, environment entries and arguments.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    args: Option<Vec<String>>,
    env_vars: Option<Vec<String>>,
    environment: Option<String>,
    config_dir: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with every source unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the argument tokens (`--key value`, `--flag`) to overlay last.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Set the `NAME=VALUE` environment entries to overlay after the config files.
    pub fn with_env_vars<I, S>(mut self, env_vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.env_vars = Some(env_vars.into_iter().map(Into::into).collect());
        self
    }

    /// Set the environment name (e.g. "dev", "prod") selecting `config.<name>.json`.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Set the directory holding the config files.
    ///
    /// Defaults to the directory of the running executable.
    pub fn with_config_dir(mut self, config_dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(config_dir.into());
        self
    }

    pub fn args(&self) -> Option<&[String]> {
        self.args.as_deref()
    }

    pub fn env_vars(&self) -> Option<&[String]> {
        self.env_vars.as_deref()
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    /// Load the configuration into `T`.
    ///
    /// Priority: arguments > environment variables > `config.<environment>.json` >
    /// `config.json`. Missing files are skipped; fields absent from every source
    /// are left to `T`'s serde defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] naming the failed stage if:
    /// - No config directory was set and the executable's directory is unknown.
    /// - A config file exists but cannot be read or is not a JSON object.
    /// - The merged values do not deserialize into `T`.
    pub fn load<T: DeserializeOwned>(&self) -> Result<T, LoadError> {
        let overlay = self.load_overlay()?;
        project(overlay).stage(LoadStage::Projection)
    }

    /// Run every merge stage and return the overlay without projecting it.
    pub fn load_overlay(&self) -> Result<Overlay, LoadError> {
        let mut overlay = Overlay::new();

        let config_dir =
            resolve_config_dir(self.config_dir()).stage(LoadStage::ResolveDirectory)?;
        tracing::debug!(config_dir = %config_dir.display(), "Resolved config directory");

        apply_file(&config_dir.join(BASE_CONFIG_FILE), &mut overlay).stage(LoadStage::BaseFile)?;

        if let Some(environment) = self.environment() {
            let path = config_dir.join(env_config_file_name(environment));
            apply_file(&path, &mut overlay).stage(LoadStage::EnvironmentFile)?;
        }

        if let Some(env_vars) = self.env_vars() {
            apply_env_vars(env_vars, &mut overlay).stage(LoadStage::EnvVars)?;
        }

        if let Some(args) = self.args() {
            apply_args(args, &mut overlay).stage(LoadStage::Args)?;
        }

        tracing::debug!(keys = overlay.len(), "Merged configuration overlay");
        Ok(overlay)
    }
}
