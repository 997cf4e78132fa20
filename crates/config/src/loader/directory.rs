//! Config directory resolution.
//!
//! Responsibilities:
//! - Return the explicit config directory override verbatim.
//! - Otherwise fall back to the directory containing the running executable.
//!
//! Does NOT handle:
//! - Checking that the directory exists (a missing directory just yields missing files).

use std::path::{Path, PathBuf};

use super::error::ConfigError;

/// Resolve the directory that holds `config.json` and `config.<environment>.json`.
pub(crate) fn resolve_config_dir(config_dir: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match config_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => executable_dir(),
    }
}

/// Directory containing the currently running executable.
pub(crate) fn executable_dir() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe()
        .map_err(|source| ConfigError::DirectoryUnavailable { source })?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ConfigError::DirectoryUnavailable {
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("executable path {} has no parent directory", exe.display()),
            ),
        })
}
