//! Config file loading.
//!
//! Responsibilities:
//! - Read a JSON config file and merge its top-level keys into the overlay.
//! - Treat a missing file as an empty layer.
//!
//! Does NOT handle:
//! - Type inference (file values keep their JSON types).
//! - Deciding which files to load (see builder.rs).
//!
//! Invariants:
//! - The top level must be a JSON object; arrays and scalars are parse errors.
//! - On any error the overlay is left untouched.

use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;

use super::error::ConfigError;
use super::overlay::Overlay;

/// Merge the JSON object at `path` into `overlay`.
///
/// Returns `Ok(false)` without touching the overlay when the file does not exist,
/// `Ok(true)` once its keys have been merged.
pub(crate) fn apply_file(path: &Path, overlay: &mut Overlay) -> Result<bool, ConfigError> {
    let content = match std::fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::trace!(path = %path.display(), "Config file not found, skipping");
            return Ok(false);
        }
        Err(source) => {
            return Err(ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let object: Map<String, Value> =
        serde_json::from_slice(&content).map_err(|source| ConfigError::FileParse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), keys = object.len(), "Loaded config file");
    overlay.extend_from(object);
    Ok(true)
}
