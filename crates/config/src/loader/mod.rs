//! Layered configuration loader.
//!
//! Responsibilities:
//! - Resolve the config directory (explicit override, else the executable's directory).
//! - Merge `config.json` and `config.<environment>.json` into an untyped overlay.
//! - Overlay `NAME=VALUE` environment entries and `--key value` arguments, inferring
//!   scalar types from their string values.
//! - Project the merged overlay into the caller's serde type.
//!
//! Does NOT handle:
//! - Capturing the process arguments or environment (the caller supplies them).
//! - Nested-path overrides from variables or arguments (they set top-level keys only).
//! - Validation beyond what deserialization rejects.
//!
//! Invariants / Assumptions:
//! - Priority is fixed: arguments > environment variables > environment file > base file.
//! - Each stage only adds or replaces keys; no stage removes a key.
//! - Missing config files are not errors; unreadable or malformed ones abort the load.
//! - No partial result is returned alongside an error.

mod args;
mod builder;
mod directory;
mod env;
mod error;
mod file;
mod infer;
mod overlay;
mod project;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use error::{ConfigError, LoadError, LoadStage};
pub use infer::infer_value;
pub use overlay::Overlay;
