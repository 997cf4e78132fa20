//! Layered application settings.
//!
//! This crate merges a base `config.json`, an optional `config.<environment>.json`,
//! `NAME=VALUE` environment entries and `--key value` arguments into one untyped
//! overlay, then projects the overlay into a caller-chosen serde type.
//!
//! ```rust,ignore
//! #[derive(serde::Deserialize, Default)]
//! #[serde(default)]
//! struct Settings {
//!     port: u16,
//!     #[serde(rename = "databaseURL")]
//!     database_url: String,
//! }
//!
//! let settings: Settings = ConfigLoader::new()
//!     .with_config_dir("/etc/myapp")
//!     .with_environment("prod")
//!     .with_env_vars(std::env::vars().map(|(k, v)| format!("{k}={v}")))
//!     .with_args(std::env::args().skip(1))
//!     .load()?;
//! ```

pub mod constants;
mod loader;

pub use loader::{ConfigError, ConfigLoader, LoadError, LoadStage, Overlay, infer_value};
