//! Tests for the configuration loader pipeline.
//!
//! Responsibilities:
//! - Test builder methods and their accessors.
//! - Test base and environment file layering.
//! - Test precedence across files, environment variables and arguments.
//! - Test projection of the merged overlay, including failure stages.
//!
//! Does NOT handle:
//! - Per-source parsing details (tested next to file.rs, env.rs and args.rs).
//!
//! Invariants:
//! - Every test uses its own temporary config directory via `tempfile`.
//! - No test reads the process environment or arguments.

use serde::Deserialize;
use std::path::Path;

pub mod env_tests;

/// Schema shared by the loader tests.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestConfig {
    #[serde(rename = "databaseURL")]
    pub database_url: String,
    pub port: i64,
    #[serde(rename = "debugMode")]
    pub debug_mode: bool,
    pub timeout: f64,
    pub name: String,
}

/// Writes `content` to `file_name` inside `dir`.
pub fn write_config(dir: &Path, file_name: &str, content: &str) {
    std::fs::write(dir.join(file_name), content).unwrap();
}
