//! Shared test utilities for appsettings CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Write config files into temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;
use std::path::Path;

/// Returns a hermetic `appsettings` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `APPSETTINGS_*` variables from the host are cleared.
pub fn appsettings_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("appsettings");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    cmd.env_remove("APPSETTINGS_CONFIG_DIR")
        .env_remove("APPSETTINGS_ENVIRONMENT")
        .env_remove("RUST_LOG");

    cmd
}

/// Writes `content` to `file_name` inside `dir`.
pub fn write_config(dir: &Path, file_name: &str, content: &str) {
    std::fs::write(dir.join(file_name), content).expect("write config file");
}
