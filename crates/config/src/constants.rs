//! Centralized constants for the settings loader.
//!
//! File names and token syntax shared by the loader stages and the host CLI.

// =============================================================================
// Config Files
// =============================================================================

/// Name of the base config file, always attempted first.
pub const BASE_CONFIG_FILE: &str = "config.json";

/// Prefix of an environment-specific config file (`config.<environment>.json`).
pub const ENV_CONFIG_FILE_PREFIX: &str = "config.";

/// Extension of every config file.
pub const CONFIG_FILE_EXTENSION: &str = "json";

// =============================================================================
// Source Syntax
// =============================================================================

/// Prefix marking a flag token in the argument list.
pub const FLAG_PREFIX: &str = "--";

/// Separator between name and value in an environment entry.
pub const ENV_SEPARATOR: char = '=';

/// Returns the file name of the config file for `environment`.
pub fn env_config_file_name(environment: &str) -> String {
    format!("{ENV_CONFIG_FILE_PREFIX}{environment}.{CONFIG_FILE_EXTENSION}")
}
