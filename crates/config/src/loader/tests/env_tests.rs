//! Environment variable tests for the loader.
//!
//! Responsibilities:
//! - Test environment entries projected into the schema.
//! - Test that names are only case-folded, never otherwise normalized.

use tempfile::TempDir;

use super::TestConfig;
use crate::loader::builder::ConfigLoader;

#[test]
fn test_env_vars_full_integration() {
    let temp_dir = TempDir::new().unwrap();

    let config: TestConfig = ConfigLoader::new()
        .with_config_dir(temp_dir.path())
        .with_env_vars([
            "PORT=3000",
            "DATABASEURL=postgres://localhost/env-test",
            "DEBUGMODE=true",
            "TIMEOUT=25.5",
            "NAME=env-test-app",
        ])
        .load()
        .unwrap();

    assert_eq!(
        config,
        TestConfig {
            database_url: "postgres://localhost/env-test".to_string(),
            port: 3000,
            debug_mode: true,
            timeout: 25.5,
            name: "env-test-app".to_string(),
        }
    );
}

#[test]
fn test_env_var_underscores_not_stripped() {
    let temp_dir = TempDir::new().unwrap();

    let config: TestConfig = ConfigLoader::new()
        .with_config_dir(temp_dir.path())
        .with_env_vars([
            "PORT=3000",
            "DATABASE_URL=postgres://localhost/should-ignore",
            "DEBUG_MODE=true",
            "TIMEOUT=25.5",
        ])
        .load()
        .unwrap();

    assert_eq!(
        config,
        TestConfig {
            database_url: String::new(),
            port: 3000,
            debug_mode: false,
            timeout: 25.5,
            name: String::new(),
        }
    );
}

#[test]
fn test_env_var_without_separator_ignored() {
    let temp_dir = TempDir::new().unwrap();

    let overlay = ConfigLoader::new()
        .with_config_dir(temp_dir.path())
        .with_env_vars(["PORT", "NAME=app"])
        .load_overlay()
        .unwrap();

    assert_eq!(overlay.len(), 1);
    assert!(overlay.contains_key("name"));
    assert!(!overlay.contains_key("port"));
}

#[test]
fn test_integer_env_var_into_float_field() {
    let temp_dir = TempDir::new().unwrap();

    let config: TestConfig = ConfigLoader::new()
        .with_config_dir(temp_dir.path())
        .with_env_vars(["TIMEOUT=30"])
        .load()
        .unwrap();

    assert_eq!(config.timeout, 30.0);
}
