//! Environment variable overlay.
//!
//! Responsibilities:
//! - Turn caller-supplied `NAME=VALUE` entries into overlay keys.
//!
//! Does NOT handle:
//! - Reading the process environment (the caller passes the entries).
//! - Mapping underscores or hyphens to schema names.
//!
//! Invariants:
//! - Entries without `=` are skipped entirely.
//! - The key is the lower-cased name; nothing else is normalized.
//! - The value is split at the first `=` and passed through `infer_value`.

use super::error::ConfigError;
use super::infer::infer_value;
use super::overlay::Overlay;
use crate::constants::ENV_SEPARATOR;

/// Apply `NAME=VALUE` entries to the overlay. Later entries win.
pub(crate) fn apply_env_vars<S: AsRef<str>>(
    entries: &[S],
    overlay: &mut Overlay,
) -> Result<(), ConfigError> {
    let mut applied = 0usize;
    for entry in entries {
        let Some((name, value)) = entry.as_ref().split_once(ENV_SEPARATOR) else {
            continue;
        };
        overlay.insert(name.to_lowercase(), infer_value(value));
        applied += 1;
    }

    tracing::debug!(
        applied,
        skipped = entries.len() - applied,
        "Applied environment variables"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_apply_env_vars() {
        let entries = [
            "PORT=8080",
            "DATABASEURL=postgres://localhost/test",
            "DEBUGMODE=true",
            "TIMEOUT=30.5",
            "NAME=test-app",
            "INVALID_VAR",
            "ANOTHER=INVALID",
        ];

        let mut overlay = Overlay::new();
        apply_env_vars(&entries, &mut overlay).unwrap();

        assert_eq!(overlay.len(), 6);
        assert_eq!(overlay.get("port"), Some(&json!(8080)));
        assert_eq!(
            overlay.get("databaseurl"),
            Some(&json!("postgres://localhost/test"))
        );
        assert_eq!(overlay.get("debugmode"), Some(&json!(true)));
        assert_eq!(overlay.get("timeout"), Some(&json!(30.5)));
        assert_eq!(overlay.get("name"), Some(&json!("test-app")));
        assert_eq!(overlay.get("another"), Some(&json!("INVALID")));
        assert!(!overlay.contains_key("invalid_var"));
    }

    #[test]
    fn test_value_split_at_first_separator() {
        let mut overlay = Overlay::new();
        apply_env_vars(&["QUERY=a=b=c", "EMPTY="], &mut overlay).unwrap();

        assert_eq!(overlay.get("query"), Some(&json!("a=b=c")));
        assert_eq!(overlay.get("empty"), Some(&json!("")));
    }

    #[test]
    fn test_underscores_and_hyphens_preserved() {
        let mut overlay = Overlay::new();
        apply_env_vars(&["DATABASE_URL=x", "Debug-Mode=1"], &mut overlay).unwrap();

        assert_eq!(overlay.get("database_url"), Some(&json!("x")));
        assert_eq!(overlay.get("debug-mode"), Some(&json!(true)));
    }

    #[test]
    fn test_no_entries_leaves_overlay_empty() {
        let mut overlay = Overlay::new();
        apply_env_vars::<String>(&[], &mut overlay).unwrap();
        assert!(overlay.is_empty());
    }
}
