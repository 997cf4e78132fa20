//! Command-line argument overlay.
//!
//! Responsibilities:
//! - Turn `--key value` pairs and bare `--flag` tokens into overlay keys.
//!
//! Does NOT handle:
//! - Reading the process arguments (the caller passes them, program name included or not).
//! - `--key=value` splitting or short options.
//!
//! Invariants:
//! - Tokens not starting with `--` are inert unless consumed as a flag's value.
//! - A flag consumes the next token as its value when that token is not itself a flag.
//! - A flag followed by another flag, or by nothing, is stored as `true`.

use serde_json::Value;

use super::error::ConfigError;
use super::infer::infer_value;
use super::overlay::Overlay;
use crate::constants::FLAG_PREFIX;

/// Apply argument tokens to the overlay. Later occurrences of a key win.
pub(crate) fn apply_args<S: AsRef<str>>(
    tokens: &[S],
    overlay: &mut Overlay,
) -> Result<(), ConfigError> {
    let mut applied = 0usize;
    let mut tokens = tokens.iter().map(AsRef::<str>::as_ref).peekable();

    while let Some(token) = tokens.next() {
        let Some(name) = token.strip_prefix(FLAG_PREFIX) else {
            continue;
        };
        let key = name.to_lowercase();

        let value = match tokens.next_if(|next| !next.starts_with(FLAG_PREFIX)) {
            Some(raw) => infer_value(raw),
            None => Value::Bool(true),
        };
        overlay.insert(key, value);
        applied += 1;
    }

    tracing::debug!(applied, "Applied arguments");
    Ok(())
}
