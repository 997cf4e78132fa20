//! Type inference for string-valued sources.
//!
//! Environment entries and arguments arrive as strings; they are stored in the
//! overlay as the first of boolean, integer, float or string that parses.
//! File-sourced values never pass through here.

use serde_json::{Number, Value};

/// Infer a typed value from a raw string.
///
/// Attempts, in order:
/// 1. Boolean: `true`/`false` in any letter case, or `1`, `0`, `t`, `f`, `T`, `F`.
/// 2. Signed base-10 `i64`.
/// 3. `f64`, when finite.
/// 4. The string itself.
///
/// So `"0"` is `false`, not `0`, and `""` stays `""`.
pub fn infer_value(raw: &str) -> Value {
    if let Some(flag) = parse_bool(raw) {
        return Value::Bool(flag);
    }

    if let Ok(int) = raw.parse::<i64>() {
        return Value::Number(int.into());
    }

    // Non-finite floats have no JSON form; they stay strings.
    if let Some(float) = raw.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(float);
    }

    Value::String(raw.to_string())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" => Some(true),
        "0" | "f" | "F" => Some(false),
        _ if raw.eq_ignore_ascii_case("true") => Some(true),
        _ if raw.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}
