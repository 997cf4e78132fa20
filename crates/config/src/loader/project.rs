//! Projection of the merged overlay into the caller's type.
//!
//! Responsibilities:
//! - Re-key overlay entries onto the target struct's declared field names.
//! - Write whole-number floats as integers so `8080.0` and `3e3` fill integer fields.
//! - Deserialize the resulting JSON object into the target type.
//!
//! Does NOT handle:
//! - Defaults for missing fields (targets use `#[serde(default)]`).
//!
//! Invariants:
//! - A key equal to a declared field name is used as-is.
//! - Otherwise a key matching a declared field name case-insensitively is renamed to it,
//!   so lower-cased variable and argument keys reach mixed-case fields.
//! - Keys are applied in ascending byte order and a later key wins a shared field, which
//!   lets an all-lower-case key override a mixed-case one.
//! - Only top-level keys are re-keyed; keys inside nested objects must match the
//!   nested field names exactly.
//! - Targets that are not structs receive the overlay keys verbatim.
//! - A finite float with no fractional part and magnitude below 1e21 is projected as an
//!   integer when it fits `i64` or `u64`, at every nesting level.

use serde::de::{self, DeserializeOwned, Deserializer, Visitor};
use serde_json::{Map, Number, Value};

use super::error::ConfigError;
use super::overlay::Overlay;

/// Deserialize the overlay into `T`.
pub(crate) fn project<T: DeserializeOwned>(overlay: Overlay) -> Result<T, ConfigError> {
    let document = match struct_fields::<T>() {
        Some(fields) => rekey(overlay, fields),
        None => overlay.into_document(),
    };

    serde_json::from_value(normalize_numbers(Value::Object(document)))
        .map_err(|source| ConfigError::Projection { source })
}

/// Floats at or above this magnitude keep their float form when re-encoded.
const INTEGRAL_FLOAT_LIMIT: f64 = 1e21;

fn normalize_numbers(value: Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(integral(&number).unwrap_or(number)),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_numbers).collect()),
        Value::Object(object) => Value::Object(
            object
                .into_iter()
                .map(|(key, value)| (key, normalize_numbers(value)))
                .collect(),
        ),
        other => other,
    }
}

/// The integer form of a whole-number float, if it has one.
fn integral(number: &Number) -> Option<Number> {
    if !number.is_f64() {
        return None;
    }
    let float = number.as_f64()?;
    if !float.is_finite() || float.fract() != 0.0 || float.abs() >= INTEGRAL_FLOAT_LIMIT {
        return None;
    }

    // i64::MAX and u64::MAX round up to powers of two as f64, hence the strict bounds.
    if float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(Number::from(float as i64))
    } else if float >= 0.0 && float < u64::MAX as f64 {
        Some(Number::from(float as u64))
    } else {
        None
    }
}

fn rekey(overlay: Overlay, fields: &[&str]) -> Map<String, Value> {
    let mut document = Map::new();
    for (key, value) in overlay {
        let target = if fields.iter().any(|field| *field == key) {
            key
        } else {
            let folded = key.to_lowercase();
            match fields.iter().find(|field| field.to_lowercase() == folded) {
                Some(field) => {
                    tracing::trace!(%key, %field, "Matched config key case-insensitively");
                    (*field).to_string()
                }
                None => key,
            }
        };
        document.insert(target, value);
    }
    document
}

/// Field names `T` declares when deserialized as a struct, after serde renames.
fn struct_fields<T: DeserializeOwned>() -> Option<&'static [&'static str]> {
    let mut fields = None;
    // Always errors; the field list is captured on the way.
    let _ = T::deserialize(FieldNames {
        fields: &mut fields,
    });
    fields
}

/// A deserializer that records the field list of `deserialize_struct` and fails
/// every request.
struct FieldNames<'a> {
    fields: &'a mut Option<&'static [&'static str]>,
}

impl<'de> Deserializer<'de> for FieldNames<'_> {
    type Error = de::value::Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Self::Error> {
        Err(de::Error::custom("not a struct"))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value, Self::Error> {
        *self.fields = Some(fields);
        Err(de::Error::custom("field names captured"))
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map enum identifier ignored_any
    }
}
