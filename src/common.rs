//! Common data structures.

use chrono::{DateTime, SecondsFormat, Utc};

pub use serde_json::value::{Map, Number, Value};

/// An ordered JSON object, as produced by a serializer.
///
/// Keys keep the order in which they were inserted.
pub type Object = Map<String, Value>;

/// Conversion of a record attribute into a JSON primitive.
pub trait IntoValue {
    /// Converts the attribute into a `Value`.
    fn into_value(self) -> Value;
}

declare_into_value!(bool, i32, i64, u32, u64, f64, String, Value);

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}

impl<'a, T: IntoValue + Clone> IntoValue for &'a T {
    fn into_value(self) -> Value {
        self.clone().into_value()
    }
}

/// Timestamps are rendered as ISO 8601 in UTC with a `Z` suffix.
impl IntoValue for DateTime<Utc> {
    fn into_value(self) -> Value {
        Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

/// Indicates whether the value carries no information in compact output.
///
/// Only `null` and empty arrays qualify. Empty objects, `0`, `""` and `false` are kept.
pub fn is_compactible(value: &Value) -> bool {
    match *value {
        Value::Null => true,
        Value::Array(ref items) => items.is_empty(),
        _ => false,
    }
}

/// Returns a short name for the JSON type of a value, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match *value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
