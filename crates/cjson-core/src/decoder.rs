//! Decoder — converts JSON text into a [`Document`].
//!
//! Parsing is delegated to `serde_json` (built with `preserve_order`, so the
//! intermediate tree keeps document order), then the tree is converted into
//! the codec's own [`Value`] model with the nesting policy enforced:
//!
//! - The root must be a JSON object; anything else is an [`UnsupportedRoot`]
//!   contract violation.
//! - Array elements are decoded recursively into real values, but must be
//!   scalars — an array or object inside an array is [`UnsupportedNesting`].
//! - Object values are decoded exactly one level deep; an object inside a
//!   nested object is [`UnsupportedNesting`].
//!
//! The same policy is applied by the encoder, so every document `loads`
//! accepts is one `dumps` can reproduce.
//!
//! [`UnsupportedRoot`]: CjsonError::UnsupportedRoot
//! [`UnsupportedNesting`]: CjsonError::UnsupportedNesting

use crate::error::{CjsonError, Result};
use crate::types::{Document, Level, Value};
use serde_json::Value as JsonValue;

/// Decode a JSON string into a [`Document`].
///
/// The input must be a syntactically valid JSON document whose root is an
/// object. Top-level entries appear in the output in document order. On any
/// failure no partial document is returned.
///
/// Numbers with no fraction that fit a signed 64-bit integer decode as
/// [`Value::Integer`]; all other numbers (fractions, magnitudes beyond
/// `i64`) decode as [`Value::Float`]. Losing integer precision past
/// `i64::MAX` is a defined limitation, not an error.
pub fn loads(input: &str) -> Result<Document> {
    let root: JsonValue = serde_json::from_str(input)?;
    let map = match root {
        JsonValue::Object(map) => map,
        other => {
            return Err(CjsonError::UnsupportedRoot {
                found: json_kind(&other),
            })
        }
    };

    let mut doc = Document::new();
    for (key, value) in map {
        let converted = convert_value(&key, value, Level::Root)?;
        doc.insert(key, converted);
    }
    Ok(doc)
}

/// Convert one parsed JSON value into a [`Value`], enforcing the nesting
/// policy. `key` is the nearest enclosing document key, carried for error
/// reporting only.
fn convert_value(key: &str, value: JsonValue, level: Level) -> Result<Value> {
    Ok(match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => convert_number(&n),
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Array(convert_array(key, items)?),
        JsonValue::Object(map) => {
            if level == Level::Nested {
                return Err(CjsonError::UnsupportedNesting {
                    key: key.to_string(),
                });
            }
            let mut doc = Document::new();
            for (k, v) in map {
                let converted = convert_value(&k, v, Level::Nested)?;
                doc.insert(k, converted);
            }
            Value::Object(doc)
        }
    })
}

/// Convert array elements, which must all be scalars.
fn convert_array(key: &str, items: Vec<JsonValue>) -> Result<Vec<Value>> {
    items
        .into_iter()
        .map(|item| match item {
            JsonValue::Null => Ok(Value::Null),
            JsonValue::Bool(b) => Ok(Value::Bool(b)),
            JsonValue::Number(n) => Ok(convert_number(&n)),
            JsonValue::String(s) => Ok(Value::String(s)),
            JsonValue::Array(_) | JsonValue::Object(_) => Err(CjsonError::UnsupportedNesting {
                key: key.to_string(),
            }),
        })
        .collect()
}

/// Integer if it fits `i64`, float otherwise. `as_f64` is total for every
/// number `serde_json` produces without the `arbitrary_precision` feature,
/// so the final arm is unreachable in practice.
fn convert_number(n: &serde_json::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Integer(i)
    } else if let Some(f) = n.as_f64() {
        Value::Float(f)
    } else {
        Value::Null
    }
}

/// Kind name of a parsed JSON value, for error messages.
fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
