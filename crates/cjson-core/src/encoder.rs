//! Encoder — converts a [`Document`] into compact JSON text.
//!
//! Output is written directly into a `String` in compact form (no spaces,
//! no newlines) rather than pretty-printed and stripped afterwards, so value
//! content can never be confused with formatting. Key order is the
//! document's insertion order, which makes output deterministic and
//! testable.
//!
//! The encoder enforces the same nesting policy as the decoder: arrays may
//! hold scalars only, objects may nest exactly one level. Every key is
//! either emitted or the whole call fails — keys are never silently
//! skipped. The only value with no JSON mapping is a non-finite float,
//! which fails with [`CjsonError::UnsupportedValueType`].

use crate::error::{CjsonError, Result};
use crate::types::{Document, Level, Value};

/// Encode a [`Document`] as a compact JSON string.
///
/// Every successful call returns valid, parseable JSON; a non-empty
/// document never encodes as `{}`. On failure the partially built buffer is
/// dropped and nothing is returned.
pub fn dumps(doc: &Document) -> Result<String> {
    let mut out = String::new();
    write_document(doc, Level::Root, &mut out)?;
    Ok(out)
}

fn write_document(doc: &Document, level: Level, out: &mut String) -> Result<()> {
    out.push('{');
    for (i, (key, value)) in doc.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_string(key, out);
        out.push(':');
        write_value(key, value, level, out)?;
    }
    out.push('}');
    Ok(())
}

/// Dispatch one value by kind. `key` is the nearest enclosing document key,
/// carried for error reporting only.
fn write_value(key: &str, value: &Value, level: Level, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => out.push_str(&i.to_string()),
        Value::Float(f) => write_float(key, *f, out)?,
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                match item {
                    Value::Array(_) | Value::Object(_) => {
                        return Err(CjsonError::UnsupportedNesting {
                            key: key.to_string(),
                        })
                    }
                    scalar => write_value(key, scalar, Level::Nested, out)?,
                }
            }
            out.push(']');
        }
        Value::Object(inner) => {
            if level == Level::Nested {
                return Err(CjsonError::UnsupportedNesting {
                    key: key.to_string(),
                });
            }
            write_document(inner, Level::Nested, out)?;
        }
    }
    Ok(())
}

/// Emit a float as a JSON number.
///
/// `f64::to_string` produces the shortest decimal that parses back to the
/// same bits, so floats survive a round trip exactly. Whole floats get a
/// `.0` suffix to keep them floats on the way back in. NaN and infinities
/// have no JSON representation and fail.
fn write_float(key: &str, f: f64, out: &mut String) -> Result<()> {
    if !f.is_finite() {
        return Err(CjsonError::UnsupportedValueType {
            key: key.to_string(),
            reason: "non-finite float",
        });
    }
    let text = f.to_string();
    out.push_str(&text);
    if !text.contains('.') {
        out.push_str(".0");
    }
    Ok(())
}

/// Emit a JSON string literal with standard escaping. Control characters
/// without a short escape use the `\u00XX` form.
fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
