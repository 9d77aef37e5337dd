//! Encoder contract tests: Document → compact JSON text.

use cjson_core::{dumps, CjsonError, Document, Value};

// ============================================================================
// Scalars and exact output
// ============================================================================

#[test]
fn dumps_scalars_compact_in_insertion_order() {
    let mut doc = Document::new();
    doc.insert("x", 1i64);
    doc.insert("y", "hi");
    doc.insert("z", true);
    assert_eq!(dumps(&doc).unwrap(), r#"{"x":1,"y":"hi","z":true}"#);
}

#[test]
fn dumps_empty_document() {
    assert_eq!(dumps(&Document::new()).unwrap(), "{}");
}

#[test]
fn dumps_null() {
    let mut doc = Document::new();
    doc.insert("nothing", Value::Null);
    assert_eq!(dumps(&doc).unwrap(), r#"{"nothing":null}"#);
}

#[test]
fn dumps_negative_integer() {
    let mut doc = Document::new();
    doc.insert("n", -42i64);
    assert_eq!(dumps(&doc).unwrap(), r#"{"n":-42}"#);
}

#[test]
fn dumps_integer_extremes() {
    let mut doc = Document::new();
    doc.insert("min", i64::MIN);
    doc.insert("max", i64::MAX);
    assert_eq!(
        dumps(&doc).unwrap(),
        r#"{"min":-9223372036854775808,"max":9223372036854775807}"#
    );
}

#[test]
fn dumps_float() {
    let mut doc = Document::new();
    doc.insert("pi", 3.14f64);
    assert_eq!(dumps(&doc).unwrap(), r#"{"pi":3.14}"#);
}

#[test]
fn dumps_whole_float_keeps_fraction() {
    // The .0 suffix is what keeps the value a float across a round trip.
    let mut doc = Document::new();
    doc.insert("x", 1.0f64);
    assert_eq!(dumps(&doc).unwrap(), r#"{"x":1.0}"#);
}

#[test]
fn dumps_negative_zero() {
    let mut doc = Document::new();
    doc.insert("z", -0.0f64);
    assert_eq!(dumps(&doc).unwrap(), r#"{"z":-0.0}"#);
}

// ============================================================================
// String escaping
// ============================================================================

#[test]
fn dumps_escapes_quotes_and_backslashes() {
    let mut doc = Document::new();
    doc.insert("s", r#"say "hi" \ bye"#);
    assert_eq!(dumps(&doc).unwrap(), r#"{"s":"say \"hi\" \\ bye"}"#);
}

#[test]
fn dumps_escapes_whitespace_controls() {
    let mut doc = Document::new();
    doc.insert("s", "a\nb\tc\rd");
    assert_eq!(dumps(&doc).unwrap(), "{\"s\":\"a\\nb\\tc\\rd\"}");
}

#[test]
fn dumps_escapes_other_control_chars() {
    let mut doc = Document::new();
    doc.insert("s", "\u{08}\u{0C}\u{01}");
    assert_eq!(dumps(&doc).unwrap(), r#"{"s":"\b\f\u0001"}"#);
}

#[test]
fn dumps_keeps_unicode_raw() {
    let mut doc = Document::new();
    doc.insert("s", "café 你好");
    assert_eq!(dumps(&doc).unwrap(), r#"{"s":"café 你好"}"#);
}

#[test]
fn dumps_escapes_keys_too() {
    let mut doc = Document::new();
    doc.insert("a\"b", 1i64);
    assert_eq!(dumps(&doc).unwrap(), r#"{"a\"b":1}"#);
}

#[test]
fn dumps_output_is_parseable_json() {
    let mut doc = Document::new();
    doc.insert("tricky", "}{][\",:");
    doc.insert("n", 1i64);
    let out = dumps(&doc).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(reparsed["tricky"], "}{][\",:");
    assert_eq!(reparsed["n"], 1);
}

// ============================================================================
// Arrays
// ============================================================================

#[test]
fn dumps_scalar_array() {
    let mut doc = Document::new();
    doc.insert(
        "a",
        vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)],
    );
    assert_eq!(dumps(&doc).unwrap(), r#"{"a":[1,2,3]}"#);
}

#[test]
fn dumps_mixed_scalar_array() {
    let mut doc = Document::new();
    doc.insert(
        "a",
        vec![
            Value::Integer(1),
            Value::String("two".to_string()),
            Value::Bool(false),
            Value::Null,
        ],
    );
    assert_eq!(dumps(&doc).unwrap(), r#"{"a":[1,"two",false,null]}"#);
}

#[test]
fn dumps_empty_array() {
    let mut doc = Document::new();
    doc.insert("a", Vec::<Value>::new());
    assert_eq!(dumps(&doc).unwrap(), r#"{"a":[]}"#);
}

#[test]
fn dumps_rejects_array_of_arrays() {
    let mut doc = Document::new();
    doc.insert("a", vec![Value::Array(vec![Value::Integer(1)])]);
    let err = dumps(&doc).unwrap_err();
    assert!(matches!(err, CjsonError::UnsupportedNesting { key } if key == "a"));
}

#[test]
fn dumps_rejects_object_inside_array() {
    let mut inner = Document::new();
    inner.insert("b", 1i64);
    let mut doc = Document::new();
    doc.insert("a", vec![Value::Object(inner)]);
    let err = dumps(&doc).unwrap_err();
    assert!(matches!(err, CjsonError::UnsupportedNesting { key } if key == "a"));
}

// ============================================================================
// Nested objects
// ============================================================================

#[test]
fn dumps_one_level_nested_object() {
    let mut inner = Document::new();
    inner.insert("host", "localhost");
    inner.insert("port", 8080i64);
    let mut doc = Document::new();
    doc.insert("server", inner);
    assert_eq!(
        dumps(&doc).unwrap(),
        r#"{"server":{"host":"localhost","port":8080}}"#
    );
}

#[test]
fn dumps_rejects_two_level_nesting() {
    let mut deepest = Document::new();
    deepest.insert("c", 1i64);
    let mut middle = Document::new();
    middle.insert("b", deepest);
    let mut doc = Document::new();
    doc.insert("a", middle);
    let err = dumps(&doc).unwrap_err();
    assert!(matches!(err, CjsonError::UnsupportedNesting { key } if key == "b"));
}

// ============================================================================
// Unsupported values
// ============================================================================

#[test]
fn dumps_rejects_nan() {
    let mut doc = Document::new();
    doc.insert("bad", f64::NAN);
    let err = dumps(&doc).unwrap_err();
    assert!(matches!(
        err,
        CjsonError::UnsupportedValueType { key, reason: "non-finite float" } if key == "bad"
    ));
}

#[test]
fn dumps_rejects_infinity() {
    for f in [f64::INFINITY, f64::NEG_INFINITY] {
        let mut doc = Document::new();
        doc.insert("bad", f);
        assert!(matches!(
            dumps(&doc).unwrap_err(),
            CjsonError::UnsupportedValueType { .. }
        ));
    }
}

#[test]
fn dumps_rejects_nan_inside_array() {
    let mut doc = Document::new();
    doc.insert("a", vec![Value::Integer(1), Value::Float(f64::NAN)]);
    assert!(matches!(
        dumps(&doc).unwrap_err(),
        CjsonError::UnsupportedValueType { .. }
    ));
}
