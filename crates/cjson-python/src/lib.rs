//! # cjson-python
//!
//! Python bindings for the cjson codec, built with PyO3.
//!
//! Exposes the following functions to Python as the `cjson` module:
//!
//! - `loads(json)` -- JSON string -> dict
//! - `dumps(doc)` -- dict -> compact JSON string
//!
//! Marshaling between Python objects and the codec's `Value` model lives
//! entirely in this crate; `cjson-core` never sees a Python object.
//!
//! Exception mapping:
//!
//! - malformed JSON or a non-object root -> `ValueError`
//! - nesting beyond the supported depth -> `NotImplementedError`
//! - values with no JSON mapping (non-finite floats, unconvertible Python
//!   types) -> `TypeError`

use pyo3::exceptions::{PyNotImplementedError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyList, PyString};

use cjson_core::{CjsonError, Document, Value};

/// Deserialize a str containing a JSON document to a Python dict.
///
/// Args:
///     json: A valid JSON string whose root is an object.
///
/// Returns:
///     A dict with one entry per top-level JSON key, in document order.
///
/// Raises:
///     ValueError: If the input is not valid JSON or the root is not an object.
///     NotImplementedError: If the document nests deeper than one object level.
#[pyfunction]
fn loads(py: Python<'_>, json: &str) -> PyResult<Py<PyDict>> {
    let doc = cjson_core::loads(json).map_err(to_py_err)?;
    Ok(document_to_dict(py, &doc)?.unbind())
}

/// Serialize a Python dict to a compact JSON str.
///
/// Args:
///     doc: A dict of str keys to None/bool/int/float/str/list/dict values,
///         within the codec's nesting limits.
///
/// Returns:
///     The compact JSON string, keys in the dict's insertion order.
///
/// Raises:
///     NotImplementedError: If the dict nests deeper than one object level.
///     TypeError: If a value has no JSON mapping.
#[pyfunction]
fn dumps(doc: &Bound<'_, PyDict>) -> PyResult<String> {
    let document = dict_to_document(doc)?;
    cjson_core::dumps(&document).map_err(to_py_err)
}

fn to_py_err(err: CjsonError) -> PyErr {
    match err {
        CjsonError::MalformedInput(_) | CjsonError::UnsupportedRoot { .. } => {
            PyValueError::new_err(err.to_string())
        }
        CjsonError::UnsupportedNesting { .. } => PyNotImplementedError::new_err(err.to_string()),
        CjsonError::UnsupportedValueType { .. } => PyTypeError::new_err(err.to_string()),
    }
}

fn document_to_dict<'py>(py: Python<'py>, doc: &Document) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    for (key, value) in doc.iter() {
        dict.set_item(key, value_to_py(py, value)?)?;
    }
    Ok(dict)
}

fn value_to_py(py: Python<'_>, value: &Value) -> PyResult<PyObject> {
    let obj = match value {
        Value::Null => py.None(),
        Value::Bool(b) => PyBool::new(py, *b).to_owned().into_any().unbind(),
        Value::Integer(i) => i.into_pyobject(py)?.into_any().unbind(),
        Value::Float(f) => f.into_pyobject(py)?.into_any().unbind(),
        Value::String(s) => PyString::new(py, s).into_any().unbind(),
        Value::Array(items) => {
            let elems = items
                .iter()
                .map(|item| value_to_py(py, item))
                .collect::<PyResult<Vec<_>>>()?;
            PyList::new(py, elems)?.into_any().unbind()
        }
        Value::Object(inner) => document_to_dict(py, inner)?.into_any().unbind(),
    };
    Ok(obj)
}

fn dict_to_document(dict: &Bound<'_, PyDict>) -> PyResult<Document> {
    let mut doc = Document::new();
    for (key, value) in dict.iter() {
        let key: String = key.extract()?;
        let converted = py_to_value(&value)?;
        doc.insert(key, converted);
    }
    Ok(doc)
}

/// Convert one Python object into a codec `Value`.
///
/// bool is checked before int because Python bools are int subclasses.
/// Ints beyond i64 degrade to float, matching the core's number policy.
/// Unknown types raise rather than being skipped, so no key is ever
/// silently dropped from the output.
fn py_to_value(value: &Bound<'_, PyAny>) -> PyResult<Value> {
    if value.is_none() {
        return Ok(Value::Null);
    }
    if let Ok(b) = value.downcast::<PyBool>() {
        return Ok(Value::Bool(b.is_true()));
    }
    if let Ok(i) = value.extract::<i64>() {
        return Ok(Value::Integer(i));
    }
    if let Ok(f) = value.extract::<f64>() {
        return Ok(Value::Float(f));
    }
    if let Ok(s) = value.extract::<String>() {
        return Ok(Value::String(s));
    }
    if let Ok(list) = value.downcast::<PyList>() {
        let mut items = Vec::with_capacity(list.len());
        for item in list.iter() {
            items.push(py_to_value(&item)?);
        }
        return Ok(Value::Array(items));
    }
    if let Ok(dict) = value.downcast::<PyDict>() {
        return Ok(Value::Object(dict_to_document(dict)?));
    }
    Err(PyTypeError::new_err(format!(
        "cannot serialize value of type {}",
        value.get_type().name()?
    )))
}

/// The `cjson` Python module, implemented in Rust via PyO3.
#[pymodule]
fn cjson(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(loads, m)?)?;
    m.add_function(wrap_pyfunction!(dumps, m)?)?;
    Ok(())
}
