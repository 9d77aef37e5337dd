//! Error types for JSON decoding and encoding operations.

use thiserror::Error;

/// Errors that can occur during `loads` or `dumps`.
///
/// All failures are detected eagerly and reported to the immediate caller;
/// there is no recovery, retry, or default-value substitution, and a failing
/// call exposes no partially built output.
#[derive(Error, Debug)]
pub enum CjsonError {
    /// The input string was not syntactically valid JSON (decoding path).
    #[error("malformed JSON input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Valid JSON whose root is not an object. `found` names the actual
    /// root kind ("array", "string", ...).
    #[error("JSON root must be an object, found {found}")]
    UnsupportedRoot { found: &'static str },

    /// A value under `key` nests deeper than the codec supports: an object
    /// inside a nested object, or a composite inside an array.
    #[error("unsupported nesting under key {key:?}: only one level of object nesting and scalar array elements are supported")]
    UnsupportedNesting { key: String },

    /// A value under `key` has no JSON representation (encoding path).
    #[error("value under key {key:?} cannot be encoded: {reason}")]
    UnsupportedValueType { key: String, reason: &'static str },
}

/// Convenience alias used throughout cjson-core.
pub type Result<T> = std::result::Result<T, CjsonError>;
