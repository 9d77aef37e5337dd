//! # cjson-core
//!
//! A strict, order-preserving codec between JSON text and a typed in-memory
//! **Document** (an insertion-ordered mapping of string keys to [`Value`]s).
//!
//! The codec is deliberately narrow: the JSON root must be an object, arrays
//! hold scalars only, and objects nest exactly one level. Within that shape
//! it guarantees an exact round trip — every document `loads` accepts,
//! `dumps` reproduces with the same keys, values, and kinds, and compact
//! `dumps` output is canonical (dumps of loads of dumps is a fixed point).
//!
//! ## Quick start
//!
//! ```rust
//! use cjson_core::{dumps, loads, Value};
//!
//! // JSON → Document
//! let doc = loads(r#"{"x":1,"y":"hi","z":true}"#).unwrap();
//! assert_eq!(doc.get("x"), Some(&Value::Integer(1)));
//!
//! // Document → compact JSON (insertion order preserved)
//! let json = dumps(&doc).unwrap();
//! assert_eq!(json, r#"{"x":1,"y":"hi","z":true}"#);
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — JSON string → [`Document`] (`loads`)
//! - [`encoder`] — [`Document`] → compact JSON string (`dumps`)
//! - [`error`] — error taxonomy for decode/encode failures
//! - [`types`] — [`Value`] sum type and [`Document`] map
//!
//! Both operations are pure and stateless: no shared buffers, no caching,
//! nothing retained between calls. Concurrent callers on disjoint inputs
//! cannot interfere.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod types;

pub use decoder::loads;
pub use encoder::dumps;
pub use error::{CjsonError, Result};
pub use types::{Document, Value};
