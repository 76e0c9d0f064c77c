use serde_json::Value;
use thiserror::Error;

/// Result type returned by every fallible operation of the crate.
pub type JsonResult<T> = Result<T, JsonError>;

#[derive(Error, Debug)]
/// JSON error
///
/// The first four variants describe what went wrong between the untyped JSON tree and a
/// typed value. The last two wrap failures of the collaborators the crate delegates to.
pub enum JsonError {
    /// The parsed root is not the expected shape (object / array), an element of a
    /// primitive array has the wrong type, or rendered bytes are not UTF-8.
    #[error("Invalid JSON")]
    BadFormat,

    /// A writable produced a tree holding a value that cannot be encoded as JSON.
    #[error("Invalid writable object")]
    BadObjectWritable,

    /// The value stored under `key` does not have the requested type.
    #[error("Invalid object value: {value} for key: {key}")]
    BadValue { key: String, value: Value },

    /// No value exists for the key.
    #[error("Missing dictionary key: {0}")]
    MissingKey(String),

    /// Malformed JSON input, as reported by `serde_json`.
    #[error("JSON codec error: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl JsonError {
    /// Builds a [`JsonError::BadValue`] for `key`, copying the offending value.
    pub fn bad_value(key: &str, value: &Value) -> Self {
        JsonError::BadValue {
            key: key.to_string(),
            value: value.clone(),
        }
    }
}
