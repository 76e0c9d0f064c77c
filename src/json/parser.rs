use std::io::Read;

use log::debug;
use serde_json::Value;

use crate::{
    core::object::Object,
    error::{JsonError, JsonResult},
};

/// Parses raw bytes into an untyped JSON value.
///
/// Any JSON value is accepted as root, fragments such as `"text"` or `42` included.
pub fn parse_value(bytes: &[u8]) -> JsonResult<Value> {
    serde_json::from_slice(bytes).map_err(|error| {
        debug!("Unable to parse JSON: {}", error);
        JsonError::Codec(error)
    })
}

/// Parses bytes whose root must be a JSON object.
pub fn parse_object(bytes: &[u8]) -> JsonResult<Object> {
    Object::try_from(parse_value(bytes)?)
}

/// Parses bytes whose root must be a JSON array.
pub fn parse_array(bytes: &[u8]) -> JsonResult<Vec<Value>> {
    match parse_value(bytes)? {
        Value::Array(values) => Ok(values),
        other => {
            debug!("Expected a JSON array, found: {}", other);
            Err(JsonError::BadFormat)
        }
    }
}

/// Parses bytes whose root must be an array made only of JSON objects.
pub fn parse_object_list(bytes: &[u8]) -> JsonResult<Vec<Object>> {
    parse_array(bytes)?
        .into_iter()
        .map(Object::try_from)
        .collect()
}

/// Reads a whole stream and parses it as a single JSON object.
pub fn read_object<R: Read>(reader: R) -> JsonResult<Object> {
    let value: Value = serde_json::from_reader(reader)?;
    Object::try_from(value)
}
