use log::debug;
use serde_json::Value;

use crate::{
    core::object::FromValue,
    error::{JsonError, JsonResult},
    json::parser::parse_array,
};

/// JSON primitives that can be read straight out of an array.
pub trait Primitive: FromValue {}

impl Primitive for String {}
impl Primitive for bool {}
impl Primitive for f64 {}
impl Primitive for i64 {}
impl Primitive for i32 {}
impl Primitive for u64 {}
impl Primitive for u32 {}

/// Reads every element of `values` as a `T`, keeping order.
///
/// An element of another type fails the whole array with a plain [`JsonError::BadFormat`]:
/// there is no key to report, unlike [`extract`](crate::extract).
///
/// # Examples
///
/// ```
/// use jsonable::{primitives_from_text, JsonError};
///
/// let names: Vec<String> = primitives_from_text(r#"["a", "b", "c"]"#).unwrap();
/// assert_eq!(names, ["a", "b", "c"]);
///
/// let mixed = primitives_from_text::<String>(r#"["a", "b", 3]"#);
/// assert!(matches!(mixed, Err(JsonError::BadFormat)));
/// ```
pub fn primitives_from<T: Primitive>(values: &[Value]) -> JsonResult<Vec<T>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            T::from_value(value).ok_or_else(|| {
                debug!("Unexpected element at index {}: {}", index, value);
                JsonError::BadFormat
            })
        })
        .collect()
}

/// Parses `bytes` as a JSON array, then reads it with [`primitives_from`].
pub fn primitives_from_bytes<T: Primitive>(bytes: &[u8]) -> JsonResult<Vec<T>> {
    primitives_from(&parse_array(bytes)?)
}

pub fn primitives_from_text<T: Primitive>(text: &str) -> JsonResult<Vec<T>> {
    primitives_from_bytes(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{primitives_from, primitives_from_bytes, primitives_from_text};
    use crate::error::JsonError;

    #[test]
    fn homogeneous_arrays_should_be_read_in_order() {
        let words: Vec<String> = primitives_from_text(r#"["hi", "my", "name", "is"]"#).unwrap();
        assert_eq!(words, ["hi", "my", "name", "is"]);

        let numbers: Vec<i64> = primitives_from_bytes(b"[1, 2, 3, 4]").unwrap();
        assert_eq!(numbers, [1, 2, 3, 4]);

        let flags: Vec<bool> = primitives_from(&[json!(true), json!(false)]).unwrap();
        assert_eq!(flags, [true, false]);

        let empty: Vec<f64> = primitives_from_text("[]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn integers_should_be_accepted_as_doubles() {
        let numbers: Vec<f64> = primitives_from_text("[1, 2.5]").unwrap();
        assert_eq!(numbers, [1.0, 2.5]);
    }

    #[test]
    fn mismatching_element_should_be_bad_format() {
        assert!(matches!(
            primitives_from_text::<String>(r#"["a", "b", 3]"#),
            Err(JsonError::BadFormat)
        ));
        assert!(matches!(
            primitives_from_text::<i64>("[1, 2.5]"),
            Err(JsonError::BadFormat)
        ));
        assert!(matches!(
            primitives_from_text::<u32>("[1, -1]"),
            Err(JsonError::BadFormat)
        ));
    }

    #[test]
    fn non_array_root_should_be_bad_format() {
        assert!(matches!(
            primitives_from_text::<String>(r#"{"a":"b"}"#),
            Err(JsonError::BadFormat)
        ));
        assert!(matches!(
            primitives_from_text::<String>("[\"a\""),
            Err(JsonError::Codec(_))
        ));
    }
}
