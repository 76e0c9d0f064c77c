use std::io::Read;

use log::debug;

use crate::{
    core::object::Object,
    error::JsonResult,
    json::parser::{parse_object, parse_object_list, read_object},
};

/// A type that can be constructed from an untyped JSON object.
///
/// Only [`Readable::from_object`] has to be written; the byte, text and list constructors
/// are provided for every implementor.
///
/// # Examples
///
/// ```
/// use jsonable::{JsonError, JsonResult, Object, Readable};
///
/// #[derive(Debug, PartialEq)]
/// struct Car {
///     make: String,
///     year: i64,
/// }
///
/// impl Readable for Car {
///     fn from_object(object: &Object) -> JsonResult<Self> {
///         Ok(Car {
///             make: object.extract("make")?,
///             year: object.extract("year")?,
///         })
///     }
/// }
///
/// let car = Car::from_text(r#"{"make":"BMW","year":2012}"#).unwrap();
/// assert_eq!(car, Car { make: "BMW".to_string(), year: 2012 });
///
/// let cars = Car::list_from_text(r#"[{"make":"BMW","year":2012},{"make":"Kia"}]"#);
/// assert!(matches!(cars, Err(JsonError::MissingKey(key)) if key == "year"));
/// ```
pub trait Readable: Sized {
    /// Builds an instance from `object`. The object is only read.
    fn from_object(object: &Object) -> JsonResult<Self>;

    /// Parses `bytes` as a JSON object, then builds an instance from it.
    ///
    /// Fails with [`JsonError::BadFormat`](crate::JsonError::BadFormat) when the root is
    /// not an object.
    fn from_bytes(bytes: &[u8]) -> JsonResult<Self> {
        let object = parse_object(bytes)?;
        Self::from_object(&object)
    }

    fn from_text(text: &str) -> JsonResult<Self> {
        Self::from_bytes(text.as_bytes())
    }

    /// Reads a single JSON object from `reader`, then builds an instance from it.
    fn from_reader<R: Read>(reader: R) -> JsonResult<Self> {
        let object = read_object(reader)?;
        Self::from_object(&object)
    }

    /// Builds one instance per object, in order.
    ///
    /// Stops at the first failing object and returns its error unchanged.
    fn list_from(objects: &[Object]) -> JsonResult<Vec<Self>> {
        objects
            .iter()
            .enumerate()
            .map(|(index, object)| {
                Self::from_object(object).inspect_err(|error| {
                    debug!("Unable to read item at index {}: {}", index, error);
                })
            })
            .collect()
    }

    /// Parses `bytes` as a JSON array of objects, then builds the list.
    fn list_from_bytes(bytes: &[u8]) -> JsonResult<Vec<Self>> {
        let objects = parse_object_list(bytes)?;
        Self::list_from(&objects)
    }

    fn list_from_text(text: &str) -> JsonResult<Vec<Self>> {
        Self::list_from_bytes(text.as_bytes())
    }
}
