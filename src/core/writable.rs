use std::io::Write;

use crate::{
    core::{object::Object, readable::Readable},
    error::JsonResult,
    json::renderer::{JsonRendererBuilder, into_text},
};

/// A type that can render itself as an untyped JSON object.
///
/// [`Writable::to_object`] must build a fresh object: later changes to `self` never show
/// up in an object returned earlier.
///
/// # Examples
///
/// ```
/// use jsonable::{Object, Writable};
///
/// struct Car {
///     make: String,
///     year: i64,
/// }
///
/// impl Writable for Car {
///     fn to_object(&self) -> Object {
///         Object::new().with("make", &self.make).with("year", self.year)
///     }
/// }
///
/// let car = Car { make: "BMW".to_string(), year: 2012 };
/// assert_eq!(car.to_text(false).unwrap(), r#"{"make":"BMW","year":2012}"#);
/// ```
pub trait Writable {
    fn to_object(&self) -> Object;

    /// Renders the object, with two-space indentation when `pretty` is set.
    ///
    /// # Errors
    ///
    /// [`JsonError::BadObjectWritable`](crate::JsonError::BadObjectWritable) if the object
    /// holds a value that is not representable in JSON.
    fn to_bytes(&self, pretty: bool) -> JsonResult<Vec<u8>> {
        JsonRendererBuilder::new()
            .pretty_formatter(pretty)
            .build()
            .render(&self.to_object())
    }

    fn to_text(&self, pretty: bool) -> JsonResult<String> {
        into_text(self.to_bytes(pretty)?)
    }

    /// Renders the object into `writer`.
    fn write_to<W: Write>(&self, writer: W, pretty: bool) -> JsonResult<()> {
        JsonRendererBuilder::new()
            .pretty_formatter(pretty)
            .build()
            .render_to(&self.to_object(), writer)
    }
}

/// Writable helpers for sequences, used to embed arrays of objects as a field.
pub trait WritableList {
    fn to_objects(&self) -> Vec<Object>;

    /// Renders the sequence as one JSON array.
    fn to_bytes(&self, pretty: bool) -> JsonResult<Vec<u8>> {
        JsonRendererBuilder::new()
            .pretty_formatter(pretty)
            .build()
            .render_list(&self.to_objects())
    }

    fn to_text(&self, pretty: bool) -> JsonResult<String> {
        into_text(WritableList::to_bytes(self, pretty)?)
    }
}

impl<T: Writable> WritableList for [T] {
    fn to_objects(&self) -> Vec<Object> {
        self.iter().map(Writable::to_object).collect()
    }
}

/// A type that is both [`Readable`] and [`Writable`].
pub trait Jsonable: Readable + Writable {
    /// Renders `self` and reads it back.
    fn reparsed(&self) -> JsonResult<Self> {
        Self::from_bytes(&self.to_bytes(false)?)
    }
}

impl<T: Readable + Writable> Jsonable for T {}
