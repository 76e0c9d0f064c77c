/// JSON encoding and decoding, delegated to `serde_json`.
///
/// This module holds everything that touches bytes:
///
/// 1. **parser**: turns bytes into an untyped [`Value`](serde_json::Value) or
///    [`Object`](crate::Object), checking the root has the expected shape.
///
/// 2. **renderer**: turns objects back into compact or pretty-printed bytes, refusing objects
///    that hold values not representable in JSON. Configured with [`JsonRendererBuilder`].
///
/// # Examples
///
/// ```
/// use jsonable::{JsonRendererBuilder, JsonResult, Object, Readable, Writable, WritableList};
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
/// impl Writable for Car {
///     fn to_object(&self) -> Object {
///         Object::new().with("make", &self.make).with("year", self.year)
///     }
/// }
///
/// let cars = vec![
///     Car { make: "Toyota".to_string(), year: 2004 },
///     Car { make: "BMW".to_string(), year: 2012 },
/// ];
///
/// let renderer = JsonRendererBuilder::new().pretty_formatter(true).indent(b"    ").build();
/// let bytes = renderer.render_list(&cars.to_objects()).unwrap();
/// assert!(bytes.starts_with(b"[\n    {"));
///
/// let again = Car::list_from_bytes(&bytes).unwrap();
/// assert_eq!(again, cars);
/// /// ```
pub mod parser;

pub mod renderer;

pub use renderer::{JsonRenderer, JsonRendererBuilder};
