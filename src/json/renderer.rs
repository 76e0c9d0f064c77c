use std::io::Write;

use log::debug;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{
    core::object::Object,
    error::{JsonError, JsonResult},
};

/// Renders untyped JSON objects to bytes or text.
///
/// Built with [`JsonRendererBuilder`]; the default renderer emits compact JSON.
pub struct JsonRenderer {
    pretty_formatter: bool,
    indent: Vec<u8>,
}

impl JsonRenderer {
    fn new(pretty_formatter: bool, indent: Vec<u8>) -> Self {
        Self {
            pretty_formatter,
            indent,
        }
    }

    /// Renders `object` after checking every value in it is encodable.
    ///
    /// # Errors
    ///
    /// [`JsonError::BadObjectWritable`] if the object holds a rejected key.
    pub fn render(&self, object: &Object) -> JsonResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.render_to(object, &mut bytes)?;
        Ok(bytes)
    }

    /// Renders a list of objects as one JSON array.
    pub fn render_list(&self, objects: &[Object]) -> JsonResult<Vec<u8>> {
        if let Some(index) = objects.iter().position(|object| !object.is_encodable()) {
            debug!("Object at index {} is not encodable", index);
            return Err(JsonError::BadObjectWritable);
        }

        let mut bytes = Vec::new();
        self.serialize(objects, &mut bytes)?;
        Ok(bytes)
    }

    /// Renders `object` as UTF-8 text.
    pub fn render_text(&self, object: &Object) -> JsonResult<String> {
        into_text(self.render(object)?)
    }

    /// Renders `object` straight into `writer`.
    pub fn render_to<W: Write>(&self, object: &Object, writer: W) -> JsonResult<()> {
        if !object.is_encodable() {
            debug!(
                "Refusing to render object with rejected keys: {:?}",
                object.rejected_keys()
            );
            return Err(JsonError::BadObjectWritable);
        }

        self.serialize(object, writer)
    }

    fn serialize<T: Serialize + ?Sized, W: Write>(&self, value: &T, writer: W) -> JsonResult<()> {
        let result = if self.pretty_formatter {
            let formatter = PrettyFormatter::with_indent(&self.indent);
            let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
            value.serialize(&mut serializer)
        } else {
            let mut serializer = serde_json::Serializer::new(writer);
            value.serialize(&mut serializer)
        };

        result.map_err(|error| {
            if error.is_io() {
                JsonError::Io(error.into())
            } else {
                JsonError::Codec(error)
            }
        })
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        JsonRendererBuilder::new().build()
    }
}

/// Builder for [`JsonRenderer`].
///
/// # Examples
///
/// ```
/// use jsonable::{JsonRendererBuilder, Object};
///
/// let renderer = JsonRendererBuilder::new()
///     .pretty_formatter(true)
///     .indent(b"    ")
///     .build();
///
/// let text = renderer.render_text(&Object::new().with("year", 2004)).unwrap();
/// assert_eq!(text, "{\n    \"year\": 2004\n}");
/// ```
pub struct JsonRendererBuilder<'a> {
    indent: &'a [u8],
    pretty_formatter: bool,
}

impl Default for JsonRendererBuilder<'_> {
    fn default() -> Self {
        Self {
            indent: b"  ",
            pretty_formatter: false,
        }
    }
}

impl<'a> JsonRendererBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indentation used by the pretty formatter. Two spaces by default.
    pub fn indent(mut self, indent: &'a [u8]) -> Self {
        self.indent = indent;
        self
    }

    pub fn pretty_formatter(mut self, yes: bool) -> Self {
        self.pretty_formatter = yes;
        self
    }

    pub fn build(self) -> JsonRenderer {
        JsonRenderer::new(self.pretty_formatter, self.indent.to_vec())
    }
}

/// Renders `object` to bytes, compact or indented with two spaces.
pub fn to_bytes(object: &Object, pretty: bool) -> JsonResult<Vec<u8>> {
    JsonRendererBuilder::new()
        .pretty_formatter(pretty)
        .build()
        .render(object)
}

/// Renders `object` to text, compact or indented with two spaces.
pub fn to_text(object: &Object, pretty: bool) -> JsonResult<String> {
    into_text(to_bytes(object, pretty)?)
}

pub(crate) fn into_text(bytes: Vec<u8>) -> JsonResult<String> {
    String::from_utf8(bytes).map_err(|error| {
        debug!("Rendered JSON is not UTF-8: {}", error);
        JsonError::BadFormat
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{JsonRendererBuilder, into_text, to_bytes, to_text};
    use crate::{core::object::Object, error::JsonError};

    fn car() -> Object {
        Object::new()
            .with("make", "Toyota")
            .with("model", "Rav4")
            .with("year", 2004)
    }

    #[test]
    fn compact_output_should_have_no_whitespace() {
        let text = to_text(&car(), false).unwrap();
        assert_eq!(text, r#"{"make":"Toyota","model":"Rav4","year":2004}"#);
    }

    #[test]
    fn pretty_output_should_be_indented() {
        let text = to_text(&Object::new().with("make", "BMW"), true).unwrap();
        assert_eq!(text, "{\n  \"make\": \"BMW\"\n}");
    }

    #[test]
    fn custom_indent_should_be_used() {
        let renderer = JsonRendererBuilder::new()
            .pretty_formatter(true)
            .indent(b"\t")
            .build();

        let text = renderer.render_text(&Object::new().with("year", 2012)).unwrap();
        assert_eq!(text, "{\n\t\"year\": 2012\n}");
    }

    #[test]
    fn non_encodable_object_should_be_refused() {
        let mut by_point = BTreeMap::new();
        by_point.insert((1, 1), "x");

        let object = car().with("points", by_point);

        assert!(matches!(
            to_bytes(&object, false),
            Err(JsonError::BadObjectWritable)
        ));
        assert!(matches!(
            to_text(&object, true),
            Err(JsonError::BadObjectWritable)
        ));
        assert!(matches!(
            JsonRendererBuilder::new()
                .build()
                .render_list(&[car(), object]),
            Err(JsonError::BadObjectWritable)
        ));
    }

    #[test]
    fn list_should_render_as_array() {
        let bytes = JsonRendererBuilder::new()
            .build()
            .render_list(&[car(), Object::new().with("make", "BMW")])
            .unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"[{"make":"Toyota","model":"Rav4","year":2004},{"make":"BMW"}]"#
        );
    }

    #[test]
    fn invalid_utf8_should_be_bad_format() {
        assert!(matches!(
            into_text(vec![0xff, 0xfe]),
            Err(JsonError::BadFormat)
        ));
    }
}
