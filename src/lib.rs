#![cfg_attr(docsrs, feature(doc_cfg))]

/*!
 # Jsonable

 Typed reading and writing of JSON objects, on top of `serde_json`.

 Parsing JSON gives an untyped tree. **Jsonable** is the thin layer between that tree and your
 own types: it pulls typed fields out of an object with precise errors, and lets a type declare
 how it is built from an object and how it renders back to one.

 ## Core Concepts

- **Object:** An untyped JSON object. Writables build one field by field, parsers return one.
- **extract:** Reads the value under a key as a statically requested type. An absent key is a
  `MissingKey` error, a value of another JSON type is a `BadValue` error. Values are never
  converted between JSON types.
- **Readable:** A type constructible from an `Object`. Implementing `from_object` gives
  `from_bytes`, `from_text`, `from_reader` and the list constructors for free.
- **Writable:** A type that renders itself as an `Object`. Implementing `to_object` gives
  `to_bytes`, `to_text` and `write_to`, compact or pretty-printed.

 ## Features

| **Feature**   | **Description**                                               |
|---------------|---------------------------------------------------------------|
| time          | Enables helpers storing `time::OffsetDateTime` as epoch seconds |
| full          | Enables all available features                                |

 ## Getting Started

```rust
use jsonable::{JsonError, JsonResult, Object, Readable, Writable};

#[derive(Debug, PartialEq)]
struct Person {
    name: String,
    age: i64,
    is_registered: bool,
}

impl Readable for Person {
    fn from_object(object: &Object) -> JsonResult<Self> {
        Ok(Person {
            name: object.extract("name")?,
            age: object.extract("age")?,
            is_registered: object.extract("is_registered")?,
        })
    }
}

impl Writable for Person {
    fn to_object(&self) -> Object {
        Object::new()
            .with("name", &self.name)
            .with("age", self.age)
            .with("is_registered", self.is_registered)
    }
}

fn main() -> Result<(), JsonError> {
    let person = Person::from_text(r#"{"name":"Alex","age":25,"is_registered":true}"#)?;
    assert_eq!(person.age, 25);

    let text = person.to_text(false)?;
    assert_eq!(Person::from_text(&text)?, person);

    let missing = Person::from_text(r#"{"name":"Alex","age":25}"#);
    assert!(matches!(missing, Err(JsonError::MissingKey(key)) if key == "is_registered"));

    Ok(())
}
```

 ## License
 Licensed under either of

 -   Apache License, Version 2.0
 -   MIT license

 at your option.
 */

/// Objects, typed extraction and the readable / writable capabilities
pub mod core;

/// Error types for JSON operations
pub mod error;

#[doc(inline)]
pub use error::*;

/// Parsing and rendering of JSON
pub mod json;

pub use crate::core::object::{FromValue, Object, extract, extract_optional};
pub use crate::core::primitive::{
    Primitive, primitives_from, primitives_from_bytes, primitives_from_text,
};
pub use crate::core::readable::Readable;
#[cfg(feature = "time")]
pub use crate::core::timestamp::{extract_timestamp, from_epoch_seconds, to_epoch_seconds};
pub use crate::core::writable::{Jsonable, Writable, WritableList};
pub use crate::json::{JsonRenderer, JsonRendererBuilder};
