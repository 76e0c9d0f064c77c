use log::warn;
use serde::{Serialize, Serializer, ser::Error};
use serde_json::{Map, Value};

use crate::{
    core::finite::Finite,
    error::{JsonError, JsonResult},
};

/// An untyped JSON object: string keys mapped to untyped values.
///
/// Objects come from two places. Parsing JSON yields an object whose values are all plain
/// [`Value`]s. Writables build one with [`Object::with`], which converts any
/// [`Serialize`] value on the fly; values JSON cannot represent (NaN or infinite floats, a
/// map keyed by tuples, a failing `Serialize` impl, a nested non-encodable object) are not stored but
/// remembered as rejected keys. Rendering an object with rejected keys fails with
/// [`JsonError::BadObjectWritable`].
///
/// # Examples
///
/// ```
/// use jsonable::Object;
///
/// let object = Object::new()
///     .with("name", "Alex")
///     .with("age", 25)
///     .with("is_registered", true);
///
/// let name: String = object.extract("name").unwrap();
/// assert_eq!(name, "Alex");
/// assert!(object.is_encodable());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    fields: Map<String, Value>,
    rejected: Vec<String>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts `value` to JSON and stores it under `key`.
    ///
    /// A value that cannot be represented in JSON (non-finite floats included) is not
    /// stored; the key is recorded as rejected instead and any previous value for it is
    /// dropped.
    pub fn with<K: Into<String>, V: Serialize>(mut self, key: K, value: V) -> Self {
        self.store(key.into(), &value);
        self
    }

    /// Like [`Object::with`], through a mutable reference. Returns the previous value.
    pub fn insert<K: Into<String>, V: Serialize>(&mut self, key: K, value: V) -> Option<Value> {
        self.store(key.into(), &value)
    }

    fn store<V: Serialize + ?Sized>(&mut self, key: String, value: &V) -> Option<Value> {
        match serde_json::to_value(Finite(value)) {
            Ok(value) => {
                self.rejected.retain(|rejected| rejected != &key);
                self.fields.insert(key, value)
            }
            Err(error) => {
                warn!("Value for key {} is not representable in JSON: {}", key, error);
                let previous = self.fields.remove(&key);
                if !self.rejected.contains(&key) {
                    self.rejected.push(key);
                }
                previous
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.rejected.retain(|rejected| rejected != key);
        self.fields.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of stored values. Rejected keys are not counted, see [`Object::rejected_keys`].
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when no value is stored, rejected keys aside.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Returns `true` when every value handed to [`Object::with`] was representable in JSON.
    pub fn is_encodable(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Keys whose value could not be converted to JSON, in insertion order.
    pub fn rejected_keys(&self) -> &[String] {
        &self.rejected
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Consumes the object, failing if any key was rejected.
    pub fn into_map(self) -> JsonResult<Map<String, Value>> {
        if self.is_encodable() {
            Ok(self.fields)
        } else {
            Err(JsonError::BadObjectWritable)
        }
    }

    /// Consumes the object into a [`Value::Object`], failing if any key was rejected.
    pub fn into_value(self) -> JsonResult<Value> {
        self.into_map().map(Value::Object)
    }

    /// Method form of [`extract`].
    pub fn extract<T: FromValue>(&self, key: &str) -> JsonResult<T> {
        extract(self, key)
    }

    /// Method form of [`extract_optional`].
    pub fn extract_optional<T: FromValue>(&self, key: &str) -> JsonResult<Option<T>> {
        extract_optional(self, key)
    }
}

impl From<Map<String, Value>> for Object {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            rejected: Vec::new(),
        }
    }
}

impl TryFrom<Value> for Object {
    type Error = JsonError;

    fn try_from(value: Value) -> JsonResult<Self> {
        match value {
            Value::Object(fields) => Ok(Object::from(fields)),
            _ => Err(JsonError::BadFormat),
        }
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.is_encodable() {
            return Err(S::Error::custom(format!(
                "object holds non-JSON values for keys: {}",
                self.rejected.join(", ")
            )));
        }

        self.fields.serialize(serializer)
    }
}

/// Runtime type assertion from an untyped JSON value.
///
/// Implementations check the value's JSON type and return `None` on mismatch. They never
/// convert between JSON types: a number is not stringified, a string is not parsed.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

// Integral JSON numbers are valid doubles as well.
impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

macro_rules! signed_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Option<Self> {
                    value.as_i64().and_then(|n| <$t>::try_from(n).ok())
                }
            }
        )*
    };
}

macro_rules! unsigned_from_value {
    ($($t:ty),*) => {
        $(
            impl FromValue for $t {
                fn from_value(value: &Value) -> Option<Self> {
                    value.as_u64().and_then(|n| <$t>::try_from(n).ok())
                }
            }
        )*
    };
}

signed_from_value!(i8, i16, i32, i64, isize);
unsigned_from_value!(u8, u16, u32, u64, usize);

impl FromValue for Object {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(|fields| Object::from(fields.clone()))
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_value).collect()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Reads the value stored under `key` as a `T`.
///
/// # Errors
///
/// - [`JsonError::MissingKey`] when `key` is absent.
/// - [`JsonError::BadValue`] when the stored value is not a `T`.
///
/// # Examples
///
/// ```
/// use jsonable::{extract, JsonError, Object};
///
/// let object = Object::new().with("age", 25);
///
/// let age: i64 = extract(&object, "age").unwrap();
/// assert_eq!(age, 25);
///
/// assert!(matches!(extract::<String>(&object, "age"), Err(JsonError::BadValue { .. })));
/// assert!(matches!(extract::<i64>(&object, "email"), Err(JsonError::MissingKey(_))));
/// ```
pub fn extract<T: FromValue>(object: &Object, key: &str) -> JsonResult<T> {
    let value = object
        .get(key)
        .ok_or_else(|| JsonError::MissingKey(key.to_string()))?;

    T::from_value(value).ok_or_else(|| JsonError::bad_value(key, value))
}

/// Like [`extract`], but an absent key or a JSON `null` yields `Ok(None)`.
pub fn extract_optional<T: FromValue>(object: &Object, key: &str) -> JsonResult<Option<T>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::from_value(value)
            .map(Some)
            .ok_or_else(|| JsonError::bad_value(key, value)),
    }
}
