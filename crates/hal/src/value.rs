use crate::error::{HalError, Result};
use crate::resource::Resource;

/// Property values are a closed union: HAL properties carry heterogeneous
/// but bounded types, so anything outside this set is rejected at the
/// conversion boundary rather than carried opaquely.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Boolean(bool),
    Null,
    /// A fully-formed resource nested as a property value.
    Resource(Box<Resource>),
}

impl Value {
    /// Bridges a `serde_json::Value` produced by field-mode record
    /// introspection into the property union. Floats, arrays, and objects
    /// have no HAL property representation.
    pub(crate) fn from_json(name: &str, json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(value) => Ok(Value::Boolean(value)),
            serde_json::Value::Number(number) => number.as_i64().map(Value::Integer).ok_or_else(|| {
                HalError::UnsupportedPropertyType(format!("field `{name}` is not an integer"))
            }),
            serde_json::Value::String(value) => Ok(Value::String(value)),
            serde_json::Value::Array(_) => Err(HalError::UnsupportedPropertyType(format!(
                "field `{name}` has unsupported type: array"
            ))),
            serde_json::Value::Object(_) => Err(HalError::UnsupportedPropertyType(format!(
                "field `{name}` has unsupported type: object"
            ))),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<Resource> for Value {
    fn from(value: Resource) -> Self {
        Value::Resource(Box::new(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

/// A typed record convertible into an ordered sequence of property pairs.
///
/// This is the explicit-registration half of the record adapter boundary:
/// `#[derive(Record)]` generates an implementation that enumerates named
/// struct fields in declaration order. The serde-based half lives on
/// [`Resource::with_fields`](crate::Resource::with_fields).
pub trait Record {
    /// Properties of this record, in declaration order.
    fn record_properties(&self) -> Vec<(String, Value)>;
}
