//! Property value types for graph vertices and edges

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;

/// A typed property value carried by a vertex or an edge.
///
/// DateTime is a Unix timestamp in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(i64),
    Array(Vec<PropertyValue>),
    Map(HashMap<String, PropertyValue>),
    Null,
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::DateTime(_) => "DateTime",
            PropertyValue::Array(_) => "Array",
            PropertyValue::Map(_) => "Map",
            PropertyValue::Null => "Null",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::DateTime(dt) => write!(f, "DateTime({})", dt),
            PropertyValue::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            PropertyValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, val)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
            PropertyValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(arr: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(arr)
    }
}

impl From<HashMap<String, PropertyValue>> for PropertyValue {
    fn from(map: HashMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(map)
    }
}

/// Lossy only for non-i64 numbers; everything else maps one-to-one.
impl From<JsonValue> for PropertyValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => PropertyValue::Null,
            JsonValue::Bool(b) => PropertyValue::Boolean(b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => PropertyValue::Integer(i),
                None => PropertyValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => PropertyValue::String(s),
            JsonValue::Array(arr) => {
                PropertyValue::Array(arr.into_iter().map(PropertyValue::from).collect())
            }
            JsonValue::Object(obj) => PropertyValue::Map(
                obj.into_iter().map(|(k, v)| (k, PropertyValue::from(v))).collect(),
            ),
        }
    }
}

impl From<PropertyValue> for JsonValue {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::String(s) => JsonValue::String(s),
            PropertyValue::Integer(i) => JsonValue::from(i),
            PropertyValue::Float(f) => {
                serde_json::Number::from_f64(f).map(JsonValue::Number).unwrap_or(JsonValue::Null)
            }
            PropertyValue::Boolean(b) => JsonValue::Bool(b),
            PropertyValue::DateTime(dt) => JsonValue::from(dt),
            PropertyValue::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            PropertyValue::Map(map) => JsonValue::Object(
                map.into_iter().map(|(k, v)| (k, JsonValue::from(v))).collect(),
            ),
            PropertyValue::Null => JsonValue::Null,
        }
    }
}

/// Property map for storing vertex and edge properties
pub type PropertyMap = HashMap<String, PropertyValue>;
