// src/types/opaque.rs
//! A typed-but-generic JSON value for loosely specified API sub-objects.
//!
//! Dates, people, file lists and similar payloads vary by resource and API
//! version. They are kept as `OpaqueValue` so callers can pattern-match on
//! them without reaching for `serde_json::Value` and unchecked casts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OpaqueValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<OpaqueValue>),
    Object(IndexMap<String, OpaqueValue>),
}

impl OpaqueValue {
    pub fn is_null(&self) -> bool {
        matches!(self, OpaqueValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OpaqueValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OpaqueValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[OpaqueValue]> {
        match self {
            OpaqueValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, OpaqueValue>> {
        match self {
            OpaqueValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a key when this value is an object.
    pub fn get(&self, key: &str) -> Option<&OpaqueValue> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Converts back into a `serde_json::Value` for request bodies.
    pub fn to_json(&self) -> Value {
        match self {
            OpaqueValue::Null => Value::Null,
            OpaqueValue::Bool(b) => Value::Bool(*b),
            OpaqueValue::Number(n) => Value::Number(n.clone()),
            OpaqueValue::String(s) => Value::String(s.clone()),
            OpaqueValue::Array(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            OpaqueValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<&Value> for OpaqueValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => OpaqueValue::Null,
            Value::Bool(b) => OpaqueValue::Bool(*b),
            Value::Number(n) => OpaqueValue::Number(n.clone()),
            Value::String(s) => OpaqueValue::String(s.clone()),
            Value::Array(items) => OpaqueValue::Array(items.iter().map(Self::from).collect()),
            Value::Object(map) => OpaqueValue::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for OpaqueValue {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<OpaqueValue> for Value {
    fn from(value: OpaqueValue) -> Self {
        value.to_json()
    }
}
