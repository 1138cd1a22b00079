//! Field readers over raw API objects.
//!
//! Decoders read snake_case wire fields by name through these helpers so a
//! wrong-typed field always surfaces as `MalformedResponse` naming the field.

use crate::error::AppError;
use crate::types::OpaqueValue;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

pub(crate) type Object = Map<String, Value>;

pub(crate) fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Object, AppError> {
    value
        .as_object()
        .ok_or_else(|| AppError::malformed_field(what, "an object"))
}

pub(crate) fn required_str(obj: &Object, field: &str) -> Result<String, AppError> {
    optional_str(obj, field)?.ok_or_else(|| AppError::malformed_field(field, "a string"))
}

/// Missing and `null` both read as `None`.
pub(crate) fn optional_str(obj: &Object, field: &str) -> Result<Option<String>, AppError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AppError::malformed_field(field, "a string")),
    }
}

pub(crate) fn bool_or_false(obj: &Object, field: &str) -> Result<bool, AppError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(AppError::malformed_field(field, "a boolean")),
    }
}

pub(crate) fn optional_timestamp(
    obj: &Object,
    field: &str,
) -> Result<Option<DateTime<Utc>>, AppError> {
    optional_str(obj, field)?
        .map(|raw| {
            DateTime::parse_from_rfc3339(&raw)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| {
                    AppError::MalformedResponse(format!(
                        "field '{}' is not an RFC 3339 timestamp: {}",
                        field, e
                    ))
                })
        })
        .transpose()
}

/// Reads a field as an opaque value; a missing field reads as `Null`.
pub(crate) fn opaque(obj: &Object, field: &str) -> OpaqueValue {
    obj.get(field).map(OpaqueValue::from).unwrap_or_default()
}

/// The object nested under `key`, when there is one.
pub(crate) fn nested<'a>(obj: &'a Object, key: &str) -> Option<&'a Object> {
    obj.get(key).and_then(Value::as_object)
}
