//! Wire encodings of a [`FilterSet`].
//!
//! The admin API accepts filters either as query parameters (user listing) or
//! as a `filters` object inside a JSON body (group membership). Both forms drop
//! blank values and keep the key unchanged.

use super::catalog::{self, ValueKind};
use super::set::FilterSet;
use super::value::{parse_value, FilterValue, ParseError};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use thiserror::Error;

/// Query parameter form: key to text value.
pub type QueryParams = IndexMap<String, String>;

/// Why a wire form could not be turned back into a [`FilterSet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("{key}: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: ParseError,
    },

    #[error("{key}: expected {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: ValueKind,
        found: &'static str,
    },
}

/// Text form for query strings. Arrays are comma-joined.
pub fn encode_query_params(filters: &FilterSet) -> QueryParams {
    filters
        .iter()
        .filter(|(_, value)| !value.is_blank())
        .map(|(key, value)| (key.to_string(), value.to_query_value()))
        .collect()
}

/// Native JSON form for request bodies.
pub fn encode_json_object(filters: &FilterSet) -> Map<String, Value> {
    filters
        .iter()
        .filter(|(_, value)| !value.is_blank())
        .map(|(key, value)| (key.to_string(), value.to_json()))
        .collect()
}

/// Rebuild a set from query parameters, parsing each value with its field kind.
///
/// Empty values are skipped, as the encoder never produces them.
pub fn decode_query_params<'a, I>(pairs: I) -> Result<FilterSet, DecodeError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut filters = FilterSet::new();
    for (key, raw) in pairs {
        if raw.is_empty() {
            continue;
        }
        let value =
            parse_value(catalog::kind_for(key), raw).map_err(|source| DecodeError::InvalidValue {
                key: key.to_string(),
                source,
            })?;
        filters.upsert(key, value);
    }
    Ok(filters)
}

/// Rebuild a set from a JSON `filters` object.
///
/// Catalog keys must hold a value of their kind. Unknown keys keep whatever
/// native type they carry. `null` and empty strings are skipped.
pub fn decode_json_object(object: &Map<String, Value>) -> Result<FilterSet, DecodeError> {
    let mut filters = FilterSet::new();
    for (key, json) in object {
        if json.is_null() || json.as_str() == Some("") {
            continue;
        }
        let value = match catalog::resolve(key) {
            Some(field) => typed_from_json(key, field.kind, json)?,
            None => untyped_from_json(key, json)?,
        };
        filters.upsert(key.as_str(), value);
    }
    Ok(filters)
}

fn typed_from_json(key: &str, kind: ValueKind, json: &Value) -> Result<FilterValue, DecodeError> {
    let mismatch = || DecodeError::TypeMismatch {
        key: key.to_string(),
        expected: kind,
        found: json_type_name(json),
    };

    match (kind, json) {
        (ValueKind::String, Value::String(s)) => Ok(FilterValue::String(s.clone())),
        (ValueKind::Boolean, Value::Bool(b)) => Ok(FilterValue::Boolean(*b)),
        (ValueKind::Number, Value::Number(n)) => {
            n.as_f64().map(FilterValue::Number).ok_or_else(mismatch)
        }
        (ValueKind::StringArray, Value::Array(items)) => {
            string_items(items).map(FilterValue::StringArray).ok_or_else(mismatch)
        }
        // Query-string style text is accepted for typed fields
        (_, Value::String(s)) => parse_value(kind, s).map_err(|source| DecodeError::InvalidValue {
            key: key.to_string(),
            source,
        }),
        _ => Err(mismatch()),
    }
}

fn untyped_from_json(key: &str, json: &Value) -> Result<FilterValue, DecodeError> {
    match json {
        Value::String(s) => Ok(FilterValue::String(s.clone())),
        Value::Bool(b) => Ok(FilterValue::Boolean(*b)),
        Value::Number(n) => n.as_f64().map(FilterValue::Number).ok_or_else(|| {
            DecodeError::TypeMismatch {
                key: key.to_string(),
                expected: ValueKind::Number,
                found: "number",
            }
        }),
        Value::Array(items) => {
            string_items(items)
                .map(FilterValue::StringArray)
                .ok_or_else(|| DecodeError::TypeMismatch {
                    key: key.to_string(),
                    expected: ValueKind::StringArray,
                    found: "mixed array",
                })
        }
        other => Err(DecodeError::TypeMismatch {
            key: key.to_string(),
            expected: ValueKind::String,
            found: json_type_name(other),
        }),
    }
}

fn string_items(items: &[Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

fn json_type_name(json: &Value) -> &'static str {
    match json {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
