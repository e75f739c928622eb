//! Filter values and the raw-input parser.
//!
//! Operators type filter values as text. [`parse_value`] turns that text into a
//! typed [`FilterValue`] according to the field's [`ValueKind`], or explains why
//! it can't.

use super::catalog::ValueKind;
use serde::ser::{Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;
use thiserror::Error;

/// A typed filter value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    String(String),
    Boolean(bool),
    Number(f64),
    StringArray(Vec<String>),
}

impl FilterValue {
    /// The kind this value belongs to.
    pub fn kind(&self) -> ValueKind {
        match self {
            FilterValue::String(_) => ValueKind::String,
            FilterValue::Boolean(_) => ValueKind::Boolean,
            FilterValue::Number(_) => ValueKind::Number,
            FilterValue::StringArray(_) => ValueKind::StringArray,
        }
    }

    /// Whether the transport encoders drop this value.
    ///
    /// Only the empty string counts as "no value"; an empty array is still sent.
    pub fn is_blank(&self) -> bool {
        matches!(self, FilterValue::String(s) if s.is_empty())
    }

    /// Canonical text form used for query parameters.
    ///
    /// Arrays are joined with a bare comma, the rest use their natural text.
    pub fn to_query_value(&self) -> String {
        match self {
            FilterValue::StringArray(items) => items.join(","),
            other => other.to_string(),
        }
    }

    /// Native JSON form used for request bodies.
    pub fn to_json(&self) -> Value {
        match self {
            FilterValue::String(s) => Value::String(s.clone()),
            FilterValue::Boolean(b) => Value::Bool(*b),
            FilterValue::Number(n) => number_to_json(*n),
            FilterValue::StringArray(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FilterValue::StringArray(items) => Some(items),
            _ => None,
        }
    }
}

/// Display text: arrays joined with `", "`, scalars in natural form.
impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::String(s) => f.write_str(s),
            FilterValue::Boolean(b) => write!(f, "{}", b),
            FilterValue::Number(n) => f.write_str(&format_number(*n)),
            FilterValue::StringArray(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(value: Vec<String>) -> Self {
        FilterValue::StringArray(value)
    }
}

/// Why a raw filter input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Value is required.")]
    EmptyValue,

    #[error("Boolean value must be true or false, got '{0}'.")]
    InvalidBoolean(String),

    #[error("Number value is invalid: '{0}'.")]
    InvalidNumber(String),

    #[error("Array value needs at least one item.")]
    EmptyArray,
}

/// Parse raw operator input into a value of the given kind.
///
/// The input is trimmed first; blank input is always rejected.
pub fn parse_value(kind: ValueKind, raw: &str) -> Result<FilterValue, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyValue);
    }

    match kind {
        ValueKind::Boolean => match trimmed {
            "true" => Ok(FilterValue::Boolean(true)),
            "false" => Ok(FilterValue::Boolean(false)),
            other => Err(ParseError::InvalidBoolean(other.to_string())),
        },
        ValueKind::Number => trimmed
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(FilterValue::Number)
            .ok_or_else(|| ParseError::InvalidNumber(trimmed.to_string())),
        ValueKind::StringArray => {
            let items: Vec<String> = trimmed
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect();
            if items.is_empty() {
                Err(ParseError::EmptyArray)
            } else {
                Ok(FilterValue::StringArray(items))
            }
        }
        ValueKind::String => Ok(FilterValue::String(trimmed.to_string())),
    }
}

/// Decimal text for a number: `18` rather than `18.0`, `0` for negative zero.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}", n)
    }
}

// Integral values go out as JSON integers so `18` is not sent as `18.0`.
fn number_to_json(n: f64) -> Value {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}
