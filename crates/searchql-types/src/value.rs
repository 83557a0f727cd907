//! Literal values carried by resolved expressions
//!
//! This module defines the `ExprValue` enum used for literal payloads: scalar
//! constants, temporal constants and the tuple values built by the
//! analyzer (e.g. the field to boost mapping of relevance functions).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ExprType, StructField};

/// A literal value with an intrinsic type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ExprValue {
    // === Primitive Values ===
    /// Null value
    Null,
    /// Boolean value
    Boolean(bool),
    /// 32-bit signed integer
    Integer(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// String value
    String(String),

    // === Temporal Values ===
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Date and time
    Timestamp(NaiveDateTime),

    // === Structural Values ===
    /// Named values; equality ignores entry order
    Tuple(IndexMap<String, ExprValue>),
}

impl ExprValue {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get the type of this value
    pub fn expr_type(&self) -> ExprType {
        match self {
            Self::Null => ExprType::Undefined,
            Self::Boolean(_) => ExprType::Boolean,
            Self::Integer(_) => ExprType::Integer,
            Self::Long(_) => ExprType::Long,
            Self::Float(_) => ExprType::Float,
            Self::Double(_) => ExprType::Double,
            Self::String(_) => ExprType::String,
            Self::Date(_) => ExprType::Date,
            Self::Time(_) => ExprType::Time,
            Self::Timestamp(_) => ExprType::Timestamp,
            Self::Tuple(entries) => ExprType::Struct(
                entries
                    .iter()
                    .map(|(name, value)| StructField::new(name.clone(), value.expr_type()))
                    .collect(),
            ),
        }
    }


    // === Constructors ===

    /// Create a null value
    pub fn null() -> Self {
        Self::Null
    }

    /// Create a boolean value
    pub fn boolean(value: bool) -> Self {
        Self::Boolean(value)
    }

    /// Create an integer value
    pub fn integer(value: i32) -> Self {
        Self::Integer(value)
    }

    /// Create a long value
    pub fn long(value: i64) -> Self {
        Self::Long(value)
    }

    /// Create a float value
    pub fn float(value: f32) -> Self {
        Self::Float(value)
    }

    /// Create a double value
    pub fn double(value: f64) -> Self {
        Self::Double(value)
    }

    /// Create a string value
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create a tuple value from name/value pairs
    pub fn tuple<K: Into<String>>(entries: impl IntoIterator<Item = (K, ExprValue)>) -> Self {
        Self::Tuple(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl fmt::Display for ExprValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Long(l) => write!(f, "{}L", l),
            Self::Float(v) => write!(f, "{:?}F", v),
            Self::Double(v) => write!(f, "{:?}", v),
            Self::String(s) => write!(f, "\"{}\"", s),
            Self::Date(d) => write!(f, "DATE '{}'", d),
            Self::Time(t) => write!(f, "TIME '{}'", t),
            Self::Timestamp(ts) => write!(f, "TIMESTAMP '{}'", ts),
            Self::Tuple(entries) => {
                write!(f, "{{")?;
                for (i, (name, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{}", name, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl PartialEq for ExprValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Long(a), Self::Long(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Date(a), Self::Date(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Timestamp(a), Self::Timestamp(b)) => a == b,
            // IndexMap equality does not depend on insertion order
            (Self::Tuple(a), Self::Tuple(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for ExprValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for ExprValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for ExprValue {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f32> for ExprValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for ExprValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for ExprValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ExprValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_types() {
        assert_eq!(ExprValue::null().expr_type(), ExprType::Undefined);
        assert_eq!(ExprValue::from(1).expr_type(), ExprType::Integer);
        assert_eq!(ExprValue::from(1i64).expr_type(), ExprType::Long);
        assert_eq!(ExprValue::from(1.0f32).expr_type(), ExprType::Float);
        assert_eq!(ExprValue::from("x").expr_type(), ExprType::String);
    }

    #[test]
    fn test_tuple_equality_ignores_order() {
        let a = ExprValue::tuple([
            ("field1", ExprValue::float(1.0)),
            ("field2", ExprValue::float(0.3)),
        ]);
        let b = ExprValue::tuple([
            ("field2", ExprValue::float(0.3)),
            ("field1", ExprValue::float(1.0)),
        ]);
        assert_eq!(a, b);

        let c = ExprValue::tuple([("field1", ExprValue::float(1.0))]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_tuple_type_is_struct() {
        let value = ExprValue::tuple([("field", ExprValue::float(1.0))]);
        assert_eq!(
            value.expr_type(),
            ExprType::structure(vec![StructField::new("field", ExprType::Float)])
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ExprValue::from(1i64).to_string(), "1L");
        assert_eq!(ExprValue::from("DAY").to_string(), "\"DAY\"");
        assert_eq!(
            ExprValue::tuple([("f", ExprValue::float(1.0))]).to_string(),
            "{f:1.0F}"
        );
    }
}
