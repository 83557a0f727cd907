//! Literal AST nodes for SearchQL

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::DataType;

/// A literal value in SearchQL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// Null literal
    Null,
    /// Boolean literal (true/false)
    Boolean(bool),
    /// Integer literal (32-bit signed)
    Integer(i32),
    /// Long literal (64-bit signed)
    Long(i64),
    /// Float literal (32-bit)
    Float(f32),
    /// Double literal (64-bit)
    Double(f64),
    /// String literal
    String(String),
    /// Date literal (DATE 'YYYY-MM-DD')
    Date(NaiveDate),
    /// Time literal (TIME 'hh:mm:ss')
    Time(NaiveTime),
    /// Timestamp literal (TIMESTAMP 'YYYY-MM-DD hh:mm:ss')
    Timestamp(NaiveDateTime),
}

impl Literal {
    /// Get the data type written for this literal
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Null => DataType::Null,
            Self::Boolean(_) => DataType::Boolean,
            Self::Integer(_) => DataType::Integer,
            Self::Long(_) => DataType::Long,
            Self::Float(_) => DataType::Float,
            Self::Double(_) => DataType::Double,
            Self::String(_) => DataType::String,
            Self::Date(_) => DataType::Date,
            Self::Time(_) => DataType::Time,
            Self::Timestamp(_) => DataType::Timestamp,
        }
    }

    /// Check if this is the null literal
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
