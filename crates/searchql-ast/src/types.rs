//! Type names and span units as written in SearchQL source

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a type or unit keyword is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseKeywordError {
    kind: &'static str,
    value: String,
}

impl ParseKeywordError {
    /// The text that failed to parse
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A data type keyword, as used by literals and `CAST(x AS <type>)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Null,
    Boolean,
    Integer,
    Long,
    Float,
    Double,
    String,
    Date,
    Time,
    Timestamp,
    Interval,
    Undefined,
}

impl DataType {
    /// Get the canonical upper-case keyword
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::Long => "LONG",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::String => "STRING",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Interval => "INTERVAL",
            Self::Undefined => "UNDEFINED",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for DataType {
    type Err = ParseKeywordError;

    /// Parse a type keyword, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NULL" => Ok(Self::Null),
            "BOOLEAN" => Ok(Self::Boolean),
            "INT" | "INTEGER" => Ok(Self::Integer),
            "LONG" => Ok(Self::Long),
            "FLOAT" => Ok(Self::Float),
            "DOUBLE" => Ok(Self::Double),
            "STRING" => Ok(Self::String),
            "DATE" => Ok(Self::Date),
            "TIME" => Ok(Self::Time),
            "TIMESTAMP" => Ok(Self::Timestamp),
            "INTERVAL" => Ok(Self::Interval),
            "UNDEFINED" => Ok(Self::Undefined),
            _ => Err(ParseKeywordError {
                kind: "data type",
                value: s.to_string(),
            }),
        }
    }
}

/// Bucket unit of a `span(field, interval, unit)` expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpanUnit {
    /// Plain numeric bucketing
    #[default]
    None,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

impl SpanUnit {
    /// Get the short unit name; `None` renders as the empty string
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Month => "M",
            Self::Quarter => "q",
            Self::Year => "y",
        }
    }
}

impl fmt::Display for SpanUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpanUnit {
    type Err = ParseKeywordError;

    /// Parse a unit; `M` (month) and `m` (minute) differ only by case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => return Ok(Self::None),
            "M" => return Ok(Self::Month),
            "m" => return Ok(Self::Minute),
            _ => {}
        }
        match s.to_ascii_lowercase().as_str() {
            "ms" | "millisecond" | "milliseconds" => Ok(Self::Millisecond),
            "s" | "second" | "seconds" => Ok(Self::Second),
            "minute" | "minutes" => Ok(Self::Minute),
            "h" | "hour" | "hours" => Ok(Self::Hour),
            "d" | "day" | "days" => Ok(Self::Day),
            "w" | "week" | "weeks" => Ok(Self::Week),
            "month" | "months" => Ok(Self::Month),
            "q" | "quarter" | "quarters" => Ok(Self::Quarter),
            "y" | "year" | "years" => Ok(Self::Year),
            _ => Err(ParseKeywordError {
                kind: "span unit",
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_from_str() {
        assert_eq!("INT".parse::<DataType>(), Ok(DataType::Integer));
        assert_eq!("integer".parse::<DataType>(), Ok(DataType::Integer));
        assert_eq!("Interval".parse::<DataType>(), Ok(DataType::Interval));
        assert!("BLOB".parse::<DataType>().is_err());
    }

    #[test]
    fn test_span_unit_case_matters_for_month_and_minute() {
        assert_eq!("M".parse::<SpanUnit>(), Ok(SpanUnit::Month));
        assert_eq!("m".parse::<SpanUnit>(), Ok(SpanUnit::Minute));
        assert_eq!("".parse::<SpanUnit>(), Ok(SpanUnit::None));
        assert_eq!(SpanUnit::None.to_string(), "");
        assert_eq!(SpanUnit::Quarter.name(), "q");
    }
}
