//! SearchQL Type System
//!
//! This module defines the closed set of expression types:
//! - `ExprType` enum representing scalar, temporal and structural types
//! - `StructField` describing a nested field of a STRUCT
//! - Type display and classification utilities

use serde::{Deserialize, Serialize};
use std::fmt;

/// The complete expression type representation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExprType {
    // === Special Types ===
    /// Type of the null literal, compatible with every other type
    Undefined,

    // === Primitive Types ===
    /// Boolean type
    Boolean,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// Unicode string
    String,

    // === Temporal Types ===
    /// Calendar date
    Date,
    /// Time of day
    Time,
    /// Date and time without zone
    Timestamp,
    /// Duration with a unit
    Interval,

    // === Structural Types ===
    /// Object with named nested fields
    #[serde(rename = "Struct")]
    Struct(Vec<StructField>),
    /// Homogeneous array, not resolvable as a reference
    #[serde(rename = "Array")]
    Array(Box<ExprType>),
}

impl ExprType {
    // === Constructors ===

    /// Create a STRUCT type without declared fields
    pub fn object() -> Self {
        Self::Struct(Vec::new())
    }

    /// Create a STRUCT type
    pub fn structure(fields: Vec<StructField>) -> Self {
        Self::Struct(fields)
    }

    /// Create an ARRAY type
    pub fn array(element_type: ExprType) -> Self {
        Self::Array(Box::new(element_type))
    }

    // === Type Properties ===

    /// Check if this is the UNDEFINED type
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Check if this is a numeric type
    pub fn is_numeric(&self) -> bool {
        self.numeric_rank().is_some()
    }

    /// Position in the numeric widening chain INTEGER < LONG < FLOAT < DOUBLE
    pub fn numeric_rank(&self) -> Option<u32> {
        match self {
            Self::Integer => Some(0),
            Self::Long => Some(1),
            Self::Float => Some(2),
            Self::Double => Some(3),
            _ => None,
        }
    }

    /// Get the nested fields of a STRUCT type
    pub fn struct_fields(&self) -> Option<&[StructField]> {
        match self {
            Self::Struct(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get the element type of an ARRAY type
    pub fn element_type(&self) -> Option<&ExprType> {
        match self {
            Self::Array(elem) => Some(elem),
            _ => None,
        }
    }

    /// Get the upper-case type name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
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
            Self::Struct(_) => "STRUCT",
            Self::Array(_) => "ARRAY",
        }
    }
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for ExprType {
    fn default() -> Self {
        Self::Undefined
    }
}

/// Named field of a STRUCT type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructField {
    /// Field name
    pub name: String,
    /// Field type
    pub field_type: ExprType,
}

impl StructField {
    /// Create a new struct field
    pub fn new(name: impl Into<String>, field_type: ExprType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_upper_case_name() {
        assert_eq!(ExprType::Integer.to_string(), "INTEGER");
        assert_eq!(ExprType::object().to_string(), "STRUCT");
        assert_eq!(ExprType::array(ExprType::String).to_string(), "ARRAY");
        assert_eq!(ExprType::Undefined.to_string(), "UNDEFINED");
    }

    #[test]
    fn test_numeric_rank() {
        assert!(ExprType::Integer.numeric_rank() < ExprType::Long.numeric_rank());
        assert!(ExprType::Float.numeric_rank() < ExprType::Double.numeric_rank());
        assert_eq!(ExprType::String.numeric_rank(), None);
        assert!(!ExprType::Boolean.is_numeric());
    }

    #[test]
    fn test_struct_fields() {
        let ty = ExprType::structure(vec![StructField::new("city", ExprType::String)]);
        assert_eq!(ty.struct_fields().map(<[_]>::len), Some(1));
        assert_eq!(ExprType::Integer.struct_fields(), None);
    }
}
