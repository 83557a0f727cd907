//! Symbols for SearchQL Semantic Analysis
//!
//! A symbol is the lookup key of the type environment: a namespace tag plus
//! the (possibly dot-qualified) name. Two symbols with the same text in
//! different namespaces are distinct.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Namespace {
    /// Field of the queried index, dot-qualified for nested fields
    FieldName,
    /// Index name or index alias
    IndexName,
    /// Result of a window or aggregate function named by the planner
    FunctionName,
    /// Metadata field not visible through `*`
    HiddenField,
}

impl Namespace {
    /// Get the upper-case tag used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FieldName => "FIELD_NAME",
            Self::IndexName => "INDEX_NAME",
            Self::FunctionName => "FUNCTION_NAME",
            Self::HiddenField => "HIDDEN_FIELD",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A symbol in the type environment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    /// Symbol namespace
    pub namespace: Namespace,
    /// Symbol name
    pub name: String,
}

impl Symbol {
    /// Create a new symbol
    pub fn new(namespace: Namespace, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
        }
    }

    /// Create a FIELD_NAME symbol
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(Namespace::FieldName, name)
    }

    /// Create an INDEX_NAME symbol
    pub fn index(name: impl Into<String>) -> Self {
        Self::new(Namespace::IndexName, name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol(namespace={}, name={})", self.namespace, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_display() {
        assert_eq!(
            Symbol::field("undefined_field").to_string(),
            "Symbol(namespace=FIELD_NAME, name=undefined_field)"
        );
    }

    #[test]
    fn test_namespace_distinguishes_symbols() {
        assert_ne!(Symbol::field("logs"), Symbol::index("logs"));
        assert_eq!(Symbol::field("a.b"), Symbol::new(Namespace::FieldName, "a.b"));
    }
}
