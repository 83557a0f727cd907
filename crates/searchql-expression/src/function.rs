//! Function names, categories and signatures

use searchql_types::ExprType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical function name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FunctionName(String);

impl FunctionName {
    /// Create a function name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FunctionName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Where a function may be called
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionCategory {
    /// Row-level function, including operators and casts
    Scalar,
    /// Aggregate over a group of rows
    Aggregate,
    /// Ranking function usable only inside a window
    Window,
    /// Full-text search predicate taking named parameters
    Relevance,
}

impl fmt::Display for FunctionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Aggregate => write!(f, "aggregate"),
            Self::Window => write!(f, "window"),
            Self::Relevance => write!(f, "relevance"),
        }
    }
}

/// A positional function signature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSignature {
    /// Canonical function name
    pub name: FunctionName,
    /// Parameter types in order
    pub parameters: Vec<ExprType>,
    /// Return type
    pub return_type: ExprType,
}

impl FunctionSignature {
    /// Create a new function signature
    pub fn new(name: impl Into<String>, parameters: Vec<ExprType>, return_type: ExprType) -> Self {
        Self {
            name: FunctionName::new(name),
            parameters,
            return_type,
        }
    }

    /// Get parameter count
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    /// Render parameter types as `[T1,T2]`
    pub fn format_types(types: &[ExprType]) -> String {
        let names: Vec<_> = types.iter().map(ExprType::to_string).collect();
        format!("[{}]", names.join(","))
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} -> {}",
            self.name,
            Self::format_types(&self.parameters),
            self.return_type
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_display() {
        let sig = FunctionSignature::new(
            "=",
            vec![ExprType::Integer, ExprType::Integer],
            ExprType::Boolean,
        );
        assert_eq!(sig.to_string(), "=[INTEGER,INTEGER] -> BOOLEAN");
        assert_eq!(sig.arity(), 2);
    }
}
