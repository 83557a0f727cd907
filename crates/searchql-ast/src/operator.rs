//! SearchQL operators
//!
//! Operators are surface syntax only: the analyzer resolves each one to the
//! registry function named by [`BinaryOp::function_name`] or
//! [`UnaryOp::function_name`].

use serde::{Deserialize, Serialize};

/// Binary operators in SearchQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Logical or
    Or,
    /// Logical exclusive or
    Xor,

    /// Logical and
    And,

    /// Equality
    Equal,
    /// Inequality
    NotEqual,
    /// Less than
    Less,
    /// Less than or equal
    LessOrEqual,
    /// Greater than
    Greater,
    /// Greater than or equal
    GreaterOrEqual,

    /// Addition
    Add,
    /// Subtraction
    Subtract,

    /// Multiplication
    Multiply,
    /// Division
    Divide,
    /// Modulo
    Modulo,
}

impl BinaryOp {
    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::Xor => "xor",
            Self::And => "and",
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }

    /// Name of the registry function implementing this operator
    pub const fn function_name(&self) -> &'static str {
        self.symbol()
    }
}

/// Unary operators in SearchQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Logical not
    Not,
    /// Unary minus (negation)
    Negate,
}

impl UnaryOp {
    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Not => "not",
            Self::Negate => "-",
        }
    }

    /// Name of the registry function implementing this operator
    pub const fn function_name(&self) -> &'static str {
        self.symbol()
    }
}
