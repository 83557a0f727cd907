//! Unresolved expression AST nodes for SearchQL
//!
//! These nodes are produced by the parser and consumed by the analyzer. They
//! carry names and surface syntax only; no node here has a resolved type.

use indexmap::IndexMap;
use smallvec::SmallVec;
use std::fmt;

use crate::{BinaryOp, BoxExpr, Literal, SpanUnit, UnaryOp};

/// All unresolved SearchQL expression kinds
#[derive(Debug, Clone, PartialEq)]
pub enum UnresolvedExpression {
    // === Literals ===
    /// Literal value
    Literal(Literal),
    /// Interval literal (`INTERVAL 1 DAY`)
    Interval(IntervalExpr),
    /// The `*` wildcard
    AllFields,

    // === Identifiers ===
    /// Possibly qualified identifier (`alias.field.nested`)
    QualifiedName(QualifiedName),

    // === Operators ===
    /// Binary operation
    BinaryOp(BinaryOpExpr),
    /// Unary operation
    UnaryOp(UnaryOpExpr),
    /// `field IN (v1, v2, ...)`
    In(InExpr),

    // === Function Calls ===
    /// Function invocation, positional or named arguments
    Function(FunctionExpr),
    /// Named argument of a function call (`query='text'`)
    Argument(ArgumentExpr),
    /// Field to boost mapping of relevance functions
    RelevanceFieldList(RelevanceFieldList),

    // === Type Operations ===
    /// Explicit cast (`CAST(x AS INT)`)
    Cast(CastExpr),

    // === Conditionals ===
    /// CASE expression
    Case(CaseExpr),

    // === Aggregation and Windows ===
    /// Aggregate call, optionally DISTINCT and/or filtered
    Aggregate(AggregateExpr),
    /// Window function (`rank() OVER (...)`)
    Window(WindowExpr),
    /// Bucketing (`span(field, 1, 'd')`)
    Span(SpanExpr),
}

impl UnresolvedExpression {
    /// Short node kind name, used in traces
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "Literal",
            Self::Interval(_) => "Interval",
            Self::AllFields => "AllFields",
            Self::QualifiedName(_) => "QualifiedName",
            Self::BinaryOp(_) => "BinaryOp",
            Self::UnaryOp(_) => "UnaryOp",
            Self::In(_) => "In",
            Self::Function(_) => "Function",
            Self::Argument(_) => "Argument",
            Self::RelevanceFieldList(_) => "RelevanceFieldList",
            Self::Cast(_) => "Cast",
            Self::Case(_) => "Case",
            Self::Aggregate(_) => "Aggregate",
            Self::Window(_) => "Window",
            Self::Span(_) => "Span",
        }
    }
}

impl From<Literal> for UnresolvedExpression {
    fn from(value: Literal) -> Self {
        Self::Literal(value)
    }
}

impl From<QualifiedName> for UnresolvedExpression {
    fn from(value: QualifiedName) -> Self {
        Self::QualifiedName(value)
    }
}

/// Dot-separated identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Name parts in source order
    pub parts: SmallVec<[String; 2]>,
}

impl QualifiedName {
    /// Create from parts
    pub fn new<S: Into<String>>(parts: impl IntoIterator<Item = S>) -> Self {
        Self {
            parts: parts.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a single-part name
    pub fn simple(name: impl Into<String>) -> Self {
        Self::new([name.into()])
    }

    /// Split a dotted string into parts
    pub fn parse(dotted: &str) -> Self {
        Self::new(dotted.split('.'))
    }

    /// The qualifier, present only for multi-part names
    pub fn first(&self) -> Option<&str> {
        if self.parts.len() > 1 {
            self.parts.first().map(String::as_str)
        } else {
            None
        }
    }

    /// Name without its first part
    pub fn rest(&self) -> QualifiedName {
        Self::new(self.parts.iter().skip(1).cloned())
    }

    /// Check if this name has a single part
    pub fn is_simple(&self) -> bool {
        self.parts.len() == 1
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts.join("."))
    }
}

/// Interval literal
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalExpr {
    /// Numeric amount
    pub value: BoxExpr,
    /// Unit keyword as written (`DAY`, `HOUR`, ...)
    pub unit: String,
}

/// Binary operation expression
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOpExpr {
    pub op: BinaryOp,
    pub left: BoxExpr,
    pub right: BoxExpr,
}

/// Unary operation expression
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOpExpr {
    pub op: UnaryOp,
    pub operand: BoxExpr,
}

/// Membership test against a value list
#[derive(Debug, Clone, PartialEq)]
pub struct InExpr {
    pub field: BoxExpr,
    pub values: Vec<UnresolvedExpression>,
}

/// Function call expression
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    /// Function name as written
    pub name: String,
    /// Arguments; named arguments appear as [`UnresolvedExpression::Argument`]
    pub args: Vec<UnresolvedExpression>,
}

/// Named function argument
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentExpr {
    pub name: String,
    pub value: BoxExpr,
}

/// Relevance field list: field name to boost
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelevanceFieldList {
    pub fields: IndexMap<String, f32>,
}

impl RelevanceFieldList {
    /// Create from field/boost pairs
    pub fn new<S: Into<String>>(fields: impl IntoIterator<Item = (S, f32)>) -> Self {
        Self {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Explicit cast
#[derive(Debug, Clone, PartialEq)]
pub struct CastExpr {
    pub expression: BoxExpr,
    /// Target type keyword as written, e.g. `INT`
    pub target: String,
}

/// CASE expression
///
/// With a `case_value`, each WHEN holds a value compared for equality against
/// it; without one, each WHEN holds a boolean condition.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpr {
    pub case_value: Option<BoxExpr>,
    pub whens: Vec<WhenClause>,
    pub else_result: Option<BoxExpr>,
}

/// WHEN ... THEN ... clause
#[derive(Debug, Clone, PartialEq)]
pub struct WhenClause {
    pub condition: UnresolvedExpression,
    pub result: UnresolvedExpression,
}

/// Aggregate call
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateExpr {
    /// Function name as written
    pub name: String,
    /// Aggregated operand
    pub field: BoxExpr,
    /// Extra arguments
    pub args: Vec<UnresolvedExpression>,
    /// `COUNT(DISTINCT x)`
    pub distinct: bool,
    /// `FILTER (WHERE cond)`
    pub condition: Option<BoxExpr>,
}

/// Sort direction of a window ORDER BY item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Window ORDER BY item
#[derive(Debug, Clone, PartialEq)]
pub struct SortItem {
    pub direction: SortDirection,
    pub expression: UnresolvedExpression,
}

/// Window function
#[derive(Debug, Clone, PartialEq)]
pub struct WindowExpr {
    /// Function or aggregate being windowed
    pub function: BoxExpr,
    pub partition_by: Vec<UnresolvedExpression>,
    pub sort_by: Vec<SortItem>,
}

/// Span (bucketing) expression
#[derive(Debug, Clone, PartialEq)]
pub struct SpanExpr {
    pub field: BoxExpr,
    pub value: BoxExpr,
    pub unit: SpanUnit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name_parts() {
        let name = QualifiedName::parse("index_alias.nested.value");
        assert_eq!(name.first(), Some("index_alias"));
        assert_eq!(name.rest().to_string(), "nested.value");
        assert_eq!(name.to_string(), "index_alias.nested.value");
    }

    #[test]
    fn test_simple_name_has_no_qualifier() {
        let name = QualifiedName::simple("integer_value");
        assert!(name.is_simple());
        assert_eq!(name.first(), None);
    }
}
