//! Resolved expression tree
//!
//! Every node carries a statically determined [`ExprType`]. The tree is built
//! by the analyzer and by registry function builders; it is never produced
//! directly from source text.

use searchql_ast::{SortDirection, SpanUnit};
use searchql_types::{ExprType, ExprValue};
use std::fmt;

use crate::FunctionName;

/// A resolved, fully typed expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Typed reference to a field symbol
    Reference(ReferenceExpression),
    /// Constant value
    Literal(ExprValue),
    /// Scalar, window or relevance function call
    Function(FunctionExpression),
    /// Aggregate call with optional DISTINCT and filter
    Aggregate(AggregateExpression),
    /// CASE with typed branches
    Case(CaseExpression),
    /// Window function with partitioning and ordering
    Window(WindowExpression),
    /// Named argument of a function call
    NamedArgument(NamedArgumentExpression),
    /// Expression bound to a name
    Named(NamedExpression),
    /// Regex capture group extracted from a source expression
    Parse(ParseExpression),
    /// Bucketing of a field into fixed-size spans
    Span(SpanExpression),
}

impl Expression {
    /// Get the statically determined type of this expression
    pub fn expr_type(&self) -> ExprType {
        match self {
            Self::Reference(r) => r.expr_type.clone(),
            Self::Literal(v) => v.expr_type(),
            Self::Function(f) => f.return_type.clone(),
            Self::Aggregate(a) => a.return_type.clone(),
            Self::Case(c) => c.return_type.clone(),
            Self::Window(w) => w.function.expr_type(),
            Self::NamedArgument(n) => n.value.expr_type(),
            Self::Named(n) => n.delegate.expr_type(),
            Self::Parse(_) => ExprType::String,
            Self::Span(s) => s.field.expr_type(),
        }
    }

    /// Get the literal value if this is a literal
    pub fn as_literal(&self) -> Option<&ExprValue> {
        match self {
            Self::Literal(v) => Some(v),
            _ => None,
        }
    }

    /// Check if this is a parse capture, directly or behind a name
    pub fn is_parse(&self) -> bool {
        match self {
            Self::Parse(_) => true,
            Self::Named(n) => n.delegate.is_parse(),
            _ => false,
        }
    }
}

impl From<ExprValue> for Expression {
    fn from(value: ExprValue) -> Self {
        Self::Literal(value)
    }
}

/// Typed field reference
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceExpression {
    /// Unqualified, dot-joined field name
    pub name: String,
    pub expr_type: ExprType,
}

/// Resolved function call
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpression {
    pub name: FunctionName,
    pub args: Vec<Expression>,
    pub return_type: ExprType,
}

/// Resolved aggregate call
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateExpression {
    /// Canonical function name
    pub name: FunctionName,
    pub args: Vec<Expression>,
    pub return_type: ExprType,
    /// Aggregate only distinct values
    pub distinct: bool,
    /// Only rows satisfying this BOOLEAN condition are aggregated
    pub condition: Option<Box<Expression>>,
}

impl AggregateExpression {
    /// Attach a filter condition
    pub fn condition(mut self, condition: Expression) -> Self {
        self.condition = Some(Box::new(condition));
        self
    }

    /// Select the distinct-value variant
    pub fn distinct(mut self, distinct: bool) -> Self {
        self.distinct = distinct;
        self
    }
}

/// Resolved CASE expression
///
/// The simple form (`CASE v WHEN x ...`) is lowered to conditions `v = x`.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpression {
    pub whens: Vec<WhenExpression>,
    pub default: Option<Box<Expression>>,
    /// Common type of every branch result
    pub return_type: ExprType,
}

/// WHEN condition THEN result
#[derive(Debug, Clone, PartialEq)]
pub struct WhenExpression {
    pub condition: Expression,
    pub result: Expression,
}

/// Function evaluated over a window
#[derive(Debug, Clone, PartialEq)]
pub enum WindowFunction {
    /// Ranking function such as `rank()`
    Ranking(FunctionExpression),
    /// Aggregate evaluated as a window function
    Aggregate(AggregateExpression),
}

impl WindowFunction {
    /// Type of the function result
    pub fn expr_type(&self) -> ExprType {
        match self {
            Self::Ranking(f) => f.return_type.clone(),
            Self::Aggregate(a) => a.return_type.clone(),
        }
    }
}

/// Resolved window function
#[derive(Debug, Clone, PartialEq)]
pub struct WindowExpression {
    pub function: WindowFunction,
    pub partition_by: Vec<Expression>,
    pub sort_by: Vec<(SortDirection, Expression)>,
}

/// `name = value` function argument
#[derive(Debug, Clone, PartialEq)]
pub struct NamedArgumentExpression {
    pub name: String,
    pub value: Box<Expression>,
}

/// Expression bound to a name
#[derive(Debug, Clone, PartialEq)]
pub struct NamedExpression {
    pub name: String,
    pub delegate: Box<Expression>,
    pub alias: Option<String>,
}

impl NamedExpression {
    /// Alias if present, otherwise the name
    pub fn name_or_alias(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

/// Named capture group of a regular expression applied to a source
#[derive(Debug, Clone, PartialEq)]
pub struct ParseExpression {
    pub source: Box<Expression>,
    pub pattern: String,
    pub identifier: String,
}

/// Span bucketing
#[derive(Debug, Clone, PartialEq)]
pub struct SpanExpression {
    pub field: Box<Expression>,
    pub value: Box<Expression>,
    pub unit: SpanUnit,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(r) => write!(f, "{}", r.name),
            Self::Literal(v) => write!(f, "{}", v),
            Self::Function(func) => write_call(f, func.name.as_str(), &func.args),
            Self::Aggregate(agg) => {
                write!(f, "{}(", agg.name)?;
                if agg.distinct {
                    write!(f, "DISTINCT ")?;
                }
                write_args(f, &agg.args)?;
                write!(f, ")")?;
                if let Some(cond) = &agg.condition {
                    write!(f, " FILTER(WHERE {})", cond)?;
                }
                Ok(())
            }
            Self::Case(case) => {
                write!(f, "CASE")?;
                for when in &case.whens {
                    write!(f, " WHEN {} THEN {}", when.condition, when.result)?;
                }
                if let Some(default) = &case.default {
                    write!(f, " ELSE {}", default)?;
                }
                write!(f, " END")
            }
            Self::Window(w) => {
                match &w.function {
                    WindowFunction::Ranking(func) => {
                        write_call(f, func.name.as_str(), &func.args)?
                    }
                    WindowFunction::Aggregate(agg) => {
                        write!(f, "{}", Expression::Aggregate(agg.clone()))?
                    }
                }
                write!(f, " OVER (")?;
                if !w.partition_by.is_empty() {
                    write!(f, "PARTITION BY ")?;
                    write_args(f, &w.partition_by)?;
                }
                if !w.sort_by.is_empty() {
                    if !w.partition_by.is_empty() {
                        write!(f, " ")?;
                    }
                    write!(f, "ORDER BY ")?;
                    for (i, (direction, expr)) in w.sort_by.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        let dir = match direction {
                            SortDirection::Ascending => "ASC",
                            SortDirection::Descending => "DESC",
                        };
                        write!(f, "{} {}", expr, dir)?;
                    }
                }
                write!(f, ")")
            }
            Self::NamedArgument(n) => write!(f, "{}={}", n.name, n.value),
            Self::Named(n) => write!(f, "{}", n.name_or_alias()),
            Self::Parse(p) => write!(f, "parse({}, \"{}\", {})", p.source, p.pattern, p.identifier),
            Self::Span(s) => write!(f, "span({}, {}, \"{}\")", s.field, s.value, s.unit),
        }
    }
}

fn write_call(f: &mut fmt::Formatter<'_>, name: &str, args: &[Expression]) -> fmt::Result {
    write!(f, "{}(", name)?;
    write_args(f, args)?;
    write!(f, ")")
}

fn write_args(f: &mut fmt::Formatter<'_>, args: &[Expression]) -> fmt::Result {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", arg)?;
    }
    Ok(())
}
