//! Constructors for unresolved expressions
//!
//! Used by parsers to build nodes and by tests to write trees compactly.

use crate::{
    AggregateExpr, ArgumentExpr, BinaryOp, BinaryOpExpr, CaseExpr, CastExpr, FunctionExpr,
    InExpr, IntervalExpr, Literal, QualifiedName, RelevanceFieldList, SortItem, SpanExpr,
    SpanUnit, UnaryOp, UnaryOpExpr, UnresolvedExpression, WhenClause, WindowExpr,
};

type Expr = UnresolvedExpression;

// === Identifiers and literals ===

/// Qualified name from parts
pub fn qualified_name<S: Into<String>>(parts: impl IntoIterator<Item = S>) -> Expr {
    Expr::QualifiedName(QualifiedName::new(parts))
}

/// Single-part field reference
pub fn field(name: impl Into<String>) -> Expr {
    Expr::QualifiedName(QualifiedName::simple(name))
}

pub fn null_literal() -> Expr {
    Expr::Literal(Literal::Null)
}

pub fn boolean_literal(value: bool) -> Expr {
    Expr::Literal(Literal::Boolean(value))
}

pub fn int_literal(value: i32) -> Expr {
    Expr::Literal(Literal::Integer(value))
}

pub fn long_literal(value: i64) -> Expr {
    Expr::Literal(Literal::Long(value))
}

pub fn float_literal(value: f32) -> Expr {
    Expr::Literal(Literal::Float(value))
}

pub fn double_literal(value: f64) -> Expr {
    Expr::Literal(Literal::Double(value))
}

pub fn string_literal(value: impl Into<String>) -> Expr {
    Expr::Literal(Literal::String(value.into()))
}

/// Interval literal, e.g. `interval_literal(long_literal(1), "DAY")`
pub fn interval_literal(value: Expr, unit: impl Into<String>) -> Expr {
    Expr::Interval(IntervalExpr {
        value: Box::new(value),
        unit: unit.into(),
    })
}

pub fn all_fields() -> Expr {
    Expr::AllFields
}

// === Operators ===

pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOp(BinaryOpExpr {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn unary(op: UnaryOp, operand: Expr) -> Expr {
    Expr::UnaryOp(UnaryOpExpr {
        op,
        operand: Box::new(operand),
    })
}

pub fn and(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::And, left, right)
}

pub fn or(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::Or, left, right)
}

pub fn xor(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::Xor, left, right)
}

pub fn not(operand: Expr) -> Expr {
    unary(UnaryOp::Not, operand)
}

pub fn equal_to(left: Expr, right: Expr) -> Expr {
    binary(BinaryOp::Equal, left, right)
}

/// `field IN (values...)`
pub fn in_list(field: Expr, values: Vec<Expr>) -> Expr {
    Expr::In(InExpr {
        field: Box::new(field),
        values,
    })
}

// === Functions ===

/// Function call by name, e.g. `function(">", vec![a, b])`
pub fn function(name: impl Into<String>, args: Vec<Expr>) -> Expr {
    Expr::Function(FunctionExpr {
        name: name.into(),
        args,
    })
}

/// Named argument
pub fn unresolved_arg(name: impl Into<String>, value: Expr) -> Expr {
    Expr::Argument(ArgumentExpr {
        name: name.into(),
        value: Box::new(value),
    })
}

/// Field to boost mapping
pub fn relevance_fields<S: Into<String>>(fields: impl IntoIterator<Item = (S, f32)>) -> Expr {
    Expr::RelevanceFieldList(RelevanceFieldList::new(fields))
}

/// `CAST(expression AS target)`
pub fn cast(expression: Expr, target: impl Into<String>) -> Expr {
    Expr::Cast(CastExpr {
        expression: Box::new(expression),
        target: target.into(),
    })
}

// === Conditionals ===

pub fn when(condition: Expr, result: Expr) -> WhenClause {
    WhenClause { condition, result }
}

/// CASE expression; pass `None` as `case_value` for the searched form
pub fn case_when(
    case_value: Option<Expr>,
    else_result: Option<Expr>,
    whens: Vec<WhenClause>,
) -> Expr {
    Expr::Case(CaseExpr {
        case_value: case_value.map(Box::new),
        whens,
        else_result: else_result.map(Box::new),
    })
}

// === Aggregation and windows ===

pub fn aggregate(name: impl Into<String>, field: Expr) -> Expr {
    Expr::Aggregate(AggregateExpr {
        name: name.into(),
        field: Box::new(field),
        args: Vec::new(),
        distinct: false,
        condition: None,
    })
}

pub fn filtered_aggregate(name: impl Into<String>, field: Expr, condition: Expr) -> Expr {
    Expr::Aggregate(AggregateExpr {
        name: name.into(),
        field: Box::new(field),
        args: Vec::new(),
        distinct: false,
        condition: Some(Box::new(condition)),
    })
}

pub fn distinct_aggregate(name: impl Into<String>, field: Expr) -> Expr {
    Expr::Aggregate(AggregateExpr {
        name: name.into(),
        field: Box::new(field),
        args: Vec::new(),
        distinct: true,
        condition: None,
    })
}

pub fn filtered_distinct_count(name: impl Into<String>, field: Expr, condition: Expr) -> Expr {
    Expr::Aggregate(AggregateExpr {
        name: name.into(),
        field: Box::new(field),
        args: Vec::new(),
        distinct: true,
        condition: Some(Box::new(condition)),
    })
}

pub fn window(function: Expr, partition_by: Vec<Expr>, sort_by: Vec<SortItem>) -> Expr {
    Expr::Window(WindowExpr {
        function: Box::new(function),
        partition_by,
        sort_by,
    })
}

pub fn span(field: Expr, value: Expr, unit: SpanUnit) -> Expr {
    Expr::Span(SpanExpr {
        field: Box::new(field),
        value: Box::new(value),
        unit,
    })
}
