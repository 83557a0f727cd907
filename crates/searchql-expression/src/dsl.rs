//! Constructors for resolved expressions
//!
//! These build the same nodes the registry builders produce, which lets tests
//! and downstream planners write expected trees without going through
//! resolution.

use searchql_ast::{SortDirection, SpanUnit};
use searchql_types::{ExprType, ExprValue};

use crate::{
    AggregateExpression, CaseExpression, Expression, FunctionExpression, FunctionName,
    NamedArgumentExpression, NamedExpression, ParseExpression, ReferenceExpression,
    SpanExpression, WhenExpression, WindowExpression, WindowFunction,
};

// === References and literals ===

pub fn reference(name: impl Into<String>, expr_type: ExprType) -> Expression {
    Expression::Reference(ReferenceExpression {
        name: name.into(),
        expr_type,
    })
}

pub fn literal(value: impl Into<ExprValue>) -> Expression {
    Expression::Literal(value.into())
}

pub fn null_literal() -> Expression {
    Expression::Literal(ExprValue::Null)
}

// === Function calls ===

/// Call node with an explicit return type
pub fn function(name: &str, args: Vec<Expression>, return_type: ExprType) -> Expression {
    Expression::Function(call(name, args, return_type))
}

fn call(name: &str, args: Vec<Expression>, return_type: ExprType) -> FunctionExpression {
    FunctionExpression {
        name: FunctionName::new(name),
        args,
        return_type,
    }
}

fn predicate(name: &str, args: Vec<Expression>) -> Expression {
    function(name, args, ExprType::Boolean)
}

pub fn and(left: Expression, right: Expression) -> Expression {
    predicate("and", vec![left, right])
}

pub fn or(left: Expression, right: Expression) -> Expression {
    predicate("or", vec![left, right])
}

pub fn xor(left: Expression, right: Expression) -> Expression {
    predicate("xor", vec![left, right])
}

pub fn not(operand: Expression) -> Expression {
    predicate("not", vec![operand])
}

pub fn equal(left: Expression, right: Expression) -> Expression {
    predicate("=", vec![left, right])
}

pub fn not_equal(left: Expression, right: Expression) -> Expression {
    predicate("!=", vec![left, right])
}

pub fn less(left: Expression, right: Expression) -> Expression {
    predicate("<", vec![left, right])
}

pub fn less_or_equal(left: Expression, right: Expression) -> Expression {
    predicate("<=", vec![left, right])
}

pub fn greater(left: Expression, right: Expression) -> Expression {
    predicate(">", vec![left, right])
}

pub fn greater_or_equal(left: Expression, right: Expression) -> Expression {
    predicate(">=", vec![left, right])
}

pub fn cast_to_int(expression: Expression) -> Expression {
    function("cast_to_int", vec![expression], ExprType::Integer)
}

pub fn cast_to_string(expression: Expression) -> Expression {
    function("cast_to_string", vec![expression], ExprType::String)
}

/// `interval(value, unit)`
pub fn interval(value: Expression, unit: &str) -> Expression {
    function("interval", vec![value, literal(unit)], ExprType::Interval)
}

// === Relevance ===

pub fn named_argument(name: impl Into<String>, value: Expression) -> Expression {
    Expression::NamedArgument(NamedArgumentExpression {
        name: name.into(),
        value: Box::new(value),
    })
}

pub fn relevance(name: &str, args: Vec<Expression>) -> Expression {
    predicate(name, args)
}

pub fn match_bool_prefix(args: Vec<Expression>) -> Expression {
    relevance("match_bool_prefix", args)
}

pub fn match_phrase_prefix(args: Vec<Expression>) -> Expression {
    relevance("match_phrase_prefix", args)
}

pub fn multi_match(args: Vec<Expression>) -> Expression {
    relevance("multi_match", args)
}

pub fn simple_query_string(args: Vec<Expression>) -> Expression {
    relevance("simple_query_string", args)
}

pub fn query_string(args: Vec<Expression>) -> Expression {
    relevance("query_string", args)
}

// === Aggregation and windows ===

/// Aggregate with an explicit return type, no DISTINCT and no filter
pub fn aggregate(name: &str, arg: Expression, return_type: ExprType) -> AggregateExpression {
    AggregateExpression {
        name: FunctionName::new(name),
        args: vec![arg],
        return_type,
        distinct: false,
        condition: None,
    }
}

pub fn avg(arg: Expression) -> AggregateExpression {
    aggregate("avg", arg, ExprType::Double)
}

pub fn sum(arg: Expression) -> AggregateExpression {
    let return_type = arg.expr_type();
    aggregate("sum", arg, return_type)
}

pub fn count(arg: Expression) -> AggregateExpression {
    aggregate("count", arg, ExprType::Long)
}

pub fn distinct_count(arg: Expression) -> AggregateExpression {
    count(arg).distinct(true)
}

pub fn var_pop(arg: Expression) -> AggregateExpression {
    aggregate("var_pop", arg, ExprType::Double)
}

pub fn stddev_pop(arg: Expression) -> AggregateExpression {
    aggregate("stddev_pop", arg, ExprType::Double)
}

pub fn rank() -> FunctionExpression {
    call("rank", Vec::new(), ExprType::Long)
}

pub fn row_number() -> FunctionExpression {
    call("row_number", Vec::new(), ExprType::Long)
}

pub fn ranking_window(
    function: FunctionExpression,
    partition_by: Vec<Expression>,
    sort_by: Vec<(SortDirection, Expression)>,
) -> Expression {
    Expression::Window(WindowExpression {
        function: WindowFunction::Ranking(function),
        partition_by,
        sort_by,
    })
}

pub fn aggregate_window(
    aggregate: AggregateExpression,
    partition_by: Vec<Expression>,
    sort_by: Vec<(SortDirection, Expression)>,
) -> Expression {
    Expression::Window(WindowExpression {
        function: WindowFunction::Aggregate(aggregate),
        partition_by,
        sort_by,
    })
}

// === Conditionals ===

pub fn when(condition: Expression, result: Expression) -> WhenExpression {
    WhenExpression { condition, result }
}

/// CASE expression typed by its first non-UNDEFINED result
pub fn cases(default: Option<Expression>, whens: Vec<WhenExpression>) -> Expression {
    let return_type = whens
        .iter()
        .map(|w| w.result.expr_type())
        .chain(default.iter().map(Expression::expr_type))
        .find(|ty| !ty.is_undefined())
        .unwrap_or_default();
    Expression::Case(CaseExpression {
        whens,
        default: default.map(Box::new),
        return_type,
    })
}

// === Naming and extraction ===

pub fn named(name: impl Into<String>, delegate: Expression) -> Expression {
    Expression::Named(NamedExpression {
        name: name.into(),
        delegate: Box::new(delegate),
        alias: None,
    })
}

pub fn parsed(source: Expression, pattern: &str, identifier: &str) -> Expression {
    Expression::Parse(ParseExpression {
        source: Box::new(source),
        pattern: pattern.to_string(),
        identifier: identifier.to_string(),
    })
}

pub fn span(field: Expression, value: Expression, unit: SpanUnit) -> Expression {
    Expression::Span(SpanExpression {
        field: Box::new(field),
        value: Box::new(value),
        unit,
    })
}
