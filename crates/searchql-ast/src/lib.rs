//! SearchQL Abstract Syntax Tree definitions
//!
//! This crate defines the unresolved expression tree a SearchQL parser
//! produces: qualified names, literals, operators, function calls with
//! positional or named arguments, CASE, casts, aggregates, windows and the
//! relevance/search extensions. The tree carries no types; resolving it is
//! the analyzer's job.

pub mod builder;
mod expression;
mod literal;
mod operator;
mod types;

pub use expression::*;
pub use literal::*;
pub use operator::*;
pub use types::*;

/// Type alias for boxed expressions
pub type BoxExpr = Box<UnresolvedExpression>;
