//! Built-in function sets
//!
//! Each submodule registers one family of functions into a registry. The
//! shared builtin registry calls [`register_all`] exactly once.

mod aggregation;
mod cast;
mod datetime;
mod operators;
mod relevance;
mod window;

pub use cast::cast_function_name;

use searchql_types::ExprType;

use crate::FunctionRegistry;

/// Scalar types every comparison is defined over
const COMPARABLE_TYPES: [ExprType; 10] = [
    ExprType::Boolean,
    ExprType::Integer,
    ExprType::Long,
    ExprType::Float,
    ExprType::Double,
    ExprType::String,
    ExprType::Date,
    ExprType::Time,
    ExprType::Timestamp,
    ExprType::Interval,
];

/// Numeric types in widening order
const NUMERIC_TYPES: [ExprType; 4] = [
    ExprType::Integer,
    ExprType::Long,
    ExprType::Float,
    ExprType::Double,
];

/// Register every built-in function
pub fn register_all(registry: &mut FunctionRegistry) {
    operators::register(registry);
    cast::register(registry);
    datetime::register(registry);
    aggregation::register(registry);
    window::register(registry);
    relevance::register(registry);
}
