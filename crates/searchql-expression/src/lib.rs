//! Resolved SearchQL expressions and the function registry
//!
//! This crate provides:
//! - The resolved, fully typed [`Expression`] tree
//! - Function names, categories and signatures
//! - The [`FunctionRegistry`] with cost-ranked overload resolution
//! - Built-in operators, casts, aggregates, window and relevance functions
//! - A [`dsl`] for constructing resolved trees directly

mod builtin;
pub mod dsl;
pub mod error;
mod expression;
mod function;
pub mod registry;

pub use builtin::cast_function_name;
pub use error::{FunctionError, FunctionResult};
pub use expression::*;
pub use function::*;
pub use registry::{FunctionBuilder, FunctionDefinition, FunctionRegistry, RelevanceSpec};
