//! SearchQL type system
//!
//! This crate defines the SearchQL type system including:
//! - Expression types (BOOLEAN, INTEGER, ..., STRUCT, ARRAY)
//! - Coercion and widening rules
//! - Literal values
//! - Namespaced symbols and the scoped type environment

pub mod coercion;
pub mod semantic;
pub mod type_system;
pub mod value;

pub use coercion::*;
pub use semantic::*;
pub use type_system::*;
pub use value::*;
