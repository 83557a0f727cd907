//! SearchQL diagnostics and error handling
//!
//! This crate provides the error taxonomy shared by every stage of semantic
//! analysis: structured error codes, the three user-visible failure kinds and
//! the diagnostic form handed to presentation layers.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for SearchQL analysis
pub type Result<T> = std::result::Result<T, SqlError>;
