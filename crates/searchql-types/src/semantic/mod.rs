//! Semantic analysis support for SearchQL
//!
//! This module provides the symbol environment used by the analyzer:
//! - Namespaced symbols
//! - Scopes and the scope stack (`TypeEnvironment`)

mod symbols;
mod scope;

pub use symbols::*;
pub use scope::*;
