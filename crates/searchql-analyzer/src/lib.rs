//! SearchQL semantic analyzer
//!
//! Resolves the unresolved tree produced by a SearchQL parser into a typed
//! expression tree:
//! - qualified names against the scoped type environment and named parse captures
//! - function calls against the function registry, including operators
//! - CASE branch type unification, `IN` desugaring, casts, aggregates and windows
//!
//! ```ignore
//! use searchql_analyzer::{AnalysisContext, ExpressionAnalyzer, StaticCatalog};
//!
//! let catalog = StaticCatalog::new().with_index("accounts", [("age", ExprType::Integer)]);
//! let mut ctx = AnalysisContext::for_index(&catalog, "accounts", None)?;
//! let resolved = ExpressionAnalyzer::new().analyze(&expr, &mut ctx)?;
//! ```

mod analyzer;
mod catalog;
mod config;
mod context;
mod qualifier;

pub use analyzer::{ExpressionAnalyzer, data_type_to_expr_type};
pub use catalog::{FieldCatalog, StaticCatalog};
pub use config::{AnalyzerConfig, DEFAULT_MAX_DEPTH};
pub use context::AnalysisContext;
pub use qualifier::QualifierAnalyzer;
