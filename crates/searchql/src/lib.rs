//! SearchQL semantic analysis for Rust
//!
//! This crate bundles the SearchQL analysis pipeline:
//! - The unresolved tree a parser produces
//! - The type system and scoped symbol environment
//! - The function registry with scalar, aggregate, window and relevance functions
//! - The expression analyzer producing resolved, typed trees
//!
//! # Example
//!
//! ```ignore
//! use searchql::{StaticCatalog, analyze_for_index};
//! use searchql::ast::builder::{field, function, int_literal};
//!
//! let catalog = StaticCatalog::new().with_index("accounts", [("age", ExprType::Integer)]);
//! let expr = function(">", vec![field("age"), int_literal(30)]);
//! let resolved = analyze_for_index(&catalog, "accounts", &expr)?;
//! ```

// Re-export all public APIs from internal crates
pub use searchql_analyzer as analyzer;
pub use searchql_ast as ast;
pub use searchql_diagnostics as diagnostics;
pub use searchql_expression as expression;
pub use searchql_types as types;

// Convenience re-exports
pub use searchql_analyzer::{
    AnalysisContext, AnalyzerConfig, ExpressionAnalyzer, FieldCatalog, StaticCatalog,
};
pub use searchql_ast::UnresolvedExpression;
pub use searchql_diagnostics::{Result, SqlError};
pub use searchql_expression::{Expression, FunctionRegistry};
pub use searchql_types::ExprType;

/// Analyze an expression with the built-in registry
pub fn analyze(expr: &UnresolvedExpression, ctx: &mut AnalysisContext) -> Result<Expression> {
    ExpressionAnalyzer::new().analyze(expr, ctx)
}

/// Analyze an expression against the fields of one index
pub fn analyze_for_index(
    catalog: &(impl FieldCatalog + ?Sized),
    index: &str,
    expr: &UnresolvedExpression,
) -> Result<Expression> {
    let mut ctx = AnalysisContext::for_index(catalog, index, None)?;
    analyze(expr, &mut ctx)
}
