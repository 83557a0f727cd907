//! Qualified name resolution
//!
//! A multi-part name `a.b.c` is resolved by looking at its first part:
//! - an index name or alias is stripped, leaving `b.c`
//! - a field name keeps the whole name, so nested fields are looked up as `a.b.c`
//!
//! Anything else is a syntax error.

use searchql_ast::QualifiedName;
use searchql_diagnostics::{Result, SQL0001, SqlError};
use searchql_types::Symbol;

use crate::AnalysisContext;

/// Strips index qualifiers from field names
pub struct QualifierAnalyzer<'a> {
    context: &'a AnalysisContext,
}

impl<'a> QualifierAnalyzer<'a> {
    pub fn new(context: &'a AnalysisContext) -> Self {
        Self { context }
    }

    /// Get the field name a qualified name refers to
    pub fn unqualified_name(&self, name: &QualifiedName) -> Result<String> {
        let Some(qualifier) = name.first() else {
            return Ok(name.to_string());
        };

        let env = self.context.environment();
        if env.is_defined(&Symbol::index(qualifier)) {
            Ok(name.rest().to_string())
        } else if env.is_defined(&Symbol::field(qualifier)) {
            Ok(name.to_string())
        } else {
            Err(SqlError::syntax(
                SQL0001,
                format!(
                    "The qualifier [{}] of qualified name [{}] must be an field name, index name or its alias",
                    qualifier, name
                ),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use searchql_diagnostics::ErrorKind;
    use searchql_types::ExprType;

    fn context() -> AnalysisContext {
        let mut ctx = AnalysisContext::new();
        ctx.define(Symbol::index("accounts"), ExprType::object());
        ctx.define(Symbol::field("address"), ExprType::object());
        ctx
    }

    #[test]
    fn test_simple_name_unchanged() {
        let ctx = context();
        let name = QualifiedName::simple("age");
        assert_eq!(QualifierAnalyzer::new(&ctx).unqualified_name(&name).unwrap(), "age");
    }

    #[test]
    fn test_index_qualifier_stripped() {
        let ctx = context();
        let name = QualifiedName::parse("accounts.address.city");
        assert_eq!(
            QualifierAnalyzer::new(&ctx).unqualified_name(&name).unwrap(),
            "address.city"
        );
    }

    #[test]
    fn test_field_qualifier_kept() {
        let ctx = context();
        let name = QualifiedName::parse("address.city");
        assert_eq!(
            QualifierAnalyzer::new(&ctx).unqualified_name(&name).unwrap(),
            "address.city"
        );
    }

    #[test]
    fn test_unknown_qualifier() {
        let ctx = context();
        let err = QualifierAnalyzer::new(&ctx)
            .unqualified_name(&QualifiedName::parse("orders.total"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SyntaxCheck);
    }
}
