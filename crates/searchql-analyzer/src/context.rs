//! Analysis context
//!
//! The mutable state of one in-flight analysis: the scoped type environment,
//! the list of named derived expressions and the analyzer configuration.
//! Every analysis owns its own context.

use log::debug;
use regex::Regex;
use searchql_diagnostics::{Result, SQL0109, SQL0112, SqlError};
use searchql_expression::{Expression, NamedExpression, ParseExpression};
use searchql_types::{ExprType, Scope, Symbol, TypeEnvironment};

use crate::{AnalyzerConfig, FieldCatalog};

/// Per-analysis state
#[derive(Debug, Clone, Default)]
pub struct AnalysisContext {
    environment: TypeEnvironment,
    /// Named derived expressions, consulted before the environment
    named_expressions: Vec<NamedExpression>,
    config: AnalyzerConfig,
}

impl AnalysisContext {
    /// Create a context with an empty root scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context over an existing environment
    pub fn with_environment(environment: TypeEnvironment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    /// Create a context whose root scope holds the fields of `index`
    ///
    /// The index name and, when given, its alias are defined as STRUCT
    /// symbols in the INDEX_NAME namespace so they can qualify field names.
    pub fn for_index(
        catalog: &(impl FieldCatalog + ?Sized),
        index: &str,
        alias: Option<&str>,
    ) -> Result<Self> {
        let fields = catalog
            .field_types(index)
            .ok_or_else(|| SqlError::semantic(SQL0112, format!("no such index {index}")))?;

        let mut root = Scope::new();
        for (name, ty) in fields {
            root.define(Symbol::field(name), ty);
        }
        root.define(Symbol::index(index), ExprType::object());
        if let Some(alias) = alias {
            root.define(Symbol::index(alias), ExprType::object());
        }

        debug!("seeded root scope for index {} with {} symbols", index, root.len());
        Ok(Self::with_environment(TypeEnvironment::with_root(root)))
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn environment(&self) -> &TypeEnvironment {
        &self.environment
    }

    /// Enter a nested scope
    pub fn push(&mut self) {
        self.environment.push();
    }

    /// Leave the current nested scope
    pub fn pop(&mut self) -> Result<Scope> {
        Ok(self.environment.pop()?)
    }

    /// Get the innermost scope
    pub fn peek(&self) -> &Scope {
        self.environment.peek()
    }

    /// Define a symbol in the innermost scope
    pub fn define(&mut self, symbol: Symbol, expr_type: ExprType) {
        self.environment.define(symbol, expr_type);
    }

    /// Register a named derived expression
    pub fn add_named_expression(&mut self, expression: NamedExpression) {
        debug!("registered named expression {}", expression.name);
        self.named_expressions.push(expression);
    }

    /// Find a named derived expression; the latest registration wins
    pub fn named_expression(&self, name: &str) -> Option<&NamedExpression> {
        self.named_expressions
            .iter()
            .rev()
            .find(|named| named.name == name)
    }

    pub fn named_expressions(&self) -> &[NamedExpression] {
        &self.named_expressions
    }

    /// Register one parse capture per named group of `pattern`
    ///
    /// Each group becomes a named expression extracting that group from
    /// `source`. Unnamed groups are ignored.
    pub fn register_parse(&mut self, source: Expression, pattern: &str) -> Result<()> {
        let regex = Regex::new(pattern).map_err(|err| {
            SqlError::semantic(
                SQL0109,
                format!("Invalid regular expression {pattern}: {err}"),
            )
        })?;

        for group in regex.capture_names().flatten() {
            let parse = Expression::Parse(ParseExpression {
                source: Box::new(source.clone()),
                pattern: pattern.to_string(),
                identifier: group.to_string(),
            });
            self.add_named_expression(NamedExpression {
                name: group.to_string(),
                delegate: Box::new(parse),
                alias: None,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticCatalog;
    use pretty_assertions::assert_eq;
    use searchql_expression::dsl;

    #[test]
    fn test_for_index_seeds_symbols() {
        let catalog = StaticCatalog::new().with_index("accounts", [("age", ExprType::Integer)]);
        let ctx = AnalysisContext::for_index(&catalog, "accounts", Some("a")).unwrap();

        let env = ctx.environment();
        assert_eq!(env.lookup(&Symbol::field("age")), Some(&ExprType::Integer));
        assert_eq!(env.lookup(&Symbol::index("accounts")), Some(&ExprType::object()));
        assert_eq!(env.lookup(&Symbol::index("a")), Some(&ExprType::object()));
        assert_eq!(env.depth(), 0);
    }

    #[test]
    fn test_unknown_index() {
        let err = AnalysisContext::for_index(&StaticCatalog::new(), "missing", None).unwrap_err();
        assert_eq!(err.to_string(), "no such index missing");
    }

    #[test]
    fn test_register_parse() {
        let mut ctx = AnalysisContext::new();
        let source = dsl::reference("message", ExprType::String);
        ctx.register_parse(source.clone(), r"(?<host>\S+) (?<code>\d+) (\w+)")
            .unwrap();

        let names: Vec<_> = ctx.named_expressions().iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["host", "code"]);

        let code = ctx.named_expression("code").unwrap();
        assert_eq!(
            *code.delegate,
            dsl::parsed(source, r"(?<host>\S+) (?<code>\d+) (\w+)", "code")
        );
    }

    #[test]
    fn test_register_parse_invalid_pattern() {
        let mut ctx = AnalysisContext::new();
        let err = ctx
            .register_parse(dsl::reference("message", ExprType::String), "(?<open")
            .unwrap_err();
        assert!(err.message().starts_with("Invalid regular expression (?<open"));
    }

    #[test]
    fn test_pop_root_fails() {
        let mut ctx = AnalysisContext::new();
        ctx.push();
        assert!(ctx.pop().is_ok());
        let err = ctx.pop().unwrap_err();
        assert_eq!(err.to_string(), "cannot pop the root scope of the type environment");
    }
}
