//! Scope Management for SearchQL Semantic Analysis
//!
//! This module holds the type environment: an explicit stack of owned scopes.
//! The root scope is seeded from the field catalog and is never popped; nested
//! analysis contexts push a child scope which may shadow, but never mutate,
//! bindings of the scopes below it.

use indexmap::IndexMap;
use log::debug;
use searchql_diagnostics::{SQL0100, SQL0110, SqlError};
use thiserror::Error;

use super::symbols::{Namespace, Symbol};
use crate::ExprType;

/// Scope errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// No visible scope defines the symbol
    #[error("can't resolve {symbol} in type env")]
    SymbolNotFound { symbol: Symbol },

    /// Attempt to pop the root scope
    #[error("cannot pop the root scope of the type environment")]
    EmptyStackUnderflow,
}

impl From<ScopeError> for SqlError {
    fn from(err: ScopeError) -> Self {
        let code = match err {
            ScopeError::SymbolNotFound { .. } => SQL0100,
            ScopeError::EmptyStackUnderflow => SQL0110,
        };
        SqlError::semantic(code, err.to_string())
    }
}

/// Scope result
pub type ScopeResult<T> = Result<T, ScopeError>;

/// A single frame of the type environment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    /// Symbols defined in this scope
    symbols: IndexMap<Symbol, ExprType>,
}

impl Scope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a symbol in this scope, overwriting an earlier definition
    pub fn define(&mut self, symbol: Symbol, expr_type: ExprType) {
        self.symbols.insert(symbol, expr_type);
    }

    /// Look up a symbol only in this scope
    pub fn lookup(&self, symbol: &Symbol) -> Option<&ExprType> {
        self.symbols.get(symbol)
    }

    /// Check if a symbol is defined in this scope
    pub fn is_defined(&self, symbol: &Symbol) -> bool {
        self.symbols.contains_key(symbol)
    }

    /// Get all symbols of a namespace in definition order
    pub fn symbols_in(&self, namespace: Namespace) -> impl Iterator<Item = (&Symbol, &ExprType)> {
        self.symbols
            .iter()
            .filter(move |(symbol, _)| symbol.namespace == namespace)
    }

    /// Number of symbols in this scope
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if this scope has no symbols
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Stack of scopes used during analysis
///
/// Exclusively owned by one in-flight analysis; concurrent analyses each
/// build their own environment.
#[derive(Debug, Clone)]
pub struct TypeEnvironment {
    /// Scope stack, root at index 0
    stack: Vec<Scope>,
}

impl TypeEnvironment {
    /// Create an environment holding only an empty root scope
    pub fn new() -> Self {
        Self {
            stack: vec![Scope::new()],
        }
    }

    /// Create an environment whose root scope is `root`
    pub fn with_root(root: Scope) -> Self {
        Self { stack: vec![root] }
    }

    /// Enter a new empty child scope
    pub fn push(&mut self) {
        self.stack.push(Scope::new());
        debug!("pushed scope, depth now {}", self.depth());
    }

    /// Leave the current scope, returning it
    pub fn pop(&mut self) -> ScopeResult<Scope> {
        if self.stack.len() <= 1 {
            return Err(ScopeError::EmptyStackUnderflow);
        }
        let scope = self.stack.pop().ok_or(ScopeError::EmptyStackUnderflow)?;
        debug!("popped scope, depth now {}", self.depth());
        Ok(scope)
    }

    /// Get the innermost scope
    pub fn peek(&self) -> &Scope {
        // The root scope is never popped so the stack is never empty
        &self.stack[self.stack.len() - 1]
    }

    /// Define a symbol in the innermost scope only
    pub fn define(&mut self, symbol: Symbol, expr_type: ExprType) {
        let last = self.stack.len() - 1;
        self.stack[last].define(symbol, expr_type);
    }

    /// Resolve a symbol, innermost scope first
    pub fn resolve(&self, symbol: &Symbol) -> ScopeResult<ExprType> {
        self.lookup(symbol)
            .cloned()
            .ok_or_else(|| ScopeError::SymbolNotFound {
                symbol: symbol.clone(),
            })
    }

    /// Look up a symbol without producing an error
    pub fn lookup(&self, symbol: &Symbol) -> Option<&ExprType> {
        self.stack.iter().rev().find_map(|scope| scope.lookup(symbol))
    }

    /// Check if a symbol is visible
    pub fn is_defined(&self, symbol: &Symbol) -> bool {
        self.lookup(symbol).is_some()
    }

    /// Number of user-pushed scopes above the root
    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }
}

impl Default for TypeEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_define_and_resolve() {
        let mut env = TypeEnvironment::new();
        env.define(Symbol::field("x"), ExprType::Integer);

        assert_eq!(env.resolve(&Symbol::field("x")), Ok(ExprType::Integer));
        assert!(!env.is_defined(&Symbol::index("x")));
    }

    #[test]
    fn test_child_shadows_without_mutating_parent() {
        let mut env = TypeEnvironment::new();
        env.define(Symbol::field("x"), ExprType::Integer);

        env.push();
        env.define(Symbol::field("x"), ExprType::String);
        assert_eq!(env.resolve(&Symbol::field("x")), Ok(ExprType::String));

        env.pop().unwrap();
        assert_eq!(env.resolve(&Symbol::field("x")), Ok(ExprType::Integer));
    }

    #[test]
    fn test_redefinition_last_write_wins() {
        let mut env = TypeEnvironment::new();
        env.define(Symbol::field("x"), ExprType::Integer);
        env.define(Symbol::field("x"), ExprType::Long);
        assert_eq!(env.resolve(&Symbol::field("x")), Ok(ExprType::Long));
        assert_eq!(env.peek().len(), 1);
    }

    #[test]
    fn test_symbol_not_found_message() {
        let env = TypeEnvironment::new();
        let err = env.resolve(&Symbol::field("undefined_field")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "can't resolve Symbol(namespace=FIELD_NAME, name=undefined_field) in type env"
        );
    }

    #[test]
    fn test_root_is_never_popped() {
        let mut env = TypeEnvironment::new();
        assert_eq!(env.pop(), Err(ScopeError::EmptyStackUnderflow));

        env.push();
        assert_eq!(env.depth(), 1);
        assert!(env.pop().is_ok());
        assert_eq!(env.pop(), Err(ScopeError::EmptyStackUnderflow));
    }

    #[test]
    fn test_symbols_in_namespace() {
        let mut scope = Scope::new();
        scope.define(Symbol::field("a"), ExprType::Integer);
        scope.define(Symbol::index("logs"), ExprType::object());
        scope.define(Symbol::field("b"), ExprType::String);

        let names: Vec<_> = scope
            .symbols_in(Namespace::FieldName)
            .map(|(s, _)| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
