//! Type environment tests
//!
//! Tests the scope stack:
//! - Nearest enclosing scope wins
//! - Namespaces keep same-named symbols apart
//! - Error conversion into the shared error taxonomy

use pretty_assertions::assert_eq;
use searchql_diagnostics::{ErrorKind, SQL0100, SQL0110, SqlError};
use searchql_types::*;

fn seeded() -> TypeEnvironment {
    let mut root = Scope::new();
    root.define(Symbol::field("integer_value"), ExprType::Integer);
    root.define(Symbol::field("string_value"), ExprType::String);
    root.define(Symbol::index("logs"), ExprType::object());
    TypeEnvironment::with_root(root)
}

#[test]
fn resolves_through_the_scope_chain() {
    let mut env = seeded();
    env.push();
    env.push();
    assert_eq!(env.resolve(&Symbol::field("integer_value")), Ok(ExprType::Integer));
    assert_eq!(env.depth(), 2);
}

#[test]
fn namespaces_are_distinct() {
    let env = seeded();
    assert_eq!(env.resolve(&Symbol::index("logs")), Ok(ExprType::object()));
    assert!(env.resolve(&Symbol::field("logs")).is_err());
}

#[test]
fn nearest_scope_wins() {
    let mut env = seeded();
    env.push();
    env.define(Symbol::field("string_value"), ExprType::Timestamp);
    assert_eq!(env.resolve(&Symbol::field("string_value")), Ok(ExprType::Timestamp));
    assert_eq!(env.peek().len(), 1);
}

#[test]
fn errors_convert_into_sql_errors() {
    let env = seeded();
    let err: SqlError = env.resolve(&Symbol::field("missing")).unwrap_err().into();
    assert_eq!(err.kind(), ErrorKind::Semantic);
    assert_eq!(err.code(), SQL0100);
    assert_eq!(
        err.to_string(),
        "can't resolve Symbol(namespace=FIELD_NAME, name=missing) in type env"
    );

    let mut env = seeded();
    let err: SqlError = env.pop().unwrap_err().into();
    assert_eq!(err.code(), SQL0110);
}
