//! End-to-end analysis through the facade

use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use rstest::rstest;
use searchql::ast::builder::{and, field, function, in_list, int_literal, string_literal};
use searchql::diagnostics::ErrorKind;
use searchql::expression::dsl;
use searchql::{ExprType, StaticCatalog, analyze_for_index};

fn catalog() -> StaticCatalog {
    StaticCatalog::new().with_index(
        "logs",
        [
            ("status", ExprType::Integer),
            ("host", ExprType::String),
            ("tags", ExprType::array(ExprType::String)),
        ],
    )
}

#[test]
fn resolves_compound_predicate() {
    let expr = and(
        in_list(field("status"), vec![int_literal(500), int_literal(503)]),
        function("=", vec![field("host"), string_literal("web-1")]),
    );
    let resolved = analyze_for_index(&catalog(), "logs", &expr).unwrap();

    let status = dsl::reference("status", ExprType::Integer);
    assert_eq!(
        resolved,
        dsl::and(
            dsl::or(
                dsl::equal(status.clone(), dsl::literal(500)),
                dsl::equal(status, dsl::literal(503))
            ),
            dsl::equal(
                dsl::reference("host", ExprType::String),
                dsl::literal("web-1")
            )
        )
    );
    assert_snapshot!(resolved, @r#"and(or(=(status, 500), =(status, 503)), =(host, "web-1"))"#);
}

#[rstest]
#[case("missing", ErrorKind::Semantic)]
#[case("tags", ErrorKind::SyntaxCheck)]
fn field_errors(#[case] name: &str, #[case] kind: ErrorKind) {
    let err = analyze_for_index(&catalog(), "logs", &field(name)).unwrap_err();
    assert_eq!(err.kind(), kind);
}

#[test]
fn error_converts_to_diagnostic() {
    let err = analyze_for_index(&catalog(), "logs", &field("tags")).unwrap_err();
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.code, err.code());
    assert_eq!(diagnostic.message, "Identifier [tags] of type [ARRAY] is not supported yet");
}
