//! Full-text relevance functions
//!
//! Relevance functions take only named parameters. Each function accepts a
//! fixed parameter set; `field` (or `fields`) and `query` are mandatory.

use crate::{FunctionRegistry, RelevanceSpec};

const SINGLE_FIELD: &[&str] = &["field", "query"];
const MULTI_FIELD: &[&str] = &["fields", "query"];

const RELEVANCE_FUNCTIONS: [RelevanceSpec; 7] = [
    RelevanceSpec {
        name: "match",
        required: SINGLE_FIELD,
        allowed: &[
            "field",
            "query",
            "analyzer",
            "auto_generate_synonyms_phrase",
            "fuzziness",
            "max_expansions",
            "prefix_length",
            "fuzzy_transpositions",
            "fuzzy_rewrite",
            "lenient",
            "operator",
            "minimum_should_match",
            "zero_terms_query",
            "boost",
        ],
    },
    RelevanceSpec {
        name: "match_phrase",
        required: SINGLE_FIELD,
        allowed: &["field", "query", "analyzer", "slop", "zero_terms_query", "boost"],
    },
    RelevanceSpec {
        name: "match_phrase_prefix",
        required: SINGLE_FIELD,
        allowed: &[
            "field",
            "query",
            "analyzer",
            "slop",
            "max_expansions",
            "zero_terms_query",
            "boost",
        ],
    },
    RelevanceSpec {
        name: "match_bool_prefix",
        required: SINGLE_FIELD,
        allowed: &[
            "field",
            "query",
            "minimum_should_match",
            "fuzziness",
            "prefix_length",
            "max_expansions",
            "fuzzy_transpositions",
            "fuzzy_rewrite",
            "boost",
            "analyzer",
            "operator",
        ],
    },
    RelevanceSpec {
        name: "multi_match",
        required: MULTI_FIELD,
        allowed: &[
            "fields",
            "query",
            "analyzer",
            "auto_generate_synonyms_phrase",
            "cutoff_frequency",
            "fuzziness",
            "fuzzy_transpositions",
            "lenient",
            "max_expansions",
            "minimum_should_match",
            "operator",
            "prefix_length",
            "slop",
            "tie_breaker",
            "type",
            "zero_terms_query",
            "boost",
        ],
    },
    RelevanceSpec {
        name: "simple_query_string",
        required: MULTI_FIELD,
        allowed: &[
            "fields",
            "query",
            "analyze_wildcard",
            "analyzer",
            "auto_generate_synonyms_phrase",
            "flags",
            "fuzzy_max_expansions",
            "fuzzy_prefix_length",
            "fuzzy_transpositions",
            "lenient",
            "default_operator",
            "minimum_should_match",
            "quote_field_suffix",
            "boost",
        ],
    },
    RelevanceSpec {
        name: "query_string",
        required: MULTI_FIELD,
        allowed: &[
            "fields",
            "query",
            "allow_leading_wildcard",
            "analyze_wildcard",
            "analyzer",
            "auto_generate_synonyms_phrase",
            "boost",
            "default_operator",
            "enable_position_increments",
            "fuzziness",
            "fuzzy_max_expansions",
            "fuzzy_prefix_length",
            "fuzzy_transpositions",
            "fuzzy_rewrite",
            "tie_breaker",
            "lenient",
            "type",
            "max_determinized_states",
            "minimum_should_match",
            "quote_analyzer",
            "phrase_slop",
            "quote_field_suffix",
            "rewrite",
            "time_zone",
        ],
    },
];

pub fn register(registry: &mut FunctionRegistry) {
    for spec in RELEVANCE_FUNCTIONS {
        registry.register_relevance(spec);
    }
}

#[cfg(test)]
mod tests {
    use crate::error::FunctionError;
    use crate::{Expression, FunctionRegistry, dsl};
    use pretty_assertions::assert_eq;
    use searchql_types::ExprValue;

    fn query(text: &str) -> Expression {
        dsl::named_argument("query", dsl::literal(text))
    }

    #[test]
    fn test_match_phrase_prefix() {
        let args = vec![
            dsl::named_argument("field", dsl::literal("test")),
            query("search query"),
            dsl::named_argument("slop", dsl::literal("3")),
        ];
        let expr = FunctionRegistry::builtin()
            .compile_relevance("match_phrase_prefix", args.clone())
            .unwrap();
        assert_eq!(expr, dsl::match_phrase_prefix(args));
        assert_eq!(expr.expr_type(), searchql_types::ExprType::Boolean);
    }

    #[test]
    fn test_unknown_parameter() {
        let fields = ExprValue::tuple([("title", ExprValue::float(1.0))]);
        let err = FunctionRegistry::builtin()
            .compile_relevance(
                "multi_match",
                vec![
                    dsl::named_argument("fields", dsl::literal(fields)),
                    query("search"),
                    dsl::named_argument("slop_typo", dsl::literal("1")),
                ],
            )
            .unwrap_err();
        assert_eq!(
            err,
            FunctionError::UnsupportedNamedArgument {
                function: "multi_match".to_string(),
                argument: "slop_typo".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_query() {
        let err = FunctionRegistry::builtin()
            .compile_relevance(
                "match",
                vec![dsl::named_argument("field", dsl::literal("title"))],
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "match function requires parameter query");
    }

    #[test]
    fn test_positional_argument_rejected() {
        let err = FunctionRegistry::builtin()
            .compile_relevance("match", vec![dsl::literal("title"), query("q")])
            .unwrap_err();
        assert!(matches!(err, FunctionError::PositionalArgument { .. }));
    }
}
