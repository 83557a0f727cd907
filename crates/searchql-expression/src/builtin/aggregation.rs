//! Aggregate functions
//!
//! Surface names such as `variance` are registry aliases of a canonical
//! implementation; the analyzer never rewrites names itself.

use searchql_types::ExprType;
use std::sync::Arc;

use super::{COMPARABLE_TYPES, NUMERIC_TYPES};
use crate::{
    AggregateExpression, Expression, FunctionBuilder, FunctionCategory, FunctionDefinition,
    FunctionRegistry, FunctionSignature,
};

/// Surface name -> canonical aggregate
const AGGREGATE_ALIASES: [(&str, &str); 4] = [
    ("variance", "var_pop"),
    ("var", "var_pop"),
    ("std", "stddev_pop"),
    ("stddev", "stddev_pop"),
];

/// Aggregates over numerics returning DOUBLE
const STATISTICS: [&str; 5] = ["avg", "var_pop", "var_samp", "stddev_pop", "stddev_samp"];

fn aggregate_builder() -> FunctionBuilder {
    Arc::new(|signature, args| {
        Expression::Aggregate(AggregateExpression {
            name: signature.name.clone(),
            args,
            return_type: signature.return_type.clone(),
            distinct: false,
            condition: None,
        })
    })
}

fn define(registry: &mut FunctionRegistry, name: &str, parameter: ExprType, return_type: ExprType) {
    registry.register(FunctionDefinition::new(
        FunctionSignature::new(name, vec![parameter], return_type),
        FunctionCategory::Aggregate,
        aggregate_builder(),
    ));
}

pub fn register(registry: &mut FunctionRegistry) {
    for name in STATISTICS {
        for ty in &NUMERIC_TYPES {
            define(registry, name, ty.clone(), ExprType::Double);
        }
    }

    for ty in &NUMERIC_TYPES {
        define(registry, "sum", ty.clone(), ty.clone());
    }

    for name in ["min", "max"] {
        for ty in &COMPARABLE_TYPES {
            define(registry, name, ty.clone(), ty.clone());
        }
    }

    // count accepts anything, including the `*` marker and nulls;
    // the field-less object() overload matches every STRUCT
    for ty in COMPARABLE_TYPES
        .iter()
        .cloned()
        .chain([ExprType::object(), ExprType::Undefined])
    {
        define(registry, "count", ty, ExprType::Long);
    }

    for (alias, canonical) in AGGREGATE_ALIASES {
        registry.register_alias(alias, canonical);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Expression, FunctionCategory, FunctionRegistry, dsl};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use searchql_types::ExprType;

    #[rstest]
    #[case("avg", ExprType::Integer, ExprType::Double)]
    #[case("sum", ExprType::Float, ExprType::Float)]
    #[case("min", ExprType::Timestamp, ExprType::Timestamp)]
    #[case("count", ExprType::String, ExprType::Long)]
    #[case("count", ExprType::Undefined, ExprType::Long)]
    #[case("variance", ExprType::Integer, ExprType::Double)]
    #[case("stddev", ExprType::Long, ExprType::Double)]
    fn test_aggregate_return_types(
        #[case] name: &str,
        #[case] arg: ExprType,
        #[case] expected: ExprType,
    ) {
        let def = FunctionRegistry::builtin()
            .resolve(name, FunctionCategory::Aggregate, &[arg])
            .unwrap();
        assert_eq!(def.signature.return_type, expected);
    }

    #[test]
    fn test_variance_builds_var_pop() {
        let arg = dsl::reference("integer_value", ExprType::Integer);
        let expr = FunctionRegistry::builtin()
            .compile("variance", FunctionCategory::Aggregate, vec![arg.clone()])
            .unwrap();
        assert_eq!(expr, Expression::Aggregate(dsl::var_pop(arg)));
    }

    #[test]
    fn test_count_struct() {
        let registry = FunctionRegistry::builtin();
        let struct_type = ExprType::structure(vec![searchql_types::StructField::new(
            "city",
            ExprType::String,
        )]);
        let def = registry
            .resolve("count", FunctionCategory::Aggregate, &[struct_type])
            .unwrap();
        assert_eq!(def.signature.return_type, ExprType::Long);
    }

    #[test]
    fn test_sum_rejects_strings() {
        assert!(
            FunctionRegistry::builtin()
                .resolve("sum", FunctionCategory::Aggregate, &[ExprType::String])
                .is_err()
        );
    }
}
