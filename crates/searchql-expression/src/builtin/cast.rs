//! Type-specific cast functions
//!
//! `CAST(x AS T)` resolves to the function `cast_to_<t>` applied to `x`. Each
//! cast function has one overload per source type the coercion rules allow
//! to convert explicitly into its target.

use searchql_types::{ExprType, TypeCoercer};

use crate::error::{FunctionError, FunctionResult};
use crate::{FunctionDefinition, FunctionRegistry, FunctionSignature};

/// Every source type a cast may start from
const SOURCE_TYPES: [ExprType; 10] = [
    ExprType::Undefined,
    ExprType::Boolean,
    ExprType::Integer,
    ExprType::Long,
    ExprType::Float,
    ExprType::Double,
    ExprType::String,
    ExprType::Date,
    ExprType::Time,
    ExprType::Timestamp,
];

const TARGETS: [(&str, ExprType); 9] = [
    ("cast_to_string", ExprType::String),
    ("cast_to_boolean", ExprType::Boolean),
    ("cast_to_int", ExprType::Integer),
    ("cast_to_long", ExprType::Long),
    ("cast_to_float", ExprType::Float),
    ("cast_to_double", ExprType::Double),
    ("cast_to_date", ExprType::Date),
    ("cast_to_time", ExprType::Time),
    ("cast_to_timestamp", ExprType::Timestamp),
];

/// Name of the cast function producing `target`
///
/// Fails for targets without a cast function (INTERVAL, UNDEFINED and
/// structured types); that is a registry gap, not a user error.
pub fn cast_function_name(target: &ExprType) -> FunctionResult<&'static str> {
    TARGETS
        .iter()
        .find(|(_, ty)| ty == target)
        .map(|(name, _)| *name)
        .ok_or_else(|| FunctionError::UnsupportedCastTarget {
            target: target.to_string(),
        })
}

pub fn register(registry: &mut FunctionRegistry) {
    let coercer = TypeCoercer::new();
    for (name, target) in &TARGETS {
        for source in &SOURCE_TYPES {
            if source == target || coercer.can_explicitly_convert(source, target) {
                registry.register(FunctionDefinition::scalar(FunctionSignature::new(
                    *name,
                    vec![source.clone()],
                    target.clone(),
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FunctionCategory;
    use rstest::rstest;

    #[rstest]
    #[case(ExprType::Integer, "cast_to_int")]
    #[case(ExprType::Timestamp, "cast_to_timestamp")]
    #[case(ExprType::String, "cast_to_string")]
    fn test_cast_function_name(#[case] target: ExprType, #[case] expected: &str) {
        assert_eq!(cast_function_name(&target).unwrap(), expected);
    }

    #[test]
    fn test_interval_has_no_cast() {
        let err = cast_function_name(&ExprType::Interval).unwrap_err();
        assert_eq!(err.to_string(), "unsupported cast target type: INTERVAL");
    }

    #[test]
    fn test_cast_overloads() {
        let registry = FunctionRegistry::builtin();
        let def = registry
            .resolve("cast_to_int", FunctionCategory::Scalar, &[ExprType::String])
            .unwrap();
        assert_eq!(def.signature.return_type, ExprType::Integer);

        // TIME carries no date part
        assert!(
            registry
                .resolve("cast_to_date", FunctionCategory::Scalar, &[ExprType::Time])
                .is_err()
        );
    }
}
