//! Interval construction

use searchql_types::ExprType;

use crate::{FunctionDefinition, FunctionRegistry, FunctionSignature};

pub fn register(registry: &mut FunctionRegistry) {
    for value in [ExprType::Integer, ExprType::Long] {
        registry.register(FunctionDefinition::scalar(FunctionSignature::new(
            "interval",
            vec![value, ExprType::String],
            ExprType::Interval,
        )));
    }
}

#[cfg(test)]
mod tests {
    use crate::{FunctionCategory, FunctionRegistry};
    use searchql_types::ExprType;

    #[test]
    fn test_interval_accepts_integral_values() {
        let registry = FunctionRegistry::builtin();
        for value in [ExprType::Integer, ExprType::Long] {
            let def = registry
                .resolve("interval", FunctionCategory::Scalar, &[value, ExprType::String])
                .unwrap();
            assert_eq!(def.signature.return_type, ExprType::Interval);
        }
        assert!(
            registry
                .resolve(
                    "interval",
                    FunctionCategory::Scalar,
                    &[ExprType::Double, ExprType::String]
                )
                .is_err()
        );
    }
}
