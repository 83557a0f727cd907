//! Logical, comparison and arithmetic operators
//!
//! Operators are ordinary scalar functions named by their symbol, so `a > 1`
//! resolves exactly like a call `>(a, 1)`.

use searchql_types::ExprType;

use super::{COMPARABLE_TYPES, NUMERIC_TYPES};
use crate::{FunctionDefinition, FunctionRegistry, FunctionSignature};

const COMPARISONS: [&str; 6] = ["=", "!=", "<", "<=", ">", ">="];
const ARITHMETIC: [&str; 5] = ["+", "-", "*", "/", "%"];
const CONNECTIVES: [&str; 3] = ["and", "or", "xor"];

pub fn register(registry: &mut FunctionRegistry) {
    for name in CONNECTIVES {
        registry.register(FunctionDefinition::scalar(FunctionSignature::new(
            name,
            vec![ExprType::Boolean, ExprType::Boolean],
            ExprType::Boolean,
        )));
    }
    registry.register(FunctionDefinition::scalar(FunctionSignature::new(
        "not",
        vec![ExprType::Boolean],
        ExprType::Boolean,
    )));

    for name in COMPARISONS {
        for ty in &COMPARABLE_TYPES {
            registry.register(FunctionDefinition::scalar(FunctionSignature::new(
                name,
                vec![ty.clone(), ty.clone()],
                ExprType::Boolean,
            )));
        }
    }

    for name in ARITHMETIC {
        for ty in &NUMERIC_TYPES {
            registry.register(FunctionDefinition::scalar(FunctionSignature::new(
                name,
                vec![ty.clone(), ty.clone()],
                ty.clone(),
            )));
        }
    }

    // Unary minus shares the "-" name and is told apart by arity
    for ty in &NUMERIC_TYPES {
        registry.register(FunctionDefinition::scalar(FunctionSignature::new(
            "-",
            vec![ty.clone()],
            ty.clone(),
        )));
    }
}

#[cfg(test)]
mod tests {
    use crate::{FunctionCategory, FunctionRegistry};
    use rstest::rstest;
    use searchql_types::ExprType;

    #[rstest]
    #[case("=", ExprType::Integer, ExprType::Long, ExprType::Boolean)]
    #[case("<", ExprType::Date, ExprType::Date, ExprType::Boolean)]
    #[case("+", ExprType::Integer, ExprType::Double, ExprType::Double)]
    #[case("%", ExprType::Long, ExprType::Long, ExprType::Long)]
    #[case("and", ExprType::Boolean, ExprType::Undefined, ExprType::Boolean)]
    fn test_operator_resolution(
        #[case] name: &str,
        #[case] left: ExprType,
        #[case] right: ExprType,
        #[case] expected: ExprType,
    ) {
        let def = FunctionRegistry::builtin()
            .resolve(name, FunctionCategory::Scalar, &[left, right])
            .unwrap();
        assert_eq!(def.signature.return_type, expected);
    }

    #[test]
    fn test_string_does_not_add() {
        let result = FunctionRegistry::builtin().resolve(
            "+",
            FunctionCategory::Scalar,
            &[ExprType::String, ExprType::String],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unary_minus() {
        let def = FunctionRegistry::builtin()
            .resolve("-", FunctionCategory::Scalar, &[ExprType::Float])
            .unwrap();
        assert_eq!(def.signature.return_type, ExprType::Float);
    }
}
