//! Ranking window functions

use searchql_types::ExprType;

use crate::registry::call_builder;
use crate::{FunctionCategory, FunctionDefinition, FunctionRegistry, FunctionSignature};

const RANKING: [&str; 3] = ["rank", "dense_rank", "row_number"];

pub fn register(registry: &mut FunctionRegistry) {
    for name in RANKING {
        registry.register(FunctionDefinition::new(
            FunctionSignature::new(name, Vec::new(), ExprType::Long),
            FunctionCategory::Window,
            call_builder(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use crate::{FunctionCategory, FunctionRegistry, dsl};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rank_is_window_only() {
        let registry = FunctionRegistry::builtin();
        let expr = registry
            .compile("rank", FunctionCategory::Window, Vec::new())
            .unwrap();
        assert_eq!(expr, crate::Expression::Function(dsl::rank()));
        assert!(!registry.contains("rank", FunctionCategory::Scalar));
    }
}
