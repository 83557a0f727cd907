//! Property tests for coercion rules

use proptest::prelude::*;
use searchql_types::{ExprType, TypeCoercer};

fn scalar_type() -> impl Strategy<Value = ExprType> {
    prop_oneof![
        Just(ExprType::Undefined),
        Just(ExprType::Boolean),
        Just(ExprType::Integer),
        Just(ExprType::Long),
        Just(ExprType::Float),
        Just(ExprType::Double),
        Just(ExprType::String),
        Just(ExprType::Date),
        Just(ExprType::Time),
        Just(ExprType::Timestamp),
        Just(ExprType::Interval),
    ]
}

proptest! {
    #[test]
    fn implicit_conversion_is_reflexive(ty in scalar_type()) {
        let coercer = TypeCoercer::new();
        prop_assert!(coercer.can_implicitly_convert(&ty, &ty));
        prop_assert_eq!(coercer.conversion_cost(&ty, &ty), Some(0));
    }

    #[test]
    fn implicit_implies_explicit(from in scalar_type(), to in scalar_type()) {
        let coercer = TypeCoercer::new();
        if coercer.can_implicitly_convert(&from, &to) {
            prop_assert!(coercer.can_explicitly_convert(&from, &to));
        }
    }

    #[test]
    fn widen_result_accepts_every_input(types in prop::collection::vec(scalar_type(), 1..6)) {
        let coercer = TypeCoercer::new();
        if let Ok(widened) = coercer.widen(&types) {
            for ty in &types {
                prop_assert!(coercer.can_implicitly_convert(ty, &widened));
            }
        }
    }

    #[test]
    fn unify_accepts_identical_lists(ty in scalar_type(), n in 1usize..6) {
        let coercer = TypeCoercer::new();
        let types = vec![ty.clone(); n];
        prop_assert_eq!(coercer.unify(&types), Ok(ty));
    }

    #[test]
    fn strings_and_booleans_never_widen_to_numerics(
        from in prop_oneof![Just(ExprType::String), Just(ExprType::Boolean)],
        to in prop_oneof![
            Just(ExprType::Integer),
            Just(ExprType::Long),
            Just(ExprType::Float),
            Just(ExprType::Double),
        ],
    ) {
        prop_assert!(!TypeCoercer::new().can_implicitly_convert(&from, &to));
    }
}
