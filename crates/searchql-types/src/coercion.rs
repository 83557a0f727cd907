//! SearchQL Type Coercion Rules
//!
//! This module implements the implicit and explicit type conversion rules
//! used by overload resolution and branch unification. It provides:
//! - Implicit numeric widening (INTEGER -> LONG -> FLOAT -> DOUBLE)
//! - Structural STRUCT compatibility
//! - Explicit (cast) convertibility
//! - Common-type computation over branch result lists

use crate::{ExprType, StructField};
use searchql_diagnostics::{SQL0105, SqlError};
use thiserror::Error;

/// Coercion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    /// Cannot convert between types
    #[error("Cannot convert from {from} to {to}")]
    CannotConvert { from: ExprType, to: ExprType },

    /// No single type covers every input type
    #[error("Types [{}] have no common type", type_list(.found))]
    TypeMismatch { found: Vec<ExprType> },
}

impl From<CoercionError> for SqlError {
    fn from(err: CoercionError) -> Self {
        SqlError::semantic(SQL0105, err.to_string())
    }
}

/// Type coercion result
pub type CoercionResult<T> = Result<T, CoercionError>;

/// Render types as a comma separated list, e.g. `STRING, STRING, INTEGER`
pub fn type_list(types: &[ExprType]) -> String {
    types
        .iter()
        .map(ExprType::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Type coercion rules
#[derive(Debug, Clone, Default)]
pub struct TypeCoercer;

impl TypeCoercer {
    /// Create a new type coercer
    pub fn new() -> Self {
        Self
    }

    /// Check whether a value of type `actual` may be used where `expected` is required
    pub fn is_compatible(&self, expected: &ExprType, actual: &ExprType) -> bool {
        self.can_implicitly_convert(actual, expected)
    }

    /// Check if implicit conversion from `from` to `to` is allowed
    ///
    /// Allowed implicit conversions:
    /// - UNDEFINED (null) -> any type
    /// - numeric widening along INTEGER, LONG, FLOAT, DOUBLE
    /// - STRUCT -> STRUCT when both declare the same fields with the same types
    /// - STRUCT -> the field-less `object()` STRUCT, which stands for any object
    /// - ARRAY covariance
    ///
    /// STRING and BOOLEAN never coerce into numerics.
    pub fn can_implicitly_convert(&self, from: &ExprType, to: &ExprType) -> bool {
        if from == to {
            return true;
        }

        match (from, to) {
            (ExprType::Undefined, _) => true,

            (ExprType::Struct(_), ExprType::Struct(to_fields)) if to_fields.is_empty() => true,
            (ExprType::Struct(from_fields), ExprType::Struct(to_fields)) => {
                same_fields(from_fields, to_fields)
            }

            (ExprType::Array(elem_from), ExprType::Array(elem_to)) => {
                self.can_implicitly_convert(elem_from, elem_to)
            }

            _ => match (from.numeric_rank(), to.numeric_rank()) {
                (Some(from_rank), Some(to_rank)) => from_rank <= to_rank,
                _ => false,
            },
        }
    }

    /// Check if explicit conversion (CAST) from `from` to `to` is allowed
    ///
    /// Explicit conversions include all implicit conversions plus:
    /// - any numeric to any numeric
    /// - BOOLEAN to and from numerics
    /// - STRING to and from every scalar type
    /// - TIMESTAMP to DATE or TIME, DATE to TIMESTAMP
    pub fn can_explicitly_convert(&self, from: &ExprType, to: &ExprType) -> bool {
        if self.can_implicitly_convert(from, to) {
            return true;
        }

        let scalar = |ty: &ExprType| {
            ty.is_numeric()
                || matches!(
                    ty,
                    ExprType::Boolean
                        | ExprType::String
                        | ExprType::Date
                        | ExprType::Time
                        | ExprType::Timestamp
                )
        };

        match (from, to) {
            (a, b) if a.is_numeric() && b.is_numeric() => true,
            (ExprType::Boolean, b) if b.is_numeric() => true,
            (a, ExprType::Boolean) if a.is_numeric() => true,
            (ExprType::String, b) if scalar(b) => true,
            (a, ExprType::String) if scalar(a) => true,
            (ExprType::Timestamp, ExprType::Date | ExprType::Time) => true,
            (ExprType::Date, ExprType::Timestamp) => true,
            _ => false,
        }
    }

    /// Calculate the conversion cost for implicit conversion
    ///
    /// Lower cost means more preferred conversion. Returns None if conversion is not possible.
    /// Used for function overload resolution.
    pub fn conversion_cost(&self, from: &ExprType, to: &ExprType) -> Option<u32> {
        if from == to {
            return Some(0);
        }

        if !self.can_implicitly_convert(from, to) {
            return None;
        }

        match (from, to) {
            // Null fits anywhere but never beats a real match
            (ExprType::Undefined, _) => Some(10),

            (ExprType::Array(elem_from), ExprType::Array(elem_to)) => {
                self.conversion_cost(elem_from, elem_to).map(|c| c + 1)
            }

            (ExprType::Struct(_), ExprType::Struct(_)) => Some(1),

            _ => match (from.numeric_rank(), to.numeric_rank()) {
                (Some(from_rank), Some(to_rank)) => Some(to_rank - from_rank),
                _ => Some(50),
            },
        }
    }

    /// Find the best common type for a list of types under implicit widening
    ///
    /// UNDEFINED entries are skipped; an all-UNDEFINED list yields UNDEFINED.
    pub fn widen(&self, types: &[ExprType]) -> CoercionResult<ExprType> {
        let mut defined = types.iter().filter(|ty| !ty.is_undefined());

        let Some(first) = defined.next() else {
            return Ok(ExprType::Undefined);
        };

        let mut result = first.clone();
        for ty in defined {
            result = self
                .common_pair(&result, ty)
                .ok_or_else(|| CoercionError::TypeMismatch {
                    found: types.to_vec(),
                })?;
        }
        Ok(result)
    }

    /// Require every non-UNDEFINED type in the list to be identical
    ///
    /// Used where branch results must agree without any silent widening.
    pub fn unify(&self, types: &[ExprType]) -> CoercionResult<ExprType> {
        let mut defined = types.iter().filter(|ty| !ty.is_undefined());

        let Some(first) = defined.next() else {
            return Ok(ExprType::Undefined);
        };

        if defined.all(|ty| ty == first) {
            Ok(first.clone())
        } else {
            Err(CoercionError::TypeMismatch {
                found: types.to_vec(),
            })
        }
    }

    /// Validate that a conversion is permitted
    pub fn validate_conversion(
        &self,
        from: &ExprType,
        to: &ExprType,
        explicit: bool,
    ) -> CoercionResult<()> {
        let allowed = if explicit {
            self.can_explicitly_convert(from, to)
        } else {
            self.can_implicitly_convert(from, to)
        };

        if allowed {
            Ok(())
        } else {
            Err(CoercionError::CannotConvert {
                from: from.clone(),
                to: to.clone(),
            })
        }
    }

    fn common_pair(&self, a: &ExprType, b: &ExprType) -> Option<ExprType> {
        if self.can_implicitly_convert(a, b) {
            return Some(b.clone());
        }
        if self.can_implicitly_convert(b, a) {
            return Some(a.clone());
        }
        None
    }
}

/// Field-by-field structural equality, ignoring declaration order
fn same_fields(left: &[StructField], right: &[StructField]) -> bool {
    left.len() == right.len()
        && right.iter().all(|field| {
            left.iter().any(|other| {
                other.name == field.name && same_type(&other.field_type, &field.field_type)
            })
        })
}

fn same_type(left: &ExprType, right: &ExprType) -> bool {
    match (left, right) {
        (ExprType::Struct(left), ExprType::Struct(right)) => same_fields(left, right),
        (ExprType::Array(left), ExprType::Array(right)) => same_type(left, right),
        _ => left == right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_numeric_promotion() {
        let coercer = TypeCoercer::new();

        assert!(coercer.can_implicitly_convert(&ExprType::Integer, &ExprType::Long));
        assert!(coercer.can_implicitly_convert(&ExprType::Integer, &ExprType::Double));
        assert!(coercer.can_implicitly_convert(&ExprType::Float, &ExprType::Double));

        // Reverse should not be implicit
        assert!(!coercer.can_implicitly_convert(&ExprType::Long, &ExprType::Integer));
        assert!(!coercer.can_implicitly_convert(&ExprType::Double, &ExprType::Float));
    }

    #[test]
    fn test_string_and_boolean_do_not_coerce_to_numerics() {
        let coercer = TypeCoercer::new();

        assert!(!coercer.can_implicitly_convert(&ExprType::String, &ExprType::Integer));
        assert!(!coercer.can_implicitly_convert(&ExprType::Boolean, &ExprType::Integer));
        assert!(coercer.can_explicitly_convert(&ExprType::Boolean, &ExprType::Integer));
        assert!(coercer.can_explicitly_convert(&ExprType::String, &ExprType::Double));
        assert!(!coercer.can_explicitly_convert(&ExprType::Date, &ExprType::Integer));
    }

    #[test]
    fn test_struct_is_structural() {
        let coercer = TypeCoercer::new();
        let address = ExprType::structure(vec![
            StructField::new("city", ExprType::String),
            StructField::new("zip", ExprType::Integer),
        ]);
        let wants_city = ExprType::structure(vec![StructField::new("city", ExprType::String)]);
        let wants_state = ExprType::structure(vec![StructField::new("state", ExprType::String)]);

        let reordered = ExprType::structure(vec![
            StructField::new("zip", ExprType::Integer),
            StructField::new("city", ExprType::String),
        ]);
        let wide_zip = ExprType::structure(vec![
            StructField::new("city", ExprType::String),
            StructField::new("zip", ExprType::Long),
        ]);

        assert!(!coercer.is_compatible(&wants_city, &address));
        assert!(!coercer.is_compatible(&address, &wants_city));
        assert!(!coercer.is_compatible(&wants_state, &address));
        assert!(!coercer.is_compatible(&wide_zip, &address));
        assert!(coercer.is_compatible(&reordered, &address));
        assert!(coercer.is_compatible(&ExprType::object(), &address));
        assert!(!coercer.is_compatible(&address, &ExprType::object()));
    }

    #[test]
    fn test_widen_keeps_struct_fields() {
        let coercer = TypeCoercer::new();
        let city = ExprType::structure(vec![StructField::new("city", ExprType::String)]);
        let city_zip = ExprType::structure(vec![
            StructField::new("city", ExprType::String),
            StructField::new("zip", ExprType::Integer),
        ]);

        assert!(coercer.widen(&[city.clone(), city_zip.clone()]).is_err());
        assert_eq!(coercer.widen(&[city_zip.clone(), city_zip.clone()]), Ok(city_zip));
        assert_eq!(coercer.widen(&[city, ExprType::object()]), Ok(ExprType::object()));
    }

    #[test]
    fn test_conversion_cost() {
        let coercer = TypeCoercer::new();

        assert_eq!(coercer.conversion_cost(&ExprType::Integer, &ExprType::Integer), Some(0));
        assert_eq!(coercer.conversion_cost(&ExprType::Integer, &ExprType::Long), Some(1));
        assert_eq!(coercer.conversion_cost(&ExprType::Integer, &ExprType::Double), Some(3));
        assert_eq!(coercer.conversion_cost(&ExprType::String, &ExprType::Integer), None);
    }

    #[test]
    fn test_widen() {
        let coercer = TypeCoercer::new();

        assert_eq!(
            coercer.widen(&[ExprType::Integer, ExprType::Long, ExprType::Float]),
            Ok(ExprType::Float)
        );
        assert_eq!(
            coercer.widen(&[ExprType::Undefined, ExprType::String]),
            Ok(ExprType::String)
        );
        assert_eq!(coercer.widen(&[]), Ok(ExprType::Undefined));
        assert!(coercer.widen(&[ExprType::String, ExprType::Integer]).is_err());
    }

    #[test]
    fn test_unify_keeps_encounter_order_in_error() {
        let coercer = TypeCoercer::new();
        let err = coercer
            .unify(&[ExprType::String, ExprType::String, ExprType::Integer])
            .unwrap_err();

        assert_eq!(
            err,
            CoercionError::TypeMismatch {
                found: vec![ExprType::String, ExprType::String, ExprType::Integer]
            }
        );
        assert_eq!(type_list(&[ExprType::String, ExprType::Integer]), "STRING, INTEGER");
    }

    #[test]
    fn test_unify_skips_null() {
        let coercer = TypeCoercer::new();
        assert_eq!(
            coercer.unify(&[ExprType::String, ExprType::Undefined]),
            Ok(ExprType::String)
        );
        assert!(coercer.unify(&[ExprType::Integer, ExprType::Long]).is_err());
    }
}
