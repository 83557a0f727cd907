//! Function registry and overload resolution
//!
//! The registry maps a function name and category to its overloads. Overload
//! selection ranks every candidate of matching arity by the total implicit
//! conversion cost of the argument types and picks the cheapest; a tie
//! between the two cheapest candidates is an ambiguous call.
//!
//! The built-in registry is constructed once, on first use, and is read-only
//! afterwards, so a single instance is shared by every analysis.

use log::debug;
use once_cell::sync::Lazy;
use searchql_types::{ExprType, TypeCoercer};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::builtin;
use crate::error::{FunctionError, FunctionResult};
use crate::{
    Expression, FunctionCategory, FunctionExpression, FunctionName, FunctionSignature,
};

/// Type alias for function builders: a pure map from resolved arguments to a node
pub type FunctionBuilder =
    Arc<dyn Fn(&FunctionSignature, Vec<Expression>) -> Expression + Send + Sync>;

static BUILTIN_REGISTRY: Lazy<FunctionRegistry> = Lazy::new(FunctionRegistry::with_builtins);

/// A registered function overload
#[derive(Clone)]
pub struct FunctionDefinition {
    /// Signature of this overload
    pub signature: FunctionSignature,
    /// Category this overload belongs to
    pub category: FunctionCategory,
    builder: FunctionBuilder,
}

impl FunctionDefinition {
    /// Create a new function definition
    pub fn new(
        signature: FunctionSignature,
        category: FunctionCategory,
        builder: FunctionBuilder,
    ) -> Self {
        Self {
            signature,
            category,
            builder,
        }
    }

    /// Create a scalar function producing a plain call node
    pub fn scalar(signature: FunctionSignature) -> Self {
        Self::new(signature, FunctionCategory::Scalar, call_builder())
    }

    /// Build the resolved node for the given arguments
    pub fn build(&self, args: Vec<Expression>) -> Expression {
        (self.builder)(&self.signature, args)
    }
}

impl fmt::Debug for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDefinition")
            .field("signature", &self.signature)
            .field("category", &self.category)
            .finish_non_exhaustive()
    }
}

/// Builder producing [`Expression::Function`] with the signature's return type
pub fn call_builder() -> FunctionBuilder {
    Arc::new(|signature, args| {
        Expression::Function(FunctionExpression {
            name: signature.name.clone(),
            args,
            return_type: signature.return_type.clone(),
        })
    })
}

/// Named parameter set of a relevance function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceSpec {
    /// Function name
    pub name: &'static str,
    /// Parameters that must be present
    pub required: &'static [&'static str],
    /// Every accepted parameter, required ones included
    pub allowed: &'static [&'static str],
}

impl RelevanceSpec {
    /// Check whether a parameter name is accepted, ignoring case
    pub fn accepts(&self, parameter: &str) -> bool {
        self.allowed
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(parameter))
    }
}

/// Registry of function overloads
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    /// Overloads indexed by canonical name, in registration order
    functions: HashMap<String, Vec<FunctionDefinition>>,
    /// Surface name -> canonical name
    aliases: HashMap<String, String>,
    /// Relevance functions and their parameter sets
    relevance: HashMap<String, RelevanceSpec>,
    coercer: TypeCoercer,
}

impl FunctionRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in function
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        builtin::register_all(&mut registry);
        debug!(
            "built function registry: {} functions, {} aliases, {} relevance functions",
            registry.functions.len(),
            registry.aliases.len(),
            registry.relevance.len()
        );
        registry
    }

    /// Shared read-only registry of built-in functions
    pub fn builtin() -> &'static FunctionRegistry {
        &BUILTIN_REGISTRY
    }

    /// Register a function overload
    pub fn register(&mut self, definition: FunctionDefinition) {
        self.functions
            .entry(definition.signature.name.as_str().to_string())
            .or_default()
            .push(definition);
    }

    /// Register a surface name for a canonical function
    pub fn register_alias(&mut self, alias: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.insert(alias.into(), canonical.into());
    }

    /// Register a relevance function
    pub fn register_relevance(&mut self, spec: RelevanceSpec) {
        self.relevance.insert(spec.name.to_string(), spec);
    }

    /// Map a surface name to its canonical name
    pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Get the category of a function, if registered
    pub fn category_of(&self, name: &str) -> Option<FunctionCategory> {
        let canonical = self.canonical_name(name);
        if self.relevance.contains_key(canonical) {
            return Some(FunctionCategory::Relevance);
        }
        self.functions
            .get(canonical)
            .and_then(|overloads| overloads.first())
            .map(|def| def.category)
    }

    /// Check if a function of the given category exists
    pub fn contains(&self, name: &str, category: FunctionCategory) -> bool {
        self.category_of(name) == Some(category)
    }

    /// Get all overloads registered under a name or alias
    pub fn overloads(&self, name: &str) -> &[FunctionDefinition] {
        self.functions
            .get(self.canonical_name(name))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve the cheapest overload of `name` in `category` for the argument types
    pub fn resolve(
        &self,
        name: &str,
        category: FunctionCategory,
        arg_types: &[ExprType],
    ) -> FunctionResult<&FunctionDefinition> {
        let overloads: Vec<&FunctionDefinition> = self
            .overloads(name)
            .iter()
            .filter(|def| def.category == category)
            .collect();

        if overloads.is_empty() {
            return Err(FunctionError::FunctionNotFound {
                name: name.to_string(),
            });
        }

        let mut candidates: Vec<(&FunctionDefinition, u32)> = overloads
            .iter()
            .filter_map(|def| {
                self.overload_cost(&def.signature, arg_types)
                    .map(|cost| (*def, cost))
            })
            .collect();

        if candidates.is_empty() {
            return Err(FunctionError::SignatureNotFound {
                name: self.canonical_name(name).to_string(),
                expected: overloads
                    .iter()
                    .map(|def| def.signature.parameters.clone())
                    .collect(),
                actual: arg_types.to_vec(),
            });
        }

        // Sort by cost (lower is better), stable to keep registration order
        candidates.sort_by_key(|(_, cost)| *cost);

        if candidates.len() > 1 && candidates[0].1 == candidates[1].1 {
            return Err(FunctionError::AmbiguousFunctionCall {
                name: self.canonical_name(name).to_string(),
                actual: arg_types.to_vec(),
            });
        }

        let (best, cost) = candidates[0];
        debug!("resolved {} to {} (cost {})", name, best.signature, cost);
        Ok(best)
    }

    /// Resolve and build a positional call
    pub fn compile(
        &self,
        name: &str,
        category: FunctionCategory,
        args: Vec<Expression>,
    ) -> FunctionResult<Expression> {
        let arg_types: Vec<ExprType> = args.iter().map(Expression::expr_type).collect();
        let definition = self.resolve(name, category, &arg_types)?;
        Ok(definition.build(args))
    }

    /// Validate named arguments and build a relevance call
    ///
    /// Every argument must be a named argument whose name belongs to the
    /// function's parameter set; required parameters must be present.
    /// Arguments keep their written order.
    pub fn compile_relevance(
        &self,
        name: &str,
        args: Vec<Expression>,
    ) -> FunctionResult<Expression> {
        let canonical = self.canonical_name(name);
        let spec = self
            .relevance
            .get(canonical)
            .ok_or_else(|| FunctionError::FunctionNotFound {
                name: name.to_string(),
            })?;

        for arg in &args {
            let Expression::NamedArgument(named) = arg else {
                return Err(FunctionError::PositionalArgument {
                    function: canonical.to_string(),
                });
            };
            if !spec.accepts(&named.name) {
                return Err(FunctionError::UnsupportedNamedArgument {
                    function: canonical.to_string(),
                    argument: named.name.clone(),
                });
            }
        }

        for required in spec.required {
            let present = args.iter().any(|arg| match arg {
                Expression::NamedArgument(named) => named.name.eq_ignore_ascii_case(required),
                _ => false,
            });
            if !present {
                return Err(FunctionError::MissingRequiredArgument {
                    function: canonical.to_string(),
                    parameter: (*required).to_string(),
                });
            }
        }

        debug!("resolved relevance function {} with {} arguments", canonical, args.len());
        Ok(Expression::Function(FunctionExpression {
            name: FunctionName::new(canonical),
            args,
            return_type: ExprType::Boolean,
        }))
    }

    /// Compute the cost of using an overload with given argument types
    ///
    /// Returns None if the overload doesn't match.
    fn overload_cost(&self, signature: &FunctionSignature, arg_types: &[ExprType]) -> Option<u32> {
        if signature.parameters.len() != arg_types.len() {
            return None;
        }

        signature
            .parameters
            .iter()
            .zip(arg_types)
            .try_fold(0u32, |total, (param, arg)| {
                self.coercer.conversion_cost(arg, param).map(|cost| total + cost)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl;
    use pretty_assertions::assert_eq;

    fn registry() -> FunctionRegistry {
        let mut registry = FunctionRegistry::new();
        for ty in [ExprType::Integer, ExprType::Long, ExprType::Double] {
            registry.register(FunctionDefinition::scalar(FunctionSignature::new(
                "add",
                vec![ty.clone(), ty.clone()],
                ty,
            )));
        }
        registry.register_alias("plus", "add");
        registry
    }

    #[test]
    fn test_exact_match_wins() {
        let registry = registry();
        let def = registry
            .resolve("add", FunctionCategory::Scalar, &[ExprType::Long, ExprType::Long])
            .unwrap();
        assert_eq!(def.signature.return_type, ExprType::Long);
    }

    #[test]
    fn test_cheapest_widening_wins() {
        let registry = registry();
        let def = registry
            .resolve("add", FunctionCategory::Scalar, &[ExprType::Integer, ExprType::Long])
            .unwrap();
        assert_eq!(def.signature.return_type, ExprType::Long);
    }

    #[test]
    fn test_alias_resolves_to_canonical() {
        let registry = registry();
        let expr = registry
            .compile("plus", FunctionCategory::Scalar, vec![dsl::literal(1), dsl::literal(2)])
            .unwrap();
        let Expression::Function(call) = expr else {
            panic!("expected a function call");
        };
        assert_eq!(call.name.as_str(), "add");
    }

    #[test]
    fn test_signature_not_found_lists_overloads() {
        let registry = registry();
        let err = registry
            .resolve("add", FunctionCategory::Scalar, &[ExprType::String, ExprType::Integer])
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "add function expected {[INTEGER,INTEGER],[LONG,LONG],[DOUBLE,DOUBLE]}, but get [STRING,INTEGER]"
        );
    }

    #[test]
    fn test_ambiguous_overloads() {
        let mut registry = FunctionRegistry::new();
        registry.register(FunctionDefinition::scalar(FunctionSignature::new(
            "f",
            vec![ExprType::Long, ExprType::Integer],
            ExprType::Long,
        )));
        registry.register(FunctionDefinition::scalar(FunctionSignature::new(
            "f",
            vec![ExprType::Integer, ExprType::Long],
            ExprType::Long,
        )));

        let err = registry
            .resolve("f", FunctionCategory::Scalar, &[ExprType::Integer, ExprType::Integer])
            .unwrap_err();
        assert!(matches!(err, FunctionError::AmbiguousFunctionCall { .. }));
    }

    #[test]
    fn test_category_mismatch_is_not_found() {
        let registry = registry();
        let err = registry
            .resolve("add", FunctionCategory::Aggregate, &[ExprType::Integer, ExprType::Integer])
            .unwrap_err();
        assert_eq!(
            err,
            FunctionError::FunctionNotFound {
                name: "add".to_string()
            }
        );
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = FunctionRegistry::builtin();
        let b = FunctionRegistry::builtin();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.category_of("variance"), Some(FunctionCategory::Aggregate));
        assert_eq!(a.category_of("multi_match"), Some(FunctionCategory::Relevance));
        assert_eq!(a.category_of("rank"), Some(FunctionCategory::Window));
    }
}
