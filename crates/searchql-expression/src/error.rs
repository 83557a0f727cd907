//! Function resolution errors

use searchql_diagnostics::{
    SQL0101, SQL0103, SQL0104, SQL0107, SQL0108, SQL0401, SqlError,
};
use searchql_types::ExprType;
use thiserror::Error;

use crate::FunctionSignature;

/// Function resolution errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    /// No function of the requested category has this name
    #[error("unsupported function name: {name}")]
    FunctionNotFound { name: String },

    /// The name exists but no overload accepts the argument types
    #[error(
        "{name} function expected {}, but get {}",
        format_expected(.expected),
        FunctionSignature::format_types(.actual)
    )]
    SignatureNotFound {
        name: String,
        expected: Vec<Vec<ExprType>>,
        actual: Vec<ExprType>,
    },

    /// Two overloads match equally well
    #[error("Ambiguous call to function {name}: multiple overloads match {}", FunctionSignature::format_types(.actual))]
    AmbiguousFunctionCall { name: String, actual: Vec<ExprType> },

    /// Named argument outside the function's parameter set
    #[error("Parameter {argument} is invalid for {function} function.")]
    UnsupportedNamedArgument { function: String, argument: String },

    /// Required named argument absent
    #[error("{function} function requires parameter {parameter}")]
    MissingRequiredArgument { function: String, parameter: String },

    /// Positional argument passed to a named-parameter function
    #[error("{function} function only accepts named arguments")]
    PositionalArgument { function: String },

    /// Function used in a window is neither a ranking nor an aggregate function
    #[error("{name} is not a window function")]
    NotWindowFunction { name: String },

    /// No cast function exists for the target type
    #[error("unsupported cast target type: {target}")]
    UnsupportedCastTarget { target: String },
}

impl FunctionError {
    /// Check if this error indicates a registry capability gap
    pub fn is_configuration_fault(&self) -> bool {
        matches!(self, Self::UnsupportedCastTarget { .. })
    }
}

impl From<FunctionError> for SqlError {
    fn from(err: FunctionError) -> Self {
        let message = err.to_string();
        match err {
            FunctionError::FunctionNotFound { .. } | FunctionError::SignatureNotFound { .. } => {
                SqlError::semantic(SQL0101, message)
            }
            FunctionError::AmbiguousFunctionCall { .. } => SqlError::semantic(SQL0107, message),
            FunctionError::UnsupportedNamedArgument { .. }
            | FunctionError::PositionalArgument { .. } => SqlError::semantic(SQL0103, message),
            FunctionError::MissingRequiredArgument { .. } => SqlError::semantic(SQL0104, message),
            FunctionError::NotWindowFunction { .. } => SqlError::semantic(SQL0108, message),
            FunctionError::UnsupportedCastTarget { .. } => {
                SqlError::configuration(SQL0401, message)
            }
        }
    }
}

/// Function result
pub type FunctionResult<T> = Result<T, FunctionError>;

fn format_expected(expected: &[Vec<ExprType>]) -> String {
    let sigs: Vec<_> = expected
        .iter()
        .map(|params| FunctionSignature::format_types(params))
        .collect();
    format!("{{{}}}", sigs.join(","))
}
