//! Analyzer configuration

use searchql_diagnostics::{Result, SQL0402, SqlError};
use serde::{Deserialize, Serialize};

/// Default maximum nesting depth of an analyzed expression
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Analyzer configuration
///
/// Missing fields take their default values when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum recursion depth of the analyzer
    pub max_depth: usize,
    /// Lower-case function names before registry lookup
    pub case_insensitive_functions: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            case_insensitive_functions: true,
        }
    }
}

impl AnalyzerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether function names are case-insensitive
    pub fn with_case_insensitive_functions(mut self, enabled: bool) -> Self {
        self.case_insensitive_functions = enabled;
        self
    }

    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| {
            SqlError::configuration(SQL0402, format!("invalid analyzer configuration: {err}"))
        })
    }

    /// Apply the configured case rule to a function name
    pub fn normalize_function_name(&self, name: &str) -> String {
        if self.case_insensitive_functions {
            name.to_ascii_lowercase()
        } else {
            name.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use searchql_diagnostics::ErrorKind;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = AnalyzerConfig::from_json(r#"{"max_depth": 16}"#).unwrap();
        assert_eq!(config, AnalyzerConfig::new().with_max_depth(16));
        assert!(config.case_insensitive_functions);
    }

    #[test]
    fn test_invalid_json() {
        let err = AnalyzerConfig::from_json(r#"{"max_depth": "deep"}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.message().starts_with("invalid analyzer configuration"));
    }

    #[test]
    fn test_normalize_function_name() {
        assert_eq!(AnalyzerConfig::new().normalize_function_name("AVG"), "avg");
        let verbatim = AnalyzerConfig::new().with_case_insensitive_functions(false);
        assert_eq!(verbatim.normalize_function_name("AVG"), "AVG");
    }
}
