//! SearchQL error codes following a structured numbering system
//!
//! Error code ranges:
//! - SQL0001-SQL0099: Syntax check failures (identifiers that cannot be resolved structurally)
//! - SQL0100-SQL0199: Semantic check failures (resolvable but invalid constructs)
//! - SQL0400-SQL0499: Configuration faults (capabilities the registry does not implement)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a syntax check failure (0001-0099)
    pub const fn is_syntax_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a semantic check failure (0100-0199)
    pub const fn is_semantic_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a configuration fault (0400-0499)
    pub const fn is_configuration_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SQL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Syntax check failures (0001-0099)
    map.insert(1, ErrorInfo::new("Invalid qualifier")
        .with_help("A qualifier must be a field name, an index name or an index alias"));
    map.insert(2, ErrorInfo::new("Unsupported field type"));

    // Semantic check failures (0100-0199)
    map.insert(100, ErrorInfo::new("Undefined symbol")
        .with_help("Check that the field exists in the queried index"));
    map.insert(101, ErrorInfo::new("Function signature not found"));
    map.insert(102, ErrorInfo::new("Unsupported aggregation function"));
    map.insert(103, ErrorInfo::new("Unsupported named argument"));
    map.insert(104, ErrorInfo::new("Missing required argument"));
    map.insert(105, ErrorInfo::new("Type mismatch"));
    map.insert(106, ErrorInfo::new("Empty IN list"));
    map.insert(107, ErrorInfo::new("Ambiguous function call"));
    map.insert(108, ErrorInfo::new("Invalid window function"));
    map.insert(109, ErrorInfo::new("Invalid regular expression"));
    map.insert(110, ErrorInfo::new("Scope stack underflow"));
    map.insert(111, ErrorInfo::new("Expression too deep")
        .with_help("Raise `max_depth` in the analyzer configuration"));
    map.insert(112, ErrorInfo::new("Unknown index"));

    // Configuration faults (0400-0499)
    map.insert(400, ErrorInfo::new("Internal error"));
    map.insert(401, ErrorInfo::new("Unsupported cast target"));
    map.insert(402, ErrorInfo::new("Invalid configuration"));

    map
});

// Convenient error code constants

// Syntax check failures
pub const SQL0001: ErrorCode = ErrorCode::new(1);
pub const SQL0002: ErrorCode = ErrorCode::new(2);

// Semantic check failures
pub const SQL0100: ErrorCode = ErrorCode::new(100);
pub const SQL0101: ErrorCode = ErrorCode::new(101);
pub const SQL0102: ErrorCode = ErrorCode::new(102);
pub const SQL0103: ErrorCode = ErrorCode::new(103);
pub const SQL0104: ErrorCode = ErrorCode::new(104);
pub const SQL0105: ErrorCode = ErrorCode::new(105);
pub const SQL0106: ErrorCode = ErrorCode::new(106);
pub const SQL0107: ErrorCode = ErrorCode::new(107);
pub const SQL0108: ErrorCode = ErrorCode::new(108);
pub const SQL0109: ErrorCode = ErrorCode::new(109);
pub const SQL0110: ErrorCode = ErrorCode::new(110);
pub const SQL0111: ErrorCode = ErrorCode::new(111);
pub const SQL0112: ErrorCode = ErrorCode::new(112);

// Configuration faults
pub const SQL0400: ErrorCode = ErrorCode::new(400);
pub const SQL0401: ErrorCode = ErrorCode::new(401);
pub const SQL0402: ErrorCode = ErrorCode::new(402);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(SQL0001.to_string(), "SQL0001");
        assert_eq!(SQL0106.to_string(), "SQL0106");
        assert_eq!(SQL0401.to_string(), "SQL0401");
    }

    #[test]
    fn test_error_categories() {
        assert!(SQL0001.is_syntax_error());
        assert!(!SQL0001.is_semantic_error());

        assert!(SQL0100.is_semantic_error());
        assert!(!SQL0100.is_syntax_error());

        assert!(SQL0401.is_configuration_error());
        assert!(!SQL0401.is_semantic_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(SQL0102.info().description, "Unsupported aggregation function");
        assert!(SQL0100.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
