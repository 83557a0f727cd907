//! SearchQL error types

use crate::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - analysis cannot proceed
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message ready to be shown to the end user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render with terminal colors
    #[cfg(feature = "colored")]
    pub fn to_colored_string(&self) -> String {
        use colored::Colorize;

        let head = format!("{}[{}]", self.severity, self.code).red().bold();
        match &self.help {
            Some(help) => format!("{}: {}\n  {} {}", head, self.message, "help:".cyan(), help),
            None => format!("{}: {}", head, self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)
    }
}

/// The three kinds of analysis failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// An identifier structurally cannot be resolved
    SyntaxCheck,
    /// A resolvable but invalid construct
    Semantic,
    /// A capability the function registry intentionally does not implement
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::SyntaxCheck => write!(f, "syntax check"),
            ErrorKind::Semantic => write!(f, "semantic check"),
            ErrorKind::Configuration => write!(f, "configuration"),
        }
    }
}

/// Main SearchQL analysis error
///
/// `Display` renders only the message so it can be surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlError {
    /// Structural resolution failure (unknown qualifier role, unsupported field type)
    #[error("{message}")]
    SyntaxCheck { code: ErrorCode, message: String },

    /// Semantic failure (undefined symbol, type mismatch, bad argument)
    #[error("{message}")]
    Semantic {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Non-recoverable registry or feature gap
    #[error("{message}")]
    Configuration { code: ErrorCode, message: String },
}

impl SqlError {
    /// Create a syntax check error
    pub fn syntax(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::SyntaxCheck {
            code,
            message: message.into(),
        }
    }

    /// Create a semantic error
    pub fn semantic(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Semantic {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a configuration fault
    pub fn configuration(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Configuration {
            code,
            message: message.into(),
        }
    }

    /// Attach context to a semantic error; other kinds are returned unchanged
    pub fn with_context(self, context: impl Into<String>) -> Self {
        match self {
            Self::Semantic { code, message, .. } => Self::Semantic {
                code,
                message,
                context: Some(context.into()),
            },
            other => other,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SyntaxCheck { code, .. }
            | Self::Semantic { code, .. }
            | Self::Configuration { code, .. } => *code,
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SyntaxCheck { .. } => ErrorKind::SyntaxCheck,
            Self::Semantic { .. } => ErrorKind::Semantic,
            Self::Configuration { .. } => ErrorKind::Configuration,
        }
    }

    /// Get the message
    pub fn message(&self) -> &str {
        match self {
            Self::SyntaxCheck { message, .. }
            | Self::Semantic { message, .. }
            | Self::Configuration { message, .. } => message,
        }
    }

    /// Whether the failure stems from user input rather than a feature gap
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Configuration { .. })
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code(), self.message());
        match self {
            Self::Semantic {
                context: Some(ctx), ..
            } => diag.with_help(ctx.clone()),
            _ => match self.code().info().help {
                Some(help) => diag.with_help(help),
                None => diag,
            },
        }
    }
}
