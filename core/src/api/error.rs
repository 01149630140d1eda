//! Public error types for the arbor API.
//!
//! This module defines the stable error types exposed to library users.
//! Internal errors are converted to these public types at API boundaries.

use core::fmt;

use thiserror::Error as ThisError;

use crate::analyzer::TypeErrors;
use crate::evaluator::EvalError;
use crate::{String, ToString, Vec};

/// Public error type for all arbor operations.
///
/// This is the stable error type exposed to library users. Internal error
/// representations may change, but this public API remains stable.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Invalid API usage (e.g., a missing or mistyped argument).
    #[error("API error: {0}")]
    Api(String),

    /// Type errors. Contains one diagnostic per violated constraint.
    #[error("Compilation failed with {} error(s)", error_count(.diagnostics))]
    Compilation { diagnostics: Vec<Diagnostic> },

    /// Runtime errors during evaluation (e.g., division by zero).
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Resource limits exceeded (e.g., stack overflow).
    #[error("Resource limit exceeded: {0}")]
    ResourceExceeded(String),
}

fn error_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count()
}

/// A diagnostic message (error, warning, or info).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "E001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - compilation cannot succeed.
    Error,
    /// Warning - suspicious code that might be wrong.
    Warning,
    /// Info - informational message.
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

// ============================================================================
// Conversion from internal errors
// ============================================================================

impl From<TypeErrors> for Error {
    fn from(errors: TypeErrors) -> Self {
        Error::Compilation {
            diagnostics: errors.iter().map(|e| e.to_diagnostic()).collect(),
        }
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::ResourceExceeded(e) => Error::ResourceExceeded(e.to_string()),
            EvalError::Runtime(e) => Error::Runtime(e.to_string()),
        }
    }
}
