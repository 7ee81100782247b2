//! Domain errors for behavior generation.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic at the prompt boundary)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid behavior name '{name}': {reason}")]
    InvalidBehaviorName { name: String, reason: String },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    // ========================================================================
    // Registry Errors
    // ========================================================================
    /// The registry file contains no recognizable type-registry block.
    ///
    /// Recoverable: the patcher leaves the text unmodified and the run
    /// continues. Surfaced as a warning, never an abort.
    #[error("Registry file formatted incorrectly: no `interface BehaviorTypes` block found")]
    MalformedRegistry,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidBehaviorName { reason, .. } => vec![
                format!("Behavior name rejected: {}", reason),
                "Use letters, digits, and hyphens with no whitespace".into(),
                "Examples: my-toggle, dropdown, accordion2".into(),
            ],
            Self::InvalidPath { path, reason } => vec![
                format!("Path '{}' rejected: {}", path, reason),
                "Paths are relative to the project root".into(),
            ],
            Self::MalformedRegistry => vec![
                "The registry file has no `interface BehaviorTypes { ... }` block".into(),
                "Add the interface block by hand, then re-run".into(),
                "The new entry must be inserted manually for this run".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidBehaviorName { .. } | Self::InvalidPath { .. } => {
                ErrorCategory::Validation
            }
            Self::MalformedRegistry => ErrorCategory::Malformed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Malformed,
    NotFound,
    Internal,
}
