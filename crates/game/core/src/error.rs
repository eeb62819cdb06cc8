//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`StatError`, `ActionError`, `SlotError`) are defined
//! in their respective modules alongside the operations they validate. This
//! module provides the classification shared by all of them.
//!
//! Every error in this crate is a synchronous validation failure: the
//! operation that produced it made no changes, and the caller decides how to
//! recover (e.g. pick another target).

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with different input
/// - **Validation**: invalid input, reject without retry
///
/// There is no fatal class: no error leaves a character or session unusable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative action.
    ///
    /// Examples: wrong number of targets, slot not present on this kit
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: stat missing from a holder, inverted damage range
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable upper snake case identifiers
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
