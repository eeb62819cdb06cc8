//! Action execution errors.

use super::{ActionKind, TargetingMode};
use crate::error::{ErrorSeverity, GameError};
use crate::stats::StatError;

/// Errors that can occur while resolving an action.
///
/// Resolution is all-or-nothing: when any of these is returned, no stat on the
/// owner or on any target has been modified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Target list cardinality does not match the action's targeting mode.
    #[error("{action} ({targeting}) cannot be used on {provided} target(s)")]
    InvalidTargetCount {
        action: ActionKind,
        targeting: TargetingMode,
        provided: usize,
    },

    /// Owner's MIN_DAMAGE exceeds MAX_DAMAGE.
    #[error("invalid damage range {min}..={max}")]
    InvalidDamageRange { min: u32, max: u32 },

    /// A stat required by the action is missing on the owner or a target.
    #[error(transparent)]
    Stat(#[from] StatError),

    /// No action at this index in the character's action list.
    #[error("no action at index {index} ({available} available)")]
    UnknownAction { index: usize, available: usize },

    /// The character's action list is at capacity.
    #[error("action list is full (capacity {capacity})")]
    ActionListFull { capacity: usize },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            InvalidTargetCount { .. } | UnknownAction { .. } => ErrorSeverity::Recoverable,
            InvalidDamageRange { .. } | ActionListFull { .. } => ErrorSeverity::Validation,
            Stat(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            InvalidTargetCount { .. } => "ACTION_INVALID_TARGET_COUNT",
            InvalidDamageRange { .. } => "ACTION_INVALID_DAMAGE_RANGE",
            Stat(err) => err.error_code(),
            UnknownAction { .. } => "ACTION_UNKNOWN",
            ActionListFull { .. } => "ACTION_LIST_FULL",
        }
    }
}
