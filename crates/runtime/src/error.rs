//! Unified error type surfaced by the session API.
//!
//! Wraps failures from the core rules so drivers can bubble them up with
//! consistent context. Every variant is recoverable by the caller; a failed
//! call leaves the session unchanged.

use thiserror::Error;

use game_core::{ActionError, ErrorSeverity, GameError, SlotError, StatError};

use crate::state::GameState;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Stat(#[from] StatError),

    #[error(transparent)]
    Slot(#[from] SlotError),

    #[error("cannot go from {from} to {to}")]
    InvalidTransition { from: GameState, to: GameState },

    #[error("no encounter in progress")]
    NoEncounter,

    #[error("no monster at index {0}")]
    InvalidTarget(usize),

    #[error("monster at index {0} targeted more than once")]
    DuplicateTarget(usize),

    #[error("monster at index {0} is already dead")]
    TargetDead(usize),

    #[error("player is dead")]
    PlayerDead,

    #[error("inventory is full (capacity {capacity})")]
    InventoryFull { capacity: usize },

    #[error("no inventory item at index {0}")]
    InventoryIndex(usize),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        use RuntimeError::*;
        match self {
            Action(err) => err.severity(),
            Stat(err) => err.severity(),
            Slot(err) => err.severity(),
            InvalidTransition { .. } | NoEncounter => ErrorSeverity::Validation,
            InvalidTarget(_) | DuplicateTarget(_) | TargetDead(_) => ErrorSeverity::Recoverable,
            PlayerDead => ErrorSeverity::Recoverable,
            InventoryFull { .. } | InventoryIndex(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        use RuntimeError::*;
        match self {
            Action(err) => err.error_code(),
            Stat(err) => err.error_code(),
            Slot(err) => err.error_code(),
            InvalidTransition { .. } => "SESSION_INVALID_TRANSITION",
            NoEncounter => "SESSION_NO_ENCOUNTER",
            InvalidTarget(_) => "SESSION_INVALID_TARGET",
            DuplicateTarget(_) => "SESSION_DUPLICATE_TARGET",
            TargetDead(_) => "SESSION_TARGET_DEAD",
            PlayerDead => "SESSION_PLAYER_DEAD",
            InventoryFull { .. } => "INVENTORY_FULL",
            InventoryIndex(_) => "INVENTORY_INDEX",
        }
    }
}
