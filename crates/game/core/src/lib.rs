//! Deterministic combat rules and data types shared by game drivers.
//!
//! `game-core` holds character state, applies stat mutations with floor
//! clamping, and resolves actions against targets. It performs no I/O and
//! owns no randomness: every roll goes through an [`RngOracle`] supplied by
//! the caller. Drivers (see the `runtime` crate) call into these APIs and
//! render the returned descriptions.
pub mod action;
pub mod character;
pub mod combat;
pub mod config;
pub mod error;
pub mod item;
pub mod rng;
pub mod stats;

pub use action::{ActionError, ActionKind, TargetingMode};
pub use character::Character;
pub use combat::{apply_damage, calculate_damage, run_monster_turns};
pub use config::{CharacterStats, GameConfig};
pub use error::{ErrorSeverity, GameError};
pub use item::{Item, ItemSlotSet, KitType, SlotError};
pub use rng::{PcgRng, RngOracle, ScriptedRng};
pub use stats::{StatError, StatHolder, StatKind};
