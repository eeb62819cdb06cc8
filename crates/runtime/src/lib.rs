//! Session driver for the combat rules in `game-core`.
//!
//! This crate holds everything a front end needs between user inputs: the
//! player and their inventory, the monsters of the current zone, the
//! Idle/Farming/Boss state machine and the seeded RNG. Front ends embed a
//! [`GameSession`], call its methods, and render the returned text.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the session and turn resolution
//! - [`runtime`] holds configuration and spawn templates
//! - [`state`] defines the session state machine
//! - [`inventory`] is the bounded item bag
//! - [`error`] exposes the unified error type
pub mod error;
pub mod inventory;
pub mod runtime;
pub mod session;
pub mod state;

pub use error::{Result, RuntimeError};
pub use inventory::Inventory;
pub use runtime::{CharacterTemplate, RuntimeConfig};
pub use session::{GameSession, TurnReport};
pub use state::GameState;
