//! Combat resolution helpers.
//!
//! # Core Functions
//!
//! - `calculate_damage`: roll reduced by defence, floored at zero
//! - `apply_damage`: CURRENT_HEALTH reduction (clamped to 0)
//! - `run_monster_turns`: every living monster uses its default action on the player

pub mod damage;
pub mod turns;

pub use damage::{apply_damage, calculate_damage};
pub use turns::run_monster_turns;
