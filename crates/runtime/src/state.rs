//! Session state machine.
//!
//! | from    | to      | trigger                     |
//! |---------|---------|-----------------------------|
//! | Idle    | Farming | `start_farming`             |
//! | Farming | Farming | `start_farming` (next zone) |
//! | Idle    | Boss    | `enter_boss`                |
//! | any     | Idle    | `return_to_base`            |

/// Where the session currently is.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameState {
    /// At base, between encounters.
    #[default]
    Idle,
    /// Fighting zones of regular monsters.
    Farming,
    /// In the boss area. Nothing spawns there yet, so no turns can be taken.
    Boss,
}

impl GameState {
    /// Returns true if the session may move from `self` to `next`.
    ///
    /// Returning to `Idle` is always allowed.
    pub fn can_transition_to(self, next: GameState) -> bool {
        use GameState::*;
        matches!(
            (self, next),
            (_, Idle) | (Idle, Farming) | (Farming, Farming) | (Idle, Boss)
        )
    }

    /// Returns true if monsters can be fought in this state.
    ///
    /// Only farming zones spawn monsters; the boss area is empty.
    pub fn in_encounter(self) -> bool {
        matches!(self, GameState::Farming)
    }
}
