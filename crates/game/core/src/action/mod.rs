//! Action domain.
//!
//! Actions are a closed set of variants ([`ActionKind`]). Each variant declares
//! a name and a [`TargetingMode`] and is resolved against an explicit owner,
//! a target list and an RNG oracle:
//!
//! ```text
//! ActionKind::resolve(owner, targets, rng) -> Result<String, ActionError>
//! ```
//!
//! Resolution first validates the target count, then reads every stat it needs,
//! and only then mutates the targets. A returned error therefore guarantees no
//! partial effects.
//!
//! # Module Structure
//!
//! - `error`: [`ActionError`]
//! - `targeting`: [`TargetingMode`]
//! - `attack`: resolution of [`ActionKind::Attack`]

mod attack;
pub mod error;
pub mod targeting;

pub use error::ActionError;
pub use targeting::TargetingMode;

use crate::character::Character;
use crate::rng::RngOracle;

/// Every action a character can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    /// Single-target weapon attack: rolls damage from the owner's
    /// MIN_DAMAGE..=MAX_DAMAGE, reduced by the target's DEFENCE.
    Attack,
}

impl ActionKind {
    /// Display name, used in result descriptions.
    pub const fn name(&self) -> &'static str {
        match self {
            ActionKind::Attack => "Attack",
        }
    }

    pub const fn targeting(&self) -> TargetingMode {
        match self {
            ActionKind::Attack => TargetingMode::SingleTarget,
        }
    }

    /// Resolves this action performed by `owner` against `targets`.
    ///
    /// Returns a human-readable description of what happened. Target stats are
    /// mutated in place; the owner is never modified.
    pub fn resolve(
        &self,
        owner: &Character,
        targets: &mut [&mut Character],
        rng: &mut impl RngOracle,
    ) -> Result<String, ActionError> {
        let targeting = self.targeting();
        if !targeting.accepts(targets.len()) {
            tracing::debug!(
                action = self.name(),
                owner = owner.name(),
                provided = targets.len(),
                "rejected target list"
            );
            return Err(ActionError::InvalidTargetCount {
                action: *self,
                targeting,
                provided: targets.len(),
            });
        }

        let description = match self {
            ActionKind::Attack => attack::resolve(*self, owner, targets, rng)?,
        };

        tracing::debug!(action = self.name(), owner = owner.name(), "{description}");
        Ok(description)
    }
}
