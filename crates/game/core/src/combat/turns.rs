//! Monster turn driver.

use crate::action::ActionError;
use crate::character::Character;
use crate::rng::RngOracle;

/// Every living monster uses its default (first) action against `player`.
///
/// Monsters are processed in order; dead monsters and monsters without any
/// action are skipped. Returns one description per action taken.
///
/// # Errors
///
/// Stops at the first failing monster. Effects of the monsters that already
/// acted remain applied.
pub fn run_monster_turns(
    monsters: &[Character],
    player: &mut Character,
    rng: &mut impl RngOracle,
) -> Result<Vec<String>, ActionError> {
    let mut lines = Vec::new();
    for monster in monsters.iter().filter(|m| m.alive()) {
        let Some(action) = monster.default_action() else {
            tracing::trace!(monster = monster.name(), "no action available, skipping");
            continue;
        };
        lines.push(action.resolve(monster, &mut [&mut *player], rng)?);
    }
    Ok(lines)
}
