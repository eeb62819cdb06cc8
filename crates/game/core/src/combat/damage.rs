//! Damage calculation and application.

use crate::character::Character;
use crate::stats::{StatError, StatKind};

/// Calculate damage from an attack roll.
///
/// # Formula
///
/// ```text
/// final_damage = max(roll - defence, 0)
/// ```
pub fn calculate_damage(roll: u32, defence: u32) -> u32 {
    roll.saturating_sub(defence)
}

/// Apply damage to a character's CURRENT_HEALTH.
///
/// Returns the remaining health (clamped to 0).
pub fn apply_damage(target: &mut Character, damage: u32) -> Result<u32, StatError> {
    target
        .stats_mut()
        .remove_stat(StatKind::CurrentHealth, damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defence_reduces_and_floors_damage() {
        assert_eq!(calculate_damage(3, 1), 2);
        assert_eq!(calculate_damage(3, 3), 0);
        assert_eq!(calculate_damage(1, 9), 0);
        assert_eq!(calculate_damage(7, 0), 7);
    }
}
