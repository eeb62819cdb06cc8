use super::{ActionError, ActionKind};
use crate::character::Character;
use crate::combat::{apply_damage, calculate_damage};
use crate::rng::RngOracle;
use crate::stats::StatKind;

/// Resolves a single-target attack. The caller has already checked that
/// `targets` holds exactly one character.
pub(super) fn resolve(
    action: ActionKind,
    owner: &Character,
    targets: &mut [&mut Character],
    rng: &mut impl RngOracle,
) -> Result<String, ActionError> {
    let min = owner.stats().get_stat(StatKind::MinDamage)?;
    let max = owner.stats().get_stat(StatKind::MaxDamage)?;
    if min > max {
        return Err(ActionError::InvalidDamageRange { min, max });
    }

    let target = &mut *targets[0];
    let defence = target.stats().get_stat(StatKind::Defence)?;
    // Presence check before the roll so a failure leaves the RNG untouched too.
    target.stats().get_stat(StatKind::CurrentHealth)?;

    let roll = rng.range(min, max);
    let damage = calculate_damage(roll, defence);
    let remaining = apply_damage(target, damage)?;

    tracing::trace!(roll, defence, damage, remaining, target = target.name(), "attack resolved");

    Ok(format!(
        "{} did {} damage to {}",
        action.name(),
        damage,
        target.name()
    ))
}
