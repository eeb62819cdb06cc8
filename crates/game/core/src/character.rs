//! Characters: the player and the monsters they fight.

use arrayvec::ArrayVec;

use crate::action::{ActionError, ActionKind};
use crate::config::GameConfig;
use crate::item::{ItemSlotSet, KitType};
use crate::rng::RngOracle;
use crate::stats::{StatError, StatHolder, StatKind};

/// A combatant with stats, an ordered action list and equipment slots.
///
/// Every action in the list is performed with this character as its owner
/// (see [`Character::perform`]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    name: String,
    stats: StatHolder,
    actions: ArrayVec<ActionKind, { GameConfig::MAX_ACTIONS }>,
    equipped_items: ItemSlotSet,
}

impl Character {
    /// Creates a character with the default stat block and one Attack action.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(name, &GameConfig::default())
    }

    /// Creates a character with `config`'s default stat block.
    pub fn from_config(name: impl Into<String>, config: &GameConfig) -> Self {
        Self::with_stats(name, config.character_stats())
    }

    /// Creates a character from an explicit stat set with one Attack action.
    pub fn with_stats(name: impl Into<String>, stats: StatHolder) -> Self {
        let mut actions = ArrayVec::new();
        actions.push(ActionKind::Attack);
        Self {
            name: name.into(),
            stats,
            actions,
            equipped_items: ItemSlotSet::new(KitType::Human),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stats(&self) -> &StatHolder {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatHolder {
        &mut self.stats
    }

    // ===== health =====

    pub fn current_health(&self) -> Result<u32, StatError> {
        self.stats.get_stat(StatKind::CurrentHealth)
    }

    pub fn max_health(&self) -> Result<u32, StatError> {
        self.stats.get_stat(StatKind::MaximumHealth)
    }

    /// A character without CURRENT_HEALTH counts as dead.
    pub fn alive(&self) -> bool {
        self.current_health().is_ok_and(|hp| hp > 0)
    }

    /// Sets CURRENT_HEALTH to MAXIMUM_HEALTH, reviving dead characters.
    pub fn full_restore(&mut self) -> Result<(), StatError> {
        let max = self.max_health()?;
        self.stats.set_stat(StatKind::CurrentHealth, max);
        Ok(())
    }

    /// Adds health without exceeding MAXIMUM_HEALTH.
    ///
    /// Returns the new CURRENT_HEALTH.
    pub fn heal(&mut self, amount: u32) -> Result<u32, StatError> {
        let max = self.max_health()?;
        let healed = self.current_health()?.saturating_add(amount).min(max);
        self.stats.set_stat(StatKind::CurrentHealth, healed);
        Ok(healed)
    }

    // ===== actions =====

    pub fn actions(&self) -> &[ActionKind] {
        &self.actions
    }

    pub fn action(&self, index: usize) -> Option<ActionKind> {
        self.actions.get(index).copied()
    }

    /// The action used when this character acts on its own (monster turns).
    pub fn default_action(&self) -> Option<ActionKind> {
        self.action(0)
    }

    pub fn add_action(&mut self, action: ActionKind) -> Result<(), ActionError> {
        self.actions
            .try_push(action)
            .map_err(|_| ActionError::ActionListFull {
                capacity: GameConfig::MAX_ACTIONS,
            })
    }

    pub fn clear_actions(&mut self) {
        self.actions.clear();
    }

    /// Performs the action at `index` with this character as owner.
    pub fn perform(
        &self,
        index: usize,
        targets: &mut [&mut Character],
        rng: &mut impl RngOracle,
    ) -> Result<String, ActionError> {
        let action = self.action(index).ok_or(ActionError::UnknownAction {
            index,
            available: self.actions.len(),
        })?;
        action.resolve(self, targets, rng)
    }

    // ===== equipment =====

    pub fn equipped_items(&self) -> &ItemSlotSet {
        &self.equipped_items
    }

    pub fn equipped_items_mut(&mut self) -> &mut ItemSlotSet {
        &mut self.equipped_items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CharacterStats;
    use crate::rng::ScriptedRng;

    #[test]
    fn new_character_has_full_default_health_and_attack() {
        let character = Character::new("Monster");
        assert_eq!(character.name(), "Monster");
        assert_eq!(character.max_health(), Ok(GameConfig::DEFAULT_MAX_HEALTH));
        assert_eq!(character.current_health(), character.max_health());
        assert!(character.alive());
        assert_eq!(character.actions(), &[ActionKind::Attack]);
        assert_eq!(character.default_action(), Some(ActionKind::Attack));
    }

    #[test]
    fn from_config_uses_configured_stats() {
        let config = GameConfig::with_default_stats(CharacterStats::new(50, 4, 6, 2));
        let character = Character::from_config("Troll", &config);
        assert_eq!(character.max_health(), Ok(50));
        assert_eq!(character.current_health(), Ok(50));
        assert_eq!(character.stats().get_stat(StatKind::MaxDamage), Ok(6));
        assert_eq!(character.stats().get_stat(StatKind::Defence), Ok(2));
    }

    #[test]
    fn alive_iff_current_health_positive() {
        let mut character = Character::new("Player");
        for hp in [1, 2, 10] {
            character.stats_mut().set_stat(StatKind::CurrentHealth, hp);
            assert!(character.alive());
        }
        character.stats_mut().set_stat(StatKind::CurrentHealth, 0);
        assert!(!character.alive());

        let empty = Character::with_stats("Nobody", StatHolder::new());
        assert!(!empty.alive());
    }

    #[test]
    fn full_restore_revives_and_refills() {
        let mut character = Character::new("Player");
        for hp in [0, 3, 10] {
            character.stats_mut().set_stat(StatKind::CurrentHealth, hp);
            character.full_restore().unwrap();
            assert_eq!(character.current_health(), character.max_health());
        }

        // Health pushed above the cap by a raw add is pulled back down too.
        character.stats_mut().add_stat(StatKind::CurrentHealth, 50);
        character.full_restore().unwrap();
        assert_eq!(character.current_health(), Ok(GameConfig::DEFAULT_MAX_HEALTH));
    }

    #[test]
    fn full_restore_requires_maximum_health() {
        let mut stats = StatHolder::new();
        stats.add_stat(StatKind::CurrentHealth, 1);
        let mut character = Character::with_stats("Wisp", stats);
        assert_eq!(
            character.full_restore(),
            Err(StatError::NotFound(StatKind::MaximumHealth))
        );
        assert_eq!(character.current_health(), Ok(1));
    }

    #[test]
    fn heal_is_capped_at_maximum() {
        let mut character = Character::new("Player");
        character.stats_mut().set_stat(StatKind::CurrentHealth, 4);
        assert_eq!(character.heal(3), Ok(7));
        assert_eq!(character.heal(100), Ok(GameConfig::DEFAULT_MAX_HEALTH));
    }

    #[test]
    fn perform_uses_self_as_owner() {
        let mut player = Character::new("Player");
        player.stats_mut().add_stat(StatKind::MinDamage, 2);
        player.stats_mut().add_stat(StatKind::MaxDamage, 2);
        let mut monster = Character::new("Monster");

        let line = player
            .perform(0, &mut [&mut monster], &mut ScriptedRng::constant(99))
            .unwrap();

        assert_eq!(line, "Attack did 4 damage to Monster");
        assert_eq!(monster.current_health(), Ok(6));
    }

    #[test]
    fn perform_unknown_index_fails() {
        let player = Character::new("Player");
        let mut monster = Character::new("Monster");
        let err = player
            .perform(3, &mut [&mut monster], &mut ScriptedRng::constant(1))
            .unwrap_err();
        assert_eq!(
            err,
            ActionError::UnknownAction {
                index: 3,
                available: 1
            }
        );
    }

    #[test]
    fn action_list_is_bounded() {
        let mut character = Character::new("Player");
        for _ in 1..GameConfig::MAX_ACTIONS {
            character.add_action(ActionKind::Attack).unwrap();
        }
        assert_eq!(
            character.add_action(ActionKind::Attack),
            Err(ActionError::ActionListFull {
                capacity: GameConfig::MAX_ACTIONS
            })
        );
    }

    #[test]
    fn starts_with_empty_human_kit() {
        let character = Character::new("Player");
        assert_eq!(character.equipped_items().kit(), KitType::Human);
        assert_eq!(character.equipped_items().get_item("Weapon"), Ok(None));
    }
}
