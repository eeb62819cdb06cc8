use crate::stats::{StatHolder, StatKind};

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Stat block given to characters built with [`crate::Character::new`].
    pub default_stats: CharacterStats,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of actions a single character can hold.
    pub const MAX_ACTIONS: usize = 4;
    /// Number of items the player can carry outside of equipment slots.
    pub const DEFAULT_INVENTORY_SIZE: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALTH: u32 = 10;
    pub const DEFAULT_MIN_DAMAGE: u32 = 1;
    pub const DEFAULT_MAX_DAMAGE: u32 = 2;
    pub const DEFAULT_DEFENCE: u32 = 0;

    pub fn new() -> Self {
        Self {
            default_stats: CharacterStats::default(),
        }
    }

    pub fn with_default_stats(default_stats: CharacterStats) -> Self {
        Self { default_stats }
    }

    /// Builds the stat holder a freshly created character starts with.
    pub fn character_stats(&self) -> StatHolder {
        self.default_stats.to_holder()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain description of a character's starting stats.
///
/// Health starts full: CURRENT_HEALTH is seeded from `max_health`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub max_health: u32,
    pub min_damage: u32,
    pub max_damage: u32,
    pub defence: u32,
}

impl CharacterStats {
    pub const fn new(max_health: u32, min_damage: u32, max_damage: u32, defence: u32) -> Self {
        Self {
            max_health,
            min_damage,
            max_damage,
            defence,
        }
    }

    pub fn to_holder(&self) -> StatHolder {
        let mut stats = StatHolder::new();
        stats.add_stat(StatKind::MinDamage, self.min_damage);
        stats.add_stat(StatKind::MaxDamage, self.max_damage);
        stats.add_stat(StatKind::Defence, self.defence);
        stats.add_stat(StatKind::MaximumHealth, self.max_health);
        stats.add_stat(StatKind::CurrentHealth, self.max_health);
        stats
    }
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self::new(
            GameConfig::DEFAULT_MAX_HEALTH,
            GameConfig::DEFAULT_MIN_DAMAGE,
            GameConfig::DEFAULT_MAX_DAMAGE,
            GameConfig::DEFAULT_DEFENCE,
        )
    }
}
