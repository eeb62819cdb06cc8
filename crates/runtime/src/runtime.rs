//! Session configuration.

use game_core::{Character, CharacterStats, GameConfig, Item, StatKind};

/// Runtime configuration shared across the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Supplies the stat block of templates without stats of their own.
    pub game_config: GameConfig,
    pub player: CharacterTemplate,
    pub monster: CharacterTemplate,
    /// Monsters spawned per zone while farming.
    pub monsters_per_zone: usize,
    pub inventory_size: usize,
    /// Item dropped when a zone is cleared (None disables drops).
    pub loot: Option<Item>,
    /// Drop chance in percent, rolled once per cleared zone.
    pub loot_chance_percent: u32,
    /// Items the player starts the session with.
    pub starting_items: Vec<Item>,
    /// Seed for combat rolls; drawn from `rand` when absent.
    pub seed: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_PLAYER_NAME: &'static str = "Player";
    pub const DEFAULT_MONSTER_NAME: &'static str = "Monster";
    pub const DEFAULT_PLAYER_MIN_DAMAGE: u32 = 3;
    pub const DEFAULT_PLAYER_MAX_DAMAGE: u32 = 5;
    pub const DEFAULT_LOOT_MAX_HEALTH: u32 = 5;

    /// Fixes the seed for reproducible sessions.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_monsters_per_zone(mut self, count: usize) -> Self {
        self.monsters_per_zone = count;
        self
    }

    #[must_use]
    pub fn with_loot(mut self, loot: Option<Item>, chance_percent: u32) -> Self {
        self.loot = loot;
        self.loot_chance_percent = chance_percent;
        self
    }

    fn default_loot() -> Item {
        Item::default().with_stat(StatKind::MaximumHealth, Self::DEFAULT_LOOT_MAX_HEALTH)
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let game_config = GameConfig::default();
        let base = game_config.default_stats;
        Self {
            player: CharacterTemplate::new(
                Self::DEFAULT_PLAYER_NAME,
                CharacterStats {
                    min_damage: Self::DEFAULT_PLAYER_MIN_DAMAGE,
                    max_damage: Self::DEFAULT_PLAYER_MAX_DAMAGE,
                    ..base
                },
            ),
            monster: CharacterTemplate::named(Self::DEFAULT_MONSTER_NAME),
            game_config,
            monsters_per_zone: 1,
            inventory_size: GameConfig::DEFAULT_INVENTORY_SIZE,
            loot: Some(Self::default_loot()),
            loot_chance_percent: 100,
            starting_items: vec![Self::default_loot()],
            seed: None,
        }
    }
}

/// Name and starting stats used to spawn a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterTemplate {
    pub name: String,
    /// Explicit stats; `None` spawns with the session's `GameConfig` defaults.
    pub stats: Option<CharacterStats>,
}

impl CharacterTemplate {
    pub fn new(name: impl Into<String>, stats: CharacterStats) -> Self {
        Self {
            name: name.into(),
            stats: Some(stats),
        }
    }

    /// Template that takes its stats from the `GameConfig` passed at spawn.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: None,
        }
    }

    pub fn spawn(&self, config: &GameConfig) -> Character {
        self.spawn_named(self.name.clone(), config)
    }

    /// Spawns with a different display name (e.g. "Monster 2").
    pub fn spawn_named(&self, name: impl Into<String>, config: &GameConfig) -> Character {
        match self.stats {
            Some(stats) => Character::with_stats(name, stats.to_holder()),
            None => Character::from_config(name, config),
        }
    }
}
