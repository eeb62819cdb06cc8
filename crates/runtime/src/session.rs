//! Game session: the state a driver keeps between player inputs.
//!
//! A [`GameSession`] owns the player, their inventory, the monsters of the
//! current zone and the RNG used for every roll. Drivers call its methods in
//! response to user input and render the returned [`TurnReport`]s.

use game_core::{Character, GameError, Item, PcgRng, RngOracle, run_monster_turns};

use crate::error::{Result, RuntimeError};
use crate::inventory::Inventory;
use crate::runtime::RuntimeConfig;
use crate::state::GameState;

/// Outcome of one player turn (player action plus monster responses).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// Descriptions in the order they happened; the player's action first.
    pub lines: Vec<String>,
    /// True when no monster of the zone is left alive.
    pub zone_complete: bool,
    pub player_alive: bool,
    /// Item dropped by the zone, offered to the player.
    pub loot: Option<Item>,
}

impl TurnReport {
    /// All lines joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

pub struct GameSession<R = PcgRng> {
    config: RuntimeConfig,
    player: Character,
    inventory: Inventory,
    monsters: Vec<Character>,
    state: GameState,
    zone: u32,
    rng: R,
}

impl GameSession<PcgRng> {
    /// Creates a session seeded from the config, or from `rand` when the
    /// config has no seed.
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "seeding session rng");
        Self::with_rng(config, PcgRng::new(seed))
    }
}

impl<R: RngOracle> GameSession<R> {
    /// Creates a session that draws every roll from `rng`.
    pub fn with_rng(config: RuntimeConfig, rng: R) -> Result<Self> {
        let mut inventory = Inventory::new(config.inventory_size);
        for item in &config.starting_items {
            inventory.push(item.clone())?;
        }

        Ok(Self {
            player: config.player.spawn(&config.game_config),
            inventory,
            monsters: Vec::new(),
            state: GameState::Idle,
            zone: 0,
            rng,
            config,
        })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn player(&self) -> &Character {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Character {
        &mut self.player
    }

    pub fn monsters(&self) -> &[Character] {
        &self.monsters
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of zones started since the session began.
    pub fn zone(&self) -> u32 {
        self.zone
    }

    // ===== encounter lifecycle =====

    /// Enters (or continues into) a fresh farming zone.
    pub fn start_farming(&mut self) -> Result<()> {
        self.transition(GameState::Farming)?;
        self.zone += 1;

        let count = self.config.monsters_per_zone;
        let template = &self.config.monster;
        let game_config = &self.config.game_config;
        self.monsters = if count == 1 {
            vec![template.spawn(game_config)]
        } else {
            (1..=count)
                .map(|n| template.spawn_named(format!("{} {n}", template.name), game_config))
                .collect()
        };

        tracing::info!(zone = self.zone, monsters = count, "zone started");
        Ok(())
    }

    pub fn enter_boss(&mut self) -> Result<()> {
        self.transition(GameState::Boss)?;
        self.monsters.clear();
        Ok(())
    }

    /// Goes back to base: restores the player and clears the encounter.
    pub fn return_to_base(&mut self) -> Result<()> {
        self.player.full_restore()?;
        self.monsters.clear();
        self.transition(GameState::Idle)
    }

    /// True when no monster of the current zone is alive.
    pub fn zone_complete(&self) -> bool {
        !self.monsters.iter().any(Character::alive)
    }

    /// Resolves the player's action against the monsters at `targets`,
    /// then lets every living monster respond.
    ///
    /// Targets are validated before anything happens. Errors raised by the
    /// monster responses leave the player's action applied.
    pub fn player_turn(&mut self, action_index: usize, targets: &[usize]) -> Result<TurnReport> {
        if !self.state.in_encounter() || self.monsters.is_empty() {
            return Err(RuntimeError::NoEncounter);
        }
        if !self.player.alive() {
            return Err(RuntimeError::PlayerDead);
        }
        for (pos, &index) in targets.iter().enumerate() {
            let monster = self
                .monsters
                .get(index)
                .ok_or(RuntimeError::InvalidTarget(index))?;
            if targets[..pos].contains(&index) {
                return Err(RuntimeError::DuplicateTarget(index));
            }
            if !monster.alive() {
                return Err(RuntimeError::TargetDead(index));
            }
        }

        let mut chosen: Vec<&mut Character> = self
            .monsters
            .iter_mut()
            .enumerate()
            .filter(|(index, _)| targets.contains(index))
            .map(|(_, monster)| monster)
            .collect();
        let player_line = self
            .player
            .perform(action_index, &mut chosen, &mut self.rng)
            .inspect_err(|err| {
                tracing::debug!(code = err.error_code(), "player action rejected: {err}");
            })?;

        let mut lines = vec![player_line];
        lines.extend(self.do_monster_actions()?);

        let zone_complete = self.zone_complete();
        let loot = if zone_complete {
            tracing::info!(zone = self.zone, "zone complete");
            self.roll_loot()
        } else {
            None
        };
        let player_alive = self.player.alive();
        if !player_alive {
            tracing::info!(zone = self.zone, "player defeated");
        }

        Ok(TurnReport {
            lines,
            zone_complete,
            player_alive,
            loot,
        })
    }

    /// Every living monster uses its default action on the player.
    pub fn do_monster_actions(&mut self) -> Result<Vec<String>> {
        Ok(run_monster_turns(
            &self.monsters,
            &mut self.player,
            &mut self.rng,
        )?)
    }

    fn roll_loot(&mut self) -> Option<Item> {
        let item = self.config.loot.clone()?;
        let chance = self.config.loot_chance_percent.min(100);
        if chance == 0 || self.rng.range(1, 100) > chance {
            return None;
        }
        tracing::debug!(item = %item.name, "item dropped");
        Some(item)
    }

    fn transition(&mut self, next: GameState) -> Result<()> {
        if !self.state.can_transition_to(next) {
            return Err(RuntimeError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }
        tracing::info!(from = %self.state, to = %next, "state transition");
        self.state = next;
        Ok(())
    }

    // ===== inventory & equipment =====

    pub fn inventory_full(&self) -> bool {
        self.inventory.is_full()
    }

    /// Puts `item` into the inventory.
    pub fn take_item(&mut self, item: Item) -> Result<()> {
        let name = item.name.clone();
        self.inventory.push(item).inspect_err(|_| {
            tracing::warn!(item = %name, "could not take item, inventory is full");
        })
    }

    pub fn discard_item(&mut self, index: usize) -> Result<Item> {
        self.inventory.remove(index)
    }

    /// Moves the inventory item at `index` into the player's `slot_id`.
    ///
    /// A previously equipped item goes back to the inventory.
    pub fn equip_from_inventory(&mut self, index: usize, slot_id: &str) -> Result<()> {
        self.player.equipped_items().get_item(slot_id)?;
        let item = self.inventory.remove(index)?;
        tracing::debug!(item = %item.name, slot = slot_id, "equipping");
        let previous = self
            .player
            .equipped_items_mut()
            .set_item(slot_id, Some(item))?;
        if let Some(previous) = previous {
            self.inventory.push(previous)?;
        }
        Ok(())
    }

    /// Moves the item in `slot_id` back to the inventory.
    ///
    /// Returns false when the slot was already empty.
    pub fn unequip(&mut self, slot_id: &str) -> Result<bool> {
        if self.player.equipped_items().get_item(slot_id)?.is_none() {
            return Ok(false);
        }
        if self.inventory.is_full() {
            return Err(RuntimeError::InventoryFull {
                capacity: self.inventory.capacity(),
            });
        }
        if let Some(item) = self.player.equipped_items_mut().set_item(slot_id, None)? {
            self.inventory.push(item)?;
        }
        Ok(true)
    }
}
