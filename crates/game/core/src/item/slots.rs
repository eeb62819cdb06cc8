//! Equipment slot sets.
//!
//! The set of slot identifiers is fixed by the [`KitType`] at construction and
//! never changes. Looking up an identifier outside the kit is an error, which
//! is distinct from a known slot that is simply empty.

use arrayvec::ArrayVec;

use super::Item;
use crate::error::{ErrorSeverity, GameError};

/// Body plan deciding which equipment slots exist.
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
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum KitType {
    /// Weapon, Armour, Amulet.
    #[default]
    Human,
}

impl KitType {
    /// Largest slot count of any kit.
    pub const MAX_SLOTS: usize = 3;

    /// Slot identifiers in display order.
    pub const fn slot_ids(&self) -> &'static [&'static str] {
        match self {
            KitType::Human => &["Weapon", "Armour", "Amulet"],
        }
    }

    fn position(&self, slot_id: &str) -> Option<usize> {
        self.slot_ids().iter().position(|id| *id == slot_id)
    }
}

/// Errors raised by slot lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotError {
    /// The identifier is not one of the kit's slots.
    #[error("unknown equipment slot '{slot}' for {kit} kit")]
    UnknownSlot { slot: String, kit: KitType },
}

impl GameError for SlotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SlotError::UnknownSlot { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SlotError::UnknownSlot { .. } => "SLOT_UNKNOWN",
        }
    }
}

/// Fixed mapping from slot identifier to an optional equipped item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlotSet {
    kit: KitType,
    slots: ArrayVec<Option<Item>, { KitType::MAX_SLOTS }>,
}

impl ItemSlotSet {
    /// Creates an empty slot set with the kit's slots.
    pub fn new(kit: KitType) -> Self {
        let slots = kit.slot_ids().iter().map(|_| None).collect();
        Self { kit, slots }
    }

    pub fn kit(&self) -> KitType {
        self.kit
    }

    pub fn contains_slot(&self, slot_id: &str) -> bool {
        self.kit.position(slot_id).is_some()
    }

    /// Returns the item in `slot_id`, or `None` when the slot is empty.
    pub fn get_item(&self, slot_id: &str) -> Result<Option<&Item>, SlotError> {
        let index = self.index_of(slot_id)?;
        Ok(self.slots[index].as_ref())
    }

    /// Puts `item` into `slot_id` (or empties it with `None`), returning the
    /// previous occupant.
    pub fn set_item(
        &mut self,
        slot_id: &str,
        item: Option<Item>,
    ) -> Result<Option<Item>, SlotError> {
        let index = self.index_of(slot_id)?;
        Ok(core::mem::replace(&mut self.slots[index], item))
    }

    /// `(slot_id, occupant)` pairs in kit order.
    pub fn slots(&self) -> impl Iterator<Item = (&'static str, Option<&Item>)> + '_ {
        self.kit
            .slot_ids()
            .iter()
            .copied()
            .zip(self.slots.iter().map(Option::as_ref))
    }

    /// Equipped items, skipping empty slots.
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.slots.iter().flatten()
    }

    fn index_of(&self, slot_id: &str) -> Result<usize, SlotError> {
        self.kit.position(slot_id).ok_or_else(|| SlotError::UnknownSlot {
            slot: slot_id.to_string(),
            kit: self.kit,
        })
    }
}

impl Default for ItemSlotSet {
    fn default() -> Self {
        Self::new(KitType::default())
    }
}
