//! Items and equipment slots.
//!
//! An [`Item`] is a name plus a [`StatHolder`]; the same type is used for loot
//! in an inventory and for equipment held in an [`ItemSlotSet`].

pub mod slots;

pub use slots::{ItemSlotSet, KitType, SlotError};

use core::fmt;

use crate::stats::{StatHolder, StatKind};

/// A stat-carrying item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub stats: StatHolder,
}

impl Item {
    pub const DEFAULT_NAME: &'static str = "Item Name";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stats: StatHolder::new(),
        }
    }

    /// Adds a stat (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, kind: StatKind, amount: u32) -> Self {
        self.stats.add_stat(kind, amount);
        self
    }
}

impl Default for Item {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

/// Name on the first line, then one `STAT: value` line per stat.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (kind, value) in self.stats.existing_stats() {
            write!(f, "\n{kind}: {value}")?;
        }
        Ok(())
    }
}
