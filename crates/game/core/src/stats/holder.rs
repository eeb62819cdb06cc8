//! Insertion-ordered stat storage with floor-clamped removal.

use arrayvec::ArrayVec;
use strum::EnumCount;

use super::StatKind;
use crate::error::{ErrorSeverity, GameError};

/// Errors raised when reading or removing a stat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatError {
    /// The stat kind was never added to this holder.
    #[error("stat {0} not found")]
    NotFound(StatKind),
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            StatError::NotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StatError::NotFound(_) => "STAT_NOT_FOUND",
        }
    }
}

/// Mapping from stat kind to a non-negative value.
///
/// A stat either exists (possibly with value zero) or is absent. Entries keep
/// the order in which they were first added, which is the order used when
/// listing stats for display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatHolder {
    entries: ArrayVec<(StatKind, u32), { StatKind::COUNT }>,
}

impl StatHolder {
    /// Creates an empty holder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `kind`, inserting the stat if it is absent.
    ///
    /// Saturates at `u32::MAX`. No bound relative to other stats is applied.
    pub fn add_stat(&mut self, kind: StatKind, amount: u32) {
        match self.slot_mut(kind) {
            Some(value) => *value = value.saturating_add(amount),
            None => self.entries.push((kind, amount)),
        }
        tracing::trace!(stat = %kind, amount, "stat added");
    }

    /// Subtracts `amount` from `kind`, clamping at zero.
    ///
    /// Returns the new value.
    pub fn remove_stat(&mut self, kind: StatKind, amount: u32) -> Result<u32, StatError> {
        let value = self.slot_mut(kind).ok_or(StatError::NotFound(kind))?;
        *value = value.saturating_sub(amount);
        tracing::trace!(stat = %kind, amount, remaining = *value, "stat removed");
        Ok(*value)
    }

    /// Overwrites `kind` with `value`, inserting the stat if it is absent.
    pub fn set_stat(&mut self, kind: StatKind, value: u32) {
        match self.slot_mut(kind) {
            Some(slot) => *slot = value,
            None => self.entries.push((kind, value)),
        }
    }

    /// Returns the stored value of `kind`.
    pub fn get_stat(&self, kind: StatKind) -> Result<u32, StatError> {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, value)| *value)
            .ok_or(StatError::NotFound(kind))
    }

    pub fn has_stat(&self, kind: StatKind) -> bool {
        self.entries.iter().any(|(k, _)| *k == kind)
    }

    /// Existing `(kind, value)` pairs in insertion order.
    pub fn existing_stats(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slot_mut(&mut self, kind: StatKind) -> Option<&mut u32> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == kind)
            .map(|(_, value)| value)
    }
}

impl FromIterator<(StatKind, u32)> for StatHolder {
    /// Collects pairs with `add_stat` semantics: repeated kinds accumulate.
    fn from_iter<I: IntoIterator<Item = (StatKind, u32)>>(iter: I) -> Self {
        let mut stats = StatHolder::new();
        for (kind, amount) in iter {
            stats.add_stat(kind, amount);
        }
        stats
    }
}
