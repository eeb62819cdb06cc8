//! Targeting modes for actions.
//!
//! Only target cardinality is modeled: combat has no positions or ranges, so
//! a mode simply states how many characters an action accepts.

/// How many targets an action accepts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetingMode {
    /// Exactly one target.
    ///
    /// Used for attacks.
    SingleTarget,

    /// One or more targets; the action applies to each of them.
    AllTargets,
}

impl TargetingMode {
    /// Returns true if `count` targets satisfy this mode.
    ///
    /// An empty target list is never accepted.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            TargetingMode::SingleTarget => count == 1,
            TargetingMode::AllTargets => count >= 1,
        }
    }
}
