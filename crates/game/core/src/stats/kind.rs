/// Enumerated category of numeric attribute.
///
/// Display and parsing use the upper snake case name (`MIN_DAMAGE`), which is
/// also how stats are listed on items.
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
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum StatKind {
    /// Lower bound of an attack's damage roll.
    MinDamage,
    /// Upper bound (inclusive) of an attack's damage roll.
    MaxDamage,
    /// Flat reduction applied to incoming attack damage.
    Defence,
    /// Remaining health. Zero means dead.
    CurrentHealth,
    /// Health restored to on a full restore.
    MaximumHealth,
}
