//! Stat system.
//!
//! Characters and items carry their numeric attributes in a [`StatHolder`]:
//! an insertion-ordered map from [`StatKind`] to a non-negative value.
//!
//! ## Principles
//!
//! 1. **Absence is not zero**: a stat that was never added is missing, and
//!    reading it is an error
//! 2. **Floor clamp**: removal saturates at zero, values never go negative
//! 3. **No cross-stat rules**: the holder does not know that CURRENT_HEALTH is
//!    bounded by MAXIMUM_HEALTH; [`crate::Character`] enforces that

pub mod holder;
pub mod kind;

pub use holder::{StatError, StatHolder};
pub use kind::StatKind;
