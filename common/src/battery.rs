//! Battery level classification.
//!
//! The predicate is stateless and level-triggered. [`crate::state::FaceState`]
//! tracks the previous classification so callers only react to threshold
//! crossings, not to every tick spent below the line.

/// Charge percentage at or below which the face switches to its
/// low-battery look.
pub const LOW_BATTERY_LEVEL: u8 = 25;

/// True when the charge percentage is at or below [`LOW_BATTERY_LEVEL`].
#[inline]
pub const fn is_low_battery(percent: u8) -> bool { percent <= LOW_BATTERY_LEVEL }
