//! Layout configuration for the 360x360 round face.
//!
//! Positions are given in face coordinates with the origin at the top
//! left; the hand pivot sits at the face center. Sizes are fixed
//! constants rather than derived at runtime.

use embedded_graphics::geometry::Point;

use crate::widgets::hands::HandGeometry;

/// Face width in pixels.
pub const BASE_WIDTH: u32 = 360;

/// Face height in pixels.
pub const BASE_HEIGHT: u32 = 360;

/// Rotation pivot for all center-mounted hands.
pub const CENTER: Point = Point::new(BASE_WIDTH as i32 / 2, BASE_HEIGHT as i32 / 2);

/// Radius of the outer bezel circle.
pub const BEZEL_RADIUS: u32 = 179;

/// Radius of the minute tick ring (ticks grow inward).
pub const TICK_RING_RADIUS: i32 = 172;

/// Length of a minute tick.
pub const TICK_MINOR_LEN: i32 = 8;

/// Length of an hour tick.
pub const TICK_MAJOR_LEN: i32 = 16;

/// Radius of the center plate covering the hand hub.
pub const PLATE_RADIUS: u32 = 10;

// =============================================================================
// Hand Geometry
// =============================================================================

/// Hour hand: short and wide.
pub const HANDS_HOUR: HandGeometry = HandGeometry {
    length: 104,
    tail: 22,
    width: 9,
};

/// Minute hand: reaches the tick ring.
pub const HANDS_MIN: HandGeometry = HandGeometry {
    length: 156,
    tail: 22,
    width: 7,
};

/// Second hand: thin, with a long counterweight tail.
pub const HANDS_SEC: HandGeometry = HandGeometry {
    length: 164,
    tail: 34,
    width: 3,
};

/// Battery hand: stubby pointer onto the charge sub-dial.
pub const HANDS_BAT: HandGeometry = HandGeometry {
    length: 62,
    tail: 8,
    width: 3,
};

/// Month sub-hand inside the date module.
pub const HANDS_MONTH: HandGeometry = HandGeometry {
    length: 40,
    tail: 8,
    width: 3,
};

/// Weekday sub-hand inside the date module.
pub const HANDS_WEEKDAY: HandGeometry = HandGeometry {
    length: 30,
    tail: 6,
    width: 2,
};

/// Vertical pivot offset for the second hand's drop shadow.
pub const HANDS_SEC_SHADOW_PADDING: i32 = 5;

/// Vertical pivot offset for the minute hand's drop shadow.
pub const HANDS_MIN_SHADOW_PADDING: i32 = 9;

/// Vertical pivot offset for the hour hand's drop shadow.
pub const HANDS_HOUR_SHADOW_PADDING: i32 = 9;

/// Vertical pivot offset for the battery hand's drop shadow.
pub const HANDS_BAT_SHADOW_PADDING: i32 = 4;

/// Vertical pivot offset for the calendar sub-hands' drop shadows.
pub const HANDS_CAL_SHADOW_PADDING: i32 = 2;

// =============================================================================
// Module Layout
// =============================================================================

/// Center of the date module (9 o'clock side).
pub const MODULE_DATE_CENTER: Point = Point::new(CENTER.x - 92, CENTER.y);

/// Center of the heart-rate module (3 o'clock side).
pub const MODULE_HEARTRATE_CENTER: Point = Point::new(CENTER.x + 92, CENTER.y);

/// Center of the step-counter module (6 o'clock side).
pub const MODULE_STEPS_CENTER: Point = Point::new(CENTER.x, CENTER.y + 84);

/// Center of the moon-phase module (12 o'clock side).
pub const MODULE_MOON_CENTER: Point = Point::new(CENTER.x, CENTER.y - 88);

/// Outline radius of the round side modules.
pub const MODULE_RADIUS: u32 = 50;

/// Radius of the moon-phase disc.
pub const MOON_RADIUS: u32 = 26;

/// Tick radius of the battery charge sub-dial (scale marks point at the
/// battery hand's tip).
pub const BATTERY_DIAL_RADIUS: i32 = 70;
