//! Hand rotation math for the analog face.
//!
//! Every function maps a time/calendar field to a rotation in degrees,
//! measured clockwise from the 12 o'clock position. The renderer applies
//! the result as a rotate-about-pivot transform; nothing here touches the
//! display.
//!
//! All inputs are assumed pre-validated by the caller (the host clock only
//! hands out in-range values). An out-of-range input produces a harmlessly
//! wrong angle, never a panic.

/// Degrees the hour hand advances per hour.
pub const HOUR_ANGLE: f32 = 30.0;

/// Degrees the minute hand advances per minute.
pub const MIN_ANGLE: f32 = 6.0;

/// Degrees the second hand advances per second.
pub const SEC_ANGLE: f32 = 6.0;

/// Degrees the month sub-hand advances per month.
pub const MONTH_ANGLE: f32 = 30.0;

/// Degrees the weekday sub-hand advances per weekday index.
pub const WEEKDAY_ANGLE: f32 = 51.0;

/// Battery dial angle at 0% charge.
pub const BATTERY_START_ANGLE: f32 = 210.0;

/// Degrees the battery hand advances per percent of charge. Exactly
/// representable so the full-charge angle lands on the dial's end mark.
pub const BATTERY_STEP_ANGLE: f32 = 1.25;

const _: () = assert!(BATTERY_START_ANGLE + 100.0 * BATTERY_STEP_ANGLE <= 360.0);

/// Second hand angle. 6 degrees per second, `[0, 354]` over a cycle.
#[inline]
pub fn second_angle(second: u8) -> f32 { f32::from(second) * SEC_ANGLE }

/// Minute hand angle before creep adjustment. 6 degrees per minute.
#[inline]
pub fn minute_angle(minute: u8) -> f32 { f32::from(minute) * MIN_ANGLE }

/// Creep the minute hand picks up as seconds pass (0.1 degrees per
/// second), so the hand does not sit still for a whole minute.
#[inline]
pub fn minute_plus_angle(second: u8) -> f32 { f32::from(second) * 0.1 }

/// Creep the hour hand picks up as minutes pass (0.5 degrees per minute).
/// Half past three reads 105 degrees, not 90.
#[inline]
pub fn hour_plus_angle(minute: u8) -> f32 { f32::from(minute) * 0.5 }

/// Hour hand angle including minute creep. Hours wrap modulo 12, so both
/// 00:00 and 12:00 point straight up.
#[inline]
pub fn hour_angle(
    hour: u8,
    minute: u8,
) -> f32 {
    f32::from(hour % 12) * HOUR_ANGLE + hour_plus_angle(minute)
}

/// Battery hand angle for a charge percentage on the 0-100% sub-dial.
#[inline]
pub fn battery_angle(percent: u8) -> f32 { BATTERY_START_ANGLE + f32::from(percent) * BATTERY_STEP_ANGLE }

/// Month sub-hand angle. January points up.
#[inline]
pub fn month_angle(month: u8) -> f32 { f32::from(month.saturating_sub(1)) * MONTH_ANGLE }

/// Weekday sub-hand angle for a weekday index (Saturday = 0, see
/// [`crate::calendar::weekday_abbreviation`]).
#[inline]
pub fn weekday_angle(weekday_index: u8) -> f32 { f32::from(weekday_index) * WEEKDAY_ANGLE }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_angle_full_cycle() {
        let mut prev = -1.0f32;
        for sec in 0..60u8 {
            let angle = second_angle(sec);
            assert_eq!(angle, 6.0 * f32::from(sec));
            assert!(angle > prev, "second hand must be monotonic over the cycle");
            prev = angle;
        }
        assert_eq!(second_angle(0), 0.0);
        assert_eq!(second_angle(59), 354.0);
    }

    #[test]
    fn test_minute_angle_full_cycle() {
        for min in 0..60u8 {
            assert_eq!(minute_angle(min), 6.0 * f32::from(min));
        }
    }

    #[test]
    fn test_minute_creep() {
        assert_eq!(minute_plus_angle(0), 0.0);
        assert_eq!(minute_plus_angle(30), 3.0);
        // One full minute of creep equals one minute step
        assert_eq!(minute_plus_angle(60), MIN_ANGLE);
    }

    #[test]
    fn test_hour_angle_reference_points() {
        assert_eq!(hour_angle(0, 0), 0.0);
        assert_eq!(hour_angle(3, 0), 90.0);
        // Half-past creep: 90 + 15
        assert_eq!(hour_angle(3, 30), 105.0);
        assert_eq!(hour_angle(12, 0), 0.0);
        assert_eq!(hour_angle(23, 59), 11.0 * 30.0 + 29.5);
    }

    #[test]
    fn test_hour_angle_wraps_afternoon() {
        // 15:00 and 03:00 share a hand position
        assert_eq!(hour_angle(15, 0), hour_angle(3, 0));
    }

    #[test]
    fn test_hour_angle_in_range() {
        for hour in 0..24u8 {
            for minute in 0..60u8 {
                let angle = hour_angle(hour, minute);
                assert!((0.0..360.0).contains(&angle));
            }
        }
    }

    #[test]
    fn test_battery_angle_sweep() {
        assert_eq!(battery_angle(0), BATTERY_START_ANGLE);
        assert_eq!(battery_angle(100), BATTERY_START_ANGLE + 125.0);
        // Sweep stays on the dial
        for pct in 0..=100u8 {
            let angle = battery_angle(pct);
            assert!(angle >= BATTERY_START_ANGLE && angle < 360.0);
        }
    }

    #[test]
    fn test_month_angle() {
        assert_eq!(month_angle(1), 0.0);
        assert_eq!(month_angle(4), 90.0);
        assert_eq!(month_angle(12), 330.0);
    }

    #[test]
    fn test_weekday_angle() {
        assert_eq!(weekday_angle(0), 0.0);
        assert_eq!(weekday_angle(6), 306.0);
    }

    #[test]
    fn test_purity() {
        // Same input twice, same output
        assert_eq!(hour_angle(9, 41), hour_angle(9, 41));
        assert_eq!(second_angle(17), second_angle(17));
        assert_eq!(battery_angle(42), battery_angle(42));
    }
}
