//! Value types the host hands to each tick.
//!
//! Both types are plain `Copy` tuples of the fields the host clock
//! exposes, read once per tick and never mutated. The convenience methods
//! delegate to the pure functions in [`crate::angles`] and
//! [`crate::calendar`].

use crate::angles;
use crate::calendar;

/// Wall-clock time of day.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ClockTime {
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
}

impl ClockTime {
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Self {
        Self { hour, minute, second }
    }

    /// Hour hand angle, including minute creep.
    #[inline]
    pub fn hour_hand_angle(&self) -> f32 { angles::hour_angle(self.hour, self.minute) }

    /// Minute hand angle, including second creep.
    #[inline]
    pub fn minute_hand_angle(&self) -> f32 {
        angles::minute_angle(self.minute) + angles::minute_plus_angle(self.second)
    }

    /// Second hand angle for a discrete once-per-second tick.
    #[inline]
    pub fn second_hand_angle(&self) -> f32 { angles::second_angle(self.second) }
}

/// Calendar date plus the host's day-of-week index.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CalendarDate {
    /// Day of month, 1-31.
    pub day: u8,
    /// Month, 1-12.
    pub month: u8,
    pub year: i32,
    /// Host day-of-week index, Saturday = 0 (see
    /// [`calendar::weekday_abbreviation`]).
    pub weekday_index: u8,
}

impl CalendarDate {
    pub const fn new(
        day: u8,
        month: u8,
        year: i32,
        weekday_index: u8,
    ) -> Self {
        Self {
            day,
            month,
            year,
            weekday_index,
        }
    }

    /// Three-letter weekday label for the date module.
    #[inline]
    pub fn weekday_abbreviation(&self) -> &'static str { calendar::weekday_abbreviation(self.weekday_index) }

    /// Julian day number of this date.
    #[inline]
    pub const fn julian_day_number(&self) -> i64 { calendar::julian_day_number(self.day, self.month, self.year) }

    /// Moon phase fraction in `[0, 1)`.
    #[inline]
    pub fn moon_phase_fraction(&self) -> f32 { calendar::moon_phase_fraction(self.day, self.month, self.year) }

    /// Month sub-hand angle.
    #[inline]
    pub fn month_hand_angle(&self) -> f32 { angles::month_angle(self.month) }

    /// Weekday sub-hand angle.
    #[inline]
    pub fn weekday_hand_angle(&self) -> f32 { angles::weekday_angle(self.weekday_index) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_time_delegates_to_angle_math() {
        let t = ClockTime::new(3, 30, 15);
        assert_eq!(t.hour_hand_angle(), 105.0);
        assert_eq!(t.second_hand_angle(), 90.0);
        // 30 * 6 + 15 * 0.1
        assert_eq!(t.minute_hand_angle(), 181.5);
    }

    #[test]
    fn test_calendar_date_weekday_label() {
        let d = CalendarDate::new(1, 1, 2000, 0);
        assert_eq!(d.weekday_abbreviation(), "SAT");
        assert_eq!(d.julian_day_number(), 2_451_545);
    }
}
