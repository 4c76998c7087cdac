//! Calendar helpers: weekday labels, Julian day numbers, and the moon
//! phase approximation used by the moon module.

use micromath::F32Ext;

/// Weekday labels indexed by the host clock's day-of-week number.
///
/// The table starts at Saturday; entry 7 duplicates entry 0 as a guard so
/// a host that numbers days 1..=7 still lands on a valid label.
const WEEKDAYS: [&str; 8] = ["SAT", "SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Length of the mean synodic month in days (new moon to new moon).
pub const SYNODIC_MONTH: f32 = 29.530_588;

/// Julian day number of the reference new moon (2000-01-06).
const NEW_MOON_REFERENCE_JDN: i64 = 2_451_550;

/// Three-letter weekday abbreviation for a day-of-week index.
///
/// Out-of-range indices fall back to the guard entry rather than failing;
/// a wrong label on one tick is not worth aborting a redraw for. Callers
/// that care should log the bad index.
#[inline]
pub fn weekday_abbreviation(weekday_index: u8) -> &'static str {
    match WEEKDAYS.get(usize::from(weekday_index)) {
        Some(label) => label,
        None => WEEKDAYS[7],
    }
}

/// Gregorian leap year check (4/100/400 rule).
#[inline]
pub const fn is_leap_year(year: i32) -> bool { year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) }

/// Julian day number for a proleptic Gregorian calendar date.
///
/// Integer arithmetic throughout; leap years handled by the 4/100/400
/// rule folded into the standard formula.
pub const fn julian_day_number(
    day: u8,
    month: u8,
    year: i32,
) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Fraction of the current synodic month elapsed since new moon, in
/// `[0, 1)`. 0.0 is a new moon, 0.5 a full moon.
pub fn moon_phase_fraction(
    day: u8,
    month: u8,
    year: i32,
) -> f32 {
    let elapsed = (julian_day_number(day, month, year) - NEW_MOON_REFERENCE_JDN) as f32;
    let cycles = elapsed / SYNODIC_MONTH;

    // Subtracting the floor keeps dates before the reference in [0, 1) too
    cycles - cycles.floor()
}

/// Bucket a phase fraction into one of eight renderable phases:
/// 0 new, 2 first quarter, 4 full, 6 last quarter.
#[inline]
pub fn moon_phase_index(fraction: f32) -> u8 { ((fraction * 8.0 + 0.5).floor() as u8) % 8 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_table_order() {
        assert_eq!(weekday_abbreviation(0), "SAT");
        assert_eq!(weekday_abbreviation(1), "SUN");
        assert_eq!(weekday_abbreviation(2), "MON");
        assert_eq!(weekday_abbreviation(3), "TUE");
        assert_eq!(weekday_abbreviation(4), "WED");
        assert_eq!(weekday_abbreviation(5), "THU");
        assert_eq!(weekday_abbreviation(6), "FRI");
    }

    #[test]
    fn test_weekday_guard_entry() {
        assert_eq!(weekday_abbreviation(7), "SAT");
    }

    #[test]
    fn test_weekday_out_of_range_falls_back() {
        assert_eq!(weekday_abbreviation(8), "SAT");
        assert_eq!(weekday_abbreviation(255), "SAT");
    }

    #[test]
    fn test_weekday_labels_fit_three_chars() {
        for idx in 0..8u8 {
            assert!(weekday_abbreviation(idx).len() <= 3);
        }
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_julian_day_reference_dates() {
        assert_eq!(julian_day_number(1, 1, 2000), 2_451_545);
        // J2000 epoch plus one Julian century
        assert_eq!(julian_day_number(1, 1, 2100), 2_488_070);
        assert_eq!(julian_day_number(17, 11, 1858), 2_400_001);
    }

    #[test]
    fn test_julian_day_counts_leap_day() {
        let feb28 = julian_day_number(28, 2, 2024);
        let mar1 = julian_day_number(1, 3, 2024);
        assert_eq!(mar1 - feb28, 2, "2024 is a leap year");

        let feb28 = julian_day_number(28, 2, 2023);
        let mar1 = julian_day_number(1, 3, 2023);
        assert_eq!(mar1 - feb28, 1);
    }

    #[test]
    fn test_moon_phase_new_at_reference() {
        let fraction = moon_phase_fraction(6, 1, 2000);
        assert!(fraction < 0.01, "reference date is a new moon");
    }

    #[test]
    fn test_moon_phase_in_unit_range() {
        for day in 1..=28u8 {
            let fraction = moon_phase_fraction(day, 7, 2026);
            assert!((0.0..1.0).contains(&fraction));
        }
        // Dates before the reference new moon wrap instead of going negative
        let fraction = moon_phase_fraction(1, 1, 1999);
        assert!((0.0..1.0).contains(&fraction));
    }

    #[test]
    fn test_moon_phase_roughly_periodic() {
        // 30 days is within half a day of one synodic month, so the
        // fraction should nearly repeat (tolerance ~0.47/29.53)
        let a = moon_phase_fraction(1, 3, 2026);
        let b = moon_phase_fraction(31, 3, 2026);
        let diff = (b - a).abs();
        let wrapped = if diff > 0.5 { 1.0 - diff } else { diff };
        assert!(wrapped < 0.05);
    }

    #[test]
    fn test_moon_phase_half_cycle_is_full() {
        // ~14.77 days after the reference new moon
        let fraction = moon_phase_fraction(21, 1, 2000);
        assert!((fraction - 0.5).abs() < 0.05);
    }

    #[test]
    fn test_moon_phase_index_buckets() {
        assert_eq!(moon_phase_index(0.0), 0);
        assert_eq!(moon_phase_index(0.25), 2);
        assert_eq!(moon_phase_index(0.5), 4);
        assert_eq!(moon_phase_index(0.75), 6);
        // Just below a full cycle rounds back to new
        assert_eq!(moon_phase_index(0.99), 0);
        for step in 0..100 {
            let fraction = step as f32 / 100.0;
            assert!(moon_phase_index(fraction) < 8);
        }
    }
}
