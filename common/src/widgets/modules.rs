//! The complication modules around the dial: date, heart rate, steps,
//! and moon phase.
//!
//! Each module formats its own label into a heapless buffer and draws
//! it center-aligned at a fixed layout position.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle};
use embedded_graphics::text::{Alignment, Text};
use heapless::String;
use profont::{PROFONT_10_POINT, PROFONT_12_POINT, PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::calendar::moon_phase_index;
use crate::config::{HANDS_CAL_SHADOW_PADDING, HANDS_MONTH, HANDS_WEEKDAY, MODULE_RADIUS, MOON_RADIUS};
use crate::datetime::CalendarDate;
use crate::eventlog::push_u32;
use crate::palette::FacePalette;
use crate::widgets::hands::{draw_hand, draw_hand_with_shadow};

fn draw_module_outline<D>(
    display: &mut D,
    center: Point,
    palette: &FacePalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, MODULE_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_stroke(palette.module_outline, 1))
        .draw(display)
        .ok();
}

/// Date module: rotating month and weekday sub-hands under the day of
/// month and weekday abbreviation.
pub fn draw_date_module<D>(
    display: &mut D,
    center: Point,
    date: CalendarDate,
    shadows: bool,
    palette: &FacePalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_module_outline(display, center, palette);

    // Sub-hands first; the text sits on top of their pivots
    if shadows {
        draw_hand_with_shadow(
            display,
            center,
            HANDS_MONTH,
            date.month_hand_angle(),
            palette.hand_battery,
            palette.hand_shadow,
            HANDS_CAL_SHADOW_PADDING,
        );
        draw_hand_with_shadow(
            display,
            center,
            HANDS_WEEKDAY,
            date.weekday_hand_angle(),
            palette.hand_second,
            palette.hand_shadow,
            HANDS_CAL_SHADOW_PADDING,
        );
    } else {
        draw_hand(display, center, HANDS_MONTH, date.month_hand_angle(), palette.hand_battery);
        draw_hand(
            display,
            center,
            HANDS_WEEKDAY,
            date.weekday_hand_angle(),
            palette.hand_second,
        );
    }

    let mut day_text: String<4> = String::new();
    push_u32(&mut day_text, u32::from(date.day));

    Text::with_alignment(
        &day_text,
        Point::new(center.x, center.y - 2),
        MonoTextStyle::new(&PROFONT_24_POINT, palette.text),
        Alignment::Center,
    )
    .draw(display)
    .ok();

    Text::with_alignment(
        date.weekday_abbreviation(),
        Point::new(center.x, center.y + 20),
        MonoTextStyle::new(&PROFONT_12_POINT, palette.text_dim),
        Alignment::Center,
    )
    .draw(display)
    .ok();
}

/// Heart-rate module: BPM reading with a caption.
pub fn draw_heartrate_module<D>(
    display: &mut D,
    center: Point,
    bpm: u16,
    palette: &FacePalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_module_outline(display, center, palette);

    let mut bpm_text: String<6> = String::new();
    push_u32(&mut bpm_text, u32::from(bpm));

    Text::with_alignment(
        &bpm_text,
        Point::new(center.x, center.y + 2),
        MonoTextStyle::new(&PROFONT_18_POINT, palette.text),
        Alignment::Center,
    )
    .draw(display)
    .ok();

    Text::with_alignment(
        "BPM",
        Point::new(center.x, center.y + 20),
        MonoTextStyle::new(&PROFONT_10_POINT, palette.text_dim),
        Alignment::Center,
    )
    .draw(display)
    .ok();
}

/// Step-counter module below the hub.
pub fn draw_steps_module<D>(
    display: &mut D,
    center: Point,
    steps: u32,
    palette: &FacePalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut steps_text: String<10> = String::new();
    push_u32(&mut steps_text, steps);

    Text::with_alignment(
        &steps_text,
        Point::new(center.x, center.y),
        MonoTextStyle::new(&PROFONT_14_POINT, palette.text),
        Alignment::Center,
    )
    .draw(display)
    .ok();

    Text::with_alignment(
        "STEPS",
        Point::new(center.x, center.y + 16),
        MonoTextStyle::new(&PROFONT_10_POINT, palette.text_dim),
        Alignment::Center,
    )
    .draw(display)
    .ok();
}

/// Moon-phase disc above the hub.
///
/// The phase fraction is bucketed into eight looks. The terminator is
/// faked by covering the lit disc with a shadow disc shifted sideways;
/// at this size the lune reads well enough as a crescent or gibbous
/// moon.
pub fn draw_moon_module<D>(
    display: &mut D,
    center: Point,
    phase_fraction: f32,
    palette: &FacePalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let index = moon_phase_index(phase_fraction);
    let radius = MOON_RADIUS as i32;

    Circle::with_center(center, MOON_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_fill(palette.moon_lit))
        .draw(display)
        .ok();

    // Shadow shift: 0 covers the disc (new moon), 2r clears it (full).
    // Waxing moons light up from the right, waning from the left.
    let shift = if index <= 4 {
        -(i32::from(index) * radius) / 2
    } else {
        (i32::from(8 - index) * radius) / 2
    };

    if index != 4 {
        Circle::with_center(Point::new(center.x + shift, center.y), MOON_RADIUS * 2)
            .into_styled(PrimitiveStyle::with_fill(palette.moon_dark))
            .draw(display)
            .ok();
    }

    Circle::with_center(center, MOON_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_stroke(palette.module_outline, 1))
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::palette;

    fn render_date(date: CalendarDate) -> MockDisplay<Rgb565> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        draw_date_module(&mut display, Point::new(32, 32), date, true, &palette::NORMAL);
        display
    }

    #[test]
    fn test_month_sub_hand_rotates_with_month() {
        // Same day and weekday, so only the month hand moves
        let march = render_date(CalendarDate::new(14, 3, 2026, 0));
        let may = render_date(CalendarDate::new(14, 5, 2026, 0));
        assert_ne!(march, may);
    }

    #[test]
    fn test_weekday_sub_hand_rotates_with_weekday() {
        let saturday = render_date(CalendarDate::new(14, 3, 2026, 0));
        let tuesday = render_date(CalendarDate::new(14, 3, 2026, 3));
        assert_ne!(saturday, tuesday);
    }
}
