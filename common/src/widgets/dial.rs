//! The static parts of the face: bezel, tick ring, center plate, and the
//! battery charge sub-dial.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};

use crate::angles::{BATTERY_START_ANGLE, BATTERY_STEP_ANGLE, MIN_ANGLE};
use crate::config::{
    BATTERY_DIAL_RADIUS,
    BEZEL_RADIUS,
    PLATE_RADIUS,
    TICK_MAJOR_LEN,
    TICK_MINOR_LEN,
    TICK_RING_RADIUS,
};
use crate::palette::FacePalette;
use crate::widgets::hands::radial_point;

/// Fill the face background and stroke the bezel.
pub fn draw_face_background<D>(
    display: &mut D,
    center: Point,
    palette: &FacePalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(palette.background).ok();

    Circle::with_center(center, BEZEL_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_stroke(palette.tick_major, 2))
        .draw(display)
        .ok();
}

/// Draw the 60-tick minute ring; every fifth tick is an hour mark.
pub fn draw_tick_ring<D>(
    display: &mut D,
    center: Point,
    palette: &FacePalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for tick in 0..60u8 {
        let angle = f32::from(tick) * MIN_ANGLE;
        let is_major = tick % 5 == 0;
        let (len, width, color) = if is_major {
            (TICK_MAJOR_LEN, 3, palette.tick_major)
        } else {
            (TICK_MINOR_LEN, 1, palette.tick_minor)
        };

        let outer = radial_point(center, angle, TICK_RING_RADIUS);
        let inner = radial_point(center, angle, TICK_RING_RADIUS - len);
        Line::new(inner, outer)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(display)
            .ok();
    }
}

/// Cover the hand hub with the center plate.
pub fn draw_center_plate<D>(
    display: &mut D,
    center: Point,
    palette: &FacePalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, PLATE_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_fill(palette.plate))
        .draw(display)
        .ok();
}

/// Draw the charge sub-dial scale: one mark per 25%, a longer one at the
/// empty and full ends. The battery hand itself is drawn by the caller.
pub fn draw_battery_scale<D>(
    display: &mut D,
    center: Point,
    palette: &FacePalette,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for step in 0..=4u8 {
        let angle = BATTERY_START_ANGLE + f32::from(step) * 25.0 * BATTERY_STEP_ANGLE;
        let len = if step == 0 || step == 4 { 8 } else { 5 };

        let outer = radial_point(center, angle, BATTERY_DIAL_RADIUS);
        let inner = radial_point(center, angle, BATTERY_DIAL_RADIUS - len);
        Line::new(inner, outer)
            .into_styled(PrimitiveStyle::with_stroke(palette.text_dim, 1))
            .draw(display)
            .ok();
    }
}
