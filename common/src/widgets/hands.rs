//! Watch hand rendering.
//!
//! A hand is a stroked line through a pivot: `length` pixels toward the
//! angle, `tail` pixels past the pivot as a counterweight. Angles follow
//! the face convention, degrees clockwise from 12 o'clock. Shadows redraw
//! the same hand about a pivot nudged down a few pixels, faking depth
//! without alpha blending.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use micromath::F32Ext;

/// Fixed dimensions of one hand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct HandGeometry {
    /// Pivot-to-tip distance in pixels.
    pub length: i32,
    /// Pivot-to-counterweight distance in pixels.
    pub tail: i32,
    /// Stroke width in pixels.
    pub width: u32,
}

/// Point at `radius` pixels from `pivot` along a face angle.
pub fn radial_point(
    pivot: Point,
    angle_deg: f32,
    radius: i32,
) -> Point {
    let rad = angle_deg.to_radians();
    let x = pivot.x + (radius as f32 * rad.sin()).round() as i32;
    let y = pivot.y - (radius as f32 * rad.cos()).round() as i32;
    Point::new(x, y)
}

/// Draw one hand rotated about `pivot`.
pub fn draw_hand<D>(
    display: &mut D,
    pivot: Point,
    geometry: HandGeometry,
    angle_deg: f32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let tip = radial_point(pivot, angle_deg, geometry.length);
    let tail = radial_point(pivot, angle_deg + 180.0, geometry.tail);

    Line::new(tail, tip)
        .into_styled(PrimitiveStyle::with_stroke(color, geometry.width))
        .draw(display)
        .ok();
}

/// Draw a hand with its drop shadow.
///
/// The shadow pass comes first so the hand covers it, pivoting
/// `shadow_padding` pixels below the real pivot.
pub fn draw_hand_with_shadow<D>(
    display: &mut D,
    pivot: Point,
    geometry: HandGeometry,
    angle_deg: f32,
    color: Rgb565,
    shadow_color: Rgb565,
    shadow_padding: i32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let shadow_pivot = Point::new(pivot.x, pivot.y + shadow_padding);
    draw_hand(display, shadow_pivot, geometry, angle_deg, shadow_color);
    draw_hand(display, pivot, geometry, angle_deg, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(
        a: Point,
        b: Point,
    ) -> bool {
        (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1
    }

    #[test]
    fn test_radial_point_cardinal_directions() {
        let pivot = Point::new(180, 180);
        assert!(close(radial_point(pivot, 0.0, 100), Point::new(180, 80)));
        assert!(close(radial_point(pivot, 90.0, 100), Point::new(280, 180)));
        assert!(close(radial_point(pivot, 180.0, 100), Point::new(180, 280)));
        assert!(close(radial_point(pivot, 270.0, 100), Point::new(80, 180)));
    }

    #[test]
    fn test_radial_point_zero_radius_is_pivot() {
        let pivot = Point::new(180, 180);
        assert_eq!(radial_point(pivot, 123.0, 0), pivot);
    }

    #[test]
    fn test_tail_opposes_tip() {
        let pivot = Point::new(180, 180);
        let tip = radial_point(pivot, 45.0, 100);
        let tail = radial_point(pivot, 225.0, 100);
        // Mirror through the pivot
        assert!(close(Point::new(2 * pivot.x - tip.x, 2 * pivot.y - tip.y), tail));
    }
}
