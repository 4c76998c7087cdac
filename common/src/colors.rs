//! Rgb565 color constants for the watch face.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black. Ambient background and dark text.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Hands and primary text in the normal look.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red. Second hand and low-battery accents.
pub const RED: Rgb565 = Rgb565::RED;

/// Deep navy face background for the normal look.
/// RGB565: (2, 6, 10) - dark enough for the hands to pop.
pub const NAVY: Rgb565 = Rgb565::new(2, 6, 10);

/// Warm off-white for the dial plate and module faces.
/// RGB565: (29, 58, 25).
pub const IVORY: Rgb565 = Rgb565::new(29, 58, 25);

/// Mid gray for tick marks and module outlines.
/// RGB565: (14, 28, 14).
pub const GRAY: Rgb565 = Rgb565::new(14, 28, 14);

/// Dark gray for hand shadows and ambient detail.
/// RGB565: (6, 12, 6).
pub const DARK_GRAY: Rgb565 = Rgb565::new(6, 12, 6);

/// Dimmed red for the low-battery ambient look.
/// RGB565: (16, 0, 0).
pub const DIM_RED: Rgb565 = Rgb565::new(16, 0, 0);

/// Moonlight tint for the lit part of the moon disc.
/// RGB565: (27, 56, 22).
pub const MOONLIGHT: Rgb565 = Rgb565::new(27, 56, 22);

/// Shadowed part of the moon disc.
/// RGB565: (4, 8, 6).
pub const MOON_SHADOW: Rgb565 = Rgb565::new(4, 8, 6);
