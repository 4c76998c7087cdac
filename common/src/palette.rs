//! Look selection for the face's display variants.
//!
//! One [`FacePalette`] per variant, chosen by `(DisplayMode, low_battery)`
//! in a single place instead of boolean checks scattered through the
//! render path. [`FaceVisibility`] does the same for element visibility.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, DARK_GRAY, DIM_RED, GRAY, IVORY, MOONLIGHT, MOON_SHADOW, NAVY, RED, WHITE};
use crate::state::DisplayMode;

/// Color set for one display variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FacePalette {
    pub background: Rgb565,
    pub plate: Rgb565,
    pub tick_major: Rgb565,
    pub tick_minor: Rgb565,
    pub hand_hour: Rgb565,
    pub hand_minute: Rgb565,
    pub hand_second: Rgb565,
    pub hand_battery: Rgb565,
    pub hand_shadow: Rgb565,
    pub text: Rgb565,
    pub text_dim: Rgb565,
    pub module_outline: Rgb565,
    pub moon_lit: Rgb565,
    pub moon_dark: Rgb565,
}

/// Full-detail look.
pub const NORMAL: FacePalette = FacePalette {
    background: NAVY,
    plate: IVORY,
    tick_major: IVORY,
    tick_minor: GRAY,
    hand_hour: WHITE,
    hand_minute: WHITE,
    hand_second: RED,
    hand_battery: IVORY,
    hand_shadow: DARK_GRAY,
    text: WHITE,
    text_dim: GRAY,
    module_outline: GRAY,
    moon_lit: MOONLIGHT,
    moon_dark: MOON_SHADOW,
};

/// Low-power look: black background, gray hands, no accents.
pub const AMBIENT: FacePalette = FacePalette {
    background: BLACK,
    plate: DARK_GRAY,
    tick_major: GRAY,
    tick_minor: DARK_GRAY,
    hand_hour: GRAY,
    hand_minute: GRAY,
    hand_second: DARK_GRAY,
    hand_battery: DARK_GRAY,
    hand_shadow: BLACK,
    text: GRAY,
    text_dim: DARK_GRAY,
    module_outline: DARK_GRAY,
    moon_lit: GRAY,
    moon_dark: BLACK,
};

/// Low-power look while the battery is low: hands go dim red as the
/// last-resort warning the sleeping face can give.
pub const AMBIENT_LOW_BATTERY: FacePalette = FacePalette {
    background: BLACK,
    plate: DARK_GRAY,
    tick_major: DIM_RED,
    tick_minor: DARK_GRAY,
    hand_hour: DIM_RED,
    hand_minute: DIM_RED,
    hand_second: DARK_GRAY,
    hand_battery: DARK_GRAY,
    hand_shadow: BLACK,
    text: DIM_RED,
    text_dim: DARK_GRAY,
    module_outline: DARK_GRAY,
    moon_lit: DIM_RED,
    moon_dark: BLACK,
};

impl FacePalette {
    /// Pick the palette for the current display variant.
    ///
    /// The normal look does not change with the battery level; the battery
    /// hand itself is the indicator there.
    pub const fn select(
        mode: DisplayMode,
        low_battery: bool,
    ) -> &'static FacePalette {
        match (mode, low_battery) {
            (DisplayMode::Normal, _) => &NORMAL,
            (DisplayMode::Ambient, false) => &AMBIENT,
            (DisplayMode::Ambient, true) => &AMBIENT_LOW_BATTERY,
        }
    }
}

/// Which face elements draw in the current display variant.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceVisibility {
    pub second_hand: bool,
    pub battery_hand: bool,
    pub hand_shadows: bool,
    pub plate: bool,
    /// Date and heart-rate modules.
    pub side_modules: bool,
    pub steps_module: bool,
    pub moon_module: bool,
}

impl FaceVisibility {
    /// Visibility set for the current display variant.
    ///
    /// Ambient drops the second and battery hands, shadows, the plate and
    /// the step counter; a low battery additionally blanks the side
    /// modules so only the time remains.
    pub const fn select(
        mode: DisplayMode,
        low_battery: bool,
    ) -> FaceVisibility {
        match mode {
            DisplayMode::Normal => FaceVisibility {
                second_hand: true,
                battery_hand: true,
                hand_shadows: true,
                plate: true,
                side_modules: true,
                steps_module: true,
                moon_module: true,
            },
            DisplayMode::Ambient => FaceVisibility {
                second_hand: false,
                battery_hand: false,
                hand_shadows: false,
                plate: false,
                side_modules: !low_battery,
                steps_module: false,
                moon_module: !low_battery,
            },
        }
    }
}
