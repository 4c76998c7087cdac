//! Toggle-confirmation popups with time-based expiration.
//!
//! Each variant holds the `Instant` it was triggered, making expiration
//! checks straightforward.

use std::time::Instant;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Alignment, Text};
use profont::PROFONT_14_POINT;
use watchface_common::colors::{BLACK, GRAY, RED, WHITE};
use watchface_common::config::{BASE_HEIGHT, BASE_WIDTH};

use crate::timing::POPUP_DURATION;

const POPUP_WIDTH: u32 = 180;
const POPUP_HEIGHT: u32 = 44;

/// Active popup with its start time.
#[derive(Clone, Copy, Debug)]
pub enum Popup {
    /// Ambient mode toggled; true = entered ambient.
    Ambient(Instant, bool),
    /// Smooth second sweep toggled; true = sweep on.
    Sweep(Instant, bool),
    /// Battery crossed the low threshold; true = now low.
    Battery(Instant, bool),
}

impl Popup {
    /// Get the start time of this popup.
    #[inline]
    pub const fn start_time(&self) -> Instant {
        match self {
            Self::Ambient(t, _) | Self::Sweep(t, _) | Self::Battery(t, _) => *t,
        }
    }

    /// Check if this popup has expired.
    #[inline]
    pub fn is_expired(&self) -> bool { self.start_time().elapsed() >= POPUP_DURATION }

    const fn label(&self) -> &'static str {
        match self {
            Self::Ambient(_, true) => "AMBIENT ON",
            Self::Ambient(_, false) => "AMBIENT OFF",
            Self::Sweep(_, true) => "SWEEP ON",
            Self::Sweep(_, false) => "SWEEP OFF",
            Self::Battery(_, true) => "LOW BATTERY",
            Self::Battery(_, false) => "BATTERY OK",
        }
    }

    /// Draw the popup box near the bottom of the face.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let top_left = Point::new(
            (BASE_WIDTH as i32 - POPUP_WIDTH as i32) / 2,
            BASE_HEIGHT as i32 - POPUP_HEIGHT as i32 - 16,
        );

        let border = if matches!(self, Self::Battery(_, true)) { RED } else { GRAY };
        let style = PrimitiveStyleBuilder::new()
            .fill_color(BLACK)
            .stroke_color(border)
            .stroke_width(1)
            .build();

        Rectangle::new(top_left, Size::new(POPUP_WIDTH, POPUP_HEIGHT))
            .into_styled(style)
            .draw(display)
            .ok();

        Text::with_alignment(
            self.label(),
            Point::new(BASE_WIDTH as i32 / 2, top_left.y + POPUP_HEIGHT as i32 / 2 + 5),
            MonoTextStyle::new(&PROFONT_14_POINT, WHITE),
            Alignment::Center,
        )
        .draw(display)
        .ok();
    }
}

/// Dismiss an expired popup. Returns true when one was dismissed, so the
/// caller knows the face underneath needs a redraw.
pub fn expire(popup: &mut Option<Popup>) -> bool {
    if let Some(p) = popup
        && p.is_expired()
    {
        *popup = None;
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_labels() {
        let now = Instant::now();
        assert_eq!(Popup::Ambient(now, true).label(), "AMBIENT ON");
        assert_eq!(Popup::Battery(now, false).label(), "BATTERY OK");
    }

    #[test]
    fn test_fresh_popup_not_expired() {
        let popup = Popup::Sweep(Instant::now(), true);
        assert!(!popup.is_expired());
    }
}
