//! Debug overlay: recent face events and the simulated battery level,
//! drawn over the lower-left quadrant when toggled on.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::Text;
use heapless::String;
use profont::PROFONT_10_POINT;
use watchface_common::colors::{BLACK, GRAY, WHITE};
use watchface_common::config::BASE_HEIGHT;
use watchface_common::eventlog::{EVENT_LOG_LINES, EventLog, push_u32};

const OVERLAY_WIDTH: u32 = 170;
const LINE_HEIGHT: i32 = 13;
const PADDING: i32 = 6;

/// Draw the event log and battery readout.
pub fn draw_debug_overlay<D>(
    display: &mut D,
    log: &EventLog,
    battery_percent: u8,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let line_count = log.len() as i32 + 1;
    let height = (line_count * LINE_HEIGHT + 2 * PADDING) as u32;
    let top_left = Point::new(8, BASE_HEIGHT as i32 - height as i32 - 8);

    let style = PrimitiveStyleBuilder::new()
        .fill_color(BLACK)
        .stroke_color(GRAY)
        .stroke_width(1)
        .build();
    Rectangle::new(top_left, Size::new(OVERLAY_WIDTH, height))
        .into_styled(style)
        .draw(display)
        .ok();

    let text_style = MonoTextStyle::new(&PROFONT_10_POINT, WHITE);
    let dim_style = MonoTextStyle::new(&PROFONT_10_POINT, GRAY);
    let mut y = top_left.y + PADDING + 9;

    let mut battery_line: String<20> = String::new();
    battery_line.push_str("BAT ").ok();
    push_u32(&mut battery_line, u32::from(battery_percent));
    battery_line.push('%').ok();
    Text::new(&battery_line, Point::new(top_left.x + PADDING, y), text_style)
        .draw(display)
        .ok();
    y += LINE_HEIGHT;

    for line in log.iter().take(EVENT_LOG_LINES) {
        Text::new(line, Point::new(top_left.x + PADDING, y), dim_style)
            .draw(display)
            .ok();
        y += LINE_HEIGHT;
    }
}
