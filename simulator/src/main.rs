//! Desktop simulator for the analog watch face.
//!
//! Drives the face from the host wall clock via `chrono` and simulates
//! the device inputs the face would get from a watch host: battery
//! level, heart rate, step count, and the ambient-mode transition.
//!
//! Keys: `A` toggles ambient mode, `S` the smooth second sweep, `D` the
//! debug overlay, `B` battery drain, `Up`/`Down` nudge the battery level.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod overlay;
mod popup;
mod timing;

use std::thread;
use std::time::Instant;

use chrono::{DateTime, Datelike, Local, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use watchface_common::angles::battery_angle;
use watchface_common::config::{
    BASE_HEIGHT,
    BASE_WIDTH,
    CENTER,
    HANDS_BAT,
    HANDS_BAT_SHADOW_PADDING,
    HANDS_HOUR,
    HANDS_HOUR_SHADOW_PADDING,
    HANDS_MIN,
    HANDS_MIN_SHADOW_PADDING,
    HANDS_SEC,
    HANDS_SEC_SHADOW_PADDING,
    MODULE_DATE_CENTER,
    MODULE_HEARTRATE_CENTER,
    MODULE_MOON_CENTER,
    MODULE_STEPS_CENTER,
};
use watchface_common::eventlog::EventLog;
use watchface_common::widgets::hands::HandGeometry;
use watchface_common::widgets::{
    draw_battery_scale,
    draw_center_plate,
    draw_date_module,
    draw_face_background,
    draw_hand,
    draw_hand_with_shadow,
    draw_heartrate_module,
    draw_moon_module,
    draw_steps_module,
    draw_tick_ring,
};
use watchface_common::{BatteryEdge, CalendarDate, ClockTime, DisplayMode, FacePalette, FaceState, FaceVisibility};

use crate::overlay::draw_debug_overlay;
use crate::popup::Popup;
use crate::timing::{DRAIN_INTERVAL, FRAME_TIME};

/// Geometry and shadow padding for every hand, as named fields so a
/// missing hand is a compile error instead of a runtime lookup miss.
struct Hands {
    hour: (HandGeometry, i32),
    minute: (HandGeometry, i32),
    second: (HandGeometry, i32),
    battery: (HandGeometry, i32),
}

const HANDS: Hands = Hands {
    hour: (HANDS_HOUR, HANDS_HOUR_SHADOW_PADDING),
    minute: (HANDS_MIN, HANDS_MIN_SHADOW_PADDING),
    second: (HANDS_SEC, HANDS_SEC_SHADOW_PADDING),
    battery: (HANDS_BAT, HANDS_BAT_SHADOW_PADDING),
};

/// Map chrono's weekday onto the face's day-of-week table, which starts
/// at Saturday (index 0).
fn host_weekday_index(now: &DateTime<Local>) -> u8 { (now.weekday().num_days_from_sunday() as u8 + 1) % 7 }

fn sample_inputs(now: &DateTime<Local>) -> (ClockTime, CalendarDate) {
    let time = ClockTime::new(now.hour() as u8, now.minute() as u8, now.second() as u8);
    let date = CalendarDate::new(
        now.day() as u8,
        now.month() as u8,
        now.year(),
        host_weekday_index(now),
    );
    (time, date)
}

#[allow(clippy::too_many_arguments)]
fn render_face(
    display: &mut SimulatorDisplay<Rgb565>,
    face: &FaceState,
    time: ClockTime,
    date: CalendarDate,
    battery_percent: u8,
    heartrate: u16,
    steps: u32,
    second_fraction: Option<f32>,
) {
    let palette = FacePalette::select(face.mode(), face.low_battery());
    let visibility = FaceVisibility::select(face.mode(), face.low_battery());

    draw_face_background(display, CENTER, palette);
    draw_tick_ring(display, CENTER, palette);

    if visibility.battery_hand {
        draw_battery_scale(display, CENTER, palette);
    }

    if visibility.moon_module {
        draw_moon_module(display, MODULE_MOON_CENTER, date.moon_phase_fraction(), palette);
    }
    if visibility.side_modules {
        draw_date_module(display, MODULE_DATE_CENTER, date, visibility.hand_shadows, palette);
        draw_heartrate_module(display, MODULE_HEARTRATE_CENTER, heartrate, palette);
    }
    if visibility.steps_module {
        draw_steps_module(display, MODULE_STEPS_CENTER, steps, palette);
    }

    if visibility.battery_hand {
        let (geometry, shadow) = HANDS.battery;
        draw_hand_with_shadow(
            display,
            CENTER,
            geometry,
            battery_angle(battery_percent),
            palette.hand_battery,
            palette.hand_shadow,
            shadow,
        );
    }

    let (hour_geometry, hour_shadow) = HANDS.hour;
    let (minute_geometry, minute_shadow) = HANDS.minute;
    if visibility.hand_shadows {
        draw_hand_with_shadow(
            display,
            CENTER,
            hour_geometry,
            time.hour_hand_angle(),
            palette.hand_hour,
            palette.hand_shadow,
            hour_shadow,
        );
        draw_hand_with_shadow(
            display,
            CENTER,
            minute_geometry,
            time.minute_hand_angle(),
            palette.hand_minute,
            palette.hand_shadow,
            minute_shadow,
        );
    } else {
        draw_hand(display, CENTER, hour_geometry, time.hour_hand_angle(), palette.hand_hour);
        draw_hand(
            display,
            CENTER,
            minute_geometry,
            time.minute_hand_angle(),
            palette.hand_minute,
        );
    }

    if visibility.second_hand {
        // A smooth sweep adds the sub-second fraction to the tick angle
        let angle = time.second_hand_angle() + second_fraction.unwrap_or(0.0) * 6.0;
        let (geometry, shadow) = HANDS.second;
        draw_hand_with_shadow(
            display,
            CENTER,
            geometry,
            angle,
            palette.hand_second,
            palette.hand_shadow,
            shadow,
        );
    }

    if visibility.plate {
        draw_center_plate(display, CENTER, palette);
    }
}

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(BASE_WIDTH, BASE_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Watch Face Sim", &output_settings);

    let mut face = FaceState::new();
    let mut log = EventLog::new();
    log.push("Face started");

    // Simulated device inputs
    let mut battery_percent: u8 = 78;
    let mut drain_battery = false;
    let mut last_drain = Instant::now();
    let mut heartrate: u16 = 70;
    let mut steps: u32 = 0;

    // Host-side toggles
    let mut sweep_enabled = false;
    let mut show_overlay = false;
    let mut active_popup: Option<Popup> = None;

    // Redraw bookkeeping
    let mut last_second: Option<u8> = None;
    let mut last_minute: Option<u8> = None;
    let mut dirty = true;

    // The window needs one update before it can report events
    window.update(&display);

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::A => {
                            let mode = if face.mode().is_ambient() {
                                DisplayMode::Normal
                            } else {
                                DisplayMode::Ambient
                            };
                            if face.set_mode(mode) {
                                log.push(if mode.is_ambient() { "Ambient: ON" } else { "Ambient: OFF" });
                                active_popup = Some(Popup::Ambient(Instant::now(), mode.is_ambient()));
                                last_minute = None;
                                dirty = true;
                            }
                        }
                        Keycode::S => {
                            sweep_enabled = !sweep_enabled;
                            if !sweep_enabled {
                                face.stop_smooth_tick();
                            }
                            log.push(if sweep_enabled { "Sweep: ON" } else { "Sweep: OFF" });
                            active_popup = Some(Popup::Sweep(Instant::now(), sweep_enabled));
                            dirty = true;
                        }
                        Keycode::D => {
                            show_overlay = !show_overlay;
                            dirty = true;
                        }
                        Keycode::B => {
                            drain_battery = !drain_battery;
                            log.push(if drain_battery { "Drain: ON" } else { "Drain: OFF" });
                            dirty = true;
                        }
                        Keycode::Up => {
                            battery_percent = (battery_percent + 5).min(100);
                            dirty = true;
                        }
                        Keycode::Down => {
                            battery_percent = battery_percent.saturating_sub(5);
                            dirty = true;
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        if popup::expire(&mut active_popup) {
            dirty = true;
        }

        // Simulated battery drain
        if drain_battery && last_drain.elapsed() >= DRAIN_INTERVAL {
            last_drain = Instant::now();
            battery_percent = battery_percent.saturating_sub(1);
            dirty = true;
        }

        if let Some(edge) = face.classify_battery(battery_percent) {
            let low = matches!(edge, BatteryEdge::Entered);
            log.push(if low { "Low battery" } else { "Battery recovered" });
            active_popup = Some(Popup::Battery(Instant::now(), low));
            dirty = true;
        }

        let now = Local::now();
        let (time, date) = sample_inputs(&now);

        // Simulated sensors only advance while the face is awake
        if !face.mode().is_ambient() && last_second != Some(time.second) {
            heartrate = 62 + (u16::from(time.second) * 7) % 28;
            steps = steps.saturating_add(1 + u32::from(time.second % 3));
        }

        let due = match face.mode() {
            DisplayMode::Normal => dirty || sweep_enabled || last_second != Some(time.second),
            DisplayMode::Ambient => dirty || last_minute != Some(time.minute),
        };

        if due {
            if face.observe_day(date.day) {
                log.push_with_value("Day", u32::from(date.day));
            }
            face.observe_minute(time.minute);

            if sweep_enabled && face.start_smooth_tick() {
                log.push("Sweep started");
            }

            let second_fraction = if sweep_enabled && face.smooth_tick() {
                Some(now.timestamp_subsec_millis() as f32 / 1000.0)
            } else {
                None
            };

            render_face(
                &mut display,
                &face,
                time,
                date,
                battery_percent,
                heartrate,
                steps,
                second_fraction,
            );

            if let Some(popup) = active_popup {
                popup.draw(&mut display);
            }
            if show_overlay {
                draw_debug_overlay(&mut display, &log, battery_percent);
            }

            last_second = Some(time.second);
            last_minute = Some(time.minute);
            dirty = false;
        }

        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
