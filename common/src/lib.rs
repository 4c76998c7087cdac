//! Platform-agnostic core for the analog watch face.
//!
//! Everything the face computes lives here, testable on the host:
//!
//! - [`angles`]: time-of-day to hand rotation math
//! - [`calendar`]: weekday labels, Julian day numbers, moon phase
//! - [`battery`]: low-battery classification
//! - [`datetime`]: per-tick value types ([`ClockTime`], [`CalendarDate`])
//! - [`state`]: display mode and the cross-tick [`FaceState`] record
//! - [`palette`]: look and visibility selection per display variant
//! - [`config`] / [`colors`]: layout and color constants
//! - [`eventlog`]: heapless ring buffer for face transitions
//! - [`widgets`]: embedded-graphics rendering of hands, dial, modules
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` and avoids platform time types entirely; the
//! host supplies a [`ClockTime`] and [`CalendarDate`] on every tick.

#![no_std]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod angles;
pub mod battery;
pub mod calendar;
pub mod colors;
pub mod config;
pub mod datetime;
pub mod eventlog;
pub mod palette;
pub mod state;
pub mod widgets;

// Re-export the per-tick types and state record
pub use datetime::{CalendarDate, ClockTime};
pub use palette::{FacePalette, FaceVisibility};
pub use state::{BatteryEdge, DisplayMode, FaceState};
