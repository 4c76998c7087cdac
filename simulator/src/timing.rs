//! Timing constants for the simulator.
//!
//! These constants use `std::time::Duration` which is not available in
//! `no_std` environments, so they live here rather than in the common
//! crate.

use std::time::Duration;

/// Target frame time (~30 FPS). The main loop sleeps if a frame
/// completes early; the face itself only redraws when a tick is due.
pub const FRAME_TIME: Duration = Duration::from_millis(33);

/// Duration that toggle-confirmation popups remain visible.
pub const POPUP_DURATION: Duration = Duration::from_secs(2);

/// Interval between simulated battery drain steps.
pub const DRAIN_INTERVAL: Duration = Duration::from_secs(2);
