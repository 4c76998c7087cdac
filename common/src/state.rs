//! Per-face display state.
//!
//! [`FaceState`] is the one mutable record the tick handlers share. It is
//! passed by reference into the handlers instead of living in globals, and
//! it owns every piece of cross-tick memory the face needs: the display
//! mode, the last battery classification, the smooth-tick latch, and the
//! change-detection caches that keep text modules from being rewritten on
//! every tick.

use crate::battery::is_low_battery;

/// Display variant the face is currently rendering.
///
/// Ambient is the low-power mode: ticks arrive once per minute, the
/// second and battery hands disappear, and the palette drops to the dim
/// asset set.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DisplayMode {
    /// Full detail, once-per-second ticks.
    #[default]
    Normal,
    /// Reduced detail, once-per-minute ticks.
    Ambient,
}

impl DisplayMode {
    #[inline]
    pub const fn is_ambient(self) -> bool { matches!(self, Self::Ambient) }
}

/// Battery threshold crossing, reported once per transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BatteryEdge {
    /// Charge dropped to the low-battery level or below.
    Entered,
    /// Charge recovered above the low-battery level.
    Cleared,
}

/// Mutable state shared by the tick handlers.
#[derive(Debug, Default)]
pub struct FaceState {
    mode: DisplayMode,
    low_battery: bool,
    smooth_tick: bool,
    cur_day: Option<u8>,
    cur_minute: Option<u8>,
    cur_heartrate: Option<u16>,
    cur_steps: Option<u32>,
}

impl FaceState {
    pub fn new() -> Self { Self::default() }

    #[inline]
    pub const fn mode(&self) -> DisplayMode { self.mode }

    #[inline]
    pub const fn low_battery(&self) -> bool { self.low_battery }

    #[inline]
    pub const fn smooth_tick(&self) -> bool { self.smooth_tick }

    /// Switch display mode. Returns true when the mode actually changed.
    ///
    /// Entering ambient stops the smooth sweep; leaving it only clears the
    /// latch so the next normal tick restarts the sweep.
    pub fn set_mode(
        &mut self,
        mode: DisplayMode,
    ) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.smooth_tick = false;
        true
    }

    /// Classify a battery reading against the low-battery threshold.
    ///
    /// Returns an edge only when the classification flips; steady-state
    /// readings on either side return `None`, which is what lets callers
    /// swap asset sets exactly once per crossing.
    pub fn classify_battery(
        &mut self,
        percent: u8,
    ) -> Option<BatteryEdge> {
        let low = is_low_battery(percent);
        if low == self.low_battery {
            return None;
        }
        self.low_battery = low;
        Some(if low { BatteryEdge::Entered } else { BatteryEdge::Cleared })
    }

    /// Latch the smooth second sweep. Returns true when the caller should
    /// start the sweep animation; subsequent ticks return false until the
    /// latch is cleared by a pause or a mode change.
    pub fn start_smooth_tick(&mut self) -> bool {
        if self.mode.is_ambient() || self.smooth_tick {
            return false;
        }
        self.smooth_tick = true;
        true
    }

    /// Clear the smooth-tick latch (app paused or resumed).
    pub fn stop_smooth_tick(&mut self) { self.smooth_tick = false; }

    /// True when the minute differs from the cached one. Updates the
    /// cache, so the hour hand only rotates once per minute.
    pub fn observe_minute(
        &mut self,
        minute: u8,
    ) -> bool {
        if self.cur_minute == Some(minute) {
            return false;
        }
        self.cur_minute = Some(minute);
        true
    }

    /// True when the day of month differs from the cached one.
    pub fn observe_day(
        &mut self,
        day: u8,
    ) -> bool {
        if self.cur_day == Some(day) {
            return false;
        }
        self.cur_day = Some(day);
        true
    }

    /// True when the heart rate differs from the cached one.
    pub fn observe_heartrate(
        &mut self,
        bpm: u16,
    ) -> bool {
        if self.cur_heartrate == Some(bpm) {
            return false;
        }
        self.cur_heartrate = Some(bpm);
        true
    }

    /// True when the step count differs from the cached one.
    pub fn observe_steps(
        &mut self,
        steps: u32,
    ) -> bool {
        if self.cur_steps == Some(steps) {
            return false;
        }
        self.cur_steps = Some(steps);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_normal() {
        let state = FaceState::new();
        assert_eq!(state.mode(), DisplayMode::Normal);
        assert!(!state.low_battery());
    }

    #[test]
    fn test_set_mode_reports_changes_only() {
        let mut state = FaceState::new();
        assert!(state.set_mode(DisplayMode::Ambient));
        assert!(!state.set_mode(DisplayMode::Ambient));
        assert!(state.set_mode(DisplayMode::Normal));
    }

    #[test]
    fn test_entering_ambient_stops_smooth_tick() {
        let mut state = FaceState::new();
        assert!(state.start_smooth_tick());
        state.set_mode(DisplayMode::Ambient);
        assert!(!state.smooth_tick());
        // No sweep while ambient
        assert!(!state.start_smooth_tick());
    }

    #[test]
    fn test_smooth_tick_latches() {
        let mut state = FaceState::new();
        assert!(state.start_smooth_tick());
        assert!(!state.start_smooth_tick());
        state.stop_smooth_tick();
        assert!(state.start_smooth_tick());
    }

    #[test]
    fn test_battery_edge_fires_once_per_crossing() {
        let mut state = FaceState::new();

        assert_eq!(state.classify_battery(80), None);
        assert_eq!(state.classify_battery(25), Some(BatteryEdge::Entered));
        // Still low: no repeat
        assert_eq!(state.classify_battery(10), None);
        assert_eq!(state.classify_battery(26), Some(BatteryEdge::Cleared));
        assert_eq!(state.classify_battery(90), None);
    }

    #[test]
    fn test_battery_edge_survives_mode_changes() {
        let mut state = FaceState::new();
        state.classify_battery(10);
        assert!(state.low_battery());
        state.set_mode(DisplayMode::Ambient);
        assert!(state.low_battery());
    }

    #[test]
    fn test_observe_minute_detects_change() {
        let mut state = FaceState::new();
        // First observation always counts, including minute zero
        assert!(state.observe_minute(0));
        assert!(!state.observe_minute(0));
        assert!(state.observe_minute(1));
    }

    #[test]
    fn test_observe_day_detects_change() {
        let mut state = FaceState::new();
        assert!(state.observe_day(14));
        assert!(!state.observe_day(14));
        assert!(state.observe_day(15));
    }

    #[test]
    fn test_observe_sensor_caches() {
        let mut state = FaceState::new();
        assert!(state.observe_heartrate(70));
        assert!(!state.observe_heartrate(70));
        assert!(state.observe_steps(420));
        assert!(!state.observe_steps(420));
        assert!(state.observe_steps(421));
    }
}
