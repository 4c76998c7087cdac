//! Event log for face transitions.
//!
//! A small heapless ring buffer the tick handlers push one-liners into
//! (mode changes, battery crossings, day rollover). The host decides what
//! to do with it; the simulator renders it on the debug overlay.

use heapless::{Deque, String};

/// Maximum number of retained log lines.
pub const EVENT_LOG_LINES: usize = 8;

/// Maximum characters per line; longer messages are truncated.
pub const EVENT_LINE_LENGTH: usize = 40;

/// Ring buffer of recent face events, oldest first.
pub struct EventLog {
    lines: Deque<String<EVENT_LINE_LENGTH>, EVENT_LOG_LINES>,
}

impl EventLog {
    pub const fn new() -> Self { Self { lines: Deque::new() } }

    /// Append a message, dropping the oldest line when full.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }

        let mut line: String<EVENT_LINE_LENGTH> = String::new();
        for ch in msg.chars().take(EVENT_LINE_LENGTH - 1) {
            line.push(ch).ok();
        }

        self.lines.push_back(line).ok();
    }

    /// Append a `message: value` line without formatting machinery.
    pub fn push_with_value(
        &mut self,
        msg: &str,
        value: u32,
    ) {
        let mut line: String<EVENT_LINE_LENGTH> = String::new();
        for ch in msg.chars().take(EVENT_LINE_LENGTH - 12) {
            line.push(ch).ok();
        }
        line.push_str(": ").ok();
        push_u32(&mut line, value);

        if self.lines.is_full() {
            self.lines.pop_front();
        }
        self.lines.push_back(line).ok();
    }

    /// Iterate over retained lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.lines.iter().map(|line| line.as_str()) }

    #[inline]
    pub fn len(&self) -> usize { self.lines.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    /// Drop all retained lines.
    pub fn clear(&mut self) { self.lines.clear(); }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

/// Append a decimal number to a heapless string.
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut value: u32,
) {
    if value == 0 {
        s.push('0').ok();
        return;
    }

    let mut digits = [0u8; 10];
    let mut count = 0;
    while value > 0 {
        digits[count] = (value % 10) as u8;
        value /= 10;
        count += 1;
    }

    while count > 0 {
        count -= 1;
        s.push((b'0' + digits[count]) as char).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iterate() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push("Ambient: ON");
        log.push("Low battery");
        assert_eq!(log.len(), 2);

        let mut it = log.iter();
        assert_eq!(it.next(), Some("Ambient: ON"));
        assert_eq!(it.next(), Some("Low battery"));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_oldest_line_dropped_when_full() {
        let mut log = EventLog::new();
        for n in 0..=EVENT_LOG_LINES as u32 {
            log.push_with_value("tick", n);
        }
        assert_eq!(log.len(), EVENT_LOG_LINES);
        assert_eq!(log.iter().next(), Some("tick: 1"));
    }

    #[test]
    fn test_long_lines_truncate() {
        let mut log = EventLog::new();
        log.push("this message is far far far too long to fit into one retained line");
        assert!(log.iter().next().unwrap().len() < EVENT_LINE_LENGTH);
    }

    #[test]
    fn test_push_with_value() {
        let mut log = EventLog::new();
        log.push_with_value("Battery", 25);
        assert_eq!(log.iter().next(), Some("Battery: 25"));
    }

    #[test]
    fn test_clear() {
        let mut log = EventLog::new();
        log.push("x");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_push_u32() {
        let mut s: String<16> = String::new();
        push_u32(&mut s, 0);
        assert_eq!(s.as_str(), "0");

        let mut s: String<16> = String::new();
        push_u32(&mut s, 2_451_545);
        assert_eq!(s.as_str(), "2451545");
    }
}
