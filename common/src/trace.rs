//! Ring buffer of recent input events.
//!
//! The real board has no serial console attached in normal use, so the
//! firmware keeps the last few classified gestures and menu transitions in a
//! small heapless buffer that a diagnostic screen can render. Old lines are
//! dropped as new ones arrive.
//!
//! # Usage
//!
//! ```ignore
//! let mut trace = TraceLog::new();
//! trace.push("click @ 12,40");
//! trace.push("page 1");
//!
//! for line in trace.iter() {
//!     println!("{line}");
//! }
//! ```

use heapless::{Deque, String};

/// Maximum number of lines kept.
pub const TRACE_CAPACITY: usize = 8;

/// Maximum characters per line; longer messages are truncated.
pub const TRACE_LINE_LENGTH: usize = 40;

/// Ring buffer of the most recent event lines.
pub struct TraceLog {
    buffer: Deque<String<TRACE_LINE_LENGTH>, TRACE_CAPACITY>,
}

impl TraceLog {
    /// Create an empty trace log.
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Append a line, dropping the oldest one if the buffer is full and
    /// truncating messages longer than [`TRACE_LINE_LENGTH`].
    pub fn push(&mut self, msg: &str) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<TRACE_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        // Cannot fail: a slot was freed above if needed
        let _ = self.buffer.push_back(line);
    }

    /// Iterate lines oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|line| line.as_str())
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for TraceLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_iter_in_order() {
        let mut trace = TraceLog::new();
        trace.push("one");
        trace.push("two");
        let lines: Vec<&str> = trace.iter().collect();
        assert_eq!(lines, ["one", "two"]);
    }

    #[test]
    fn test_oldest_line_dropped_when_full() {
        let mut trace = TraceLog::new();
        for i in 0..TRACE_CAPACITY + 2 {
            let mut line = std::string::String::new();
            use std::fmt::Write;
            write!(line, "line {i}").unwrap();
            trace.push(&line);
        }
        assert_eq!(trace.len(), TRACE_CAPACITY);
        assert_eq!(trace.iter().next(), Some("line 2"));
        assert_eq!(trace.iter().last(), Some("line 9"));
    }

    #[test]
    fn test_long_lines_truncated() {
        let mut trace = TraceLog::new();
        let long = "x".repeat(TRACE_LINE_LENGTH * 2);
        trace.push(&long);
        assert_eq!(trace.iter().next().unwrap().len(), TRACE_LINE_LENGTH);
    }
}
