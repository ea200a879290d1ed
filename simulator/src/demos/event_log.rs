//! On-screen view of the recent input events.
//!
//! The main loop records one line per classified gesture; this demo renders
//! the tail of that buffer, which makes it a handy way to watch the
//! classifier's verdicts without a serial console.

use std::sync::Mutex;

use cyd_menu_common::TraceLog;
use cyd_menu_common::colors::{BLACK, YELLOW};
use cyd_menu_common::styles::CAPTION_STYLE;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use super::Display;

static TRACE: Mutex<TraceLog> = Mutex::new(TraceLog::new());

/// Append one line to the shared event trace.
pub fn record(line: &str) {
    if let Ok(mut trace) = TRACE.lock() {
        trace.push(line);
    }
}

pub fn show_event_log(display: &mut Display) {
    display.clear(BLACK).ok();
    Text::with_baseline("Recent input events", Point::zero(), CAPTION_STYLE, Baseline::Top)
        .draw(display)
        .ok();

    let style = MonoTextStyle::new(&FONT_10X20, YELLOW);
    if let Ok(trace) = TRACE.lock() {
        for (row, line) in trace.iter().enumerate() {
            Text::with_baseline(line, Point::new(0, 40 + row as i32 * 24), style, Baseline::Top)
                .draw(display)
                .ok();
        }
    }
}
