//! Digital and analog clock screens.
//!
//! Both render the moment they are launched and stay frozen until the menu
//! takes the screen back. The host has no RTC bootstrap, so times are UTC.

use std::time::{SystemTime, UNIX_EPOCH};

use core::f32::consts::{FRAC_PI_2, TAU};
use core::fmt::Write as _;

use cyd_menu_common::colors::{BLACK, GREEN, RED, WHITE};
use cyd_menu_common::styles::CAPTION_STYLE;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;
use profont::PROFONT_24_POINT;

use super::Display;

const CENTER: Point = Point::new(160, 120);

/// Seconds since midnight UTC, split into (hours, minutes, seconds).
fn now_hms() -> (u32, u32, u32) {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    (
        (secs / 3600 % 24) as u32,
        (secs / 60 % 60) as u32,
        (secs % 60) as u32,
    )
}

pub fn show_digital_clock(display: &mut Display) {
    display.clear(BLACK).ok();
    let (h, m, s) = now_hms();

    let mut text: String<8> = String::new();
    let _ = write!(text, "{h:02}:{m:02}:{s:02}");

    Rectangle::new(Point::new(60, 80), Size::new(200, 80))
        .into_styled(PrimitiveStyle::with_stroke(GREEN, 2))
        .draw(display)
        .ok();

    // ProFont 24pt glyphs are 16px wide: 8 chars centered on a 320px line
    let digits = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);
    Text::with_baseline(&text, Point::new(96, 102), digits, Baseline::Top)
        .draw(display)
        .ok();
    Text::with_baseline("UTC", Point::new(140, 170), CAPTION_STYLE, Baseline::Top)
        .draw(display)
        .ok();
}

pub fn show_analog_clock(display: &mut Display) {
    display.clear(BLACK).ok();
    let (h, m, s) = now_hms();

    Circle::with_center(CENTER, 220)
        .into_styled(PrimitiveStyle::with_stroke(WHITE, 2))
        .draw(display)
        .ok();

    // Hour ticks
    for i in 0..12 {
        let angle = i as f32 / 12.0 * TAU - FRAC_PI_2;
        Line::new(radial(angle, 98.0), radial(angle, 108.0))
            .into_styled(PrimitiveStyle::with_stroke(WHITE, 2))
            .draw(display)
            .ok();
    }

    // Hands: hour, minute, second
    let hour_angle = ((h % 12) * 3600 + m * 60 + s) as f32 / 43200.0 * TAU - FRAC_PI_2;
    let minute_angle = (m * 60 + s) as f32 / 3600.0 * TAU - FRAC_PI_2;
    let second_angle = s as f32 / 60.0 * TAU - FRAC_PI_2;
    draw_hand(display, hour_angle, 55.0, 3, WHITE);
    draw_hand(display, minute_angle, 85.0, 2, WHITE);
    draw_hand(display, second_angle, 95.0, 1, RED);

    Circle::with_center(CENTER, 8)
        .into_styled(PrimitiveStyle::with_fill(WHITE))
        .draw(display)
        .ok();
}

/// Point at `radius` from the clock center along `angle`.
fn radial(angle: f32, radius: f32) -> Point {
    CENTER + Point::new((angle.cos() * radius) as i32, (angle.sin() * radius) as i32)
}

fn draw_hand(display: &mut Display, angle: f32, length: f32, width: u32, color: Rgb565) {
    Line::new(CENTER, radial(angle, length))
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .ok();
}
