//! Straight-line drawing demos: lines, rectangles, circles, color ramps.

use cyd_menu_common::colors::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};
use cyd_menu_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};

use super::Display;

const W: i32 = SCREEN_WIDTH as i32;
const H: i32 = SCREEN_HEIGHT as i32;

const PALETTE: [Rgb565; 6] = [RED, YELLOW, GREEN, CYAN, BLUE, MAGENTA];

/// A fan of lines from the top-left corner to the right and bottom edges.
pub fn show_corner_lines(display: &mut Display) {
    display.clear(BLACK).ok();
    let mut color = 0;
    for y in (0..H).step_by(12) {
        Line::new(Point::zero(), Point::new(W - 1, y))
            .into_styled(PrimitiveStyle::with_stroke(PALETTE[color % PALETTE.len()], 1))
            .draw(display)
            .ok();
        color += 1;
    }
    for x in (0..W).step_by(12) {
        Line::new(Point::zero(), Point::new(x, H - 1))
            .into_styled(PrimitiveStyle::with_stroke(PALETTE[color % PALETTE.len()], 1))
            .draw(display)
            .ok();
        color += 1;
    }
}

/// Concentric rectangles shrinking toward the screen center.
pub fn show_shrinking_rectangles(display: &mut Display) {
    display.clear(BLACK).ok();
    let mut inset = 0;
    let mut color = 0;
    while 2 * inset < H {
        Rectangle::new(
            Point::new(inset, inset),
            Size::new((W - 2 * inset) as u32, (H - 2 * inset) as u32),
        )
        .into_styled(PrimitiveStyle::with_stroke(PALETTE[color % PALETTE.len()], 1))
        .draw(display)
        .ok();
        inset += 6;
        color += 1;
    }
}

/// Nested rounded rectangles.
pub fn show_rounded_rectangles(display: &mut Display) {
    display.clear(BLACK).ok();
    for (i, color) in PALETTE.iter().enumerate() {
        let inset = 12 * i as i32 + 8;
        RoundedRectangle::with_equal_corners(
            Rectangle::new(
                Point::new(inset, inset),
                Size::new((W - 2 * inset) as u32, (H - 2 * inset) as u32),
            ),
            Size::new(16, 16),
        )
        .into_styled(PrimitiveStyle::with_stroke(*color, 2))
        .draw(display)
        .ok();
    }
}

/// A grid of filled circles cycling through the palette.
pub fn show_colored_circles(display: &mut Display) {
    display.clear(BLACK).ok();
    const DIAMETER: u32 = 56;
    let mut color = 0;
    for row in 0..3 {
        for col in 0..5 {
            Circle::new(Point::new(8 + col * 62, 20 + row * 68), DIAMETER)
                .into_styled(PrimitiveStyle::with_fill(PALETTE[color % PALETTE.len()]))
                .draw(display)
                .ok();
            color += 1;
        }
    }
}

/// A row of filled triangles, alternating orientation.
pub fn show_colored_triangles(display: &mut Display) {
    display.clear(BLACK).ok();
    for (i, color) in PALETTE.iter().enumerate() {
        let x = 10 + 50 * i as i32;
        let (top, bottom) = (40, 200);
        let triangle = if i % 2 == 0 {
            Triangle::new(
                Point::new(x, bottom),
                Point::new(x + 48, bottom),
                Point::new(x + 24, top),
            )
        } else {
            Triangle::new(
                Point::new(x, top),
                Point::new(x + 48, top),
                Point::new(x + 24, bottom),
            )
        };
        triangle
            .into_styled(PrimitiveStyle::with_fill(*color))
            .draw(display)
            .ok();
    }
}

/// Three horizontal bands sweeping the red, green and blue channels of
/// Rgb565 across the full screen width.
pub fn show_rgb_palettes(display: &mut Display) {
    display.clear(BLACK).ok();
    let band_height = (H / 3) as u32;
    for x in 0..W {
        let r = (x * 32 / W) as u8;
        let g = (x * 64 / W) as u8;
        let b = (x * 32 / W) as u8;
        for (band, color) in [Rgb565::new(r, 0, 0), Rgb565::new(0, g, 0), Rgb565::new(0, 0, b)]
            .into_iter()
            .enumerate()
        {
            Rectangle::new(Point::new(x, band as i32 * H / 3), Size::new(1, band_height))
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(display)
                .ok();
        }
    }
}

/// 32 vertical gray bars from black to white.
pub fn show_grayscale(display: &mut Display) {
    display.clear(BLACK).ok();
    for level in 0..32i32 {
        let gray = Rgb565::new(level as u8, (level * 2) as u8, level as u8);
        Rectangle::new(Point::new(level * 10, 0), Size::new(10, SCREEN_HEIGHT))
            .into_styled(PrimitiveStyle::with_fill(gray))
            .draw(display)
            .ok();
    }
}

/// A white/black checkerboard.
pub fn show_checkerboard(display: &mut Display) {
    display.clear(BLACK).ok();
    const CELL: i32 = 20;
    for row in 0..(H / CELL) {
        for col in 0..(W / CELL) {
            if (row + col) % 2 == 0 {
                Rectangle::new(
                    Point::new(col * CELL, row * CELL),
                    Size::new(CELL as u32, CELL as u32),
                )
                .into_styled(PrimitiveStyle::with_fill(WHITE))
                .draw(display)
                .ok();
            }
        }
    }
}
