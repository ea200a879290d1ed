//! Color constants for the display.
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! This format is native to the ILI9341 panel on the CYD, so no conversion
//! happens when writing to the display. The constants come from the
//! `RgbColor` trait, which guarantees full-scale channel values.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Menu and demo background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Demo captions and clock faces.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure green (0, 63, 0). Normal menu text, selection background.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure red (31, 0, 0). Selected menu text.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure blue (0, 0, 31).
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Pure yellow (31, 63, 0).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure cyan (0, 63, 31).
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Pure magenta (31, 0, 31).
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;
