//! Demo screens launched from the menu.
//!
//! Each demo is a plain function taking the display: it draws one screen and
//! returns, and the menu keeps that screen up until the next touch. None of
//! them know anything about paging or gestures.

mod clock;
mod event_log;
mod patterns;

use cyd_menu_common::MenuEntry;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics_simulator::SimulatorDisplay;

pub use event_log::record;

/// The simulated 320x240 panel.
pub type Display = SimulatorDisplay<Rgb565>;

/// The entry table, in menu order. Eleven entries on nine-line pages, so
/// paging is exercised.
pub fn menu_entries() -> [MenuEntry<Display>; 11] {
    [
        MenuEntry { label: "Lines from Corner", action: patterns::show_corner_lines },
        MenuEntry { label: "Shrinking Rectangles", action: patterns::show_shrinking_rectangles },
        MenuEntry { label: "Rounded Rectangles", action: patterns::show_rounded_rectangles },
        MenuEntry { label: "Colored Circles", action: patterns::show_colored_circles },
        MenuEntry { label: "Colored Triangles", action: patterns::show_colored_triangles },
        MenuEntry { label: "RGB Palettes", action: patterns::show_rgb_palettes },
        MenuEntry { label: "Grayscale", action: patterns::show_grayscale },
        MenuEntry { label: "Checkerboard", action: patterns::show_checkerboard },
        MenuEntry { label: "Digital Clock", action: clock::show_digital_clock },
        MenuEntry { label: "Analog Clock", action: clock::show_analog_clock },
        MenuEntry { label: "Event Log", action: event_log::show_event_log },
    ]
}
