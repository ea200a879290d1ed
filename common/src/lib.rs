//! Core logic for the CYD multipage touch menu.
//!
//! This crate contains the platform-agnostic parts of the firmware, shared
//! between the desktop simulator and a future board crate for the
//! ESP32-2432S028R ("Cheap Yellow Display"):
//!
//! - [`config`]: Display geometry, menu layout and gesture thresholds
//! - [`colors`]: RGB565 color constants for the display
//! - [`styles`]: Pre-computed text styles for menu lines
//! - [`touch`]: Raw touch samples and the tap/long-press/swipe classifier
//! - [`menu`]: Paginated menu with selection and action dispatch
//! - [`input`]: Wiring from classified gestures to menu operations
//! - [`trace`]: Ring buffer of recent input events
//!
//! The display is only ever seen as an `embedded_graphics::DrawTarget` over
//! `Rgb565`; nothing here touches pixel buffers or hardware directly.
//!
//! # Testing
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while firmware builds stay `no_std`:
//!
//! ```bash
//! cargo test -p cyd-menu-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod input;
pub mod menu;
pub mod styles;
pub mod touch;
pub mod trace;

#[cfg(test)]
mod test_display;

// Re-export commonly used items
pub use input::dispatch_gesture;
pub use menu::{Menu, MenuEntry, MenuError, SwipeDirection};
pub use touch::{Gesture, GestureClassifier, TouchSample};
pub use trace::TraceLog;
