//! Display geometry, menu layout and touch gesture thresholds.
//!
//! All values are compile-time constants so layout arithmetic costs nothing
//! at runtime and the classifier thresholds end up in read-only data.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9341 on the ESP32-2432S028R, landscape).
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Menu Layout
// =============================================================================

/// Height of one menu line in pixels. The touch-to-line mapping divides the
/// touch y coordinate by this value, so it must match the font actually used
/// to draw menu lines (`ProFont` 18pt plus padding).
pub const MENU_LINE_HEIGHT: i32 = 24;

/// How many menu entries one page shows. Must not exceed
/// `SCREEN_HEIGHT / MENU_LINE_HEIGHT` (10 lines) or the last entries would
/// render off-screen.
pub const MENU_ITEMS_PER_PAGE: usize = 9;

// =============================================================================
// Gesture Thresholds
// =============================================================================

/// A pen-down shorter than this is treated as contact bounce and ignored.
pub const SHORT_CLICK_MIN_MS: u64 = 35;

/// A pen-down longer than this is a long click or, if the pen moved far
/// enough, a swipe. Anything between the two thresholds is a short click.
pub const LONG_CLICK_MIN_MS: u64 = 280;

/// Minimum horizontal pen travel for a left/right swipe, in pixels.
pub const SWIPE_MIN_DX: i32 = 50;

/// Minimum vertical pen travel for an up/down swipe, in pixels.
pub const SWIPE_MIN_DY: i32 = 50;
