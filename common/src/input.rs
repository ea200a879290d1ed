//! Wiring from classified gestures to menu operations.
//!
//! This is the single-subscriber table of the firmware: each gesture kind is
//! either bound to exactly one menu operation or dropped. Short clicks hit a
//! menu line, vertical swipes page, and long clicks and horizontal swipes
//! have no subscriber today (horizontal paging is reserved).

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;

use crate::config::MENU_LINE_HEIGHT;
use crate::menu::{Menu, SwipeDirection};
use crate::touch::Gesture;

/// Map a touch y coordinate to a menu line index (0-based, unclamped).
pub fn line_at(y: i32) -> usize {
    (y.max(0) / MENU_LINE_HEIGHT) as usize
}

/// Feed one classified gesture to the menu.
///
/// Short clicks are resolved to the touched line and clamped to the visible
/// range before reaching the menu, honoring its documented precondition; a
/// touch below the last entry counts as the last entry.
pub fn dispatch_gesture<D: DrawTarget<Color = Rgb565>>(
    menu: &mut Menu<'_, D>,
    display: &mut D,
    gesture: Gesture,
) -> Result<(), D::Error> {
    match gesture {
        Gesture::ShortClick(at) => {
            let local = line_at(at.y).min(menu.visible_len() - 1);
            menu.on_item_touched(local, display)
        }
        Gesture::SwipeUp(_) => menu.on_page_swipe(SwipeDirection::Up, display),
        Gesture::SwipeDown(_) => menu.on_page_swipe(SwipeDirection::Down, display),
        // No subscriber: dropped
        Gesture::LongClick(_) | Gesture::SwipeLeft(_) | Gesture::SwipeRight(_) => Ok(()),
    }
}
