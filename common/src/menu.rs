//! Paginated menu with touch-driven selection and action dispatch.
//!
//! Entries are a fixed, ordered list of `(label, action)` pairs. If the list
//! is longer than one page, the remaining entries are offered page by page
//! (swipe up for the next page, down for the previous one).
//!
//! Touching an unselected entry selects it; touching the already-selected
//! entry runs its action. The action draws whatever it wants and returns;
//! its output stays on screen until the next touch, which restores the menu.

use core::fmt;

use embedded_graphics::Drawable;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::Point;
use embedded_graphics::text::{Baseline, Text};

use crate::colors::BLACK;
use crate::config::MENU_LINE_HEIGHT;
use crate::styles::{MENU_ITEM_STYLE, MENU_SELECTED_STYLE};

/// One menu entry: a label and the action it launches.
///
/// The action receives the display so it can draw its own screen; it runs on
/// the polling thread and hands control back to the menu by returning.
pub struct MenuEntry<D> {
    pub label: &'static str,
    pub action: fn(&mut D),
}

/// Page swipe direction. `Left` and `Right` are reserved and currently
/// ignored by the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Menu configuration errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuError {
    /// The entry list was empty.
    InvalidConfig,
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig => write!(f, "menu needs at least one entry"),
        }
    }
}

/// Touch interpretation phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// The menu is on screen; touches select or activate entries.
    Browsing,
    /// An action has run and its last screen is still displayed; the next
    /// touch restores the menu.
    ActionShown,
}

/// A multipage menu over a borrowed entry list.
///
/// Generic over the display, which only has to be a `DrawTarget` in Rgb565.
/// All methods are synchronous and return after issuing their draw calls;
/// the host poll loop owns the cadence.
pub struct Menu<'a, D> {
    entries: &'a [MenuEntry<D>],
    items_per_page: usize,
    page: usize,
    selected: usize,
    phase: Phase,
}

impl<'a, D: DrawTarget<Color = Rgb565>> Menu<'a, D> {
    /// Create a menu over `entries`. `items_per_page == 0` means "show all
    /// entries on a single page"; the caller must then make sure they fit on
    /// the display.
    ///
    /// Fails with [`MenuError::InvalidConfig`] if `entries` is empty.
    pub fn new(entries: &'a [MenuEntry<D>], items_per_page: usize) -> Result<Self, MenuError> {
        if entries.is_empty() {
            return Err(MenuError::InvalidConfig);
        }
        let items_per_page = if items_per_page == 0 { entries.len() } else { items_per_page };
        Ok(Self {
            entries,
            items_per_page,
            page: 0,
            selected: 0,
            phase: Phase::Browsing,
        })
    }

    /// Compute the page containing the current selection and draw the menu.
    pub fn setup(&mut self, display: &mut D) -> Result<(), D::Error> {
        self.page = self.selected / self.items_per_page;
        self.show(display, true)
    }

    /// Draw the visible window of entries, the selected one inverted.
    ///
    /// Idempotent: with unchanged state, repeated calls produce the same
    /// pixels. Both menu styles paint their own background, so a redraw
    /// without clearing fully overwrites the previous lines.
    pub fn show(&self, display: &mut D, clear_screen: bool) -> Result<(), D::Error> {
        if clear_screen {
            display.clear(BLACK)?;
        }
        let (start, stop) = self.window();
        for (row, index) in (start..stop).enumerate() {
            let style = if index == self.selected {
                MENU_SELECTED_STYLE
            } else {
                MENU_ITEM_STYLE
            };
            Text::with_baseline(
                self.entries[index].label,
                Point::new(0, row as i32 * MENU_LINE_HEIGHT),
                style,
                Baseline::Top,
            )
            .draw(display)?;
        }
        Ok(())
    }

    /// Handle a touch on line `local_index` of the current page.
    ///
    /// While browsing, touching the selected entry runs its action and leaves
    /// the action's output on screen; touching any other visible entry moves
    /// the selection. After an action, any touch restores the menu.
    ///
    /// Callers must resolve `local_index` from the touch position and clamp
    /// it to the visible range first (see [`crate::input::dispatch_gesture`]);
    /// out-of-range values are not validated here.
    pub fn on_item_touched(&mut self, local_index: usize, display: &mut D) -> Result<(), D::Error> {
        match self.phase {
            Phase::Browsing => {
                let global = self.page * self.items_per_page + local_index;
                if global == self.selected {
                    (self.entries[self.selected].action)(display);
                    // The action's last screen stays up until the next touch
                    self.phase = Phase::ActionShown;
                } else {
                    self.selected = global;
                    self.show(display, true)?;
                }
            }
            Phase::ActionShown => {
                self.show(display, true)?;
                self.phase = Phase::Browsing;
            }
        }
        Ok(())
    }

    /// Handle a page swipe. `Up` advances to the next page if one exists,
    /// `Down` retreats if not already on the first page, `Left`/`Right` are
    /// reserved. Always concludes with a redraw, and never moves the
    /// selection.
    pub fn on_page_swipe(&mut self, direction: SwipeDirection, display: &mut D) -> Result<(), D::Error> {
        match direction {
            SwipeDirection::Up => {
                if (self.page + 1) * self.items_per_page < self.entries.len() {
                    self.page += 1;
                }
            }
            SwipeDirection::Down => {
                if self.page > 0 {
                    self.page -= 1;
                }
            }
            // Reserved, not handled
            SwipeDirection::Left | SwipeDirection::Right => {}
        }
        self.show(display, true)
    }

    /// Index of the currently displayed page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Global index of the selected entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether an action's output is currently on screen.
    pub fn is_action_shown(&self) -> bool {
        self.phase == Phase::ActionShown
    }

    /// Number of entries visible on the current page. Always at least 1.
    pub fn visible_len(&self) -> usize {
        let (start, stop) = self.window();
        stop - start
    }

    /// Half-open global index range of the visible window.
    fn window(&self) -> (usize, usize) {
        let start = self.page * self.items_per_page;
        let stop = (start + self.items_per_page).min(self.entries.len());
        (start, stop)
    }
}
