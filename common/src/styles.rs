//! Pre-computed static text styles for the menu.
//!
//! `MonoTextStyle::new` is const fn, so these live in the binary's read-only
//! data section and cost nothing to reference per frame. Both menu styles set
//! a background color: a redraw then fully overwrites the previous line,
//! which is what makes selection changes work without clearing the screen.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use profont::PROFONT_18_POINT;

use crate::colors::{BLACK, GREEN, RED, WHITE};

/// Normal menu line: green on black.
pub const MENU_ITEM_STYLE: MonoTextStyle<'static, Rgb565> = {
    let mut style = MonoTextStyle::new(&PROFONT_18_POINT, GREEN);
    style.background_color = Some(BLACK);
    style
};

/// Selected menu line: inverted, red on green.
pub const MENU_SELECTED_STYLE: MonoTextStyle<'static, Rgb565> = {
    let mut style = MonoTextStyle::new(&PROFONT_18_POINT, RED);
    style.background_color = Some(GREEN);
    style
};

/// White caption text used by demo screens.
pub const CAPTION_STYLE: MonoTextStyle<'static, Rgb565> = {
    let mut style = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);
    style.background_color = Some(BLACK);
    style
};
