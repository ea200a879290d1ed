//! Recording draw target for host tests.
//!
//! Captures every pixel the code under test emits, counts screen clears, and
//! gives test actions a place to record that they ran. Shared by the menu and
//! input dispatch tests.

use std::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::Rgb565;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub(crate) struct TestDisplay {
    /// Pixels drawn since the last clear or `take_frame`.
    pub pixels: Vec<Pixel<Rgb565>>,
    /// Number of full-screen clears issued.
    pub clears: usize,
    /// Labels pushed by test menu actions when they run.
    pub actions: Vec<&'static str>,
}

impl TestDisplay {
    pub fn new() -> Self {
        Self {
            pixels: Vec::new(),
            clears: 0,
            actions: Vec::new(),
        }
    }

    /// Take the pixels drawn so far, leaving the display empty.
    pub fn take_frame(&mut self) -> Vec<Pixel<Rgb565>> {
        std::mem::take(&mut self.pixels)
    }
}

impl OriginDimensions for TestDisplay {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for TestDisplay {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Rgb565>>,
    {
        self.pixels.extend(pixels);
        Ok(())
    }

    fn clear(&mut self, _color: Rgb565) -> Result<(), Self::Error> {
        self.clears += 1;
        self.pixels.clear();
        Ok(())
    }
}
