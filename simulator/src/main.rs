//! Desktop simulator for the CYD multipage touch menu.
//!
//! The SDL window stands in for the 320x240 panel of the ESP32-2432S028R and
//! the mouse for the resistive pen: hold the left button to press, drag,
//! release. A short click selects a menu entry or, on the selected entry,
//! launches its demo; swiping up/down (press, drag vertically, release)
//! changes the page. After a demo, the next click brings the menu back.

mod demos;

use std::fmt::Write as _;
use std::thread;
use std::time::{Duration, Instant};

use cyd_menu_common::colors::BLACK;
use cyd_menu_common::config::{MENU_ITEMS_PER_PAGE, SCREEN_HEIGHT, SCREEN_WIDTH};
use cyd_menu_common::{Gesture, GestureClassifier, Menu, TouchSample, dispatch_gesture};
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorEvent, Window};
use heapless::String;

use crate::demos::Display;

/// Polling cadence of the fake touch controller.
const FRAME_TIME: Duration = Duration::from_millis(10);

/// Mouse state standing in for the resistive pen.
#[derive(Default)]
struct Pen {
    down: bool,
    at: Point,
}

fn main() {
    let mut display: Display = Display::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("CYD Multipage Menu", &output_settings);

    let entries = demos::menu_entries();
    let mut menu = match Menu::new(&entries, MENU_ITEMS_PER_PAGE) {
        Ok(menu) => menu,
        Err(err) => {
            eprintln!("menu configuration rejected: {err}");
            return;
        }
    };

    display.clear(BLACK).ok();
    menu.setup(&mut display).ok();
    window.update(&display);

    let mut classifier = GestureClassifier::new();
    let mut pen = Pen::default();
    let started = Instant::now();

    'run: loop {
        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'run,
                SimulatorEvent::MouseButtonDown { point, .. } => {
                    pen.down = true;
                    pen.at = point;
                }
                SimulatorEvent::MouseMove { point } => {
                    // The panel only reports positions while the pen is down
                    if pen.down {
                        pen.at = point;
                    }
                }
                SimulatorEvent::MouseButtonUp { .. } => {
                    pen.down = false;
                }
                _ => {}
            }
        }

        let sample = TouchSample {
            pressed: pen.down,
            x: pen.at.x,
            y: pen.at.y,
            timestamp_ms: started.elapsed().as_millis() as u64,
        };
        if let Some(gesture) = classifier.poll(sample) {
            let line = describe(gesture);
            println!("{line}");
            demos::record(&line);
            dispatch_gesture(&mut menu, &mut display, gesture).ok();
        }

        window.update(&display);
        thread::sleep(FRAME_TIME);
    }
}

/// One trace line per classified gesture, in the style of the board's
/// serial log.
fn describe(gesture: Gesture) -> String<40> {
    let mut line = String::new();
    let _ = match gesture {
        Gesture::ShortClick(p) => write!(line, "click @ {},{}", p.x, p.y),
        Gesture::LongClick(p) => write!(line, "long click @ {},{}", p.x, p.y),
        Gesture::SwipeLeft(p) => write!(line, "swipe left @ {},{}", p.x, p.y),
        Gesture::SwipeRight(p) => write!(line, "swipe right @ {},{}", p.x, p.y),
        Gesture::SwipeUp(p) => write!(line, "swipe up @ {},{}", p.x, p.y),
        Gesture::SwipeDown(p) => write!(line, "swipe down @ {},{}", p.x, p.y),
    };
    line
}
