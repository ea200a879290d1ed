//! Touch sample stream and gesture classification.
//!
//! The resistive panel (XPT2046 on the real board, the mouse in the
//! simulator) only reports a position while the pen is down. The classifier
//! therefore tracks the *last* position seen during a press and classifies
//! the whole press on release, from its duration and total pen travel:
//!
//! - held longer than [`LONG_CLICK_MIN_MS`] and moved past the swipe
//!   threshold on one axis: a directional swipe (horizontal checked first)
//! - held longer than [`LONG_CLICK_MIN_MS`] in place: a long click
//! - held longer than [`SHORT_CLICK_MIN_MS`]: a short click
//! - anything shorter: contact bounce, dropped
//!
//! Timestamps come from the samples themselves, never from an internal
//! clock, so classification is deterministic and host-testable.

use embedded_graphics::prelude::Point;

use crate::config::{LONG_CLICK_MIN_MS, SHORT_CLICK_MIN_MS, SWIPE_MIN_DX, SWIPE_MIN_DY};

/// One polled reading from the touch source.
///
/// While `pressed` is false the coordinates are meaningless (the panel
/// reports nothing with the pen up) and only the timestamp is used.
#[derive(Clone, Copy, Debug)]
pub struct TouchSample {
    pub pressed: bool,
    pub x: i32,
    pub y: i32,
    pub timestamp_ms: u64,
}

impl TouchSample {
    /// A pen-down reading at the given position.
    pub const fn pen_down(x: i32, y: i32, timestamp_ms: u64) -> Self {
        Self { pressed: true, x, y, timestamp_ms }
    }

    /// A pen-up reading. Coordinates are not reported by the hardware.
    pub const fn pen_up(timestamp_ms: u64) -> Self {
        Self { pressed: false, x: 0, y: 0, timestamp_ms }
    }
}

/// A classified touch interaction, carrying the release position (the last
/// position seen while the pen was still down).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    ShortClick(Point),
    LongClick(Point),
    SwipeLeft(Point),
    SwipeRight(Point),
    SwipeUp(Point),
    SwipeDown(Point),
}

/// Tracking state for an in-progress press.
#[derive(Clone, Copy, Debug)]
struct Press {
    started_ms: u64,
    start: Point,
    last: Point,
}

/// Two-state classifier: idle (pen up, `press` is `None`) or tracking an
/// in-progress press. Feed it every polled sample; it emits at most one
/// gesture per completed press, on the pen-up sample.
#[derive(Default)]
pub struct GestureClassifier {
    press: Option<Press>,
}

impl GestureClassifier {
    pub const fn new() -> Self {
        Self { press: None }
    }

    /// Consume one touch sample, returning a gesture if this sample completed
    /// one. Never blocks; call it at a steady cadence from the host loop.
    pub fn poll(&mut self, sample: TouchSample) -> Option<Gesture> {
        if sample.pressed {
            let at = Point::new(sample.x, sample.y);
            match &mut self.press {
                // Pen just went down: remember when and where
                None => {
                    self.press = Some(Press {
                        started_ms: sample.timestamp_ms,
                        start: at,
                        last: at,
                    });
                }
                // Pen still down: track the position it will be released at
                Some(press) => press.last = at,
            }
            None
        } else {
            let press = self.press.take()?;
            let duration_ms = sample.timestamp_ms.saturating_sub(press.started_ms);
            classify(duration_ms, press.start, press.last)
        }
    }
}

/// Classify a completed press. The horizontal axis is checked before the
/// vertical one: a diagonal pull that crosses both thresholds counts as a
/// horizontal swipe.
fn classify(duration_ms: u64, start: Point, release: Point) -> Option<Gesture> {
    let dx = release.x - start.x;
    let dy = release.y - start.y;

    if duration_ms > LONG_CLICK_MIN_MS {
        if dx > SWIPE_MIN_DX {
            Some(Gesture::SwipeRight(release))
        } else if dx < -SWIPE_MIN_DX {
            Some(Gesture::SwipeLeft(release))
        } else if dy > SWIPE_MIN_DY {
            Some(Gesture::SwipeDown(release))
        } else if dy < -SWIPE_MIN_DY {
            Some(Gesture::SwipeUp(release))
        } else {
            // Pen held in place
            Some(Gesture::LongClick(release))
        }
    } else if duration_ms > SHORT_CLICK_MIN_MS {
        Some(Gesture::ShortClick(release))
    } else {
        // Contact bounce
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Press at `from` at t=0, drag to `to`, release at `t_up`.
    fn press_drag_release(from: Point, to: Point, t_up: u64) -> Option<Gesture> {
        let mut classifier = GestureClassifier::new();
        assert_eq!(classifier.poll(TouchSample::pen_down(from.x, from.y, 0)), None);
        assert_eq!(classifier.poll(TouchSample::pen_down(to.x, to.y, t_up / 2)), None);
        classifier.poll(TouchSample::pen_up(t_up))
    }

    #[test]
    fn test_contact_bounce_is_dropped() {
        assert_eq!(press_drag_release(Point::new(100, 100), Point::new(100, 100), 10), None);
    }

    #[test]
    fn test_short_click() {
        assert_eq!(
            press_drag_release(Point::new(100, 100), Point::new(100, 100), 200),
            Some(Gesture::ShortClick(Point::new(100, 100)))
        );
    }

    #[test]
    fn test_long_click_in_place() {
        assert_eq!(
            press_drag_release(Point::new(100, 100), Point::new(100, 100), 500),
            Some(Gesture::LongClick(Point::new(100, 100)))
        );
    }

    #[test]
    fn test_swipe_up() {
        // Down at (100,100) t=0, up at (100,30) t=300: dy=-70 crosses the threshold
        assert_eq!(
            press_drag_release(Point::new(100, 100), Point::new(100, 30), 300),
            Some(Gesture::SwipeUp(Point::new(100, 30)))
        );
    }

    #[test]
    fn test_swipe_down() {
        assert_eq!(
            press_drag_release(Point::new(100, 100), Point::new(100, 180), 300),
            Some(Gesture::SwipeDown(Point::new(100, 180)))
        );
    }

    #[test]
    fn test_swipe_right() {
        assert_eq!(
            press_drag_release(Point::new(100, 100), Point::new(180, 100), 300),
            Some(Gesture::SwipeRight(Point::new(180, 100)))
        );
    }

    #[test]
    fn test_swipe_left() {
        assert_eq!(
            press_drag_release(Point::new(200, 100), Point::new(120, 100), 300),
            Some(Gesture::SwipeLeft(Point::new(120, 100)))
        );
    }

    #[test]
    fn test_diagonal_prefers_horizontal() {
        // Both axes cross the threshold; horizontal is checked first
        assert_eq!(
            press_drag_release(Point::new(100, 100), Point::new(180, 180), 300),
            Some(Gesture::SwipeRight(Point::new(180, 180)))
        );
        assert_eq!(
            press_drag_release(Point::new(200, 200), Point::new(120, 120), 300),
            Some(Gesture::SwipeLeft(Point::new(120, 120)))
        );
    }

    #[test]
    fn test_threshold_boundaries() {
        let p = Point::new(50, 50);
        // Exactly at the short threshold: still bounce (strict greater-than)
        assert_eq!(press_drag_release(p, p, SHORT_CLICK_MIN_MS), None);
        assert_eq!(
            press_drag_release(p, p, SHORT_CLICK_MIN_MS + 1),
            Some(Gesture::ShortClick(p))
        );
        // Exactly at the long threshold: still a short click
        assert_eq!(
            press_drag_release(p, p, LONG_CLICK_MIN_MS),
            Some(Gesture::ShortClick(p))
        );
        assert_eq!(
            press_drag_release(p, p, LONG_CLICK_MIN_MS + 1),
            Some(Gesture::LongClick(p))
        );
    }

    #[test]
    fn test_swipe_distance_boundary() {
        // Travel of exactly SWIPE_MIN_DY is not a swipe (strict greater-than)
        let from = Point::new(100, 100);
        assert_eq!(
            press_drag_release(from, Point::new(100, 100 - SWIPE_MIN_DY), 400),
            Some(Gesture::LongClick(Point::new(100, 50)))
        );
        assert_eq!(
            press_drag_release(from, Point::new(100, 100 - SWIPE_MIN_DY - 1), 400),
            Some(Gesture::SwipeUp(Point::new(100, 49)))
        );
    }

    #[test]
    fn test_release_position_is_last_sample() {
        // The pen wanders; only the final pen-down position counts
        let mut classifier = GestureClassifier::new();
        classifier.poll(TouchSample::pen_down(10, 10, 0));
        classifier.poll(TouchSample::pen_down(60, 60, 100));
        classifier.poll(TouchSample::pen_down(100, 30, 200));
        assert_eq!(
            classifier.poll(TouchSample::pen_up(300)),
            Some(Gesture::SwipeRight(Point::new(100, 30)))
        );
    }

    #[test]
    fn test_resets_between_gestures() {
        let mut classifier = GestureClassifier::new();
        classifier.poll(TouchSample::pen_down(100, 100, 0));
        assert_eq!(
            classifier.poll(TouchSample::pen_up(100)),
            Some(Gesture::ShortClick(Point::new(100, 100)))
        );
        // A second press is classified on its own timeline
        classifier.poll(TouchSample::pen_down(20, 20, 1000));
        assert_eq!(
            classifier.poll(TouchSample::pen_up(1400)),
            Some(Gesture::LongClick(Point::new(20, 20)))
        );
    }

    #[test]
    fn test_pen_up_while_idle_is_ignored() {
        let mut classifier = GestureClassifier::new();
        assert_eq!(classifier.poll(TouchSample::pen_up(100)), None);
        assert_eq!(classifier.poll(TouchSample::pen_up(200)), None);
    }
}
