// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click gesture recognition: press, drag, release or abort.
//!
//! [`ClickState`] follows one mouse button through a gesture:
//!
//! ```text
//! idle --down--> pressed --move--> pressed (Drag)
//!                pressed --up----> idle (Finished | Double)
//!                pressed --abort-> idle (Aborted)
//! ```
//!
//! The state machine does not decide whether a release counts as "inside" a
//! target; callers compare [`ClickState::pos`] against their own bounds after
//! a `Finished`/`Double` result.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::click::{ClickResult, ClickState, MouseButton};
//!
//! let mut click = ClickState::new(MouseButton::Primary);
//!
//! assert_eq!(click.on_down(MouseButton::Primary, Point::new(5.0, 5.0), 0), ClickResult::Started);
//! assert!(click.is_active());
//! assert_eq!(click.on_move(Point::new(6.0, 5.0)), ClickResult::Drag);
//! assert_eq!(click.on_up(MouseButton::Primary, Point::new(6.0, 6.0), 80), ClickResult::Finished);
//! assert_eq!(click.pos(), Point::new(6.0, 6.0));
//!
//! // A quick second click close by is a double click.
//! click.on_down(MouseButton::Primary, Point::new(6.0, 6.0), 200);
//! assert_eq!(click.on_up(MouseButton::Primary, Point::new(6.0, 6.0), 260), ClickResult::Double);
//! ```

use kurbo::{Point, Vec2};

/// Default maximum interval between two clicks forming a double click, in milliseconds.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 500;

/// Default maximum distance between two clicks forming a double click, in pixels.
pub const DEFAULT_DOUBLE_CLICK_SLOP: f64 = 4.0;

/// Mouse button identity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Usually the left button.
    Primary,
    /// Usually the right button.
    Secondary,
    /// Usually the wheel button.
    Middle,
    /// Any other button, by platform number.
    Other(u16),
}

/// Outcome of feeding one event into a [`ClickState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickResult {
    /// The event was not part of a gesture on the tracked button.
    None,
    /// The tracked button was pressed; a gesture is now active.
    Started,
    /// The pointer moved while the gesture was active.
    Drag,
    /// The tracked button was released, completing a single click.
    Finished,
    /// The tracked button was released, completing a double click.
    Double,
    /// The gesture was cancelled before release.
    Aborted,
}

/// Click gesture tracker for a single mouse button.
#[derive(Clone, Debug)]
pub struct ClickState {
    button: MouseButton,
    active: bool,
    start_pos: Point,
    pos: Point,
    /// Position and time of the last completed single click.
    last_click: Option<(Point, u64)>,
    double_click_ms: u64,
    double_click_slop: f64,
}

impl ClickState {
    /// Creates an idle tracker for `button` with default double-click tolerances.
    #[must_use]
    pub fn new(button: MouseButton) -> Self {
        Self {
            button,
            active: false,
            start_pos: Point::ZERO,
            pos: Point::ZERO,
            last_click: None,
            double_click_ms: DEFAULT_DOUBLE_CLICK_MS,
            double_click_slop: DEFAULT_DOUBLE_CLICK_SLOP,
        }
    }

    /// Overrides the double-click interval (milliseconds) and distance (pixels).
    #[must_use]
    pub fn with_double_click(mut self, interval_ms: u64, slop: f64) -> Self {
        self.double_click_ms = interval_ms;
        self.double_click_slop = slop;
        self
    }

    /// The tracked button.
    #[must_use]
    pub fn button(&self) -> MouseButton {
        self.button
    }

    /// Returns `true` between a press and its release or abort.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Where the current (or last) gesture started.
    #[must_use]
    pub fn start_pos(&self) -> Point {
        self.start_pos
    }

    /// Latest pointer position seen by the gesture, including the release position.
    #[must_use]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Offset from the press position to the latest position.
    #[must_use]
    pub fn total_offset(&self) -> Vec2 {
        self.pos - self.start_pos
    }

    /// Handle a button press at `pos`; `time_ms` is any monotonic millisecond clock.
    pub fn on_down(&mut self, button: MouseButton, pos: Point, time_ms: u64) -> ClickResult {
        if button != self.button {
            return ClickResult::None;
        }
        // Forget a stale previous click so a slow second press starts fresh.
        if let Some((_, at)) = self.last_click
            && time_ms.saturating_sub(at) > self.double_click_ms
        {
            self.last_click = None;
        }
        self.active = true;
        self.start_pos = pos;
        self.pos = pos;
        ClickResult::Started
    }

    /// Handle pointer motion.
    pub fn on_move(&mut self, pos: Point) -> ClickResult {
        if !self.active {
            return ClickResult::None;
        }
        self.pos = pos;
        ClickResult::Drag
    }

    /// Handle a button release at `pos`.
    pub fn on_up(&mut self, button: MouseButton, pos: Point, time_ms: u64) -> ClickResult {
        if !self.active || button != self.button {
            return ClickResult::None;
        }
        self.active = false;
        self.pos = pos;
        match self.last_click.take() {
            Some((prev, at))
                if time_ms.saturating_sub(at) <= self.double_click_ms
                    && (pos - prev).hypot() <= self.double_click_slop =>
            {
                ClickResult::Double
            }
            _ => {
                self.last_click = Some((pos, time_ms));
                ClickResult::Finished
            }
        }
    }

    /// Cancel an active gesture, for example when pointer capture is lost.
    pub fn abort(&mut self) -> ClickResult {
        if !self.active {
            return ClickResult::None;
        }
        self.active = false;
        self.last_click = None;
        ClickResult::Aborted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEFT: MouseButton = MouseButton::Primary;

    #[test]
    fn idle_ignores_moves_and_releases() {
        let mut click = ClickState::new(LEFT);
        assert_eq!(click.on_move(Point::new(1.0, 1.0)), ClickResult::None);
        assert_eq!(click.on_up(LEFT, Point::ZERO, 0), ClickResult::None);
        assert_eq!(click.abort(), ClickResult::None);
        assert!(!click.is_active());
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut click = ClickState::new(LEFT);
        assert_eq!(
            click.on_down(MouseButton::Secondary, Point::ZERO, 0),
            ClickResult::None
        );
        click.on_down(LEFT, Point::ZERO, 0);
        assert_eq!(
            click.on_up(MouseButton::Other(4), Point::ZERO, 5),
            ClickResult::None
        );
        assert!(click.is_active());
    }

    #[test]
    fn press_drag_release() {
        let mut click = ClickState::new(LEFT);
        assert_eq!(
            click.on_down(LEFT, Point::new(10.0, 10.0), 0),
            ClickResult::Started
        );
        assert_eq!(click.on_move(Point::new(30.0, 12.0)), ClickResult::Drag);
        assert_eq!(click.total_offset(), Vec2::new(20.0, 2.0));
        assert_eq!(
            click.on_up(LEFT, Point::new(40.0, 12.0), 10),
            ClickResult::Finished
        );
        assert_eq!(click.start_pos(), Point::new(10.0, 10.0));
        assert_eq!(click.pos(), Point::new(40.0, 12.0));
        assert!(!click.is_active());
    }

    #[test]
    fn abort_ends_gesture() {
        let mut click = ClickState::new(LEFT);
        click.on_down(LEFT, Point::ZERO, 0);
        assert_eq!(click.abort(), ClickResult::Aborted);
        assert!(!click.is_active());
        assert_eq!(click.on_up(LEFT, Point::ZERO, 1), ClickResult::None);
    }

    #[test]
    fn double_click_needs_time_and_distance() {
        let mut click = ClickState::new(LEFT);
        let p = Point::new(50.0, 50.0);

        click.on_down(LEFT, p, 0);
        assert_eq!(click.on_up(LEFT, p, 10), ClickResult::Finished);
        // Too late.
        click.on_down(LEFT, p, 1000);
        assert_eq!(click.on_up(LEFT, p, 1010), ClickResult::Finished);
        // Too far.
        click.on_down(LEFT, p + Vec2::new(20.0, 0.0), 1100);
        assert_eq!(
            click.on_up(LEFT, p + Vec2::new(20.0, 0.0), 1110),
            ClickResult::Finished
        );
        // Close enough.
        click.on_down(LEFT, p + Vec2::new(21.0, 0.0), 1200);
        assert_eq!(
            click.on_up(LEFT, p + Vec2::new(21.0, 0.0), 1210),
            ClickResult::Double
        );
        // A third click starts a new sequence.
        click.on_down(LEFT, p + Vec2::new(21.0, 0.0), 1300);
        assert_eq!(
            click.on_up(LEFT, p + Vec2::new(21.0, 0.0), 1310),
            ClickResult::Finished
        );
    }

    #[test]
    fn abort_breaks_double_click_sequence() {
        let mut click = ClickState::new(LEFT);
        click.on_down(LEFT, Point::ZERO, 0);
        click.on_up(LEFT, Point::ZERO, 1);
        click.on_down(LEFT, Point::ZERO, 2);
        click.abort();
        click.on_down(LEFT, Point::ZERO, 3);
        assert_eq!(click.on_up(LEFT, Point::ZERO, 4), ClickResult::Finished);
    }

    #[test]
    fn custom_tolerances() {
        let mut click = ClickState::new(LEFT).with_double_click(50, 0.5);
        click.on_down(LEFT, Point::ZERO, 0);
        click.on_up(LEFT, Point::ZERO, 0);
        click.on_down(LEFT, Point::ZERO, 60);
        assert_eq!(click.on_up(LEFT, Point::ZERO, 60), ClickResult::Finished);
    }
}
