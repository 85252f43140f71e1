// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input delivered to a list and what the list reports back.

use std::fmt;
use std::rc::Rc;

use kurbo::Point;
use understory_event_state::click::MouseButton;

use crate::ListItem;

/// Scroll wheel delta.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WheelDelta {
    /// Notches of a line-based wheel; positive values scroll towards the top.
    Lines(f64),
    /// Pixel-precise deltas from trackpads and momentum scrolling; positive
    /// values scroll towards the top.
    Pixels(f64),
}

/// Commands addressed to the list by the surrounding UI.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ListCommand {
    /// Colors or metrics changed; everything must be repainted.
    ThemeChanged,
    /// The scrollbar was dragged to a new absolute position.
    ScrollMoved(i32),
}

/// An input event in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ListEvent {
    /// The pointer moved.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// A button was pressed.
    PointerDown {
        /// Button pressed.
        button: MouseButton,
        /// Pointer position.
        pos: Point,
        /// Monotonic timestamp in milliseconds.
        time_ms: u64,
    },
    /// A button was released.
    PointerUp {
        /// Button released.
        button: MouseButton,
        /// Pointer position.
        pos: Point,
        /// Monotonic timestamp in milliseconds.
        time_ms: u64,
    },
    /// The pointer left the window or capture was lost.
    PointerCancel,
    /// The wheel turned with the pointer at `pos`.
    Wheel {
        /// Pointer position.
        pos: Point,
        /// Scroll amount.
        delta: WheelDelta,
    },
    /// A command from the surrounding UI.
    Command(ListCommand),
}

/// Something the host application should react to.
#[derive(Clone)]
pub enum ListAction {
    /// A row was clicked (or double-clicked).
    ItemClicked {
        /// Row index.
        index: usize,
        /// The clicked item.
        item: Rc<dyn ListItem>,
    },
}

impl fmt::Debug for ListAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemClicked { index, .. } => f
                .debug_struct("ItemClicked")
                .field("index", index)
                .finish_non_exhaustive(),
        }
    }
}

/// Result of [`ListWidget::handle_event`](crate::ListWidget::handle_event).
#[derive(Clone, Debug, Default)]
pub struct EventOutcome {
    /// Whether the list consumed the event; unhandled events should
    /// continue to the list's parent.
    pub handled: bool,
    /// An action for the host, if the event produced one.
    pub action: Option<ListAction>,
}

impl EventOutcome {
    pub(crate) fn handled(handled: bool) -> Self {
        Self {
            handled,
            action: None,
        }
    }
}
