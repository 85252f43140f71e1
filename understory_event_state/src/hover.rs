// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper for flat collections: which single key is under the pointer.
//!
//! Feed the key currently under the pointer (or `None`) into
//! [`HoverState::update`]; it returns the [`HoverTransition`] describing what
//! was left and what was entered. Both sides typically need repainting, since
//! the highlight moves even though the content under it is unchanged.
//!
//! ```
//! use understory_event_state::hover::HoverState;
//!
//! let mut hover = HoverState::new();
//! let t = hover.update(Some(3));
//! assert_eq!((t.leave, t.enter), (None, Some(3)));
//!
//! let t = hover.update(Some(4));
//! assert_eq!((t.leave, t.enter), (Some(3), Some(4)));
//!
//! // No movement, no transition.
//! assert!(!hover.update(Some(4)).is_change());
//! ```

/// The result of a hover update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HoverTransition<K> {
    /// The key the pointer left, if any.
    pub leave: Option<K>,
    /// The key the pointer entered, if any.
    pub enter: Option<K>,
}

impl<K> HoverTransition<K> {
    /// Returns `true` if the hovered key changed.
    pub fn is_change(&self) -> bool {
        self.leave.is_some() || self.enter.is_some()
    }

    /// Iterates over the keys affected by this transition, left key first.
    pub fn affected(self) -> impl Iterator<Item = K> {
        self.leave.into_iter().chain(self.enter)
    }
}

/// Tracks the single hovered key in a flat collection.
#[derive(Clone, Debug, Default)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K: Copy + PartialEq> HoverState<K> {
    /// Creates a state with nothing hovered.
    #[must_use]
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The currently hovered key.
    #[must_use]
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Sets the hovered key, returning the transition.
    pub fn update(&mut self, next: Option<K>) -> HoverTransition<K> {
        if self.current == next {
            return HoverTransition {
                leave: None,
                enter: None,
            };
        }
        let leave = core::mem::replace(&mut self.current, next);
        HoverTransition { leave, enter: next }
    }

    /// Clears the hovered key, returning the key that was left.
    pub fn clear(&mut self) -> Option<K> {
        self.current.take()
    }
}
