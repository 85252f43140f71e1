// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: Common event state managers for UI interactions.
//!
//! This crate provides small, focused state machines for common UI interactions
//! that require stateful tracking across multiple events:
//!
//! - [`hover`]: Track which single key of a flat collection (a list row, a
//!   grid cell) is under the pointer and report leave/enter transitions.
//! - [`click`]: Follow one mouse button through press, drag, release or abort,
//!   including double-click recognition.
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any event routing or spatial query system
//!
//! The crate does not assume any particular UI framework or event system.
//! Callers hit-test on their own and feed the results in; the managers
//! produce transitions that callers interpret (for example by invalidating
//! the rows involved).
//!
//! ## Usage Patterns
//!
//! ### Hover Tracking
//!
//! ```rust
//! use understory_event_state::hover::HoverState;
//!
//! let mut hover = HoverState::new();
//! let t = hover.update(Some(2_usize));
//! assert_eq!(t.enter, Some(2));
//!
//! let t = hover.update(None);
//! assert_eq!(t.leave, Some(2));
//! ```
//!
//! ### Click Gestures
//!
//! ```rust
//! # #[cfg(feature = "click")]
//! # fn example() {
//! use kurbo::Point;
//! use understory_event_state::click::{ClickResult, ClickState, MouseButton};
//!
//! let mut click = ClickState::new(MouseButton::Primary);
//! click.on_down(MouseButton::Primary, Point::new(10.0, 20.0), 1000);
//! let result = click.on_up(MouseButton::Primary, Point::new(12.0, 21.0), 1050);
//! assert_eq!(result, ClickResult::Finished);
//! # }
//! ```
//!
//! ## Features
//!
//! - `click`: Enable click gesture recognition (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

#[cfg(feature = "click")]
pub mod click;

pub mod hover;
