// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_list --heading-base-level=0

//! Understory Virtual List: scroll and row geometry for dense, uniform strips.
//!
//! This crate provides a small, renderer-agnostic core for a vertical strip of
//! items indexed `0..len` that all share one integer pixel height. It is the
//! geometry half of a list widget; it knows nothing about drawing or events.
//!
//! The core concepts are:
//!
//! - [`FixedRows`]: the strip itself. Maps item indices to content-space row
//!   spans and back, and finds the rows intersecting a content span.
//! - [`VirtualList`]: a controller that wraps [`FixedRows`] with a scroll
//!   offset and viewport height. It clamps scrolling into
//!   `[0, max(0, content_height - viewport_height)]`, computes index-based
//!   scroll corrections, and derives [`ScrollbarGeometry`].
//! - [`span`]: helpers for half-open `Range<i32>` spans in content pixels
//!   (intersection, hull, overlap).
//!
//! All coordinates are integer pixels. Content space starts at `0` at the top
//! of item `0`; viewport space starts at `0` at the top of the visible area,
//! so `viewport_y = content_y - scroll_offset`.
//!
//! A zero item height or a zero viewport degrades gracefully: visible ranges
//! are empty and hit tests find nothing.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_virtual_list::{FixedRows, VirtualList};
//!
//! // 50 items, each 20 pixels tall, in a 100 pixel viewport.
//! let mut list = VirtualList::new(FixedRows::new(50, 20), 100);
//! assert_eq!(list.max_scroll(), 900);
//!
//! // Scrolling is clamped.
//! list.scroll_by(-30);
//! assert_eq!(list.scroll_offset(), 0);
//! list.scroll_by(40);
//! assert_eq!(list.visible_span(), 40..140);
//! assert_eq!(list.visible_rows(), 2..7);
//!
//! // Bring item 10 fully into view.
//! list.scroll_to_item(10);
//! assert_eq!(list.scroll_offset(), 120);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod fixed;
pub mod span;
mod virtual_list;

pub use fixed::FixedRows;
pub use virtual_list::{ScrollbarGeometry, VirtualList};
