// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=overstory_list --heading-base-level=0

//! Overstory List: a scrollable list widget with incremental rendering.
//!
//! [`ListWidget`] shows a vertical list of uniform-height [`ListItem`]s with
//! a scrollbar, pointer hover, click reporting and wheel scrolling. Rendered
//! rows are cached in off-screen buffers (see `understory_vis_buffer`), so a
//! frame only paints rows that scrolled into view or were invalidated.
//!
//! The list is driven entirely by its host:
//!
//! - Geometry via [`ListWidget::set_bounds`].
//! - Input via [`ListWidget::handle_event`], which returns an
//!   [`EventOutcome`] that may carry a [`ListAction`].
//! - Drawing via [`ListWidget::draw`] on any
//!   [`ImagingBackend`](understory_imaging::ImagingBackend), typically when
//!   [`ListWidget::take_refresh`] returns `true`.
//! - Cleanup via [`ListWidget::teardown`].
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use overstory_list::{ItemState, ListAction, ListEvent, ListItem, ListWidget};
//! use peniko::Color;
//! use understory_event_state::click::MouseButton;
//! use understory_imaging::{ImagingBackend, RectI};
//! use understory_imaging_ref::RefBackend;
//!
//! struct Label;
//!
//! impl ListItem for Label {
//!     fn draw(&self, backend: &mut dyn ImagingBackend, rect: RectI, state: &ItemState) {
//!         let color = if state.is_hover { Color::WHITE } else { Color::from_rgb8(0x80, 0x80, 0x80) };
//!         backend.fill_rect(RectI::new(rect.x0 + 4, rect.y0 + 4, rect.x1 - 4, rect.y1 - 4), color);
//!     }
//! }
//!
//! let mut list = ListWidget::new(20);
//! for _ in 0..50 {
//!     list.push_item(Rc::new(Label));
//! }
//! list.set_bounds(RectI::from_origin_size(0, 0, 200, 100));
//!
//! let mut backend = RefBackend::default();
//! list.draw(&mut backend);
//!
//! let pos = Point::new(30.0, 45.0);
//! list.handle_event(ListEvent::PointerMove { pos });
//! list.handle_event(ListEvent::PointerDown { button: MouseButton::Primary, pos, time_ms: 0 });
//! let outcome = list.handle_event(ListEvent::PointerUp { button: MouseButton::Primary, pos, time_ms: 90 });
//! assert!(matches!(outcome.action, Some(ListAction::ItemClicked { index: 2, .. })));
//!
//! list.teardown(&mut backend);
//! assert_eq!(backend.live_targets(), 0);
//! ```

mod config;
mod event;
mod item;
mod scrollbar;
mod widget;

pub use config::{ListConfig, ScrollbarStyle, WheelConfig};
pub use event::{EventOutcome, ListAction, ListCommand, ListEvent, WheelDelta};
pub use item::{ItemState, ListItem};
pub use scrollbar::ScrollBar;
pub use widget::ListWidget;
