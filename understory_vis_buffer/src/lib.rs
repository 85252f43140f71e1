// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_vis_buffer --heading-base-level=0

//! Understory Vis Buffer: off-screen row caches for scrolling lists.
//!
//! A list that repaints every visible row on every frame wastes most of its
//! time redrawing pixels that merely moved. This crate keeps a small pool of
//! fixed-size render targets ("visibility buffers") that each cache the
//! rendered pixels of a contiguous vertical span of content. Scrolling then
//! only paints the rows that became newly exposed, and hover or selection
//! changes only repaint the rows that were marked dirty.
//!
//! # Model
//!
//! - The pool holds [`BUFFER_COUNT`] buffers of height
//!   `H = ceil(viewport_height / 2)`, so two buffers always cover one
//!   viewport.
//! - Each [`VisBuffer`] has an `origin` (content-space y of its top edge) and
//!   a `valid` span, the part of `[origin, origin + H)` that holds correct
//!   pixels.
//! - The buffers always form one contiguous tiling of `3H` content pixels.
//!   Reconciliation keeps it that way: buffers that scrolled out of view are
//!   moved to whichever end of the tiling needs coverage, and unused ones are
//!   parked right after it.
//!
//! # A draw pass
//!
//! 1. [`VisBufferPool::ensure`] (re)allocates targets when the viewport size
//!    changes.
//! 2. [`VisBufferPool::reconcile`] relocates buffers so their union covers the
//!    visible span, and reports each buffer's newly exposed span.
//! 3. [`VisBufferPool::plan`] turns that, plus a set of dirty rows, into the
//!    rows each buffer must repaint.
//! 4. [`VisBufferPool::paint`] executes the plan through an
//!    [`ImagingBackend`](understory_imaging::ImagingBackend) and marks every
//!    buffer valid for exactly its visible part.
//! 5. [`VisBufferPool::compose`] copies the buffers to the screen, clipped to
//!    the viewport.
//!
//! [`VisBufferPool::update`] runs steps 2 through 4.
//!
//! ```rust
//! use peniko::Color;
//! use understory_dirty::DirtyIndices;
//! use understory_imaging::RectI;
//! use understory_imaging_ref::RefBackend;
//! use understory_vis_buffer::VisBufferPool;
//! use understory_virtual_list::FixedRows;
//!
//! let mut backend = RefBackend::default();
//! let mut pool = VisBufferPool::new();
//! let rows = FixedRows::new(50, 20);
//! let mut dirty = DirtyIndices::new();
//!
//! pool.ensure(&mut backend, 200, 100);
//! assert_eq!(pool.buffer_height(), 50);
//!
//! let mut painted = Vec::new();
//! pool.update(&mut backend, 0..100, &rows, &dirty, Color::BLACK, 200, |_, row, _| {
//!     painted.push(row);
//! });
//! assert_eq!(painted, [0, 1, 2, 2, 3, 4]);
//!
//! // Nothing changed: the second pass paints nothing.
//! painted.clear();
//! pool.update(&mut backend, 0..100, &rows, &dirty, Color::BLACK, 200, |_, row, _| {
//!     painted.push(row);
//! });
//! assert!(painted.is_empty());
//!
//! // Only the dirty row is repainted.
//! dirty.mark(3);
//! pool.update(&mut backend, 0..100, &rows, &dirty, Color::BLACK, 200, |_, row, _| {
//!     painted.push(row);
//! });
//! assert_eq!(painted, [3]);
//!
//! pool.compose(&mut backend, 0, RectI::from_origin_size(0, 0, 200, 100));
//! pool.release(&mut backend);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod buffer;
mod paint;
mod pool;

pub use buffer::VisBuffer;
pub use paint::{BufferPaint, PassStats};
pub use pool::{BUFFER_COUNT, Reconciliation, VisBufferPool, buffer_height_for};
