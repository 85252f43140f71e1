// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Dirty: index-keyed invalidation tracking.
//!
//! This crate provides [`DirtyIndices`], a set of item indices whose rendered
//! appearance is stale and must be recomputed before the next paint. It is
//! the per-item half of a two-level invalidation scheme used by cached
//! renderers:
//!
//! - **Per-item invalidation**: mark individual indices (for example the rows
//!   entered and exited by a hover transition). Cached pixels elsewhere stay
//!   valid.
//! - **Whole-surface invalidation**: owned by the cache itself (for example a
//!   buffer pool resetting every valid range). When that happens the
//!   per-item set is simply cleared, since everything will be redrawn anyway.
//!
//! Marks have set semantics, so repeated marks of the same index are cheap and
//! idempotent. A generation counter increments on every mutation and can be
//! used to detect whether anything changed since a previous observation.
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_dirty::DirtyIndices;
//!
//! let mut dirty = DirtyIndices::new();
//!
//! // Hover moved from row 3 to row 4: both need repainting.
//! dirty.mark(3);
//! dirty.mark(4);
//! dirty.mark(4);
//! assert_eq!(dirty.len(), 2);
//!
//! assert!(dirty.any_in(0..4));
//! assert!(!dirty.any_in(5..10));
//! assert_eq!(dirty.sorted_in(0..10).as_slice(), &[3, 4]);
//!
//! // After a successful paint pass:
//! dirty.clear();
//! assert!(dirty.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod set;

pub use set::DirtyIndices;
