// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Half-open content-space spans.
//!
//! Spans are plain `Range<i32>` values. Any range with `start >= end` is
//! empty; helpers here never assume a canonical empty representation.

use core::ops::Range;

/// The canonical empty span.
pub const EMPTY: Range<i32> = 0..0;

/// Returns the overlap of two spans, or [`EMPTY`] if they do not overlap.
#[inline]
pub fn intersect(a: &Range<i32>, b: &Range<i32>) -> Range<i32> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    if start < end { start..end } else { EMPTY }
}

/// Returns the smallest span containing both spans.
///
/// Empty inputs are ignored, so the hull of an empty span and `b` is `b`.
#[inline]
pub fn hull(a: &Range<i32>, b: &Range<i32>) -> Range<i32> {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => EMPTY,
        (true, false) => b.clone(),
        (false, true) => a.clone(),
        (false, false) => a.start.min(b.start)..a.end.max(b.end),
    }
}

/// Returns `true` if the spans share at least one pixel.
#[inline]
pub fn overlaps(a: &Range<i32>, b: &Range<i32>) -> bool {
    a.start < b.end && b.start < a.end && !a.is_empty() && !b.is_empty()
}

/// Returns `true` if `inner` lies entirely within `outer`.
///
/// An empty span is contained in every span.
#[inline]
pub fn contains(outer: &Range<i32>, inner: &Range<i32>) -> bool {
    inner.is_empty() || (outer.start <= inner.start && inner.end <= outer.end)
}
