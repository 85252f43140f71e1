// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform-height row strip.

use core::ops::Range;

/// A strip of `len` rows that all share `item_height` pixels.
///
/// Row `i` occupies the content-space span
/// `[i * item_height, (i + 1) * item_height)`. Heights are expected to be
/// non-negative; a zero height collapses the strip, and every query then
/// reports empty results.
///
/// Content coordinates saturate at `i32::MAX` for absurdly long strips.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FixedRows {
    len: usize,
    item_height: i32,
}

impl FixedRows {
    /// Creates a strip of `len` rows of `item_height` pixels each.
    ///
    /// Negative heights are treated as zero.
    #[must_use]
    pub fn new(len: usize, item_height: i32) -> Self {
        Self {
            len,
            item_height: item_height.max(0),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sets the number of rows.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Height shared by every row.
    #[must_use]
    pub fn item_height(&self) -> i32 {
        self.item_height
    }

    /// Sets the height shared by every row. Negative heights are treated as zero.
    pub fn set_item_height(&mut self, item_height: i32) {
        self.item_height = item_height.max(0);
    }

    /// Total content height of all rows.
    #[must_use]
    pub fn content_height(&self) -> i32 {
        self.row_top(self.len)
    }

    /// Content-space top edge of row `index`.
    ///
    /// `index` may equal `len` (the bottom edge of the strip) or exceed it.
    #[must_use]
    pub fn row_top(&self, index: usize) -> i32 {
        let top = i64::try_from(index)
            .unwrap_or(i64::MAX)
            .saturating_mul(i64::from(self.item_height));
        i32::try_from(top).unwrap_or(i32::MAX)
    }

    /// Content-space span of row `index`.
    #[must_use]
    pub fn row_span(&self, index: usize) -> Range<i32> {
        let top = self.row_top(index);
        top..top.saturating_add(self.item_height)
    }

    /// Rows whose span intersects the content-space `span`, clamped to `0..len`.
    ///
    /// Returns an empty range for an empty span or a zero item height.
    #[must_use]
    pub fn rows_intersecting(&self, span: &Range<i32>) -> Range<usize> {
        if self.item_height <= 0 || span.is_empty() || span.end <= 0 {
            return 0..0;
        }
        let h = i64::from(self.item_height);
        let start = i64::from(span.start.max(0)) / h;
        // Ceiling division, so a row starting exactly at `span.end` is excluded.
        let end = (i64::from(span.end) + h - 1) / h;
        let start = usize::try_from(start).unwrap_or(usize::MAX).min(self.len);
        let end = usize::try_from(end).unwrap_or(usize::MAX).min(self.len);
        start..end.max(start)
    }

    /// Index of the row containing content-space `y`, if any.
    ///
    /// Returns `None` for a zero item height, negative `y`, or `y` past the
    /// last row.
    #[must_use]
    pub fn index_at(&self, y: i32) -> Option<usize> {
        if y < 0 || self.item_height <= 0 {
            return None;
        }
        let index = usize::try_from(y / self.item_height).ok()?;
        (index < self.len).then_some(index)
    }
}
