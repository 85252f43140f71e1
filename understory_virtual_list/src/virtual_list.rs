// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll controller over a [`FixedRows`] strip.

use core::ops::Range;

use crate::FixedRows;

/// Scrollbar range and thumb extents derived from a [`VirtualList`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollbarGeometry {
    /// Scroll range; `end` is the largest valid offset (inclusive).
    pub range: Range<i32>,
    /// Thumb position; equal to the current scroll offset.
    pub thumb_pos: i32,
    /// Thumb length in track pixels, zero for empty content.
    pub thumb_size: i32,
}

impl ScrollbarGeometry {
    /// Returns `true` if there is anything to scroll.
    ///
    /// Scrollbars are conventionally hidden when this is `false`.
    #[must_use]
    pub fn is_scrollable(&self) -> bool {
        self.range.end > self.range.start
    }
}

/// Scroll state for a uniform row strip seen through a fixed-height viewport.
///
/// The scroll offset is always kept within `[0, max_scroll()]`, where
/// `max_scroll = max(0, content_height - viewport_height)`. Changing the
/// strip or the viewport re-clamps the offset.
#[derive(Clone, Debug, Default)]
pub struct VirtualList {
    rows: FixedRows,
    scroll_offset: i32,
    viewport_height: i32,
}

impl VirtualList {
    /// Creates a controller at scroll offset zero.
    #[must_use]
    pub fn new(rows: FixedRows, viewport_height: i32) -> Self {
        Self {
            rows,
            scroll_offset: 0,
            viewport_height: viewport_height.max(0),
        }
    }

    /// The underlying row strip.
    #[must_use]
    pub fn rows(&self) -> &FixedRows {
        &self.rows
    }

    /// Replaces the row count, re-clamping the scroll offset.
    pub fn set_len(&mut self, len: usize) {
        self.rows.set_len(len);
        self.clamp();
    }

    /// Replaces the row height, re-clamping the scroll offset.
    pub fn set_item_height(&mut self, item_height: i32) {
        self.rows.set_item_height(item_height);
        self.clamp();
    }

    /// Viewport height in pixels.
    #[must_use]
    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    /// Sets the viewport height, re-clamping the scroll offset.
    pub fn set_viewport_height(&mut self, height: i32) {
        self.viewport_height = height.max(0);
        self.clamp();
    }

    /// Current scroll offset in content pixels.
    #[must_use]
    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Largest valid scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> i32 {
        (self.rows.content_height() - self.viewport_height).max(0)
    }

    /// Clamps an arbitrary offset into the valid scroll range.
    #[must_use]
    pub fn clamp_offset(&self, offset: i32) -> i32 {
        offset.clamp(0, self.max_scroll())
    }

    /// Sets the scroll offset, clamped into `[0, max_scroll()]`.
    ///
    /// Returns `true` if the offset changed.
    pub fn set_scroll_offset(&mut self, offset: i32) -> bool {
        let clamped = self.clamp_offset(offset);
        let changed = clamped != self.scroll_offset;
        self.scroll_offset = clamped;
        changed
    }

    /// Scrolls by `delta` pixels, clamped into `[0, max_scroll()]`.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        self.set_scroll_offset(self.scroll_offset.saturating_add(delta))
    }

    /// The delta that would bring row `index` fully into view.
    ///
    /// If the row's bottom is below the viewport the delta scrolls down by the
    /// overflow; otherwise, if its top is above the viewport, the delta
    /// scrolls up by the deficit. Only one direction is ever corrected, and
    /// rows already fully visible yield zero.
    #[must_use]
    pub fn scroll_into_view_delta(&self, index: usize) -> i32 {
        let span = self.rows.row_span(index);
        let top = span.start - self.scroll_offset;
        let bottom = span.end - self.scroll_offset;
        if bottom > self.viewport_height {
            bottom - self.viewport_height
        } else if top < 0 {
            top
        } else {
            0
        }
    }

    /// Scrolls just enough to bring row `index` fully into view.
    ///
    /// Returns `true` if the offset changed.
    pub fn scroll_to_item(&mut self, index: usize) -> bool {
        let delta = self.scroll_into_view_delta(index);
        delta != 0 && self.scroll_by(delta)
    }

    /// Content-space span covered by the viewport.
    #[must_use]
    pub fn visible_span(&self) -> Range<i32> {
        self.scroll_offset..self.scroll_offset + self.viewport_height
    }

    /// Rows intersecting the viewport.
    #[must_use]
    pub fn visible_rows(&self) -> Range<usize> {
        self.rows.rows_intersecting(&self.visible_span())
    }

    /// Number of rows that fit entirely in the viewport, capped at the row count.
    #[must_use]
    pub fn visible_row_count(&self) -> usize {
        if self.rows.item_height() <= 0 {
            return 0;
        }
        let fit = usize::try_from(self.viewport_height / self.rows.item_height()).unwrap_or(0);
        fit.min(self.rows.len())
    }

    /// Row under viewport-space `y`, if any.
    #[must_use]
    pub fn index_at_viewport_y(&self, y: i32) -> Option<usize> {
        if y < 0 {
            return None;
        }
        self.rows.index_at(y.saturating_add(self.scroll_offset))
    }

    /// Scrollbar geometry for a track of `track_height` pixels.
    ///
    /// The thumb length is `track_height * viewport_height / content_height`;
    /// with the track spanning the viewport this is proportional to
    /// `viewport_height² / content_height`.
    #[must_use]
    pub fn scrollbar_geometry(&self, track_height: i32) -> ScrollbarGeometry {
        let content = self.rows.content_height();
        let thumb_size = if content > 0 {
            let size = i64::from(track_height) * i64::from(self.viewport_height) / i64::from(content);
            i32::try_from(size).unwrap_or(i32::MAX)
        } else {
            0
        };
        ScrollbarGeometry {
            range: 0..self.max_scroll(),
            thumb_pos: self.scroll_offset,
            thumb_size,
        }
    }

    fn clamp(&mut self) {
        self.scroll_offset = self.clamp_offset(self.scroll_offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> VirtualList {
        VirtualList::new(FixedRows::new(50, 20), 100)
    }

    #[test]
    fn scroll_is_clamped_for_any_sequence() {
        let mut l = list();
        for delta in [-10, 300, 5000, -1, -20000, 899, 2, i32::MAX, i32::MIN] {
            l.scroll_by(delta);
            assert!(l.scroll_offset() >= 0);
            assert!(l.scroll_offset() <= l.max_scroll());
        }
    }

    #[test]
    fn scroll_by_reports_change() {
        let mut l = list();
        assert!(!l.scroll_by(-5));
        assert!(l.scroll_by(40));
        assert!(!l.scroll_by(0));
        assert!(l.set_scroll_offset(10_000));
        assert_eq!(l.scroll_offset(), 900);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut l = VirtualList::new(FixedRows::new(3, 20), 100);
        assert_eq!(l.max_scroll(), 0);
        assert!(!l.scroll_by(50));
        assert!(!l.scrollbar_geometry(100).is_scrollable());
    }

    #[test]
    fn scroll_to_item_fits_row_in_viewport() {
        let mut l = list();
        for index in [0, 4, 5, 17, 49, 3, 0, 25] {
            l.scroll_to_item(index);
            let span = l.rows().row_span(index);
            let top = span.start - l.scroll_offset();
            let bottom = span.end - l.scroll_offset();
            assert!(top >= 0, "row {index} top {top}");
            assert!(bottom <= l.viewport_height(), "row {index} bottom {bottom}");
        }
    }

    #[test]
    fn scroll_to_item_corrects_one_direction() {
        let mut l = list();
        l.set_scroll_offset(200);
        // Above the viewport: scroll up by the deficit.
        assert_eq!(l.scroll_into_view_delta(8), -40);
        // Below: scroll down by the overflow.
        assert_eq!(l.scroll_into_view_delta(15), 20);
        // Already visible.
        assert_eq!(l.scroll_into_view_delta(12), 0);
        assert!(!l.scroll_to_item(12));
    }

    #[test]
    fn viewport_change_reclamps() {
        let mut l = list();
        l.set_scroll_offset(900);
        l.set_viewport_height(400);
        assert_eq!(l.scroll_offset(), 600);
        l.set_len(2);
        assert_eq!(l.scroll_offset(), 0);
    }

    #[test]
    fn visible_rows_and_hit_testing() {
        let mut l = list();
        l.set_scroll_offset(40);
        assert_eq!(l.visible_rows(), 2..7);
        assert_eq!(l.visible_row_count(), 5);
        assert_eq!(l.index_at_viewport_y(0), Some(2));
        assert_eq!(l.index_at_viewport_y(99), Some(6));
        assert_eq!(l.index_at_viewport_y(-1), None);
    }

    #[test]
    fn zero_item_height_degrades() {
        let l = VirtualList::new(FixedRows::new(50, 0), 100);
        assert_eq!(l.visible_rows(), 0..0);
        assert_eq!(l.visible_row_count(), 0);
        assert_eq!(l.index_at_viewport_y(10), None);
        assert_eq!(l.scrollbar_geometry(100).thumb_size, 0);
    }

    #[test]
    fn thumb_is_proportional() {
        let mut l = list();
        l.set_scroll_offset(300);
        let geom = l.scrollbar_geometry(100);
        assert_eq!(geom.range, 0..900);
        assert_eq!(geom.thumb_pos, 300);
        // 100 * 100 / 1000
        assert_eq!(geom.thumb_size, 10);
        assert!(geom.is_scrollable());
    }
}
