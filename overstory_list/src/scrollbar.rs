// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical scrollbar attached to the list's right edge.

use understory_imaging::{ImagingBackend, RectI};
use understory_virtual_list::ScrollbarGeometry;

use crate::ScrollbarStyle;

/// Scrollbar state: the geometry last computed by the list, and whether the
/// bar is shown.
///
/// The bar is visible exactly when there is something to scroll.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollBar {
    geometry: ScrollbarGeometry,
    visible: bool,
}

impl ScrollBar {
    /// Current geometry.
    #[must_use]
    pub fn geometry(&self) -> &ScrollbarGeometry {
        &self.geometry
    }

    /// Whether the bar is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replaces the geometry. Returns `true` if the bar was shown or hidden as a result.
    pub fn set_geometry(&mut self, geometry: ScrollbarGeometry) -> bool {
        let visible = geometry.is_scrollable();
        self.geometry = geometry;
        let toggled = visible != self.visible;
        self.visible = visible;
        toggled
    }

    /// Width the bar takes away from rows: the style width when shown, zero otherwise.
    #[must_use]
    pub fn reserved_width(&self, style: &ScrollbarStyle) -> i32 {
        if self.visible { style.width.max(0) } else { 0 }
    }

    /// The track along the right edge of `bounds`.
    #[must_use]
    pub fn track_rect(&self, bounds: RectI, style: &ScrollbarStyle) -> RectI {
        let width = style.width.clamp(0, bounds.width());
        RectI::new(bounds.x1 - width, bounds.y0, bounds.x1, bounds.y1)
    }

    /// The thumb within [`ScrollBar::track_rect`], or `None` while hidden.
    ///
    /// The thumb travels the track in proportion to the scroll position.
    #[must_use]
    pub fn thumb_rect(&self, bounds: RectI, style: &ScrollbarStyle) -> Option<RectI> {
        if !self.visible {
            return None;
        }
        let track = self.track_rect(bounds, style);
        let track_h = track.height();
        let size = self.geometry.thumb_size.clamp(0, track_h);
        let range = self.geometry.range.end - self.geometry.range.start;
        let travel = i64::from(track_h - size);
        let pos = i64::from(self.geometry.thumb_pos - self.geometry.range.start);
        let offset = if range > 0 {
            i32::try_from(travel * pos / i64::from(range)).unwrap_or(0)
        } else {
            0
        };
        Some(RectI::new(
            track.x0,
            track.y0 + offset,
            track.x1,
            track.y0 + offset + size,
        ))
    }

    /// Returns `true` if screen-space `(x, y)` is over the shown bar.
    #[must_use]
    pub fn contains(&self, bounds: RectI, style: &ScrollbarStyle, x: i32, y: i32) -> bool {
        self.visible && self.track_rect(bounds, style).contains(x, y)
    }

    /// Draws the track and thumb directly to the screen.
    pub fn draw(&self, backend: &mut dyn ImagingBackend, bounds: RectI, style: &ScrollbarStyle) {
        let Some(thumb) = self.thumb_rect(bounds, style) else {
            return;
        };
        backend.fill_rect(self.track_rect(bounds, style), style.track);
        if !thumb.is_empty() {
            backend.fill_rect(thumb, style.thumb);
        }
    }
}
