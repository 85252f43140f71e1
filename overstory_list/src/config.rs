// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Appearance and input tuning for [`ListWidget`](crate::ListWidget).

use peniko::Color;

/// Scrollbar appearance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollbarStyle {
    /// Width of the track along the list's right edge, in pixels.
    pub width: i32,
    /// Track color.
    pub track: Color,
    /// Thumb color.
    pub thumb: Color,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            width: 12,
            track: Color::from_rgb8(0x1c, 0x1c, 0x1e),
            thumb: Color::from_rgb8(0x5a, 0x5a, 0x60),
        }
    }
}

/// How wheel input is converted into scroll distance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelConfig {
    /// Rows scrolled per line-based wheel notch.
    pub rows_per_notch: i32,
    /// Device pixels per logical pixel for pixel-precise (trackpad) deltas.
    pub pixel_ratio: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            rows_per_notch: 3,
            pixel_ratio: 1.0,
        }
    }
}

/// Complete list configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ListConfig {
    /// Background behind and between items; also used to clear buffers.
    pub background: Color,
    /// Scrollbar appearance.
    pub scrollbar: ScrollbarStyle,
    /// Wheel tuning.
    pub wheel: WheelConfig,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(0x24, 0x24, 0x28),
            scrollbar: ScrollbarStyle::default(),
            wheel: WheelConfig::default(),
        }
    }
}
