// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List items and the per-row state handed to them while drawing.

use understory_imaging::{ImagingBackend, RectI};

/// Read-only list state relevant to the row being drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemState {
    /// Index of the row.
    pub index: usize,
    /// Whether the pointer is over this row.
    pub is_hover: bool,
    /// Whether this row is hovered while the primary button is held down
    /// inside the list.
    pub is_pressed: bool,
}

/// An entry in a [`ListWidget`](crate::ListWidget).
///
/// Items are shared handles (`Rc<dyn ListItem>`); the list keeps one
/// reference per entry and drops it when cleared.
pub trait ListItem {
    /// Draws the item into `rect`.
    ///
    /// The row band has already been filled with the list background.
    /// `rect` is in the coordinate space of whatever target is active on
    /// `backend`, which is usually an off-screen buffer rather than the
    /// screen.
    fn draw(&self, backend: &mut dyn ImagingBackend, rect: RectI, state: &ItemState);

    /// Separators are drawn like other items but can never be hovered or clicked.
    fn is_separator(&self) -> bool {
        false
    }

    /// Whether the item is part of the application's selection.
    fn is_selected(&self) -> bool {
        false
    }
}
