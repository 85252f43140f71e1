// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use understory_imaging::TargetId;
use understory_virtual_list::span;

/// One off-screen buffer caching a vertical span of list content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisBuffer {
    pub(crate) target: Option<TargetId>,
    pub(crate) origin: i32,
    pub(crate) valid: Range<i32>,
}

impl VisBuffer {
    /// The render target backing this buffer, if allocated.
    #[must_use]
    pub fn target(&self) -> Option<TargetId> {
        self.target
    }

    /// Content-space y of the buffer's top edge.
    #[must_use]
    pub fn origin(&self) -> i32 {
        self.origin
    }

    /// Content-space span whose pixels in this buffer are known to be correct.
    ///
    /// Always contained in [`VisBuffer::span`].
    #[must_use]
    pub fn valid(&self) -> Range<i32> {
        self.valid.clone()
    }

    /// Content-space span the buffer covers, given the pool's buffer height.
    #[must_use]
    pub fn span(&self, height: i32) -> Range<i32> {
        self.origin..self.origin.saturating_add(height)
    }

    pub(crate) fn relocate(&mut self, origin: i32) {
        self.origin = origin;
        self.valid = span::EMPTY;
    }
}
