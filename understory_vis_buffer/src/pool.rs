// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Buffer allocation and reconciliation against the visible span.

use core::ops::Range;

use smallvec::SmallVec;
use understory_imaging::{ResourceBackend, TargetDesc};
use understory_virtual_list::span;

use crate::VisBuffer;

/// Number of buffers in a pool.
///
/// Two buffers of half the viewport height cover any visible span; the third
/// is kept ahead so a scroll in either direction usually finds it ready.
pub const BUFFER_COUNT: usize = 3;

/// Buffer height for a viewport of `viewport_height` pixels: half, rounded up.
#[must_use]
pub fn buffer_height_for(viewport_height: i32) -> i32 {
    if viewport_height <= 0 {
        0
    } else {
        viewport_height / 2 + viewport_height % 2
    }
}

/// Result of [`VisBufferPool::reconcile`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// The visible span that was reconciled.
    pub visible: Range<i32>,
    /// Per buffer, the content-space span that is visible but not valid and
    /// therefore must be repainted. Empty when nothing is exposed.
    pub invalid: [Range<i32>; BUFFER_COUNT],
    /// Buffers that were moved to a new origin, in the order they were moved.
    pub relocated: SmallVec<[usize; BUFFER_COUNT]>,
}

/// A pool of [`BUFFER_COUNT`] off-screen buffers for one scrolling viewport.
///
/// The pool owns render targets created through a [`ResourceBackend`] and
/// must give them back with [`VisBufferPool::release`] before it is dropped.
/// Dropping a pool that still holds targets leaks them and logs a warning.
#[derive(Debug, Default)]
pub struct VisBufferPool {
    pub(crate) buffers: [VisBuffer; BUFFER_COUNT],
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl VisBufferPool {
    /// Creates an empty, unallocated pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of every buffer in pixels.
    #[must_use]
    pub fn buffer_width(&self) -> i32 {
        self.width
    }

    /// Height `H` of every buffer in pixels.
    #[must_use]
    pub fn buffer_height(&self) -> i32 {
        self.height
    }

    /// The buffers, in slot order.
    #[must_use]
    pub fn buffers(&self) -> &[VisBuffer; BUFFER_COUNT] {
        &self.buffers
    }

    /// Returns `true` if every buffer has a render target.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.buffers.iter().all(|b| b.target.is_some())
    }

    /// Content-space span covered by buffer `index`.
    #[must_use]
    pub fn span(&self, index: usize) -> Range<i32> {
        self.buffers[index].span(self.height)
    }

    /// Makes sure buffers exist for a `width` x `viewport_height` viewport.
    ///
    /// When the derived buffer size differs from the current one, all old
    /// targets are destroyed before new ones are created, origins are reset
    /// to `0, H, 2H` and nothing is valid. A viewport with no area leaves the
    /// pool unallocated.
    ///
    /// Returns `true` if the buffers were (re)allocated or released.
    pub fn ensure<B: ResourceBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        width: i32,
        viewport_height: i32,
    ) -> bool {
        let width = width.max(0);
        let height = buffer_height_for(viewport_height);
        let has_area = width > 0 && height > 0;
        if width == self.width && height == self.height && self.is_allocated() == has_area {
            return false;
        }

        self.release(backend);
        self.width = width;
        self.height = height;
        if !has_area {
            log::debug!("visibility buffers released for empty viewport");
            return true;
        }

        let desc = TargetDesc::new(width.unsigned_abs(), height.unsigned_abs());
        let mut origin = 0;
        for buffer in &mut self.buffers {
            buffer.target = Some(backend.create_target(desc));
            buffer.relocate(origin);
            origin += height;
        }
        log::debug!("allocated {BUFFER_COUNT} visibility buffers of {width}x{height}");
        true
    }

    /// Destroys every render target the pool holds and forgets all content.
    pub fn release<B: ResourceBackend + ?Sized>(&mut self, backend: &mut B) {
        for buffer in &mut self.buffers {
            if let Some(target) = buffer.target.take() {
                backend.destroy_target(target);
            }
            buffer.valid = span::EMPTY;
        }
    }

    /// Forgets the content of every buffer, so the next pass repaints all of
    /// the visible span.
    pub fn invalidate_all(&mut self) {
        for buffer in &mut self.buffers {
            buffer.valid = span::EMPTY;
        }
    }

    /// Moves buffers so that together they cover `visible`, and reports
    /// which part of each buffer is exposed and needs painting.
    ///
    /// Buffers whose span overlaps `visible` keep their origin and content.
    /// The rest become available; if every buffer is available, the pool is
    /// re-tiled from `visible.start`. Otherwise available buffers are placed
    /// directly above or below the covered span until it contains `visible`,
    /// and any left over are parked below it.
    ///
    /// # Panics
    ///
    /// Panics if `visible` is taller than two buffers, since three buffers
    /// can then no longer be guaranteed to cover it.
    pub fn reconcile(&mut self, visible: Range<i32>) -> Reconciliation {
        let h = self.height;
        let mut out = Reconciliation {
            visible: visible.clone(),
            ..Reconciliation::default()
        };
        if h <= 0 || visible.is_empty() {
            return out;
        }
        assert!(
            i64::from(visible.end) - i64::from(visible.start) <= 2 * i64::from(h),
            "visible span {visible:?} is taller than two buffers of height {h}"
        );

        let mut available: SmallVec<[usize; BUFFER_COUNT]> = SmallVec::new();
        let mut good = span::EMPTY;
        let mut reusable = 0;
        for (i, buffer) in self.buffers.iter_mut().enumerate() {
            let covered = buffer.span(h);
            if span::overlaps(&covered, &visible) {
                good = span::hull(&good, &covered);
                reusable += 1;
            } else {
                buffer.valid = span::EMPTY;
                available.push(i);
            }
        }
        debug_assert_eq!(
            good.end - good.start,
            reusable * h,
            "reusable buffers are not contiguous"
        );

        if available.len() == BUFFER_COUNT {
            let mut origin = visible.start;
            for (i, buffer) in self.buffers.iter_mut().enumerate() {
                buffer.relocate(origin);
                out.relocated.push(i);
                origin = origin.saturating_add(h);
            }
        } else {
            while visible.start < good.start {
                let Some(i) = available.pop() else {
                    panic!("visibility buffers exhausted extending above {good:?}");
                };
                good.start -= h;
                self.buffers[i].relocate(good.start);
                out.relocated.push(i);
            }
            while visible.end > good.end {
                let Some(i) = available.pop() else {
                    panic!("visibility buffers exhausted extending below {good:?}");
                };
                self.buffers[i].relocate(good.end);
                good.end += h;
                out.relocated.push(i);
            }
            // Leftovers already next to the covered span stay put; stranded
            // ones are parked below it so the tiling stays contiguous.
            while !available.is_empty() {
                let adjacent = available.iter().position(|&i| {
                    let origin = self.buffers[i].origin;
                    origin == good.end || origin.saturating_add(h) == good.start
                });
                if let Some(pos) = adjacent {
                    let origin = self.buffers[available.swap_remove(pos)].origin;
                    if origin == good.end {
                        good.end += h;
                    } else {
                        good.start = origin;
                    }
                } else if let Some(i) = available.pop() {
                    self.buffers[i].relocate(good.end);
                    good.end += h;
                    out.relocated.push(i);
                }
            }
        }

        for (i, buffer) in self.buffers.iter().enumerate() {
            out.invalid[i] = exposed(&buffer.span(h), &buffer.valid, &visible);
        }
        log::trace!(
            "reconciled {visible:?}: origins {:?}, invalid {:?}, relocated {:?}",
            self.buffers.each_ref().map(|b| b.origin),
            out.invalid,
            out.relocated
        );
        out
    }

    /// Records that every buffer now holds correct pixels for its visible part.
    pub(crate) fn mark_painted(&mut self, visible: &Range<i32>) {
        let h = self.height;
        for buffer in &mut self.buffers {
            buffer.valid = span::intersect(visible, &buffer.span(h));
        }
    }
}

impl Drop for VisBufferPool {
    fn drop(&mut self) {
        let live = self.buffers.iter().filter(|b| b.target.is_some()).count();
        if live > 0 {
            log::warn!("visibility buffer pool dropped with {live} live render targets");
        }
    }
}

/// The visible part of `covered` lying outside `valid`.
///
/// When both sides of `valid` are exposed the result spans both, including
/// the valid middle.
fn exposed(covered: &Range<i32>, valid: &Range<i32>, visible: &Range<i32>) -> Range<i32> {
    let region = span::intersect(visible, covered);
    if valid.is_empty() {
        return region;
    }
    let before = span::intersect(&(i32::MIN..valid.start), &region);
    let after = span::intersect(&(valid.end..i32::MAX), &region);
    span::hull(&before, &after)
}
