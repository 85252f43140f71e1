// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint planning, execution and composition.

use core::ops::Range;

use peniko::Color;
use smallvec::SmallVec;
use understory_dirty::DirtyIndices;
use understory_imaging::{ImagingBackend, ImagingBackendExt, RectI, TargetId};
use understory_virtual_list::{FixedRows, span};

use crate::{BUFFER_COUNT, Reconciliation, VisBufferPool};

/// The work one buffer needs in a pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferPaint {
    /// Buffer slot.
    pub index: usize,
    /// Render target to draw into.
    pub target: TargetId,
    /// Content-space y of the target's top edge.
    pub origin: i32,
    /// Whether the whole target is cleared to the background first.
    pub clear: bool,
    /// Rows to repaint, ascending and without duplicates.
    pub rows: SmallVec<[usize; 16]>,
}

/// Counters describing one paint pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Buffers that were redirected into.
    pub buffers_touched: usize,
    /// Buffers cleared in full.
    pub buffers_cleared: usize,
    /// Row paints across all buffers. A row straddling two buffers counts twice.
    pub rows_painted: usize,
}

impl VisBufferPool {
    /// Builds the paint work for each buffer after [`VisBufferPool::reconcile`].
    ///
    /// A buffer is included when its span intersects the visible span and it
    /// has an exposed span or a dirty row in that intersection. Buffers with
    /// no valid content are cleared first. Only rows intersecting the
    /// buffer's visible part are ever listed.
    ///
    /// # Panics
    ///
    /// Panics if a buffer that needs painting has no render target.
    #[must_use]
    pub fn plan(
        &self,
        recon: &Reconciliation,
        rows: &FixedRows,
        dirty: &DirtyIndices,
    ) -> SmallVec<[BufferPaint; BUFFER_COUNT]> {
        let mut plan = SmallVec::new();
        for (index, buffer) in self.buffers.iter().enumerate() {
            let region = span::intersect(&recon.visible, &buffer.span(self.height));
            if region.is_empty() {
                continue;
            }
            let mut repaint = dirty.sorted_in(rows.rows_intersecting(&region));
            repaint.extend(rows.rows_intersecting(&recon.invalid[index]));
            repaint.sort_unstable();
            repaint.dedup();
            let clear = buffer.valid.is_empty();
            if !clear && repaint.is_empty() {
                continue;
            }
            let Some(target) = buffer.target else {
                panic!("visibility buffer {index} painted before allocation");
            };
            plan.push(BufferPaint {
                index,
                target,
                origin: buffer.origin,
                clear,
                rows: repaint,
            });
        }
        plan
    }

    /// Executes `plan` into the buffers' targets.
    ///
    /// Each listed row first has its band filled with `background` across the
    /// full buffer width, then `paint_row` draws it into a rectangle of
    /// `row_width` x `item_height` in target coordinates.
    pub fn paint(
        &mut self,
        backend: &mut dyn ImagingBackend,
        plan: &[BufferPaint],
        rows: &FixedRows,
        background: Color,
        row_width: i32,
        mut paint_row: impl FnMut(&mut dyn ImagingBackend, usize, RectI),
    ) -> PassStats {
        let mut stats = PassStats::default();
        let (width, height) = (self.width, self.height);
        let item_height = rows.item_height();
        for work in plan {
            log::trace!(
                "painting buffer {} at {}: clear {}, rows {:?}",
                work.index,
                work.origin,
                work.clear,
                work.rows
            );
            backend.with_target(work.target, |b| {
                if work.clear {
                    b.fill_rect(RectI::from_origin_size(0, 0, width, height), background);
                    stats.buffers_cleared += 1;
                }
                for &row in &work.rows {
                    let top = rows.row_top(row) - work.origin;
                    b.fill_rect(RectI::from_origin_size(0, top, width, item_height), background);
                    paint_row(b, row, RectI::from_origin_size(0, top, row_width, item_height));
                }
            });
            stats.buffers_touched += 1;
            stats.rows_painted += work.rows.len();
        }
        stats
    }

    /// Reconciles, plans and paints in one go, then marks every buffer valid
    /// for exactly its visible part.
    ///
    /// Callers clear `dirty` afterwards; the pool does not own it.
    pub fn update(
        &mut self,
        backend: &mut dyn ImagingBackend,
        visible: Range<i32>,
        rows: &FixedRows,
        dirty: &DirtyIndices,
        background: Color,
        row_width: i32,
        paint_row: impl FnMut(&mut dyn ImagingBackend, usize, RectI),
    ) -> PassStats {
        if !self.is_allocated() {
            return PassStats::default();
        }
        let recon = self.reconcile(visible);
        let plan = self.plan(&recon, rows, dirty);
        let stats = self.paint(backend, &plan, rows, background, row_width, paint_row);
        self.mark_painted(&recon.visible);
        stats
    }

    /// Copies the buffers onto the screen.
    ///
    /// `viewport` is the screen rectangle showing content starting at
    /// `scroll_offset`. Buffer `i` lands at
    /// `(viewport.x0, viewport.y0 - scroll_offset + origin_i)`, and drawing is
    /// clipped to `viewport`. Buffers entirely outside the viewport are
    /// skipped.
    pub fn compose(&self, backend: &mut dyn ImagingBackend, scroll_offset: i32, viewport: RectI) {
        let (width, height) = (self.width, self.height);
        backend.with_clip(viewport, |b| {
            for buffer in &self.buffers {
                let Some(target) = buffer.target else {
                    continue;
                };
                let dst = RectI::from_origin_size(
                    viewport.x0,
                    viewport.y0 - scroll_offset + buffer.origin,
                    width,
                    height,
                );
                if !dst.intersect(viewport).is_empty() {
                    b.copy_target(target, dst);
                }
            }
        });
    }
}
