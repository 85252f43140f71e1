// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use overstory_list::{ItemState, ListItem, ListWidget};
use peniko::Color;
use understory_dirty::DirtyIndices;
use understory_imaging::{
    DrawOp, ImagingBackend, RectI, ResourceBackend, StateOp, TargetDesc, TargetId,
};
use understory_vis_buffer::VisBufferPool;
use understory_virtual_list::FixedRows;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// A scroll step in `[-span, span]`.
    fn step(&mut self, span: i32) -> i32 {
        (self.next_u32() % (2 * span as u32 + 1)) as i32 - span
    }
}

/// Counts operations instead of rasterizing.
#[derive(Default)]
struct NullBackend {
    next: u32,
    ops: u64,
}

impl ResourceBackend for NullBackend {
    fn create_target(&mut self, _: TargetDesc) -> TargetId {
        self.next += 1;
        TargetId(self.next)
    }

    fn destroy_target(&mut self, _: TargetId) {}
}

impl ImagingBackend for NullBackend {
    fn state(&mut self, _: StateOp) {
        self.ops += 1;
    }

    fn draw(&mut self, _: DrawOp) {
        self.ops += 1;
    }
}

struct Bar;

impl ListItem for Bar {
    fn draw(&self, backend: &mut dyn ImagingBackend, rect: RectI, state: &ItemState) {
        let color = if state.is_hover {
            Color::WHITE
        } else {
            Color::from_rgb8(0x90, 0x90, 0x90)
        };
        backend.fill_rect(RectI::new(rect.x0 + 4, rect.y0 + 2, rect.x1 - 4, rect.y1 - 2), color);
    }
}

fn bench_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_vis_buffer");
    let rows = FixedRows::new(100_000, 20);
    let dirty = DirtyIndices::new();

    for viewport in [200_i32, 800, 2_000] {
        group.bench_with_input(
            BenchmarkId::new("smooth_scroll_pass", viewport),
            &viewport,
            |b, &viewport| {
                let mut backend = NullBackend::default();
                let mut pool = VisBufferPool::new();
                pool.ensure(&mut backend, 400, viewport);
                let mut rng = Lcg::new(0x5C20_0000_0000_0001);
                let mut offset = 50_000_i32;
                b.iter(|| {
                    offset = (offset + rng.step(viewport / 4)).clamp(0, rows.content_height() - viewport);
                    let stats = pool.update(
                        &mut backend,
                        offset..offset + viewport,
                        &rows,
                        &dirty,
                        Color::BLACK,
                        400,
                        |_, row, _| {
                            black_box(row);
                        },
                    );
                    black_box(stats);
                });
                pool.release(&mut backend);
            },
        );

        group.bench_with_input(
            BenchmarkId::new("jump_scroll_pass", viewport),
            &viewport,
            |b, &viewport| {
                let mut backend = NullBackend::default();
                let mut pool = VisBufferPool::new();
                pool.ensure(&mut backend, 400, viewport);
                let mut rng = Lcg::new(0x5C20_0000_0000_0002);
                b.iter(|| {
                    let offset = (rng.next_u32() % 1_000_000) as i32;
                    let recon = pool.reconcile(offset..offset + viewport);
                    black_box(pool.plan(&recon, &rows, &dirty));
                });
                pool.release(&mut backend);
            },
        );
    }

    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("overstory_list");

    let mut list = ListWidget::new(24);
    for _ in 0..10_000 {
        list.push_item(Rc::new(Bar));
    }
    list.set_bounds(RectI::from_origin_size(0, 0, 480, 720));
    let mut backend = NullBackend::default();
    list.draw(&mut backend);

    group.bench_function("idle_frame", |b| {
        b.iter(|| {
            list.draw(&mut backend);
            black_box(backend.ops);
        });
    });

    group.bench_function("wheel_frame", |b| {
        let mut down = true;
        b.iter(|| {
            if !list.scroll_by(if down { 72 } else { -72 }) {
                down = !down;
            }
            list.draw(&mut backend);
            black_box(backend.ops);
        });
    });

    group.bench_function("hover_sweep_frame", |b| {
        let mut index = 0;
        b.iter(|| {
            index = (index + 1) % list.visible_row_count().max(1);
            list.invalidate_item(list.visible_rows().start + index);
            list.draw(&mut backend);
            black_box(backend.ops);
        });
    });

    list.teardown(&mut backend);
    group.finish();
}

criterion_group!(benches, bench_pool, bench_list);
criterion_main!(benches);
