// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_dirty::DirtyIndices;

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

    fn gen_range_usize(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u32() as usize) % upper_exclusive
    }
}

fn marked(len: usize, marks: usize, seed: u64) -> DirtyIndices {
    let mut rng = Lcg::new(seed);
    let mut dirty = DirtyIndices::new();
    for _ in 0..marks {
        dirty.mark(rng.gen_range_usize(len));
    }
    dirty
}

fn bench_dirty(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_dirty");
    group.sample_size(50);

    for &(len, marks) in &[(10_000_usize, 4_usize), (10_000, 256), (100_000, 4_096)] {
        group.bench_function(format!("mark(len={len},marks={marks})"), |b| {
            b.iter_batched(
                || Lcg::new(0xD1A7_0000_0000_0001),
                |mut rng| {
                    let mut dirty = DirtyIndices::new();
                    for _ in 0..marks {
                        dirty.mark(rng.gen_range_usize(len));
                    }
                    black_box(dirty);
                },
                BatchSize::SmallInput,
            );
        });

        // A viewport's worth of rows, as probed once per buffer per frame.
        let dirty = marked(len, marks, 0xD1A7_0000_0000_0002);
        group.bench_function(format!("sorted_in_viewport(len={len},marks={marks})"), |b| {
            let mut rng = Lcg::new(0xD1A7_0000_0000_0003);
            b.iter(|| {
                let start = rng.gen_range_usize(len);
                black_box(dirty.sorted_in(start..start + 40));
            });
        });

        group.bench_function(format!("any_in_viewport(len={len},marks={marks})"), |b| {
            let mut rng = Lcg::new(0xD1A7_0000_0000_0004);
            b.iter(|| {
                let start = rng.gen_range_usize(len);
                black_box(dirty.any_in(start..start + 40));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dirty);
criterion_main!(benches);
