// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use glam::Vec3;
use understory_dwell::frame::{CursorPositions, run_frame};
use understory_dwell::{CursorType, InteractionSettings, ItemState, MenuItem, arbiter};

#[derive(Clone, Copy, Debug)]
struct Entry;

impl MenuItem for Entry {
    fn is_enabled(&self) -> bool {
        true
    }
    fn allow_selection(&self) -> bool {
        true
    }
    fn is_sticky_selected(&self) -> bool {
        false
    }
    fn select(&mut self) {}
    fn deselect_sticky_selections(&mut self) {}
}

// A flat grid of spherical buttons, `n` per side, 5 cm apart.
fn gen_grid_items(n: usize) -> Vec<ItemState<Entry>> {
    let settings = InteractionSettings::default();
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let center = Vec3::new(x as f32 * 0.05, y as f32 * 0.05, -0.4);
            out.push(ItemState::with_distance_field(
                Entry,
                settings,
                move |p: Vec3| (p.distance(center) - 0.015).max(0.0),
            ));
        }
    }
    out
}

fn hand_cursors(t: f32) -> CursorPositions {
    let mut c = CursorPositions::splat(None);
    for (i, cursor) in CursorType::ALL.into_iter().enumerate() {
        if cursor == CursorType::Look {
            continue;
        }
        let phase = t + i as f32 * 0.37;
        c[cursor] = Some(Vec3::new(
            0.25 + 0.2 * phase.sin(),
            0.25 + 0.2 * phase.cos(),
            -0.4 + 0.01 * (phase * 3.0).sin(),
        ));
    }
    c
}

fn bench_run_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_frame");
    for n in [4_usize, 10, 20] {
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("grid_{n}x{n}"), |b| {
            b.iter_batched(
                || gen_grid_items(n),
                |mut items| {
                    for frame in 0..60_u64 {
                        let cursors = hand_cursors(frame as f32 * 0.05);
                        let now = Duration::from_millis(frame * 11);
                        let report = run_frame(&mut items, &cursors, now);
                        let _ = black_box(report);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_assign_nearest(c: &mut Criterion) {
    let mut items = gen_grid_items(20);
    let cursors = hand_cursors(0.0);
    for state in items.iter_mut() {
        for (cursor, position) in cursors.iter() {
            state
                .update_with_cursor(cursor, *position)
                .expect("distance field set");
        }
    }
    c.bench_function("assign_nearest_400_items_all_cursors", |b| {
        b.iter(|| {
            for cursor in CursorType::ALL {
                black_box(arbiter::assign_nearest(&mut items, cursor));
            }
        });
    });
}

criterion_group!(benches, bench_run_frame, bench_assign_nearest);
criterion_main!(benches);
