// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use headway_content::{bundled_deck, bundled_topology};
use headway_nav::{NavController, NavGraph, NavKey};

fn bench_build(c: &mut Criterion) {
    let deck = bundled_deck();
    let topology = bundled_topology();

    c.bench_function("nav_graph/build_bundled", |b| {
        b.iter(|| NavGraph::build(black_box(&deck), black_box(&topology)))
    });
}

fn bench_walk(c: &mut Criterion) {
    let deck = bundled_deck();
    let topology = bundled_topology();
    let graph = NavGraph::build(&deck, &topology);
    let first = deck.slides()[0].id.clone();

    c.bench_function("nav_graph/walk_to_end", |b| {
        b.iter(|| {
            let mut current = first.as_str();
            let mut steps = 0_u32;
            while let Some(next) = graph.next_of(black_box(current)) {
                current = next;
                steps += 1;
            }
            black_box(steps)
        })
    });

    let mut controller = NavController::new(&deck, &topology);
    controller.navigate_to_slide(&first);
    controller.take_requests();

    c.bench_function("nav_controller/keyboard_walk", |b| {
        b.iter_batched(
            || controller.clone(),
            |mut nav| {
                for _ in 0..deck.slide_count() {
                    nav.on_key(NavKey::ArrowRight);
                }
                black_box(nav.take_requests().len())
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_build, bench_walk);
criterion_main!(benches);
