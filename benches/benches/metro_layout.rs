// Copyright 2026 the Headway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;

use headway_content::{
    Deck, Resource, ResourceKind, Section, SectionLink, Slide, SlideKind, Topology, Track,
    bundled_deck, bundled_topology,
};
use headway_layout::{expand_stop, generate_metro_layout};

/// A linear deck of `sections` sections with `slides_per` slides each,
/// every fourth slide carrying two featured resources.
fn chain_deck(sections: usize, slides_per: usize) -> (Deck, Topology) {
    let mut section_list = Vec::with_capacity(sections);
    let mut slides = Vec::new();
    let mut resources = Vec::new();
    let mut links = Vec::with_capacity(sections.saturating_sub(1));

    for s in 0..sections {
        let section_id = format!("section-{s}");
        section_list.push(Section::new(
            section_id.clone(),
            format!("Section {s}"),
            Track::General,
        ));
        if s > 0 {
            links.push(SectionLink::main(format!("section-{}", s - 1), &section_id));
        }
        for n in 0..slides_per {
            let slide_id = format!("slide-{s}-{n}");
            slides.push(Slide::new(
                slide_id.clone(),
                section_id.clone(),
                SlideKind::Content,
                format!("Slide {s}.{n}"),
            ));
            if n % 4 == 0 {
                for r in 0..2 {
                    resources.push(
                        Resource::new(
                            format!("res-{s}-{n}-{r}"),
                            slide_id.clone(),
                            ResourceKind::Article,
                            format!("Resource {r}"),
                            "https://example.com",
                        )
                        .featured(),
                    );
                }
            }
        }
    }

    let deck = Deck::new(section_list, slides, resources, Vec::new());
    (deck, Topology::new(links))
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_metro_layout");

    let deck = bundled_deck();
    let topology = bundled_topology();
    group.bench_function("bundled", |b| {
        b.iter(|| generate_metro_layout(black_box(&deck), black_box(&topology)))
    });

    for sections in [8_usize, 32] {
        let (deck, topology) = chain_deck(sections, 8);
        group.bench_function(BenchmarkId::new("chain", format!("{sections}x8")), |b| {
            b.iter(|| generate_metro_layout(black_box(&deck), black_box(&topology)))
        });
    }

    group.finish();
}

fn bench_expand(c: &mut Criterion) {
    let deck = bundled_deck();
    let layout = generate_metro_layout(&deck, &bundled_topology());
    let origin = layout
        .stop_for_slide("slide-11")
        .map(|stop| stop.position)
        .unwrap_or(Point::ZERO);

    c.bench_function("expand_stop/bundled_slide_11", |b| {
        b.iter(|| expand_stop(black_box(&deck), black_box("slide-11"), black_box(origin)))
    });
}

criterion_group!(benches, bench_generate, bench_expand);
criterion_main!(benches);
