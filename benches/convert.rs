use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use tinct::{Color, ColorSpace};

fn parse(c: &mut Criterion) {
    c.bench_function("parse_hex", |b| {
        b.iter(|| black_box("#ff7f50").parse::<Color>())
    });
}

fn triples(c: &mut Criterion) {
    let coral = Color::from_24bit(0xff, 0x7f, 0x50);

    let mut group = c.benchmark_group("triple");
    for space in [
        ColorSpace::Lab,
        ColorSpace::Lch,
        ColorSpace::Hsl,
        ColorSpace::Hsluv,
    ] {
        group.bench_function(space.to_string(), |b| {
            b.iter(|| black_box(&coral).triple(space))
        });
    }
    group.finish();
}

fn metrics(c: &mut Criterion) {
    let coral = Color::from_24bit(0xff, 0x7f, 0x50);
    let white = Color::new(0xffff, 0xffff, 0xffff);

    c.bench_function("contrast_ratio", |b| {
        b.iter(|| black_box(&coral).contrast_ratio(black_box(&white)))
    });
    c.bench_function("distance", |b| {
        b.iter(|| black_box(&coral).distance(black_box(&white)))
    });
    c.bench_function("tint_ratio", |b| {
        b.iter(|| black_box(&coral).tint_ratio(black_box(&white), 4.5))
    });
}

criterion_group!(benches, parse, triples, metrics);
criterion_main!(benches);
