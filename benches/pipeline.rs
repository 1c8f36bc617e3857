//! Benchmarks for the arthash pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arthash::{digest, generate, scale_pixels, Selection, ShapeKind, Size};

// -- Derivation benchmarks --

fn bench_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("derivation");

    group.bench_function("digest", |b| b.iter(|| digest(black_box(b"HAZNOODLi"))));

    group.bench_function("selection", |b| {
        b.iter(|| Selection::from_seed(black_box("HAZNOODLi")))
    });

    group.finish();
}

// -- Mask benchmarks --

fn bench_masks(c: &mut Criterion) {
    let mut group = c.benchmark_group("masks");

    group.bench_function("template_star", |b| {
        b.iter(|| black_box(ShapeKind::Star).mask())
    });

    let star = ShapeKind::Star.mask();
    group.bench_function("flip_horizontal", |b| {
        b.iter(|| black_box(&star).flip_horizontal())
    });

    group.finish();
}

// -- End-to-end benchmarks --

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    group.bench_function("generate_small", |b| {
        b.iter(|| generate(black_box("HAZNOODLi"), Size::Small))
    });

    group.bench_function("generate_large", |b| {
        b.iter(|| generate(black_box("HAZNOODLi"), Size::Large))
    });

    group.finish();
}

// -- Scaling benchmarks --

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    let base = generate("HAZNOODLi", Size::Small);

    group.bench_function("scale_4x", |b| {
        b.iter(|| scale_pixels(black_box(base.pixels()), 4))
    });

    group.finish();
}

criterion_group!(benches, bench_derivation, bench_masks, bench_generation, bench_scaling);
criterion_main!(benches);
