use criterion::{Criterion, criterion_group, criterion_main};
use trustpage_engine::{default_formatter, render_inline};
mod common;

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.sample_size(10);

    let small = common::generate_post(5);
    let large = common::generate_post(500);

    group.bench_function("format_small_post", |b| {
        b.iter(|| std::hint::black_box(default_formatter().format(std::hint::black_box(&small))));
    });

    group.bench_function("format_large_post", |b| {
        b.iter(|| std::hint::black_box(default_formatter().format(std::hint::black_box(&large))));
    });

    group.finish();
}

fn bench_inline(c: &mut Criterion) {
    let mut group = c.benchmark_group("inline");
    group.sample_size(10);

    let line = common::generate_inline_heavy_line(200);
    group.bench_function("render_inline", |b| {
        b.iter(|| std::hint::black_box(render_inline(std::hint::black_box(&line))));
    });

    group.finish();
}

criterion_group!(benches, bench_format, bench_inline);
criterion_main!(benches);
