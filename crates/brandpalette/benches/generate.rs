use brandpalette::mapper::TraitMapper;
use brandpalette::normalize::Normalizer;
use brandpalette::{BrandInput, Generator, Options};
use criterion::{criterion_group, criterion_main, Criterion};

pub fn run_benchmarks(c: &mut Criterion) {
    let input = BrandInput::new("bench")
        .with_traits(&["innovative", "approachable", "premium"])
        .with_tone(&["confident", "friendly"])
        .with_category("SaaS")
        .with_markets(&["US", "AU"])
        .with_keywords(&["automation", "reliability", "speed"]);
    let mapper = TraitMapper::disabled();

    let mut group = c.benchmark_group("palette-generation");

    group.bench_function("normalize", |b| {
        b.iter(|| Normalizer::new(&mapper).normalize(&input))
    });

    let light = Generator::new(input.clone())
        .with_options(Options::builder().include_dark_mode(false).build());
    group.bench_function("generate-light", |b| b.iter(|| light.generate()));

    let full = Generator::new(input);
    group.bench_function("generate-full", |b| b.iter(|| full.generate()));

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
