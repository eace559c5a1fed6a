use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;
use swort::prelude::*;

fn bench_first_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("First Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    // Few distinct keys: grouping does most of the work
    let few_keys: Vec<(u32, u64)> = (0..count)
        .map(|_| (rng.random_range(0..64), rng.random()))
        .collect();

    // Mostly distinct keys
    let many_keys: Vec<(u32, u64)> = (0..count).map(|_| (rng.random(), rng.random())).collect();

    for (name, input) in [("few keys", &few_keys), ("many keys", &many_keys)] {
        group.bench_function(format!("swort asc ({})", name), |b| {
            b.iter_batched(
                || Slice::new(input, |p: &(u32, u64)| p.0),
                |slice| black_box(slice.sort_by_asc().len()),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("swort desc ({})", name), |b| {
            b.iter_batched(
                || Slice::new(input, |p: &(u32, u64)| p.0),
                |slice| black_box(slice.sort_by_desc().len()),
                BatchSize::SmallInput,
            )
        });

        // Std Sort (Stable)
        group.bench_function(format!("slice::sort_by_key ({})", name), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| data.sort_by_key(|p| p.0),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_cached_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cached Lookup");

    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..5_000)).collect();
    let needles: Vec<u32> = (0..256).map(|_| rng.random_range(0..6_000)).collect();

    let slice = Slice::new(&input, |v: &u32| *v);
    slice.prepare();

    group.bench_function("search_from_original", |b| {
        b.iter(|| {
            needles
                .iter()
                .map(|p| slice.search_from_original(black_box(p)).unwrap_or(0))
                .sum::<usize>()
        })
    });

    group.bench_function("sort_by_desc().search", |b| {
        b.iter(|| {
            let desc = slice.sort_by_desc();
            needles
                .iter()
                .map(|p| desc.search(black_box(p)).unwrap_or(0))
                .sum::<usize>()
        })
    });

    // Linear scan baseline
    group.bench_function("iter().position", |b| {
        b.iter(|| {
            needles
                .iter()
                .map(|p| input.iter().position(|v| v == black_box(p)).unwrap_or(0))
                .sum::<usize>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_first_sort, bench_cached_lookup);
criterion_main!(benches);
