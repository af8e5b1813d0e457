use criterion::{black_box, criterion_group, criterion_main, Criterion};
use name_score::{normalize::normalize_names, pipeline::compute_total, ranking::rank, scoring::total_score};

fn create_test_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!(" Name-{} {} ", i, ["mary", "PATRICIA", "linda", "Barbara"][i % 4]))
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let names_1k = create_test_names(1_000);
    let names_50k = create_test_names(50_000);

    c.bench_function("pipeline_1k", |b| {
        b.iter(|| black_box(compute_total(&names_1k)));
    });

    c.bench_function("pipeline_50k", |b| {
        b.iter(|| black_box(compute_total(&names_50k)));
    });

    let ranked_50k = rank(normalize_names(&names_50k));
    c.bench_function("score_only_50k", |b| {
        b.iter(|| black_box(total_score(&ranked_50k)));
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
