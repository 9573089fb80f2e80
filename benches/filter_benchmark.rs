//! Filtering benchmarks: full scans versus cached query lookups.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use pucy::matcher::{Matcher, SubstringMatcher};
use pucy::view_state::FilterCache;

const NUM_LINES: usize = 100_000;

/// Lines shaped like a `find` listing, so matches are spread unevenly.
fn generate_lines() -> Vec<String> {
    let dirs = ["src", "tests", "docs", "target/debug", "vendor/Lib"];
    let names = ["main", "session", "matcher", "cache", "README", "config"];

    (0..NUM_LINES)
        .map(|i| {
            let dir = dirs[i % dirs.len()];
            let name = names[(i / dirs.len()) % names.len()];
            format!("./{}/{}_{:06}.rs", dir, name, i)
        })
        .collect()
}

fn benchmark_filter(c: &mut Criterion) {
    let lines = generate_lines();

    c.bench_function("match_line_two_tokens", |b| {
        let matcher = SubstringMatcher;
        b.iter(|| {
            let matches = matcher.match_line(
                black_box("./vendor/Lib/Session_Matcher_004242.rs"),
                black_box("session matcher"),
            );
            black_box(matches)
        })
    });

    c.bench_function("filter_cold_common_term", |b| {
        b.iter_batched(
            || FilterCache::new(lines.clone()),
            |mut cache| black_box(cache.filtered_view(black_box("src"))),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("filter_cold_no_match", |b| {
        b.iter_batched(
            || FilterCache::new(lines.clone()),
            |mut cache| black_box(cache.filtered_view(black_box("xyznonexistent"))),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("filter_cached_common_term", |b| {
        let mut cache = FilterCache::new(lines.clone());
        cache.filtered_view("src");
        b.iter(|| black_box(cache.filtered_view(black_box("src"))))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(10));
    targets = benchmark_filter
}

criterion_main!(benches);
