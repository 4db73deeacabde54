// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use graft_filter::Filter;

/// Names shaped like a schema's: a few words in mixed case.
fn names(n: usize) -> Vec<String> {
    const WORDS: [&str; 8] = ["list", "Person", "age", "Render", "field", "Type", "ctor", "name"];
    (0..n)
        .map(|i| {
            let a = WORDS[i % WORDS.len()];
            let b = WORDS[(i / WORDS.len()) % WORDS.len()];
            format!("{a}{b}{i}")
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("graft_filter");
    group.sample_size(50);
    let filter = Filter::default_chain();

    for &n in &[100_usize, 1_000, 10_000] {
        let items = names(n);
        for needle in ["", "per", "ListAge", "pgn"] {
            group.bench_with_input(
                BenchmarkId::new(format!("default_chain(n={n})"), format!("{needle:?}")),
                &needle,
                |b, needle| {
                    b.iter(|| {
                        let filtered = filter.apply(items.iter(), |s| s.as_str(), needle);
                        black_box(filtered.accepted.len());
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
