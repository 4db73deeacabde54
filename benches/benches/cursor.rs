// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use graft_graph::{Cursor, Graph, Passthrough, Store, View};
use graft_id::{Guid, Id};

/// A ring of `n` nodes, each pointing at the next through `next`.
fn ring(n: usize) -> (Graph, Id) {
    let next = Id::string("next");
    let nodes: Vec<Guid> = (0..n).map(|_| Guid::new()).collect();
    let mut store = Store::new();
    for (i, node) in nodes.iter().enumerate() {
        store.set(*node, next.clone(), Id::Guid(nodes[(i + 1) % n]));
    }
    let graph = Graph::new()
        .with_document(store)
        .with_root(Some(Id::Guid(nodes[0])));
    (graph, next)
}

fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("graft_cursor");
    group.sample_size(50);

    for &n in &[16_usize, 64, 256] {
        let (graph, next) = ring(n);
        // Walking once around the ring lands back on the root node.
        let around = (0..n).fold(Cursor::root(), |cursor, _| cursor.child(next.clone()));
        let short = (0..n - 1).fold(Cursor::root(), |cursor, _| cursor.child(next.clone()));

        group.bench_function(format!("resolve(depth={n})"), |b| {
            b.iter(|| {
                let mut overlay = Passthrough;
                let mut view = View::new(&graph, None, &mut overlay);
                black_box(around.resolve(&mut view));
            });
        });

        group.bench_function(format!("is_cycle_hit(depth={n})"), |b| {
            b.iter(|| {
                let mut overlay = Passthrough;
                let mut view = View::new(&graph, None, &mut overlay);
                black_box(around.is_cycle(&mut view));
            });
        });

        group.bench_function(format!("is_cycle_miss(depth={})", n - 1), |b| {
            b.iter(|| {
                let mut overlay = Passthrough;
                let mut view = View::new(&graph, None, &mut overlay);
                black_box(short.is_cycle(&mut view));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cursor);
criterion_main!(benches);
