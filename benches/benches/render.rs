// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use graft_display::{RenderOptions, library_renderer, render};
use graft_graph::{Graph, Passthrough, Store, View};
use graft_id::{Guid, Id};
use graft_schema::{SchemaBuilder, core_library, ids, write_list};
use graft_spanning::SpanningTree;

const PERSON: Guid = Guid::from_u128(0x9e5);
const FRIEND: Guid = Guid::from_u128(0xf1e);
const NUMBERS: Guid = Guid::from_u128(0x111);
const LIST_OF_NUMBER: Guid = Guid::from_u128(0x1157);
const PEOPLE: Guid = Guid::from_u128(0x9e0);

/// A chain of `people` persons, each with `numbers` numbers, the last one
/// befriending the first.
fn document(people: usize, numbers: usize) -> Graph {
    let schema = SchemaBuilder::new()
        .field(FRIEND, "friend", PERSON)
        .list_type(LIST_OF_NUMBER, ids::ty::NUMBER)
        .field(NUMBERS, "numbers", LIST_OF_NUMBER)
        .ctor(PERSON, "Person", &[FRIEND, NUMBERS])
        .module(PEOPLE, "people", &[PERSON], &[])
        .build("people", Some(Id::Guid(PEOPLE)));

    let nodes: Vec<Guid> = (0..people).map(|_| Guid::new()).collect();
    let mut store = Store::new();
    for (i, node) in nodes.iter().enumerate() {
        store.set(*node, Id::Guid(ids::field::CTOR), Id::Guid(PERSON));
        store.set(*node, Id::Guid(ids::field::NAME), Id::string(format!("p{i}")));
        store.set(*node, Id::Guid(FRIEND), Id::Guid(nodes[(i + 1) % people]));
        let list = write_list(&mut store, (0..numbers).map(|n| Id::number(n as f64)));
        store.set(*node, Id::Guid(NUMBERS), list);
    }
    Graph::new()
        .with_library(Rc::new(core_library()))
        .with_library(Rc::new(schema))
        .with_document(store)
        .with_root(Some(Id::Guid(nodes[0])))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("graft_render");
    group.sample_size(30);
    let options = RenderOptions::default();
    let spanning = SpanningTree::new();

    for &(people, numbers) in &[(4_usize, 8_usize), (16, 8), (16, 64), (64, 16)] {
        let graph = document(people, numbers);

        group.bench_function(format!("default_render(people={people},numbers={numbers})"), |b| {
            b.iter_batched(
                || Passthrough,
                |mut overlay| {
                    let mut view = View::new(&graph, None, &mut overlay);
                    let renderer = library_renderer(&mut view);
                    let tree = render(&mut view, &spanning, &options, renderer);
                    black_box(tree.len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
