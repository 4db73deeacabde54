// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `graft_copy` crate.
//!
//! Each test renders a small document with the generic renderer, copies the
//! structure at some cursor, and pastes it back into the same graph.

use graft_copy::{Endpoint, SerializedClosure, Token, enclosed_nodes, serialize_selection};
use graft_display::{DisplayTree, RenderOptions, Renderer, nav, render};
use graft_graph::{Access, Cursor, Graph, Passthrough, Store, Txn, View};
use graft_id::{Guid, Id};
use graft_spanning::SpanningTree;

const ALICE: Guid = Guid::from_u128(0xa11ce);
const BOB: Guid = Guid::from_u128(0xb0b);
const CAROL: Guid = Guid::from_u128(0xca201);
const PAIR: Guid = Guid::from_u128(0x9a12);

fn label(text: &str) -> Id {
    Id::string(text)
}

fn path(labels: &[&str]) -> Cursor {
    labels
        .iter()
        .fold(Cursor::root(), |cursor, l| cursor.child(label(l)))
}

fn render_tree(graph: &Graph, spanning: &SpanningTree<Id>) -> DisplayTree {
    let mut overlay = Passthrough;
    let mut view = View::new(graph, None, &mut overlay);
    render(&mut view, spanning, &RenderOptions::default(), Renderer::always_fail())
}

fn copy(graph: &Graph, spanning: &SpanningTree<Id>, cursor: &Cursor) -> Option<SerializedClosure> {
    let tree = render_tree(graph, spanning);
    let mut overlay = Passthrough;
    let mut view = View::new(graph, None, &mut overlay);
    serialize_selection(&mut view, &tree, cursor)
}

fn paste(graph: &mut Graph, closure: &SerializedClosure) -> Id {
    let mut selection = None;
    let mut overlay = Passthrough;
    let mut txn = Txn::new(graph, &mut selection, &mut overlay);
    closure
        .materialize(&mut txn)
        .unwrap()
        .expect("closure is not empty")
}

fn get(graph: &Graph, node: &Id, l: &str) -> Option<Id> {
    graph.lookup(node, &label(l)).map(|hit| hit.value.clone())
}

#[test]
fn shared_nodes_stay_shared() {
    let mut store = Store::new();
    store.set(ALICE, label("pair"), Id::Guid(PAIR));
    store.set(PAIR, label("left"), Id::Guid(BOB));
    store.set(PAIR, label("right"), Id::Guid(BOB));
    store.set(BOB, label("name"), Id::string("Bob"));
    let mut graph = Graph::new()
        .with_document(store)
        .with_root(Some(Id::Guid(ALICE)));

    let closure = copy(&graph, &SpanningTree::new(), &path(&["pair"])).unwrap();
    assert_eq!(closure.entries[0].token, Token(PAIR), "the root comes first");
    assert_eq!(closure.len(), 2);

    let pasted = paste(&mut graph, &closure);
    assert_ne!(pasted, Id::Guid(PAIR));
    let left = get(&graph, &pasted, "left").unwrap();
    let right = get(&graph, &pasted, "right").unwrap();
    assert_eq!(left, right, "one fresh node for both edges");
    assert_ne!(left, Id::Guid(BOB));
    assert_eq!(get(&graph, &left, "name"), Some(Id::string("Bob")));
    assert_eq!(
        get(&graph, &Id::Guid(ALICE), "pair"),
        Some(Id::Guid(PAIR)),
        "pasting does not touch the original"
    );
}

#[test]
fn collapsed_positions_are_referenced() {
    let mut store = Store::new();
    store.set(ALICE, label("child"), Id::Guid(BOB));
    store.set(BOB, label("child"), Id::Guid(CAROL));
    store.set(CAROL, label("name"), Id::string("Carol"));
    let mut graph = Graph::new()
        .with_document(store)
        .with_root(Some(Id::Guid(ALICE)));
    let mut spanning = SpanningTree::new();
    spanning.set_collapsed(path(&["child", "child"]).labels(), Some(true));

    let closure = copy(&graph, &spanning, &path(&["child"])).unwrap();
    assert_eq!(closure.len(), 1);
    assert_eq!(
        closure.entries[0].edges,
        vec![(Endpoint::Id(label("child")), Endpoint::Id(Id::Guid(CAROL)))]
    );

    let pasted = paste(&mut graph, &closure);
    assert_eq!(get(&graph, &pasted, "child"), Some(Id::Guid(CAROL)));
}

#[test]
fn the_owner_of_the_selected_edge_is_left_out() {
    let mut store = Store::new();
    store.set(ALICE, label("friend"), Id::Guid(BOB));
    store.set(BOB, label("friend"), Id::Guid(ALICE));
    let graph = Graph::new()
        .with_document(store)
        .with_root(Some(Id::Guid(ALICE)));

    let tree = render_tree(&graph, &SpanningTree::new());
    let mut overlay = Passthrough;
    let mut view = View::new(&graph, None, &mut overlay);
    let friend = nav::find_descend(&tree, tree.root().unwrap(), &path(&["friend"])).unwrap();
    let enclosed = enclosed_nodes(&mut view, &tree, friend);
    assert!(enclosed.contains(&BOB));
    assert!(!enclosed.contains(&ALICE), "Alice owns the selected edge");

    let root = tree.root().unwrap();
    let everything = enclosed_nodes(&mut view, &tree, root);
    assert!(everything.contains(&ALICE) && everything.contains(&BOB));
}

#[test]
fn literals_and_unrendered_cursors_copy_nothing() {
    let mut store = Store::new();
    store.set(ALICE, label("name"), Id::string("Alice"));
    let graph = Graph::new()
        .with_document(store)
        .with_root(Some(Id::Guid(ALICE)));
    let spanning = SpanningTree::new();

    assert!(copy(&graph, &spanning, &path(&["name"])).is_none(), "not a node");
    assert!(copy(&graph, &spanning, &path(&["missing", "deeper"])).is_none(), "not rendered");
    assert!(copy(&graph, &spanning, &Cursor::root()).is_some());
}

#[test]
fn closures_round_trip_through_json() {
    let mut store = Store::new();
    store.set(ALICE, label("pair"), Id::Guid(PAIR));
    store.set(PAIR, label("left"), Id::Guid(BOB));
    store.set(PAIR, label("count"), Id::number(2.0));
    let graph = Graph::new()
        .with_document(store)
        .with_root(Some(Id::Guid(ALICE)));

    let closure = copy(&graph, &SpanningTree::new(), &path(&["pair"])).unwrap();
    let json = closure.to_json().unwrap();
    assert!(json.starts_with("[{\"token\":\"new:"), "unexpected encoding: {json}");
    assert_eq!(SerializedClosure::from_json(&json).unwrap(), closure);
    assert!(SerializedClosure::from_json("[{\"token\":\"b0b\",\"edges\":[]}]").is_err());
}
