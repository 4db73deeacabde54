// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `graft_spanning` crate.
//!
//! Choices are keyed by owned label paths, the way an editor keys them by the
//! labels of a cursor.

use graft_spanning::SpanningTree;

fn path(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn lookups_borrow_owned_paths() {
    let mut tree = SpanningTree::<String>::new();
    tree.set_collapsed(path(&["friend", "friend"]), Some(true));

    let key = path(&["friend", "friend"]);
    assert_eq!(tree.collapsed_at(&key), Some(true));
    let nested = tree.child("friend").and_then(|t| t.child("friend"));
    assert_eq!(nested.and_then(SpanningTree::collapsed), Some(true));
}

#[test]
fn overriding_a_choice_replaces_it() {
    let mut tree = SpanningTree::<String>::new();
    tree.set_collapsed(path(&["a"]), Some(true));
    tree.set_collapsed(path(&["a"]), Some(false));
    assert_eq!(tree.collapsed_at(&path(&["a"])), Some(false));
    assert_eq!(tree.len(), 1);
}

#[test]
fn deep_choice_survives_clearing_its_ancestor() {
    let mut tree = SpanningTree::<String>::new();
    tree.set_collapsed(path(&["a"]), Some(true));
    tree.set_collapsed(path(&["a", "b"]), Some(false));
    tree.set_collapsed(path(&["a"]), None);
    assert_eq!(tree.collapsed_at(&path(&["a"])), None);
    assert_eq!(tree.collapsed_at(&path(&["a", "b"])), Some(false));

    tree.clear();
    assert!(tree.is_empty());
}
