// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use graft_graph::{Access, Source};
use graft_id::Id;
use hashbrown::HashSet;

use crate::ids::field;

/// A node with a string name, found by walking from a root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedThing {
    /// The node's name.
    pub name: Arc<str>,
    /// The node.
    pub id: Id,
    /// Where the name was read from.
    pub source: Source,
}

/// Collects every named node reachable from the library roots and the
/// document root, plus each library root under its library's name.
///
/// Reachability follows edge values breadth first. Each node appears once,
/// and the result is sorted by name.
pub fn named_things(access: &mut (impl Access + ?Sized)) -> Vec<NamedThing> {
    let library_roots: Vec<(usize, Arc<str>, Id)> = access
        .libraries()
        .iter()
        .enumerate()
        .filter_map(|(index, library)| {
            let root = library.root()?.clone();
            Some((index, Arc::from(library.name()), root))
        })
        .collect();

    let mut things = Vec::new();
    let mut visited = HashSet::new();
    let name = Id::Guid(field::NAME);
    let mut frontier: Vec<Id> = library_roots.iter().map(|(_, _, root)| root.clone()).collect();
    frontier.extend(access.root());
    while !frontier.is_empty() {
        let mut next = Vec::new();
        for node in frontier {
            if !node.is_guid() || !visited.insert(node.clone()) {
                continue;
            }
            if let Some(hit) = access.get(&node, &name)
                && let Id::String(text) = hit.value
            {
                things.push(NamedThing {
                    name: text,
                    id: node.clone(),
                    source: hit.source,
                });
            }
            if let Some(edges) = access.edges(&node) {
                next.extend(edges.value.into_iter().map(|(_, value)| value));
            }
        }
        frontier = next;
    }

    for (index, name, root) in library_roots {
        things.push(NamedThing {
            name,
            id: root,
            source: Source::Library(index),
        });
    }

    let mut seen = HashSet::new();
    things.retain(|thing| seen.insert(thing.id.clone()));
    things.sort_by(|a, b| a.name.cmp(&b.name));
    things
}
