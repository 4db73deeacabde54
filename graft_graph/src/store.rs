// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw labeled-edge storage.

use graft_id::{Guid, Id};
use hashbrown::HashMap;
use smallvec::SmallVec;

/// Outgoing edges of one node, in first-insertion order.
///
/// Most nodes carry a constructor plus a handful of fields, so a few edges
/// live inline.
pub(crate) type EdgeList = SmallVec<[(Id, Id); 4]>;

/// A mapping from node to its `(label, value)` edges.
///
/// Only unique-id nodes carry edges: looking up a string or number node yields
/// `None`. A node exists exactly while it has at least one edge; deleting the
/// last edge removes the node.
///
/// `Store` performs no interception. Reads and writes that must be observed
/// go through [`View`](crate::View) or [`Txn`](crate::Txn), which own a
/// [`Graph`](crate::Graph) of stores.
#[derive(Clone, Debug, Default)]
pub struct Store {
    nodes: HashMap<Guid, EdgeList>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the store has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `node` has at least one edge here.
    #[must_use]
    pub fn contains(&self, node: Guid) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Looks up the value of one edge.
    #[must_use]
    pub fn get(&self, node: &Id, label: &Id) -> Option<&Id> {
        self.get_guid(node.as_guid()?, label)
    }

    /// Looks up the value of one edge of a unique-id node.
    #[must_use]
    pub fn get_guid(&self, node: Guid, label: &Id) -> Option<&Id> {
        self.nodes
            .get(&node)?
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v)
    }

    /// Returns all edges of a node.
    #[must_use]
    pub fn edges(&self, node: &Id) -> Option<&[(Id, Id)]> {
        self.nodes.get(&node.as_guid()?).map(|e| e.as_slice())
    }

    /// Sets one edge, returning the value it replaced.
    pub fn set(&mut self, node: Guid, label: Id, value: Id) -> Option<Id> {
        let edges = self.nodes.entry(node).or_default();
        match edges.iter_mut().find(|(l, _)| *l == label) {
            Some((_, existing)) => Some(core::mem::replace(existing, value)),
            None => {
                edges.push((label, value));
                None
            }
        }
    }

    /// Replaces all edges of a node.
    ///
    /// Later duplicates of a label win. An empty edge list removes the node.
    pub fn set_many(&mut self, node: Guid, edges: impl IntoIterator<Item = (Id, Id)>) {
        self.nodes.remove(&node);
        for (label, value) in edges {
            self.set(node, label, value);
        }
    }

    /// Removes one edge, returning its value.
    ///
    /// Removing the last edge of a node removes the node.
    pub fn delete(&mut self, node: Guid, label: &Id) -> Option<Id> {
        let edges = self.nodes.get_mut(&node)?;
        let index = edges.iter().position(|(l, _)| l == label)?;
        let (_, value) = edges.remove(index);
        if edges.is_empty() {
            self.nodes.remove(&node);
        }
        Some(value)
    }

    /// Iterates over every node and its edges, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = (Guid, &[(Id, Id)])> + '_ {
        self.nodes.iter().map(|(guid, edges)| (*guid, edges.as_slice()))
    }
}
