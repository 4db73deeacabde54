// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Saving and loading documents.

use alloc::collections::{BTreeMap, VecDeque};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;

use graft_id::{Guid, Id};
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::graph::{Graph, Library};
use crate::store::Store;

/// One persisted edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedEdge {
    /// The edge label.
    pub label: Id,
    /// The edge value.
    pub to: Id,
}

/// The persisted form of a document: its root plus every reachable node.
///
/// Nodes are keyed by their hex id, in sorted order, so saving the same
/// document twice produces identical output.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGraph {
    /// The document root.
    pub root: Option<Id>,
    /// Edges of each saved node, in insertion order.
    pub store: BTreeMap<Guid, Vec<SavedEdge>>,
}

/// Failure to encode or decode a [`SavedGraph`].
#[derive(Debug, Error)]
#[error("invalid saved graph: {0}")]
pub struct PersistError(serde_json::Error);

impl From<serde_json::Error> for PersistError {
    fn from(error: serde_json::Error) -> Self {
        Self(error)
    }
}

impl SavedGraph {
    /// Encodes as compact JSON.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encodes as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decodes from JSON.
    pub fn from_json(text: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Rebuilds a store from the saved nodes.
    #[must_use]
    pub fn to_store(&self) -> Store {
        let mut store = Store::new();
        for (node, edges) in &self.store {
            store.set_many(
                *node,
                edges.iter().map(|edge| (edge.label.clone(), edge.to.clone())),
            );
        }
        store
    }
}

/// Returns every document node reachable from `root`.
///
/// Both labels and values are followed, since a label may itself be a node
/// (a field definition, for example) that the document defines.
#[must_use]
pub fn reachable_from(store: &Store, root: Option<&Id>) -> HashSet<Guid> {
    let mut seen = HashSet::new();
    let mut queue: VecDeque<Guid> = root.and_then(Id::as_guid).into_iter().collect();
    while let Some(node) = queue.pop_front() {
        if !seen.insert(node) {
            continue;
        }
        for (label, value) in store.edges(&Id::Guid(node)).unwrap_or_default() {
            for next in [label, value].into_iter().filter_map(Id::as_guid) {
                if !seen.contains(&next) {
                    queue.push_back(next);
                }
            }
        }
    }
    seen
}

impl Graph {
    /// Captures the document, dropping nodes unreachable from the root.
    #[must_use]
    pub fn save(&self) -> SavedGraph {
        let reachable = reachable_from(self.document(), self.root());
        let store: BTreeMap<Guid, Vec<SavedEdge>> = self
            .document()
            .nodes()
            .filter(|(node, _)| reachable.contains(node))
            .map(|(node, edges)| {
                let edges = edges
                    .iter()
                    .map(|(label, to)| SavedEdge {
                        label: label.clone(),
                        to: to.clone(),
                    })
                    .collect();
                (node, edges)
            })
            .collect();
        debug!(
            kept = store.len(),
            dropped = self.document().len() - store.len(),
            "saved document"
        );
        SavedGraph {
            root: self.root().cloned(),
            store,
        }
    }

    /// Restores a document on top of the given libraries.
    #[must_use]
    pub fn load(saved: &SavedGraph, libraries: impl IntoIterator<Item = Rc<Library>>) -> Self {
        libraries.into_iter().fold(
            Self::new()
                .with_document(saved.to_store())
                .with_root(saved.root.clone()),
            Self::with_library,
        )
    }
}

impl Library {
    /// Creates a library from a saved graph, using its root as the library root.
    #[must_use]
    pub fn from_saved(name: &str, saved: &SavedGraph) -> Self {
        Self::new(name, saved.root.clone(), saved.to_store())
    }
}
