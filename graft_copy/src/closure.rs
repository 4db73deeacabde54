// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use graft_display::{D, DisplayId, DisplayTree, nav};
use graft_graph::{Access, Cursor, PersistError, Txn, WriteError};
use graft_id::{Guid, Id};
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::token::{Endpoint, Token};

/// Adds the unique ids met walking up from `cursor`, stopping at `cutoff`.
///
/// Positions without a value are stepped over. Anything that is not a
/// unique id stops the walk.
fn betwixt(
    access: &mut (impl Access + ?Sized),
    cutoff: Option<Guid>,
    cursor: &Cursor,
    out: &mut HashSet<Guid>,
) {
    for at in cursor.ancestors() {
        let Some(found) = at.resolve(access) else {
            continue;
        };
        match found.value.as_guid() {
            Some(node) if Some(node) != cutoff => {
                out.insert(node);
            }
            _ => return,
        }
    }
}

fn collect(
    access: &mut (impl Access + ?Sized),
    tree: &DisplayTree,
    id: DisplayId,
    cutoff: Option<Guid>,
    out: &mut HashSet<Guid>,
) {
    if let D::Descend { cursor, .. } = tree.get(id) {
        betwixt(access, cutoff, cursor, out);
        let owner = owner_of(access, cursor);
        for &child in tree.children(id) {
            collect(access, tree, child, owner, out);
        }
    } else {
        for &child in tree.children(id) {
            collect(access, tree, child, cutoff, out);
        }
    }
}

/// The node whose edge `cursor` follows last.
fn owner_of(access: &mut (impl Access + ?Sized), cursor: &Cursor) -> Option<Guid> {
    cursor.parent()?.resolve(access)?.value.as_guid()
}

/// Returns the unique-id nodes rendered inside the descend `id`, up to the
/// node that owns its edge.
///
/// Only what is on screen counts: a collapsed position contributes nothing,
/// so whatever lies behind it is referenced rather than copied.
pub fn enclosed_nodes(
    access: &mut (impl Access + ?Sized),
    tree: &DisplayTree,
    id: DisplayId,
) -> HashSet<Guid> {
    let mut out = HashSet::new();
    let cutoff = tree.descend_cursor(id).and_then(|cursor| owner_of(access, cursor));
    collect(access, tree, id, cutoff, &mut out);
    out
}

/// One copied node and its edges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureEntry {
    /// The copied node.
    pub token: Token,
    /// Its edges, in order.
    pub edges: Vec<(Endpoint, Endpoint)>,
}

/// A copied structure, ready for the clipboard.
///
/// The first entry is the copied root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedClosure {
    /// The copied nodes, root first.
    pub entries: Vec<ClosureEntry>,
}

impl SerializedClosure {
    /// Copies the nodes in `enclosed` reachable from `root` through each
    /// other, breadth first.
    ///
    /// Returns an empty closure if `root` is not in `enclosed`.
    pub fn capture(
        access: &mut (impl Access + ?Sized),
        root: Guid,
        enclosed: &HashSet<Guid>,
    ) -> Self {
        let endpoint = |id: Id| match id.as_guid() {
            Some(node) if enclosed.contains(&node) => Endpoint::Token(Token(node)),
            _ => Endpoint::Id(id),
        };
        let mut entries = Vec::new();
        if !enclosed.contains(&root) {
            return Self { entries };
        }
        let mut seen = HashSet::new();
        seen.insert(root);
        let mut order = Vec::from([root]);
        let mut next = 0;
        while let Some(&node) = order.get(next) {
            next += 1;
            let edges: Vec<(Endpoint, Endpoint)> = access
                .edges(&Id::Guid(node))
                .map(|edges| edges.value)
                .unwrap_or_default()
                .into_iter()
                .map(|(label, value)| (endpoint(label), endpoint(value)))
                .collect();
            for token in edges.iter().flat_map(|(l, v)| [l.as_token(), v.as_token()]).flatten() {
                if seen.insert(token.0) {
                    order.push(token.0);
                }
            }
            entries.push(ClosureEntry {
                token: Token(node),
                edges,
            });
        }
        Self { entries }
    }

    /// Returns `true` if nothing was copied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of copied nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Writes the copy as fresh nodes and returns the new root.
    ///
    /// Every token gets one fresh id, so nodes shared inside the copy stay
    /// shared. Returns `Ok(None)` for an empty closure.
    pub fn materialize(&self, txn: &mut Txn<'_>) -> Result<Option<Id>, WriteError> {
        let mut fresh: HashMap<Token, Guid> = HashMap::new();
        let mut root = None;
        for entry in &self.entries {
            let node = rekey(&mut fresh, entry.token);
            let edges = entry
                .edges
                .iter()
                .map(|(label, value)| (resolve(&mut fresh, label), resolve(&mut fresh, value)))
                .collect();
            txn.set_many(node, edges)?;
            root.get_or_insert(Id::Guid(node));
        }
        debug!(nodes = self.entries.len(), "pasted structure");
        Ok(root)
    }

    /// Encodes as JSON.
    pub fn to_json(&self) -> Result<String, PersistError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes from JSON.
    pub fn from_json(text: &str) -> Result<Self, PersistError> {
        Ok(serde_json::from_str(text)?)
    }
}

fn rekey(fresh: &mut HashMap<Token, Guid>, token: Token) -> Guid {
    *fresh.entry(token).or_insert_with(Guid::new)
}

fn resolve(fresh: &mut HashMap<Token, Guid>, end: &Endpoint) -> Id {
    match end {
        Endpoint::Token(token) => Id::Guid(rekey(fresh, *token)),
        Endpoint::Id(id) => id.clone(),
    }
}

/// Copies the structure on screen at `cursor`.
///
/// Returns `None` if `cursor` is not rendered in `tree` or does not hold a
/// unique-id node.
pub fn serialize_selection(
    access: &mut (impl Access + ?Sized),
    tree: &DisplayTree,
    cursor: &Cursor,
) -> Option<SerializedClosure> {
    let descend = nav::find_descend(tree, tree.root()?, cursor)?;
    let root = cursor.resolve(access)?.value.as_guid()?;
    let enclosed = enclosed_nodes(access, tree, descend);
    let closure = SerializedClosure::capture(access, root, &enclosed);
    debug!(nodes = closure.len(), "copied structure");
    (!closure.is_empty()).then_some(closure)
}
