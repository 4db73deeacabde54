// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display arena: node kinds, identifiers, and ownership.

use alloc::sync::Arc;
use alloc::vec::Vec;

use graft_complete::{CommitTarget, Completions};
use graft_graph::Cursor;
use smallvec::SmallVec;

/// Identifier for a node in a [`DisplayTree`].
///
/// Ids are indices into the tree that created them and mean nothing in any
/// other tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DisplayId(u32);

impl DisplayId {
    #[inline]
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// How a position relates to the current selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SelectionState {
    /// The position is the selection.
    Selected,
    /// The position holds the same value as the selection, reached by a
    /// different path.
    Hinted,
}

/// Something a host can do when the user activates a display node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Record (or with `None`, clear) the collapse choice at a position.
    SetCollapsed {
        /// The position.
        cursor: Cursor,
        /// The choice.
        collapsed: Option<bool>,
    },
    /// Insert a new list cell in the slot at `slot`, ahead of whatever cell
    /// is there now, and select its head.
    InsertBefore {
        /// The slot holding the cell to insert ahead of.
        slot: Cursor,
    },
}

/// Editing state of a selected literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Editable {
    /// Whether the literal comes from the document and may be replaced.
    pub writable: bool,
}

/// Completion state of a selected placeholder.
#[derive(Clone, Debug)]
pub struct PlaceholderSelection {
    /// Candidates for the slot.
    pub completions: Completions,
    /// Where a chosen candidate is written, if the slot is writable at all.
    pub target: Option<CommitTarget>,
}

/// The kind of a display node.
///
/// Children are held by the tree, not by the kind; see
/// [`DisplayTree::children`].
#[derive(Clone, Debug)]
pub enum D {
    /// Children stacked vertically.
    Block,
    /// Children laid out horizontally.
    Line,
    /// Literal text.
    Text(Arc<str>),
    /// A bracketed, separated sequence of list elements.
    List {
        /// Text before the first element.
        opening: Arc<str>,
        /// Text after the last element.
        closing: Arc<str>,
        /// Text between elements.
        separator: Arc<str>,
        /// Insertion points: one per element, then the end of the list.
        slots: Vec<Cursor>,
    },
    /// A rendered position in the document. Its single child is the
    /// rendering of the position's value.
    Descend {
        /// The position.
        cursor: Cursor,
        /// Relation to the selection.
        selection: Option<SelectionState>,
        /// The value does not have the type declared for the position.
        mismatch: bool,
        /// The position had no value when rendered.
        unset: bool,
    },
    /// A field caption. Its single child is the caption content.
    Label {
        /// The position the caption names.
        cursor: Cursor,
    },
    /// A clickable control.
    Button {
        /// The caption.
        text: Arc<str>,
        /// What activating it does.
        action: Action,
    },
    /// An unset slot.
    Placeholder {
        /// The field name of the slot.
        name: Arc<str>,
        /// Completion state, present when the slot is selected.
        selected: Option<PlaceholderSelection>,
    },
    /// A string value.
    StringEditor {
        /// The string.
        value: Arc<str>,
        /// Present when the value is selected.
        selected: Option<Editable>,
    },
    /// A number value.
    NumberEditor {
        /// The number.
        value: f64,
        /// Present when the value is selected.
        selected: Option<Editable>,
    },
}

impl D {
    /// Returns the action for inserting at `index` of a [`D::List`].
    #[must_use]
    pub fn insert_action(&self, index: usize) -> Option<Action> {
        match self {
            Self::List { slots, .. } => Some(Action::InsertBefore {
                slot: slots.get(index)?.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
struct Node {
    kind: D,
    parent: Option<DisplayId>,
    children: SmallVec<[DisplayId; 4]>,
}

/// An arena of display nodes forming a strict tree.
///
/// Nodes are created bottom-up: a node's children must already exist, and
/// each node can be adopted by exactly one parent. Adopting a node twice is
/// a defect and panics.
#[derive(Clone, Debug, Default)]
pub struct DisplayTree {
    nodes: Vec<Node>,
    root: Option<DisplayId>,
}

impl DisplayTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of nodes, including unreachable ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node was created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Creates a node owning `children`.
    ///
    /// # Panics
    ///
    /// Panics if a child already has an owner or does not belong to this tree.
    pub fn push(&mut self, kind: D, children: impl IntoIterator<Item = DisplayId>) -> DisplayId {
        let id = DisplayId(
            u32::try_from(self.nodes.len()).expect("too many display nodes for DisplayId (u32)"),
        );
        let children: SmallVec<[DisplayId; 4]> = children.into_iter().collect();
        for &child in &children {
            let node = &mut self.nodes[child.idx()];
            assert!(node.parent.is_none(), "display node {child:?} already has an owner");
            node.parent = Some(id);
        }
        self.nodes.push(Node {
            kind,
            parent: None,
            children,
        });
        id
    }

    /// Creates a text node.
    pub fn text(&mut self, text: impl Into<Arc<str>>) -> DisplayId {
        self.push(D::Text(text.into()), [])
    }

    /// Creates a block of `children`.
    pub fn block(&mut self, children: impl IntoIterator<Item = DisplayId>) -> DisplayId {
        self.push(D::Block, children)
    }

    /// Creates a line of `children`.
    pub fn line(&mut self, children: impl IntoIterator<Item = DisplayId>) -> DisplayId {
        self.push(D::Line, children)
    }

    /// Drops every node created at or after `len`, releasing the children
    /// they had adopted.
    pub(crate) fn truncate(&mut self, len: usize) {
        if self.nodes.len() <= len {
            return;
        }
        self.nodes.truncate(len);
        for node in &mut self.nodes {
            if node.parent.is_some_and(|parent| parent.idx() >= len) {
                node.parent = None;
            }
        }
        if self.root.is_some_and(|root| root.idx() >= len) {
            self.root = None;
        }
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> Option<DisplayId> {
        self.root
    }

    /// Marks `root` as the root of the tree.
    ///
    /// # Panics
    ///
    /// Panics if `root` has an owner.
    pub fn set_root(&mut self, root: DisplayId) {
        assert!(self.nodes[root.idx()].parent.is_none(), "the root cannot have an owner");
        self.root = Some(root);
    }

    /// Returns the kind of `id`.
    #[must_use]
    pub fn get(&self, id: DisplayId) -> &D {
        &self.nodes[id.idx()].kind
    }

    /// Returns the owner of `id`.
    #[must_use]
    pub fn parent(&self, id: DisplayId) -> Option<DisplayId> {
        self.nodes[id.idx()].parent
    }

    /// Returns the children of `id` in order.
    #[must_use]
    pub fn children(&self, id: DisplayId) -> &[DisplayId] {
        &self.nodes[id.idx()].children
    }

    /// Returns the position of `id` among its owner's children.
    #[must_use]
    pub fn index_in_parent(&self, id: DisplayId) -> Option<usize> {
        let parent = self.parent(id)?;
        self.children(parent).iter().position(|&child| child == id)
    }

    /// Returns the cursor of a [`D::Descend`].
    #[must_use]
    pub fn descend_cursor(&self, id: DisplayId) -> Option<&Cursor> {
        match self.get(id) {
            D::Descend { cursor, .. } => Some(cursor),
            _ => None,
        }
    }

    /// Returns the cursor of the nearest [`D::Descend`] or [`D::Label`] at or
    /// above `id`.
    #[must_use]
    pub fn cursor_of(&self, id: DisplayId) -> Option<&Cursor> {
        let mut at = id;
        loop {
            match self.get(at) {
                D::Descend { cursor, .. } | D::Label { cursor } => return Some(cursor),
                _ => at = self.parent(at)?,
            }
        }
    }

    /// Iterates over `id` and everything below it, depth first, in order.
    pub fn descendants(&self, id: DisplayId) -> impl Iterator<Item = DisplayId> + '_ {
        let mut stack: SmallVec<[DisplayId; 16]> = SmallVec::new();
        stack.push(id);
        core::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children(next).iter().rev().copied());
            Some(next)
        })
    }
}
