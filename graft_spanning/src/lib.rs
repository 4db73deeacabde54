// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graft_spanning --heading-base-level=0

//! Graft Spanning: a sparse tree of expand/collapse choices keyed by path.
//!
//! A document graph is not a tree, but the user explores it as one: every
//! on-screen position is reached by a path of labels from the root. This crate
//! records the user's explicit expand/collapse choices against those paths.
//!
//! The tree is sparse. A node exists only where a choice was made or where a
//! deeper choice needs an ancestor to hang from. Looking up a path with no
//! recorded choice yields `None`, meaning "use the default", which callers
//! typically compute from the graph (for example: collapse if the path
//! revisits an edge it already took).
//!
//! Because choices are keyed by path rather than by node identity, the same
//! node reached by two different paths can be expanded in one place and
//! collapsed in another, and a choice survives edits that change which node a
//! path currently points at.
//!
//! ## Minimal example
//!
//! ```rust
//! use graft_spanning::SpanningTree;
//!
//! let mut tree = SpanningTree::<&str>::new();
//! tree.set_collapsed(["friend", "friend"], Some(true));
//!
//! assert_eq!(tree.collapsed_at(["friend", "friend"]), Some(true));
//! // Ancestors exist only to hold the choice; they carry none themselves.
//! assert_eq!(tree.collapsed_at(["friend"]), None);
//! assert_eq!(tree.collapsed_at(["enemy"]), None);
//!
//! // Clearing the choice prunes the now-empty branch.
//! tree.set_collapsed(["friend", "friend"], None);
//! assert!(tree.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::borrow::Borrow;
use core::hash::Hash;

use hashbrown::HashMap;

/// A sparse tree of optional collapse flags keyed by label paths.
#[derive(Clone, Debug)]
pub struct SpanningTree<K> {
    collapsed: Option<bool>,
    children: HashMap<K, SpanningTree<K>>,
}

impl<K> Default for SpanningTree<K> {
    fn default() -> Self {
        Self {
            collapsed: None,
            children: HashMap::new(),
        }
    }
}

impl<K> SpanningTree<K>
where
    K: Eq + Hash,
{
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the choice recorded at this node.
    #[inline]
    #[must_use]
    pub fn collapsed(&self) -> Option<bool> {
        self.collapsed
    }

    /// Returns the child subtree under `label`.
    #[must_use]
    pub fn child<Q>(&self, label: &Q) -> Option<&Self>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.children.get(label)
    }

    /// Returns the subtree at `path`, if any node exists there.
    #[must_use]
    pub fn subtree<I>(&self, path: I) -> Option<&Self>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        path.into_iter()
            .try_fold(self, |node, label| node.children.get(Borrow::<K>::borrow(&label)))
    }

    /// Returns the choice recorded at `path`, or `None` to inherit the default.
    #[must_use]
    pub fn collapsed_at<I>(&self, path: I) -> Option<bool>
    where
        I: IntoIterator,
        I::Item: Borrow<K>,
    {
        self.subtree(path)?.collapsed
    }

    /// Returns `true` if no choice is recorded anywhere in this tree.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collapsed.is_none() && self.children.is_empty()
    }

    /// Returns the number of recorded choices in this tree.
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.collapsed.is_some())
            + self.children.values().map(Self::len).sum::<usize>()
    }

    /// Removes every recorded choice.
    pub fn clear(&mut self) {
        self.collapsed = None;
        self.children.clear();
    }

    /// Records (or with `None`, clears) the choice at `path`.
    ///
    /// Intermediate nodes are created as needed. Clearing prunes any branch
    /// left with no choices in it.
    pub fn set_collapsed<I>(&mut self, path: I, collapsed: Option<bool>)
    where
        I: IntoIterator<Item = K>,
    {
        let mut path = path.into_iter();
        self.set_at(&mut path, collapsed);
    }

    fn set_at(&mut self, path: &mut impl Iterator<Item = K>, collapsed: Option<bool>) {
        match path.next() {
            None => self.collapsed = collapsed,
            Some(label) => {
                if collapsed.is_none() {
                    let Some(child) = self.children.get_mut(&label) else {
                        return;
                    };
                    child.set_at(path, None);
                    if child.is_empty() {
                        self.children.remove(&label);
                    }
                } else {
                    self.children
                        .entry(label)
                        .or_default()
                        .set_at(path, collapsed);
                }
            }
        }
    }
}
