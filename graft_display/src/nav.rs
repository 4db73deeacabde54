// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Moving between descends of a rendered tree.
//!
//! Every function here takes the display node to start from and returns a
//! [`D::Descend`] node, whose cursor becomes the new selection.

use graft_graph::Cursor;

use crate::tree::{D, DisplayId, DisplayTree};

/// Which way to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards later siblings.
    Forward,
    /// Towards earlier siblings.
    Backward,
}

impl Direction {
    fn step(self, index: usize) -> Option<usize> {
        match self {
            Self::Forward => index.checked_add(1),
            Self::Backward => index.checked_sub(1),
        }
    }
}

fn is_descend(tree: &DisplayTree, id: DisplayId) -> bool {
    matches!(tree.get(id), D::Descend { .. })
}

fn is_tab_stop(tree: &DisplayTree, id: DisplayId) -> bool {
    matches!(tree.get(id), D::Descend { unset: true, .. })
}

fn sibling(tree: &DisplayTree, id: DisplayId, direction: Direction) -> Option<DisplayId> {
    let parent = tree.parent(id)?;
    let index = direction.step(tree.index_in_parent(id)?)?;
    tree.children(parent).get(index).copied()
}

/// Finds the descend rendering `cursor` at or below `from`.
#[must_use]
pub fn find_descend(tree: &DisplayTree, from: DisplayId, cursor: &Cursor) -> Option<DisplayId> {
    tree.descendants(from)
        .find(|&id| tree.descend_cursor(id) == Some(cursor))
}

/// Finds the nearest descend strictly above `id`.
#[must_use]
pub fn parent_descend(tree: &DisplayTree, id: DisplayId) -> Option<DisplayId> {
    let mut at = tree.parent(id)?;
    while !is_descend(tree, at) {
        at = tree.parent(at)?;
    }
    Some(at)
}

/// Finds the first descend below `id`, not looking inside descends.
#[must_use]
pub fn first_child_descend(tree: &DisplayTree, id: DisplayId) -> Option<DisplayId> {
    tree.children(id).iter().find_map(|&child| {
        if is_descend(tree, child) {
            Some(child)
        } else {
            first_child_descend(tree, child)
        }
    })
}

/// Finds the next descend beside `id` in `direction`, climbing out of
/// enclosing nodes when `id` is the last one on its side.
#[must_use]
pub fn sibling_descend(
    tree: &DisplayTree,
    id: DisplayId,
    direction: Direction,
) -> Option<DisplayId> {
    match sibling(tree, id, direction) {
        Some(next) if is_descend(tree, next) => Some(next),
        Some(next) => first_child_descend(tree, next)
            .or_else(|| sibling_descend(tree, next, direction)),
        None => sibling_descend(tree, tree.parent(id)?, direction),
    }
}

fn tab_stop_in_children(
    tree: &DisplayTree,
    id: DisplayId,
    direction: Direction,
) -> Option<DisplayId> {
    let children = tree.children(id);
    match direction {
        Direction::Forward => children.iter().find_map(|&c| tab_stop_down(tree, c, direction)),
        Direction::Backward => children
            .iter()
            .rev()
            .find_map(|&c| tab_stop_down(tree, c, direction)),
    }
}

fn tab_stop_down(tree: &DisplayTree, id: DisplayId, direction: Direction) -> Option<DisplayId> {
    if is_tab_stop(tree, id) {
        Some(id)
    } else {
        tab_stop_in_children(tree, id, direction)
    }
}

fn next_up(tree: &DisplayTree, id: DisplayId, direction: Direction) -> Option<DisplayId> {
    let parent = tree.parent(id)?;
    sibling(tree, parent, direction).or_else(|| next_up(tree, parent, direction))
}

fn tab_stop_up(tree: &DisplayTree, id: DisplayId, direction: Direction) -> Option<DisplayId> {
    sibling(tree, id, direction)
        .and_then(|next| tab_stop(tree, next, direction))
        .or_else(|| next_up(tree, id, direction).and_then(|next| tab_stop(tree, next, direction)))
}

/// Finds the first unset descend at `id` or after it in `direction`.
///
/// Unset descends are the tab stops of a rendered document.
#[must_use]
pub fn tab_stop(tree: &DisplayTree, id: DisplayId, direction: Direction) -> Option<DisplayId> {
    tab_stop_down(tree, id, direction).or_else(|| tab_stop_up(tree, id, direction))
}

/// Finds the first unset descend after `id` in `direction`, skipping `id`
/// itself.
#[must_use]
pub fn next_tab_stop(tree: &DisplayTree, id: DisplayId, direction: Direction) -> Option<DisplayId> {
    tab_stop_in_children(tree, id, direction).or_else(|| tab_stop_up(tree, id, direction))
}
