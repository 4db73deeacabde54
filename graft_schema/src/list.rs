// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reading nodes through the meta-schema.

use alloc::sync::Arc;
use alloc::vec::Vec;

use graft_graph::{Access, Cursor};
use graft_id::{Guid, Id};
use hashbrown::HashSet;

use crate::ids::{ctor, field};

/// Returns the constructor of `node`.
pub fn ctor_of(access: &mut (impl Access + ?Sized), node: &Id) -> Option<Guid> {
    access.get(node, &Id::Guid(field::CTOR))?.value.as_guid()
}

/// Returns the string name of `node`.
pub fn name_of(access: &mut (impl Access + ?Sized), node: &Id) -> Option<Arc<str>> {
    match access.get(node, &Id::Guid(field::NAME))?.value {
        Id::String(name) => Some(name),
        _ => None,
    }
}

/// Returns `true` if `node` is a cons cell or the empty list.
pub fn is_list(access: &mut (impl Access + ?Sized), node: &Id) -> bool {
    matches!(
        ctor_of(access, node),
        Some(c) if c == ctor::NONEMPTY_LIST || c == ctor::EMPTY_LIST
    )
}

/// Reads the elements of a cons list.
///
/// Returns `None` if `list` is not a list, a cell lacks its head or tail,
/// or the tails loop.
pub fn list_items(access: &mut (impl Access + ?Sized), list: &Id) -> Option<Vec<Id>> {
    let head = Id::Guid(field::HEAD);
    let tail = Id::Guid(field::TAIL);
    let mut items = Vec::new();
    let mut seen = HashSet::new();
    let mut cell = list.clone();
    loop {
        let constructor = ctor_of(access, &cell)?;
        if constructor == ctor::EMPTY_LIST {
            return Some(items);
        }
        if constructor != ctor::NONEMPTY_LIST || !seen.insert(cell.clone()) {
            return None;
        }
        items.push(access.get(&cell, &head)?.value);
        cell = access.get(&cell, &tail)?.value;
    }
}

/// One cell of a list, with the position it was reached at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListCell {
    /// Position whose value is this cell.
    pub cursor: Cursor,
    /// The cell node.
    pub cell: Guid,
}

impl ListCell {
    /// Position of this cell's element.
    #[must_use]
    pub fn head_cursor(&self) -> Cursor {
        self.cursor.child(Id::Guid(field::HEAD))
    }
}

/// The cells of a list as reached from a position.
///
/// A list stored at cursor `c` has its first cell at `c`, its second at
/// `c / tail`, and so on, ending with the empty-list cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListShape {
    /// The cons cells, in order.
    pub cells: Vec<ListCell>,
    /// The terminating empty-list cell.
    pub end: ListCell,
}

impl ListShape {
    /// Walks the list whose first cell is `value`, found at `cursor`.
    ///
    /// Unset heads are allowed. Returns `None` if `value` is not a list, a
    /// tail is missing, or the tails loop.
    pub fn read(access: &mut (impl Access + ?Sized), cursor: &Cursor, value: &Id) -> Option<Self> {
        let tail = Id::Guid(field::TAIL);
        let mut cells = Vec::new();
        let mut seen = HashSet::new();
        let mut cursor = cursor.clone();
        let mut cell = value.clone();
        loop {
            let guid = cell.as_guid()?;
            let constructor = ctor_of(access, &cell)?;
            if constructor == ctor::EMPTY_LIST {
                return Some(Self {
                    cells,
                    end: ListCell { cursor, cell: guid },
                });
            }
            if constructor != ctor::NONEMPTY_LIST || !seen.insert(guid) {
                return None;
            }
            let next = access.get(&cell, &tail)?.value;
            let next_cursor = cursor.child(tail.clone());
            cells.push(ListCell { cursor, cell: guid });
            cursor = next_cursor;
            cell = next;
        }
    }
}

/// Returns `true` if `cursor` addresses the head of a cons cell.
pub fn is_list_head(access: &mut (impl Access + ?Sized), cursor: &Cursor) -> bool {
    if cursor.label() != Some(&Id::Guid(field::HEAD)) {
        return false;
    }
    let Some(parent) = cursor.parent().and_then(|p| p.resolve(access)) else {
        return false;
    };
    ctor_of(access, &parent.value) == Some(ctor::NONEMPTY_LIST)
}
