// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edits addressed by cursor: list cells and plain deletion.
//!
//! Each function returns where the selection should go next, or `None` (or
//! `false`) when it does not apply at the given cursor. Writes go through a
//! [`Txn`], so they are recorded and can be refused.

use graft_complete::CommitTarget;
use graft_graph::{Access, Cursor, Source, Txn, WriteError};
use graft_id::{Guid, Id};
use graft_schema::ids::{ctor, field};
use graft_schema::{ctor_of, is_list, is_list_head};
use hashbrown::HashSet;
use tracing::debug;

fn head() -> Id {
    Id::Guid(field::HEAD)
}

fn tail() -> Id {
    Id::Guid(field::TAIL)
}

fn new_node(txn: &mut Txn<'_>, constructor: Guid) -> Result<Guid, WriteError> {
    let node = Guid::new();
    txn.set(node, Id::Guid(field::CTOR), Id::Guid(constructor))?;
    Ok(node)
}

/// Puts a new cell with an unset head in front of the list held at `slot`.
///
/// Returns the head of the new cell.
pub fn push_front(txn: &mut Txn<'_>, slot: &Cursor) -> Result<Option<Cursor>, WriteError> {
    let Some(old) = slot.resolve(txn) else {
        return Ok(None);
    };
    if !is_list(txn, &old.value) {
        return Ok(None);
    }
    let Some(target) = CommitTarget::at(txn, slot) else {
        return Ok(None);
    };
    let cell = new_node(txn, ctor::NONEMPTY_LIST)?;
    txn.set(cell, tail(), old.value)?;
    target.write(txn, Id::Guid(cell))?;
    debug!(%cell, "new list cell");
    Ok(Some(slot.child(head())))
}

/// Inserts an element ahead of the list element at `cursor`.
pub fn insert_before(txn: &mut Txn<'_>, cursor: &Cursor) -> Result<Option<Cursor>, WriteError> {
    match cursor.parent() {
        Some(slot) if is_list_head(txn, cursor) => push_front(txn, slot),
        _ => Ok(None),
    }
}

/// Inserts an element after the list element at `cursor`.
pub fn insert_after(txn: &mut Txn<'_>, cursor: &Cursor) -> Result<Option<Cursor>, WriteError> {
    match cursor.parent() {
        Some(slot) if is_list_head(txn, cursor) => push_front(txn, &slot.child(tail())),
        _ => Ok(None),
    }
}

/// Appends an element to the end of the list at `cursor`.
///
/// Does nothing when the tails loop back into the list.
pub fn append_to_list(txn: &mut Txn<'_>, cursor: &Cursor) -> Result<Option<Cursor>, WriteError> {
    let Some(mut cell) = cursor.resolve(txn).map(|hit| hit.value) else {
        return Ok(None);
    };
    let mut seen = HashSet::new();
    let mut at = cursor.clone();
    loop {
        match ctor_of(txn, &cell) {
            Some(c) if c == ctor::EMPTY_LIST => return push_front(txn, &at),
            Some(c) if c == ctor::NONEMPTY_LIST => {
                if !seen.insert(cell.clone()) {
                    debug!(?cursor, "list tails loop, not appending");
                    return Ok(None);
                }
                let Some(rest) = txn.get(&cell, &tail()) else {
                    return Ok(None);
                };
                cell = rest.value;
                at = at.child(tail());
            }
            _ => return Ok(None),
        }
    }
}

/// Puts an empty list in the unset slot at `cursor`.
pub fn set_empty_list(txn: &mut Txn<'_>, cursor: &Cursor) -> Result<Option<Cursor>, WriteError> {
    if cursor.resolve(txn).is_some() {
        return Ok(None);
    }
    let Some(target) = CommitTarget::at(txn, cursor) else {
        return Ok(None);
    };
    let empty = new_node(txn, ctor::EMPTY_LIST)?;
    target.write(txn, Id::Guid(empty))?;
    Ok(Some(cursor.clone()))
}

/// Unlinks the cell whose head is `cursor`, splicing its tail into the
/// slot that held it.
///
/// Applies only to document cells.
pub fn delete_list_element(txn: &mut Txn<'_>, cursor: &Cursor) -> Result<bool, WriteError> {
    if !is_list_head(txn, cursor) {
        return Ok(false);
    }
    let Some(slot) = cursor.parent() else {
        return Ok(false);
    };
    let Some(cell) = slot.resolve(txn).and_then(|cell| cell.value.as_guid()) else {
        return Ok(false);
    };
    if txn
        .get(&Id::Guid(cell), &head())
        .is_some_and(|element| !element.source.is_writable())
    {
        return Ok(false);
    }
    let (Some(rest), Some(target)) = (
        txn.get(&Id::Guid(cell), &tail()),
        CommitTarget::at(txn, slot),
    ) else {
        return Ok(false);
    };
    txn.delete(cell, &head())?;
    target.write(txn, rest.value)?;
    debug!(%cell, "unlinked list cell");
    Ok(true)
}

/// Deletes whatever is at `cursor`.
///
/// A list element unlinks its cell. Anything else deletes the edge, when
/// the edge belongs to the document.
pub fn delete_cursor(txn: &mut Txn<'_>, cursor: &Cursor) -> Result<bool, WriteError> {
    if delete_list_element(txn, cursor)? {
        return Ok(true);
    }
    let Some(CommitTarget::Edge { node, label }) = CommitTarget::at(txn, cursor) else {
        return Ok(false);
    };
    match txn.get(&Id::Guid(node), &label) {
        Some(value) if value.source == Source::Document => {
            txn.delete(node, &label)?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
