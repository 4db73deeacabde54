// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use graft_complete::{CommitTarget, Entry};
use graft_display::Action;
use graft_display::nav::Direction;
use graft_graph::Cursor;
use graft_id::Id;

/// An arrow key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Arrow {
    /// To the previous descend on the same level, climbing out if needed.
    Left,
    /// To the next descend on the same level, climbing out if needed.
    Right,
    /// Into the first descend below the selection, or onto the root when
    /// nothing is selected.
    Down,
    /// Out to the enclosing descend.
    Up,
}

/// Something the user asked the editor to do.
///
/// Intents that change the document run as one undoable edit each.
/// Intents that only move the selection are folded into the newest undo
/// step, so undoing returns the selection to where it was before that step.
#[derive(Clone, Debug, PartialEq)]
pub enum Intent {
    /// Select a position, or clear the selection.
    Select(Option<Cursor>),
    /// Clear the selection.
    Escape,
    /// Move to the next unset slot in a direction.
    Tab(Direction),
    /// Move with an arrow key.
    Arrow(Arrow),
    /// Perform what a display node offers.
    Action(Action),
    /// Write a completion entry into a slot.
    Commit {
        /// The chosen entry.
        entry: Entry,
        /// Where it goes.
        target: CommitTarget,
    },
    /// Replace the value at a position with a string or number.
    SetLiteral {
        /// The position.
        cursor: Cursor,
        /// The new value.
        value: Id,
    },
    /// Delete at the selection and select what follows it.
    Delete,
    /// Delete at the selection and select what precedes it.
    Backspace,
    /// Insert a list element ahead of the selected one.
    InsertBefore,
    /// Insert a list element after the selected one.
    InsertAfter,
    /// Append an element to the list at the selection.
    AppendToList,
    /// Put an empty list in the selected unset slot.
    SetEmptyList,
    /// Insert after the selected list element, or else append to the list
    /// at the selection.
    ListSeparator,
    /// Remember the selected value for pasting.
    Copy,
    /// Put a fresh copy of the copied structure at the selection.
    PasteStructure,
    /// Put the copied value itself at the selection.
    PasteReference,
    /// Revert the newest undo step.
    Undo,
    /// Reapply the newest undone step.
    Redo,
}
