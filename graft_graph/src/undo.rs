// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording edits and replaying them backwards.

use alloc::vec::Vec;

use graft_id::{Guid, Id};
use tracing::debug;

use crate::cursor::Cursor;
use crate::graph::Graph;
use crate::overlay::{Overlay, WriteError};

/// One recorded write, with enough information to reverse it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
    /// An edge went from `before` to `after`; `None` means absent.
    Edge {
        /// The node written.
        node: Guid,
        /// The label written.
        label: Id,
        /// The value before the write.
        before: Option<Id>,
        /// The value after the write.
        after: Option<Id>,
    },
    /// The document root changed.
    Root {
        /// The root before the write.
        before: Option<Id>,
        /// The root after the write.
        after: Option<Id>,
    },
    /// The selection changed.
    Selection {
        /// The selection before the write.
        before: Option<Cursor>,
        /// The selection after the write.
        after: Option<Cursor>,
    },
}

impl Change {
    /// Returns `true` for a selection change.
    #[must_use]
    pub fn is_selection_only(&self) -> bool {
        matches!(self, Self::Selection { .. })
    }

    /// Returns the change that undoes this one.
    #[must_use]
    pub fn inverted(self) -> Self {
        match self {
            Self::Edge {
                node,
                label,
                before,
                after,
            } => Self::Edge {
                node,
                label,
                before: after,
                after: before,
            },
            Self::Root { before, after } => Self::Root {
                before: after,
                after: before,
            },
            Self::Selection { before, after } => Self::Selection {
                before: after,
                after: before,
            },
        }
    }

    /// Writes the `after` side directly, without any overlay.
    pub(crate) fn apply(&self, graph: &mut Graph, selection: &mut Option<Cursor>) {
        match self {
            Self::Edge {
                node, label, after, ..
            } => match after {
                Some(value) => {
                    graph.document_mut().set(*node, label.clone(), value.clone());
                }
                None => {
                    graph.document_mut().delete(*node, label);
                }
            },
            Self::Root { after, .. } => {
                graph.set_root(after.clone());
            }
            Self::Selection { after, .. } => *selection = after.clone(),
        }
    }
}

/// An overlay that records every accepted write as a [`Change`].
///
/// Deleting an edge that was already absent and setting the selection to
/// what it already was are not recorded.
#[derive(Clone, Debug, Default)]
pub struct UndoRecorder {
    changes: Vec<Change>,
}

impl UndoRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the changes recorded so far, oldest first.
    #[must_use]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Consumes the recorder, returning its changes.
    #[must_use]
    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }
}

impl Overlay for UndoRecorder {
    fn will_set(
        &mut self,
        node: Guid,
        label: &Id,
        before: Option<&Id>,
        after: &Id,
    ) -> Result<(), WriteError> {
        self.changes.push(Change::Edge {
            node,
            label: label.clone(),
            before: before.cloned(),
            after: Some(after.clone()),
        });
        Ok(())
    }

    fn will_delete(
        &mut self,
        node: Guid,
        label: &Id,
        before: Option<&Id>,
    ) -> Result<(), WriteError> {
        if let Some(before) = before {
            self.changes.push(Change::Edge {
                node,
                label: label.clone(),
                before: Some(before.clone()),
                after: None,
            });
        }
        Ok(())
    }

    fn will_set_root(&mut self, before: Option<&Id>, after: Option<&Id>) -> Result<(), WriteError> {
        self.changes.push(Change::Root {
            before: before.cloned(),
            after: after.cloned(),
        });
        Ok(())
    }

    fn will_set_selection(
        &mut self,
        before: Option<&Cursor>,
        after: Option<&Cursor>,
    ) -> Result<(), WriteError> {
        if before != after {
            self.changes.push(Change::Selection {
                before: before.cloned(),
                after: after.cloned(),
            });
        }
        Ok(())
    }
}

/// Reverts `changes`, newest first, without recording anything.
///
/// Used to abandon a batch that failed partway through.
pub fn rollback(graph: &mut Graph, selection: &mut Option<Cursor>, changes: Vec<Change>) {
    if changes.is_empty() {
        return;
    }
    debug!(changes = changes.len(), "rolling back");
    for change in changes.into_iter().rev() {
        change.inverted().apply(graph, selection);
    }
}

/// Undo and redo stacks of change batches.
///
/// Each batch is the outcome of one user action. A batch that only moves
/// the selection does not become an undo step of its own: its final
/// selection is folded into the newest batch, so undo restores the
/// selection the user had before that step and redo returns to where the
/// user moved afterwards. A move made after undoing is folded into the
/// newest undone step, and redoing that step lands on the selection the
/// step itself left.
#[derive(Clone, Debug, Default)]
pub struct UndoHistory {
    undo: Vec<Vec<Change>>,
    redo: Vec<Vec<Change>>,
    limit: Option<usize>,
}

impl UndoHistory {
    /// Creates an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this history keeping at most `limit` undo steps.
    #[must_use]
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the number of undo steps available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    /// Returns `true` if there is nothing to undo.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }

    /// Returns `true` if [`UndoHistory::undo`] would do something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if [`UndoHistory::redo`] would do something.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Forgets all steps.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Adds the changes of one completed action.
    ///
    /// A batch that touches the document or root becomes a new undo step and
    /// discards the redo stack. A selection-only batch is folded into the
    /// newest step instead; with no step to fold into it is dropped.
    pub fn record(&mut self, changes: Vec<Change>) {
        if changes.is_empty() {
            return;
        }
        if changes.iter().any(|change| !change.is_selection_only()) {
            debug!(changes = changes.len(), "recording undo step");
            self.undo.push(changes);
            self.redo.clear();
            if let Some(limit) = self.limit {
                let excess = self.undo.len().saturating_sub(limit);
                self.undo.drain(..excess);
            }
            return;
        }
        let Some(last) = changes.into_iter().next_back() else {
            return;
        };
        if let Some(step) = self.undo.last_mut() {
            step.push(last.clone());
        }

        // Redo replays a stored step reversed and inverted, so the move
        // pushed here is undone first and the step's own selection wins.
        if let Some(step) = self.redo.last_mut() {
            step.push(last);
        }
    }

    /// Reverts the newest step. Returns `false` if there was none.
    pub fn undo(&mut self, graph: &mut Graph, selection: &mut Option<Cursor>) -> bool {
        let Some(step) = self.undo.pop() else {
            return false;
        };
        debug!(changes = step.len(), "undo");
        let inverse: Vec<Change> = step.into_iter().rev().map(Change::inverted).collect();
        for change in &inverse {
            change.apply(graph, selection);
        }
        self.redo.push(inverse);
        true
    }

    /// Reapplies the newest undone step. Returns `false` if there was none.
    pub fn redo(&mut self, graph: &mut Graph, selection: &mut Option<Cursor>) -> bool {
        let Some(inverse) = self.redo.pop() else {
            return false;
        };
        debug!(changes = inverse.len(), "redo");
        let step: Vec<Change> = inverse.into_iter().rev().map(Change::inverted).collect();
        for change in &step {
            change.apply(graph, selection);
        }
        self.undo.push(step);
        true
    }
}
