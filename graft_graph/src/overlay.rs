// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interception of graph access.

use alloc::vec::Vec;

use graft_id::{Guid, Id};
use thiserror::Error;
use tracing::warn;

use crate::cursor::Cursor;

/// Why a write through a [`Txn`](crate::Txn) was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum WriteError {
    /// A write was attempted while a [`ReadOnly`] overlay was installed.
    #[error("write attempted during a read-only pass")]
    ReadOnlyViolation,
    /// The node is defined by a library and cannot be edited.
    #[error("node {0} is defined by a library and cannot be written")]
    LibraryNode(Guid),
}

/// Hooks observing every access made through a [`View`](crate::View) or
/// [`Txn`](crate::Txn).
///
/// Read hooks see what was asked for. Write hooks run before the write
/// with both the old and new value; returning an error cancels the write.
/// Every hook defaults to doing nothing.
pub trait Overlay {
    /// Called before an edge is read.
    fn on_get(&mut self, _node: &Id, _label: &Id) {}

    /// Called before all edges of a node are read.
    fn on_edges(&mut self, _node: &Id) {}

    /// Called before the selection is read.
    fn on_get_selection(&mut self) {}

    /// Called before an edge is set.
    fn will_set(
        &mut self,
        _node: Guid,
        _label: &Id,
        _before: Option<&Id>,
        _after: &Id,
    ) -> Result<(), WriteError> {
        Ok(())
    }

    /// Called before an edge is deleted.
    fn will_delete(
        &mut self,
        _node: Guid,
        _label: &Id,
        _before: Option<&Id>,
    ) -> Result<(), WriteError> {
        Ok(())
    }

    /// Called before the document root changes.
    fn will_set_root(
        &mut self,
        _before: Option<&Id>,
        _after: Option<&Id>,
    ) -> Result<(), WriteError> {
        Ok(())
    }

    /// Called before the selection changes.
    fn will_set_selection(
        &mut self,
        _before: Option<&Cursor>,
        _after: Option<&Cursor>,
    ) -> Result<(), WriteError> {
        Ok(())
    }
}

impl<O: Overlay + ?Sized> Overlay for &mut O {
    fn on_get(&mut self, node: &Id, label: &Id) {
        (**self).on_get(node, label);
    }

    fn on_edges(&mut self, node: &Id) {
        (**self).on_edges(node);
    }

    fn on_get_selection(&mut self) {
        (**self).on_get_selection();
    }

    fn will_set(
        &mut self,
        node: Guid,
        label: &Id,
        before: Option<&Id>,
        after: &Id,
    ) -> Result<(), WriteError> {
        (**self).will_set(node, label, before, after)
    }

    fn will_delete(
        &mut self,
        node: Guid,
        label: &Id,
        before: Option<&Id>,
    ) -> Result<(), WriteError> {
        (**self).will_delete(node, label, before)
    }

    fn will_set_root(&mut self, before: Option<&Id>, after: Option<&Id>) -> Result<(), WriteError> {
        (**self).will_set_root(before, after)
    }

    fn will_set_selection(
        &mut self,
        before: Option<&Cursor>,
        after: Option<&Cursor>,
    ) -> Result<(), WriteError> {
        (**self).will_set_selection(before, after)
    }
}

/// An overlay that observes nothing and allows everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct Passthrough;

impl Overlay for Passthrough {}

/// What a [`ReadOnly`] pass read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadLog {
    /// Every `(node, label)` read, in order.
    pub gets: Vec<(Id, Id)>,
    /// Every node whose full edge list was read, in order.
    pub edges: Vec<Id>,
    /// Whether the selection was read.
    pub got_selection: bool,
}

/// An overlay that records reads and refuses every write.
///
/// Rendering runs under this overlay, so a render pass can be shown to have
/// had no effect on the document, and its [`ReadLog`] tells which reads a
/// later pass would need to repeat.
#[derive(Clone, Debug, Default)]
pub struct ReadOnly {
    /// Reads recorded so far.
    pub log: ReadLog,
}

impl ReadOnly {
    /// Creates an overlay with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the overlay, returning its log.
    #[must_use]
    pub fn into_log(self) -> ReadLog {
        self.log
    }

    fn refuse(what: &str) -> Result<(), WriteError> {
        warn!(what, "write refused during read-only pass");
        Err(WriteError::ReadOnlyViolation)
    }
}

impl Overlay for ReadOnly {
    fn on_get(&mut self, node: &Id, label: &Id) {
        self.log.gets.push((node.clone(), label.clone()));
    }

    fn on_edges(&mut self, node: &Id) {
        self.log.edges.push(node.clone());
    }

    fn on_get_selection(&mut self) {
        self.log.got_selection = true;
    }

    fn will_set(&mut self, _: Guid, _: &Id, _: Option<&Id>, _: &Id) -> Result<(), WriteError> {
        Self::refuse("set")
    }

    fn will_delete(&mut self, _: Guid, _: &Id, _: Option<&Id>) -> Result<(), WriteError> {
        Self::refuse("delete")
    }

    fn will_set_root(&mut self, _: Option<&Id>, _: Option<&Id>) -> Result<(), WriteError> {
        Self::refuse("set_root")
    }

    fn will_set_selection(
        &mut self,
        _: Option<&Cursor>,
        _: Option<&Cursor>,
    ) -> Result<(), WriteError> {
        Self::refuse("set_selection")
    }
}

/// Two overlays run in sequence: `.0` first, then `.1`.
///
/// A write hook error from `.0` stops the write before `.1` sees it.
#[derive(Clone, Debug, Default)]
pub struct Compose<A, B>(pub A, pub B);

impl<A: Overlay, B: Overlay> Overlay for Compose<A, B> {
    fn on_get(&mut self, node: &Id, label: &Id) {
        self.0.on_get(node, label);
        self.1.on_get(node, label);
    }

    fn on_edges(&mut self, node: &Id) {
        self.0.on_edges(node);
        self.1.on_edges(node);
    }

    fn on_get_selection(&mut self) {
        self.0.on_get_selection();
        self.1.on_get_selection();
    }

    fn will_set(
        &mut self,
        node: Guid,
        label: &Id,
        before: Option<&Id>,
        after: &Id,
    ) -> Result<(), WriteError> {
        self.0.will_set(node, label, before, after)?;
        self.1.will_set(node, label, before, after)
    }

    fn will_delete(
        &mut self,
        node: Guid,
        label: &Id,
        before: Option<&Id>,
    ) -> Result<(), WriteError> {
        self.0.will_delete(node, label, before)?;
        self.1.will_delete(node, label, before)
    }

    fn will_set_root(&mut self, before: Option<&Id>, after: Option<&Id>) -> Result<(), WriteError> {
        self.0.will_set_root(before, after)?;
        self.1.will_set_root(before, after)
    }

    fn will_set_selection(
        &mut self,
        before: Option<&Cursor>,
        after: Option<&Cursor>,
    ) -> Result<(), WriteError> {
        self.0.will_set_selection(before, after)?;
        self.1.will_set_selection(before, after)
    }
}
