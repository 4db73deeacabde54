// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observed reads and writes.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use graft_id::{Guid, Id};
use tracing::trace;

use crate::cursor::Cursor;
use crate::graph::{Graph, Library, Source, Sourced};
use crate::overlay::{Overlay, WriteError};

/// Read access to a graph with an overlay observing every read.
///
/// Reads take `&mut self` because the overlay may record them.
pub trait Access {
    /// Reads one edge.
    fn get(&mut self, node: &Id, label: &Id) -> Option<Sourced<Id>>;

    /// Reads all edges of a node, from the single store defining it.
    fn edges(&mut self, node: &Id) -> Option<Sourced<Vec<(Id, Id)>>>;

    /// Returns the document root.
    fn root(&mut self) -> Option<Id>;

    /// Returns the current selection.
    fn selection(&mut self) -> Option<Cursor>;

    /// Returns the libraries behind the document, in lookup order.
    ///
    /// Library contents never change, so this is not observed.
    fn libraries(&self) -> &[Rc<Library>];
}

fn get_from(
    graph: &Graph,
    overlay: &mut dyn Overlay,
    node: &Id,
    label: &Id,
) -> Option<Sourced<Id>> {
    overlay.on_get(node, label);
    graph.lookup(node, label).map(|hit| hit.map(Id::clone))
}

fn edges_from(
    graph: &Graph,
    overlay: &mut dyn Overlay,
    node: &Id,
) -> Option<Sourced<Vec<(Id, Id)>>> {
    overlay.on_edges(node);
    graph.edges_of(node).map(|hit| hit.map(<[(Id, Id)]>::to_vec))
}

/// A read-only window onto a graph and selection.
pub struct View<'a> {
    graph: &'a Graph,
    selection: Option<&'a Cursor>,
    overlay: &'a mut dyn Overlay,
}

impl<'a> View<'a> {
    /// Creates a view whose reads are reported to `overlay`.
    pub fn new(
        graph: &'a Graph,
        selection: Option<&'a Cursor>,
        overlay: &'a mut dyn Overlay,
    ) -> Self {
        Self {
            graph,
            selection,
            overlay,
        }
    }

    /// Returns the underlying graph without observation.
    #[must_use]
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("graph", &self.graph)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Access for View<'_> {
    fn get(&mut self, node: &Id, label: &Id) -> Option<Sourced<Id>> {
        get_from(self.graph, self.overlay, node, label)
    }

    fn edges(&mut self, node: &Id) -> Option<Sourced<Vec<(Id, Id)>>> {
        edges_from(self.graph, self.overlay, node)
    }

    fn root(&mut self) -> Option<Id> {
        self.graph.root().cloned()
    }

    fn selection(&mut self) -> Option<Cursor> {
        self.overlay.on_get_selection();
        self.selection.cloned()
    }

    fn libraries(&self) -> &[Rc<Library>] {
        self.graph.libraries()
    }
}

/// Read and write access to a graph and selection.
///
/// Every write is offered to the overlay first, together with the value it
/// replaces; an error from the overlay cancels the write. Writes always land
/// in the document store, and nodes defined by a library are refused.
pub struct Txn<'a> {
    graph: &'a mut Graph,
    selection: &'a mut Option<Cursor>,
    overlay: &'a mut dyn Overlay,
}

impl<'a> Txn<'a> {
    /// Creates a transaction whose accesses are reported to `overlay`.
    pub fn new(
        graph: &'a mut Graph,
        selection: &'a mut Option<Cursor>,
        overlay: &'a mut dyn Overlay,
    ) -> Self {
        Self {
            graph,
            selection,
            overlay,
        }
    }

    /// Returns the underlying graph without observation.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        self.graph
    }

    fn check_writable(&self, node: Guid) -> Result<(), WriteError> {
        match self.graph.defining_source(node) {
            Some(Source::Library(_)) => Err(WriteError::LibraryNode(node)),
            _ => Ok(()),
        }
    }

    /// Sets one edge of a document node.
    pub fn set(&mut self, node: Guid, label: Id, value: Id) -> Result<(), WriteError> {
        self.check_writable(node)?;
        let before = self.graph.document().get_guid(node, &label);
        self.overlay.will_set(node, &label, before, &value)?;
        trace!(%node, ?label, ?value, "set");
        self.graph.document_mut().set(node, label, value);
        Ok(())
    }

    /// Replaces all edges of a document node.
    ///
    /// This is expressed as deletes of labels no longer present followed by
    /// sets, so the overlay sees each individual change.
    pub fn set_many(&mut self, node: Guid, edges: Vec<(Id, Id)>) -> Result<(), WriteError> {
        self.check_writable(node)?;
        let stale: Vec<Id> = self
            .graph
            .document()
            .edges(&Id::Guid(node))
            .unwrap_or_default()
            .iter()
            .filter(|(label, _)| !edges.iter().any(|(l, _)| l == label))
            .map(|(label, _)| label.clone())
            .collect();
        for label in &stale {
            self.delete(node, label)?;
        }
        for (label, value) in edges {
            self.set(node, label, value)?;
        }
        Ok(())
    }

    /// Deletes one edge of a document node, returning its old value.
    ///
    /// Deleting a missing edge still notifies the overlay, with no old value.
    pub fn delete(&mut self, node: Guid, label: &Id) -> Result<Option<Id>, WriteError> {
        self.check_writable(node)?;
        let before = self.graph.document().get_guid(node, label);
        self.overlay.will_delete(node, label, before)?;
        trace!(%node, ?label, "delete");
        Ok(self.graph.document_mut().delete(node, label))
    }

    /// Replaces the document root.
    pub fn set_root(&mut self, root: Option<Id>) -> Result<(), WriteError> {
        self.overlay.will_set_root(self.graph.root(), root.as_ref())?;
        trace!(?root, "set root");
        self.graph.set_root(root);
        Ok(())
    }

    /// Replaces the selection.
    pub fn set_selection(&mut self, selection: Option<Cursor>) -> Result<(), WriteError> {
        self.overlay
            .will_set_selection(self.selection.as_ref(), selection.as_ref())?;
        *self.selection = selection;
        Ok(())
    }
}

impl fmt::Debug for Txn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Txn")
            .field("graph", &self.graph)
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl Access for Txn<'_> {
    fn get(&mut self, node: &Id, label: &Id) -> Option<Sourced<Id>> {
        get_from(self.graph, self.overlay, node, label)
    }

    fn edges(&mut self, node: &Id) -> Option<Sourced<Vec<(Id, Id)>>> {
        edges_from(self.graph, self.overlay, node)
    }

    fn root(&mut self) -> Option<Id> {
        self.graph.root().cloned()
    }

    fn selection(&mut self) -> Option<Cursor> {
        self.overlay.on_get_selection();
        self.selection.clone()
    }

    fn libraries(&self) -> &[Rc<Library>] {
        self.graph.libraries()
    }
}
