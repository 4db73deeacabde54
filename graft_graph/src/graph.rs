// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of a writable document store with read-only libraries.

use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;

use graft_id::{Guid, Id};

use crate::store::Store;

/// Where a value was read from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    /// The writable document store.
    Document,
    /// The library at this index in [`Graph::libraries`].
    Library(usize),
}

impl Source {
    /// Returns `true` if values from this source may be edited in place.
    #[inline]
    #[must_use]
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Document)
    }
}

/// A value paired with the store it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sourced<T> {
    /// The value.
    pub value: T,
    /// Where it was found.
    pub source: Source,
}

impl<T> Sourced<T> {
    /// Pairs a value with its source.
    #[inline]
    pub const fn new(value: T, source: Source) -> Self {
        Self { value, source }
    }

    /// Maps the value, keeping the source.
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            value: f(self.value),
            source: self.source,
        }
    }
}

/// A named, read-only store of schema or shared content.
///
/// A library may designate a root node, from which its named definitions are
/// discovered.
#[derive(Clone, Debug)]
pub struct Library {
    name: Arc<str>,
    root: Option<Id>,
    store: Store,
}

impl Library {
    /// Creates a library from a finished store.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, root: Option<Id>, store: Store) -> Self {
        Self {
            name: name.into(),
            root,
            store,
        }
    }

    /// Returns the library's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the library's root node.
    #[must_use]
    pub fn root(&self) -> Option<&Id> {
        self.root.as_ref()
    }

    /// Returns the library's contents.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }
}

/// A document store layered over zero or more libraries, plus a root.
///
/// Reads consult the document first and then each library in order,
/// returning the first hit together with its [`Source`]. All writes target
/// the document; nodes defined by a library can never be written.
///
/// `Graph` itself does not intercept anything. Observed access goes through
/// [`View`](crate::View) (reads) and [`Txn`](crate::Txn) (reads and writes).
#[derive(Clone, Debug, Default)]
pub struct Graph {
    document: Store,
    libraries: Vec<Rc<Library>>,
    root: Option<Id>,
}

impl Graph {
    /// Creates an empty graph with no libraries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this graph with `library` consulted after those already present.
    ///
    /// In debug builds this asserts that the library defines no node the
    /// document or an earlier library already defines.
    #[must_use]
    pub fn with_library(mut self, library: Rc<Library>) -> Self {
        debug_assert!(
            library
                .store()
                .nodes()
                .all(|(guid, _)| self.defining_source(guid).is_none()),
            "library `{}` redefines an existing node",
            library.name()
        );
        self.libraries.push(library);
        self
    }

    /// Returns this graph with `document` as its writable store.
    #[must_use]
    pub fn with_document(mut self, document: Store) -> Self {
        self.document = document;
        self
    }

    /// Returns this graph with the given root.
    #[must_use]
    pub fn with_root(mut self, root: Option<Id>) -> Self {
        self.root = root;
        self
    }

    /// Returns the writable store.
    #[must_use]
    pub fn document(&self) -> &Store {
        &self.document
    }

    pub(crate) fn document_mut(&mut self) -> &mut Store {
        &mut self.document
    }

    /// Returns the libraries in lookup order.
    #[must_use]
    pub fn libraries(&self) -> &[Rc<Library>] {
        &self.libraries
    }

    /// Returns the designated root value.
    #[must_use]
    pub fn root(&self) -> Option<&Id> {
        self.root.as_ref()
    }

    pub(crate) fn set_root(&mut self, root: Option<Id>) -> Option<Id> {
        core::mem::replace(&mut self.root, root)
    }

    /// Returns which store defines `node`, if any.
    #[must_use]
    pub fn defining_source(&self, node: Guid) -> Option<Source> {
        if self.document.contains(node) {
            return Some(Source::Document);
        }
        self.libraries
            .iter()
            .position(|library| library.store().contains(node))
            .map(Source::Library)
    }

    /// Looks up one edge without interception.
    #[must_use]
    pub fn lookup(&self, node: &Id, label: &Id) -> Option<Sourced<&Id>> {
        if let Some(value) = self.document.get(node, label) {
            return Some(Sourced::new(value, Source::Document));
        }
        self.libraries.iter().enumerate().find_map(|(index, library)| {
            library
                .store()
                .get(node, label)
                .map(|value| Sourced::new(value, Source::Library(index)))
        })
    }

    /// Returns all edges of a node without interception.
    ///
    /// Edges come from the single store that defines the node.
    #[must_use]
    pub fn edges_of(&self, node: &Id) -> Option<Sourced<&[(Id, Id)]>> {
        if let Some(edges) = self.document.edges(node) {
            return Some(Sourced::new(edges, Source::Document));
        }
        self.libraries.iter().enumerate().find_map(|(index, library)| {
            library
                .store()
                .edges(node)
                .map(|edges| Sourced::new(edges, Source::Library(index)))
        })
    }
}
