// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use graft_graph::{Library, Store};
use graft_id::{Guid, Id};

use crate::ids::{ctor, field};

/// Builder for stores holding schema definitions.
///
/// Each method writes the edges of one definition using the meta-schema's
/// well-known labels. Lists are written as cons cells with fresh ids.
///
/// ```rust
/// use graft_schema::{SchemaBuilder, ids};
/// use graft_id::Guid;
///
/// let point = Guid::new();
/// let x = Guid::new();
/// let library = SchemaBuilder::new()
///     .field(x, "x", ids::ty::NUMBER)
///     .ctor(point, "Point", &[x])
///     .build("geometry", None);
/// assert_eq!(library.store().len(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SchemaBuilder {
    store: Store,
}

impl SchemaBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one edge.
    #[must_use]
    pub fn set(mut self, node: Guid, label: impl Into<Id>, value: impl Into<Id>) -> Self {
        self.store.set(node, label.into(), value.into());
        self
    }

    /// Writes a cons list of `items` and returns it alongside the builder.
    #[must_use]
    pub fn list(mut self, items: impl IntoIterator<Item = Id>) -> (Self, Id) {
        let id = write_list(&mut self.store, items);
        (self, id)
    }

    fn set_list(mut self, node: Guid, label: Guid, items: &[Guid]) -> Self {
        let list = write_list(&mut self.store, items.iter().copied().map(Id::Guid));
        self.store.set(node, Id::Guid(label), list);
        self
    }

    fn named(mut self, node: Guid, constructor: Guid, name: &str) -> Self {
        self.store.set(node, Id::Guid(field::CTOR), Id::Guid(constructor));
        self.store.set(node, Id::Guid(field::NAME), Id::string(name));
        self
    }

    /// Defines a constructor with the given fields, in order.
    #[must_use]
    pub fn ctor(self, id: Guid, name: &str, fields: &[Guid]) -> Self {
        self.named(id, ctor::CTOR, name)
            .set_list(id, field::FIELDS, fields)
    }

    /// Defines a field whose values should have type `ty`.
    #[must_use]
    pub fn field(self, id: Guid, name: &str, ty: Guid) -> Self {
        self.named(id, ctor::FIELD, name)
            .set(id, field::TYPE, ty)
    }

    /// Defines a field with no declared type.
    #[must_use]
    pub fn untyped_field(self, id: Guid, name: &str) -> Self {
        self.named(id, ctor::FIELD, name)
    }

    /// Defines an algebraic type over constructors and other types.
    #[must_use]
    pub fn algebraic_type(self, id: Guid, name: &str, members: &[Guid]) -> Self {
        self.named(id, ctor::ALGEBRAIC_TYPE, name)
            .set_list(id, field::CTOR_OR_ALGEBRAIC_TYPES, members)
    }

    /// Defines an atomic type.
    #[must_use]
    pub fn atomic_type(self, id: Guid, name: &str) -> Self {
        self.named(id, ctor::ATOMIC_TYPE, name)
    }

    /// Defines the type of lists whose elements have type `element`.
    #[must_use]
    pub fn list_type(self, id: Guid, element: Guid) -> Self {
        self.set(id, field::CTOR, ctor::LIST_TYPE)
            .set(id, field::TYPE, element)
    }

    /// Defines a module listing definitions and the renderers it contributes.
    #[must_use]
    pub fn module(self, id: Guid, name: &str, definitions: &[Guid], render_ctors: &[Guid]) -> Self {
        self.named(id, ctor::MODULE, name)
            .set_list(id, field::CTOR_OR_ALGEBRAIC_TYPES, definitions)
            .set_list(id, field::RENDER_CTORS, render_ctors)
    }

    /// Returns the store built so far.
    #[must_use]
    pub fn into_store(self) -> Store {
        self.store
    }

    /// Finishes as a library.
    #[must_use]
    pub fn build(self, name: impl Into<Arc<str>>, root: Option<Id>) -> Library {
        Library::new(name, root, self.store)
    }
}

/// Writes a cons list into `store`, returning the id of its first cell.
///
/// The empty list is a single cell with the empty-list constructor.
pub fn write_list(store: &mut Store, items: impl IntoIterator<Item = Id>) -> Id {
    let items: alloc::vec::Vec<Id> = items.into_iter().collect();
    let empty = Guid::new();
    store.set(empty, Id::Guid(field::CTOR), Id::Guid(ctor::EMPTY_LIST));
    items.into_iter().rev().fold(Id::Guid(empty), |tail, head| {
        let cell = Guid::new();
        store.set(cell, Id::Guid(field::CTOR), Id::Guid(ctor::NONEMPTY_LIST));
        store.set(cell, Id::Guid(field::HEAD), head);
        store.set(cell, Id::Guid(field::TAIL), tail);
        Id::Guid(cell)
    })
}
