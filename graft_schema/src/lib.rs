// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graft_schema --heading-base-level=0

//! Graft Schema: constructors, fields and types stored as graph data.
//!
//! A Graft schema is not Rust code. Constructors, fields and types are
//! ordinary nodes, usually living in a read-only library, and they are
//! described by a small meta-schema whose well-known ids live in [`ids`].
//! [`core_library`] builds that meta-schema as a [`Library`](graft_graph::Library).
//!
//! - A node's constructor is its [`ids::field::CTOR`] edge.
//! - A constructor lists its fields; a field may declare a type.
//! - A type is an algebraic type (a union of constructors and types), a list
//!   type, a single constructor, or an atomic type (strings, numbers).
//! - Lists are cons cells with `head` and `tail` edges, ending in an
//!   empty-list cell.
//!
//! [`type_matches`] checks a value against a declared type structurally, and
//! [`type_from_cursor`] finds the type declared for a position.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use graft_graph::{Cursor, Graph, Passthrough, Txn};
//! use graft_id::{Guid, Id};
//! use graft_schema::{SchemaBuilder, core_library, ids, type_from_cursor, type_matches};
//!
//! let person = Guid::new();
//! let age = Guid::new();
//! let schema = SchemaBuilder::new()
//!     .field(age, "age", ids::ty::NUMBER)
//!     .ctor(person, "Person", &[age])
//!     .build("people", None);
//!
//! let mut graph = Graph::new()
//!     .with_library(Rc::new(core_library()))
//!     .with_library(Rc::new(schema));
//! let mut selection = None;
//! let mut overlay = Passthrough;
//! let mut txn = Txn::new(&mut graph, &mut selection, &mut overlay);
//!
//! let alice = Guid::new();
//! txn.set(alice, Id::Guid(ids::field::CTOR), Id::Guid(person)).unwrap();
//! txn.set_root(Some(Id::Guid(alice))).unwrap();
//!
//! let slot = Cursor::root().child(Id::Guid(age));
//! let declared = type_from_cursor(&mut txn, &slot).unwrap();
//! assert_eq!(type_matches(&mut txn, &Id::number(30.0), &declared), Some(true));
//! assert_eq!(type_matches(&mut txn, &Id::string("thirty"), &declared), Some(false));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod builder;
pub mod ids;
mod list;
mod meta;
mod named;
mod types;

pub use builder::{SchemaBuilder, write_list};
pub use list::{ListCell, ListShape, ctor_of, is_list, is_list_head, list_items, name_of};
pub use meta::{CORE_LIBRARY_NAME, core_library};
pub use named::{NamedThing, named_things};
pub use types::{
    TypeView, algebraic_type_has_ctor, ctor_matches_type, type_from_cursor, type_is_or_has_atomic,
    type_matches,
};
