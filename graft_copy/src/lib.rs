// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graft_copy --heading-base-level=0

//! Graft Copy: structural copy and paste.
//!
//! Copying a selection captures the nodes the user can see inside it. Starting
//! from the selection's [`D::Descend`](graft_display::D::Descend),
//! [`enclosed_nodes`] walks every nested descend and collects the unique-id
//! nodes between it and the node that owns its edge. Anything reached only
//! through a collapsed position, or outside the selection, is not copied and
//! stays a plain reference.
//!
//! [`serialize_selection`] turns those nodes into a [`SerializedClosure`]:
//! one [`ClosureEntry`] per copied node, root first, with each edge endpoint
//! either a [`Token`] (a copied node, written `new:<hex>`) or an id kept as
//! it is. [`SerializedClosure::materialize`] pastes it, giving every token a
//! fresh unique id so nodes shared inside the copy stay shared.
//!
//! ## Minimal example
//!
//! ```rust
//! use graft_copy::serialize_selection;
//! use graft_display::{RenderOptions, Renderer, render};
//! use graft_graph::{Access, Cursor, Graph, Passthrough, Store, Txn, View};
//! use graft_id::{Guid, Id};
//! use graft_spanning::SpanningTree;
//!
//! let alice = Guid::new();
//! let bob = Guid::new();
//! let friend = Id::string("friend");
//! let name = Id::string("name");
//!
//! let mut store = Store::new();
//! store.set(alice, friend.clone(), Id::Guid(bob));
//! store.set(bob, name.clone(), Id::string("Bob"));
//! let mut graph = Graph::new()
//!     .with_document(store)
//!     .with_root(Some(Id::Guid(alice)));
//!
//! let selection = Cursor::root().child(friend);
//! let closure = {
//!     let mut overlay = Passthrough;
//!     let mut view = View::new(&graph, Some(&selection), &mut overlay);
//!     let spanning = SpanningTree::new();
//!     let tree = render(&mut view, &spanning, &RenderOptions::default(), Renderer::always_fail());
//!     serialize_selection(&mut view, &tree, &selection).unwrap()
//! };
//! // Bob is copied; Alice owns the selected edge and is left out.
//! assert_eq!(closure.len(), 1);
//!
//! let mut cursor = None;
//! let mut overlay = Passthrough;
//! let mut txn = Txn::new(&mut graph, &mut cursor, &mut overlay);
//! let copy = closure.materialize(&mut txn).unwrap().unwrap();
//! assert_ne!(copy, Id::Guid(bob));
//! assert_eq!(txn.get(&copy, &name).map(|hit| hit.value), Some(Id::string("Bob")));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod closure;
mod token;

pub use closure::{ClosureEntry, SerializedClosure, enclosed_nodes, serialize_selection};
pub use token::{Endpoint, Token};
