// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graft_editor --heading-base-level=0

//! Graft Editor: the state of an editing session and the intents that
//! change it.
//!
//! An [`EditorState`] owns a [`Graph`](graft_graph::Graph), the selection,
//! the collapse choices of a [`SpanningTree`](graft_spanning::SpanningTree),
//! an [`UndoHistory`](graft_graph::UndoHistory), and a clipboard. Hosts feed
//! it [`Intent`]s and render it again afterwards.
//!
//! - [`EditorState::run_edit`] runs one batch of writes through a
//!   [`Txn`](graft_graph::Txn) with an undo recorder installed. A batch that
//!   changes the document is one undo step; a batch that only moves the
//!   selection folds into the newest step. A refused write rolls the whole
//!   batch back.
//! - The functions in [`lists`] insert, append, and unlink list cells, and
//!   [`lists::delete_cursor`] deletes whatever is at a position.
//! - Keyboard intents move the selection over the rendered display tree
//!   with [`graft_display::nav`]; deleting reselects a neighbor.
//! - [`Intent::Copy`] captures the selected value and the structure on
//!   screen below it; the paste intents write either back.
//! - [`EditorConfig`] carries the undo limit and the rendering defaults,
//!   and deserializes from JSON.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use graft_display::nav::Direction;
//! use graft_editor::{EditorState, Intent};
//! use graft_graph::{Cursor, Graph, Store};
//! use graft_id::{Guid, Id};
//! use graft_schema::{SchemaBuilder, core_library, ids};
//!
//! let age = Guid::new();
//! let person = Guid::new();
//! let module = Guid::new();
//! let schema = SchemaBuilder::new()
//!     .field(age, "age", ids::ty::NUMBER)
//!     .ctor(person, "Person", &[age])
//!     .module(module, "people", &[person], &[])
//!     .build("people", Some(Id::Guid(module)));
//!
//! let alice = Guid::new();
//! let mut store = Store::new();
//! store.set(alice, Id::Guid(ids::field::CTOR), Id::Guid(person));
//! let graph = Graph::new()
//!     .with_library(Rc::new(core_library()))
//!     .with_library(Rc::new(schema))
//!     .with_document(store)
//!     .with_root(Some(Id::Guid(alice)));
//! let mut editor = EditorState::new(graph);
//!
//! // Tab lands on Alice's unset age.
//! editor.handle(Intent::Tab(Direction::Forward)).unwrap();
//! let slot = Cursor::root().child(Id::Guid(age));
//! assert_eq!(editor.selection(), Some(&slot));
//!
//! editor
//!     .handle(Intent::SetLiteral { cursor: slot, value: Id::number(30.0) })
//!     .unwrap();
//! let read = |editor: &EditorState| {
//!     editor
//!         .graph()
//!         .lookup(&Id::Guid(alice), &Id::Guid(age))
//!         .map(|hit| hit.value.clone())
//! };
//! assert_eq!(read(&editor), Some(Id::number(30.0)));
//!
//! assert!(editor.undo());
//! assert_eq!(read(&editor), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod intent;
pub mod lists;
mod state;

pub use config::{EditorConfig, EditorConfigBuilder};
pub use error::EditError;
pub use intent::{Arrow, Intent};
pub use state::{Clipboard, EditorState};
