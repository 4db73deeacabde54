// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graft_graph --heading-base-level=0

//! Graft Graph: the document model of a structural editor.
//!
//! A document is a directed graph of labeled edges. Every node and every
//! label is an [`Id`](graft_id::Id); only unique-id nodes carry edges.
//!
//! - [`Store`] holds edges. [`Graph`] layers a writable document store over
//!   read-only [`Library`] stores and tracks the document root. Every read
//!   reports the [`Source`] it came from.
//! - [`Cursor`] names a position by the labels followed from the root, and
//!   detects positions that repeat an edge already on the path.
//! - [`View`] and [`Txn`] implement [`Access`]: reads and writes that run
//!   through an [`Overlay`]. Overlays observe reads and can veto writes.
//!   [`ReadOnly`] logs reads and refuses every write; [`UndoRecorder`]
//!   captures writes as [`Change`]s for [`UndoHistory`].
//! - [`Graph::save`] and [`Graph::load`] convert to and from [`SavedGraph`],
//!   keeping only nodes reachable from the root.
//!
//! ## Minimal example
//!
//! ```rust
//! use graft_graph::{Access, Cursor, Graph, Passthrough, Txn, UndoHistory, UndoRecorder};
//! use graft_id::{Guid, Id};
//!
//! let alice = Guid::new();
//! let bob = Guid::new();
//! let friend = Id::string("friend");
//!
//! let mut graph = Graph::new();
//! let mut selection = None;
//! let mut history = UndoHistory::new();
//!
//! let mut recorder = UndoRecorder::new();
//! let mut txn = Txn::new(&mut graph, &mut selection, &mut recorder);
//! txn.set(alice, friend.clone(), Id::Guid(bob)).unwrap();
//! txn.set(bob, friend.clone(), Id::Guid(alice)).unwrap();
//! txn.set_root(Some(Id::Guid(alice))).unwrap();
//! history.record(recorder.into_changes());
//!
//! let once = Cursor::root().child(friend.clone());
//! let twice = once.child(friend.clone());
//! let mut overlay = Passthrough;
//! let mut txn = Txn::new(&mut graph, &mut selection, &mut overlay);
//! assert_eq!(twice.resolve(&mut txn).map(|hit| hit.value), Some(Id::Guid(alice)));
//! assert!(!once.is_cycle(&mut txn));
//! assert!(twice.is_cycle(&mut txn));
//!
//! assert!(history.undo(&mut graph, &mut selection));
//! assert!(graph.document().is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod access;
mod cursor;
mod graph;
mod overlay;
mod persist;
mod store;
mod undo;

pub use access::{Access, Txn, View};
pub use cursor::Cursor;
pub use graph::{Graph, Library, Source, Sourced};
pub use overlay::{Compose, Overlay, Passthrough, ReadLog, ReadOnly, WriteError};
pub use persist::{PersistError, SavedEdge, SavedGraph, reachable_from};
pub use store::Store;
pub use undo::{Change, UndoHistory, UndoRecorder, rollback};
