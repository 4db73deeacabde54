// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graft_display --heading-base-level=0

//! Graft Display: display trees projected from a Graft document.
//!
//! Rendering walks the document from its root and builds a [`DisplayTree`],
//! an arena of [`D`] nodes. Nothing in this crate writes to the document:
//! renderers read through an [`Access`](graft_graph::Access), and user intent
//! comes back out as [`Action`]s carried by buttons and list slots.
//!
//! - A [`Renderer`] either builds a node for a position or declines.
//!   Renderers compose by ordered fallback with [`Renderer::dispatch`].
//! - [`RenderCx::descend`] is the one way to render a child position. It
//!   collapses cycles (and anything collapsed in the
//!   [`SpanningTree`](graft_spanning::SpanningTree)) into an expand button,
//!   and otherwise wraps the child in a [`D::Descend`] carrying its cursor,
//!   how it relates to the selection, and whether its value fits the
//!   declared type.
//! - [`default_render`] handles any value: lists, placeholders with
//!   completions, nodes with their fields, and literal editors.
//! - [`RenderSpec`] reads render descriptions stored in the graph, and
//!   [`library_renderer`] collects those of every library module.
//! - [`DisplayTree::to_text`] exports plain text, and the functions in
//!   [`nav`] move between descends for keyboard navigation.
//!
//! ## Minimal example
//!
//! ```rust
//! use graft_display::{D, RenderOptions, Renderer, render};
//! use graft_graph::{Graph, Passthrough, Txn, View};
//! use graft_id::{Guid, Id};
//! use graft_spanning::SpanningTree;
//!
//! let alice = Guid::new();
//! let bob = Guid::new();
//! let friend = Id::string("friend");
//!
//! let mut graph = Graph::new();
//! let mut selection = None;
//! let mut overlay = Passthrough;
//! let mut txn = Txn::new(&mut graph, &mut selection, &mut overlay);
//! txn.set(alice, friend.clone(), Id::Guid(bob)).unwrap();
//! txn.set(bob, friend.clone(), Id::Guid(alice)).unwrap();
//! txn.set_root(Some(Id::Guid(alice))).unwrap();
//!
//! let mut overlay = Passthrough;
//! let mut view = View::new(&graph, None, &mut overlay);
//! let spanning = SpanningTree::new();
//! let tree = render(&mut view, &spanning, &RenderOptions::default(), Renderer::always_fail());
//!
//! // Alice's friend's friend is Alice again, shown as a button that expands it.
//! let root = tree.root().unwrap();
//! let buttons = tree
//!     .descendants(root)
//!     .filter(|&id| matches!(tree.get(id), D::Button { .. }))
//!     .count();
//! assert_eq!(buttons, 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod data;
mod generic;
pub mod nav;
mod render;
mod text;
mod tree;

pub use data::{RenderSpec, Template, library_renderer, module_renderer};
pub use generic::{default_render, is_single_line, list_renderer, render_field, render_list};
pub use render::{RenderCx, RenderOptions, Renderer, render};
pub use tree::{Action, D, DisplayId, DisplayTree, Editable, PlaceholderSelection, SelectionState};
