// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graft_id --heading-base-level=0

//! Graft Id: the identifier algebra of a structural document graph.
//!
//! A Graft document is a labeled, directed graph whose nodes, labels, and
//! values are all the same kind of thing: an [`Id`]. An id is one of
//!
//! - a [`Guid`]: a random 128-bit unique id addressing a structured node,
//! - a shared string, or
//! - a [`Number`].
//!
//! Because labels are ids too, the schema describing a document (constructors,
//! fields, types) can live in the same graph as the document itself.
//!
//! ## Minimal example
//!
//! ```rust
//! use graft_id::{Guid, Id};
//!
//! const NAME: Guid = Guid::from_u128(0x169a_81ae_fca7_4e92_b45e_3fa0_3c70_21df);
//!
//! let node = Id::new_guid();
//! let label = Id::from(NAME);
//! let value = Id::string("Alice");
//!
//! assert!(node.is_guid());
//! assert_eq!(label.to_string(), "169a81aefca74e92b45e3fa03c7021df");
//! assert_eq!(value.as_str(), Some("Alice"));
//! assert_eq!(Id::number(-0.0), Id::number(0.0));
//! ```
//!
//! ## Serialization
//!
//! Ids serialize as externally tagged objects, `{"guid": "…"}`,
//! `{"string": "…"}`, or `{"number": 3}`, with unique ids written as 32
//! lowercase hex characters.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod guid;
mod id;
mod number;

pub use guid::{Guid, ParseGuidError};
pub use id::Id;
pub use number::Number;
