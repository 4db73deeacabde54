// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graft_complete --heading-base-level=0

//! Graft Complete: ranked candidates for filling an unset slot.
//!
//! [`Completions::build`] snapshots everything that could go into a slot of
//! some declared type:
//!
//! - a "new C" entry for every named constructor, which creates a fresh node
//!   when committed;
//! - every named node in the libraries and the document, disambiguated by
//!   its constructor name;
//! - literal shortcuts synthesized from the needle itself: a number when the
//!   needle parses as one, and always a quoted string.
//!
//! Each entry is flagged with [`EntryFlags`]. [`Completions::entries`] runs the
//! candidates through [`Filter::default_chain`] and then stably sorts them so
//! that entries fitting the declared type come first and literal shortcuts
//! come last. [`Entry::commit`] writes the chosen value through a
//! [`Txn`](graft_graph::Txn).
//!
//! ## Minimal example
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use graft_complete::{CommitTarget, Completions};
//! use graft_graph::{Graph, Passthrough, Txn};
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
//! let mut graph = Graph::new()
//!     .with_library(Rc::new(core_library()))
//!     .with_library(Rc::new(schema));
//! let mut selection = None;
//! let mut overlay = Passthrough;
//! let mut txn = Txn::new(&mut graph, &mut selection, &mut overlay);
//!
//! let declared = Id::Guid(ids::ty::NUMBER);
//! let completions = Completions::build(&mut txn, Some(&declared));
//! let ranked = completions.entries("42");
//! // The number shortcut is the only candidate matching a number slot.
//! assert_eq!(&*ranked[0].item.string, "42");
//! assert!(ranked[0].item.is_matching());
//!
//! let alice = Guid::new();
//! let target = CommitTarget::Edge { node: alice, label: Id::Guid(age) };
//! let value = ranked[0].item.commit(&mut txn, &target).unwrap();
//! assert_eq!(value, Id::number(42.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::sync::Arc;
use alloc::vec::Vec;

use graft_filter::{Accepted, Filter};
use graft_graph::{Access, Source};
use graft_id::Id;
use graft_schema::ids::{ctor, ty};
use graft_schema::{
    NamedThing, TypeView, ctor_matches_type, ctor_of, name_of, named_things,
    type_is_or_has_atomic, type_matches,
};

mod entry;

pub use entry::{CommitTarget, Entry, EntryAction, EntryFlags};

const UNNAMED: &str = "[unnamed]";

/// A snapshot of completion candidates for one slot.
#[derive(Clone, Debug)]
pub struct Completions {
    entries: Vec<Entry>,
    number_matches: bool,
    string_matches: bool,
    filter: Filter,
}

impl Completions {
    /// Collects the candidates for a slot of type `declared`.
    ///
    /// With no declared type every candidate counts as matching.
    pub fn build(access: &mut (impl Access + ?Sized), declared: Option<&Id>) -> Self {
        let things = named_things(access);
        let mut entries = Vec::with_capacity(things.len() * 2);
        for thing in &things {
            if let Some(entry) = new_instance_entry(access, thing, declared) {
                entries.push(entry);
            }
        }
        for thing in things {
            entries.push(existing_entry(access, thing, declared));
        }

        let view = declared.and_then(|declared| TypeView::of(access, declared));
        let mut atomic =
            |atomic| view.is_none_or(|view| type_is_or_has_atomic(access, view, atomic));
        let number_matches = atomic(ty::NUMBER);
        let string_matches = atomic(ty::STRING);

        Self {
            entries,
            number_matches,
            string_matches,
            filter: Filter::default_chain(),
        }
    }

    /// Replaces the filter chain used by [`entries`](Self::entries).
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Returns the candidates that do not depend on the needle.
    #[must_use]
    pub fn candidates(&self) -> &[Entry] {
        &self.entries
    }

    /// Filters and ranks the candidates against `needle`.
    pub fn entries(&self, needle: &str) -> Vec<Accepted<Entry>> {
        let mut all = self.entries.clone();
        all.extend(number_literal(needle, self.number_matches));
        all.push(string_literal(needle, self.string_matches));

        let mut accepted = self.filter.apply(all, |entry| &*entry.string, needle).accepted;
        accepted.sort_by(|a, b| {
            b.item
                .is_matching()
                .cmp(&a.item.is_matching())
                .then(a.item.is_magic().cmp(&b.item.is_magic()))
        });
        accepted
    }
}

fn flag(flags: EntryFlags, set: bool) -> EntryFlags {
    if set { flags } else { EntryFlags::empty() }
}

fn new_instance_entry(
    access: &mut (impl Access + ?Sized),
    thing: &NamedThing,
    declared: Option<&Id>,
) -> Option<Entry> {
    let constructor = thing.id.as_guid()?;
    if ctor_of(access, &thing.id)? != ctor::CTOR {
        return None;
    }
    let matching = declared
        .and_then(|declared| ctor_matches_type(access, constructor, declared))
        .unwrap_or(true);
    Some(Entry {
        string: format!("new {}", thing.name).into(),
        disambiguation: None,
        action: EntryAction::NewInstance(constructor),
        flags: EntryFlags::NEW | flag(EntryFlags::MATCHING, matching),
    })
}

fn existing_entry(
    access: &mut (impl Access + ?Sized),
    thing: NamedThing,
    declared: Option<&Id>,
) -> Entry {
    let matching = declared
        .and_then(|declared| type_matches(access, &thing.id, declared))
        .unwrap_or(true);
    let disambiguation = ctor_of(access, &thing.id)
        .map(|c| name_of(access, &Id::Guid(c)).unwrap_or_else(|| Arc::from(UNNAMED)));
    let external = matches!(thing.source, Source::Library(_));
    Entry {
        string: thing.name,
        disambiguation,
        action: EntryAction::Existing(thing.id),
        flags: flag(EntryFlags::MATCHING, matching) | flag(EntryFlags::EXTERNAL, external),
    }
}

fn number_literal(needle: &str, matching: bool) -> Option<Entry> {
    let value: f64 = needle.trim().parse().ok()?;
    if needle.is_empty() || value.is_nan() {
        return None;
    }
    Some(Entry {
        string: needle.into(),
        disambiguation: None,
        action: EntryAction::Literal(Id::number(value)),
        flags: EntryFlags::EXTERNAL | EntryFlags::MAGIC | flag(EntryFlags::MATCHING, matching),
    })
}

fn string_literal(needle: &str, matching: bool) -> Entry {
    Entry {
        string: format!("\"{needle}\"").into(),
        disambiguation: None,
        action: EntryAction::Literal(Id::string(needle)),
        flags: EntryFlags::EXTERNAL | EntryFlags::MAGIC | flag(EntryFlags::MATCHING, matching),
    }
}
