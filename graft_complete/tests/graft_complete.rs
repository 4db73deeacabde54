// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `graft_complete` crate.
//!
//! A "people" schema declares a `Person` constructor whose `friend` field is
//! typed as `Person`. The document holds two named people.

use std::rc::Rc;

use graft_complete::{CommitTarget, Completions, Entry, EntryAction, EntryFlags};
use graft_graph::{Access, Graph, Passthrough, Txn};
use graft_id::{Guid, Id};
use graft_schema::{SchemaBuilder, core_library, ctor_of, ids};

const PERSON: Guid = Guid::from_u128(0x9e5);
const FRIEND: Guid = Guid::from_u128(0xf1e);
const PEOPLE: Guid = Guid::from_u128(0x9e0);
const ALICE: Guid = Guid::from_u128(0xa11ce);
const BOB: Guid = Guid::from_u128(0xb0b);

fn with_people<T>(f: impl FnOnce(&mut Txn<'_>) -> T) -> T {
    let schema = SchemaBuilder::new()
        .field(FRIEND, "friend", PERSON)
        .ctor(PERSON, "Person", &[FRIEND])
        .module(PEOPLE, "people", &[PERSON], &[])
        .build("people", Some(Id::Guid(PEOPLE)));
    let mut graph = Graph::new()
        .with_library(Rc::new(core_library()))
        .with_library(Rc::new(schema));
    let mut selection = None;
    let mut overlay = Passthrough;
    let mut txn = Txn::new(&mut graph, &mut selection, &mut overlay);
    for (node, name) in [(ALICE, "Alice"), (BOB, "Bob")] {
        txn.set(node, Id::Guid(ids::field::CTOR), Id::Guid(PERSON)).unwrap();
        txn.set(node, Id::Guid(ids::field::NAME), Id::string(name)).unwrap();
    }
    txn.set(ALICE, Id::Guid(FRIEND), Id::Guid(BOB)).unwrap();
    txn.set_root(Some(Id::Guid(ALICE))).unwrap();
    f(&mut txn)
}

fn find<'a>(entries: &'a [Entry], string: &str) -> &'a Entry {
    entries
        .iter()
        .find(|e| &*e.string == string)
        .unwrap_or_else(|| panic!("no entry {string:?}"))
}

#[test]
fn candidates_are_flagged_against_the_declared_type() {
    with_people(|txn| {
        let completions = Completions::build(txn, Some(&Id::Guid(PERSON)));
        let entries = completions.candidates();

        let new_person = find(entries, "new Person");
        assert_eq!(new_person.action, EntryAction::NewInstance(PERSON));
        assert!(new_person.flags.contains(EntryFlags::NEW | EntryFlags::MATCHING), "Person fits");
        assert!(!find(entries, "new Field").is_matching(), "Field is not a Person");

        let bob = find(entries, "Bob");
        assert_eq!(bob.disambiguation.as_deref(), Some("Person"));
        assert!(bob.is_matching(), "Bob is a Person");
        assert!(!bob.flags.contains(EntryFlags::EXTERNAL), "Bob lives in the document");

        let ctor = find(entries, "Ctor");
        assert!(ctor.flags.contains(EntryFlags::EXTERNAL), "Ctor comes from a library");
        assert!(!ctor.is_matching(), "Ctor is not a Person");
    });
}

#[test]
fn without_a_declared_type_everything_matches() {
    with_people(|txn| {
        let completions = Completions::build(txn, None);
        assert!(
            completions.candidates().iter().all(Entry::is_matching),
            "absent type means assume match"
        );
        let ranked = completions.entries("7");
        assert!(ranked.iter().any(|a| a.item.action == EntryAction::Literal(Id::number(7.0))));
    });
}

#[test]
fn ranking_puts_matching_first_and_literals_last() {
    with_people(|txn| {
        let completions = Completions::build(txn, Some(&Id::Guid(PERSON)));
        let ranked = completions.entries("");
        let matching: Vec<bool> = ranked.iter().map(|a| a.item.is_matching()).collect();
        let first_miss = matching.iter().position(|m| !m).unwrap();
        assert!(matching[first_miss..].iter().all(|m| !m), "matching entries lead");

        let last = ranked.last().unwrap();
        assert_eq!(&*last.item.string, "\"\"");
        assert!(last.item.is_magic(), "the string shortcut sorts last");
        assert!(
            ranked.iter().all(|a| a.item.action != EntryAction::Literal(Id::number(0.0))),
            "an empty needle is not a number"
        );
    });
}

#[test]
fn needle_filters_and_reports_spans() {
    with_people(|txn| {
        let completions = Completions::build(txn, Some(&Id::Guid(PERSON)));
        let ranked = completions.entries("Bo");
        assert_eq!(&*ranked[0].item.string, "Bob");
        assert_eq!(ranked[0].covered(), 2);
        assert!(ranked.iter().all(|a| &*a.item.string != "Alice"), "Alice has no b");
    });
}

#[test]
fn commit_new_instance_creates_a_node() {
    with_people(|txn| {
        let completions = Completions::build(txn, Some(&Id::Guid(PERSON)));
        let entry = find(completions.candidates(), "new Person").clone();
        let target = CommitTarget::Edge {
            node: BOB,
            label: Id::Guid(FRIEND),
        };
        let created = entry.commit(txn, &target).unwrap();
        assert_ne!(created, Id::Guid(PERSON));
        assert_eq!(ctor_of(txn, &created), Some(PERSON));
        assert_eq!(txn.get(&Id::Guid(BOB), &Id::Guid(FRIEND)).unwrap().value, created);
    });
}

#[test]
fn commit_to_root_and_into_libraries() {
    with_people(|txn| {
        let completions = Completions::build(txn, None);
        let bob = find(completions.candidates(), "Bob").clone();
        assert_eq!(bob.commit(txn, &CommitTarget::Root).unwrap(), Id::Guid(BOB));
        assert_eq!(txn.root(), Some(Id::Guid(BOB)));

        let into_library = CommitTarget::Edge {
            node: PERSON,
            label: Id::Guid(ids::field::NAME),
        };
        assert!(bob.commit(txn, &into_library).is_err(), "library nodes are read-only");
    });
}
