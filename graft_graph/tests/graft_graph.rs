// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `graft_graph` crate.
//!
//! These drive the graph through `Txn` the way an editor does: each action
//! runs under an `UndoRecorder`, and its changes are handed to `UndoHistory`.

use std::rc::Rc;

use graft_graph::{
    Access, Compose, Cursor, Graph, Library, Passthrough, ReadOnly, SavedGraph, Source, Store, Txn,
    UndoHistory, UndoRecorder, View, WriteError,
};
use graft_id::{Guid, Id};

const ALICE: Guid = Guid::from_u128(0xa11ce);
const BOB: Guid = Guid::from_u128(0xb0b);

fn friend() -> Id {
    Id::string("friend")
}

struct Editor {
    graph: Graph,
    selection: Option<Cursor>,
    history: UndoHistory,
}

impl Editor {
    fn new() -> Self {
        Self {
            graph: Graph::new(),
            selection: None,
            history: UndoHistory::new(),
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut Txn<'_>) -> Result<(), WriteError>) {
        let mut recorder = UndoRecorder::new();
        let mut txn = Txn::new(&mut self.graph, &mut self.selection, &mut recorder);
        f(&mut txn).unwrap();
        self.history.record(recorder.into_changes());
    }

    fn read<T>(&self, f: impl FnOnce(&mut View<'_>) -> T) -> T {
        let mut overlay = Passthrough;
        let mut view = View::new(&self.graph, self.selection.as_ref(), &mut overlay);
        f(&mut view)
    }

    fn undo(&mut self) -> bool {
        self.history.undo(&mut self.graph, &mut self.selection)
    }

    fn redo(&mut self) -> bool {
        self.history.redo(&mut self.graph, &mut self.selection)
    }
}

fn alice_and_bob() -> Editor {
    let mut editor = Editor::new();
    editor.edit(|txn| {
        txn.set(ALICE, Id::string("name"), Id::string("alice"))?;
        txn.set(BOB, Id::string("name"), Id::string("bob"))?;
        txn.set(ALICE, friend(), Id::Guid(BOB))?;
        txn.set(BOB, friend(), Id::Guid(ALICE))?;
        txn.set_root(Some(Id::Guid(ALICE)))
    });
    editor
}

#[test]
fn friend_of_friend_is_a_cycle() {
    let editor = alice_and_bob();
    let once = Cursor::root().child(friend());
    let twice = once.child(friend());
    let name = twice.child(Id::string("name"));

    editor.read(|view| {
        assert!(!Cursor::root().is_cycle(view));
        assert!(!once.is_cycle(view));
        assert!(twice.is_cycle(view));
        // Leaving the repeated node through a different label is fine.
        assert!(!name.is_cycle(view));
        assert_eq!(
            name.resolve(view).map(|hit| hit.value),
            Some(Id::string("alice"))
        );
    });
}

#[test]
fn cycles_through_different_labels_are_found() {
    let mut editor = Editor::new();
    editor.edit(|txn| {
        txn.set(ALICE, Id::string("boss"), Id::Guid(BOB))?;
        txn.set(BOB, Id::string("report"), Id::Guid(ALICE))?;
        txn.set_root(Some(Id::Guid(ALICE)))
    });
    let labels = [Id::string("boss"), Id::string("report")];
    let first = editor.read(|view| {
        let mut cursor = Cursor::root();
        (1_usize..=40).find(|depth| {
            cursor = cursor.child(labels[(depth - 1) % labels.len()].clone());
            cursor.is_cycle(view)
        })
    });
    assert_eq!(first, Some(3));
}

#[test]
fn deleting_the_back_edge_breaks_the_cycle() {
    let mut editor = alice_and_bob();
    editor.edit(|txn| txn.delete(BOB, &friend()).map(drop));
    let twice = Cursor::root().child(friend()).child(friend());
    editor.read(|view| {
        assert_eq!(twice.resolve(view), None);
        assert!(!twice.is_cycle(view));
    });
}

#[test]
fn undo_and_redo_restore_state() {
    let mut editor = alice_and_bob();
    editor.edit(|txn| txn.set(ALICE, Id::string("name"), Id::string("alicia")));

    let name = Cursor::root().child(Id::string("name"));
    let read_name = |editor: &Editor| editor.read(|view| name.resolve(view).map(|hit| hit.value));
    assert_eq!(read_name(&editor), Some(Id::string("alicia")));

    assert!(editor.undo());
    assert_eq!(read_name(&editor), Some(Id::string("alice")));
    assert!(editor.redo());
    assert_eq!(read_name(&editor), Some(Id::string("alicia")));

    assert!(editor.undo());
    assert!(editor.undo());
    assert!(editor.graph.document().is_empty());
    assert_eq!(editor.graph.root(), None);
    assert!(!editor.undo());
}

#[test]
fn new_edits_discard_redo() {
    let mut editor = alice_and_bob();
    editor.edit(|txn| txn.set(ALICE, Id::string("age"), Id::number(30.0)));
    assert!(editor.undo());
    assert!(editor.history.can_redo());
    editor.edit(|txn| txn.set(ALICE, Id::string("age"), Id::number(31.0)));
    assert!(!editor.history.can_redo());
}

#[test]
fn selection_moves_fold_into_the_previous_step() {
    let mut editor = alice_and_bob();
    let before = Some(Cursor::root());
    editor.edit(|txn| txn.set_selection(before.clone()));
    editor.edit(|txn| txn.set(ALICE, Id::string("age"), Id::number(30.0)));
    let after = Some(Cursor::root().child(Id::string("age")));
    editor.edit(|txn| txn.set_selection(after.clone()));
    assert_eq!(editor.history.len(), 2);

    assert!(editor.undo());
    assert_eq!(editor.selection, before);
    assert!(editor.redo());
    assert_eq!(editor.selection, after);
}

#[test]
fn redo_after_moving_returns_to_the_step_selection() {
    let mut editor = alice_and_bob();
    let age = Some(Cursor::root().child(Id::string("age")));
    editor.edit(|txn| {
        txn.set(ALICE, Id::string("age"), Id::number(30.0))?;
        txn.set_selection(age.clone())
    });
    assert!(editor.undo());
    assert_eq!(editor.selection, None);

    let name = Some(Cursor::root().child(Id::string("name")));
    editor.edit(|txn| txn.set_selection(name.clone()));
    assert!(editor.redo());
    assert_eq!(editor.selection, age);

    assert!(editor.undo());
    assert_eq!(editor.selection, name);
}

#[test]
fn unchanged_selection_records_nothing() {
    let mut editor = Editor::new();
    editor.edit(|txn| txn.set_selection(None));
    let mut recorder = UndoRecorder::new();
    let mut txn = Txn::new(&mut editor.graph, &mut editor.selection, &mut recorder);
    txn.set_selection(None).unwrap();
    assert!(recorder.changes().is_empty());
}

#[test]
fn read_only_logs_reads_and_refuses_writes() {
    let mut editor = alice_and_bob();
    let mut overlay = ReadOnly::new();
    {
        let mut txn = Txn::new(&mut editor.graph, &mut editor.selection, &mut overlay);
        let once = Cursor::root().child(friend());
        assert_eq!(once.resolve(&mut txn).map(|hit| hit.value), Some(Id::Guid(BOB)));
        assert_eq!(txn.selection(), None);
        assert_eq!(
            txn.set(BOB, friend(), Id::Guid(BOB)),
            Err(WriteError::ReadOnlyViolation)
        );
        assert_eq!(txn.delete(BOB, &friend()), Err(WriteError::ReadOnlyViolation));
        assert_eq!(txn.set_root(None), Err(WriteError::ReadOnlyViolation));
    }
    let log = overlay.into_log();
    assert_eq!(log.gets, [(Id::Guid(ALICE), friend())]);
    assert!(log.got_selection);
    assert_eq!(editor.graph.root(), Some(&Id::Guid(ALICE)));
}

#[test]
fn compose_stops_at_first_refusal() {
    let mut graph = Graph::new();
    let mut selection = None;
    let mut overlay = Compose(ReadOnly::new(), UndoRecorder::new());
    let mut txn = Txn::new(&mut graph, &mut selection, &mut overlay);
    assert!(txn.set(ALICE, friend(), Id::Guid(BOB)).is_err());
    assert!(overlay.1.changes().is_empty());
}

#[test]
fn libraries_are_read_through_but_not_written() {
    let lib_node = Guid::from_u128(0x11b);
    let mut store = Store::new();
    store.set(lib_node, Id::string("name"), Id::string("Number"));
    let library = Rc::new(Library::new("core", Some(Id::Guid(lib_node)), store));

    let mut editor = alice_and_bob();
    editor.graph = editor.graph.clone().with_library(library);
    editor.edit(|txn| txn.set(ALICE, Id::string("type"), Id::Guid(lib_node)));

    let type_name = Cursor::root()
        .child(Id::string("type"))
        .child(Id::string("name"));
    editor.read(|view| {
        let hit = type_name.resolve(view).unwrap();
        assert_eq!(hit.value, Id::string("Number"));
        assert_eq!(hit.source, Source::Library(0));
        assert_eq!(view.libraries()[0].name(), "core");
    });

    let mut recorder = UndoRecorder::new();
    let mut txn = Txn::new(&mut editor.graph, &mut editor.selection, &mut recorder);
    assert_eq!(
        txn.set(lib_node, Id::string("name"), Id::string("Int")),
        Err(WriteError::LibraryNode(lib_node))
    );
    assert!(recorder.changes().is_empty());
}

#[test]
fn save_and_load_through_json() {
    let mut editor = alice_and_bob();
    editor.edit(|txn| txn.set(Guid::from_u128(0xdead), Id::string("junk"), Id::number(1.0)));

    let json = editor.graph.save().to_json_pretty().unwrap();
    let saved = SavedGraph::from_json(&json).unwrap();
    assert_eq!(saved.store.len(), 2);

    let loaded = Graph::load(&saved, []);
    assert_eq!(loaded.root(), Some(&Id::Guid(ALICE)));
    assert_eq!(
        loaded
            .lookup(&Id::Guid(BOB), &friend())
            .map(|hit| hit.value.clone()),
        Some(Id::Guid(ALICE))
    );
    assert_eq!(loaded.save(), saved);
}

#[test]
fn malformed_json_is_an_error() {
    assert!(SavedGraph::from_json("{\"root\": 3}").is_err());
}
