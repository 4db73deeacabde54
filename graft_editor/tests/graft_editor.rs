// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `graft_editor` crate.
//!
//! Every test edits Alice, a `Person` with `friend`, `age`, and `numbers`
//! fields declared in a "people" library module, by feeding intents to an
//! `EditorState` the way a host would.

use std::rc::Rc;

use graft_complete::{CommitTarget, Entry, EntryAction, EntryFlags};
use graft_display::nav::Direction;
use graft_display::{D, DisplayTree};
use graft_editor::{Arrow, EditError, EditorConfig, EditorState, Intent};
use graft_graph::{Cursor, Graph, Library, Passthrough, Store, View, WriteError};
use graft_id::{Guid, Id};
use graft_schema::{ListShape, SchemaBuilder, core_library, ids, list_items, write_list};
use tracing_subscriber::EnvFilter;

const PERSON: Guid = Guid::from_u128(0x9e5);
const FRIEND: Guid = Guid::from_u128(0xf1e);
const AGE: Guid = Guid::from_u128(0xa9e);
const NUMBERS: Guid = Guid::from_u128(0x111);
const LIST_OF_NUMBER: Guid = Guid::from_u128(0x1157);
const PEOPLE: Guid = Guid::from_u128(0x9e0);
const ALICE: Guid = Guid::from_u128(0xa11ce);
const BOB: Guid = Guid::from_u128(0xb0b);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn graph(store: Store) -> Graph {
    let schema = SchemaBuilder::new()
        .field(FRIEND, "friend", PERSON)
        .field(AGE, "age", ids::ty::NUMBER)
        .list_type(LIST_OF_NUMBER, ids::ty::NUMBER)
        .field(NUMBERS, "numbers", LIST_OF_NUMBER)
        .ctor(PERSON, "Person", &[FRIEND, AGE, NUMBERS])
        .module(PEOPLE, "people", &[PERSON], &[])
        .build("people", Some(Id::Guid(PEOPLE)));
    Graph::new()
        .with_library(Rc::new(core_library()))
        .with_library(Rc::new(schema))
        .with_document(store)
        .with_root(Some(Id::Guid(ALICE)))
}

fn person(store: &mut Store, node: Guid, name: &str) {
    store.set(node, Id::Guid(ids::field::CTOR), Id::Guid(PERSON));
    store.set(node, Id::Guid(ids::field::NAME), Id::string(name));
}

fn editor(build: impl FnOnce(&mut Store)) -> EditorState {
    init_tracing();
    let mut store = Store::new();
    person(&mut store, ALICE, "Alice");
    build(&mut store);
    EditorState::new(graph(store))
}

fn with_numbers(numbers: &[f64]) -> EditorState {
    editor(|store| {
        let list = write_list(store, numbers.iter().map(|&n| Id::number(n)));
        store.set(ALICE, Id::Guid(NUMBERS), list);
    })
}

fn at(labels: &[Guid]) -> Cursor {
    labels
        .iter()
        .fold(Cursor::root(), |cursor, label| cursor.child(Id::Guid(*label)))
}

/// The position of the `index`th element of Alice's numbers.
fn element(index: usize) -> Cursor {
    let tail = Id::Guid(ids::field::TAIL);
    (0..index)
        .fold(at(&[NUMBERS]), |cursor, _| cursor.child(tail.clone()))
        .child(Id::Guid(ids::field::HEAD))
}

fn get(editor: &EditorState, node: Guid, label: Guid) -> Option<Id> {
    editor
        .graph()
        .lookup(&Id::Guid(node), &Id::Guid(label))
        .map(|hit| hit.value.clone())
}

fn numbers(editor: &EditorState) -> Vec<Id> {
    let list = get(editor, ALICE, NUMBERS).expect("Alice has numbers");
    let mut overlay = Passthrough;
    let mut view = View::new(editor.graph(), None, &mut overlay);
    list_items(&mut view, &list).expect("a list with every head set")
}

fn cell_count(editor: &EditorState) -> usize {
    let list = get(editor, ALICE, NUMBERS).expect("Alice has numbers");
    let mut overlay = Passthrough;
    let mut view = View::new(editor.graph(), None, &mut overlay);
    ListShape::read(&mut view, &at(&[NUMBERS]), &list)
        .expect("a well-formed list")
        .cells
        .len()
}

fn handle(editor: &mut EditorState, intent: Intent) -> bool {
    editor.handle(intent).expect("intent should not fail")
}

fn select(editor: &mut EditorState, cursor: Cursor) {
    assert!(handle(editor, Intent::Select(Some(cursor))), "selecting always applies");
}

#[test]
fn undo_restores_the_document_and_the_selection() {
    let mut editor = editor(|_| {});
    select(&mut editor, at(&[FRIEND]));
    let literal = Intent::SetLiteral {
        cursor: at(&[AGE]),
        value: Id::number(30.0),
    };
    assert!(handle(&mut editor, literal));
    assert_eq!(editor.history().len(), 1);

    // Moving afterwards folds into the same step.
    select(&mut editor, at(&[NUMBERS]));
    assert_eq!(editor.history().len(), 1, "selection moves are not steps");

    assert!(handle(&mut editor, Intent::Undo));
    assert_eq!(get(&editor, ALICE, AGE), None);
    assert_eq!(editor.selection(), Some(&at(&[FRIEND])));

    assert!(handle(&mut editor, Intent::Redo));
    assert_eq!(get(&editor, ALICE, AGE), Some(Id::number(30.0)));
    assert_eq!(editor.selection(), Some(&at(&[NUMBERS])));

    assert!(handle(&mut editor, Intent::Undo));
    assert!(!handle(&mut editor, Intent::Undo), "nothing left to undo");
}

#[test]
fn list_elements_are_inserted_around_the_selection() {
    let mut editor = with_numbers(&[1.0, 2.0]);
    select(&mut editor, element(0));

    assert!(handle(&mut editor, Intent::InsertAfter));
    assert_eq!(editor.selection(), Some(&element(1)), "the new element is selected");
    assert_eq!(cell_count(&editor), 3);

    assert!(handle(&mut editor, Intent::InsertBefore));
    assert_eq!(editor.selection(), Some(&element(1)));
    assert_eq!(cell_count(&editor), 4);

    assert!(handle(&mut editor, Intent::Undo));
    assert!(handle(&mut editor, Intent::Undo));
    assert_eq!(numbers(&editor), vec![Id::number(1.0), Id::number(2.0)]);
    assert_eq!(editor.selection(), Some(&element(0)));

    select(&mut editor, at(&[AGE]));
    assert!(!handle(&mut editor, Intent::InsertAfter), "age is not a list element");
    assert!(!handle(&mut editor, Intent::AppendToList), "age is not a list");
}

#[test]
fn an_unset_slot_grows_into_a_list() {
    let mut editor = editor(|_| {});
    select(&mut editor, at(&[NUMBERS]));

    assert!(handle(&mut editor, Intent::SetEmptyList));
    assert_eq!(numbers(&editor), Vec::<Id>::new());
    assert!(!handle(&mut editor, Intent::SetEmptyList), "the slot is no longer unset");

    assert!(handle(&mut editor, Intent::AppendToList));
    assert_eq!(editor.selection(), Some(&element(0)));
    assert!(handle(&mut editor, Intent::ListSeparator));
    assert_eq!(editor.selection(), Some(&element(1)));
    assert_eq!(cell_count(&editor), 2);

    select(&mut editor, at(&[NUMBERS]));
    assert!(handle(&mut editor, Intent::ListSeparator), "appends from the list itself");
    assert_eq!(editor.selection(), Some(&element(2)));
    assert_eq!(cell_count(&editor), 3);
}

#[test]
fn list_slots_insert_through_their_action() {
    let mut editor = with_numbers(&[1.0, 2.0]);
    let tree = editor.render();
    let list = tree
        .descendants(tree.root().unwrap())
        .find(|&id| matches!(tree.get(id), D::List { .. }))
        .expect("numbers render as a list");
    let action = tree.get(list).insert_action(1).unwrap();

    assert!(handle(&mut editor, Intent::Action(action)));
    assert_eq!(editor.selection(), Some(&element(1)));
    assert_eq!(cell_count(&editor), 3);
}

#[test]
fn deleting_a_list_element_selects_a_neighbor() {
    let mut editor = with_numbers(&[1.0, 2.0, 3.0]);
    select(&mut editor, element(1));

    assert!(handle(&mut editor, Intent::Delete));
    assert_eq!(numbers(&editor), vec![Id::number(1.0), Id::number(3.0)]);
    assert_eq!(editor.selection(), Some(&element(1)), "the element after it");

    assert!(handle(&mut editor, Intent::Delete));
    assert_eq!(numbers(&editor), vec![Id::number(1.0)]);
    assert_eq!(editor.selection(), Some(&element(0)), "nothing after, so the one before");

    assert!(handle(&mut editor, Intent::Undo));
    assert_eq!(numbers(&editor), vec![Id::number(1.0), Id::number(3.0)]);
    assert_eq!(editor.selection(), Some(&element(1)));

    assert!(handle(&mut editor, Intent::Backspace));
    assert_eq!(numbers(&editor), vec![Id::number(1.0)]);
    assert_eq!(editor.selection(), Some(&element(0)), "the element before it");
}

#[test]
fn deleting_a_field_removes_only_document_edges() {
    let mut editor = editor(|store| {
        store.set(ALICE, Id::Guid(AGE), Id::number(30.0));
    });
    select(&mut editor, at(&[AGE]));
    assert!(handle(&mut editor, Intent::Delete));
    assert_eq!(get(&editor, ALICE, AGE), None);
    assert!(editor.selection().is_some(), "something stays selected");

    select(&mut editor, at(&[AGE]));
    assert!(!handle(&mut editor, Intent::Delete), "already unset");

    select(&mut editor, at(&[ids::field::CTOR, ids::field::NAME]));
    assert!(!handle(&mut editor, Intent::Delete), "the constructor's name is library data");
    assert_eq!(get(&editor, PERSON, ids::field::NAME), Some(Id::string("Person")));

    assert!(handle(&mut editor, Intent::Escape));
    assert!(!handle(&mut editor, Intent::Delete), "nothing selected");
}

#[test]
fn refused_writes_roll_back_the_whole_edit() {
    let mut editor = editor(|_| {});
    let before = editor.graph().document().len();
    let entry = Entry {
        string: "new Person".into(),
        disambiguation: None,
        action: EntryAction::NewInstance(PERSON),
        flags: EntryFlags::NEW,
    };
    let target = CommitTarget::Edge {
        node: PERSON,
        label: Id::Guid(FRIEND),
    };
    let intent = Intent::Commit { entry, target };

    let error = editor.handle(intent.clone()).unwrap_err();
    assert!(
        matches!(error, EditError::Write(WriteError::LibraryNode(node)) if node == PERSON),
        "unexpected error: {error:?}"
    );
    assert_eq!(editor.graph().document().len(), before, "the new node was rolled back");
    assert!(editor.history().is_empty());

    let editor = editor.apply(intent);
    assert_eq!(editor.graph().document().len(), before);
}

#[test]
fn committing_an_entry_creates_a_node() {
    let mut editor = editor(|_| {});
    let entry = Entry {
        string: "new Person".into(),
        disambiguation: None,
        action: EntryAction::NewInstance(PERSON),
        flags: EntryFlags::NEW | EntryFlags::MATCHING,
    };
    let target = CommitTarget::Edge {
        node: ALICE,
        label: Id::Guid(FRIEND),
    };
    assert!(handle(&mut editor, Intent::Commit { entry, target }));
    let friend = get(&editor, ALICE, FRIEND).expect("friend was set");
    let friend = friend.as_guid().expect("a fresh node");
    assert_eq!(get(&editor, friend, ids::field::CTOR), Some(Id::Guid(PERSON)));
}

#[test]
fn tab_visits_unset_slots_and_escape_clears() {
    let mut editor = editor(|_| {});

    assert!(handle(&mut editor, Intent::Tab(Direction::Forward)));
    assert_eq!(editor.selection(), Some(&at(&[FRIEND])));
    assert!(handle(&mut editor, Intent::Tab(Direction::Forward)));
    assert_eq!(editor.selection(), Some(&at(&[AGE])));
    assert!(handle(&mut editor, Intent::Tab(Direction::Backward)));
    assert_eq!(editor.selection(), Some(&at(&[FRIEND])));

    assert!(handle(&mut editor, Intent::Escape));
    assert_eq!(editor.selection(), None);
    assert!(!handle(&mut editor, Intent::Escape), "nothing to clear");

    assert!(handle(&mut editor, Intent::Tab(Direction::Backward)));
    assert_eq!(editor.selection(), Some(&at(&[NUMBERS])), "the last unset slot");
}

#[test]
fn arrows_walk_the_display_tree() {
    let mut editor = editor(|_| {});

    assert!(handle(&mut editor, Intent::Arrow(Arrow::Down)));
    assert_eq!(editor.selection(), Some(&Cursor::root()));
    assert!(handle(&mut editor, Intent::Arrow(Arrow::Down)));
    assert_eq!(editor.selection(), Some(&at(&[ids::field::NAME])));
    assert!(handle(&mut editor, Intent::Arrow(Arrow::Right)));
    assert_eq!(editor.selection(), Some(&at(&[FRIEND])));
    assert!(handle(&mut editor, Intent::Arrow(Arrow::Left)));
    assert_eq!(editor.selection(), Some(&at(&[ids::field::NAME])));
    assert!(!handle(&mut editor, Intent::Arrow(Arrow::Left)), "nothing before the name");
    assert!(handle(&mut editor, Intent::Arrow(Arrow::Up)));
    assert_eq!(editor.selection(), Some(&Cursor::root()));
    assert!(!handle(&mut editor, Intent::Arrow(Arrow::Up)), "the root has no parent");
}

#[test]
fn collapse_actions_change_the_rendering() {
    let mut editor = editor(|store| {
        person(store, BOB, "Bob");
        store.set(ALICE, Id::Guid(FRIEND), Id::Guid(BOB));
    });
    let friend = at(&[FRIEND]);
    let buttons = |tree: &DisplayTree| {
        tree.descendants(tree.root().unwrap())
            .filter(|&id| matches!(tree.get(id), D::Button { .. }))
            .count()
    };
    assert_eq!(buttons(&editor.render()), 0);

    let collapse = graft_display::Action::SetCollapsed {
        cursor: friend.clone(),
        collapsed: Some(true),
    };
    assert!(handle(&mut editor, Intent::Action(collapse)));
    assert_eq!(editor.spanning().collapsed_at(friend.labels()), Some(true));
    assert_eq!(buttons(&editor.render()), 1);

    editor.set_collapsed(&friend, None);
    assert!(editor.spanning().is_empty());
}

#[test]
fn copies_paste_as_references_or_fresh_structure() {
    let mut editor = editor(|store| {
        person(store, BOB, "Bob");
        store.set(BOB, Id::Guid(AGE), Id::number(40.0));
        store.set(ALICE, Id::Guid(FRIEND), Id::Guid(BOB));
    });
    assert!(!handle(&mut editor, Intent::Copy), "nothing selected");

    select(&mut editor, at(&[FRIEND]));
    assert!(handle(&mut editor, Intent::Copy));
    let clipboard = editor.clipboard().unwrap();
    assert_eq!(clipboard.value, Id::Guid(BOB));
    assert!(clipboard.structure.is_some());

    select(&mut editor, at(&[FRIEND, FRIEND]));
    assert!(handle(&mut editor, Intent::PasteStructure));
    let copy = get(&editor, BOB, FRIEND).and_then(|id| id.as_guid()).unwrap();
    assert_ne!(copy, BOB, "a fresh node");
    assert_eq!(get(&editor, copy, ids::field::NAME), Some(Id::string("Bob")));
    assert_eq!(get(&editor, copy, AGE), Some(Id::number(40.0)));

    assert!(handle(&mut editor, Intent::Undo));
    assert_eq!(get(&editor, BOB, FRIEND), None);
    assert!(handle(&mut editor, Intent::PasteReference));
    assert_eq!(get(&editor, BOB, FRIEND), Some(Id::Guid(BOB)));

    select(&mut editor, at(&[FRIEND, AGE]));
    assert!(handle(&mut editor, Intent::Copy));
    assert_eq!(editor.clipboard().unwrap().structure, None, "literals have no structure");
}

#[test]
fn configuration_reaches_rendering_and_history() {
    let config = EditorConfig::builder()
        .undo_limit(1)
        .list_punctuation("(", ")", ";")
        .build();
    let mut store = Store::new();
    person(&mut store, ALICE, "Alice");
    let list = write_list(&mut store, [Id::number(1.0), Id::number(2.0)]);
    store.set(ALICE, Id::Guid(NUMBERS), list);
    let mut editor = EditorState::with_config(graph(store), config);

    for age in [1.0, 2.0] {
        let intent = Intent::SetLiteral {
            cursor: at(&[AGE]),
            value: Id::number(age),
        };
        assert!(handle(&mut editor, intent));
    }
    assert_eq!(editor.history().len(), 1, "only the newest step is kept");

    let text = editor.render().to_text();
    assert!(text.contains('(') && text.contains("1;"), "unexpected text: {text}");

    assert!(matches!(
        EditorConfig::from_json(r#"{ "undo_depth": 3 }"#),
        Err(EditError::Config(_))
    ));
}

#[test]
fn documents_round_trip_through_json() {
    let mut editor = with_numbers(&[1.0, 2.0]);
    let intent = Intent::SetLiteral {
        cursor: at(&[AGE]),
        value: Id::number(30.0),
    };
    assert!(handle(&mut editor, intent));

    let json = editor.to_json().unwrap();
    let libraries = editor.graph().libraries().to_vec();
    let loaded = EditorState::from_json(&json, libraries, EditorConfig::default()).unwrap();
    assert_eq!(get(&loaded, ALICE, AGE), Some(Id::number(30.0)));
    assert_eq!(numbers(&loaded), numbers(&editor));
    assert_eq!(loaded.save(), editor.save());
    assert!(loaded.history().is_empty(), "history is not saved");

    assert!(matches!(
        EditorState::from_json("{", Vec::<Rc<Library>>::new(), EditorConfig::default()),
        Err(EditError::Persist(_))
    ));
}
