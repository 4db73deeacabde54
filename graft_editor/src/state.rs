// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::string::String;

use graft_complete::CommitTarget;
use graft_copy::{SerializedClosure, serialize_selection};
use graft_display::nav::{self, Direction};
use graft_display::{Action, DisplayId, DisplayTree, library_renderer};
use graft_graph::{
    Cursor, Graph, Library, Passthrough, ReadOnly, SavedGraph, Txn, UndoHistory, UndoRecorder,
    View, WriteError, rollback,
};
use graft_id::Id;
use graft_spanning::SpanningTree;
use tracing::{debug, trace, warn};

use crate::config::EditorConfig;
use crate::error::EditError;
use crate::intent::{Arrow, Intent};
use crate::lists;

/// What [`Intent::Copy`] captured.
#[derive(Clone, Debug, PartialEq)]
pub struct Clipboard {
    /// The copied value, pasted as is by [`Intent::PasteReference`].
    pub value: Id,
    /// The structure on screen below it, pasted fresh by
    /// [`Intent::PasteStructure`]. `None` for literals.
    pub structure: Option<SerializedClosure>,
}

/// A document being edited: graph, selection, collapse choices, and
/// history.
///
/// Every document change runs through [`EditorState::run_edit`], which
/// records it as one undo step, or rolls it back entirely if any write in
/// it is refused.
#[derive(Debug)]
pub struct EditorState {
    graph: Graph,
    selection: Option<Cursor>,
    spanning: SpanningTree<Id>,
    history: UndoHistory,
    config: EditorConfig,
    clipboard: Option<Clipboard>,
}

impl EditorState {
    /// Starts editing `graph` with the default configuration.
    #[must_use]
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, EditorConfig::default())
    }

    /// Starts editing `graph`.
    #[must_use]
    pub fn with_config(graph: Graph, config: EditorConfig) -> Self {
        Self {
            graph,
            selection: None,
            spanning: SpanningTree::new(),
            history: UndoHistory::new().with_limit(config.undo_limit),
            config,
            clipboard: None,
        }
    }

    /// Loads a saved document on top of `libraries`.
    pub fn from_json(
        text: &str,
        libraries: impl IntoIterator<Item = Rc<Library>>,
        config: EditorConfig,
    ) -> Result<Self, EditError> {
        let saved = SavedGraph::from_json(text)?;
        let graph = Graph::load(&saved, libraries);
        debug!(nodes = graph.document().len(), "loaded document");
        Ok(Self::with_config(graph, config))
    }

    /// Returns the document as it would be saved.
    #[must_use]
    pub fn save(&self) -> SavedGraph {
        self.graph.save()
    }

    /// Returns the saved document as JSON.
    pub fn to_json(&self) -> Result<String, EditError> {
        Ok(self.save().to_json()?)
    }

    /// The graph being edited.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The current selection.
    #[must_use]
    pub fn selection(&self) -> Option<&Cursor> {
        self.selection.as_ref()
    }

    /// The recorded collapse choices.
    #[must_use]
    pub fn spanning(&self) -> &SpanningTree<Id> {
        &self.spanning
    }

    /// The undo history.
    #[must_use]
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// What was copied last.
    #[must_use]
    pub fn clipboard(&self) -> Option<&Clipboard> {
        self.clipboard.as_ref()
    }

    /// Renders the document with every library module's renderers.
    ///
    /// Rendering reads through a [`ReadOnly`] overlay.
    #[must_use]
    pub fn render(&self) -> DisplayTree {
        let mut overlay = ReadOnly::new();
        let mut view = View::new(&self.graph, self.selection.as_ref(), &mut overlay);
        let renderer = library_renderer(&mut view);
        let tree = graft_display::render(
            &mut view,
            &self.spanning,
            &self.config.render_options(),
            renderer,
        );
        trace!(nodes = tree.len(), reads = overlay.log.gets.len(), "rendered");
        tree
    }

    /// Runs `edit` as one undoable step.
    ///
    /// If `edit` fails, every write it made is reverted and nothing is
    /// recorded.
    pub fn run_edit<T>(
        &mut self,
        edit: impl FnOnce(&mut Txn<'_>) -> Result<T, WriteError>,
    ) -> Result<T, EditError> {
        let mut recorder = UndoRecorder::new();
        let result = {
            let mut txn = Txn::new(&mut self.graph, &mut self.selection, &mut recorder);
            edit(&mut txn)
        };
        let changes = recorder.into_changes();
        match result {
            Ok(value) => {
                self.history.record(changes);
                Ok(value)
            }
            Err(error) => {
                warn!(%error, changes = changes.len(), "edit refused, rolling back");
                rollback(&mut self.graph, &mut self.selection, changes);
                Err(error.into())
            }
        }
    }

    /// Replaces the selection.
    ///
    /// This folds into the newest undo step rather than making one.
    pub fn select(&mut self, selection: Option<Cursor>) -> Result<(), EditError> {
        self.run_edit(|txn| txn.set_selection(selection))
    }

    /// Records (or with `None`, clears) the collapse choice at `cursor`.
    ///
    /// Collapse choices are presentation state and are not undoable.
    pub fn set_collapsed(&mut self, cursor: &Cursor, collapsed: Option<bool>) {
        trace!(?cursor, ?collapsed, "set collapsed");
        self.spanning.set_collapsed(cursor.labels(), collapsed);
    }

    /// Reverts the newest undo step. Returns `false` if there was none.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.graph, &mut self.selection)
    }

    /// Reapplies the newest undone step. Returns `false` if there was none.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.graph, &mut self.selection)
    }

    /// Carries out `intent`, returning whether it applied.
    ///
    /// An intent that does not apply where the selection is (deleting with
    /// nothing selected, inserting beside something that is not a list
    /// element) returns `Ok(false)` and changes nothing.
    pub fn handle(&mut self, intent: Intent) -> Result<bool, EditError> {
        trace!(?intent, "handle");
        match intent {
            Intent::Select(selection) => self.select(selection).map(|()| true),
            Intent::Escape => {
                if self.selection.is_none() {
                    return Ok(false);
                }
                self.select(None).map(|()| true)
            }
            Intent::Tab(direction) => self.tab(direction),
            Intent::Arrow(arrow) => self.arrow(arrow),
            Intent::Action(action) => self.action(action),
            Intent::Commit { entry, target } => {
                self.run_edit(|txn| entry.commit(txn, &target))?;
                Ok(true)
            }
            Intent::SetLiteral { cursor, value } => self.run_edit(|txn| {
                let Some(target) = CommitTarget::at(txn, &cursor) else {
                    return Ok(false);
                };
                target.write(txn, value)?;
                Ok(true)
            }),
            Intent::Delete => self.delete(Direction::Forward),
            Intent::Backspace => self.delete(Direction::Backward),
            Intent::InsertBefore => self.edit_at_selection(lists::insert_before),
            Intent::InsertAfter => self.edit_at_selection(lists::insert_after),
            Intent::AppendToList => self.edit_at_selection(lists::append_to_list),
            Intent::SetEmptyList => self.edit_at_selection(lists::set_empty_list),
            Intent::ListSeparator => self.edit_at_selection(|txn, cursor| {
                match lists::insert_after(txn, cursor)? {
                    Some(next) => Ok(Some(next)),
                    None => lists::append_to_list(txn, cursor),
                }
            }),
            Intent::Copy => Ok(self.copy()),
            Intent::PasteStructure => self.paste_structure(),
            Intent::PasteReference => self.paste_reference(),
            Intent::Undo => Ok(self.undo()),
            Intent::Redo => Ok(self.redo()),
        }
    }

    /// Carries out `intent` and returns the resulting state.
    ///
    /// A failed intent leaves the state as it was; the error is logged.
    #[must_use]
    pub fn apply(mut self, intent: Intent) -> Self {
        if let Err(error) = self.handle(intent) {
            warn!(%error, "intent failed");
        }
        self
    }

    fn selected_descend(&self, tree: &DisplayTree) -> Option<DisplayId> {
        let cursor = self.selection.as_ref()?;
        nav::find_descend(tree, tree.root()?, cursor)
    }

    fn select_descend(
        &mut self,
        tree: &DisplayTree,
        id: Option<DisplayId>,
    ) -> Result<bool, EditError> {
        let Some(cursor) = id.and_then(|id| tree.descend_cursor(id)).cloned() else {
            return Ok(false);
        };
        self.select(Some(cursor)).map(|()| true)
    }

    fn tab(&mut self, direction: Direction) -> Result<bool, EditError> {
        let tree = self.render();
        let Some(root) = tree.root() else {
            return Ok(false);
        };
        let stop = match self.selected_descend(&tree) {
            Some(from) => nav::next_tab_stop(&tree, from, direction),
            None => nav::tab_stop(&tree, root, direction),
        };
        let next = stop.and_then(|id| tree.descend_cursor(id)).cloned();
        self.select(next).map(|()| true)
    }

    fn arrow(&mut self, arrow: Arrow) -> Result<bool, EditError> {
        if arrow == Arrow::Down && self.selection.is_none() {
            return self.select(Some(Cursor::root())).map(|()| true);
        }
        let tree = self.render();
        let Some(from) = self.selected_descend(&tree) else {
            return Ok(false);
        };
        let to = match arrow {
            Arrow::Left => nav::sibling_descend(&tree, from, Direction::Backward),
            Arrow::Right => nav::sibling_descend(&tree, from, Direction::Forward),
            Arrow::Down => nav::first_child_descend(&tree, from),
            Arrow::Up => nav::parent_descend(&tree, from),
        };
        self.select_descend(&tree, to)
    }

    fn action(&mut self, action: Action) -> Result<bool, EditError> {
        match action {
            Action::SetCollapsed { cursor, collapsed } => {
                self.set_collapsed(&cursor, collapsed);
                Ok(true)
            }
            Action::InsertBefore { slot } => self.run_edit(|txn| {
                let Some(head) = lists::push_front(txn, &slot)? else {
                    return Ok(false);
                };
                txn.set_selection(Some(head))?;
                Ok(true)
            }),
        }
    }

    fn edit_at_selection(
        &mut self,
        edit: impl FnOnce(&mut Txn<'_>, &Cursor) -> Result<Option<Cursor>, WriteError>,
    ) -> Result<bool, EditError> {
        let Some(cursor) = self.selection.clone() else {
            return Ok(false);
        };
        self.run_edit(|txn| {
            let Some(next) = edit(txn, &cursor)? else {
                return Ok(false);
            };
            txn.set_selection(Some(next))?;
            Ok(true)
        })
    }

    /// Deletes at the selection, then selects a neighbor of what was
    /// deleted: the one after it going forward, the one before it going
    /// backward, each falling back to the other.
    fn delete(&mut self, direction: Direction) -> Result<bool, EditError> {
        let Some(cursor) = self.selection.clone() else {
            return Ok(false);
        };
        let tree = self.render();
        let anchor = self.selected_descend(&tree).and_then(|descend| {
            let index = tree.index_in_parent(descend)?;
            let parent = nav::parent_descend(&tree, descend)?;
            Some((tree.descend_cursor(parent)?.clone(), index))
        });
        if !self.run_edit(|txn| lists::delete_cursor(txn, &cursor))? {
            return Ok(false);
        }
        let tree = self.render();
        let next = reselect(&tree, anchor, direction);
        self.select(next)?;
        Ok(true)
    }

    fn copy(&mut self) -> bool {
        let Some(cursor) = self.selection.clone() else {
            return false;
        };
        let tree = self.render();
        let mut overlay = Passthrough;
        let mut view = View::new(&self.graph, self.selection.as_ref(), &mut overlay);
        let Some(value) = cursor.resolve(&mut view) else {
            return false;
        };
        let structure = serialize_selection(&mut view, &tree, &cursor);
        debug!(value = ?value.value, structured = structure.is_some(), "copied");
        self.clipboard = Some(Clipboard {
            value: value.value,
            structure,
        });
        true
    }

    fn paste_structure(&mut self) -> Result<bool, EditError> {
        let (Some(cursor), Some(closure)) = (
            self.selection.clone(),
            self.clipboard
                .as_ref()
                .and_then(|clipboard| clipboard.structure.clone()),
        ) else {
            return Ok(false);
        };
        self.run_edit(|txn| {
            let Some(target) = CommitTarget::at(txn, &cursor) else {
                return Ok(false);
            };
            let Some(root) = closure.materialize(txn)? else {
                return Ok(false);
            };
            target.write(txn, root)?;
            Ok(true)
        })
    }

    fn paste_reference(&mut self) -> Result<bool, EditError> {
        let (Some(cursor), Some(value)) = (
            self.selection.clone(),
            self.clipboard.as_ref().map(|clipboard| clipboard.value.clone()),
        ) else {
            return Ok(false);
        };
        self.run_edit(|txn| {
            let Some(target) = CommitTarget::at(txn, &cursor) else {
                return Ok(false);
            };
            target.write(txn, value)?;
            Ok(true)
        })
    }
}

/// Picks the selection after a deletion from the re-rendered `tree`.
///
/// `anchor` is the enclosing descend's cursor and the deleted descend's
/// index among its display siblings, both taken before the deletion.
fn reselect(
    tree: &DisplayTree,
    anchor: Option<(Cursor, usize)>,
    direction: Direction,
) -> Option<Cursor> {
    let root = tree.root()?;
    let picked = anchor.and_then(|(parent, index)| {
        let parent = nav::find_descend(tree, root, &parent)?;
        let Some(first) = nav::first_child_descend(tree, parent) else {
            return Some(parent);
        };
        let siblings = tree.children(tree.parent(first)?);
        let base = tree.index_in_parent(first)?;
        let (preferred, fallback) = match direction {
            Direction::Forward => (Some(index), index.checked_sub(1)),
            Direction::Backward => (index.checked_sub(1), Some(index)),
        };
        let at = |offset: Option<usize>| siblings.get(base.checked_add(offset?)?).copied();
        Some(at(preferred).or_else(|| at(fallback)).unwrap_or(parent))
    });
    tree.cursor_of(picked.unwrap_or(root)).cloned()
}
