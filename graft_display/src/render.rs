// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderers, the render context, and `descend`.

use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use graft_graph::{Access, Cursor, Source, Sourced};
use graft_id::Id;
use graft_schema::{type_from_cursor, type_matches};
use graft_spanning::SpanningTree;
use tracing::trace;

use crate::generic::default_render;
use crate::tree::{Action, D, DisplayId, DisplayTree, SelectionState};

type RenderFn = dyn Fn(&mut RenderCx<'_>, &Cursor, Option<&Sourced<Id>>) -> Option<DisplayId>;

/// A function projecting a position and its value into the display tree.
///
/// A renderer either builds a node and returns its id, or declines with
/// `None`. Renderers compose by ordered fallback; [`Renderer::always_fail`]
/// declines everything and is the identity of that composition.
///
/// Whatever a declining renderer built is discarded, so a renderer can give
/// up halfway through.
#[derive(Clone)]
pub struct Renderer(Rc<RenderFn>);

impl Renderer {
    /// Wraps a render function.
    pub fn new(
        f: impl Fn(&mut RenderCx<'_>, &Cursor, Option<&Sourced<Id>>) -> Option<DisplayId> + 'static,
    ) -> Self {
        Self(Rc::new(f))
    }

    /// A renderer that declines everything.
    #[must_use]
    pub fn always_fail() -> Self {
        Self::new(|_, _, _| None)
    }

    /// Tries each renderer in order and returns the first node built.
    #[must_use]
    pub fn dispatch(renderers: impl IntoIterator<Item = Self>) -> Self {
        let renderers: Vec<Self> = renderers.into_iter().collect();
        match renderers.len() {
            0 => Self::always_fail(),
            1 => renderers.into_iter().next().unwrap_or_else(Self::always_fail),
            _ => Self::new(move |cx, cursor, value| {
                renderers.iter().find_map(|r| r.render(cx, cursor, value))
            }),
        }
    }

    /// Tries `self`, then `other`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::dispatch([self, other])
    }

    /// Runs the renderer.
    pub fn render(
        &self,
        cx: &mut RenderCx<'_>,
        cursor: &Cursor,
        value: Option<&Sourced<Id>>,
    ) -> Option<DisplayId> {
        let mark = cx.tree.len();
        let built = (self.0)(cx, cursor, value);
        if built.is_none() {
            cx.tree.truncate(mark);
        }
        built
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::always_fail()
    }
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Renderer").finish_non_exhaustive()
    }
}

/// Presentation choices for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Shown for things without a name.
    pub unnamed: Arc<str>,
    /// Text before the first element of a list.
    pub opening: Arc<str>,
    /// Text after the last element of a list.
    pub closing: Arc<str>,
    /// Text between list elements.
    pub separator: Arc<str>,
    /// Whether a cycle with no recorded choice is collapsed.
    pub collapse_cycles: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            unnamed: "[unnamed]".into(),
            opening: "[".into(),
            closing: "]".into(),
            separator: ",".into(),
            collapse_cycles: true,
        }
    }
}

/// Everything one render pass reads and builds.
///
/// The context reads the graph through an [`Access`] only, so a pass cannot
/// write to the document.
pub struct RenderCx<'a> {
    access: &'a mut dyn Access,
    spanning: &'a SpanningTree<Id>,
    options: &'a RenderOptions,
    renderer: Renderer,
    tree: DisplayTree,
}

impl<'a> RenderCx<'a> {
    /// Creates a context with no ambient renderer.
    pub fn new(
        access: &'a mut dyn Access,
        spanning: &'a SpanningTree<Id>,
        options: &'a RenderOptions,
    ) -> Self {
        Self {
            access,
            spanning,
            options,
            renderer: Renderer::always_fail(),
            tree: DisplayTree::new(),
        }
    }

    /// Sets the ambient renderer, tried before the generic one at every
    /// position that has no context renderer of its own.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Returns the graph access.
    pub fn access(&mut self) -> &mut dyn Access {
        &mut *self.access
    }

    /// Returns the presentation options.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        self.options
    }

    /// Returns the tree built so far.
    #[must_use]
    pub fn tree(&self) -> &DisplayTree {
        &self.tree
    }

    /// Returns the tree built so far, for adding nodes.
    pub fn tree_mut(&mut self) -> &mut DisplayTree {
        &mut self.tree
    }

    /// Returns `true` if `cursor` is the selection.
    pub fn is_selected(&mut self, cursor: &Cursor) -> bool {
        self.access.selection().as_ref() == Some(cursor)
    }

    /// Returns how `cursor` relates to the selection.
    pub fn selection_state(&mut self, cursor: &Cursor) -> Option<SelectionState> {
        let selection = self.access.selection()?;
        if selection == *cursor {
            return Some(SelectionState::Selected);
        }
        let selected = selection.resolve(self.access)?;
        let here = cursor.resolve(self.access)?;
        (selected.value == here.value).then_some(SelectionState::Hinted)
    }

    /// Returns whether `cursor` is collapsed: the recorded choice if there
    /// is one, otherwise whether it is a cycle (when cycles collapse).
    pub fn is_collapsed(&mut self, cursor: &Cursor) -> bool {
        match self.spanning.collapsed_at(cursor.labels()) {
            Some(collapsed) => collapsed,
            None => self.options.collapse_cycles && cursor.is_cycle(self.access),
        }
    }

    /// Renders `value` at `cursor` with the ambient renderer, falling back
    /// to the generic default.
    pub fn render_default(&mut self, cursor: &Cursor, value: Option<&Sourced<Id>>) -> DisplayId {
        let renderer = self.renderer.clone();
        match renderer.render(self, cursor, value) {
            Some(id) => id,
            None => default_render(self, cursor, value),
        }
    }

    /// Renders the child of `cursor` through `label`, whose value is the
    /// `label` edge of `node`.
    ///
    /// A collapsed child becomes a button that expands it. Otherwise the
    /// child is rendered with `context`, falling back to
    /// [`render_default`](Self::render_default), and wrapped in a
    /// [`D::Descend`].
    pub fn descend(
        &mut self,
        cursor: &Cursor,
        node: &Id,
        label: Id,
        context: Option<&Renderer>,
    ) -> DisplayId {
        let child = cursor.child(label.clone());
        if self.is_collapsed(&child) {
            trace!(depth = child.depth(), "collapsed");
            return self.tree.push(
                D::Button {
                    text: "…".into(),
                    action: Action::SetCollapsed {
                        cursor: child,
                        collapsed: Some(false),
                    },
                },
                [],
            );
        }
        let value = self.access.get(node, &label);
        self.wrap(child, value, context)
    }

    /// Renders the document root as the outermost [`D::Descend`].
    pub fn render_root(&mut self) -> DisplayId {
        let value = self
            .access
            .root()
            .map(|root| Sourced::new(root, Source::Document));
        self.wrap(Cursor::root(), value, None)
    }

    fn wrap(
        &mut self,
        cursor: Cursor,
        value: Option<Sourced<Id>>,
        context: Option<&Renderer>,
    ) -> DisplayId {
        let rendered = context
            .and_then(|r| r.render(self, &cursor, value.as_ref()))
            .unwrap_or_else(|| self.render_default(&cursor, value.as_ref()));
        let selection = self.selection_state(&cursor);
        let mismatch = value.as_ref().is_some_and(|value| {
            type_from_cursor(self.access, &cursor)
                .and_then(|declared| type_matches(self.access, &value.value, &declared))
                == Some(false)
        });
        self.tree.push(
            D::Descend {
                cursor,
                selection,
                mismatch,
                unset: value.is_none(),
            },
            [rendered],
        )
    }

    /// Consumes the context, returning the tree rooted at `root`.
    #[must_use]
    pub fn finish(mut self, root: DisplayId) -> DisplayTree {
        self.tree.set_root(root);
        self.tree
    }
}

impl fmt::Debug for RenderCx<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderCx")
            .field("options", &self.options)
            .field("nodes", &self.tree.len())
            .finish_non_exhaustive()
    }
}

/// Renders the whole document from its root.
///
/// `renderer` is tried before the generic default at every position; pass
/// [`Renderer::always_fail`] for the generic rendering alone.
pub fn render(
    access: &mut dyn Access,
    spanning: &SpanningTree<Id>,
    options: &RenderOptions,
    renderer: Renderer,
) -> DisplayTree {
    let mut cx = RenderCx::new(access, spanning, options).with_renderer(renderer);
    let root = cx.render_root();
    cx.finish(root)
}
