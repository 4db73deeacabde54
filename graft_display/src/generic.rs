// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generic renderer, used wherever nothing more specific applies.

use alloc::sync::Arc;
use alloc::vec::Vec;

use graft_complete::{CommitTarget, Completions};
use graft_graph::{Cursor, Sourced};
use graft_id::{Guid, Id};
use graft_schema::ids::field;
use graft_schema::{ListShape, ctor_of, list_items, name_of, type_from_cursor};
use smallvec::SmallVec;

use crate::render::{RenderCx, Renderer};
use crate::tree::{D, DisplayId, DisplayTree, Editable, PlaceholderSelection};

/// Renders any value.
///
/// - A list renders as a [`D::List`] with the configured punctuation.
/// - An absent value renders as a [`D::Placeholder`] named after its field,
///   carrying completions when selected.
/// - A unique-id node renders as a line: its constructor name, its name,
///   then every field its constructor declares and every other edge it has.
/// - Strings and numbers render as editors, writable when they come from
///   the document.
pub fn default_render(
    cx: &mut RenderCx<'_>,
    cursor: &Cursor,
    value: Option<&Sourced<Id>>,
) -> DisplayId {
    let options = cx.options().clone();
    let (opening, closing, separator) = (&options.opening, &options.closing, &options.separator);
    if let Some(list) = render_list(cx, cursor, value, opening, closing, separator, None) {
        return list;
    }
    let Some(value) = value else {
        return placeholder(cx, cursor);
    };
    let selected = cx.is_selected(cursor).then_some(Editable {
        writable: value.source.is_writable(),
    });
    match &value.value {
        Id::Guid(guid) => render_node(cx, cursor, *guid),
        Id::String(text) => cx.tree_mut().push(
            D::StringEditor {
                value: text.clone(),
                selected,
            },
            [],
        ),
        Id::Number(number) => cx.tree_mut().push(
            D::NumberEditor {
                value: f64::from(*number),
                selected,
            },
            [],
        ),
    }
}

fn unnamed(cx: &RenderCx<'_>) -> Arc<str> {
    cx.options().unnamed.clone()
}

fn placeholder(cx: &mut RenderCx<'_>, cursor: &Cursor) -> DisplayId {
    let name = cursor
        .label()
        .and_then(|label| name_of(cx.access(), label))
        .unwrap_or_else(|| unnamed(cx));
    let selected = if cx.is_selected(cursor) {
        let declared = type_from_cursor(cx.access(), cursor);
        Some(PlaceholderSelection {
            completions: Completions::build(cx.access(), declared.as_ref()),
            target: CommitTarget::at(cx.access(), cursor),
        })
    } else {
        None
    };
    cx.tree_mut().push(D::Placeholder { name, selected }, [])
}

fn render_node(cx: &mut RenderCx<'_>, cursor: &Cursor, guid: Guid) -> DisplayId {
    let node = Id::Guid(guid);
    let name = Id::Guid(field::NAME);
    let ctor_label = Id::Guid(field::CTOR);

    let constructor = ctor_of(cx.access(), &node);
    let declared: Vec<Id> = constructor
        .and_then(|c| cx.access().get(&Id::Guid(c), &Id::Guid(field::FIELDS)))
        .and_then(|fields| list_items(cx.access(), &fields.value))
        .unwrap_or_default();
    let extra: Vec<Id> = cx
        .access()
        .edges(&node)
        .map(|edges| {
            edges
                .value
                .into_iter()
                .map(|(label, _)| label)
                .filter(|label| !declared.contains(label))
                .collect()
        })
        .unwrap_or_default();

    let ctor_name = constructor
        .and_then(|c| name_of(cx.access(), &Id::Guid(c)))
        .unwrap_or_else(|| unnamed(cx));
    let mut children: SmallVec<[DisplayId; 8]> = SmallVec::new();
    children.push(cx.tree_mut().text(ctor_name));
    if declared.contains(&name) || extra.contains(&name) {
        children.push(cx.tree_mut().text(" "));
        children.push(cx.descend(cursor, &node, name.clone(), None));
    }
    for label in declared.iter().chain(&extra) {
        if *label != name && *label != ctor_label {
            children.push(render_field(cx, cursor, &node, label.clone()));
        }
    }
    cx.tree_mut().line(children)
}

/// Renders the `label` edge of `node` under a caption naming the field.
///
/// Single-line content sits on the caption's line; anything else goes in an
/// indented block below it.
pub fn render_field(cx: &mut RenderCx<'_>, cursor: &Cursor, node: &Id, label: Id) -> DisplayId {
    let child = cx.descend(cursor, node, label.clone(), None);
    let caption = name_of(cx.access(), &label).unwrap_or_else(|| unnamed(cx));
    let tree = cx.tree_mut();
    let name = tree.text(caption);
    let colon = tree.text(":");
    let caption = tree.line([name, colon]);
    let caption = tree.push(
        D::Label {
            cursor: cursor.child(label),
        },
        [caption],
    );
    if is_single_line(tree, child) {
        let space = tree.text(" ");
        let line = tree.line([caption, space, child]);
        tree.block([line])
    } else {
        let body = tree.block([child]);
        tree.block([caption, body])
    }
}

/// Returns `true` if `id` lays out on one line.
pub fn is_single_line(tree: &DisplayTree, id: DisplayId) -> bool {
    let all = |tree: &DisplayTree| tree.children(id).iter().all(|&c| is_single_line(tree, c));
    match tree.get(id) {
        D::Block => false,
        D::Line | D::Descend { .. } | D::Label { .. } => all(tree),
        D::List { .. } => tree.children(id).len() > 1 || all(tree),
        D::Text(_)
        | D::Button { .. }
        | D::Placeholder { .. }
        | D::StringEditor { .. }
        | D::NumberEditor { .. } => true,
    }
}

/// Renders `value` as a list if it is one.
///
/// Each element is a descend into the head of its cell, rendered with
/// `context` when given. The list's insertion points are the slots of its
/// cells followed by the slot of the terminating empty list.
pub fn render_list(
    cx: &mut RenderCx<'_>,
    cursor: &Cursor,
    value: Option<&Sourced<Id>>,
    opening: &Arc<str>,
    closing: &Arc<str>,
    separator: &Arc<str>,
    context: Option<&Renderer>,
) -> Option<DisplayId> {
    let value = value?;
    let shape = ListShape::read(cx.access(), cursor, &value.value)?;
    let head = Id::Guid(field::HEAD);
    let children: Vec<DisplayId> = shape
        .cells
        .iter()
        .map(|cell| cx.descend(&cell.cursor, &Id::Guid(cell.cell), head.clone(), context))
        .collect();
    let mut slots: Vec<Cursor> = shape.cells.into_iter().map(|cell| cell.cursor).collect();
    slots.push(shape.end.cursor);
    Some(cx.tree_mut().push(
        D::List {
            opening: opening.clone(),
            closing: closing.clone(),
            separator: separator.clone(),
            slots,
        },
        children,
    ))
}

/// A renderer for lists with the given punctuation.
#[must_use]
pub fn list_renderer(
    opening: Arc<str>,
    closing: Arc<str>,
    separator: Arc<str>,
    context: Option<Renderer>,
) -> Renderer {
    Renderer::new(move |cx, cursor, value| {
        render_list(cx, cursor, value, &opening, &closing, &separator, context.as_ref())
    })
}
