// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderers described by graph data.
//!
//! Render descriptions are nodes whose constructors come from the core
//! library: `RenderCtor`, `RenderList`, `RenderNameShallow` and `Dispatch`.
//! A `RenderCtor` carries a template built from `Block`, `Line`, `Descend`
//! and `Label` nodes and plain strings. Descriptions are read once into
//! [`RenderSpec`] and then turned into [`Renderer`]s.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec::Vec;

use graft_graph::{Access, Cursor};
use graft_id::{Guid, Id};
use graft_schema::ids::{ctor, field};
use graft_schema::{ctor_of, list_items, name_of};
use smallvec::SmallVec;
use tracing::debug;

use crate::generic::list_renderer;
use crate::render::{RenderCx, Renderer};
use crate::tree::{D, DisplayId};

/// Deepest nesting of descriptions that is read before giving up.
const MAX_NESTING: usize = 64;

fn edge(access: &mut (impl Access + ?Sized), node: &Id, label: Guid) -> Option<Id> {
    Some(access.get(node, &Id::Guid(label))?.value)
}

fn text_or(access: &mut (impl Access + ?Sized), node: &Id, label: Guid, default: &str) -> Arc<str> {
    match edge(access, node, label) {
        Some(Id::String(text)) => text,
        _ => default.into(),
    }
}

/// A display template, instantiated for one node.
#[derive(Clone, Debug, PartialEq)]
pub enum Template {
    /// A block of the child templates.
    Block(Vec<Self>),
    /// A line of the child templates.
    Line(Vec<Self>),
    /// A descend into a field of the node.
    Descend {
        /// The field label.
        field: Id,
        /// Renderer for the field's value, if not the ambient one.
        context: Option<Box<RenderSpec>>,
    },
    /// A caption for a field of the node.
    Label {
        /// The field label.
        field: Id,
        /// The caption content.
        child: Box<Self>,
    },
    /// Literal text.
    Text(Arc<str>),
}

impl Template {
    /// Reads a template node, or returns `None` if it is malformed.
    pub fn read(access: &mut (impl Access + ?Sized), id: &Id) -> Option<Self> {
        Self::read_nested(access, id, MAX_NESTING)
    }

    fn read_nested(access: &mut (impl Access + ?Sized), id: &Id, budget: usize) -> Option<Self> {
        let budget = budget.checked_sub(1)?;
        if let Id::String(text) = id {
            return Some(Self::Text(text.clone()));
        }
        let template = match ctor_of(access, id)? {
            c if c == ctor::BLOCK => Self::Block(Self::read_children(access, id, budget)?),
            c if c == ctor::LINE => Self::Line(Self::read_children(access, id, budget)?),
            c if c == ctor::DESCEND => Self::Descend {
                field: edge(access, id, field::FIELD)?,
                context: edge(access, id, field::CONTEXT_RENDER)
                    .and_then(|spec| RenderSpec::read_nested(access, &spec, budget))
                    .map(Box::new),
            },
            c if c == ctor::LABEL => {
                let field = edge(access, id, field::FIELD)?;
                let child = edge(access, id, field::CHILD)?;
                Self::Label {
                    field,
                    child: Box::new(Self::read_nested(access, &child, budget)?),
                }
            }
            _ => return None,
        };
        Some(template)
    }

    fn read_children(
        access: &mut (impl Access + ?Sized),
        id: &Id,
        budget: usize,
    ) -> Option<Vec<Self>> {
        let children = edge(access, id, field::CHILDREN)?;
        list_items(access, &children)?
            .iter()
            .map(|child| Self::read_nested(access, child, budget))
            .collect()
    }

    /// Builds the template for `node` at `cursor`.
    ///
    /// Returns `None` if any part fails to build.
    pub fn build(&self, cx: &mut RenderCx<'_>, cursor: &Cursor, node: &Id) -> Option<DisplayId> {
        let id = match self {
            Self::Block(children) | Self::Line(children) => {
                let built = children
                    .iter()
                    .map(|child| child.build(cx, cursor, node))
                    .collect::<Option<SmallVec<[DisplayId; 8]>>>()?;
                let kind = if matches!(self, Self::Block(_)) { D::Block } else { D::Line };
                cx.tree_mut().push(kind, built)
            }
            Self::Descend { field, context } => {
                let context = context.as_deref().map(RenderSpec::renderer);
                cx.descend(cursor, node, field.clone(), context.as_ref())
            }
            Self::Label { field, child } => {
                let child = child.build(cx, cursor, node)?;
                cx.tree_mut().push(
                    D::Label {
                        cursor: cursor.child(field.clone()),
                    },
                    [child],
                )
            }
            Self::Text(text) => cx.tree_mut().text(text.clone()),
        };
        Some(id)
    }
}

/// A render description read from the graph.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderSpec {
    /// Instantiate a template for nodes of one constructor.
    Ctor {
        /// The constructor handled.
        for_ctor: Guid,
        /// The template.
        template: Template,
    },
    /// Render lists with the given punctuation.
    List {
        /// Text before the first element.
        opening: Arc<str>,
        /// Text after the last element.
        closing: Arc<str>,
        /// Text between elements.
        separator: Arc<str>,
        /// Renderer for the elements, if not the ambient one.
        context: Option<Box<Self>>,
    },
    /// Show only the name of nodes of one constructor.
    NameShallow {
        /// The constructor handled.
        for_ctor: Guid,
    },
    /// Try each description in order.
    Dispatch(Vec<Self>),
}

impl RenderSpec {
    /// Reads a render description, or returns `None` if it is malformed.
    ///
    /// List punctuation that is missing falls back to `[`, `]` and `,`.
    /// Members of a dispatch that fail to read are skipped.
    pub fn read(access: &mut (impl Access + ?Sized), id: &Id) -> Option<Self> {
        Self::read_nested(access, id, MAX_NESTING)
    }

    fn read_nested(access: &mut (impl Access + ?Sized), id: &Id, budget: usize) -> Option<Self> {
        let budget = budget.checked_sub(1)?;
        let spec = match ctor_of(access, id)? {
            c if c == ctor::RENDER_CTOR => Self::Ctor {
                for_ctor: edge(access, id, field::FOR_CTOR)?.as_guid()?,
                template: {
                    let d = edge(access, id, field::D)?;
                    Template::read_nested(access, &d, budget)?
                },
            },
            c if c == ctor::RENDER_LIST => Self::List {
                opening: text_or(access, id, field::OPENING, "["),
                closing: text_or(access, id, field::CLOSING, "]"),
                separator: text_or(access, id, field::SEPARATOR, ","),
                context: edge(access, id, field::CONTEXT_RENDER)
                    .and_then(|spec| Self::read_nested(access, &spec, budget))
                    .map(Box::new),
            },
            c if c == ctor::RENDER_NAME_SHALLOW => Self::NameShallow {
                for_ctor: edge(access, id, field::FOR_CTOR)?.as_guid()?,
            },
            c if c == ctor::DISPATCH => {
                let renders = edge(access, id, field::RENDERS)?;
                let members = list_items(access, &renders)?
                    .iter()
                    .filter_map(|member| Self::read_nested(access, member, budget))
                    .collect();
                Self::Dispatch(members)
            }
            _ => return None,
        };
        Some(spec)
    }

    /// Turns the description into a renderer.
    #[must_use]
    pub fn renderer(&self) -> Renderer {
        match self {
            Self::Ctor { for_ctor, template } => {
                let for_ctor = *for_ctor;
                let template = Rc::new(template.clone());
                Renderer::new(move |cx, cursor, value| {
                    let value = value?;
                    if ctor_of(cx.access(), &value.value)? != for_ctor {
                        return None;
                    }
                    template.build(cx, cursor, &value.value)
                })
            }
            Self::List {
                opening,
                closing,
                separator,
                context,
            } => list_renderer(
                opening.clone(),
                closing.clone(),
                separator.clone(),
                context.as_deref().map(Self::renderer),
            ),
            Self::NameShallow { for_ctor } => {
                let for_ctor = *for_ctor;
                Renderer::new(move |cx, _, value| {
                    let value = value?;
                    if ctor_of(cx.access(), &value.value)? != for_ctor {
                        return None;
                    }
                    let name = name_of(cx.access(), &value.value)
                        .unwrap_or_else(|| cx.options().unnamed.clone());
                    Some(cx.tree_mut().text(name))
                })
            }
            Self::Dispatch(members) => Renderer::dispatch(members.iter().map(Self::renderer)),
        }
    }
}

/// The renderer described by a module's render list.
///
/// Returns `None` if `module` is not a module.
pub fn module_renderer(access: &mut (impl Access + ?Sized), module: &Id) -> Option<Renderer> {
    if ctor_of(access, module)? != ctor::MODULE {
        return None;
    }
    let specs = access
        .get(module, &Id::Guid(field::RENDER_CTORS))
        .and_then(|list| list_items(access, &list.value))
        .unwrap_or_default();
    let renderers: Vec<Renderer> = specs
        .iter()
        .filter_map(|spec| RenderSpec::read(access, spec))
        .map(|spec| spec.renderer())
        .collect();
    Some(Renderer::dispatch(renderers))
}

/// Dispatches over the renderers of every library whose root is a module,
/// in library order.
pub fn library_renderer(access: &mut (impl Access + ?Sized)) -> Renderer {
    let roots: Vec<Id> = access
        .libraries()
        .iter()
        .filter_map(|library| library.root().cloned())
        .collect();
    let renderers: Vec<Renderer> = roots
        .iter()
        .filter_map(|root| module_renderer(access, root))
        .collect();
    debug!(modules = renderers.len(), "library renderers");
    Renderer::dispatch(renderers)
}
