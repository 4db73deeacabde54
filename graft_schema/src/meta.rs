// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use graft_graph::Library;
use graft_id::Id;

use crate::builder::SchemaBuilder;
use crate::ids::{CORE_MODULE, ctor, field, ty};

/// Name of the library returned by [`core_library`].
pub const CORE_LIBRARY_NAME: &str = "core";

/// Builds the meta-schema: the constructors, fields and types that describe
/// schemas, lists, modules and renderers.
///
/// The library's root is a module named `core` listing every definition.
#[must_use]
pub fn core_library() -> Library {
    SchemaBuilder::new()
        // Fields.
        .field(field::CTOR, "ctor", ctor::CTOR)
        .field(field::NAME, "name", ty::STRING)
        .field(field::FIELDS, "fields", ty::LIST_OF_FIELD)
        .field(field::TYPE, "type", ty::TYPE)
        .untyped_field(field::HEAD, "head")
        .untyped_field(field::TAIL, "tail")
        .field(field::CTOR_OR_ALGEBRAIC_TYPES, "ctorOrAlgebraicTypes", ty::LIST_OF_TYPE)
        .field(field::D, "d", ty::D)
        .field(field::FOR_CTOR, "forCtor", ctor::CTOR)
        .field(field::CONTEXT_RENDER, "contextRender", ty::RENDER)
        .field(field::CHILDREN, "children", ty::LIST_OF_D)
        .field(field::CHILD, "child", ty::D)
        .field(field::FIELD, "field", ctor::FIELD)
        .field(field::OPENING, "opening", ty::STRING)
        .field(field::CLOSING, "closing", ty::STRING)
        .field(field::SEPARATOR, "separator", ty::STRING)
        .field(field::RENDERS, "renders", ty::LIST_OF_RENDER)
        .field(field::RENDER_CTORS, "renderCtors", ty::LIST_OF_RENDER_CTOR)
        .untyped_field(field::DATA, "data")
        // Constructors.
        .ctor(ctor::CTOR, "Ctor", &[field::NAME, field::FIELDS])
        .ctor(ctor::FIELD, "Field", &[field::NAME, field::TYPE])
        .ctor(
            ctor::ALGEBRAIC_TYPE,
            "AlgebraicType",
            &[field::NAME, field::CTOR_OR_ALGEBRAIC_TYPES],
        )
        .ctor(ctor::LIST_TYPE, "ListType", &[field::TYPE])
        .ctor(ctor::ATOMIC_TYPE, "AtomicType", &[field::NAME])
        .ctor(ctor::EMPTY_LIST, "EmptyList", &[])
        .ctor(ctor::NONEMPTY_LIST, "NonemptyList", &[field::HEAD, field::TAIL])
        .ctor(
            ctor::MODULE,
            "Module",
            &[
                field::NAME,
                field::CTOR_OR_ALGEBRAIC_TYPES,
                field::RENDER_CTORS,
                field::DATA,
            ],
        )
        .ctor(ctor::RENDER_CTOR, "RenderCtor", &[field::FOR_CTOR, field::D])
        .ctor(
            ctor::RENDER_LIST,
            "RenderList",
            &[
                field::OPENING,
                field::CLOSING,
                field::SEPARATOR,
                field::CONTEXT_RENDER,
            ],
        )
        .ctor(ctor::RENDER_NAME_SHALLOW, "RenderNameShallow", &[field::FOR_CTOR])
        .ctor(ctor::DISPATCH, "Dispatch", &[field::RENDERS])
        .ctor(ctor::BLOCK, "Block", &[field::CHILDREN])
        .ctor(ctor::LINE, "Line", &[field::CHILDREN])
        .ctor(ctor::DESCEND, "Descend", &[field::FIELD, field::CONTEXT_RENDER])
        .ctor(ctor::LABEL, "Label", &[field::FIELD, field::CHILD])
        // Types.
        .atomic_type(ty::STRING, "string")
        .atomic_type(ty::NUMBER, "number")
        .algebraic_type(
            ty::TYPE,
            "Type",
            &[ctor::ALGEBRAIC_TYPE, ctor::LIST_TYPE, ctor::CTOR, ctor::ATOMIC_TYPE],
        )
        .algebraic_type(
            ty::RENDER,
            "Render",
            &[
                ctor::RENDER_CTOR,
                ctor::RENDER_LIST,
                ctor::RENDER_NAME_SHALLOW,
                ctor::DISPATCH,
            ],
        )
        .algebraic_type(
            ty::D,
            "D",
            &[ctor::BLOCK, ctor::LINE, ctor::DESCEND, ctor::LABEL, ty::STRING],
        )
        .list_type(ty::LIST_OF_FIELD, ctor::FIELD)
        .list_type(ty::LIST_OF_TYPE, ty::TYPE)
        .list_type(ty::LIST_OF_RENDER, ty::RENDER)
        .list_type(ty::LIST_OF_D, ty::D)
        .list_type(ty::LIST_OF_RENDER_CTOR, ctor::RENDER_CTOR)
        // Root.
        .module(
            CORE_MODULE,
            CORE_LIBRARY_NAME,
            &[
                ctor::CTOR,
                ctor::FIELD,
                ctor::ALGEBRAIC_TYPE,
                ctor::LIST_TYPE,
                ctor::ATOMIC_TYPE,
                ctor::EMPTY_LIST,
                ctor::NONEMPTY_LIST,
                ctor::MODULE,
                ctor::RENDER_CTOR,
                ctor::RENDER_LIST,
                ctor::RENDER_NAME_SHALLOW,
                ctor::DISPATCH,
                ctor::BLOCK,
                ctor::LINE,
                ctor::DESCEND,
                ctor::LABEL,
                ty::STRING,
                ty::NUMBER,
                ty::TYPE,
                ty::RENDER,
                ty::D,
            ],
            &[],
        )
        .build(CORE_LIBRARY_NAME, Some(Id::Guid(CORE_MODULE)))
}
