// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Type views and structural type matching.

use graft_graph::{Access, Cursor};
use graft_id::{Guid, Id};
use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::ids::{ctor, field, ty};
use crate::list::{ctor_of, list_items};

/// A node viewed as a type, according to its constructor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeView {
    /// A union of constructors and other types.
    Algebraic(Guid),
    /// Lists of some element type.
    List(Guid),
    /// A single constructor used as a type.
    Ctor(Guid),
    /// An atomic type such as string or number.
    Atomic(Guid),
}

impl TypeView {
    /// Views `id` as a type, or returns `None` if it is not one.
    pub fn of(access: &mut (impl Access + ?Sized), id: &Id) -> Option<Self> {
        let guid = id.as_guid()?;
        let view = match ctor_of(access, id)? {
            c if c == ctor::ALGEBRAIC_TYPE => Self::Algebraic(guid),
            c if c == ctor::LIST_TYPE => Self::List(guid),
            c if c == ctor::CTOR => Self::Ctor(guid),
            c if c == ctor::ATOMIC_TYPE => Self::Atomic(guid),
            _ => return None,
        };
        Some(view)
    }

    /// Returns the viewed node.
    #[must_use]
    pub const fn id(self) -> Guid {
        match self {
            Self::Algebraic(id) | Self::List(id) | Self::Ctor(id) | Self::Atomic(id) => id,
        }
    }

    /// Returns the element type of a list type.
    pub fn element(self, access: &mut (impl Access + ?Sized)) -> Option<Id> {
        match self {
            Self::List(id) => Some(access.get(&Id::Guid(id), &Id::Guid(field::TYPE))?.value),
            _ => None,
        }
    }
}

/// Members listed by an algebraic type; an absent or malformed list is empty.
fn members(access: &mut (impl Access + ?Sized), algebraic: Guid) -> SmallVec<[Id; 8]> {
    access
        .get(&Id::Guid(algebraic), &Id::Guid(field::CTOR_OR_ALGEBRAIC_TYPES))
        .and_then(|list| list_items(access, &list.value))
        .map(SmallVec::from_vec)
        .unwrap_or_default()
}

/// Returns `true` if `constructor` is reachable from `algebraic` through its
/// members and nested algebraic types.
pub fn algebraic_type_has_ctor(
    access: &mut (impl Access + ?Sized),
    algebraic: Guid,
    constructor: Guid,
) -> bool {
    let mut visited = HashSet::new();
    let mut pending = SmallVec::<[Guid; 4]>::new();
    pending.push(algebraic);
    while let Some(next) = pending.pop() {
        if !visited.insert(next) {
            continue;
        }
        for member in members(access, next) {
            match TypeView::of(access, &member) {
                Some(TypeView::Ctor(c)) if c == constructor => return true,
                Some(TypeView::Algebraic(nested)) => pending.push(nested),
                _ => {}
            }
        }
    }
    false
}

/// Returns `true` if `atomic` is `declared` itself or reachable from it
/// through algebraic types only.
pub fn type_is_or_has_atomic(
    access: &mut (impl Access + ?Sized),
    declared: TypeView,
    atomic: Guid,
) -> bool {
    let mut visited = HashSet::new();
    let mut pending = SmallVec::<[TypeView; 4]>::new();
    pending.push(declared);
    while let Some(next) = pending.pop() {
        match next {
            TypeView::Atomic(id) if id == atomic => return true,
            TypeView::Algebraic(id) if visited.insert(id) => {
                for member in members(access, id) {
                    if let Some(view) = TypeView::of(access, &member) {
                        pending.push(view);
                    }
                }
            }
            _ => {}
        }
    }
    false
}

/// Returns whether an instance of `constructor` would have type `declared`.
///
/// Returns `None` if `declared` is not a type.
pub fn ctor_matches_type(
    access: &mut (impl Access + ?Sized),
    constructor: Guid,
    declared: &Id,
) -> Option<bool> {
    Some(match TypeView::of(access, declared)? {
        TypeView::Algebraic(id) => algebraic_type_has_ctor(access, id, constructor),
        TypeView::List(_) => constructor == ctor::NONEMPTY_LIST || constructor == ctor::EMPTY_LIST,
        TypeView::Ctor(id) => constructor == id,
        TypeView::Atomic(_) => false,
    })
}

/// Returns whether `value` has type `declared`.
///
/// Structured values match through their constructor; one without a
/// constructor matches nothing. Strings and numbers match when the string or
/// number type is reachable from `declared` through algebraic types.
///
/// Returns `None` if `declared` is not a type, which callers treat as a match.
pub fn type_matches(
    access: &mut (impl Access + ?Sized),
    value: &Id,
    declared: &Id,
) -> Option<bool> {
    let view = TypeView::of(access, declared)?;
    Some(match value {
        Id::Guid(_) => match ctor_of(access, value) {
            Some(constructor) => ctor_matches_type(access, constructor, declared)?,
            None => false,
        },
        Id::String(_) => type_is_or_has_atomic(access, view, ty::STRING),
        Id::Number(_) => type_is_or_has_atomic(access, view, ty::NUMBER),
    })
}

/// Returns the type declared for the slot at `cursor`.
///
/// The slot of a list element takes the element type of the list type
/// declared where the list starts. Any other slot takes the `type` of the
/// field used as its label.
pub fn type_from_cursor(access: &mut (impl Access + ?Sized), cursor: &Cursor) -> Option<Id> {
    let label = cursor.label()?;
    if *label == Id::Guid(field::HEAD) {
        let mut start = cursor.parent()?;
        while start.label() == Some(&Id::Guid(field::TAIL)) {
            start = start.parent()?;
        }
        let list_type = type_from_cursor(access, start)?;
        return TypeView::of(access, &list_type)?.element(access);
    }
    Some(access.get(label, &Id::Guid(field::TYPE))?.value)
}
