// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use graft_graph::{Access, Cursor, Txn, WriteError};
use graft_id::{Guid, Id};
use graft_schema::ids::field;
use tracing::debug;

bitflags::bitflags! {
    /// Classification of a completion entry.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EntryFlags: u8 {
        /// The entry's value fits the slot's declared type.
        const MATCHING = 0b0000_0001;
        /// The entry refers to something outside the document.
        const EXTERNAL = 0b0000_0010;
        /// The entry was synthesized from the needle itself.
        const MAGIC    = 0b0000_0100;
        /// Committing the entry creates a new node.
        const NEW      = 0b0000_1000;
    }
}

/// What committing an entry produces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryAction {
    /// An existing node or value.
    Existing(Id),
    /// A fresh node with this constructor.
    NewInstance(Guid),
    /// A string or number typed by the user.
    Literal(Id),
}

impl EntryAction {
    /// Produces the value to commit, creating a node if needed.
    pub fn materialize(&self, txn: &mut Txn<'_>) -> Result<Id, WriteError> {
        match self {
            Self::Existing(id) | Self::Literal(id) => Ok(id.clone()),
            Self::NewInstance(ctor) => {
                let node = Guid::new();
                txn.set(node, Id::Guid(field::CTOR), Id::Guid(*ctor))?;
                Ok(Id::Guid(node))
            }
        }
    }
}

/// Where a committed entry is written.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CommitTarget {
    /// One edge of a document node.
    Edge {
        /// The node to write.
        node: Guid,
        /// The edge label.
        label: Id,
    },
    /// The document root.
    Root,
}

impl CommitTarget {
    /// Returns the slot addressed by `cursor`.
    ///
    /// Returns `None` when the cursor's parent does not resolve to a node.
    pub fn at(access: &mut (impl Access + ?Sized), cursor: &Cursor) -> Option<Self> {
        let Some(parent) = cursor.parent() else {
            return Some(Self::Root);
        };
        let node = parent.resolve(access)?.value.as_guid()?;
        Some(Self::Edge {
            node,
            label: cursor.label()?.clone(),
        })
    }

    /// Stores `value` in the slot.
    pub fn write(&self, txn: &mut Txn<'_>, value: Id) -> Result<(), WriteError> {
        match self {
            Self::Edge { node, label } => txn.set(*node, label.clone(), value),
            Self::Root => txn.set_root(Some(value)),
        }
    }
}

/// One completion candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// The text shown and filtered on.
    pub string: Arc<str>,
    /// Extra text telling same-named entries apart, such as a constructor name.
    pub disambiguation: Option<Arc<str>>,
    /// What committing produces.
    pub action: EntryAction,
    /// Classification.
    pub flags: EntryFlags,
}

impl Entry {
    /// Returns `true` if the entry fits the declared type.
    #[inline]
    #[must_use]
    pub fn is_matching(&self) -> bool {
        self.flags.contains(EntryFlags::MATCHING)
    }

    /// Returns `true` if the entry was synthesized from the needle.
    #[inline]
    #[must_use]
    pub fn is_magic(&self) -> bool {
        self.flags.contains(EntryFlags::MAGIC)
    }

    /// Writes this entry's value into `target`, returning the value.
    pub fn commit(&self, txn: &mut Txn<'_>, target: &CommitTarget) -> Result<Id, WriteError> {
        let value = self.action.materialize(txn)?;
        debug!(entry = &*self.string, ?target, "commit completion");
        target.write(txn, value.clone())?;
        Ok(value)
    }
}
