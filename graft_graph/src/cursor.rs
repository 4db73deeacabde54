// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths of labels from the document root.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};

use graft_id::Id;

use crate::access::Access;
use crate::graph::{Source, Sourced};

struct Step {
    parent: Cursor,
    label: Id,
    depth: usize,
}

/// A position in the document, addressed by the labels followed from the root.
///
/// A cursor is either the root or a child of another cursor through one
/// label. Cursors are persistent: [`Cursor::child`] shares the parent chain,
/// so cloning is cheap and siblings share their common prefix.
///
/// Equality and hashing are structural over the label path. Two cursors are
/// equal exactly when [`Cursor::labels`] are equal, whatever they currently
/// resolve to.
#[derive(Clone, Default)]
pub struct Cursor(Option<Rc<Step>>);

impl Cursor {
    /// The root position.
    #[inline]
    #[must_use]
    pub const fn root() -> Self {
        Self(None)
    }

    /// Returns `true` if this is the root position.
    #[inline]
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the position reached from this one through `label`.
    #[must_use]
    pub fn child(&self, label: Id) -> Self {
        Self(Some(Rc::new(Step {
            parent: self.clone(),
            label,
            depth: self.depth() + 1,
        })))
    }

    /// Returns the parent position, or `None` at the root.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.0.as_ref().map(|step| &step.parent)
    }

    /// Returns the label of the last step, or `None` at the root.
    #[must_use]
    pub fn label(&self) -> Option<&Id> {
        self.0.as_ref().map(|step| &step.label)
    }

    /// Returns the number of labels in the path.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.as_ref().map_or(0, |step| step.depth)
    }

    /// Returns the labels from the root down to this position.
    #[must_use]
    pub fn labels(&self) -> Vec<Id> {
        let mut labels: Vec<Id> = self.ancestors().filter_map(|c| c.label().cloned()).collect();
        labels.reverse();
        labels
    }

    /// Iterates from this position up to and including the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &Self> + '_ {
        core::iter::successors(Some(self), |cursor| cursor.parent())
    }

    /// Returns `true` if `prefix` is this position or one of its ancestors.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        if prefix.depth() > self.depth() {
            return false;
        }
        self.ancestors()
            .nth(self.depth() - prefix.depth())
            .is_some_and(|ancestor| ancestor == prefix)
    }

    /// Resolves this position against the document.
    ///
    /// The root resolves to the graph's root value. A child resolves to the
    /// value of its label on whatever its parent resolves to. The result is
    /// `None` as soon as any step is missing.
    pub fn resolve<A: Access + ?Sized>(&self, access: &mut A) -> Option<Sourced<Id>> {
        match &self.0 {
            None => access
                .root()
                .map(|root| Sourced::new(root, Source::Document)),
            Some(step) => {
                let parent = step.parent.resolve(access)?;
                access.get(&parent.value, &step.label)
            }
        }
    }

    /// Returns `true` if reaching this position repeats an edge already taken.
    ///
    /// A child position `C` reached through label `l` from an owning node
    /// `o` is a cycle when some strict ancestor `A` of `C` is left through
    /// `l` toward `C` and either resolves to the value of `C`, or is itself
    /// owned by `o`. The second case is the same `(o, l)` edge reappearing
    /// higher on the path, which any unbounded walk of a finite document
    /// eventually hits. Positions that do not resolve are never cycles, nor
    /// is the root.
    pub fn is_cycle<A: Access + ?Sized>(&self, access: &mut A) -> bool {
        let Some(step) = &self.0 else {
            return false;
        };
        let Some(owner) = step.parent.resolve(access) else {
            return false;
        };
        let Some(value) = access.get(&owner.value, &step.label) else {
            return false;
        };
        // `below` is the step leaving `ancestor` toward this position.
        let mut below: &Step = step;
        let mut ancestor = &step.parent;
        loop {
            if below.label == step.label {
                let resolved = ancestor.resolve(access).map(|hit| hit.value);
                let same_edge = !core::ptr::eq(below, &**step)
                    && resolved.as_ref() == Some(&owner.value);
                if same_edge || resolved.as_ref() == Some(&value.value) {
                    return true;
                }
            }
            match &ancestor.0 {
                None => return false,
                Some(next) => {
                    below = &**next;
                    ancestor = &next.parent;
                }
            }
        }
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                Rc::ptr_eq(a, b)
                    || (a.depth == b.depth && a.label == b.label && a.parent == b.parent)
            }
            _ => false,
        }
    }
}

impl Eq for Cursor {}

impl Hash for Cursor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.depth().hash(state);
        for cursor in self.ancestors() {
            if let Some(label) = cursor.label() {
                label.hash(state);
            }
        }
    }
}

impl fmt::Debug for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cursor(")?;
        for (index, label) in self.labels().iter().enumerate() {
            if index > 0 {
                f.write_str(" / ")?;
            }
            write!(f, "{label:?}")?;
        }
        f.write_str(")")
    }
}
