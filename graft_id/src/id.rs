// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{Guid, Number};

/// A node address or data value.
///
/// Every value in the graph is an `Id`: structured nodes are addressed by
/// [`Guid`], while strings and numbers are literal values that double as
/// addresses with no edges. Equality is by value for all three variants.
///
/// The serialized form is externally tagged, matching the persisted graph
/// format: `{"guid": "…"}`, `{"string": "…"}`, or `{"number": 1.5}`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Id {
    /// A structured node.
    Guid(Guid),
    /// A shared string value.
    String(Arc<str>),
    /// A numeric value.
    Number(Number),
}

impl Id {
    /// Creates an id for a freshly generated structured node.
    #[must_use]
    pub fn new_guid() -> Self {
        Self::Guid(Guid::new())
    }

    /// Creates a string id.
    #[must_use]
    pub fn string(value: impl Into<Arc<str>>) -> Self {
        Self::String(value.into())
    }

    /// Creates a number id.
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(Number::new(value))
    }

    /// Returns the unique id if this addresses a structured node.
    #[inline]
    #[must_use]
    pub fn as_guid(&self) -> Option<Guid> {
        match self {
            Self::Guid(guid) => Some(*guid),
            _ => None,
        }
    }

    /// Returns the string value if this is a string id.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric value if this is a number id.
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.get()),
            _ => None,
        }
    }

    /// Returns `true` if this addresses a structured node.
    #[inline]
    #[must_use]
    pub fn is_guid(&self) -> bool {
        matches!(self, Self::Guid(_))
    }
}

impl From<Guid> for Id {
    fn from(value: Guid) -> Self {
        Self::Guid(value)
    }
}

impl From<Number> for Id {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for Id {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self::String(value.into())
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guid(guid) => write!(f, "{guid}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Guid(guid) => fmt::Display::fmt(guid, f),
            Self::String(s) => f.write_str(s),
            Self::Number(n) => fmt::Display::fmt(n, f),
        }
    }
}
