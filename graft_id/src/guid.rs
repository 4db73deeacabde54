// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Globally unique node identifiers.

use core::fmt;
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// A 128-bit globally unique identifier.
///
/// Unique ids address structured nodes. They are rendered and persisted as 32
/// lowercase hex characters with no separators, for example
/// `aba6ac79fd3d409da860a77c90942852`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Guid(Uuid);

impl Guid {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an id from its 128-bit value.
    ///
    /// This is `const`, so well-known ids can be declared as constants.
    #[inline]
    #[must_use]
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// Returns the 128-bit value of this id.
    #[inline]
    #[must_use]
    pub const fn as_u128(self) -> u128 {
        self.0.as_u128()
    }

    /// Parses an id from hex.
    ///
    /// The 32-character simple form is canonical; hyphenated forms are accepted too.
    pub fn parse(text: &str) -> Result<Self, ParseGuidError> {
        Uuid::parse_str(text).map(Self).map_err(|_| ParseGuidError {
            len: text.len(),
        })
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.simple(), f)
    }
}

impl fmt::Debug for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guid({})", self.0.simple())
    }
}

impl FromStr for Guid {
    type Err = ParseGuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Error returned when text is not a valid unique id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid unique id: expected 32 hex characters, found {len} bytes of text")]
pub struct ParseGuidError {
    len: usize,
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = Uuid::encode_buffer();
        serializer.serialize_str(self.0.simple().encode_lower(&mut buf))
    }
}

impl<'de> Deserialize<'de> for Guid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct GuidVisitor;

        impl Visitor<'_> for GuidVisitor {
            type Value = Guid;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("32 hex characters")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Guid, E> {
                Guid::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(GuidVisitor)
    }
}
