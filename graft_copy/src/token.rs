// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholders standing for copied nodes.

use core::fmt;

use graft_id::{Guid, Id};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const PREFIX: &str = "new:";

/// A copied node, to be replaced by a fresh node when pasted.
///
/// Tokens are written as `new:` followed by the hex id of the node that was
/// copied. Pasting never reuses that id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Token(pub Guid);

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}{}", self.0)
    }
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Token {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl Visitor<'_> for TokenVisitor {
            type Value = Token;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"new:\" followed by 32 hex characters")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Token, E> {
                let hex = v
                    .strip_prefix(PREFIX)
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))?;
                Guid::parse(hex).map(Token).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(TokenVisitor)
    }
}

/// One end of a copied edge: a copied node, or an id kept as it is.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    /// A node inside the copy.
    Token(Token),
    /// Anything outside the copy, referenced unchanged.
    Id(Id),
}

impl Endpoint {
    /// Returns the token if this end is inside the copy.
    #[must_use]
    pub fn as_token(&self) -> Option<Token> {
        match self {
            Self::Token(token) => Some(*token),
            Self::Id(_) => None,
        }
    }
}
