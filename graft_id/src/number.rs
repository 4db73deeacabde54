// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A numeric identifier.
///
/// Numbers are compared by value with a total order: `-0.0` and `0.0` are the
/// same number, and every NaN is the same number. This makes `Number` usable as
/// a map key and as an edge label.
#[derive(Copy, Clone, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Number(f64);

impl Number {
    /// Creates a number, canonicalizing signed zero and NaN payloads.
    #[inline]
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value == 0.0 {
            Self(0.0)
        } else if value.is_nan() {
            Self(f64::NAN)
        } else {
            Self(value)
        }
    }

    /// Returns the numeric value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.0
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
