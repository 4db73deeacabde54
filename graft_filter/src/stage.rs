// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Individual filter stages.

use alloc::borrow::Cow;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// A highlighted span of a haystack, in `char` positions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    /// Index of the first matched character.
    pub start: usize,
    /// Number of matched characters.
    pub len: usize,
}

impl Match {
    /// Creates a span.
    #[inline]
    #[must_use]
    pub const fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }
}

/// How a stage decides whether a haystack matches a needle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// Accepts everything when the needle is empty, nothing otherwise.
    ///
    /// The reported span covers the whole haystack.
    EmptyNeedle,
    /// The haystack starts with the needle.
    Prefix,
    /// The needle occurs somewhere in the haystack.
    Substring,
    /// The needle's characters occur in order, not necessarily adjacent.
    ///
    /// Each matched character is reported as its own one-character span.
    Fuzzy,
}

impl Predicate {
    /// Returns the matched spans, or `None` if the haystack is rejected.
    #[must_use]
    pub fn matches(self, needle: &str, haystack: &str) -> Option<Vec<Match>> {
        match self {
            Self::EmptyNeedle => needle
                .is_empty()
                .then(|| vec![Match::new(0, haystack.chars().count())]),
            Self::Prefix => haystack
                .starts_with(needle)
                .then(|| vec![Match::new(0, needle.chars().count())]),
            Self::Substring => {
                let byte = haystack.find(needle)?;
                let start = haystack[..byte].chars().count();
                Some(vec![Match::new(start, needle.chars().count())])
            }
            Self::Fuzzy => {
                let mut remaining = haystack.chars().enumerate();
                let mut spans = Vec::new();
                for c in needle.chars() {
                    let (index, _) = remaining.by_ref().find(|&(_, h)| h == c)?;
                    spans.push(Match::new(index, 1));
                }
                Some(spans)
            }
        }
    }
}

/// One step of a [`Filter`](crate::Filter).
///
/// A stage applies a [`Predicate`], optionally after lowercasing both the
/// needle and the haystack, and optionally sorts what it accepted by how much
/// of each haystack was covered by matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stage {
    /// The match test.
    pub predicate: Predicate,
    /// Lowercase needle and haystack before testing.
    pub case_insensitive: bool,
    /// Stably sort accepted items by coverage, highest first.
    pub sort_by_coverage: bool,
}

impl Stage {
    /// Accept everything for an empty needle.
    pub const EMPTY_NEEDLE: Self = Self {
        predicate: Predicate::EmptyNeedle,
        case_insensitive: false,
        sort_by_coverage: false,
    };

    /// Creates a case-sensitive stage ranked by coverage.
    #[must_use]
    pub const fn ranked(predicate: Predicate) -> Self {
        Self {
            predicate,
            case_insensitive: false,
            sort_by_coverage: true,
        }
    }

    /// Returns this stage with case folding enabled.
    #[must_use]
    pub const fn ignoring_case(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    /// Splits `items` into accepted entries and rejects.
    pub(crate) fn split<T, F>(
        &self,
        items: Vec<T>,
        key: &F,
        needle: &str,
    ) -> (Vec<Accepted<T>>, Vec<T>)
    where
        F: Fn(&T) -> &str,
    {
        let needle = self.fold(needle);
        let mut hits: Vec<(Accepted<T>, usize)> = Vec::new();
        let mut rejected = Vec::new();
        for item in items {
            let outcome = {
                let haystack = self.fold(key(&item));
                self.predicate
                    .matches(&needle, &haystack)
                    .map(|matches| (matches, haystack.chars().count()))
            };
            match outcome {
                Some((matches, len)) => hits.push((Accepted { item, matches }, len)),
                None => rejected.push(item),
            }
        }
        if self.sort_by_coverage {
            hits.sort_by(|(a, a_len), (b, b_len)| {
                compare_coverage((b.covered(), *b_len), (a.covered(), *a_len))
            });
        }
        (hits.into_iter().map(|(hit, _)| hit).collect(), rejected)
    }

    fn fold<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.case_insensitive {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// An item accepted by a filter, with the spans that matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accepted<T> {
    /// The accepted item.
    pub item: T,
    /// Matched spans of the item's key, in `char` positions.
    pub matches: Vec<Match>,
}

impl<T> Accepted<T> {
    /// Returns the number of matched characters.
    #[must_use]
    pub fn covered(&self) -> usize {
        self.matches.iter().map(|m| m.len).sum()
    }
}

/// Compares `covered / len` ratios exactly, treating empty haystacks as length one.
fn compare_coverage(
    (a_covered, a_len): (usize, usize),
    (b_covered, b_len): (usize, usize),
) -> Ordering {
    (a_covered * b_len.max(1)).cmp(&(b_covered * a_len.max(1)))
}
