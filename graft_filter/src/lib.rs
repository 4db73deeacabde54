// Copyright 2025 the Graft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=graft_filter --heading-base-level=0

//! Graft Filter: staged text filtering for completion lists.
//!
//! A [`Filter`] is an ordered list of [`Stage`]s. Each stage only sees the
//! items rejected by the stages before it, so an item is reported by the
//! first, strongest kind of match that accepts it. Accepted items carry the
//! [`Match`] spans to highlight.
//!
//! [`Filter::default_chain`] is the ranking used for completion:
//!
//! 1. everything, when the needle is empty,
//! 2. prefix,
//! 3. substring,
//! 4. case-insensitive prefix,
//! 5. case-insensitive substring,
//! 6. fuzzy subsequence,
//! 7. case-insensitive fuzzy subsequence.
//!
//! Within each stage except the first, accepted items are stably sorted by
//! coverage: the fraction of the haystack's characters that were matched.
//!
//! ## Minimal example
//!
//! ```rust
//! use graft_filter::{Filter, Match};
//!
//! let names = ["Number", "new Line", "String", "Ctor"];
//! let filtered = Filter::default_chain().apply(names, |s| *s, "n");
//!
//! let accepted: Vec<_> = filtered.accepted.iter().map(|a| a.item).collect();
//! // "new Line" is a prefix match; "String" contains "n"; "Number" only
//! // matches once case is ignored.
//! assert_eq!(accepted, ["new Line", "String", "Number"]);
//! assert_eq!(filtered.accepted[1].matches, [Match::new(4, 1)]);
//! assert_eq!(filtered.rejected, ["Ctor"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

mod stage;

pub use stage::{Accepted, Match, Predicate, Stage};

/// The outcome of running a [`Filter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filtered<T> {
    /// Accepted items, grouped by stage in stage order.
    pub accepted: Vec<Accepted<T>>,
    /// Items no stage accepted, in input order.
    pub rejected: Vec<T>,
}

/// An ordered chain of filter stages.
///
/// An empty filter rejects everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    stages: Vec<Stage>,
}

impl Filter {
    /// Creates an empty filter.
    #[must_use]
    pub const fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// The completion ranking chain; see the crate documentation.
    #[must_use]
    pub fn default_chain() -> Self {
        Self::new()
            .then(Stage::EMPTY_NEEDLE)
            .then(Stage::ranked(Predicate::Prefix))
            .then(Stage::ranked(Predicate::Substring))
            .then(Stage::ranked(Predicate::Prefix).ignoring_case())
            .then(Stage::ranked(Predicate::Substring).ignoring_case())
            .then(Stage::ranked(Predicate::Fuzzy))
            .then(Stage::ranked(Predicate::Fuzzy).ignoring_case())
    }

    /// Appends a stage that sees everything earlier stages rejected.
    #[must_use]
    pub fn then(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Returns the stages in order.
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Runs the chain over `items`, reading each item's text through `key`.
    pub fn apply<T, F>(
        &self,
        items: impl IntoIterator<Item = T>,
        key: F,
        needle: &str,
    ) -> Filtered<T>
    where
        F: Fn(&T) -> &str,
    {
        let mut remaining: Vec<T> = items.into_iter().collect();
        let mut accepted = Vec::new();
        for stage in &self.stages {
            if remaining.is_empty() {
                break;
            }
            let (mut hits, rejected) = stage.split(remaining, &key, needle);
            accepted.append(&mut hits);
            remaining = rejected;
        }
        Filtered {
            accepted,
            rejected: remaining,
        }
    }
}
