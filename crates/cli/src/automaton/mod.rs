// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick automaton over byte patterns.
//!
//! Construction builds a trie from the pattern set and overlays failure links
//! in one breadth-first pass. Searching walks the text once and reports every
//! pattern that ends at every position, including overlapping occurrences.
//!
//! An automaton is immutable once built. It is `Send + Sync`, so one instance
//! can be shared across threads and searched concurrently.

mod builder;
mod node;
mod search;

use std::fmt;

use serde::Serialize;

pub use builder::Builder;
pub use node::{Arena, Node, NodeId};
pub use search::FindIter;

/// Identifier of a pattern: its index in the list given at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PatternId(usize);

impl PatternId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One occurrence of a pattern in the searched text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    pub pattern: PatternId,
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Shape of a built automaton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub patterns: usize,
    pub nodes: usize,
    pub max_depth: usize,
    pub empty_patterns: usize,
}

/// A built Aho-Corasick automaton.
#[derive(Clone, Debug)]
pub struct Automaton {
    arena: Arena,
    /// Byte length of each pattern, indexed by `PatternId`.
    pattern_lens: Vec<usize>,
}

impl Automaton {
    /// Build an automaton from `patterns`. Pattern `i` gets `PatternId` `i`.
    ///
    /// Construction never fails. An empty pattern set yields an automaton
    /// that matches nothing.
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        Builder::new().extend(patterns).build()
    }

    pub fn pattern_count(&self) -> usize {
        self.pattern_lens.len()
    }

    /// Byte length of a pattern, or `None` for an unknown id.
    pub fn pattern_len(&self, id: PatternId) -> Option<usize> {
        self.pattern_lens.get(id.as_usize()).copied()
    }

    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        self.arena.get(id)
    }

    pub fn root(&self) -> &Node {
        self.arena.get(NodeId::ROOT)
    }

    pub fn stats(&self) -> Stats {
        Stats {
            patterns: self.pattern_lens.len(),
            nodes: self.arena.len(),
            max_depth: self
                .arena
                .iter()
                .map(|(_, n)| n.depth())
                .max()
                .unwrap_or(0),
            empty_patterns: self.pattern_lens.iter().filter(|&&len| len == 0).count(),
        }
    }

    pub(crate) fn from_parts(arena: Arena, pattern_lens: Vec<usize>) -> Self {
        Self {
            arena,
            pattern_lens,
        }
    }

    pub(crate) fn arena(&self) -> &Arena {
        &self.arena
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
