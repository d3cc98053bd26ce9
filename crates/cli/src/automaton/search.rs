// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass scanning of a complete text buffer.

use super::node::NodeId;
use super::{Automaton, Match, PatternId};

impl Automaton {
    /// Report the id of every pattern occurrence in `text`, in scan order.
    ///
    /// At each position, patterns ending there are reported longest first
    /// (a node's own pattern before the ones it inherits through its
    /// failure chain). An id appears once per occurrence.
    ///
    /// ```
    /// use multimatch::Automaton;
    ///
    /// let ac = Automaton::new(["he", "she", "his", "hers"]);
    /// let ids: Vec<usize> = ac.search("ushers").iter().map(|id| id.as_usize()).collect();
    /// assert_eq!(ids, [1, 0, 3]);
    /// ```
    pub fn search(&self, text: impl AsRef<[u8]>) -> Vec<PatternId> {
        let mut found = Vec::new();
        let mut current = NodeId::ROOT;
        for &symbol in text.as_ref() {
            current = self.next_state(current, symbol);
            found.extend_from_slice(self.arena().get(current).output());
        }
        found
    }

    /// Like [`search`](Self::search), but with byte offsets.
    pub fn matches(&self, text: impl AsRef<[u8]>) -> Vec<Match> {
        self.find_iter(text.as_ref()).collect()
    }

    /// Lazily iterate over every occurrence in `text`.
    pub fn find_iter<'a>(&'a self, text: &'a [u8]) -> FindIter<'a> {
        FindIter {
            automaton: self,
            text,
            pos: 0,
            node: NodeId::ROOT,
            // Empty patterns live at the root; they only count after a byte.
            emitted: self.root().output().len(),
        }
    }

    /// Whether any pattern occurs in `text`. Stops at the first occurrence.
    pub fn is_match(&self, text: impl AsRef<[u8]>) -> bool {
        self.find_iter(text.as_ref()).next().is_some()
    }

    /// Transition from `current` on `symbol`, following failure links on a
    /// miss. Stays at the root when nothing matches.
    #[inline]
    fn next_state(&self, mut current: NodeId, symbol: u8) -> NodeId {
        let arena = self.arena();
        loop {
            let node = arena.get(current);
            if let Some(next) = node.child(symbol) {
                return next;
            }
            if current.is_root() {
                return NodeId::ROOT;
            }
            current = node.fail();
        }
    }
}

/// Iterator over the matches of one search. See [`Automaton::find_iter`].
#[derive(Debug)]
pub struct FindIter<'a> {
    automaton: &'a Automaton,
    text: &'a [u8],
    /// Number of bytes consumed.
    pos: usize,
    node: NodeId,
    /// How much of `node`'s output has been yielded.
    emitted: usize,
}

impl Iterator for FindIter<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            let output = self.automaton.arena().get(self.node).output();
            if let Some(&pattern) = output.get(self.emitted) {
                self.emitted += 1;
                let len = self.automaton.pattern_len(pattern).unwrap_or(0);
                return Some(Match {
                    pattern,
                    start: self.pos - len,
                    end: self.pos,
                });
            }

            let &symbol = self.text.get(self.pos)?;
            self.node = self.automaton.next_state(self.node, symbol);
            self.pos += 1;
            self.emitted = 0;
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
