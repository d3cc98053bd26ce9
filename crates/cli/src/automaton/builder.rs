// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Automaton construction.
//!
//! Patterns are inserted into the trie as they are added. `build()` then
//! encodes the failure links breadth-first and freezes the result.

use std::collections::VecDeque;

use super::node::{Arena, NodeId};
use super::{Automaton, PatternId};

/// Incremental automaton builder.
///
/// ```
/// use multimatch::automaton::Builder;
///
/// let ac = Builder::new().add("he").add("she").build();
/// assert_eq!(ac.pattern_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    arena: Arena,
    pattern_lens: Vec<usize>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one pattern. Its id is the number of patterns added before it.
    pub fn add(mut self, pattern: impl AsRef<[u8]>) -> Self {
        self.push(pattern.as_ref());
        self
    }

    /// Add every pattern from an iterator, in order.
    pub fn extend<I, P>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        for pattern in patterns {
            self.push(pattern.as_ref());
        }
        self
    }

    /// Number of patterns added so far.
    pub fn len(&self) -> usize {
        self.pattern_lens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_lens.is_empty()
    }

    /// Encode failure links and return the finished automaton.
    pub fn build(mut self) -> Automaton {
        self.encode_failure_links();
        self.arena.shrink_to_fit();

        tracing::debug!(
            patterns = self.pattern_lens.len(),
            nodes = self.arena.len(),
            "built automaton"
        );

        Automaton::from_parts(self.arena, self.pattern_lens)
    }

    /// Walk `pattern` from the root, creating missing nodes, and record the
    /// pattern at its terminal node. An empty pattern terminates at the root.
    fn push(&mut self, pattern: &[u8]) {
        let id = PatternId::new(self.pattern_lens.len());
        let mut current = NodeId::ROOT;
        for &symbol in pattern {
            current = self.arena.child_or_insert(current, symbol);
        }
        self.arena.get_mut(current).output.push(id);
        self.pattern_lens.push(pattern.len());
    }

    /// Breadth-first pass assigning every node its failure link and merging
    /// the failure target's output into its own.
    ///
    /// Nodes are visited in order of depth, so a failure target (always
    /// shallower) is complete before anything inherits from it.
    fn encode_failure_links(&mut self) {
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        let depth_one: Vec<NodeId> = self
            .arena
            .get(NodeId::ROOT)
            .children()
            .iter()
            .map(|&(_, child)| child)
            .collect();
        for child in depth_one {
            self.arena.get_mut(child).fail = NodeId::ROOT;
            self.arena.inherit_output(child, NodeId::ROOT);
            queue.push_back(child);
        }

        while let Some(id) = queue.pop_front() {
            let edge_count = self.arena.get(id).children().len();
            for edge in 0..edge_count {
                let (symbol, child) = self.arena.get(id).children()[edge];
                let fail = self.failure_target(id, symbol, child);
                self.arena.get_mut(child).fail = fail;
                self.arena.inherit_output(child, fail);
                queue.push_back(child);
            }
        }
    }

    /// Follow failure links from `parent` until some node has an edge on
    /// `symbol`; the target of that edge is the failure link for `child`.
    fn failure_target(&self, parent: NodeId, symbol: u8, child: NodeId) -> NodeId {
        let mut candidate = self.arena.get(parent).fail();
        loop {
            if let Some(next) = self.arena.get(candidate).child(symbol) {
                return if next == child { NodeId::ROOT } else { next };
            }
            if candidate.is_root() {
                return NodeId::ROOT;
            }
            candidate = self.arena.get(candidate).fail();
        }
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
