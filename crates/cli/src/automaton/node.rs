// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Index-based node arena for the trie.
//!
//! Child edges are owned by their parent through the arena; failure links
//! are plain indices into the same arena and never own anything, so the
//! node graph has no ownership cycles.

use super::PatternId;

/// Index of a node within an automaton's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root node. Always the first node in the arena.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    #[inline]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

/// One prefix of the pattern set.
#[derive(Clone, Debug)]
pub struct Node {
    /// Outgoing edges sorted by symbol.
    children: Vec<(u8, NodeId)>,
    /// Failure link.
    pub(crate) fail: NodeId,
    /// Patterns recognized on arrival at this node, own matches first.
    pub(crate) output: Vec<PatternId>,
    /// Length of the prefix this node spells.
    pub(crate) depth: usize,
}

impl Node {
    fn new(depth: usize) -> Self {
        Self {
            children: Vec::new(),
            fail: NodeId::ROOT,
            output: Vec::new(),
            depth,
        }
    }

    /// Child reached on `symbol`, if any.
    #[inline]
    pub fn child(&self, symbol: u8) -> Option<NodeId> {
        // Most nodes have one or two edges; a linear scan beats bisection there.
        if self.children.len() <= 4 {
            return self
                .children
                .iter()
                .find(|(s, _)| *s == symbol)
                .map(|(_, id)| *id);
        }
        self.children
            .binary_search_by_key(&symbol, |(s, _)| *s)
            .ok()
            .map(|i| self.children[i].1)
    }

    /// Outgoing edges in symbol order.
    pub fn children(&self) -> &[(u8, NodeId)] {
        &self.children
    }

    pub fn fail(&self) -> NodeId {
        self.fail
    }

    pub fn output(&self) -> &[PatternId] {
        &self.output
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Flat storage for every node of one automaton.
///
/// Dropping the arena releases all nodes in a single pass over the vector,
/// independent of how deep the trie is.
#[derive(Clone, Debug)]
pub struct Arena {
    nodes: Vec<Node>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    /// Create an arena holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(0)],
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Return the child of `parent` on `symbol`, creating it if missing.
    pub(crate) fn child_or_insert(&mut self, parent: NodeId, symbol: u8) -> NodeId {
        let pos = match self.nodes[parent.index()]
            .children
            .binary_search_by_key(&symbol, |(s, _)| *s)
        {
            Ok(i) => return self.nodes[parent.index()].children[i].1,
            Err(pos) => pos,
        };

        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(Node::new(depth));
        self.nodes[parent.index()]
            .children
            .insert(pos, (symbol, id));
        id
    }

    /// Copy the output of `from` onto the end of the output of `to`.
    pub(crate) fn inherit_output(&mut self, to: NodeId, from: NodeId) {
        if to == from || self.nodes[from.index()].output.is_empty() {
            return;
        }
        // Split borrow: the two ids always differ here.
        let (dst, src) = if to.index() < from.index() {
            let (left, right) = self.nodes.split_at_mut(from.index());
            (&mut left[to.index()], &right[0])
        } else {
            let (left, right) = self.nodes.split_at_mut(to.index());
            (&mut right[0], &left[from.index()])
        };
        dst.output.extend_from_slice(&src.output);
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i), n))
    }

    /// Release spare capacity once construction is complete.
    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
        for node in &mut self.nodes {
            node.children.shrink_to_fit();
            node.output.shrink_to_fit();
        }
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
