// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Handle-based ownership of built automata.
//!
//! Callers that cannot hold a Rust reference (a foreign runtime, a request
//! handler keyed by id) create an automaton here, search it through the
//! returned [`Handle`], and release it explicitly with `destroy_instance`.
//!
//! Instances are stored as `Arc<Automaton>` in a sharded map. A search clones
//! the `Arc` and drops the shard lock before scanning, so searches on different
//! handles never contend, and destroying a handle mid-search only releases the
//! automaton once that search finishes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use serde::Serialize;

use crate::automaton::{Automaton, Match, PatternId};
use crate::error::{Error, Result};

/// Opaque identifier for a registered automaton.
///
/// Handles are allocated from a monotonically increasing counter starting at
/// 1 and are never reused within a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Handle(u64);

impl Handle {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Table of live automata keyed by handle.
#[derive(Debug)]
pub struct Registry {
    instances: DashMap<Handle, Arc<Automaton>>,
    next: AtomicU64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            instances: DashMap::new(),
            next: AtomicU64::new(1),
        }
    }

    /// Build an automaton from `patterns` and register it.
    pub fn create_instance<I, P>(&self, patterns: I) -> Handle
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        self.insert(Automaton::new(patterns))
    }

    /// Register an already built automaton.
    pub fn insert(&self, automaton: Automaton) -> Handle {
        let handle = Handle(self.next.fetch_add(1, Ordering::Relaxed));
        tracing::trace!(%handle, patterns = automaton.pattern_count(), "registered automaton");
        self.instances.insert(handle, Arc::new(automaton));
        handle
    }

    /// Shared reference to the automaton behind `handle`.
    pub fn get(&self, handle: Handle) -> Result<Arc<Automaton>> {
        self.instances
            .get(&handle)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(Error::NotFound { handle })
    }

    /// Search the automaton behind `handle`.
    ///
    /// Unknown and destroyed handles yield `Error::NotFound`.
    pub fn search(&self, handle: Handle, text: impl AsRef<[u8]>) -> Result<Vec<PatternId>> {
        Ok(self.get(handle)?.search(text))
    }

    /// Search with byte offsets.
    pub fn search_matches(&self, handle: Handle, text: impl AsRef<[u8]>) -> Result<Vec<Match>> {
        Ok(self.get(handle)?.matches(text))
    }

    /// Remove the automaton behind `handle`.
    ///
    /// Returns `false` when the handle was unknown; that is not an error.
    pub fn destroy_instance(&self, handle: Handle) -> bool {
        let removed = self.instances.remove(&handle).is_some();
        tracing::trace!(%handle, removed, "destroyed automaton");
        removed
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

/// The process-wide registry.
pub fn global() -> &'static Registry {
    static GLOBAL: OnceLock<Registry> = OnceLock::new();
    GLOBAL.get_or_init(Registry::new)
}

/// Build and register an automaton in the process-wide registry.
pub fn create_instance<I, P>(patterns: I) -> Handle
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    global().create_instance(patterns)
}

/// Search an automaton in the process-wide registry.
pub fn search(handle: Handle, text: impl AsRef<[u8]>) -> Result<Vec<PatternId>> {
    global().search(handle, text)
}

/// Release an automaton from the process-wide registry.
pub fn destroy_instance(handle: Handle) -> bool {
    global().destroy_instance(handle)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
