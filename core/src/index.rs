//! The table index: a `tail digest -> head plaintext` mapping.
//!
//! Backed by both a `HashMap` for O(1) point lookups and a `BTreeMap` for
//! ordered traversal — an ordered balanced multiway tree is exactly what a
//! `BTreeMap` already is in the standard library, so `search_ordered` is a
//! thin fast-path over the same entries rather than a second data
//! structure to maintain by hand.

use std::collections::{BTreeMap, HashMap};

/// Maps chain tails to chain heads, with an ordered secondary index.
#[derive(Clone, Debug, Default)]
pub struct TableIndex {
    by_tail: HashMap<Vec<u8>, Vec<u8>>,
    ordered: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl TableIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            by_tail: HashMap::with_capacity(capacity),
            ordered: BTreeMap::new(),
        }
    }

    /// Inserts `(tail -> head)`, overwriting any prior entry for `tail`.
    /// Returns `true` if this tail was already present (a collision).
    pub fn insert(&mut self, tail: Vec<u8>, head: Vec<u8>) -> bool {
        self.ordered.insert(tail.clone(), head.clone());
        self.by_tail.insert(tail, head).is_some()
    }

    pub fn contains(&self, tail: &[u8]) -> bool {
        self.by_tail.contains_key(tail)
    }

    pub fn get(&self, tail: &[u8]) -> Option<&[u8]> {
        self.by_tail.get(tail).map(Vec::as_slice)
    }

    /// Same semantics as `get`, routed through the ordered tree. Present
    /// as a performance hint for workloads that prefer ordered storage;
    /// never required for correctness.
    pub fn search_ordered(&self, tail: &[u8]) -> Option<&[u8]> {
        self.ordered.get(tail).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.by_tail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tail.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_tail.clear();
        self.ordered.clear();
    }

    /// Iterates `(tail, head)` pairs in ascending tail order, used by
    /// persistence so that two consecutive saves of an unmodified table
    /// produce byte-identical output.
    pub fn iter_ordered(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.ordered.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}
