//! Binary min-heap priority queue over (key, value) pairs.

use serde::Serialize;

use crate::types::{DsError, DsResult, IntoKey, Key};

/// A heap slot: a priority key and its associated value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeapNode<V> {
    pub key: Key,
    pub value: V,
}

/// Minimum-priority queue backed by a 1-indexed binary heap.
///
/// Positions run from 1 to `len()`; position 0 is the unused sentinel, so
/// the parent of `p` is `p / 2` and its children are `2p` and `2p + 1`.
/// Position `p` is stored at `nodes[p - 1]`.
///
/// Heap order: every non-root key is `>=` its parent's key.
#[derive(Debug, Clone)]
pub struct MinPQTable<V> {
    nodes: Vec<HeapNode<V>>,
}

impl<V> MinPQTable<V> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty queue with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Build a queue by inserting each pair in turn. Fails on the first
    /// invalid key.
    pub fn try_from_pairs<I, K>(pairs: I) -> DsResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: IntoKey,
    {
        let mut table = Self::new();
        for (key, value) in pairs {
            table.insert(key, value)?;
        }
        Ok(table)
    }

    /// Number of stored nodes (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when only the sentinel remains.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a key/value pair, then sift it up.
    ///
    /// Keys must be finite numbers or strings. On [`DsError::InvalidKey`]
    /// the queue is left untouched.
    pub fn insert<K: IntoKey>(&mut self, key: K, value: V) -> DsResult<()> {
        let key = key.into_key()?;
        self.nodes.push(HeapNode { key, value });
        self.sift_up(self.nodes.len());
        Ok(())
    }

    /// Remove and return the node with the smallest key.
    pub fn delete_min(&mut self) -> DsResult<HeapNode<V>> {
        if self.nodes.is_empty() {
            return Err(DsError::EmptyStructure);
        }
        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let min = self.nodes.pop().ok_or(DsError::EmptyStructure)?;
        if !self.nodes.is_empty() {
            self.sift_down(1);
        }
        Ok(min)
    }

    /// The node with the smallest key, without removing it.
    pub fn peek_min(&self) -> DsResult<&HeapNode<V>> {
        self.nodes.first().ok_or(DsError::EmptyStructure)
    }

    /// Heap positions `1..=len()` in level order.
    pub fn nodes(&self) -> &[HeapNode<V>] {
        &self.nodes
    }

    /// Keys in level order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.nodes.iter().map(|n| &n.key)
    }

    /// Drain the queue in ascending key order.
    pub fn into_sorted_vec(mut self) -> Vec<HeapNode<V>> {
        let mut sorted = Vec::with_capacity(self.nodes.len());
        while let Ok(node) = self.delete_min() {
            sorted.push(node);
        }
        sorted
    }

    fn key_at(&self, pos: usize) -> &Key {
        &self.nodes[pos - 1].key
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        self.nodes.swap(a - 1, b - 1);
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 1 {
            let parent = pos / 2;
            if self.key_at(pos) >= self.key_at(parent) {
                break;
            }
            self.swap_positions(pos, parent);
            pos = parent;
        }
        log::trace!("sift_up settled at position {}", pos);
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.nodes.len();
        while 2 * pos <= len {
            let mut child = 2 * pos;
            // Equal children resolve to the left one.
            if child < len && self.key_at(child + 1) < self.key_at(child) {
                child += 1;
            }
            if self.key_at(child) >= self.key_at(pos) {
                break;
            }
            self.swap_positions(pos, child);
            pos = child;
        }
        log::trace!("sift_down settled at position {}", pos);
    }
}

impl<V> Default for MinPQTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
