// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the word trie.
//!
//! Each node owns its children outright, so dropping a node releases the
//! whole subtree beneath it. Dropping, comparing and formatting never recurse,
//! so a trie as deep as its longest word is safe on any thread stack.

use std::fmt;

use fnv::FnvHashMap;

/// A node in the word trie.
///
/// Each node represents one prefix position. Terminal nodes mark the end of a
/// stored word and carry that word's frequency.
#[derive(Default)]
pub struct TrieNode {
    /// Map of case-folded characters to owned child nodes
    pub(crate) children: FnvHashMap<char, TrieNode>,

    /// Whether a stored word ends at this node
    pub(crate) is_terminal: bool,

    /// Occurrence/selection count; always 0 on non-terminal nodes
    pub(crate) frequency: u32,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Frequency of the word ending here, 0 when the node is not terminal.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the child reached through `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Iterates over `(edge, child)` pairs in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(c, node)| (*c, node))
    }

    /// A node that is neither terminal nor has children is dead and must be pruned.
    pub(crate) fn is_prunable(&self) -> bool {
        !self.is_terminal && self.children.is_empty()
    }

    /// Marks the node as the end of a word and counts one more occurrence.
    pub(crate) fn mark_occurrence(&mut self) -> u32 {
        self.is_terminal = true;
        self.frequency = self.frequency.saturating_add(1);
        self.frequency
    }

    /// Clears the terminal flag together with the frequency.
    pub(crate) fn unmark(&mut self) {
        self.is_terminal = false;
        self.frequency = 0;
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        // Detach every descendant before it is dropped so each drop is shallow
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some((a, b)) = pairs.pop() {
            if a.is_terminal != b.is_terminal
                || a.frequency != b.frequency
                || a.children.len() != b.children.len()
            {
                return false;
            }
            for (c, child) in &a.children {
                match b.children.get(c) {
                    Some(twin) => pairs.push((child, twin)),
                    None => return false,
                }
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    /// Shallow: shows the outgoing edges, not the subtrees behind them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut edges: Vec<char> = self.children.keys().copied().collect();
        edges.sort_unstable();
        f.debug_struct("TrieNode")
            .field("is_terminal", &self.is_terminal)
            .field("frequency", &self.frequency)
            .field("edges", &edges)
            .finish()
    }
}
