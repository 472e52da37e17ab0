// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word Trie Implementation
//!
//! A case-insensitive prefix tree storing words together with an occurrence
//! count. It is the backing store for autocomplete, top-K ranking and
//! spelling suggestions.
//!
//! # Example
//!
//! ```
//! use olelo_lib::data_structures::word_trie::WordTrie;
//!
//! let mut trie = WordTrie::new();
//! trie.insert("Apple");
//! trie.insert("apple");
//!
//! assert_eq!(trie.search("APPLE").map(|node| node.frequency()), Some(2));
//! assert!(trie.find_prefix_node("ap").is_some());
//! ```

mod node;
mod traversal;

pub use node::TrieNode;
pub use traversal::WordRecord;

/// Default bound on the number of characters kept per word.
pub const DEFAULT_MAX_WORD_LEN: usize = 511;

/// Largest `max_word_len` the configuration accepts.
pub const MAX_WORD_LEN_LIMIT: usize = 4096;

/// Configuration options for the word trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTrieConfig {
    /// Maximum number of characters kept per word; longer input is truncated.
    pub max_word_len: usize,
}

impl Default for WordTrieConfig {
    fn default() -> Self {
        Self {
            max_word_len: DEFAULT_MAX_WORD_LEN,
        }
    }
}

/// Case-insensitive trie mapping words to frequencies.
///
/// Key properties:
/// * Every navigation key is lowercased exactly once per operation
/// * Words longer than `max_word_len` characters are truncated, not rejected
/// * Deleting a word prunes every node left without a word or children
/// * Single owner, mutated in place through `&mut self`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WordTrie {
    /// The root node; never removed, never terminal
    root: TrieNode,

    /// Configuration options
    config: WordTrieConfig,
}

impl WordTrie {
    /// Creates a new empty `WordTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(WordTrieConfig::default())
    }

    /// Creates a new empty `WordTrie` with the specified configuration.
    pub fn with_config(config: WordTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
        }
    }

    /// Builds a trie around an already populated root, as produced by the binary codec.
    pub(crate) fn from_root(root: TrieNode, config: WordTrieConfig) -> Self {
        Self { root, config }
    }

    /// Returns the configuration of this trie.
    pub fn config(&self) -> &WordTrieConfig {
        &self.config
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Case-folds `word` and truncates it to the configured length bound.
    pub fn fold(&self, word: &str) -> Vec<char> {
        let mut folded: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
        if folded.len() > self.config.max_word_len {
            tracing::debug!(
                length = folded.len(),
                max_word_len = self.config.max_word_len,
                "Truncating over-long word"
            );
            folded.truncate(self.config.max_word_len);
        }
        folded
    }

    /// Case-folded, truncated form of `word` as a `String`.
    pub fn normalize(&self, word: &str) -> String {
        self.fold(word).into_iter().collect()
    }

    /// Inserts one occurrence of `word`.
    ///
    /// Missing nodes along the path are created. The final node becomes
    /// terminal and its frequency grows by one.
    ///
    /// # Returns
    ///
    /// The word's frequency after the insertion, or 0 if `word` folds to the
    /// empty string (which is never stored).
    pub fn insert(&mut self, word: &str) -> u32 {
        let chars = self.fold(word);
        self.insert_folded(&chars)
    }

    /// Inserts an already folded key.
    pub(crate) fn insert_folded(&mut self, chars: &[char]) -> u32 {
        if chars.is_empty() {
            return 0;
        }

        let mut node = &mut self.root;
        for &c in chars {
            node = node.children.entry(c).or_default();
        }
        node.mark_occurrence()
    }

    /// Looks up a stored word.
    ///
    /// # Returns
    ///
    /// The terminal node for `word`, or `None` if the path is missing or does
    /// not end at a stored word. Never changes any frequency.
    pub fn search(&self, word: &str) -> Option<&TrieNode> {
        let chars = self.fold(word);
        self.node_at(&chars).filter(|node| node.is_terminal)
    }

    /// Returns `true` if `word` is stored.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).is_some()
    }

    /// Counts one more selection of an already stored word.
    ///
    /// # Returns
    ///
    /// The new frequency, or `None` if `word` is not stored.
    pub fn bump(&mut self, word: &str) -> Option<u32> {
        let chars = self.fold(word);
        self.bump_folded(&chars)
    }

    pub(crate) fn bump_folded(&mut self, chars: &[char]) -> Option<u32> {
        let node = self.node_at_mut(chars).filter(|node| node.is_terminal)?;
        Some(node.mark_occurrence())
    }

    /// Returns the node at the end of `prefix`, terminal or not.
    ///
    /// The empty prefix yields the root, under which every word lives.
    pub fn find_prefix_node(&self, prefix: &str) -> Option<&TrieNode> {
        let chars = self.fold(prefix);
        self.node_at(&chars)
    }

    pub(crate) fn node_at(&self, chars: &[char]) -> Option<&TrieNode> {
        chars
            .iter()
            .try_fold(&self.root, |node, c| node.children.get(c))
    }

    fn node_at_mut(&mut self, chars: &[char]) -> Option<&mut TrieNode> {
        let mut node = &mut self.root;
        for c in chars {
            node = node.children.get_mut(c)?;
        }
        Some(node)
    }

    /// Removes a stored word and prunes the branch it leaves behind.
    ///
    /// The final node loses its terminal flag and frequency. Walking back up
    /// the path, every node that is now neither terminal nor has children is
    /// detached from its parent; pruning stops at the first ancestor that still
    /// holds a word or other children. The root is never removed.
    ///
    /// # Returns
    ///
    /// `true` if the word was stored and has been removed, `false` otherwise.
    pub fn delete(&mut self, word: &str) -> bool {
        let chars = self.fold(word);
        if chars.is_empty() {
            return false;
        }

        // Find the shallowest edge whose whole subtree dies with this word.
        let mut cut_depth = 0;
        let mut node = &self.root;
        for (depth, c) in chars.iter().enumerate() {
            if depth > 0 && (node.is_terminal || node.children.len() > 1) {
                cut_depth = depth;
            }
            match node.children.get(c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        if !node.is_terminal {
            return false;
        }
        let leaf_has_children = !node.children.is_empty();

        let Some(target) = self.node_at_mut(&chars) else {
            return false;
        };
        target.unmark();

        if !leaf_has_children {
            let (parent_path, edge) = chars.split_at(cut_depth);
            if let Some(parent) = self.node_at_mut(parent_path) {
                parent.children.remove(&edge[0]);
            }
        }
        true
    }

    /// Returns the number of stored words.
    ///
    /// This requires traversing the entire trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.walk().filter(|node| node.is_terminal).count()
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Removes every word, keeping the configuration.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }

    /// Iterates over every node in depth-first order.
    fn walk(&self) -> impl Iterator<Item = &TrieNode> {
        let mut stack = vec![&self.root];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.values());
            Some(node)
        })
    }
}
