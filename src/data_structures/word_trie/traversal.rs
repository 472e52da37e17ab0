// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Depth-first word collection.
//!
//! Collection runs over an explicit stack with a single path buffer, so its
//! depth is not limited by the call stack.

use serde::{Deserialize, Serialize};

use super::{TrieNode, WordTrie};

/// A stored word paired with its frequency, produced by traversal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordRecord {
    /// The case-folded word
    pub word: String,

    /// Occurrence/selection count
    pub frequency: u32,
}

impl WordRecord {
    /// Creates a new word record.
    pub fn new<W: Into<String>>(word: W, frequency: u32) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

impl WordTrie {
    /// Collects every stored word with its frequency.
    ///
    /// Words come out in pre-order, which is not a meaningful ordering;
    /// callers sort as needed. An empty trie yields an empty vector.
    pub fn collect_all(&self) -> Vec<WordRecord> {
        collect_from(&self.root, Vec::new())
    }

    /// Collects every stored word that starts with `prefix`.
    ///
    /// Returned words are complete (the folded prefix is included). A prefix
    /// that leads nowhere yields an empty vector, and so does a prefix longer
    /// than `max_word_len`, since no stored word can start with it.
    pub fn collect_under_prefix(&self, prefix: &str) -> Vec<WordRecord> {
        let folded_len = prefix.chars().flat_map(char::to_lowercase).count();
        if folded_len > self.config.max_word_len {
            return Vec::new();
        }
        let chars = self.fold(prefix);
        match self.node_at(&chars) {
            Some(node) => collect_from(node, chars),
            None => Vec::new(),
        }
    }
}

/// Pre-order traversal below `start`, with `path` already holding the
/// characters that lead to it.
fn collect_from(start: &TrieNode, mut path: Vec<char>) -> Vec<WordRecord> {
    let mut records = Vec::new();

    // (node, path length before its edge, edge leading into it)
    let mut stack: Vec<(&TrieNode, usize, Option<char>)> = vec![(start, path.len(), None)];

    while let Some((node, depth, edge)) = stack.pop() {
        path.truncate(depth);
        if let Some(c) = edge {
            path.push(c);
        }

        if node.is_terminal {
            records.push(WordRecord::new(path.iter().collect::<String>(), node.frequency));
        }

        let depth = path.len();
        stack.extend(
            node.children
                .iter()
                .map(|(c, child)| (child, depth, Some(*c))),
        );
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::WordTrieConfig;
    use std::collections::HashSet;

    fn words(records: &[WordRecord]) -> HashSet<&str> {
        records.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn test_collect_all() {
        let mut trie = WordTrie::new();
        for word in ["apple", "app", "banana", "band", "apple"] {
            trie.insert(word);
        }

        let records = trie.collect_all();
        assert_eq!(records.len(), 4);
        assert_eq!(
            words(&records),
            HashSet::from(["apple", "app", "banana", "band"])
        );
        assert!(records.contains(&WordRecord::new("apple", 2)));
        assert!(records.contains(&WordRecord::new("band", 1)));
    }

    #[test]
    fn test_collect_all_empty() {
        let trie = WordTrie::new();
        assert!(trie.collect_all().is_empty());
    }

    #[test]
    fn test_collect_under_prefix() {
        let mut trie = WordTrie::new();
        for word in ["dog", "door", "cat", "do"] {
            trie.insert(word);
        }

        let records = trie.collect_under_prefix("DO");
        assert_eq!(words(&records), HashSet::from(["dog", "door", "do"]));

        let records = trie.collect_under_prefix("doo");
        assert_eq!(records, vec![WordRecord::new("door", 1)]);

        assert!(trie.collect_under_prefix("dx").is_empty());
        assert_eq!(trie.collect_under_prefix("").len(), 4);
    }

    #[test]
    fn test_collect_deep_word() {
        let mut trie = WordTrie::new();
        let long: String = std::iter::repeat('z').take(500).collect();
        trie.insert(&long);
        trie.insert("zz");

        let records = trie.collect_under_prefix("zz");
        assert_eq!(records.len(), 2);
        assert!(records.iter().any(|r| r.word == long));
    }

    #[test]
    fn test_prefix_longer_than_word_limit() {
        let mut trie = WordTrie::with_config(WordTrieConfig { max_word_len: 4 });
        trie.insert("abcdef");
        assert_eq!(trie.collect_under_prefix("abcd").len(), 1);
        assert!(trie.collect_under_prefix("abcdxy").is_empty());
    }
}
