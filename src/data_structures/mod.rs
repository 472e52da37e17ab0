//! Data structures for the Olelo dictionary engine.
//!
//! This module contains the in-memory structures the dictionary is built on.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Single-owner mutation through `&mut self`
//! - Bounded traversal depth

pub mod word_trie;

// Re-export common data structures
pub use word_trie::{TrieNode, WordRecord, WordTrie, WordTrieConfig};
