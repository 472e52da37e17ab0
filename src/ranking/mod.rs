// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ranking and suggestion algorithms over a [`WordTrie`].
//!
//! Every function here is a pure function of the trie and its arguments,
//! except [`select_suggestion`], which records a selection.
//!
//! # Example
//!
//! ```
//! use olelo_lib::data_structures::WordTrie;
//! use olelo_lib::ranking::{autocomplete, top_k};
//!
//! let mut trie = WordTrie::new();
//! for word in ["dog", "door", "door", "cat"] {
//!     trie.insert(word);
//! }
//!
//! let words: Vec<String> = autocomplete(&trie, "do", 10).into_iter().map(|r| r.word).collect();
//! assert_eq!(words, vec!["door", "dog"]);
//! assert_eq!(top_k(&trie, 1)[0].word, "door");
//! ```

pub mod levenshtein;
mod spelling;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::data_structures::{WordRecord, WordTrie};

pub use spelling::{spell_suggest, SpellSuggestion};

/// Orders records by descending frequency, then ascending word.
pub fn by_frequency(a: &WordRecord, b: &WordRecord) -> Ordering {
    b.frequency
        .cmp(&a.frequency)
        .then_with(|| a.word.cmp(&b.word))
}

fn rank(mut records: Vec<WordRecord>, k: usize) -> Vec<WordRecord> {
    records.sort_unstable_by(by_frequency);
    records.truncate(k);
    records
}

/// Returns the `k` most frequent words of the whole dictionary.
///
/// Ties are broken alphabetically. Fewer than `k` records are returned when
/// the dictionary is smaller; an empty dictionary yields an empty vector.
pub fn top_k(trie: &WordTrie, k: usize) -> Vec<WordRecord> {
    rank(trie.collect_all(), k)
}

/// Returns the `k` most frequent words starting with `prefix`.
///
/// Same ordering as [`top_k`]. An unknown prefix yields an empty vector.
pub fn autocomplete(trie: &WordTrie, prefix: &str, k: usize) -> Vec<WordRecord> {
    rank(trie.collect_under_prefix(prefix), k)
}

/// Outcome of accepting a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Frequency of the word after the selection
    pub frequency: u32,

    /// Whether the word was missing and had to be inserted
    pub inserted: bool,
}

/// Records that the user accepted `text` as a suggestion.
///
/// A stored word gains one occurrence. Text that is not a stored word (for
/// instance because it was deleted after the suggestion list was produced)
/// is inserted with frequency 1.
pub fn select_suggestion(trie: &mut WordTrie, text: &str) -> Selection {
    let chars = trie.fold(text);
    match trie.bump_folded(&chars) {
        Some(frequency) => Selection {
            frequency,
            inserted: false,
        },
        None => Selection {
            frequency: trie.insert_folded(&chars),
            inserted: true,
        },
    }
}
