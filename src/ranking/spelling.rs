// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! "Did you mean" suggestions by edit distance over the whole dictionary.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::levenshtein;
use crate::data_structures::WordTrie;

/// A spelling suggestion with its edit distance from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSuggestion {
    /// The suggested word.
    pub word: String,
    /// Edit distance from the input.
    pub distance: usize,
    /// Frequency of the suggested word in the dictionary.
    pub frequency: u32,
}

impl Ord for SpellSuggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closest first, then most frequent, then alphabetical
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.frequency.cmp(&self.frequency))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for SpellSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ranks every stored word by edit distance from `input`.
///
/// The input is case-folded the same way stored words are. Every word in the
/// dictionary is compared, not only those sharing a prefix.
///
/// # Returns
///
/// * `None` - the dictionary is empty, so there is nothing to compare against.
/// * `Some(suggestions)` - at most `k` suggestions, closest first; ties go to
///   the more frequent word, then to the alphabetically smaller one.
pub fn spell_suggest(trie: &WordTrie, input: &str, k: usize) -> Option<Vec<SpellSuggestion>> {
    let records = trie.collect_all();
    if records.is_empty() {
        return None;
    }

    let input = trie.fold(input);
    let mut suggestions: Vec<SpellSuggestion> = records
        .into_iter()
        .map(|record| {
            let chars: Vec<char> = record.word.chars().collect();
            SpellSuggestion {
                distance: levenshtein::distance(&input, &chars),
                word: record.word,
                frequency: record.frequency,
            }
        })
        .collect();

    suggestions.sort_unstable();
    suggestions.truncate(k);
    Some(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[(&str, u32)]) -> WordTrie {
        let mut trie = WordTrie::new();
        for (word, freq) in words {
            for _ in 0..*freq {
                trie.insert(word);
            }
        }
        trie
    }

    #[test]
    fn test_empty_dictionary_has_nothing_to_compare() {
        let trie = WordTrie::new();
        assert_eq!(spell_suggest(&trie, "anything", 5), None);
    }

    #[test]
    fn test_closest_first() {
        let trie = build(&[("hello", 1), ("help", 1), ("world", 1)]);
        let suggestions = spell_suggest(&trie, "helo", 3).unwrap();

        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["hello", "help", "world"]);
        assert_eq!(suggestions[0].distance, 1);
        assert_eq!(suggestions[1].distance, 1);
    }

    #[test]
    fn test_ties_prefer_frequency_then_alphabet() {
        let trie = build(&[("bat", 1), ("cat", 4), ("hat", 1)]);
        let suggestions = spell_suggest(&trie, "rat", 3).unwrap();

        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["cat", "bat", "hat"]);
        assert!(suggestions.iter().all(|s| s.distance == 1));
    }

    #[test]
    fn test_input_is_case_folded() {
        let trie = build(&[("apple", 1)]);
        let suggestions = spell_suggest(&trie, "APPLE", 1).unwrap();
        assert_eq!(suggestions[0].distance, 0);
    }

    #[test]
    fn test_limit() {
        let trie = build(&[("a", 1), ("b", 1), ("c", 1)]);
        assert_eq!(spell_suggest(&trie, "z", 2).unwrap().len(), 2);
        assert!(spell_suggest(&trie, "z", 0).unwrap().is_empty());
    }
}
