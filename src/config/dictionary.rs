//! Dictionary configuration module.
//!
//! This module defines where the dictionary lives on disk and how the
//! session treats lookups, suggestions and persistence.

use super::{ConfigResult, Validate};
use crate::data_structures::word_trie::{WordTrieConfig, DEFAULT_MAX_WORD_LEN, MAX_WORD_LEN_LIMIT};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const SECTION: &str = "dictionary";

/// Dictionary configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Path of the UTF-8 text dictionary (one word per line)
    pub text_path: PathBuf,

    /// Path of the binary trie snapshot
    pub binary_path: PathBuf,

    /// Maximum number of characters kept per word
    pub max_word_len: usize,

    /// Number of entries returned by top-K, autocomplete and spelling suggestions
    pub suggestion_limit: usize,

    /// Whether a successful search counts as a selection and bumps the frequency
    pub count_searches: bool,

    /// Whether to rewrite the text dictionary after every mutating operation
    pub autosave_text: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            text_path: PathBuf::from("words.txt"),
            binary_path: PathBuf::from("words.txt.bin"),
            max_word_len: DEFAULT_MAX_WORD_LEN,
            suggestion_limit: 10,
            count_searches: true,
            autosave_text: true,
        }
    }
}

impl DictionaryConfig {
    /// Trie settings derived from this configuration.
    pub fn trie_config(&self) -> WordTrieConfig {
        WordTrieConfig {
            max_word_len: self.max_word_len,
        }
    }
}

impl Validate for DictionaryConfig {
    fn validate(&self) -> ConfigResult<()> {
        for (field, path) in [("text_path", &self.text_path), ("binary_path", &self.binary_path)] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::invalid(SECTION, field, "path is empty"));
            }
        }
        if self.text_path == self.binary_path {
            return Err(ConfigError::invalid(
                SECTION,
                "binary_path",
                "must differ from text_path",
            ));
        }
        if !(1..=MAX_WORD_LEN_LIMIT).contains(&self.max_word_len) {
            return Err(ConfigError::invalid(
                SECTION,
                "max_word_len",
                format!("{} is not within 1..={MAX_WORD_LEN_LIMIT}", self.max_word_len),
            ));
        }
        if self.suggestion_limit == 0 {
            return Err(ConfigError::invalid(SECTION, "suggestion_limit", "must be at least 1"));
        }
        Ok(())
    }
}
