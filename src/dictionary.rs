//! Dictionary session.
//!
//! A [`Dictionary`] owns one [`WordTrie`] together with the two files it is
//! persisted to, and exposes the operations a front end needs: lookups,
//! edits, ranked suggestions and load/save. Every operation runs to completion
//! on the calling thread.
//!
//! When `autosave_text` is enabled, each successful mutation rewrites the
//! sorted text dictionary. A failed autosave never undoes the mutation; it is
//! logged and handed to the global error reporter.

use std::fmt;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::DictionaryConfig;
use crate::data_structures::{WordRecord, WordTrie};
use crate::error::persistence::PersistenceResult;
use crate::error::{report_error, ErrorContext, OleloResult, PersistenceError};
use crate::persistence::{self, TextImport};
use crate::ranking::{self, Selection, SpellSuggestion};

/// Where the dictionary contents came from when it was opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum LoadSource {
    /// Restored from the binary snapshot
    Binary,
    /// Imported from the text dictionary
    Text(TextImport),
    /// Neither file existed
    Empty,
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary snapshot"),
            Self::Text(import) => write!(f, "text dictionary ({} lines)", import.inserted),
            Self::Empty => write!(f, "empty dictionary"),
        }
    }
}

/// A single-owner dictionary session.
#[derive(Debug)]
pub struct Dictionary {
    trie: WordTrie,
    config: DictionaryConfig,
    source: LoadSource,
}

impl Dictionary {
    /// Creates an empty dictionary without touching the filesystem.
    pub fn new(config: DictionaryConfig) -> Self {
        Self {
            trie: WordTrie::with_config(config.trie_config()),
            config,
            source: LoadSource::Empty,
        }
    }

    /// Opens the dictionary described by `config`.
    ///
    /// The binary snapshot is tried first, then the text dictionary; if
    /// neither exists the dictionary starts empty.
    ///
    /// # Returns
    ///
    /// * `Ok(Dictionary)` - ready for use; see [`Dictionary::source`].
    /// * `Err(OleloError::Persistence)` - a file exists but could not be read
    ///   or the snapshot is malformed.
    pub fn open(config: DictionaryConfig) -> OleloResult<Self> {
        let mut dictionary = Self::new(config);

        match dictionary.load_binary() {
            Ok(()) => {}
            Err(PersistenceError::FileAbsent(path)) => {
                debug!(path = %path.display(), "No binary snapshot, trying text dictionary");
                match dictionary.load_text() {
                    Ok(import) => dictionary.source = LoadSource::Text(import),
                    Err(PersistenceError::FileAbsent(path)) => {
                        debug!(path = %path.display(), "No text dictionary, starting empty");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Err(e) => return Err(e.into()),
        }

        info!(source = %dictionary.source, words = dictionary.trie.len(), "Dictionary opened");
        Ok(dictionary)
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    /// Returns the configuration of this session.
    pub fn config(&self) -> &DictionaryConfig {
        &self.config
    }

    /// Where the current contents were loaded from.
    pub fn source(&self) -> LoadSource {
        self.source
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Returns `true` if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Inserts one occurrence of `word` and returns its new frequency.
    pub fn insert(&mut self, word: &str) -> u32 {
        let frequency = self.trie.insert(word);
        debug!(word, frequency, "Inserted word");
        if frequency > 0 {
            self.autosave("insert");
        }
        frequency
    }

    /// Looks `word` up.
    ///
    /// When `count_searches` is enabled a hit counts as a selection and the
    /// returned frequency already includes it.
    ///
    /// # Returns
    ///
    /// The word's frequency, or `None` if it is not stored.
    pub fn search(&mut self, word: &str) -> Option<u32> {
        let frequency = if self.config.count_searches {
            let bumped = self.trie.bump(word);
            if bumped.is_some() {
                self.autosave("search");
            }
            bumped
        } else {
            self.trie.search(word).map(|node| node.frequency())
        };
        debug!(word, found = frequency.is_some(), "Searched word");
        frequency
    }

    /// Looks `word` up without counting a selection.
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.trie.search(word).map(|node| node.frequency())
    }

    /// Deletes `word`. Returns `false` if it was not stored.
    pub fn delete(&mut self, word: &str) -> bool {
        let deleted = self.trie.delete(word);
        debug!(word, deleted, "Deleted word");
        if deleted {
            self.autosave("delete");
        }
        deleted
    }

    /// The `k` most frequent words.
    pub fn top_k(&self, k: usize) -> Vec<WordRecord> {
        ranking::top_k(&self.trie, k)
    }

    /// The `k` most frequent words starting with `prefix`.
    pub fn autocomplete(&self, prefix: &str, k: usize) -> Vec<WordRecord> {
        ranking::autocomplete(&self.trie, prefix, k)
    }

    /// Records that `text` was picked from a suggestion list.
    pub fn select_suggestion(&mut self, text: &str) -> Selection {
        let selection = ranking::select_suggestion(&mut self.trie, text);
        debug!(
            text,
            frequency = selection.frequency,
            inserted = selection.inserted,
            "Selected suggestion"
        );
        if selection.frequency > 0 {
            self.autosave("select");
        }
        selection
    }

    /// Up to `k` stored words closest to `input` by edit distance, or `None`
    /// when the dictionary is empty.
    pub fn spell_suggest(&self, input: &str, k: usize) -> Option<Vec<SpellSuggestion>> {
        ranking::spell_suggest(&self.trie, input, k)
    }

    /// Writes the binary snapshot to `binary_path`.
    pub fn save_binary(&self) -> PersistenceResult<()> {
        persistence::save_binary(&self.config.binary_path, &self.trie)?;
        info!(path = %self.config.binary_path.display(), "Saved binary snapshot");
        Ok(())
    }

    /// Replaces the contents with the binary snapshot at `binary_path`.
    ///
    /// On any error, including a missing file, the current contents are kept.
    pub fn load_binary(&mut self) -> PersistenceResult<()> {
        self.trie = persistence::load_binary(&self.config.binary_path, self.config.trie_config())?;
        self.source = LoadSource::Binary;
        info!(path = %self.config.binary_path.display(), words = self.trie.len(), "Loaded binary snapshot");
        Ok(())
    }

    /// Imports the text dictionary at `text_path` into the current contents.
    ///
    /// Each line counts as one occurrence of its word.
    pub fn load_text(&mut self) -> PersistenceResult<TextImport> {
        let path = self.config.text_path.clone();
        self.import_text(&path)
    }

    /// Imports any text dictionary into the current contents.
    ///
    /// When words were added, the configured text dictionary is rewritten
    /// like after any other mutation.
    pub fn load_text_from<P: AsRef<Path>>(&mut self, path: P) -> PersistenceResult<TextImport> {
        let import = self.import_text(path.as_ref())?;
        if import.inserted > 0 {
            self.autosave("import");
        }
        Ok(import)
    }

    fn import_text(&mut self, path: &Path) -> PersistenceResult<TextImport> {
        let import = persistence::load_text(path, &mut self.trie)?;
        info!(
            path = %path.display(),
            inserted = import.inserted,
            skipped = import.skipped,
            "Imported text dictionary"
        );
        Ok(import)
    }

    /// Writes every word, sorted, to `text_path`. Returns the number written.
    pub fn save_text(&self) -> PersistenceResult<usize> {
        self.save_text_to(&self.config.text_path)
    }

    /// Writes every word, sorted, to `path`. Returns the number written.
    pub fn save_text_to<P: AsRef<Path>>(&self, path: P) -> PersistenceResult<usize> {
        let path = path.as_ref();
        let written = persistence::save_text(path, &self.trie)?;
        info!(path = %path.display(), words = written, "Exported text dictionary");
        Ok(written)
    }

    /// Ends the session, writing the binary snapshot.
    pub fn close(self) -> PersistenceResult<()> {
        self.save_binary()
    }

    fn autosave(&self, operation: &str) {
        if !self.config.autosave_text {
            return;
        }
        if let Err(e) = persistence::save_text(&self.config.text_path, &self.trie) {
            warn!(operation, error = %e, "Failed to persist text dictionary");
            report_error(
                ErrorContext::new(e.into(), "dictionary")
                    .with_details(format!("autosave after {operation}")),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_in(dir: &Path) -> DictionaryConfig {
        DictionaryConfig {
            text_path: dir.join("words.txt"),
            binary_path: dir.join("words.txt.bin"),
            ..DictionaryConfig::default()
        }
    }

    #[test]
    fn test_open_empty() {
        let dir = tempfile::tempdir().unwrap();
        let dictionary = Dictionary::open(config_in(dir.path())).unwrap();
        assert_eq!(dictionary.source(), LoadSource::Empty);
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_open_prefers_binary() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.text_path, "from\ntext\n").unwrap();

        let mut dictionary = Dictionary::new(config.clone());
        dictionary.insert("binary");
        dictionary.save_binary().unwrap();

        let reopened = Dictionary::open(config).unwrap();
        assert_eq!(reopened.source(), LoadSource::Binary);
        assert_eq!(reopened.frequency("binary"), Some(1));
        assert_eq!(reopened.frequency("text"), None);
    }

    #[test]
    fn test_open_falls_back_to_text() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.text_path, "Alpha\nbeta\nalpha\n").unwrap();

        let dictionary = Dictionary::open(config).unwrap();
        assert!(matches!(dictionary.source(), LoadSource::Text(import) if import.inserted == 3));
        assert_eq!(dictionary.frequency("alpha"), Some(2));
    }

    #[test]
    fn test_open_rejects_corrupt_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.binary_path, [1u8, 2, 3]).unwrap();

        let err = Dictionary::open(config).unwrap_err();
        assert!(err.to_string().contains("Malformed trie data"));
    }

    #[test]
    fn test_search_counts_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = Dictionary::new(config_in(dir.path()));
        dictionary.insert("word");

        assert_eq!(dictionary.search("WORD"), Some(2));
        assert_eq!(dictionary.search("missing"), None);
        assert_eq!(dictionary.frequency("word"), Some(2));
    }

    #[test]
    fn test_search_without_counting() {
        let dir = tempfile::tempdir().unwrap();
        let config = DictionaryConfig {
            count_searches: false,
            ..config_in(dir.path())
        };
        let mut dictionary = Dictionary::new(config);
        dictionary.insert("word");

        assert_eq!(dictionary.search("word"), Some(1));
        assert_eq!(dictionary.search("word"), Some(1));
    }

    #[test]
    fn test_autosave_rewrites_text() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut dictionary = Dictionary::new(config.clone());

        dictionary.insert("pear");
        dictionary.insert("apple");
        assert_eq!(
            std::fs::read_to_string(&config.text_path).unwrap(),
            "apple\npear\n"
        );

        dictionary.delete("pear");
        assert_eq!(std::fs::read_to_string(&config.text_path).unwrap(), "apple\n");
    }

    #[test]
    fn test_import_rewrites_text_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let extra = dir.path().join("extra.txt");
        std::fs::write(&extra, "Kiwi\nbanana\n").unwrap();

        let mut dictionary = Dictionary::new(config.clone());
        dictionary.insert("apple");
        let import = dictionary.load_text_from(&extra).unwrap();

        assert_eq!(import.inserted, 2);
        assert_eq!(
            std::fs::read_to_string(&config.text_path).unwrap(),
            "apple\nbanana\nkiwi\n"
        );
    }

    #[test]
    fn test_reloading_text_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        std::fs::write(&config.text_path, "Zebra\nant\n").unwrap();

        let mut dictionary = Dictionary::new(config.clone());
        dictionary.load_text().unwrap();
        assert_eq!(
            std::fs::read_to_string(&config.text_path).unwrap(),
            "Zebra\nant\n"
        );
    }

    #[test]
    fn test_autosave_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let config = DictionaryConfig {
            autosave_text: false,
            ..config_in(dir.path())
        };
        let mut dictionary = Dictionary::new(config.clone());
        dictionary.insert("pear");
        assert!(!config.text_path.exists());
    }

    #[test]
    fn test_load_binary_keeps_contents_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut dictionary = Dictionary::new(config_in(dir.path()));
        dictionary.insert("keep");

        assert!(dictionary.load_binary().unwrap_err().is_file_absent());
        assert_eq!(dictionary.frequency("keep"), Some(1));
    }

    #[test]
    fn test_close_writes_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        let mut dictionary = Dictionary::new(config.clone());
        dictionary.insert("persist");
        dictionary.insert("persist");
        dictionary.close().unwrap();

        let reopened = Dictionary::open(config).unwrap();
        assert_eq!(reopened.frequency("persist"), Some(2));
    }
}
