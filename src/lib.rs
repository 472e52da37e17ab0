//! Olelo Dictionary Engine Library
//!
//! An in-process dictionary offering prefix autocomplete, "did you mean"
//! spelling suggestions, frequency-ranked word statistics and durable
//! persistence. The library is used by the `olelo` binary but can also be
//! embedded directly.
//!
//! # Architecture
//!
//! - [`data_structures`]: the case-insensitive word trie and its traversal
//! - [`ranking`]: top-K, autocomplete and Levenshtein spelling suggestions
//! - [`persistence`]: binary snapshot codec and text dictionary import/export
//! - [`dictionary`]: a session tying the above to the configured files
//! - [`config`] and [`error`]: layered configuration and the error taxonomy
//!
//! # Example
//!
//! ```
//! use olelo_lib::config::DictionaryConfig;
//! use olelo_lib::dictionary::Dictionary;
//!
//! let config = DictionaryConfig {
//!     autosave_text: false,
//!     ..DictionaryConfig::default()
//! };
//! let mut dictionary = Dictionary::new(config);
//! dictionary.insert("hello");
//! dictionary.insert("help");
//!
//! let completions = dictionary.autocomplete("hel", 5);
//! assert_eq!(completions.len(), 2);
//!
//! let suggestions = dictionary.spell_suggest("helo", 1).unwrap();
//! assert_eq!(suggestions[0].word, "hello");
//! ```

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod dictionary;
pub mod error;
pub mod persistence;
pub mod ranking;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Olelo dictionary engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter used for non-fatal failures.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter::new()));
}
