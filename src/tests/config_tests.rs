//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, DictionaryConfig, OleloConfig, Validate};
use crate::data_structures::word_trie::MAX_WORD_LEN_LIMIT;
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::PathBuf;
use test_case::test_case;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = OleloConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary.text_path, PathBuf::from("words.txt"));
    assert_eq!(config.dictionary.binary_path, PathBuf::from("words.txt.bin"));
    assert_eq!(config.dictionary.max_word_len, 511);
}

#[test_case(|c: &mut DictionaryConfig| c.max_word_len = 0 ; "zero word length")]
#[test_case(|c: &mut DictionaryConfig| c.max_word_len = MAX_WORD_LEN_LIMIT + 1 ; "word length past limit")]
#[test_case(|c: &mut DictionaryConfig| c.suggestion_limit = 0 ; "zero suggestion limit")]
#[test_case(|c: &mut DictionaryConfig| c.text_path = PathBuf::new() ; "empty text path")]
#[test_case(|c: &mut DictionaryConfig| c.binary_path = c.text_path.clone() ; "shared path")]
fn test_dictionary_validation(mutate: fn(&mut DictionaryConfig)) {
    let mut config = OleloConfig::default();
    mutate(&mut config.dictionary);
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { section: "dictionary", .. }));
}

#[test]
fn test_malformed_file_is_a_load_error() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("olelo.toml", "[dictionary\nbroken").unwrap();
    let loader = ConfigLoader::new("OLELO_TEST_MALFORMED").with_file(&path);
    assert!(matches!(loader.load(), Err(ConfigError::Load(_))));
}

#[test]
fn test_word_length_limit_is_accepted() {
    let mut config = OleloConfig::default();
    config.dictionary.max_word_len = MAX_WORD_LEN_LIMIT;
    assert!(config.validate().is_ok());
}

#[test]
fn test_log_level_validation() {
    let mut config = OleloConfig::default();
    config.log.level = "verbose".to_string();
    let err = config.validate().unwrap_err();
    assert_eq!(err.field(), Some(("log", "level")));
    assert!(err.to_string().contains("verbose"));
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "olelo.toml",
            r#"
    [dictionary]
    text_path = "custom.txt"
    binary_path = "custom.bin"
    suggestion_limit = 5
    count_searches = false

    [log]
    level = "debug"
    "#,
        )
        .unwrap();

    // Load the configuration with a unique prefix
    let loader = ConfigLoader::new("OLELO_TEST_FILE").with_file(&config_path);
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.text_path, PathBuf::from("custom.txt"));
    assert_eq!(config.dictionary.binary_path, PathBuf::from("custom.bin"));
    assert_eq!(config.dictionary.suggestion_limit, 5);
    assert!(!config.dictionary.count_searches);
    assert_eq!(config.log.level, "debug");

    // Other values should be defaults
    assert_eq!(config.dictionary.max_word_len, 511);
    assert!(config.dictionary.autosave_text);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("olelo.toml", "[dictionary]\nsuggestion_limit = 5\n")
        .unwrap();

    fixture.set_env("OLELO_TEST_ENV__DICTIONARY__SUGGESTION_LIMIT", "25");
    fixture.set_env("OLELO_TEST_ENV__LOG__JSON", "true");

    let loader = ConfigLoader::new("OLELO_TEST_ENV").with_file(&config_path);
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.suggestion_limit, 25);
    assert!(config.log.json);
}

#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let loader = ConfigLoader::new("OLELO_TEST_MISSING").with_file(fixture.path("absent.toml"));
    assert!(matches!(loader.load(), Err(ConfigError::Missing(_))));
}

#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("olelo.ini", "x = 1").unwrap();
    let loader = ConfigLoader::new("OLELO_TEST_EXT").with_file(&path);
    assert!(matches!(loader.load(), Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn test_invalid_file_values_are_rejected() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("olelo.json", r#"{ "dictionary": { "max_word_len": 0 } }"#)
        .unwrap();
    let loader = ConfigLoader::new("OLELO_TEST_INVALID").with_file(&path);
    let err = loader.load().unwrap_err();
    assert_eq!(err.field(), Some(("dictionary", "max_word_len")));
}

#[test]
fn test_generated_config_round_trips() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&OleloConfig::default()).unwrap();
    let path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new("OLELO_TEST_GEN").with_file(&path).load().unwrap();
    assert_eq!(config.dictionary, DictionaryConfig::default());
}
