//! Test modules for the Olelo dictionary engine.
//!
//! This module contains the crate-internal test suites:
//! - Configuration loading and validation
//! - Error types and the global reporter
//! - Property-based tests of the trie invariants
//! - Shared fixtures and strategies

pub mod config_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, word_strategy, TestFixture};
