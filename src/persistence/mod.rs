// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Persistence codecs for the word trie.
//!
//! Two independent formats share the same in-memory model:
//!
//! - **Binary**: a pre-order dump of the trie that restores frequencies and
//!   structure exactly. See [`binary`] for the layout.
//! - **Text**: one word per line, UTF-8, sorted on export. Frequencies are
//!   not stored; re-importing counts each line as one occurrence.
//!
//! Loaders report a missing file as [`PersistenceError::FileAbsent`] so the
//! caller can fall back to another source. Savers never modify the trie.
//!
//! [`PersistenceError::FileAbsent`]: crate::error::PersistenceError::FileAbsent

pub mod binary;
pub mod text;

use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::persistence::{PersistenceError, PersistenceResult};

pub use binary::{decode, encode, load_binary, save_binary};
pub use text::{export_text, import_text, load_text, save_text, TextImport};

/// Opens `path` for reading, mapping a missing file to `FileAbsent`.
fn open_existing(path: &Path) -> PersistenceResult<File> {
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => PersistenceError::FileAbsent(path.to_path_buf()),
        _ => PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Creates or truncates `path` for writing.
fn create_target(path: &Path) -> PersistenceResult<File> {
    File::create(path).map_err(|source| PersistenceError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
