// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! UTF-8 text dictionary import and export.

use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use super::{create_target, open_existing};
use crate::data_structures::WordTrie;
use crate::error::persistence::{PersistenceError, PersistenceResult};

/// Summary of a text import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextImport {
    /// Lines inserted as words
    pub inserted: usize,

    /// Non-blank lines skipped because they were not valid UTF-8
    pub skipped: usize,
}

/// Inserts every line of `reader` into `trie` as one occurrence.
///
/// Trailing CR/LF are stripped, blank lines are ignored and lines that are not
/// valid UTF-8 are skipped. Case folding and truncation happen in the trie.
pub fn import_text<R: BufRead>(mut reader: R, trie: &mut WordTrie) -> io::Result<TextImport> {
    let mut summary = TextImport::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        while matches!(line.last(), Some(b'\n' | b'\r')) {
            line.pop();
        }
        if line.is_empty() {
            continue;
        }

        match std::str::from_utf8(&line) {
            Ok(word) => {
                if trie.insert(word) > 0 {
                    summary.inserted += 1;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Skipping line that is not valid UTF-8");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}

/// Writes every stored word to `writer`, one per line, in ascending order.
///
/// # Returns
///
/// The number of words written. An empty trie writes nothing.
pub fn export_text<W: Write>(trie: &WordTrie, writer: &mut W) -> io::Result<usize> {
    let mut words: Vec<String> = trie.collect_all().into_iter().map(|r| r.word).collect();
    words.sort_unstable();

    for word in &words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(words.len())
}

/// Imports the text dictionary at `path` into `trie`.
///
/// A missing file yields [`PersistenceError::FileAbsent`] and leaves `trie`
/// untouched.
pub fn load_text<P: AsRef<Path>>(path: P, trie: &mut WordTrie) -> PersistenceResult<TextImport> {
    let path = path.as_ref();
    let reader = BufReader::new(open_existing(path)?);
    let summary = import_text(reader, trie).map_err(|source| PersistenceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        inserted = summary.inserted,
        skipped = summary.skipped,
        "Imported text dictionary"
    );
    Ok(summary)
}

/// Exports `trie` to `path`, overwriting any existing file.
pub fn save_text<P: AsRef<Path>>(path: P, trie: &WordTrie) -> PersistenceResult<usize> {
    let path = path.as_ref();
    let encode_error = |source| PersistenceError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(create_target(path)?);
    let written = export_text(trie, &mut writer).map_err(encode_error)?;
    writer.flush().map_err(encode_error)?;

    tracing::debug!(path = %path.display(), words = written, "Exported text dictionary");
    Ok(written)
}
