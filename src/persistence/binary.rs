// Copyright (c) 2025 Olelo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Binary trie codec.
//!
//! Each node is written in pre-order as three little-endian `u32`s:
//!
//! ```text
//! is_terminal (0 or 1) | frequency | child_count
//! ```
//!
//! followed by `child_count` repetitions of an edge code point (`u32`) and
//! the encoded child subtree. The stream holds exactly one root node.

use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::{create_target, open_existing};
use crate::data_structures::{TrieNode, WordTrie, WordTrieConfig};
use crate::error::persistence::{PersistenceError, PersistenceResult};

/// Writes `trie` to `writer` in the binary format.
///
/// Traversal uses an explicit stack, so deep tries do not grow the call stack.
/// The same holds for [`decode`].
pub fn encode<W: Write>(trie: &WordTrie, writer: &mut W) -> io::Result<()> {
    let mut stack: Vec<(Option<char>, &TrieNode)> = vec![(None, trie.root())];

    while let Some((edge, node)) = stack.pop() {
        if let Some(c) = edge {
            writer.write_u32::<LittleEndian>(u32::from(c))?;
        }
        writer.write_u32::<LittleEndian>(u32::from(node.is_terminal()))?;
        writer.write_u32::<LittleEndian>(node.frequency())?;

        let count = u32::try_from(node.child_count())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "too many children"))?;
        writer.write_u32::<LittleEndian>(count)?;

        // Reversed so children are emitted in iteration order
        let children: Vec<_> = node.children().map(|(c, child)| (Some(c), child)).collect();
        stack.extend(children.into_iter().rev());
    }

    Ok(())
}

/// Reads a trie from `reader`.
///
/// Nodes are assembled on an explicit frame stack, one frame per level of
/// the path currently being read.
///
/// # Returns
///
/// * `Ok(WordTrie)` - the decoded trie, using `config`.
/// * `Err(PersistenceError::Decode)` - the stream is truncated, carries an
///   invalid code point, a duplicate edge, a frequency that disagrees with the
///   terminal flag, a dead leaf, nesting deeper than `config.max_word_len`, or
///   bytes after the root node.
pub fn decode<R: Read>(reader: R, config: WordTrieConfig) -> PersistenceResult<WordTrie> {
    let mut decoder = Decoder {
        reader,
        offset: 0,
        max_depth: config.max_word_len,
    };

    let root = decoder.read_tree()?;
    if root.is_terminal() {
        return Err(decoder.malformed("root node cannot hold a word"));
    }
    decoder.expect_end()?;

    Ok(WordTrie::from_root(root, config))
}

struct Decoder<R> {
    reader: R,
    offset: u64,
    max_depth: usize,
}

/// A node whose children are still being read.
struct Frame {
    node: TrieNode,
    /// Edge from the parent frame; `None` for the root
    edge: Option<char>,
    remaining: u32,
}

impl<R: Read> Decoder<R> {
    fn malformed<S: Into<String>>(&self, reason: S) -> PersistenceError {
        PersistenceError::Decode {
            offset: self.offset,
            reason: reason.into(),
        }
    }

    fn read_u32(&mut self) -> PersistenceResult<u32> {
        match self.reader.read_u32::<LittleEndian>() {
            Ok(value) => {
                self.offset += 4;
                Ok(value)
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(self.malformed("unexpected end of stream"))
            }
            Err(e) => Err(self.malformed(format!("read failed: {e}"))),
        }
    }

    /// Reads one node header and opens a frame for its children.
    fn read_frame(&mut self, edge: Option<char>) -> PersistenceResult<Frame> {
        let is_terminal = match self.read_u32()? {
            0 => false,
            1 => true,
            other => return Err(self.malformed(format!("invalid terminal flag {other}"))),
        };
        let frequency = self.read_u32()?;
        if !is_terminal && frequency != 0 {
            return Err(self.malformed("frequency on a node that holds no word"));
        }
        if is_terminal && frequency == 0 {
            return Err(self.malformed("word with zero frequency"));
        }
        let remaining = self.read_u32()?;

        let mut node = TrieNode::new();
        node.is_terminal = is_terminal;
        node.frequency = frequency;
        Ok(Frame {
            node,
            edge,
            remaining,
        })
    }

    fn read_tree(&mut self) -> PersistenceResult<TrieNode> {
        let mut stack = vec![self.read_frame(None)?];

        loop {
            let child_depth = stack.len();
            let Some(top) = stack.last_mut() else {
                return Err(self.malformed("empty frame stack"));
            };

            if top.remaining > 0 {
                top.remaining -= 1;
                let code = self.read_u32()?;
                let c = char::from_u32(code)
                    .ok_or_else(|| self.malformed(format!("invalid code point {code:#x}")))?;
                if child_depth > self.max_depth {
                    return Err(self.malformed(format!(
                        "nesting exceeds maximum word length of {}",
                        self.max_depth
                    )));
                }
                let child = self.read_frame(Some(c))?;
                stack.push(child);
                continue;
            }

            let Some(done) = stack.pop() else {
                return Err(self.malformed("empty frame stack"));
            };
            let Some(edge) = done.edge else {
                return Ok(done.node);
            };
            if done.node.is_prunable() {
                return Err(self.malformed("leaf node holds no word"));
            }
            let Some(parent) = stack.last_mut() else {
                return Err(self.malformed("child without a parent"));
            };
            if parent.node.children.insert(edge, done.node).is_some() {
                return Err(self.malformed(format!("duplicate edge {edge:?}")));
            }
        }
    }

    fn expect_end(&mut self) -> PersistenceResult<()> {
        let mut extra = [0u8; 1];
        match self.reader.read(&mut extra) {
            Ok(0) => Ok(()),
            Ok(_) => Err(self.malformed("trailing data after root node")),
            Err(e) => Err(self.malformed(format!("read failed: {e}"))),
        }
    }
}

/// Saves `trie` to `path`, overwriting any existing file.
pub fn save_binary<P: AsRef<Path>>(path: P, trie: &WordTrie) -> PersistenceResult<()> {
    let path = path.as_ref();
    let encode_error = |source| PersistenceError::Encode {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(create_target(path)?);
    encode(trie, &mut writer).map_err(encode_error)?;
    writer.flush().map_err(encode_error)?;

    tracing::debug!(path = %path.display(), nodes = trie.node_count(), "Saved binary trie");
    Ok(())
}

/// Loads a trie from `path`.
///
/// A missing file yields [`PersistenceError::FileAbsent`].
pub fn load_binary<P: AsRef<Path>>(path: P, config: WordTrieConfig) -> PersistenceResult<WordTrie> {
    let path = path.as_ref();
    let reader = BufReader::new(open_existing(path)?);
    let trie = decode(reader, config)?;

    tracing::debug!(path = %path.display(), nodes = trie.node_count(), "Loaded binary trie");
    Ok(trie)
}
