use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the two files are interpreted during comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompareMode {
    /// Plain text; case folding (when requested) uses an ASCII fast path.
    TextAscii,
    /// Unicode text; case folding (when requested) uses the full Unicode mapping.
    TextUnicode,
    /// Raw byte-for-byte comparison.
    Binary,
    /// Sniff both files and pick text or binary automatically.
    #[default]
    Auto,
}

/// Outcome of a comparison that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOutcome {
    /// The files compare equal under the active configuration.
    Identical,
    /// At least one difference was reported through the callback.
    Different,
}

/// Kind of a line-level edit block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineBlockKind {
    /// Lines present in both files were replaced.
    Change,
    /// Lines exist only in file B.
    Add,
    /// Lines exist only in file A.
    Delete,
}

/// A single reported difference.
///
/// Line blocks carry 0-based, end-exclusive index ranges into the two line
/// sequences. Byte and size blocks are produced by the binary comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffBlock {
    Lines {
        kind: LineBlockKind,
        start_a: usize,
        end_a: usize,
        start_b: usize,
        end_b: usize,
    },
    Bytes {
        offset: u64,
        byte_a: u8,
        byte_b: u8,
    },
    Size {
        size_a: u64,
        size_b: u64,
    },
}

/// One normalized line of text.
///
/// The text has already had tab expansion and whitespace elision applied
/// according to the configuration the line was parsed under; the hash is a
/// function of that normalized text under the same flags. Lines with equal
/// text always have equal hashes; unequal hashes imply unequal lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    text: Vec<u8>,
    hash: u32,
}

impl Line {
    pub fn new(text: Vec<u8>, hash: u32) -> Self {
        Self { text, hash }
    }

    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn hash(&self) -> u32 {
        self.hash
    }
}

/// Context handed to the diff callback alongside each block.
///
/// For binary comparisons the line slices are `None`. Everything here is
/// borrowed; a callback that wants to keep any of it must copy before
/// returning.
#[derive(Debug, Clone, Copy)]
pub struct DiffContext<'a> {
    pub path_a: &'a Path,
    pub path_b: &'a Path,
    pub lines_a: Option<&'a [Line]>,
    pub lines_b: Option<&'a [Line]>,
}
