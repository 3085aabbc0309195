//! Byte-for-byte comparison of two files over read-only mappings.

use crate::reader::MappedFile;
use fcheck_common::{CompareOutcome, DiffBlock, DiffContext, Result};
use std::path::Path;
use tracing::debug;

/// Chunk width for the equality fast path. Mismatch positions reported to
/// the sink are always byte-granular.
const SCAN_CHUNK: usize = 4096;

/// Compare two files byte-for-byte.
///
/// A size mismatch short-circuits with a single size block; two empty files
/// are identical. Otherwise both files are mapped read-only and every
/// mismatching byte is reported, in increasing offset order, as a byte
/// block carrying the offset and the two differing values.
pub fn compare_binary<F>(path_a: &Path, path_b: &Path, sink: &mut F) -> Result<CompareOutcome>
where
    F: FnMut(&DiffContext<'_>, &DiffBlock),
{
    let context = DiffContext {
        path_a,
        path_b,
        lines_a: None,
        lines_b: None,
    };

    let mapped_a = MappedFile::open(path_a)?;
    let mapped_b = MappedFile::open(path_b)?;

    if mapped_a.len() != mapped_b.len() {
        debug!(
            "Size mismatch: {} bytes vs {} bytes",
            mapped_a.len(),
            mapped_b.len()
        );
        let block = DiffBlock::Size {
            size_a: mapped_a.len(),
            size_b: mapped_b.len(),
        };
        sink(&context, &block);
        return Ok(CompareOutcome::Different);
    }

    if mapped_a.is_empty() {
        return Ok(CompareOutcome::Identical);
    }

    let bytes_a = mapped_a.as_bytes();
    let bytes_b = mapped_b.as_bytes();
    let mut outcome = CompareOutcome::Identical;
    let mut offset = 0u64;

    for (chunk_a, chunk_b) in bytes_a.chunks(SCAN_CHUNK).zip(bytes_b.chunks(SCAN_CHUNK)) {
        if chunk_a != chunk_b {
            for (i, (&byte_a, &byte_b)) in chunk_a.iter().zip(chunk_b).enumerate() {
                if byte_a != byte_b {
                    outcome = CompareOutcome::Different;
                    let block = DiffBlock::Bytes {
                        offset: offset + i as u64,
                        byte_a,
                        byte_b,
                    };
                    sink(&context, &block);
                }
            }
        }
        offset += chunk_a.len() as u64;
    }

    Ok(outcome)
}
