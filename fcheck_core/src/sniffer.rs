//! Heuristic classification of file content as text or binary.

use fcheck_common::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How many bytes of a file the sniffer inspects.
pub const SNIFF_PREFIX_LEN: usize = 4096;

const TEXT_THRESHOLD: f64 = 0.90;

/// Decide whether a byte buffer likely holds text.
///
/// A UTF BOM is taken as proof of text; a NUL byte as proof of binary.
/// Otherwise the printable-ASCII ratio (including tab, LF, CR) must reach
/// 90%. Executables and compressed data fail the ratio because they are
/// rich in zeros and high bytes, while UTF-8 without a BOM passes because
/// continuation bytes are rare relative to printable ones in real text.
pub fn is_probably_text(buffer: &[u8]) -> bool {
    if buffer.is_empty() {
        return false;
    }

    // UTF-8, UTF-16 LE, UTF-16 BE byte-order marks
    if buffer.starts_with(&[0xEF, 0xBB, 0xBF])
        || buffer.starts_with(&[0xFF, 0xFE])
        || buffer.starts_with(&[0xFE, 0xFF])
    {
        return true;
    }

    let mut printable = 0usize;
    for &byte in buffer {
        if (32..=126).contains(&byte) || byte == 9 || byte == 10 || byte == 13 {
            printable += 1;
        } else if byte == 0 {
            return false;
        }
    }

    (printable as f64) / (buffer.len() as f64) >= TEXT_THRESHOLD
}

/// Read the first [`SNIFF_PREFIX_LEN`] bytes of a file and classify them.
pub fn sniff_file(path: &Path) -> Result<bool> {
    let mut file = File::open(path)?;
    let mut buffer = [0u8; SNIFF_PREFIX_LEN];
    let mut read = 0;
    // A single read is almost always enough, but short reads are legal.
    loop {
        let n = file.read(&mut buffer[read..])?;
        if n == 0 {
            break;
        }
        read += n;
        if read == buffer.len() {
            break;
        }
    }
    Ok(is_probably_text(&buffer[..read]))
}
