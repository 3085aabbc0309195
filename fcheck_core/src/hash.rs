//! The 32-bit line hash used for fast equality during the diff.
//!
//! The recurrence is `h = h * 31 + byte` over the normalized bytes, with
//! wrapping arithmetic and seed 0. The filters applied while hashing mirror
//! the normalization flags, so a hash computed over already-normalized text
//! is idempotent with respect to them.

use fcheck_common::{CompareConfig, CompareMode};

#[inline]
fn to_lower_ascii(byte: u8) -> u8 {
    if byte.is_ascii_uppercase() {
        byte + (b'a' - b'A')
    } else {
        byte
    }
}

/// Hash a byte sequence, optionally folding ASCII case and skipping
/// spaces and tabs inline.
pub fn hash_bytes(bytes: &[u8], ignore_case: bool, ignore_whitespace: bool) -> u32 {
    let mut hash: u32 = 0;
    for &byte in bytes {
        if ignore_whitespace && (byte == b' ' || byte == b'\t') {
            continue;
        }
        let byte = if ignore_case { to_lower_ascii(byte) } else { byte };
        hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
    }
    hash
}

/// Hash one normalized line under the active configuration.
///
/// Case-insensitive Unicode mode lowercases the whole line with the full
/// Unicode mapping first; every other combination folds ASCII case inline.
/// Bytes that are not valid UTF-8 are decoded lossily before lowercasing,
/// which keeps the mapping deterministic for both files.
pub fn line_hash(bytes: &[u8], config: &CompareConfig) -> u32 {
    if config.ignore_case && config.mode == CompareMode::TextUnicode {
        let lowered = String::from_utf8_lossy(bytes).to_lowercase();
        return hash_bytes(lowered.as_bytes(), config.ignore_case, config.ignore_whitespace);
    }
    hash_bytes(bytes, config.ignore_case, config.ignore_whitespace)
}
