//! Parsing a raw byte buffer into normalized, hashed lines.
//!
//! A line is a maximal run of bytes containing neither LF nor CR. After a
//! line is produced, a single run of any mix of LF and CR bytes is skipped,
//! so `\r\n` (and any longer terminator run) produces exactly one line
//! break. A trailing terminator does not produce an extra empty line; an
//! unterminated trailing non-empty line does produce one.

use crate::hash::line_hash;
use fcheck_common::{CompareConfig, Line};

fn is_line_terminator(byte: u8) -> bool {
    byte == b'\n' || byte == b'\r'
}

/// Normalize one raw line according to the configuration.
///
/// Tab expansion runs first (each tab becomes four literal spaces), then
/// whitespace elision removes every space and tab that remains.
fn normalize(raw: &[u8], config: &CompareConfig) -> Vec<u8> {
    let mut text = Vec::with_capacity(raw.len());
    for &byte in raw {
        match byte {
            b'\t' if !config.raw_tabs => {
                if !config.ignore_whitespace {
                    text.extend_from_slice(b"    ");
                }
            }
            b' ' | b'\t' if config.ignore_whitespace => {}
            _ => text.push(byte),
        }
    }
    text
}

/// Parse a buffer into the sequence of normalized lines it contains.
///
/// When whitespace is ignored, lines whose normalized text comes out empty
/// are dropped from the sequence entirely.
pub fn parse_lines(buffer: &[u8], config: &CompareConfig) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut pos = 0;

    while pos < buffer.len() {
        let start = pos;
        while pos < buffer.len() && !is_line_terminator(buffer[pos]) {
            pos += 1;
        }

        let text = normalize(&buffer[start..pos], config);
        if !(config.ignore_whitespace && text.is_empty()) {
            let hash = line_hash(&text, config);
            lines.push(Line::new(text, hash));
        }

        while pos < buffer.len() && is_line_terminator(buffer[pos]) {
            pos += 1;
        }
    }

    lines
}
