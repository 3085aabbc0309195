use crate::CompareMode;
use serde::{Deserialize, Serialize};

/// Default minimum run of matching lines that counts as a resync point.
pub const DEFAULT_RESYNC_LINES: u32 = 2;

/// Default internal line-buffer hint. Reserved; the engine may ignore it.
pub const DEFAULT_BUFFER_LINES: u32 = 100;

/// Configuration for one comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareConfig {
    /// Text, binary, or auto-detection mode.
    pub mode: CompareMode,
    /// Case-insensitive line matching (full Unicode mapping in `TextUnicode`).
    pub ignore_case: bool,
    /// Drop spaces and tabs before matching; whitespace-only lines vanish.
    pub ignore_whitespace: bool,
    /// Informational flag for the callback's consumer; the engine ignores it.
    pub show_line_numbers: bool,
    /// Keep raw tab bytes instead of expanding each to four spaces.
    pub raw_tabs: bool,
    /// Minimum consecutive matching lines that form a stable anchor.
    pub resync_lines: u32,
    /// Reserved sizing hint, kept for configuration compatibility.
    pub buffer_lines: u32,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            mode: CompareMode::Auto,
            ignore_case: false,
            ignore_whitespace: false,
            show_line_numbers: false,
            raw_tabs: false,
            resync_lines: DEFAULT_RESYNC_LINES,
            buffer_lines: DEFAULT_BUFFER_LINES,
        }
    }
}

impl CompareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// ASCII text comparison with defaults.
    pub fn text_ascii() -> Self {
        Self {
            mode: CompareMode::TextAscii,
            ..Default::default()
        }
    }

    /// Unicode text comparison with defaults.
    pub fn text_unicode() -> Self {
        Self {
            mode: CompareMode::TextUnicode,
            ..Default::default()
        }
    }

    /// Byte-for-byte binary comparison.
    pub fn binary() -> Self {
        Self {
            mode: CompareMode::Binary,
            ..Default::default()
        }
    }

    /// The resync threshold with the zero case collapsed onto 1.
    pub fn effective_resync_lines(&self) -> u32 {
        self.resync_lines.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CompareConfig::default();
        assert_eq!(config.mode, CompareMode::Auto);
        assert_eq!(config.resync_lines, 2);
        assert_eq!(config.buffer_lines, 100);
        assert!(!config.ignore_case);
        assert!(!config.ignore_whitespace);
        assert!(!config.raw_tabs);
    }

    #[test]
    fn named_constructors_set_mode() {
        assert_eq!(CompareConfig::text_ascii().mode, CompareMode::TextAscii);
        assert_eq!(CompareConfig::text_unicode().mode, CompareMode::TextUnicode);
        assert_eq!(CompareConfig::binary().mode, CompareMode::Binary);
    }

    #[test]
    fn zero_resync_behaves_as_one() {
        let config = CompareConfig {
            resync_lines: 0,
            ..Default::default()
        };
        assert_eq!(config.effective_resync_lines(), 1);
        let config = CompareConfig {
            resync_lines: 5,
            ..Default::default()
        };
        assert_eq!(config.effective_resync_lines(), 5);
    }
}
