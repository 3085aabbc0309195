//! Top-level comparison engine: mode dispatch and the text pipeline.

use crate::{binary, emitter, lcs, lines, reader, resync, sniffer};
use fcheck_common::{
    CompareConfig, CompareMode, CompareOutcome, DiffBlock, DiffContext, Result,
};
use std::path::Path;
use tracing::{debug, info};

/// Compares two files according to its configuration, reporting every
/// difference through a caller-supplied sink.
pub struct CompareEngine {
    config: CompareConfig,
}

impl CompareEngine {
    pub fn new() -> Self {
        Self {
            config: CompareConfig::default(),
        }
    }

    pub fn with_config(config: CompareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Compare two files.
    ///
    /// The sink is invoked once per difference, in increasing position
    /// order. It must not retain the borrowed context or block past each
    /// call, and must not start another comparison on this engine from
    /// inside the callback. Returns `Identical` or `Different` on a
    /// completed comparison;
    /// IO, parameter, and memory failures propagate as errors without any
    /// partial results having been delivered beyond blocks already emitted.
    pub fn compare<F>(&self, path_a: &Path, path_b: &Path, mut sink: F) -> Result<CompareOutcome>
    where
        F: FnMut(&DiffContext<'_>, &DiffBlock),
    {
        info!(
            "Comparing {} and {} ({:?})",
            path_a.display(),
            path_b.display(),
            self.config.mode
        );

        match self.config.mode {
            CompareMode::TextAscii | CompareMode::TextUnicode => {
                self.compare_text(path_a, path_b, &mut sink)
            }
            CompareMode::Binary => binary::compare_binary(path_a, path_b, &mut sink),
            CompareMode::Auto => {
                let text_a = sniffer::sniff_file(path_a)?;
                let text_b = sniffer::sniff_file(path_b)?;
                debug!("Sniffed text={} / text={}", text_a, text_b);
                if text_a && text_b {
                    self.compare_text(path_a, path_b, &mut sink)
                } else {
                    binary::compare_binary(path_a, path_b, &mut sink)
                }
            }
        }
    }

    fn compare_text<F>(
        &self,
        path_a: &Path,
        path_b: &Path,
        sink: &mut F,
    ) -> Result<CompareOutcome>
    where
        F: FnMut(&DiffContext<'_>, &DiffBlock),
    {
        let buffer_a = reader::slurp(path_a)?;
        let buffer_b = reader::slurp(path_b)?;

        let lines_a = lines::parse_lines(&buffer_a, &self.config);
        let lines_b = lines::parse_lines(&buffer_b, &self.config);
        debug!("Parsed {} / {} lines", lines_a.len(), lines_b.len());

        if lines_a.is_empty() && lines_b.is_empty() {
            return Ok(CompareOutcome::Identical);
        }

        let (lcs_a, lcs_b) = lcs::find_lcs(&lines_a, &lines_b);

        // Full coverage is decided before the resync filter runs, so
        // identical files stay identical under every threshold.
        if lcs_a.len() == lines_a.len() && lcs_a.len() == lines_b.len() {
            return Ok(CompareOutcome::Identical);
        }

        let (filtered_a, filtered_b) = resync::filter_anchors(
            &lcs_a,
            &lcs_b,
            self.config.effective_resync_lines(),
        );

        let context = DiffContext {
            path_a,
            path_b,
            lines_a: Some(&lines_a),
            lines_b: Some(&lines_b),
        };

        Ok(emitter::emit_blocks(
            &context,
            &filtered_a,
            &filtered_b,
            lines_a.len(),
            lines_b.len(),
            sink,
        ))
    }
}

impl Default for CompareEngine {
    fn default() -> Self {
        Self::new()
    }
}
