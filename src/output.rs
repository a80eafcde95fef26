//! CLI output formatting.
//!
//! Each message has a `format_*` function (pure, returns strings) and the
//! callers decide where it goes: fragments and the summary to stdout,
//! warnings and per-file errors to stderr. Format functions do no I/O, so
//! every line the tool can print is unit testable.

use crate::config::WidthWarning;
use crate::pipeline::{BatchSummary, PipelineError};
use std::path::Path;

/// Header printed immediately before a file's `<picture>` fragment.
pub fn format_fragment_header(source: &Path) -> String {
    format!("HTML for file: {}", source.display())
}

/// One stderr line per skipped width token.
pub fn format_width_warnings(warnings: &[WidthWarning]) -> Vec<String> {
    warnings.iter().map(|w| w.to_string()).collect()
}

/// Per-file failure line, always carrying the file path as context.
pub fn format_file_error(source: &Path, err: &PipelineError) -> String {
    format!("{}: {}", source.display(), err)
}

/// Final batch line.
pub fn format_summary(summary: &BatchSummary) -> String {
    if summary.failed == 0 {
        format!("Generated output for {} file(s)", summary.succeeded)
    } else {
        format!(
            "Generated output for {} file(s), {} failed",
            summary.succeeded, summary.failed
        )
    }
}
