//! Run configuration.
//!
//! Everything the pipeline needs is fixed once at startup into an immutable
//! [`RunConfig`] passed by reference into each component: the encoder reads
//! `quality`, the variant matrix reads `widths` and `density`, the markup
//! renderer reads `prefix`. There is no mutable global state.
//!
//! Width-list parsing is lenient by design: a bad token is an operator typo,
//! not a reason to abandon the whole batch. Each rejected token produces a
//! [`WidthWarning`] for stderr, and processing continues with the survivors.
//! An empty survivor list *is* fatal — there would be nothing to generate.

use std::fmt;

/// Immutable configuration for one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// URL prefix prepended to every path emitted in markup.
    pub prefix: String,
    /// Highest pixel-density multiplier to generate (≥ 1).
    pub density: u32,
    /// Lossy encode quality (1–100), applied identically to JPEG and WebP.
    pub quality: u8,
    /// Requested pixel widths, distinct and positive, in request order.
    pub widths: Vec<u32>,
}

/// A width token that was skipped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthWarning {
    /// Token did not parse as an integer.
    Unparseable(String),
    /// Token parsed but is zero or negative.
    NonPositive(String),
    /// Width was already requested earlier in the list.
    Duplicate(u32),
}

impl fmt::Display for WidthWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparseable(token) => {
                write!(f, "invalid, non-integer width provided: {token}, ignoring")
            }
            Self::NonPositive(token) => {
                write!(f, "width must be positive: {token}, ignoring")
            }
            Self::Duplicate(width) => write!(f, "duplicate width: {width}, ignoring"),
        }
    }
}

/// Parse a comma-separated width list into distinct positive widths.
///
/// Order of the surviving widths follows the input. Rejected tokens are
/// returned as warnings, never errors; the caller decides what an empty
/// result means.
pub fn parse_widths(input: &str) -> (Vec<u32>, Vec<WidthWarning>) {
    let mut widths: Vec<u32> = Vec::new();
    let mut warnings = Vec::new();

    for token in input.split(',') {
        let token = token.trim();
        match token.parse::<i64>() {
            Err(_) => warnings.push(WidthWarning::Unparseable(token.to_string())),
            Ok(value) if value <= 0 => {
                warnings.push(WidthWarning::NonPositive(token.to_string()));
            }
            Ok(value) if value > u32::MAX as i64 => {
                warnings.push(WidthWarning::Unparseable(token.to_string()));
            }
            Ok(value) => {
                let width = value as u32;
                if widths.contains(&width) {
                    warnings.push(WidthWarning::Duplicate(width));
                } else {
                    widths.push(width);
                }
            }
        }
    }

    (widths, warnings)
}
