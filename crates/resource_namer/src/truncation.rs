//! Length-bounded truncation of composite names.
//!
//! A composite name is `base-part` or `base-part-kind`. When it is longer than
//! the caller's budget it is shrunk in one of two ways:
//!
//! 1. If the base name is longer than the surplus, only the base is cut. The
//!    base is usually a repeated environment or project prefix, so the
//!    resource-specific segments stay intact.
//! 2. Otherwise every segment is cut by one shared factor, expressed in whole
//!    hundredths and always rounded down.
//!
//! Trailing hyphens left by a cut are stripped from each segment before the
//! segments are joined again.

use serde::{Deserialize, Serialize};
use tracing::trace;

#[cfg(test)]
#[path = "truncation_tests.rs"]
mod tests;

/// How a composite name was brought within its length budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TruncationStrategy {
    /// The joined name already fit.
    None,

    /// `removed` characters were cut from the end of the base name.
    BaseAbsorbed { removed: usize },

    /// Every segment kept `factor_percent`% of its length, rounded down.
    Proportional { factor_percent: u32 },
}

impl std::fmt::Display for TruncationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TruncationStrategy::None => write!(f, "none"),
            TruncationStrategy::BaseAbsorbed { removed } => {
                write!(f, "base absorbed {} character(s)", removed)
            }
            TruncationStrategy::Proportional { factor_percent } => {
                write!(f, "proportional at {}%", factor_percent)
            }
        }
    }
}

/// Joins the segments, omitting `kind` when it is empty.
pub(crate) fn join(base: &str, part: &str, kind: &str) -> String {
    if kind.is_empty() {
        format!("{}-{}", base, part)
    } else {
        format!("{}-{}-{}", base, part, kind)
    }
}

pub(crate) fn trim_trailing_hyphens(segment: &str) -> &str {
    segment.trim_end_matches('-')
}

/// Shrinks `base-part[-kind]` to at most `max_length` characters.
///
/// The caller only invokes this once the joined name is over budget. The
/// returned name is not validated here.
pub(crate) fn truncate(
    base: &str,
    part: &str,
    kind: &str,
    max_length: usize,
) -> (String, TruncationStrategy) {
    let original_length = join(base, part, kind).len();
    let surplus = original_length.saturating_sub(max_length);

    if base.len() > surplus {
        let name = absorb_in_base(base, part, kind, surplus);
        return (name, TruncationStrategy::BaseAbsorbed { removed: surplus });
    }

    let (name, factor_percent) = proportional(base, part, kind, max_length, original_length);
    (name, TruncationStrategy::Proportional { factor_percent })
}

fn absorb_in_base(base: &str, part: &str, kind: &str, surplus: usize) -> String {
    let truncated_base = trim_trailing_hyphens(prefix(base, base.len() - surplus));
    join(truncated_base, part, kind)
}

fn proportional(
    base: &str,
    part: &str,
    kind: &str,
    max_length: usize,
    original_length: usize,
) -> (String, u32) {
    let ratio = max_length as f64 / original_length as f64;
    let initial_percent = (ratio * 100.0).floor() as u32;

    // Independent floors plus the fixed separators can overshoot a very small
    // budget by a character or two; step the factor down until it fits.
    let mut percent = initial_percent;
    loop {
        let factor = f64::from(percent) / 100.0;
        let name = join(
            shrink(base, factor),
            shrink(part, factor),
            shrink(kind, factor),
        );

        if name.len() <= max_length || percent == 0 {
            return (name, percent);
        }

        trace!(
            name = %name,
            max_length,
            factor_percent = percent,
            "Proportional truncation overshot, lowering factor"
        );
        percent -= 1;
    }
}

fn shrink(segment: &str, factor: f64) -> &str {
    let length = (segment.len() as f64 * factor).floor() as usize;
    trim_trailing_hyphens(prefix(segment, length))
}

// Longest prefix of at most `length` bytes that ends on a char boundary.
// Non-ASCII input is rejected by validation, but must not panic here.
fn prefix(segment: &str, length: usize) -> &str {
    let mut end = length.min(segment.len());
    while !segment.is_char_boundary(end) {
        end -= 1;
    }
    &segment[..end]
}
