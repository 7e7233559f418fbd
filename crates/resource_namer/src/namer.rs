//! Composition of length-bounded resource names.
//!
//! A [`NameComposer`] is built once per caller context from a base name (an
//! environment or project prefix) and turns resource names and resource types
//! into identifiers such as `fullstack-cache-instance`, shortening them when
//! they would exceed a caller-supplied budget.

use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::errors::{InvalidNameError, InvalidNameReason, NamerResult};
use crate::normalize::normalize_segment;
use crate::resource_name::ResourceName;
use crate::truncation::{join, truncate, TruncationStrategy};

#[cfg(test)]
#[path = "namer_tests.rs"]
mod tests;

/// Options controlling how a [`NameComposer`] treats its inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamerOptions {
    /// Lowercase the resource name and type and replace `.` and `_` with `-`.
    ///
    /// The base name is never normalized; callers are expected to supply a
    /// valid one.
    pub normalize: bool,
}

/// The outcome of a successful composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// The validated name.
    pub name: ResourceName,

    /// Length of the joined name before any truncation.
    pub original_length: usize,

    /// How the name was brought within budget.
    pub strategy: TruncationStrategy,
}

impl Composition {
    /// True when the joined name had to be shortened.
    pub fn was_truncated(&self) -> bool {
        self.strategy != TruncationStrategy::None
    }
}

/// Composes consistent, length-bounded resource names.
///
/// # Examples
///
/// ```
/// use resource_namer::NameComposer;
///
/// let namer = NameComposer::new("cloudflare-edge-waf");
///
/// let name = namer.compose_name("zone", "", 63)?;
/// assert_eq!(name.as_str(), "cloudflare-edge-waf-zone");
///
/// // Over budget: the base name gives up characters first.
/// let name = namer.compose_name("l7-ruleset-ddos", "managed", 30)?;
/// assert_eq!(name.as_str(), "cloudf-l7-ruleset-ddos-managed");
/// # Ok::<(), resource_namer::NamerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameComposer {
    base_name: String,
    options: NamerOptions,
}

impl NameComposer {
    /// Creates a composer with default options (no normalization).
    pub fn new(base_name: impl Into<String>) -> Self {
        Self::with_options(base_name, NamerOptions::default())
    }

    /// Creates a composer with explicit options.
    pub fn with_options(base_name: impl Into<String>, options: NamerOptions) -> Self {
        Self {
            base_name: base_name.into(),
            options,
        }
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn options(&self) -> NamerOptions {
        self.options
    }

    /// Composes `base-part` or `base-part-kind`, at most `max_length` long.
    ///
    /// An empty `kind` is omitted. See [`NameComposer::compose`] for the
    /// rules applied.
    ///
    /// # Errors
    ///
    /// Returns `NamerError::InvalidName` when the result is not a valid
    /// RFC 1035 name, is longer than 63 characters, or cannot be fitted
    /// within `max_length`. An invalid name is never returned.
    pub fn compose_name(
        &self,
        part: &str,
        kind: &str,
        max_length: usize,
    ) -> NamerResult<ResourceName> {
        self.compose(part, kind, max_length)
            .map(|composition| composition.name)
    }

    /// Composes a name and reports how it was produced.
    ///
    /// The pipeline is:
    ///
    /// 1. Normalize `part` and `kind` when [`NamerOptions::normalize`] is set.
    /// 2. Join the segments with hyphens.
    /// 3. If the joined name fits in `max_length`, use it as is.
    /// 4. Otherwise cut the base name alone when it is longer than the
    ///    surplus, or cut every segment by one shared factor when it is not.
    /// 5. Validate the result.
    ///
    /// # Errors
    ///
    /// See [`NameComposer::compose_name`].
    pub fn compose(&self, part: &str, kind: &str, max_length: usize) -> NamerResult<Composition> {
        let (part, kind) = if self.options.normalize {
            (normalize_segment(part), normalize_segment(kind))
        } else {
            (part.to_string(), kind.to_string())
        };

        let joined = join(&self.base_name, &part, &kind);
        let original_length = joined.len();

        let (name, strategy) = if original_length <= max_length {
            (joined, TruncationStrategy::None)
        } else {
            let (name, strategy) = truncate(&self.base_name, &part, &kind, max_length);
            debug!(
                base_name = %self.base_name,
                joined = %joined,
                surplus = original_length - max_length,
                truncated = %name,
                strategy = %strategy,
                "Truncated resource name"
            );
            (name, strategy)
        };

        let name = validate(name, max_length).inspect_err(|e| {
            error!(
                name = %e.name,
                reason = %e.reason,
                "Not a valid resource name"
            );
        })?;

        Ok(Composition {
            name,
            original_length,
            strategy,
        })
    }
}

fn validate(name: String, max_length: usize) -> Result<ResourceName, InvalidNameError> {
    let name = ResourceName::try_new(name)?;

    if name.len() > max_length {
        let reason = InvalidNameReason::ExceedsBudget {
            length: name.len(),
            max_length,
        };
        return Err(InvalidNameError::new(name, reason));
    }

    Ok(name)
}
