//! Resource name validation.
//!
//! Provides a branded type for names that satisfy RFC 1035, the rule set
//! cloud providers apply to most resource identifiers.
//! See <https://cloud.google.com/compute/docs/naming-resources>.

use crate::errors::{InvalidNameError, InvalidNameReason};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

#[cfg(test)]
#[path = "resource_name_tests.rs"]
mod tests;

/// Maximum length of an RFC 1035 label.
pub const MAX_RESOURCE_NAME_LENGTH: usize = 63;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-z]([-a-z0-9]*[a-z0-9])?$").expect("valid name pattern"));

/// A validated resource name.
///
/// Resource names must:
/// - Be 1-63 characters long
/// - Start with a lowercase letter
/// - Contain only lowercase letters, digits, and hyphens
/// - End with a letter or digit
///
/// Consecutive hyphens are allowed.
///
/// # Examples
///
/// ```
/// use resource_namer::ResourceName;
///
/// let name = ResourceName::try_new("fullstack-cache-instance").unwrap();
/// assert_eq!(name.as_str(), "fullstack-cache-instance");
///
/// assert!(ResourceName::try_new("").is_err());
/// assert!(ResourceName::try_new("Uppercase").is_err());
/// assert!(ResourceName::try_new("-starts-with-hyphen").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName(String);

impl ResourceName {
    /// Create a new ResourceName from a string.
    ///
    /// # Errors
    ///
    /// Returns `InvalidNameError` carrying the first rule the name breaks:
    /// character rules are reported before boundary rules, and boundary
    /// rules before the length limit.
    pub fn try_new(name: impl Into<String>) -> Result<Self, InvalidNameError> {
        let name = name.into();

        if !NAME_PATTERN.is_match(&name) {
            let reason = diagnose(&name);
            return Err(InvalidNameError::new(name, reason));
        }

        if name.len() > MAX_RESOURCE_NAME_LENGTH {
            let reason = InvalidNameReason::TooLong {
                length: name.len(),
                limit: MAX_RESOURCE_NAME_LENGTH,
            };
            return Err(InvalidNameError::new(name, reason));
        }

        Ok(Self(name))
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Returns true when `name` is a valid RFC 1035 resource name.
///
/// ```
/// use resource_namer::is_valid_name;
///
/// assert!(is_valid_name("app-user-auth-service-instance"));
/// assert!(!is_valid_name("9invalid"));
/// ```
pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name) && name.len() <= MAX_RESOURCE_NAME_LENGTH
}

// Only called once the pattern has failed, so a name made of allowed
// characters that starts with a letter must end with a hyphen.
fn diagnose(name: &str) -> InvalidNameReason {
    let Some(first) = name.chars().next() else {
        return InvalidNameReason::Empty;
    };

    if name.chars().any(|c| c.is_ascii_uppercase()) {
        return InvalidNameReason::Uppercase;
    }

    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return InvalidNameReason::DisallowedCharacter(c);
    }

    match first {
        '-' => InvalidNameReason::LeadingHyphen,
        '0'..='9' => InvalidNameReason::LeadingDigit,
        _ => InvalidNameReason::TrailingHyphen,
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ResourceName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for ResourceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceName {
    type Error = InvalidNameError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::try_new(name)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> String {
        name.0
    }
}
