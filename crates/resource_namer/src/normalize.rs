//! Segment normalization.

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;

/// Normalizes a resource name or resource type segment.
///
/// Letters are lowercased and every `.` or `_` becomes a `-`. Substitution is
/// one for one, so `a..b` becomes `a--b`: runs keep their length and the
/// segment's length never changes.
///
/// ```
/// use resource_namer::normalize_segment;
///
/// assert_eq!(normalize_segment("User.Auth_Service"), "user-auth-service");
/// assert_eq!(normalize_segment("a__b"), "a--b");
/// ```
pub fn normalize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| match c {
            '.' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
