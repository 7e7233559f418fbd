use super::*;

#[test]
fn test_lowercases_letters() {
    assert_eq!(normalize_segment("WebServer"), "webserver");
    assert_eq!(normalize_segment("already-lower"), "already-lower");
}

#[test]
fn test_replaces_dots_and_underscores() {
    assert_eq!(normalize_segment("user.auth_service"), "user-auth-service");
}

#[test]
fn test_preserves_run_length() {
    assert_eq!(normalize_segment("a..b"), "a--b");
    assert_eq!(normalize_segment("a._b"), "a--b");
    assert_eq!(normalize_segment("a___b"), "a---b");
}

#[test]
fn test_keeps_length() {
    for segment in ["", "x", "Mixed.Case_Name", "..__..", "svc-01"] {
        assert_eq!(normalize_segment(segment).len(), segment.len());
    }
}

#[test]
fn test_leaves_other_characters_alone() {
    // Validation rejects these later; normalization only handles '.' and '_'.
    assert_eq!(normalize_segment("a/b c"), "a/b c");
}
