use super::*;

// =============================================================
// Email shape
// =============================================================

#[test]
fn rejects_strings_without_at() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("plain"));
    assert!(!is_valid_email("name.example.com"));
}

#[test]
fn accepts_minimal_shape() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("name@example.com"));
    assert!(is_valid_email("first.last@sub.example.com"));
}

#[test]
fn rejects_missing_dot_after_at() {
    assert!(!is_valid_email("a@bc"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@.c"));
}

#[test]
fn rejects_whitespace_around_separators() {
    assert!(!is_valid_email("a @b.c"));
    assert!(!is_valid_email("a@ b.c"));
    assert!(!is_valid_email("a@b. c"));
}

#[test]
fn unanchored_match_anywhere_in_string() {
    // The shape check is a search, not a full match.
    assert!(is_valid_email("contact me at a@b.c thanks"));
}

// =============================================================
// Password confirmation
// =============================================================

#[test]
fn passwords_match_exact_only() {
    assert!(passwords_match("hunter2", "hunter2"));
    assert!(!passwords_match("hunter2", "Hunter2"));
    assert!(!passwords_match("hunter2", "hunter2 "));
    assert!(!passwords_match("a", "b"));
}

#[test]
fn empty_passwords_still_match() {
    assert!(passwords_match("", ""));
}
