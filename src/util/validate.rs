//! Field-level input validation predicates.
//!
//! Pure functions with no failure modes: a rejected input is a normal
//! `false`, never an error. These gate form submission locally, so they
//! stay deliberately permissive: a false negative would lock a real
//! user out of the form.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimal email shape check: non-space `@` non-space `.` non-space,
/// found anywhere in the string (the search is unanchored, like the
/// `/\S+@\S+\.\S+/` test it replaces).
pub fn is_valid_email(email: &str) -> bool {
    let chars: Vec<char> = email.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '@' {
            continue;
        }
        if i == 0 || chars[i - 1].is_whitespace() {
            continue;
        }
        // After the '@': at least one non-space char, a dot, then at
        // least one more non-space char.
        let mut j = i + 1;
        while j < chars.len() && !chars[j].is_whitespace() {
            if chars[j] == '.' && j > i + 1 && j + 1 < chars.len() && !chars[j + 1].is_whitespace()
            {
                return true;
            }
            j += 1;
        }
    }
    false
}

/// Exact, case- and whitespace-sensitive equality of the two password
/// fields.
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}
