//! Email shape validation.
//!
//! A candidate email is syntactically valid only when all six checks pass:
//! the overall pattern, no leading/trailing dot, no consecutive dots, exactly
//! one `@`, the local/domain length caps, and a dotted domain. Uniqueness
//! against the directory is a separate concern handled in
//! [`validation`](super::validation).

use once_cell::sync::Lazy;
use regex_lite::Regex;

/// Overall shape: a permissive local part, then `@`, then dot-separated
/// domain labels of at most 63 characters that start and end alphanumeric.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Check whether an email address is syntactically acceptable
pub fn is_valid_email(email: &str) -> bool {
    if !EMAIL_PATTERN.is_match(email) {
        return false;
    }
    if email.starts_with('.') || email.ends_with('.') {
        return false;
    }
    if email.contains("..") {
        return false;
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let (local, domain) = (parts[0], parts[1]);
    if local.len() > 64 {
        return false;
    }
    if domain.len() > 253 {
        return false;
    }
    if !domain.contains('.') {
        return false;
    }

    true
}
