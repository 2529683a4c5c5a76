//! Email format validation

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Checks that a string has the shape of an email address.
///
/// Pattern match plus the structural checks the pattern cannot express:
/// local part at most 64 characters, domain at most 255, no consecutive
/// dots, domain does not start or end with a dot or hyphen.
pub fn is_valid_email(email: &str) -> bool {
    if !EMAIL_REGEX.is_match(email) {
        return false;
    }

    // Exactly one '@' is guaranteed by the pattern's character classes
    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };

    if local.len() > 64 || domain.len() > 255 {
        return false;
    }

    if email.contains("..") {
        return false;
    }

    !(domain.starts_with('.')
        || domain.ends_with('.')
        || domain.starts_with('-')
        || domain.ends_with('-'))
}

/// Validates email format with a user-facing message
pub fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err("Must be a valid email address".to_string())
    }
}
