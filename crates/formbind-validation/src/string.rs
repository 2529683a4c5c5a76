//! String validation functions

use regex::Regex;

/// Validates minimum string length (in characters, not bytes)
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Validates maximum string length (in characters, not bytes)
pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Validates a string against a compiled pattern
pub fn validate_pattern(s: &str, pattern: &Regex) -> Result<(), String> {
    if pattern.is_match(s) {
        Ok(())
    } else {
        Err(format!("Must match the pattern {}", pattern.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        assert!(validate_min_length("hello", 3).is_ok());
        assert!(validate_min_length("abc", 3).is_ok());
        assert!(validate_min_length("ab", 3).is_err());
        assert!(validate_min_length("", 1).is_err());
    }

    #[test]
    fn test_max_length() {
        assert!(validate_max_length("hi", 5).is_ok());
        assert!(validate_max_length("exact", 5).is_ok());
        assert!(validate_max_length("toolong", 5).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // four characters, more than four bytes
        assert!(validate_max_length("héllo", 5).is_ok());
        assert!(validate_min_length("日本語", 3).is_ok());
    }

    #[test]
    fn test_pattern_match() {
        let zip = Regex::new(r"^\d{5}$").unwrap();
        assert!(validate_pattern("12345", &zip).is_ok());

        let err = validate_pattern("1234a", &zip).unwrap_err();
        assert!(err.contains(r"^\d{5}$"));
    }
}
