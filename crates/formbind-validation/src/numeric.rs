//! Numeric validation functions

/// Validates minimum value for numeric types
pub fn validate_min<T: PartialOrd + std::fmt::Display>(value: T, min: T) -> Result<(), String> {
    if value >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {}", min))
    }
}

/// Validates maximum value for numeric types
pub fn validate_max<T: PartialOrd + std::fmt::Display>(value: T, max: T) -> Result<(), String> {
    if value <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {}", max))
    }
}

/// Validates that a number is whole (no fractional part)
pub fn validate_integer(value: f64) -> Result<(), String> {
    if value.is_finite() && value.fract() == 0.0 {
        Ok(())
    } else {
        Err("Must be a whole number".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_boundary() {
        assert!(validate_min(21, 18).is_ok());
        assert!(validate_min(18, 18).is_ok());
        assert!(validate_min(17, 18).is_err());

        assert!(validate_min(0.5, 0.25).is_ok());
        assert!(validate_min(-1.0, 0.0).is_err());
    }

    #[test]
    fn test_max_boundary() {
        assert!(validate_max(99, 120).is_ok());
        assert!(validate_max(120, 120).is_ok());
        assert!(validate_max(121, 120).is_err());

        assert!(validate_max(0.25, 0.5).is_ok());
        assert!(validate_max(0.75, 0.5).is_err());
    }

    #[test]
    fn test_integer_check() {
        assert!(validate_integer(42.0).is_ok());
        assert!(validate_integer(-3.0).is_ok());
        assert!(validate_integer(0.0).is_ok());
        assert!(validate_integer(3.5).is_err());
        assert!(validate_integer(f64::NAN).is_err());
        assert!(validate_integer(f64::INFINITY).is_err());
    }
}
