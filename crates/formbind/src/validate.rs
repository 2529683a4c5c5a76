// File: src/validate.rs
// Purpose: Evaluate a rule set against a field value

use crate::rules::ValidationRules;
use crate::value::Value;
use formbind_validation::{
    validate_email, validate_integer, validate_max, validate_max_length, validate_min,
    validate_min_length, validate_pattern,
};

/// Runs every present constraint against the value and collects the
/// failures. All constraints must hold (logical AND); an empty rule set
/// always passes.
///
/// `min`, `max`, `email`, `integer`, and `regex` skip absent values so an
/// optional field left blank stays valid; pair them with `required` when
/// blank must fail. A value of the wrong shape for a constraint (a bool
/// under `min`, an array under `email`) fails with an explicit message
/// rather than being coerced.
pub fn evaluate(rules: &ValidationRules, value: &Value) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let absent = value.is_empty();

    if rules.is_required() && absent {
        errors.push("This field is required".to_string());
    }

    if let Some(min) = rules.min {
        if !absent {
            let result = match (value.as_number(), value.as_str()) {
                (Some(n), _) => validate_min(n, min),
                // round fractional bounds inward so they stay conservative
                (None, Some(s)) => validate_min_length(s, min.ceil() as usize),
                (None, None) => Err("Cannot apply a minimum to this value".to_string()),
            };
            if let Err(message) = result {
                errors.push(message);
            }
        }
    }

    if let Some(max) = rules.max {
        if !absent {
            let result = match (value.as_number(), value.as_str()) {
                (Some(n), _) => validate_max(n, max),
                (None, Some(s)) => validate_max_length(s, max.floor() as usize),
                (None, None) => Err("Cannot apply a maximum to this value".to_string()),
            };
            if let Err(message) = result {
                errors.push(message);
            }
        }
    }

    if rules.email.unwrap_or(false) && !absent {
        let result = match value.as_str() {
            Some(s) => validate_email(s),
            None => Err("Must be text to validate as an email address".to_string()),
        };
        if let Err(message) = result {
            errors.push(message);
        }
    }

    if rules.integer.unwrap_or(false) && !absent {
        let result = match value {
            Value::Number(n) => validate_integer(*n),
            Value::String(s) => match s.parse::<i64>() {
                Ok(_) => Ok(()),
                Err(_) => Err("Must be a whole number".to_string()),
            },
            _ => Err("Must be a number".to_string()),
        };
        if let Err(message) = result {
            errors.push(message);
        }
    }

    if let Some(pattern) = &rules.regex {
        if !absent {
            let result = match value.as_str() {
                Some(s) => validate_pattern(s, pattern),
                None => Err("Must be text to match a pattern".to_string()),
            };
            if let Err(message) = result {
                errors.push(message);
            }
        }
    }

    if let Some(predicate) = &rules.custom {
        if !predicate(value) {
            errors.push("Failed custom validation".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
