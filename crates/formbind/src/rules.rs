// File: src/rules.rs
// Purpose: Declarative validation rule sets bound to a field at registration

use crate::value::Value;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;

/// Arbitrary predicate applied as the `custom` rule
pub type CustomRule = Rc<dyn Fn(&Value) -> bool>;

/// Optional, independently-applicable constraints on one field.
///
/// Every member is optional; an absent member means the constraint is not
/// applied, never that it fails. All present constraints must hold for the
/// field to be valid.
///
/// The compiled pattern and the custom predicate have no wire form and are
/// skipped during (de)serialization.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Value must be non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    /// Minimum magnitude for numbers, minimum length for strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    /// Maximum magnitude for numbers, maximum length for strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Value must have the shape of an email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,

    /// Value must be a whole number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integer: Option<bool>,

    /// Value must match a custom pattern
    #[serde(skip)]
    pub regex: Option<Regex>,

    /// Value must pass an arbitrary predicate
    #[serde(skip)]
    pub custom: Option<CustomRule>,
}

impl ValidationRules {
    /// Empty rule set: every value passes
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a non-empty value
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Set the minimum magnitude/length
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum magnitude/length
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Require email shape
    pub fn email(mut self) -> Self {
        self.email = Some(true);
        self
    }

    /// Require a whole number
    pub fn integer(mut self) -> Self {
        self.integer = Some(true);
        self
    }

    /// Require a pattern match
    pub fn regex(mut self, pattern: Regex) -> Self {
        self.regex = Some(pattern);
        self
    }

    /// Attach an arbitrary predicate
    pub fn custom(mut self, predicate: impl Fn(&Value) -> bool + 'static) -> Self {
        self.custom = Some(Rc::new(predicate));
        self
    }

    /// Whether the `required` constraint is present and enabled
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

impl fmt::Debug for ValidationRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRules")
            .field("required", &self.required)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("email", &self.email)
            .field("integer", &self.integer)
            .field("regex", &self.regex.as_ref().map(|r| r.as_str()))
            .field("custom", &self.custom.as_ref().map(|_| "<predicate>"))
            .finish()
    }
}
