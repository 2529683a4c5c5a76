// File: src/value.rs
// Purpose: Field value type and the shared mutable cell inputs bind to

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Supported field value shapes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
    Null,
}

impl Value {
    /// An empty value fails a `required` rule: Null, the empty string,
    /// and empty collections all count as absent.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(arr) => arr.is_empty(),
            Value::Object(obj) => obj.is_empty(),
            Value::Bool(_) | Value::Number(_) => false,
        }
    }

    /// Numeric view, for magnitude rules
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// String view, for length, email, and pattern rules
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Render the value for display next to an input
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => {
                // Format whole numbers without the trailing .0
                if n.is_finite() && n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Value::String(s) => s.clone(),
            Value::Array(arr) => {
                let items: Vec<String> = arr.iter().map(|v| v.to_display_string()).collect();
                format!("[{}]", items.join(", "))
            }
            Value::Object(_) => "[Object]".to_string(),
            Value::Null => String::new(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(obj: HashMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}

/// Shared mutable cell holding one field's current value.
///
/// Stand-in for the host framework's reactive ref: the input component and
/// its field state both hold a clone of the cell and see each other's
/// writes. Single-threaded by design, matching the UI event model.
#[derive(Debug, Clone, Default)]
pub struct ValueCell {
    inner: Rc<RefCell<Value>>,
}

impl ValueCell {
    /// Create a cell seeded with a value
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value.into())),
        }
    }

    /// Create a cell holding no value yet
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read the current value out of the cell
    pub fn get(&self) -> Value {
        self.inner.borrow().clone()
    }

    /// Overwrite the cell's value
    pub fn set(&self, value: impl Into<Value>) {
        *self.inner.borrow_mut() = value.into();
    }

    /// Overwrite the cell's value, returning the previous one
    pub fn replace(&self, value: impl Into<Value>) -> Value {
        self.inner.replace(value.into())
    }
}
