// formbind - reactive form-field registration and validation
// Declarative rule sets and per-field state records for UI component trees

pub mod error;
pub mod field;
pub mod registry;
pub mod rules;
pub mod validate;
pub mod value;

// Re-export core types
pub use error::FormError;
pub use field::{FieldHandle, FieldState};
pub use registry::{register_field, FormScope};
pub use rules::{CustomRule, ValidationRules};
pub use validate::evaluate;
pub use value::{Value, ValueCell};

// Re-export the predicate crate for custom use
pub use formbind_validation as validation;
