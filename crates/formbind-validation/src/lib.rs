//! formbind validation predicates
//!
//! Small, dependency-light check functions used by the formbind rule
//! evaluator. Each `validate_*` function returns `Result<(), String>` with a
//! message suitable for showing next to an input; `is_*` helpers answer the
//! bare yes/no question.

pub mod email;
pub mod numeric;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use string::*;
