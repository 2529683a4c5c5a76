// File: src/field.rs
// Purpose: Per-field state record and the mutable handle an input owns

use crate::rules::ValidationRules;
use crate::validate;
use crate::value::{Value, ValueCell};
use std::cell::RefCell;
use std::rc::Rc;

/// State record for one registered input field.
///
/// Created once when the input mounts and registers, mutated in place as
/// the user interacts, dropped when the input unmounts. `valid` stays
/// `None` until the first validation pass.
#[derive(Debug, Clone)]
pub struct FieldState {
    /// Unique identifier within the owning form
    pub id: String,
    /// Rules bound at registration time
    pub rules: ValidationRules,
    /// Current value, mirroring the bound cell as of the last sync
    pub value: Value,
    /// None until the first validation pass
    pub valid: Option<bool>,
    /// Value has diverged from its initial value
    pub changed: bool,
    /// Field received and lost focus at least once
    pub touched: bool,
    /// Derived from `rules.required`
    pub required: bool,
    /// At least one validation pass has run
    pub validated: bool,
    /// Messages from the last validation pass
    pub errors: Vec<String>,
    /// Whether losing focus triggers validation (callers can override at
    /// registration)
    pub validate_on_blur: bool,

    initial: Value,
    cell: ValueCell,
}

impl FieldState {
    pub(crate) fn new(
        id: impl Into<String>,
        cell: &ValueCell,
        rules: ValidationRules,
        override_on_blur: bool,
    ) -> Self {
        let value = cell.get();
        let required = rules.is_required();
        Self {
            id: id.into(),
            rules,
            initial: value.clone(),
            value,
            valid: None,
            changed: false,
            touched: false,
            required,
            validated: false,
            errors: Vec::new(),
            validate_on_blur: !override_on_blur,
            cell: cell.clone(),
        }
    }

    /// The value captured at registration; `changed` compares against this
    pub fn initial(&self) -> &Value {
        &self.initial
    }
}

/// Shared mutable handle to one field's state.
///
/// The registering input component owns the handle and drives the state
/// transitions from its events: `set_value` on input, `mark_touched` on
/// blur, `validate` on explicit triggers. Clones share the same record.
#[derive(Debug, Clone)]
pub struct FieldHandle {
    inner: Rc<RefCell<FieldState>>,
}

impl FieldHandle {
    pub(crate) fn new(state: FieldState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(state)),
        }
    }

    pub fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    pub fn value(&self) -> Value {
        self.inner.borrow().value.clone()
    }

    /// Write a new value through to the bound cell and recompute `changed`
    pub fn set_value(&self, value: impl Into<Value>) {
        let value = value.into();
        let mut state = self.inner.borrow_mut();
        state.cell.set(value.clone());
        state.changed = value != state.initial;
        state.value = value;
    }

    /// Re-read the bound cell after an external write
    pub fn sync_value(&self) {
        let mut state = self.inner.borrow_mut();
        let value = state.cell.get();
        state.changed = value != state.initial;
        state.value = value;
    }

    /// Blur: marks the field touched and, unless overridden at
    /// registration, runs a validation pass
    pub fn mark_touched(&self) {
        let validate_now = {
            let mut state = self.inner.borrow_mut();
            state.touched = true;
            state.validate_on_blur
        };
        if validate_now {
            self.validate();
        }
    }

    /// Run the bound rules against the current value. Re-reads the bound
    /// cell first, so a pass always judges what the host framework last
    /// wrote. Sets `valid`, `validated`, and `errors`; returns whether the
    /// field passed.
    pub fn validate(&self) -> bool {
        let mut state = self.inner.borrow_mut();
        let value = state.cell.get();
        state.changed = value != state.initial;
        state.value = value;
        let outcome = validate::evaluate(&state.rules, &state.value);
        state.validated = true;
        match outcome {
            Ok(()) => {
                state.errors.clear();
                state.valid = Some(true);
                true
            }
            Err(errors) => {
                state.errors = errors;
                state.valid = Some(false);
                false
            }
        }
    }

    /// None until the first validation pass
    pub fn is_valid(&self) -> Option<bool> {
        self.inner.borrow().valid
    }

    pub fn is_changed(&self) -> bool {
        self.inner.borrow().changed
    }

    pub fn is_touched(&self) -> bool {
        self.inner.borrow().touched
    }

    pub fn is_required(&self) -> bool {
        self.inner.borrow().required
    }

    pub fn is_validated(&self) -> bool {
        self.inner.borrow().validated
    }

    /// Messages from the last validation pass
    pub fn errors(&self) -> Vec<String> {
        self.inner.borrow().errors.clone()
    }

    /// First message from the last validation pass, for single-message
    /// display next to the input
    pub fn first_error(&self) -> Option<String> {
        self.inner.borrow().errors.first().cloned()
    }

    /// Snapshot of the full record
    pub fn state(&self) -> FieldState {
        self.inner.borrow().clone()
    }
}
