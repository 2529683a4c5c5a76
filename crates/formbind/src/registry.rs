// File: src/registry.rs
// Purpose: Field registration factory and the per-form registry scope

use crate::error::FormError;
use crate::field::{FieldHandle, FieldState};
use crate::rules::ValidationRules;
use crate::value::{Value, ValueCell};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Allocate a field-state record: reads the cell once to seed the initial
/// value, derives `required` from the rules, and leaves `valid` at the
/// unevaluated sentinel with `changed`/`touched`/`validated` false.
///
/// This is purely a state-record factory. It runs no validation, performs
/// no uniqueness check, and registers no teardown; every call returns an
/// independent record, even for a repeated id. Forms that want ids policed
/// register through a [`FormScope`] instead.
pub fn register_field(
    id: impl Into<String>,
    cell: &ValueCell,
    rules: ValidationRules,
    override_on_blur: bool,
) -> FieldHandle {
    FieldHandle::new(FieldState::new(id, cell, rules, override_on_blur))
}

/// Registry of the fields currently mounted under one form instance.
///
/// The form container creates the scope and passes clones down its
/// component tree; descendant inputs register themselves without the
/// intermediate layers knowing about it. Clones share the same registry.
/// Scoped to one form, never global, so two forms on the same screen can
/// reuse field ids freely.
#[derive(Debug, Clone, Default)]
pub struct FormScope {
    fields: Rc<RefCell<HashMap<String, FieldHandle>>>,
}

impl FormScope {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field under this form.
    ///
    /// Rejects the empty id and any id already live in this scope. The
    /// returned handle is the one the registering input should keep; the
    /// scope retains a clone for whole-form operations.
    pub fn register(
        &self,
        id: &str,
        cell: &ValueCell,
        rules: ValidationRules,
        override_on_blur: bool,
    ) -> Result<FieldHandle, FormError> {
        if id.is_empty() {
            return Err(FormError::EmptyFieldId);
        }

        let mut fields = self.fields.borrow_mut();
        if fields.contains_key(id) {
            return Err(FormError::DuplicateField(id.to_string()));
        }

        let handle = register_field(id, cell, rules, override_on_blur);
        fields.insert(id.to_string(), handle.clone());
        debug!(field = id, total = fields.len(), "registered form field");
        Ok(handle)
    }

    /// Remove a field on input unmount; frees the id for reuse.
    /// Returns whether the id was registered.
    pub fn unregister(&self, id: &str) -> bool {
        let removed = self.fields.borrow_mut().remove(id).is_some();
        if removed {
            debug!(field = id, "unregistered form field");
        }
        removed
    }

    /// Look up a registered field's handle
    pub fn field(&self, id: &str) -> Option<FieldHandle> {
        self.fields.borrow().get(id).cloned()
    }

    /// Whether an id is currently registered
    pub fn contains(&self, id: &str) -> bool {
        self.fields.borrow().contains_key(id)
    }

    /// Number of currently registered fields
    pub fn len(&self) -> usize {
        self.fields.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.borrow().is_empty()
    }

    /// Ids of all currently registered fields
    pub fn field_ids(&self) -> Vec<String> {
        self.fields.borrow().keys().cloned().collect()
    }

    /// Run a validation pass over every registered field, typically on
    /// submit. Returns the first message per failing field, keyed by id.
    pub fn validate_all(&self) -> Result<(), HashMap<String, String>> {
        let mut errors = HashMap::new();
        for (id, field) in self.fields.borrow().iter() {
            if !field.validate() {
                if let Some(message) = field.first_error() {
                    errors.insert(id.clone(), message);
                }
            }
        }

        debug!(
            fields = self.fields.borrow().len(),
            failing = errors.len(),
            "validated form"
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Snapshot of every field's current value, keyed by id
    pub fn values(&self) -> HashMap<String, Value> {
        self.fields
            .borrow()
            .iter()
            .map(|(id, field)| (id.clone(), field.value()))
            .collect()
    }
}
