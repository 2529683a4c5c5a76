/// Registration contract tests
///
/// Exercises the factory and scope layers together the way a form
/// container and its inputs use them: allocate state records, drive them
/// through edit/blur/submit, and confirm records never share ownership.
use formbind::{register_field, FormScope, ValidationRules, Value, ValueCell};
use pretty_assertions::assert_eq;

#[test]
fn registration_echoes_inputs_and_starts_unevaluated() {
    let cell = ValueCell::new("a@b.com");
    let rules = ValidationRules::new().required().email();

    let field = register_field("email", &cell, rules, false);
    let state = field.state();

    assert_eq!(state.id, "email");
    assert_eq!(state.value, Value::from("a@b.com"));
    assert_eq!(state.rules.required, Some(true));
    assert_eq!(state.rules.email, Some(true));
    assert_eq!(state.valid, None);
    assert_eq!(state.changed, false);
    assert_eq!(state.touched, false);
    assert_eq!(state.required, true);
    assert_eq!(state.validated, false);
    assert_eq!(state.errors, Vec::<String>::new());
}

#[test]
fn empty_rule_set_derives_nothing() {
    let field = register_field("age", &ValueCell::empty(), ValidationRules::new(), false);

    assert_eq!(field.is_required(), false);
    assert_eq!(field.value(), Value::Null);
    assert_eq!(field.is_valid(), None);
}

#[test]
fn repeated_ids_get_independent_records() {
    let first = register_field(
        "name",
        &ValueCell::new("alpha"),
        ValidationRules::new(),
        false,
    );
    let second = register_field(
        "name",
        &ValueCell::new("beta"),
        ValidationRules::new().required(),
        false,
    );

    first.set_value("mutated");
    first.mark_touched();

    assert_eq!(second.value(), Value::from("beta"));
    assert_eq!(second.is_changed(), false);
    assert_eq!(second.is_touched(), false);
    assert_eq!(second.is_valid(), None);
}

#[test]
fn registration_does_not_validate() {
    // invalid value under the rules, but registration is only a factory
    let field = register_field(
        "email",
        &ValueCell::new("not-an-email"),
        ValidationRules::new().required().email(),
        false,
    );

    assert_eq!(field.is_valid(), None);
    assert_eq!(field.is_validated(), false);
    assert!(field.errors().is_empty());
}

#[test]
fn scope_drives_a_form_lifecycle() {
    // the form container creates the scope and hands clones down the tree
    let scope = FormScope::new();
    let nested_scope = scope.clone();

    let email_cell = ValueCell::new("");
    let email = nested_scope
        .register(
            "email",
            &email_cell,
            ValidationRules::new().required().email(),
            false,
        )
        .unwrap();
    let age = nested_scope
        .register(
            "age",
            &ValueCell::new(30i64),
            ValidationRules::new().min(18.0).max(120.0).integer(),
            false,
        )
        .unwrap();

    // first submit: the empty required email fails, the age passes
    let errors = scope.validate_all().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["email"], "This field is required");
    assert_eq!(age.is_valid(), Some(true));

    // the user types and tabs away
    email.set_value("user@example.com");
    email.mark_touched();
    assert_eq!(email.is_changed(), true);
    assert_eq!(email.is_touched(), true);
    assert_eq!(email.is_valid(), Some(true));

    // second submit is clean
    assert!(scope.validate_all().is_ok());
    assert_eq!(scope.values()["email"], Value::from("user@example.com"));

    // unmounting the inputs empties the scope
    assert!(scope.unregister("email"));
    assert!(scope.unregister("age"));
    assert!(scope.is_empty());
}
