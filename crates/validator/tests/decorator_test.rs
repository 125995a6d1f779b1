//! Field decorator behaviour through the public API.
//!
//! Every decorator here resolves messages through its own catalog, so these
//! tests never touch the process-wide one.

use formcheck_validator::prelude::*;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

/// A component that reports what its validator says about its `value`.
fn report_field() -> impl Fn(Props, FieldValidator) -> String {
    |props, validator| {
        let value = props.get("value").cloned().unwrap_or(Value::Null);
        let result = validator.validate(&value);
        format!("validateTest: {}", result.unwrap_or_else(|| "valid".to_owned()))
    }
}

fn render_all<C>(field: &Validated<C>, instances: Vec<Props>) -> String
where
    C: Component<Output = String>,
{
    instances
        .into_iter()
        .map(|props| field.render(props))
        .collect::<Vec<_>>()
        .join("\n")
}

fn named(name: &str) -> Props {
    Props::new().with("name", name)
}

#[test]
fn number_field() {
    let number_field = with_validator()
        .conditional("required", BuiltinRule::Required)
        .conditional("min", BuiltinRule::Min)
        .conditional("max", BuiltinRule::Max)
        .default_validator("number", BuiltinRule::Number)
        .messages(MessageCatalog::english())
        .wrap(report_field());

    let rendered = render_all(
        &number_field,
        vec![
            named("test"),
            named("test").with("required", true),
            named("test").with("value", "a").with("required", true),
            named("test").with("value", "1").with("required", true).with("min", 2),
            named("test")
                .with("value", "5")
                .with("required", true)
                .with("min", 2)
                .with("max", 4),
            named("test")
                .with("value", "3")
                .with("required", true)
                .with("min", 2)
                .with("max", 4),
        ],
    );

    assert_snapshot!(rendered, @r"
    validateTest: valid
    validateTest: test is required
    validateTest: test must be a number
    validateTest: test must be greater than 2
    validateTest: test must be less than 4
    validateTest: valid
    ");
}

#[test]
fn text_field() {
    let text_field = with_validator()
        .conditional("required", BuiltinRule::Required)
        .conditional("minLength", BuiltinRule::MinLength)
        .conditional("maxLength", BuiltinRule::MaxLength)
        .conditional("pattern", BuiltinRule::Pattern)
        .messages(MessageCatalog::english())
        .wrap(report_field());

    let username = r"^[a-z0-9_\-]+$";
    let rendered = render_all(
        &text_field,
        vec![
            named("test"),
            named("test").with("required", true),
            named("test").with("value", "abcdef").with("required", true),
            named("test")
                .with("value", "ab")
                .with("required", true)
                .with("minLength", 3),
            named("test")
                .with("value", "abcdef")
                .with("required", true)
                .with("minLength", 3)
                .with("maxLength", 5),
            named("test")
                .with("value", "abcd")
                .with("required", true)
                .with("minLength", 3)
                .with("maxLength", 5),
            named("test")
                .with("value", "abcd123")
                .with("required", true)
                .with("pattern", username),
            named("test")
                .with("value", "aBcd123")
                .with("required", true)
                .with("pattern", username),
        ],
    );

    assert_snapshot!(rendered, @r"
    validateTest: valid
    validateTest: test is required
    validateTest: valid
    validateTest: test must have at least 3 characters
    validateTest: test must have less than 5 characters
    validateTest: valid
    validateTest: valid
    validateTest: test does not match the pattern ^[a-z0-9_\-]+$
    ");
}

#[test]
fn email_field() {
    let email_field = with_validator()
        .conditional("required", BuiltinRule::Required)
        .default_validator("email", BuiltinRule::Email)
        .messages(MessageCatalog::english())
        .wrap(report_field());

    let rendered = render_all(
        &email_field,
        vec![
            named("test"),
            named("test").with("required", true),
            named("test").with("value", "test").with("required", true),
            named("test").with("value", "test@test").with("required", true),
            named("test").with("value", "test@test.com").with("required", true),
        ],
    );

    assert_snapshot!(rendered, @r"
    validateTest: valid
    validateTest: test is required
    validateTest: test is not a valid email
    validateTest: test is not a valid email
    validateTest: valid
    ");
}

#[test]
fn default_rules_win_over_conditional_ones() {
    let field = with_validator()
        .conditional("min", BuiltinRule::Min)
        .conditional("max", BuiltinRule::Max)
        .default_validator("required", BuiltinRule::Required)
        .messages(MessageCatalog::english())
        .wrap(report_field());

    let props = named("age").with("min", 5);
    let validator = field.validator_for(&props);
    assert_eq!(validator.validate(&json!("")).as_deref(), Some("age is required"));
    assert_eq!(
        validator.validate(&json!("3")).as_deref(),
        Some("age must be greater than 5")
    );
}

#[test]
fn conditional_props_never_reach_the_component() {
    let field = with_validator()
        .conditional("required", BuiltinRule::Required)
        .conditional("minLength", BuiltinRule::MinLength)
        .conditional("pattern", BuiltinRule::Pattern)
        .messages(MessageCatalog::english())
        .wrap(|props: Props, _validator: FieldValidator| props);

    let forwarded = field.render(
        named("username")
            .with("value", "x")
            .with("required", true)
            .with("minLength", 3)
            .with("pattern", "^[a-z]+$")
            .with("autoFocus", true),
    );

    for key in ["required", "minLength", "pattern"] {
        assert!(!forwarded.contains_key(key), "{key} leaked");
    }
    assert_eq!(
        forwarded.keys().collect::<Vec<_>>(),
        vec!["name", "value", "autoFocus"]
    );
}

#[test]
fn field_qualified_messages() {
    let messages = MessageCatalog::with_overrides([("required.username", "Pick a username")]);
    let field = with_validator()
        .conditional("required", BuiltinRule::Required)
        .messages(messages)
        .wrap(report_field());

    assert_eq!(
        field.render(named("username").with("required", true)),
        "validateTest: Pick a username"
    );
    assert_eq!(
        field.render(named("email").with("required", true)),
        "validateTest: email is required"
    );
}

#[test]
fn custom_rule_with_own_message_key() {
    let messages = MessageCatalog::with_overrides([
        ("required", "{name} wird benötigt"),
        ("upperCase", "{name} darf nur Großbuchstaben enthalten"),
    ]);
    let upper_case = rule(|messages, name, value, _param| {
        let text = value.display_text();
        (value.is_truthy() && text.to_uppercase() != text).then(|| {
            let params = InterpolationParams::new()
                .with("name", name.map(str::to_owned))
                .with("value", value.clone());
            messages.resolve_error_message("upperCase", name, &params)
        })
    });

    let field = with_validator()
        .conditional("required", BuiltinRule::Required)
        .conditional("upperCase", upper_case)
        .messages(messages)
        .wrap(report_field());

    let rendered = render_all(
        &field,
        vec![
            named("Code").with("required", true),
            named("Code").with("value", "abc").with("upperCase", true),
            named("Code").with("value", "ABC").with("upperCase", true),
            named("Code").with("value", "abc"),
        ],
    );

    assert_snapshot!(rendered, @r"
    validateTest: Code wird benötigt
    validateTest: Code darf nur Großbuchstaben enthalten
    validateTest: valid
    validateTest: valid
    ");
}

#[test]
fn struct_validators_plug_in_as_rules() {
    let field = with_validator()
        .default_validator("short", ValidatorRule(max_length(3)))
        .messages(MessageCatalog::english())
        .wrap(report_field());

    assert_eq!(
        field.render(named("pin").with("value", "12345")),
        "validateTest: pin must have less than 3 characters"
    );
}

#[test]
fn props_from_json() {
    let field = with_validator()
        .conditional("required", BuiltinRule::Required)
        .conditional("maxLength", BuiltinRule::MaxLength)
        .messages(MessageCatalog::english())
        .wrap(report_field());

    let props: Props =
        serde_json::from_str(r#"{"name": "city", "value": "Llanfairpwll", "maxLength": 10}"#)
            .unwrap();
    assert_eq!(
        field.render(props),
        "validateTest: city must have less than 10 characters"
    );
}
