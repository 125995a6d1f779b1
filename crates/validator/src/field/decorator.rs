//! The field decorator.
//!
//! [`WithValidator`] describes which rules a field type runs:
//!
//! - **default rules** always run, in insertion order;
//! - **conditional rules** run when the component instance carries a truthy
//!   property of the same name. A `true` property runs the rule without a
//!   parameter; any other truthy value is passed as the parameter.
//!
//! The first message produced wins. Wrapping a [`Component`] yields a
//! [`Validated`] component that strips the conditional properties and hands
//! the wrapped component a [`FieldValidator`] instead.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::trace;

use crate::field::{Props, Rule};
use crate::foundation::ValueExt;
use crate::messages::{MessageCatalog, global};

// ============================================================================
// MESSAGE SOURCE
// ============================================================================

/// Where a field validator resolves its messages.
#[derive(Debug, Clone, Default)]
pub enum MessageSource {
    /// The process-wide catalog, read at every validation.
    #[default]
    Global,
    /// A catalog fixed when the decorator was built.
    Fixed(Arc<MessageCatalog>),
}

impl MessageSource {
    /// The catalog to resolve against right now.
    #[must_use]
    pub fn catalog(&self) -> Arc<MessageCatalog> {
        match self {
            Self::Global => global::current(),
            Self::Fixed(catalog) => Arc::clone(catalog),
        }
    }
}

impl From<MessageCatalog> for MessageSource {
    fn from(catalog: MessageCatalog) -> Self {
        Self::Fixed(Arc::new(catalog))
    }
}

impl From<Arc<MessageCatalog>> for MessageSource {
    fn from(catalog: Arc<MessageCatalog>) -> Self {
        Self::Fixed(catalog)
    }
}

// ============================================================================
// COMPONENT
// ============================================================================

/// A component the decorator can wrap.
///
/// Closures taking the forwarded properties and the bound validator are
/// components.
pub trait Component {
    type Output;

    /// Renders with the forwarded properties and the bound validator.
    fn render(&self, props: Props, validator: FieldValidator) -> Self::Output;
}

impl<F, O> Component for F
where
    F: Fn(Props, FieldValidator) -> O,
{
    type Output = O;

    fn render(&self, props: Props, validator: FieldValidator) -> O {
        self(props, validator)
    }
}

// ============================================================================
// DECORATOR
// ============================================================================

type Rules = IndexMap<String, Arc<dyn Rule>>;

struct RuleSet {
    defaults: Rules,
    conditional: Rules,
    messages: MessageSource,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("defaults", &self.defaults.keys().collect::<Vec<_>>())
            .field("conditional", &self.conditional.keys().collect::<Vec<_>>())
            .field("messages", &self.messages)
            .finish()
    }
}

/// Builder for a field decorator.
///
/// # Examples
///
/// ```
/// use formcheck_validator::field::{BuiltinRule, FieldValidator, Props, WithValidator};
/// use formcheck_validator::messages::MessageCatalog;
/// use serde_json::json;
///
/// let number_field = WithValidator::new()
///     .conditional("required", BuiltinRule::Required)
///     .conditional("min", BuiltinRule::Min)
///     .default_validator("number", BuiltinRule::Number)
///     .messages(MessageCatalog::english())
///     .wrap(|props: Props, validator: FieldValidator| {
///         validator.validate(props.get("value").unwrap_or(&json!(null)))
///     });
///
/// let props = Props::new().with("name", "age").with("value", "1").with("min", 2);
/// assert_eq!(number_field.render(props).as_deref(), Some("age must be greater than 2"));
/// ```
#[derive(Debug)]
pub struct WithValidator {
    rules: RuleSet,
}

impl Default for WithValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl WithValidator {
    /// An empty decorator resolving messages through the global catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: RuleSet {
                defaults: IndexMap::new(),
                conditional: IndexMap::new(),
                messages: MessageSource::Global,
            },
        }
    }

    /// Adds a rule enabled by the property `prop`.
    ///
    /// Re-adding a property replaces its rule in place.
    #[must_use = "builder methods must be chained or built"]
    pub fn conditional(mut self, prop: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.rules.conditional.insert(prop.into(), Arc::new(rule));
        self
    }

    /// Adds a rule that always runs, before any conditional rule.
    #[must_use = "builder methods must be chained or built"]
    pub fn default_validator(mut self, label: impl Into<String>, rule: impl Rule + 'static) -> Self {
        self.rules.defaults.insert(label.into(), Arc::new(rule));
        self
    }

    /// Sets where messages are resolved.
    #[must_use = "builder methods must be chained or built"]
    pub fn messages(mut self, source: impl Into<MessageSource>) -> Self {
        self.rules.messages = source.into();
        self
    }

    /// Wraps `component`.
    pub fn wrap<C: Component>(self, component: C) -> Validated<C> {
        trace!(
            defaults = self.rules.defaults.len(),
            conditional = self.rules.conditional.len(),
            "field decorator built"
        );
        Validated {
            component,
            rules: Arc::new(self.rules),
        }
    }
}

/// Starts a [`WithValidator`] builder.
#[must_use]
pub fn with_validator() -> WithValidator {
    WithValidator::new()
}

// ============================================================================
// VALIDATED COMPONENT
// ============================================================================

/// A component wrapped by [`WithValidator`].
#[derive(Debug)]
pub struct Validated<C> {
    component: C,
    rules: Arc<RuleSet>,
}

impl<C: Component> Validated<C> {
    /// Renders the wrapped component.
    ///
    /// Conditional-rule properties are removed; every other property is
    /// forwarded unchanged, together with the instance's validator.
    pub fn render(&self, props: Props) -> C::Output {
        let validator = self.validator_for(&props);
        let mut forwarded = props;
        for key in self.rules.conditional.keys() {
            forwarded.remove(key);
        }
        self.component.render(forwarded, validator)
    }
}

impl<C> Validated<C> {
    /// The validator an instance with `props` would receive.
    #[must_use]
    pub fn validator_for(&self, props: &Props) -> FieldValidator {
        let params = self
            .rules
            .conditional
            .keys()
            .filter_map(|key| props.get(key).map(|value| (key.clone(), value.clone())))
            .collect();
        FieldValidator {
            rules: Arc::clone(&self.rules),
            name: props.name().map(str::to_owned),
            params,
        }
    }

    /// Conditional-rule property names, in order.
    pub fn conditional_props(&self) -> impl Iterator<Item = &str> {
        self.rules.conditional.keys().map(String::as_str)
    }
}

// ============================================================================
// FIELD VALIDATOR
// ============================================================================

/// The validation callback bound to one component instance.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    rules: Arc<RuleSet>,
    name: Option<String>,
    params: IndexMap<String, Value>,
}

impl FieldValidator {
    /// Field name of the instance.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Validates `value`, resolving messages through the decorator's source.
    #[must_use]
    pub fn validate(&self, value: &Value) -> Option<String> {
        let messages = self.rules.messages.catalog();
        self.validate_with(&messages, value)
    }

    /// Validates `value`, resolving messages through `messages`.
    #[must_use]
    pub fn validate_with(&self, messages: &MessageCatalog, value: &Value) -> Option<String> {
        let name = self.name.as_deref();

        for (label, rule) in &self.rules.defaults {
            if let Some(error) = rule.apply(messages, name, value, None) {
                trace!(field = name, rule = %label, %error, "default rule failed");
                return Some(error);
            }
        }

        for (prop, rule) in &self.rules.conditional {
            let Some(param) = self.params.get(prop).filter(|p| p.is_truthy()) else {
                continue;
            };
            let param = if param.is_boolean() { None } else { Some(param) };
            if let Some(error) = rule.apply(messages, name, value, param) {
                trace!(field = name, rule = %prop, %error, "conditional rule failed");
                return Some(error);
            }
        }

        trace!(field = name, "field valid");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{BuiltinRule, rule};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn english() -> MessageCatalog {
        MessageCatalog::english()
    }

    fn echo(props: Props, validator: FieldValidator) -> (Props, FieldValidator) {
        (props, validator)
    }

    #[test]
    fn strips_only_conditional_props() {
        let field = with_validator()
            .conditional("required", BuiltinRule::Required)
            .conditional("minLength", BuiltinRule::MinLength)
            .default_validator("number", BuiltinRule::Number)
            .wrap(echo);

        let props = Props::new()
            .with("name", "test")
            .with("required", true)
            .with("placeholder", "Your age")
            .with("number", "kept");
        let (forwarded, validator) = field.render(props);

        assert_eq!(
            forwarded.keys().collect::<Vec<_>>(),
            vec!["name", "placeholder", "number"]
        );
        assert_eq!(validator.name(), Some("test"));
    }

    #[test]
    fn defaults_run_before_conditionals() {
        let field = with_validator()
            .conditional("required", BuiltinRule::Required)
            .default_validator("number", BuiltinRule::Number)
            .messages(english())
            .wrap(echo);
        let validator = field.validator_for(&Props::new().with("name", "n").with("required", true));

        assert_eq!(validator.validate(&json!("a")).as_deref(), Some("n must be a number"));
        assert_eq!(validator.validate(&json!("")).as_deref(), Some("n is required"));
    }

    #[test]
    fn falsy_props_disable_rules() {
        let field = with_validator()
            .conditional("required", BuiltinRule::Required)
            .conditional("minLength", BuiltinRule::MinLength)
            .messages(english())
            .wrap(echo);

        let props = Props::new().with("required", false).with("minLength", 0);
        assert_eq!(field.validator_for(&props).validate(&json!("")), None);
    }

    #[test]
    fn stops_at_first_error() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let field = with_validator()
            .conditional("required", BuiltinRule::Required)
            .conditional(
                "count",
                rule(move |_, _, _, _| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    None
                }),
            )
            .messages(english())
            .wrap(echo);

        let props = Props::new().with("required", true).with("count", true);
        let validator = field.validator_for(&props);
        assert!(validator.validate(&json!(null)).is_some());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(validator.validate(&json!("x")).is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn boolean_props_pass_no_param() {
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let field = with_validator()
            .conditional(
                "probe",
                rule(move |_, _, _, param| {
                    sink.lock().push(param.cloned());
                    None
                }),
            )
            .messages(english())
            .wrap(echo);

        let _ = field
            .validator_for(&Props::new().with("probe", true))
            .validate(&json!("v"));
        let _ = field
            .validator_for(&Props::new().with("probe", 5))
            .validate(&json!("v"));
        assert_eq!(*seen.lock(), vec![None, Some(json!(5))]);
    }

    #[test]
    fn validate_with_overrides_source() {
        let field = with_validator()
            .conditional("required", BuiltinRule::Required)
            .messages(english())
            .wrap(echo);
        let validator = field.validator_for(&Props::new().with("name", "n").with("required", true));
        let german = MessageCatalog::with_overrides([("required", "{name} fehlt")]);

        assert_eq!(
            validator.validate_with(&german, &json!("")).as_deref(),
            Some("n fehlt")
        );
    }

    #[test]
    fn field_without_name() {
        let field = with_validator()
            .conditional("required", BuiltinRule::Required)
            .messages(english())
            .wrap(echo);
        let validator = field.validator_for(&Props::new().with("required", true));
        assert_eq!(
            validator.validate(&json!("")).as_deref(),
            Some("{name} is required")
        );
    }

    #[test]
    fn conditional_props_in_order() {
        let field = with_validator()
            .conditional("required", BuiltinRule::Required)
            .conditional("min", BuiltinRule::Min)
            .conditional("required", BuiltinRule::Number)
            .wrap(echo);
        assert_eq!(field.conditional_props().collect::<Vec<_>>(), vec!["required", "min"]);
    }
}
