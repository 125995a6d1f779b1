//! Rules: validators as the field decorator calls them.

use serde_json::Value;

use crate::checks;
use crate::foundation::{Validate, ValueExt};
use crate::messages::MessageCatalog;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A validation step the field decorator can run.
///
/// `param` is the value of the component property that enabled the rule,
/// or `None` for default rules and for properties set to `true`.
///
/// Closures of the matching shape are rules; [`rule`] helps the compiler
/// infer their signature.
pub trait Rule: Send + Sync {
    /// Returns the rendered error message, or `None` when the value is valid.
    fn apply(
        &self,
        messages: &MessageCatalog,
        name: Option<&str>,
        value: &Value,
        param: Option<&Value>,
    ) -> Option<String>;
}

impl<F> Rule for F
where
    F: Fn(&MessageCatalog, Option<&str>, &Value, Option<&Value>) -> Option<String> + Send + Sync,
{
    fn apply(
        &self,
        messages: &MessageCatalog,
        name: Option<&str>,
        value: &Value,
        param: Option<&Value>,
    ) -> Option<String> {
        self(messages, name, value, param)
    }
}

/// Identity function that pins a closure to the [`Rule`] signature.
///
/// # Examples
///
/// ```
/// use formcheck_validator::field::rule;
/// use formcheck_validator::foundation::ValueExt;
/// use formcheck_validator::messages::InterpolationParams;
///
/// let upper_case = rule(|messages, name, value, _param| {
///     let text = value.display_text();
///     (value.is_truthy() && text.to_uppercase() != text).then(|| {
///         let params = InterpolationParams::new().with("name", name.map(str::to_owned));
///         messages.resolve_error_message("upperCase", name, &params)
///     })
/// });
/// # let _ = upper_case;
/// ```
pub fn rule<F>(f: F) -> F
where
    F: Fn(&MessageCatalog, Option<&str>, &Value, Option<&Value>) -> Option<String> + Send + Sync,
{
    f
}

// ============================================================================
// VALIDATOR ADAPTER
// ============================================================================

/// Runs a [`Validate`] implementation as a rule, ignoring the parameter.
#[derive(Debug, Clone)]
pub struct ValidatorRule<V>(pub V);

impl<V> Rule for ValidatorRule<V>
where
    V: Validate + Send + Sync,
{
    fn apply(
        &self,
        messages: &MessageCatalog,
        name: Option<&str>,
        value: &Value,
        _param: Option<&Value>,
    ) -> Option<String> {
        self.0.check(messages, name, value)
    }
}

// ============================================================================
// BUILT-IN RULES
// ============================================================================

/// The built-in validators in rule form.
///
/// Parameterized rules read their bound from the property value. A missing
/// or non-numeric bound never rejects anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRule {
    Required,
    Min,
    Max,
    MinLength,
    MaxLength,
    Pattern,
    Number,
    Email,
}

impl BuiltinRule {
    /// All built-in rules.
    pub const ALL: [Self; 8] = [
        Self::Required,
        Self::Min,
        Self::Max,
        Self::MinLength,
        Self::MaxLength,
        Self::Pattern,
        Self::Number,
        Self::Email,
    ];

    /// Validator key; also the conventional property name.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Min => "min",
            Self::Max => "max",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::Number => "number",
            Self::Email => "email",
        }
    }

    /// Looks a rule up by key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.key() == key)
    }
}

impl Rule for BuiltinRule {
    fn apply(
        &self,
        messages: &MessageCatalog,
        name: Option<&str>,
        value: &Value,
        param: Option<&Value>,
    ) -> Option<String> {
        match self {
            Self::Required => checks::required(messages, name, value),
            Self::Number => checks::number(messages, name, value),
            Self::Email => checks::email(messages, name, value),
            Self::Min => {
                let bound = param.map_or(f64::NAN, ValueExt::parse_number);
                checks::min(messages, name, value, bound)
            }
            Self::Max => {
                let bound = param.map_or(f64::NAN, ValueExt::parse_number);
                checks::max(messages, name, value, bound)
            }
            Self::MinLength => {
                let bound = length_bound(param, f64::ceil)?;
                checks::min_length(messages, name, value, bound)
            }
            Self::MaxLength => {
                let bound = length_bound(param, f64::floor)?;
                checks::max_length(messages, name, value, bound)
            }
            Self::Pattern => {
                let source = param?.display_text();
                checks::pattern(messages, name, value, &source)
            }
        }
    }
}

/// Integer length bound equivalent to comparing against the raw number.
///
/// `round` picks the integer with the same comparison outcome for
/// fractional bounds: `ceil` for minimums, `floor` for maximums. Negative
/// bounds clamp to zero.
fn length_bound(param: Option<&Value>, round: fn(f64) -> f64) -> Option<usize> {
    let n = param?.parse_number();
    if n.is_nan() {
        return None;
    }
    Some(round(n).max(0.0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn apply(rule: BuiltinRule, value: Value, param: Option<Value>) -> Option<String> {
        rule.apply(&MessageCatalog::english(), Some("test"), &value, param.as_ref())
    }

    #[test]
    fn keys_round_trip() {
        for rule in BuiltinRule::ALL {
            assert_eq!(BuiltinRule::from_key(rule.key()), Some(rule));
        }
        assert_eq!(BuiltinRule::from_key("upperCase"), None);
    }

    #[rstest]
    #[case(BuiltinRule::Min, json!("1"), Some(json!(2)), Some("test must be greater than 2"))]
    #[case(BuiltinRule::Min, json!("1"), Some(json!("2")), Some("test must be greater than 2"))]
    #[case(BuiltinRule::Min, json!("1"), None, None)]
    #[case(BuiltinRule::Max, json!("5"), Some(json!(4)), Some("test must be less than 4"))]
    #[case(BuiltinRule::Max, json!("5"), Some(json!("x")), None)]
    #[case(BuiltinRule::MinLength, json!("ab"), Some(json!(3)), Some("test must have at least 3 characters"))]
    #[case(BuiltinRule::MinLength, json!("abc"), Some(json!(3.5)), Some("test must have at least 4 characters"))]
    #[case(BuiltinRule::MinLength, json!("ab"), None, None)]
    #[case(BuiltinRule::MaxLength, json!("abcd"), Some(json!(3.5)), Some("test must have less than 3 characters"))]
    #[case(BuiltinRule::MaxLength, json!("abc"), Some(json!(3.5)), None)]
    #[case(BuiltinRule::Pattern, json!("aBc"), Some(json!("^[a-z]+$")), Some("test does not match the pattern ^[a-z]+$"))]
    #[case(BuiltinRule::Pattern, json!("aBc"), None, None)]
    #[case(BuiltinRule::Required, json!(""), Some(json!(true)), Some("test is required"))]
    #[case(BuiltinRule::Number, json!("a"), None, Some("test must be a number"))]
    #[case(BuiltinRule::Email, json!("a@b"), None, Some("test is not a valid email"))]
    fn builtin_rules(
        #[case] rule: BuiltinRule,
        #[case] value: Value,
        #[case] param: Option<Value>,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(apply(rule, value, param).as_deref(), expected);
    }

    #[test]
    fn validator_rule_ignores_param() {
        let rule = ValidatorRule(validators::min_length(2));
        let messages = MessageCatalog::english();
        assert_eq!(
            rule.apply(&messages, Some("x"), &json!("a"), Some(&json!(100))).as_deref(),
            Some("x must have at least 2 characters")
        );
    }

    #[test]
    fn closures_are_rules() {
        let always = rule(|_, name, _, param| Some(format!("{name:?} {param:?}")));
        let messages = MessageCatalog::english();
        assert_eq!(
            always.apply(&messages, Some("n"), &json!(1), None).as_deref(),
            Some("Some(\"n\") None")
        );
    }
}
