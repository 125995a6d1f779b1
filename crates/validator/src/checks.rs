//! Message-returning validator functions.
//!
//! Each function validates one value and returns the rendered error
//! message, or `None` when the value is valid. They are the string-level
//! face of [`validators`](crate::validators) and resolve messages through
//! the catalog they are given.
//!
//! ```
//! use formcheck_validator::checks;
//! use formcheck_validator::messages::MessageCatalog;
//! use serde_json::json;
//!
//! let messages = MessageCatalog::english();
//! assert_eq!(
//!     checks::min(&messages, Some("Age"), &json!("1"), 2.0).as_deref(),
//!     Some("Age must be greater than 2")
//! );
//! assert_eq!(checks::min(&messages, Some("Age"), &json!("3"), 2.0), None);
//! ```

use serde_json::Value;
use tracing::warn;

use crate::foundation::Validate;
use crate::messages::MessageCatalog;
use crate::validators;

/// `{name} is required` unless the value is present.
pub fn required(messages: &MessageCatalog, name: Option<&str>, value: &Value) -> Option<String> {
    validators::required().check(messages, name, value)
}

/// Rejects a value that parses below `min_value`.
pub fn min(
    messages: &MessageCatalog,
    name: Option<&str>,
    value: &Value,
    min_value: f64,
) -> Option<String> {
    validators::min(min_value).check(messages, name, value)
}

/// Rejects a value that parses above `max_value`.
pub fn max(
    messages: &MessageCatalog,
    name: Option<&str>,
    value: &Value,
    max_value: f64,
) -> Option<String> {
    validators::max(max_value).check(messages, name, value)
}

/// Rejects a value shorter than `min_length` characters.
pub fn min_length(
    messages: &MessageCatalog,
    name: Option<&str>,
    value: &Value,
    min_length: usize,
) -> Option<String> {
    validators::min_length(min_length).check(messages, name, value)
}

/// Rejects a value longer than `max_length` characters.
pub fn max_length(
    messages: &MessageCatalog,
    name: Option<&str>,
    value: &Value,
    max_length: usize,
) -> Option<String> {
    validators::max_length(max_length).check(messages, name, value)
}

/// Rejects a value that does not match `pattern`.
///
/// A pattern that does not compile cannot reject anything; it is logged and
/// the value is treated as valid.
pub fn pattern(
    messages: &MessageCatalog,
    name: Option<&str>,
    value: &Value,
    pattern: &str,
) -> Option<String> {
    match validators::pattern(pattern) {
        Ok(validator) => validator.check(messages, name, value),
        Err(error) => {
            warn!(pattern, field = name, %error, "invalid pattern, skipping check");
            None
        }
    }
}

/// Rejects a value that does not parse to a non-zero number.
pub fn number(messages: &MessageCatalog, name: Option<&str>, value: &Value) -> Option<String> {
    validators::number().check(messages, name, value)
}

/// Rejects a value that is not a plausible email address.
pub fn email(messages: &MessageCatalog, name: Option<&str>, value: &Value) -> Option<String> {
    validators::email().check(messages, name, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn english() -> MessageCatalog {
        MessageCatalog::english()
    }

    #[test]
    fn empty_field_message_never_yields_empty_error() {
        let m = MessageCatalog::with_overrides([("required.username", "")]);
        assert_eq!(
            required(&m, Some("username"), &json!("")).as_deref(),
            Some("username is required")
        );
    }

    #[test]
    fn required_messages() {
        let m = english();
        assert_eq!(required(&m, Some("Age"), &json!("")).as_deref(), Some("Age is required"));
        assert_eq!(required(&m, Some("Age"), &json!("0")), None);
    }

    #[test]
    fn zero_bound_keeps_placeholder() {
        let m = english();
        assert_eq!(
            min(&m, Some("Age"), &json!("-1"), 0.0).as_deref(),
            Some("Age must be greater than {minValue}")
        );
    }

    #[test]
    fn length_messages() {
        let m = english();
        assert_eq!(
            min_length(&m, Some("test"), &json!("ab"), 3).as_deref(),
            Some("test must have at least 3 characters")
        );
        assert_eq!(
            max_length(&m, Some("test"), &json!("abcdef"), 5).as_deref(),
            Some("test must have less than 5 characters")
        );
    }

    #[test]
    fn pattern_messages() {
        let m = english();
        assert_eq!(
            pattern(&m, Some("test"), &json!("aBcd123"), r"^[a-z0-9_\-]+$").as_deref(),
            Some(r"test does not match the pattern ^[a-z0-9_\-]+$")
        );
        assert_eq!(pattern(&m, Some("test"), &json!("x"), "(unclosed"), None);
    }

    #[test]
    fn email_message_is_generic() {
        let m = english();
        let long = format!("{}@example.com", "a".repeat(250));
        assert_eq!(
            email(&m, Some("Mail"), &json!(long)).as_deref(),
            Some("Mail is not a valid email")
        );
    }

    #[test]
    fn number_message() {
        let m = english();
        assert_eq!(number(&m, Some("test"), &json!("a")).as_deref(), Some("test must be a number"));
        assert_eq!(number(&m, Some("test"), &json!("")), None);
    }

    #[test]
    fn unnamed_field_keeps_name_placeholder() {
        let m = english();
        assert_eq!(required(&m, None, &json!(null)).as_deref(), Some("{name} is required"));
    }

    #[test]
    fn field_qualified_override() {
        let m = MessageCatalog::with_overrides([("required.username", "Pick a username")]);
        assert_eq!(
            required(&m, Some("username"), &json!("")).as_deref(),
            Some("Pick a username")
        );
        assert_eq!(
            required(&m, Some("email"), &json!("")).as_deref(),
            Some("email is required")
        );
    }
}
