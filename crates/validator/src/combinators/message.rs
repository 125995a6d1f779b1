//! CODE combinator - report failures under another message key

use std::borrow::Cow;

use crate::foundation::{FieldInput, Validate, ValidationError, ValidationResult};

// ============================================================================
// WITH CODE COMBINATOR
// ============================================================================

/// Replaces the validator key of any error produced by the inner validator.
///
/// The replacement error carries only the field name and the `name` /
/// `value` parameters, so it renders the message registered under the new
/// key. The original error is kept in [`ValidationError::nested`].
///
/// # Examples
///
/// ```
/// use formcheck_validator::combinators::WithCode;
/// use formcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let validator = WithCode::new(max_length(3), "shortCode");
/// let value = json!("abcdef");
/// let error = validator.validate(&FieldInput::new(Some("code"), &value)).unwrap_err();
///
/// assert_eq!(error.code, "shortCode");
/// assert_eq!(error.nested[0].code, "maxLength");
/// ```
#[derive(Debug, Clone)]
pub struct WithCode<V> {
    inner: V,
    code: Cow<'static, str>,
}

impl<V> WithCode<V> {
    /// Creates a new combinator.
    pub fn new(inner: V, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            code: code.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the replacement key.
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl<V> Validate for WithCode<V>
where
    V: Validate,
{
    fn validate(&self, input: &FieldInput<'_>) -> ValidationResult<()> {
        self.inner.validate(input).map_err(|original| {
            ValidationError::new(self.code.clone())
                .for_input(input)
                .with_nested_error(original)
        })
    }
}

/// Creates a `WithCode` combinator.
pub fn with_code<V>(validator: V, code: impl Into<Cow<'static, str>>) -> WithCode<V> {
    WithCode::new(validator, code)
}

// ============================================================================
// TESTS
// ============================================================================
