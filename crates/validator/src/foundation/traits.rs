//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use serde_json::Value;

use crate::foundation::{FieldInput, ValidationError, ValidationResult};
use crate::messages::MessageCatalog;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// A validator looks at one field value (plus the field name, which only
/// matters for messages) and either accepts it or returns a structured
/// [`ValidationError`]. Validators are pure: the same input always produces
/// the same outcome.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::{FieldInput, Validate, ValidationError, ValidationResult, ValueExt};
///
/// struct UpperCase;
///
/// impl Validate for UpperCase {
///     fn validate(&self, input: &FieldInput<'_>) -> ValidationResult<()> {
///         let text = input.value.display_text();
///         if text.to_uppercase() == text {
///             Ok(())
///         } else {
///             Err(ValidationError::new("upperCase").for_input(input))
///         }
///     }
/// }
///
/// let value = serde_json::json!("abc");
/// assert!(UpperCase.validate(&FieldInput::new(Some("code"), &value)).is_err());
/// ```
pub trait Validate {
    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &FieldInput<'_>) -> ValidationResult<()>;

    /// Validates and renders any failure through `messages`.
    ///
    /// Returns `None` when the value is valid.
    fn check(&self, messages: &MessageCatalog, name: Option<&str>, value: &Value) -> Option<String> {
        self.validate(&FieldInput::new(name, value))
            .err()
            .map(|error| messages.render(&error))
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    fn validate(&self, input: &FieldInput<'_>) -> ValidationResult<()> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, input: &FieldInput<'_>) -> ValidationResult<()> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every [`Validate`] type.
///
/// # Examples
///
/// ```
/// use formcheck_validator::prelude::*;
///
/// let code = min_length(3).and(max_length(8)).with_code("code");
/// let value = serde_json::json!("ab");
/// let error = code.validate(&FieldInput::new(None, &value)).unwrap_err();
/// assert_eq!(error.code, "code");
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate,
    {
        And::new(self, other)
    }

    /// Reports any failure under a different validator key.
    ///
    /// The original error is kept as a nested error.
    fn with_code(self, code: impl Into<std::borrow::Cow<'static, str>>) -> WithCode<Self> {
        WithCode::new(self, code)
    }
}

// Automatically implement ValidateExt for all Validate implementations
impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithCode;

// ============================================================================
// TESTS
// ============================================================================
