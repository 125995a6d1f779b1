//! Error types for validation failures
//!
//! A [`ValidationError`] does not carry display text. It records the
//! validator key (`code`), the field it was raised for, and the parameters
//! the message template needs; a
//! [`MessageCatalog`](crate::messages::MessageCatalog) turns it into a
//! human-readable string.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::foundation::FieldInput;
use crate::foundation::value::ValueExt;
use crate::messages::InterpolationParams;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min")
///     .with_field("age")
///     .with_param("minValue", 18);
///
/// assert_eq!(error.code, "min");
/// assert_eq!(error.param("minValue"), Some(&serde_json::json!(18)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Validator key, also the message key.
    ///
    /// Examples: "required", "minLength", "email"
    pub code: Cow<'static, str>,

    /// Name of the field being validated, if the caller supplied one.
    pub field: Option<Cow<'static, str>>,

    /// Interpolation parameters for the message template.
    pub params: InterpolationParams,

    /// Errors this one was derived from (e.g. the length check behind an
    /// email failure).
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error for a validator key.
    pub fn new(code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            field: None,
            params: InterpolationParams::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds an interpolation parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Adds a single nested error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Attaches the field name and the `name` / `value` parameters every
    /// validator message can reference.
    #[must_use = "builder methods must be chained or built"]
    pub fn for_input(mut self, input: &FieldInput<'_>) -> Self {
        let name = input.name.map_or(Value::Null, Value::from);
        let mut params = InterpolationParams::new()
            .with("name", name)
            .with("value", input.value.clone());
        params.extend(std::mem::take(&mut self.params));
        self.params = params;

        if let Some(name) = input.name {
            self.field = Some(Cow::Owned(name.to_owned()));
        }
        self
    }

    /// Field name as a plain `&str`.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Returns true if this error has nested errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{field}] {}", self.code)?;
        } else {
            write!(f, "{}", self.code)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={}", v.display_text())?;
            }
            write!(f, "])")?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================
