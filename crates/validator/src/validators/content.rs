//! Email validator

use std::sync::LazyLock;

use regex::Regex;

use crate::combinators::{And, WithCode};
use crate::foundation::{FieldInput, Validate, ValidateExt, ValidationResult};
use crate::validators::{MaxLength, Pattern};

/// Longest address accepted, in characters.
pub const EMAIL_MAX_LENGTH: usize = 254;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\.,;:\s@"]+(\.[^<>()\[\]\.,;:\s@"]+)*)|(".+"))@(([^<>()\[\]\.,;:\s@"]+\.)+[^<>()\[\]\.,;:\s@"]{2,})$"#,
    )
    .expect("email pattern is valid")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

/// Validates an email address.
///
/// Runs a length check and the address pattern; either failure is reported
/// under the `email` key with the underlying error nested.
///
/// # Examples
///
/// ```
/// use formcheck_validator::foundation::{FieldInput, Validate};
/// use formcheck_validator::validators::email;
/// use serde_json::json;
///
/// let validator = email();
/// assert!(validator.validate(&FieldInput::new(None, &json!("test@test.com"))).is_ok());
///
/// let error = validator.validate(&FieldInput::new(None, &json!("test@test"))).unwrap_err();
/// assert_eq!(error.code, "email");
/// assert_eq!(error.nested[0].code, "pattern");
/// ```
#[derive(Debug, Clone)]
pub struct Email {
    inner: WithCode<And<MaxLength, Pattern>>,
}

impl Email {
    /// Creates the validator.
    #[must_use]
    pub fn new() -> Self {
        let inner = MaxLength::new(EMAIL_MAX_LENGTH)
            .and(Pattern::from_regex(EMAIL_REGEX.clone()))
            .with_code("email");
        Self { inner }
    }
}

impl Default for Email {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Email {
    fn validate(&self, input: &FieldInput<'_>) -> ValidationResult<()> {
        if !input.is_present() {
            return Ok(());
        }
        self.inner.validate(input)
    }
}

/// Creates an [`Email`] validator.
#[must_use]
pub fn email() -> Email {
    Email::new()
}

// ============================================================================
// TESTS
// ============================================================================
