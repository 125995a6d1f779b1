//! Length validators
//!
//! Length is measured in Unicode scalar values of the value's display text,
//! so `12345` (a JSON number) has length 5.

use crate::foundation::ValidationError;

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a value has at least `min` characters.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize };
    rule(self, input) { !input.is_present() || input.char_len() >= self.min }
    error(self, input) { ValidationError::new("minLength").with_param("minLength", self.min) }
    fn min_length(min: usize);
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a value has at most `max` characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::{FieldInput, Validate};
    /// use formcheck_validator::validators::max_length;
    /// use serde_json::json;
    ///
    /// let validator = max_length(5);
    /// assert!(validator.validate(&FieldInput::new(None, &json!("abcde"))).is_ok());
    /// assert!(validator.validate(&FieldInput::new(None, &json!("abcdef"))).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize };
    rule(self, input) { !input.is_present() || input.char_len() <= self.max }
    error(self, input) { ValidationError::new("maxLength").with_param("maxLength", self.max) }
    fn max_length(max: usize);
}
