//! Numeric bound validators
//!
//! The value is parsed with [`parse_float`](crate::foundation::parse_float)
//! semantics, so `"12abc"` counts as `12`. A value that does not parse to a
//! non-zero number is not range-checked at all; use [`Number`] for that.
//!
//! [`Number`]: crate::validators::Number

use std::cmp::Ordering;

use crate::foundation::{FieldInput, ValidationError, ValueExt, truthy_number};

/// Parsed value of a present input, skipping zero and NaN.
fn bounded_number(input: &FieldInput<'_>) -> Option<f64> {
    if input.is_present() {
        truthy_number(input.value.parse_number())
    } else {
        None
    }
}

crate::validator! {
    /// Validates that a number is at least `min`.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::{FieldInput, Validate};
    /// use formcheck_validator::validators::min;
    /// use serde_json::json;
    ///
    /// let validator = min(2.0);
    /// assert!(validator.validate(&FieldInput::new(None, &json!("1"))).is_err());
    /// assert!(validator.validate(&FieldInput::new(None, &json!("2"))).is_ok());
    /// // Zero is never range-checked.
    /// assert!(validator.validate(&FieldInput::new(None, &json!("0"))).is_ok());
    /// ```
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 };
    rule(self, input) {
        bounded_number(input).is_none_or(|n| n.partial_cmp(&self.min) != Some(Ordering::Less))
    }
    error(self, input) { ValidationError::new("min").with_param("minValue", self.min) }
    fn min(min: f64);
}

crate::validator! {
    /// Validates that a number is at most `max`.
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 };
    rule(self, input) {
        bounded_number(input).is_none_or(|n| n.partial_cmp(&self.max) != Some(Ordering::Greater))
    }
    error(self, input) { ValidationError::new("max").with_param("maxValue", self.max) }
    fn max(max: f64);
}
