//! Presence validator
//!
//! [`Required`] is the only validator that rejects an absent value. Absence
//! follows truthiness: `null`, `false`, `0`, `NaN` and `""` are absent, the
//! string `"0"` is present.

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::{FieldInput, Validate};
    /// use formcheck_validator::validators::required;
    /// use serde_json::json;
    ///
    /// let missing = json!("");
    /// let error = required().validate(&FieldInput::new(Some("age"), &missing)).unwrap_err();
    /// assert_eq!(error.code, "required");
    /// ```
    pub Required;
    rule(input) { input.is_present() }
    error(input) { ValidationError::new("required") }
    fn required();
}
