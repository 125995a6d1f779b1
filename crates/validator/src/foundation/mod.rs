//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`]
//! - **Input**: [`FieldInput`] and the [`ValueExt`] value semantics
//!
//! Validators see a field as a name plus a raw [`serde_json::Value`]. Failure
//! is data: a structured [`ValidationError`] that a
//! [`MessageCatalog`](crate::messages::MessageCatalog) renders to text.
//!
//! ```
//! use formcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let value = json!("hi");
//! let error = min_length(3)
//!     .validate(&FieldInput::new(Some("username"), &value))
//!     .unwrap_err();
//!
//! assert_eq!(error.code, "minLength");
//! assert_eq!(error.param("minLength"), Some(&json!(3)));
//! ```

pub mod error;
pub mod traits;
pub mod value;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
pub use value::{ValueExt, parse_float, truthy_number};

use serde_json::Value;

// ============================================================================
// FIELD INPUT
// ============================================================================

/// The thing being validated: an optional field name and its raw value.
#[derive(Debug, Clone, Copy)]
pub struct FieldInput<'a> {
    /// Field name, used for message lookup and interpolation.
    pub name: Option<&'a str>,
    /// Raw value as produced by the input component.
    pub value: &'a Value,
}

impl<'a> FieldInput<'a> {
    /// Creates a new input. An empty name is treated as no name.
    pub fn new(name: Option<&'a str>, value: &'a Value) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()),
            value,
        }
    }

    /// Returns true when the value is truthy.
    ///
    /// Every validator except `required` accepts a value that is not present.
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.value.is_truthy()
    }

    /// Number of characters in the value's display text.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.value.display_text().chars().count()
    }
}

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_name_is_no_name() {
        let value = json!("x");
        assert_eq!(FieldInput::new(Some(""), &value).name, None);
        assert_eq!(FieldInput::new(Some("a"), &value).name, Some("a"));
    }

    #[test]
    fn char_len_counts_scalars() {
        let value = json!("héllo");
        assert_eq!(FieldInput::new(None, &value).char_len(), 5);
        let number = json!(12345);
        assert_eq!(FieldInput::new(None, &number).char_len(), 5);
    }
}
