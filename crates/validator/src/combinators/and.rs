//! AND combinator - logical conjunction of validators
//!
//! This module provides the [`And`] combinator which combines two validators
//! with logical AND semantics - both validators must pass for the combined
//! validator to succeed.

use crate::foundation::{FieldInput, Validate, ValidationResult};

/// Combines two validators with logical AND.
///
/// Both validators must pass for the combined validator to succeed.
/// The error of the first failing validator is returned and the second one
/// is not run.
///
/// # Examples
///
/// ```
/// use formcheck_validator::combinators::And;
/// use formcheck_validator::prelude::*;
/// use serde_json::json;
///
/// let validator = And::new(min_length(2), max_length(4));
/// let short = json!("a");
/// let error = validator.validate(&FieldInput::new(None, &short)).unwrap_err();
/// assert_eq!(error.code, "minLength");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    /// The left (first) validator.
    pub(crate) left: L,
    /// The right (second) validator.
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Returns a reference to the left validator.
    pub fn left(&self) -> &L {
        &self.left
    }

    /// Returns a reference to the right validator.
    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate,
{
    fn validate(&self, input: &FieldInput<'_>) -> ValidationResult<()> {
        self.left.validate(input)?;
        self.right.validate(input)?;
        Ok(())
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R> {
    And::new(left, right)
}
