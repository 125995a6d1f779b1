//! Prelude module for convenient imports.
//!
//! ```
//! use formcheck_validator::prelude::*;
//!
//! let username = required().and(min_length(3)).and(max_length(20));
//! let email_field = with_validator()
//!     .conditional("required", BuiltinRule::Required)
//!     .default_validator("email", BuiltinRule::Email);
//! # let _ = (username, email_field);
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{
    FieldInput, Validate, ValidateExt, ValidationError, ValidationResult, ValueExt,
};

// ============================================================================
// VALIDATORS
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// COMBINATORS
// ============================================================================

pub use crate::combinators::{And, WithCode, and, with_code};

// ============================================================================
// MESSAGES
// ============================================================================

pub use crate::messages::{
    CatalogError, InterpolationParams, LocaleSet, MessageCatalog, Messages, PlaceholderSyntax,
};

// ============================================================================
// FIELD DECORATOR
// ============================================================================

pub use crate::field::{
    BuiltinRule, Component, FieldValidator, MessageSource, Props, Rule, Validated, ValidatorRule,
    WithValidator, rule, with_validator,
};
