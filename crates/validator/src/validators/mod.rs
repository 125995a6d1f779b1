//! Built-in validators
//!
//! Every validator looks at a [`FieldInput`](crate::foundation::FieldInput)
//! and accepts an absent (falsy) value, except [`Required`].
//!
//! | Validator | Key | Parameters |
//! |---|---|---|
//! | [`Required`] | `required` | |
//! | [`Min`] | `min` | `minValue` |
//! | [`Max`] | `max` | `maxValue` |
//! | [`MinLength`] | `minLength` | `minLength` |
//! | [`MaxLength`] | `maxLength` | `maxLength` |
//! | [`Pattern`] | `pattern` | `pattern` |
//! | [`Number`] | `number` | |
//! | [`Email`] | `email` | |
//!
//! Every error also carries `name` and `value`.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let username = required().and(min_length(3)).and(max_length(20));
//! let value = json!("ab");
//! let error = username.validate(&FieldInput::new(Some("username"), &value)).unwrap_err();
//! assert_eq!(error.code, "minLength");
//! ```

pub mod content;
pub mod length;
pub mod nullable;
pub mod numeric;
pub mod pattern;
pub mod range;

pub use content::{EMAIL_MAX_LENGTH, Email, email};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use nullable::{Required, required};
pub use numeric::{Number, number};
pub use pattern::{Pattern, pattern};
pub use range::{Max, Min, max, min};
