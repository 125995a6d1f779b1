//! # formcheck-validator
//!
//! Field validation for form inputs: named validators, a message registry
//! with per-field overrides and pluggable placeholder syntax, and a field
//! decorator that derives a component's validation callback from its
//! properties.
//!
//! ## Quick Start
//!
//! ```
//! use formcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let messages = MessageCatalog::english();
//! let username = required().and(min_length(3));
//!
//! let value = json!("ab");
//! assert_eq!(
//!     username.check(&messages, Some("username"), &value).as_deref(),
//!     Some("username must have at least 3 characters")
//! );
//! ```
//!
//! ## Layout
//!
//! - [`foundation`]: [`Validate`](foundation::Validate), [`ValidationError`](foundation::ValidationError)
//!   and the loose value semantics of form inputs
//! - [`validators`]: `required`, `min`, `max`, `minLength`, `maxLength`,
//!   `pattern`, `number`, `email`
//! - [`combinators`]: [`And`](combinators::And), [`WithCode`](combinators::WithCode)
//! - [`messages`]: catalogs, the process-wide catalog, locale tables
//! - [`checks`]: validators that return rendered messages
//! - [`field`]: the field decorator
//!
//! Use the [`validator!`] macro for custom validators, or implement
//! [`Validate`](foundation::Validate) manually.

// ValidationError carries its parameters inline; boxing it would add an
// allocation to every failing check.
#![allow(clippy::result_large_err)]

pub mod checks;
pub mod combinators;
pub mod field;
pub mod foundation;
mod macros;
pub mod messages;
pub mod prelude;
pub mod validators;
