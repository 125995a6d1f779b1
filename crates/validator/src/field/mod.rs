//! Field decorator
//!
//! Equips an input component with a single validation callback computed from
//! the rules its field type declares and the properties each instance
//! carries.
//!
//! ```
//! use formcheck_validator::field::{BuiltinRule, FieldValidator, Props, with_validator};
//! use formcheck_validator::messages::MessageCatalog;
//! use serde_json::json;
//!
//! let text_field = with_validator()
//!     .conditional("required", BuiltinRule::Required)
//!     .conditional("minLength", BuiltinRule::MinLength)
//!     .conditional("maxLength", BuiltinRule::MaxLength)
//!     .messages(MessageCatalog::english())
//!     .wrap(|props: Props, validate: FieldValidator| {
//!         let value = props.get("value").cloned().unwrap_or_default();
//!         validate.validate(&value).unwrap_or_else(|| "valid".to_owned())
//!     });
//!
//! let props = Props::new()
//!     .with("name", "test")
//!     .with("value", "ab")
//!     .with("required", true)
//!     .with("minLength", 3);
//! assert_eq!(text_field.render(props), "test must have at least 3 characters");
//! ```

mod decorator;
mod props;
mod rule;

pub use decorator::{
    Component, FieldValidator, MessageSource, Validated, WithValidator, with_validator,
};
pub use props::Props;
pub use rule::{BuiltinRule, Rule, ValidatorRule, rule};
