//! Validation messages
//!
//! Maps validator keys (optionally qualified with a field name, as in
//! `required.username`) to message templates and fills them with the
//! parameters a [`ValidationError`](crate::foundation::ValidationError)
//! carries.
//!
//! - [`MessageCatalog`]: an explicit key to template table
//! - [`global`]: the process-wide catalog used by default
//! - [`LocaleSet`]: override tables per locale
//! - [`Template`] and [`PlaceholderSyntax`]: parsing and substitution

mod catalog;
mod error;
pub mod global;
mod locale;
mod template;

pub use catalog::{DEFAULT_MESSAGES, MessageCatalog, Messages};
pub use error::CatalogError;
pub use locale::LocaleSet;
pub use template::{InterpolationParams, PlaceholderSyntax, Template};
