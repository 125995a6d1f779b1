//! Validator combinators
//!
//! - [`And`] runs two validators in order and stops at the first failure.
//! - [`WithCode`] reports a failure under another message key.

pub mod and;
pub mod message;

pub use and::{And, and};
pub use message::{WithCode, with_code};
