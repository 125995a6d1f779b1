//! Macros for creating validators with minimal boilerplate.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::validator;
//! use formcheck_validator::foundation::{Validate, ValidationError, ValueExt};
//!
//! // Unit validator (no fields)
//! validator! {
//!     pub UpperCase;
//!     rule(input) {
//!         let text = input.value.display_text();
//!         !input.is_present() || text.to_uppercase() == text
//!     }
//!     error(input) { ValidationError::new("upperCase") }
//!     fn upper_case();
//! }
//!
//! // Struct with fields
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub ExactLength { len: usize };
//!     rule(self, input) { !input.is_present() || input.char_len() == self.len }
//!     error(self, input) { ValidationError::new("exactLength").with_param("exactLength", self.len) }
//!     fn exact_length(len: usize);
//! }
//!
//! let value = serde_json::json!("abc");
//! let input = formcheck_validator::foundation::FieldInput::new(Some("code"), &value);
//! assert!(upper_case().validate(&input).is_err());
//! assert!(exact_length(3).validate(&input).is_ok());
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// The `error` block builds the bare error (key plus the validator's own
/// parameters); the generated `validate` attaches the field name and the
/// `name` / `value` parameters through
/// [`ValidationError::for_input`](crate::foundation::ValidationError::for_input).
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub Required;
///     rule(input) { input.is_present() }
///     error(input) { ValidationError::new("required") }
///     fn required();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize };
///     rule(self, input) { !input.is_present() || input.char_len() >= self.min }
///     error(self, input) { ValidationError::new("minLength").with_param("minLength", self.min) }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub Pattern { regex: Regex };
///     rule(self, input) { !input.is_present() || self.regex.is_match(&input.value.display_text()) }
///     error(self, input) { ValidationError::new("pattern").with_param("pattern", self.regex.as_str()) }
///     new(pattern: &str) -> regex::Error { Ok(Self { regex: Regex::new(pattern)? }) }
///     fn pattern(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Variant 1a: Unit validator (no fields) + factory fn ──────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit validator (no fields), no factory ───────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &self,
                $inp: &$crate::foundation::FieldInput<'_>,
            ) -> $crate::foundation::ValidationResult<()> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err(($err).for_input($inp))
                }
            }
        }
    };

    // ── Variant 3: Struct with fields + fallible new + fallible factory ──
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &$crate::foundation::FieldInput<'_>,
            ) -> $crate::foundation::ValidationResult<()> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err(($err).for_input($inp))
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &$self_,
                $inp: &$crate::foundation::FieldInput<'_>,
            ) -> $crate::foundation::ValidationResult<()> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err(($err).for_input($inp))
                }
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================
