//! Regular expression validator

use regex::Regex;

use crate::foundation::{ValidationError, ValueExt};

crate::validator! {
    /// Validates that a value's display text matches a regular expression.
    ///
    /// The match is unanchored; anchor the pattern with `^...$` to require a
    /// full match.
    ///
    /// # Examples
    ///
    /// ```
    /// use formcheck_validator::foundation::{FieldInput, Validate};
    /// use formcheck_validator::validators::pattern;
    /// use serde_json::json;
    ///
    /// let validator = pattern(r"^[a-z0-9_\-]+$")?;
    /// assert!(validator.validate(&FieldInput::new(None, &json!("abcd123"))).is_ok());
    /// assert!(validator.validate(&FieldInput::new(None, &json!("aBcd123"))).is_err());
    /// # Ok::<(), regex::Error>(())
    /// ```
    pub Pattern { regex: Regex };
    rule(self, input) {
        !input.is_present() || self.regex.is_match(&input.value.display_text())
    }
    error(self, input) {
        ValidationError::new("pattern").with_param("pattern", self.regex.as_str().to_owned())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
    fn pattern(pattern: &str) -> regex::Error;
}

impl Pattern {
    /// Wraps an already compiled expression.
    #[must_use]
    pub fn from_regex(regex: Regex) -> Self {
        Self { regex }
    }

    /// The expression source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
