//! Loose value semantics for raw field values.
//!
//! Form inputs arrive as [`serde_json::Value`]. Validators treat them the way
//! browser form code does: a value is either *truthy* or *falsy*, numbers are
//! read with leading-prefix float parsing, and every value has a display form
//! used for length checks and message interpolation.

use std::borrow::Cow;

use serde_json::Value;

/// Extension methods giving [`Value`] form-input semantics.
pub trait ValueExt {
    /// Returns `false` for `null`, `false`, `0`, and `""`; `true` otherwise.
    fn is_truthy(&self) -> bool;

    /// Reads the value as a number.
    ///
    /// Strings use [`parse_float`]; JSON numbers map to themselves; every
    /// other value yields `NaN`.
    fn parse_number(&self) -> f64;

    /// The text a user would see for this value.
    fn display_text(&self) -> Cow<'_, str>;
}

impl ValueExt for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn parse_number(&self) -> f64 {
        match self {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => parse_float(s),
            _ => f64::NAN,
        }
    }

    fn display_text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s),
            Value::Null => Cow::Borrowed("null"),
            Value::Bool(true) => Cow::Borrowed("true"),
            Value::Bool(false) => Cow::Borrowed("false"),
            Value::Number(n) => {
                if n.is_i64() || n.is_u64() {
                    Cow::Owned(n.to_string())
                } else {
                    Cow::Owned(format_number(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            Value::Array(_) | Value::Object(_) => Cow::Owned(self.to_string()),
        }
    }
}

/// Returns the number when it is usable as a check input.
///
/// `0` and `NaN` count as "no number", so range checks skip them.
#[inline]
#[must_use]
pub fn truthy_number(n: f64) -> Option<f64> {
    if n == 0.0 || n.is_nan() { None } else { Some(n) }
}

/// Formats a float without a trailing `.0` for whole numbers.
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        let text = if n.is_sign_positive() { "Infinity" } else { "-Infinity" };
        text.to_owned()
    } else {
        // f64's Display already drops the fraction for whole numbers.
        n.to_string()
    }
}

/// Parses the longest numeric prefix of `input`.
///
/// Leading whitespace is ignored, then an optional sign, digits with an
/// optional fraction, and an optional exponent are consumed. Anything after
/// the prefix is ignored. Returns `NaN` when no digits are found.
///
/// ```
/// use formcheck_validator::foundation::parse_float;
///
/// assert_eq!(parse_float("12.5kg"), 12.5);
/// assert_eq!(parse_float("  -3"), -3.0);
/// assert!(parse_float("abc").is_nan());
/// ```
#[must_use]
pub fn parse_float(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count())
}
