//! Message templates and placeholder substitution.
//!
//! Templates are parsed once into literal and placeholder segments under a
//! [`PlaceholderSyntax`]. Rendering is a single pass over those segments, so
//! substituted text is never re-scanned for placeholders.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::ValueExt;
use crate::messages::CatalogError;

// ============================================================================
// PLACEHOLDER SYNTAX
// ============================================================================

/// Delimiters that surround a parameter name inside a template.
///
/// The default is `{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceholderSyntax {
    open: Cow<'static, str>,
    close: Cow<'static, str>,
}

impl Default for PlaceholderSyntax {
    fn default() -> Self {
        Self {
            open: Cow::Borrowed("{"),
            close: Cow::Borrowed("}"),
        }
    }
}

impl PlaceholderSyntax {
    // Never a legal parameter name character, so it cannot clash with the
    // decoration a pattern function adds around it.
    const PROBE: &'static str = "\u{1f}probe\u{1f}";

    /// Creates a syntax from an opening and a closing delimiter.
    ///
    /// An empty closing delimiter means the name runs until the first
    /// character other than a letter, digit or `_` (`:name` style), so
    /// trailing punctuation is never part of the name.
    pub fn new(
        open: impl Into<Cow<'static, str>>,
        close: impl Into<Cow<'static, str>>,
    ) -> Result<Self, CatalogError> {
        let open = open.into();
        if open.is_empty() {
            return Err(CatalogError::InvalidPlaceholderPattern {
                reason: "opening delimiter must not be empty".to_owned(),
            });
        }
        Ok(Self {
            open,
            close: close.into(),
        })
    }

    /// Derives the delimiters from a function mapping a parameter name to its
    /// placeholder text, e.g. `|name| format!("${{{name}}}")`.
    pub fn from_pattern_fn<F>(pattern: F) -> Result<Self, CatalogError>
    where
        F: Fn(&str) -> String,
    {
        let rendered = pattern(Self::PROBE);
        let mut found = rendered.match_indices(Self::PROBE);
        let Some((start, _)) = found.next() else {
            return Err(CatalogError::InvalidPlaceholderPattern {
                reason: "pattern function does not embed the parameter name".to_owned(),
            });
        };
        if found.next().is_some() {
            return Err(CatalogError::InvalidPlaceholderPattern {
                reason: "pattern function embeds the parameter name more than once".to_owned(),
            });
        }

        let open = rendered[..start].to_owned();
        let close = rendered[start + Self::PROBE.len()..].to_owned();
        Self::new(open, close)
    }

    /// Opening delimiter.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// Closing delimiter (possibly empty).
    pub fn close(&self) -> &str {
        &self.close
    }

    /// Placeholder text for `name` under this syntax.
    #[must_use]
    pub fn format(&self, name: &str) -> String {
        format!("{}{name}{}", self.open, self.close)
    }

    /// Splits a parameter name off the front of `after` (the text following an
    /// opening delimiter). Returns the name and the number of bytes consumed.
    fn split_name<'t>(&self, after: &'t str) -> Option<(&'t str, usize)> {
        if self.close.is_empty() {
            let len = after
                .char_indices()
                .find(|(_, c)| !is_open_name_char(*c))
                .map_or(after.len(), |(i, _)| i);
            return (len > 0).then(|| (&after[..len], len));
        }

        let end = after.find(&*self.close)?;
        let name = &after[..end];
        (!name.is_empty() && name.chars().all(is_name_char))
            .then(|| (name, end + self.close.len()))
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

fn is_open_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

// ============================================================================
// INTERPOLATION PARAMS
// ============================================================================

/// Ordered parameter map used to fill a template.
///
/// Keys are unique; inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InterpolationParams {
    entries: Vec<(Cow<'static, str>, Value)>,
}

impl InterpolationParams {
    /// Creates an empty parameter map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Appends every parameter of `other`, replacing duplicates.
    pub fn extend(&mut self, other: InterpolationParams) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Looks up a parameter.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v)
    }

    /// Iterates parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_ref(), v))
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for InterpolationParams
where
    K: Into<Cow<'static, str>>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

// ============================================================================
// TEMPLATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A message template pre-parsed into segments.
///
/// # Examples
///
/// ```
/// use formcheck_validator::messages::{InterpolationParams, PlaceholderSyntax, Template};
///
/// let syntax = PlaceholderSyntax::default();
/// let template = Template::parse("{name} must be greater than {minValue}", &syntax);
/// let params = InterpolationParams::new().with("name", "Age").with("minValue", 0);
///
/// // A falsy parameter leaves its placeholder in place.
/// assert_eq!(template.render(&params, &syntax), "Age must be greater than {minValue}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Parses `source` under `syntax`.
    ///
    /// Delimiters that do not enclose a valid parameter name stay literal.
    pub fn parse(source: impl Into<String>, syntax: &PlaceholderSyntax) -> Self {
        let source = source.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source.as_str();

        while let Some(start) = rest.find(syntax.open()) {
            literal.push_str(&rest[..start]);
            let after = &rest[start + syntax.open().len()..];
            match syntax.split_name(after) {
                Some((name, consumed)) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name.to_owned()));
                    rest = &after[consumed..];
                }
                None => {
                    literal.push_str(syntax.open());
                    rest = after;
                }
            }
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { source, segments }
    }

    /// The template text as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Parameter names referenced by this template, in order of appearance.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitutes every placeholder whose parameter is truthy.
    ///
    /// Placeholders with a falsy or missing parameter are written back as
    /// placeholder text.
    #[must_use]
    pub fn render(&self, params: &InterpolationParams, syntax: &PlaceholderSyntax) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match params.get(name) {
                    Some(value) if value.is_truthy() => out.push_str(&value.display_text()),
                    _ => out.push_str(&syntax.format(name)),
                },
            }
        }
        out
    }
}
