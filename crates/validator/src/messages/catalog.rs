//! The message catalog: validator keys to message templates.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::foundation::ValidationError;
use crate::messages::{CatalogError, InterpolationParams, PlaceholderSyntax, Template};

/// A plain message table as supplied by callers: key to template text.
///
/// Keys are validator keys (`"required"`) or field-qualified keys
/// (`"required.username"`).
pub type Messages = IndexMap<String, String>;

/// Built-in English messages.
pub const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    ("required", "{name} is required"),
    ("min", "{name} must be greater than {minValue}"),
    ("max", "{name} must be less than {maxValue}"),
    ("minLength", "{name} must have at least {minLength} characters"),
    ("maxLength", "{name} must have less than {maxLength} characters"),
    ("pattern", "{name} does not match the pattern {pattern}"),
    ("number", "{name} must be a number"),
    ("email", "{name} is not a valid email"),
];

/// Resolves validator keys to interpolated messages.
///
/// A catalog is an explicit configuration object: validators and decorators
/// take it by reference, so several catalogs (one per locale or tenant) can
/// be used side by side. The process-wide catalog lives in
/// [`global`](crate::messages::global).
///
/// # Examples
///
/// ```
/// use formcheck_validator::messages::{InterpolationParams, MessageCatalog};
///
/// let messages = MessageCatalog::with_overrides([
///     ("required", "{name}!!"),
///     ("required.username", "Pick a username"),
/// ]);
///
/// let params = InterpolationParams::new().with("name", "X");
/// assert_eq!(messages.resolve_error_message("required", Some("X"), &params), "X!!");
/// assert_eq!(
///     messages.resolve_error_message("required", Some("username"), &params),
///     "Pick a username"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: IndexMap<String, Template>,
    syntax: PlaceholderSyntax,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl MessageCatalog {
    /// The built-in English catalog.
    #[must_use]
    pub fn english() -> Self {
        Self::with_overrides(std::iter::empty::<(String, String)>())
    }

    /// Built-in defaults merged with `overrides`; an override replaces the
    /// default for its key. Unknown keys are kept.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let syntax = PlaceholderSyntax::default();
        let mut entries: IndexMap<String, Template> = DEFAULT_MESSAGES
            .iter()
            .map(|(key, text)| ((*key).to_owned(), Template::parse(*text, &syntax)))
            .collect();

        let mut overridden = 0usize;
        for (key, text) in overrides {
            entries.insert(key.into(), Template::parse(text, &syntax));
            overridden += 1;
        }
        debug!(entries = entries.len(), overridden, "message catalog built");

        Self { entries, syntax }
    }

    /// Parses a JSON object of overrides and applies it over the defaults.
    ///
    /// ```
    /// use formcheck_validator::messages::MessageCatalog;
    ///
    /// let messages = MessageCatalog::from_json_str(r#"{"number": "{name}: digits only"}"#)?;
    /// assert_eq!(messages.get_error_message("number", None).unwrap().source(), "{name}: digits only");
    /// # Ok::<(), formcheck_validator::messages::CatalogError>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let overrides: Messages = serde_json::from_str(json)?;
        Ok(Self::with_overrides(overrides))
    }

    /// The placeholder syntax templates are parsed with.
    pub fn syntax(&self) -> &PlaceholderSyntax {
        &self.syntax
    }

    /// Replaces the placeholder syntax and re-parses every template.
    pub fn set_placeholder_syntax(&mut self, syntax: PlaceholderSyntax) {
        if syntax == self.syntax {
            return;
        }
        for template in self.entries.values_mut() {
            *template = Template::parse(template.source(), &syntax);
        }
        debug!(
            open = syntax.open(),
            close = syntax.close(),
            "placeholder syntax changed"
        );
        self.syntax = syntax;
    }

    /// Builder form of [`set_placeholder_syntax`](Self::set_placeholder_syntax).
    #[must_use = "builder methods must be chained or built"]
    pub fn with_placeholder_syntax(mut self, syntax: PlaceholderSyntax) -> Self {
        self.set_placeholder_syntax(syntax);
        self
    }

    /// Adds or replaces a single message.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let template = Template::parse(text, &self.syntax);
        self.entries.insert(key.into(), template);
    }

    /// Returns true when a message is registered under exactly `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Registered keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no messages are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the template for `key`.
    ///
    /// With a (non-empty) field name, `key.field` is tried first and the
    /// plain `key` is the fallback. An empty qualified template counts as
    /// absent.
    #[must_use]
    pub fn get_error_message(&self, key: &str, field: Option<&str>) -> Option<&Template> {
        if let Some(field) = field.filter(|f| !f.is_empty()) {
            let qualified = format!("{key}.{field}");
            let template = self
                .entries
                .get(&qualified)
                .filter(|t| !t.source().is_empty());
            if template.is_some() {
                return template;
            }
        }
        self.entries.get(key)
    }

    /// Parses `template` under this catalog's syntax and fills it.
    #[must_use]
    pub fn interpolate(&self, template: &str, params: &InterpolationParams) -> String {
        Template::parse(template, &self.syntax).render(params, &self.syntax)
    }

    /// Looks up and fills the message for `key`.
    ///
    /// A missing or empty message renders as the key itself, so a failing
    /// validator never yields an empty message.
    #[must_use]
    pub fn resolve_error_message(
        &self,
        key: &str,
        field: Option<&str>,
        params: &InterpolationParams,
    ) -> String {
        match self
            .get_error_message(key, field)
            .filter(|t| !t.source().is_empty())
        {
            Some(template) => template.render(params, &self.syntax),
            None => {
                warn!(key, field, "no message registered for validator key");
                key.to_owned()
            }
        }
    }

    /// Renders a structured validation error.
    #[must_use]
    pub fn render(&self, error: &ValidationError) -> String {
        self.resolve_error_message(&error.code, error.field_name(), &error.params)
    }
}
