//! Per-locale override tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::messages::{CatalogError, MessageCatalog, Messages, global};

/// Override tables keyed by locale tag.
///
/// Each table is applied over the English defaults, so a locale only has to
/// list the messages it translates.
///
/// # Examples
///
/// ```
/// use formcheck_validator::messages::LocaleSet;
///
/// let locales = LocaleSet::from_json_str(r#"{
///     "en": {},
///     "de": { "required": "{name} wird benötigt" }
/// }"#)?;
///
/// let german = locales.catalog_for("de")?;
/// assert_eq!(
///     german.get_error_message("required", None).map(|t| t.source()),
///     Some("{name} wird benötigt")
/// );
/// assert!(locales.catalog_for("fr").is_err());
/// # Ok::<(), formcheck_validator::messages::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleSet {
    tables: IndexMap<String, Messages>,
}

impl LocaleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the table for `locale`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: impl Into<String>, messages: Messages) -> Self {
        self.tables.insert(locale.into(), messages);
        self
    }

    /// Parses a JSON object of locale tag to message table.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Locale tags in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Override table for `locale`, if registered.
    #[must_use]
    pub fn messages(&self, locale: &str) -> Option<&Messages> {
        self.tables.get(locale)
    }

    /// Builds the catalog for `locale`.
    pub fn catalog_for(&self, locale: &str) -> Result<MessageCatalog, CatalogError> {
        let table = self.table(locale)?;
        Ok(MessageCatalog::with_overrides(
            table.iter().map(|(key, text)| (key.clone(), text.clone())),
        ))
    }

    /// Re-initializes the process-wide catalog with the table for `locale`.
    ///
    /// The installed placeholder syntax is kept.
    pub fn activate(&self, locale: &str) -> Result<(), CatalogError> {
        let table = self.table(locale)?;
        global::init(table.iter().map(|(key, text)| (key.clone(), text.clone())));
        debug!(locale, "locale activated");
        Ok(())
    }

    fn table(&self, locale: &str) -> Result<&Messages, CatalogError> {
        self.tables
            .get(locale)
            .ok_or_else(|| CatalogError::UnknownLocale {
                locale: locale.to_owned(),
            })
    }
}
