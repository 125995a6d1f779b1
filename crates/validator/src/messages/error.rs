/// Error type for message catalog configuration.
///
/// Validation failures are never reported through this type; they are
/// [`ValidationError`](crate::foundation::ValidationError) values.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A message table or locale set is not valid JSON of the expected shape.
    #[error("failed to parse message table: {0}")]
    Json(#[from] serde_json::Error),

    /// A placeholder syntax cannot be used to tokenize templates.
    #[error("invalid placeholder pattern: {reason}")]
    InvalidPlaceholderPattern { reason: String },

    /// A locale set has no table for the requested locale.
    #[error("unknown locale `{locale}`")]
    UnknownLocale { locale: String },
}

impl CatalogError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Json(_) => "CATALOG_JSON",
            Self::InvalidPlaceholderPattern { .. } => "CATALOG_PLACEHOLDER",
            Self::UnknownLocale { .. } => "CATALOG_UNKNOWN_LOCALE",
        }
    }
}
