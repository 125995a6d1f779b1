//! Process-wide message catalog.
//!
//! Validators that are not handed a catalog explicitly resolve messages
//! against the catalog installed here. Reads are lock-free; writers swap in
//! a whole new catalog, so concurrent re-initialization is last-writer-wins.
//!
//! ```
//! use formcheck_validator::messages::{global, InterpolationParams};
//!
//! global::init([("required", "{name} fehlt")]);
//! let params = InterpolationParams::new().with("name", "Alter");
//! assert_eq!(global::resolve_error_message("required", None, &params), "Alter fehlt");
//! # global::reset();
//! ```

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use tracing::debug;

use crate::messages::{CatalogError, InterpolationParams, MessageCatalog, PlaceholderSyntax};

static CATALOG: LazyLock<ArcSwap<MessageCatalog>> =
    LazyLock::new(|| ArcSwap::from_pointee(MessageCatalog::english()));

/// Snapshot of the installed catalog.
pub fn current() -> Arc<MessageCatalog> {
    CATALOG.load_full()
}

/// Replaces the installed catalog with the English defaults merged with
/// `overrides`. The current placeholder syntax is kept.
pub fn init<I, K, V>(overrides: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let fresh = MessageCatalog::with_overrides(overrides);
    CATALOG.rcu(|installed| {
        Arc::new(
            fresh
                .clone()
                .with_placeholder_syntax(installed.syntax().clone()),
        )
    });
    debug!("global message catalog initialized");
}

/// Installs `catalog` as-is, syntax included.
pub fn install(catalog: MessageCatalog) {
    CATALOG.store(Arc::new(catalog));
    debug!("global message catalog installed");
}

/// Changes the placeholder syntax of the installed catalog.
pub fn set_interpolation_pattern(syntax: PlaceholderSyntax) {
    CATALOG.rcu(|installed| {
        Arc::new(
            MessageCatalog::clone(installed).with_placeholder_syntax(syntax.clone()),
        )
    });
}

/// Changes the placeholder syntax from a "parameter name to placeholder
/// text" function, e.g. `|name| format!("${{{name}}}")`.
pub fn set_interpolation_pattern_fn<F>(pattern: F) -> Result<(), CatalogError>
where
    F: Fn(&str) -> String,
{
    let syntax = PlaceholderSyntax::from_pattern_fn(pattern)?;
    set_interpolation_pattern(syntax);
    Ok(())
}

/// Restores the English defaults and the `{name}` syntax.
pub fn reset() {
    install(MessageCatalog::english());
}

/// Template text registered for `key`, preferring `key.field`.
pub fn get_error_message(key: &str, field: Option<&str>) -> Option<String> {
    CATALOG
        .load()
        .get_error_message(key, field)
        .map(|template| template.source().to_owned())
}

/// Fills `template` under the installed placeholder syntax.
pub fn interpolate(template: &str, params: &InterpolationParams) -> String {
    CATALOG.load().interpolate(template, params)
}

/// Looks up and fills the message for `key`.
pub fn resolve_error_message(
    key: &str,
    field: Option<&str>,
    params: &InterpolationParams,
) -> String {
    CATALOG.load().resolve_error_message(key, field, params)
}

/// Serializes tests that touch the process-wide catalog.
#[cfg(test)]
pub(crate) static TEST_LOCK: LazyLock<parking_lot::Mutex<()>> =
    LazyLock::new(|| parking_lot::Mutex::new(()));

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(name: &str) -> InterpolationParams {
        InterpolationParams::new().with("name", name.to_owned())
    }

    #[test]
    fn init_merges_overrides() {
        let _guard = TEST_LOCK.lock();
        reset();

        init([("required", "{name}!!")]);
        assert_eq!(resolve_error_message("required", None, &named("X")), "X!!");
        assert_eq!(
            resolve_error_message("number", None, &named("X")),
            "X must be a number"
        );

        // Re-initialization starts again from the defaults.
        init([("number", "{name}?")]);
        assert_eq!(
            resolve_error_message("required", None, &named("X")),
            "X is required"
        );
        reset();
    }

    #[test]
    fn init_keeps_syntax() {
        let _guard = TEST_LOCK.lock();
        reset();

        set_interpolation_pattern_fn(|name| format!("${{{name}}}")).unwrap();
        init([("required", "${name} is required")]);
        assert_eq!(
            resolve_error_message("required", None, &named("Age")),
            "Age is required"
        );
        assert_eq!(current().syntax().open(), "${");
        reset();
    }

    #[test]
    fn interpolate_uses_installed_syntax() {
        let _guard = TEST_LOCK.lock();
        reset();

        set_interpolation_pattern(PlaceholderSyntax::new("%", "%").unwrap());
        assert_eq!(interpolate("%name% / {name}", &named("N")), "N / {name}");
        reset();
        assert_eq!(interpolate("%name% / {name}", &named("N")), "%name% / N");
    }

    #[test]
    fn get_error_message_returns_source() {
        let _guard = TEST_LOCK.lock();
        reset();

        init([("required.username", "Pick a username")]);
        assert_eq!(
            get_error_message("required", Some("username")).as_deref(),
            Some("Pick a username")
        );
        assert_eq!(
            get_error_message("required", None).as_deref(),
            Some("{name} is required")
        );
        assert_eq!(get_error_message("upperCase", None), None);
        reset();
    }

    #[test]
    fn bad_pattern_fn_leaves_syntax() {
        let _guard = TEST_LOCK.lock();
        reset();

        assert!(set_interpolation_pattern_fn(|_| "fixed".to_owned()).is_err());
        assert_eq!(current().syntax(), &PlaceholderSyntax::default());
    }
}
