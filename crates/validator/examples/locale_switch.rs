//! Switching the message language of a decorated field at runtime.
//!
//! Run with `RUST_LOG=formcheck_validator=trace` to see catalog swaps and
//! rule outcomes.

use formcheck_validator::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

const LOCALES: &str = r#"{
    "en": {
        "upperCase": "{name} must be upper case"
    },
    "de": {
        "required": "{name} wird benötigt",
        "minLength": "{name} muss mindestens {minLength} Zeichen lang sein",
        "email": "{name} ist keine gültige E-Mail-Adresse",
        "upperCase": "{name} darf nur Großbuchstaben enthalten"
    }
}"#;

fn main() -> Result<(), CatalogError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let locales = LocaleSet::from_json_str(LOCALES)?;

    let upper_case = rule(|messages, name, value, _param| {
        let text = value.display_text();
        (value.is_truthy() && text.to_uppercase() != text).then(|| {
            let params = InterpolationParams::new().with("name", name.map(str::to_owned));
            messages.resolve_error_message("upperCase", name, &params)
        })
    });

    let field = with_validator()
        .conditional("required", BuiltinRule::Required)
        .conditional("minLength", BuiltinRule::MinLength)
        .conditional("upperCase", upper_case)
        .wrap(|props: Props, validator: FieldValidator| {
            let value = props.get("value").cloned().unwrap_or_default();
            let verdict = validator.validate(&value).unwrap_or_else(|| "valid".to_owned());
            format!("{:>10} | {verdict}", value.display_text())
        });

    let instances = [
        Props::new().with("name", "Code").with("required", true),
        Props::new()
            .with("name", "Code")
            .with("value", "ab")
            .with("minLength", 3),
        Props::new()
            .with("name", "Code")
            .with("value", "abc")
            .with("upperCase", true),
        Props::new()
            .with("name", "Code")
            .with("value", json!("ABC"))
            .with("upperCase", true),
    ];

    for locale in ["en", "de"] {
        locales.activate(locale)?;
        println!("[{locale}]");
        for props in &instances {
            println!("  {}", field.render(props.clone()));
        }
    }

    Ok(())
}
