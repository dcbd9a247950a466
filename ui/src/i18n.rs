//! Internationalization support for `startup-metrics-ui`.
//!
//! Wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/startup-metrics-ui.ftl   (fallback/reference)
//!   es-ES/startup-metrics-ui.ftl
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let label = t!("nav-dashboard");
//! ```
//!
//! To add a locale, copy `en-US/startup-metrics-ui.ftl` to
//! `i18n/<lang-id>/startup-metrics-ui.ftl`, translate every value (keep IDs
//! identical) and register it in `tests/i18n_missing_keys.rs`.
//!
//! Desktop builds ask the OS for the preferred languages
//! (`DesktopLanguageRequester`), web builds read `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared [`LOADER`]. Keys are checked
/// against the fallback bundle at compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback bundle lives at `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "startup-metrics-ui";

const FALLBACK: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring invalid language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Embedded language identifiers, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_and_spanish_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "es-ES"));
    }

    #[test]
    fn fallback_lookup_works() {
        init();
        set_language("en-US").unwrap();
        assert_eq!(fl!(&*LOADER, "nav-dashboard"), "Dashboard");
        assert_eq!(fl!(&*LOADER, "range-1y"), "Last Year");
    }

    #[test]
    fn invalid_tag_keeps_current_language() {
        init();
        set_language("en-US").unwrap();
        let before = fl!(&*LOADER, "nav-dashboard");
        assert!(set_language("not a tag!").is_ok());
        assert_eq!(fl!(&*LOADER, "nav-dashboard"), before);
    }
}
