//! Localized strings for `farmsathi-ui`.
//!
//! Built on `i18n-embed` (language negotiation + loading), `rust-embed`
//! (compile-time embedding of `.ftl` files) and `i18n-embed-fl` (`fl!` lookups
//! checked against the fallback locale at compile time).
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/farmsathi-ui.ftl   (fallback/reference)
//!   hi-IN/farmsathi-ui.ftl
//! ```
//!
//! Runtime page translation into further languages is handled by the hosted
//! widget (see [`crate::translate`]); the bundles here only cover the UI chrome
//! and the initial render.
//!
//! Desktop negotiates against the OS locale list, wasm against
//! `navigator.languages`.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
///     t!("nav-home")
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup goes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "farmsathi-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the user's preferred languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "i18n languages selected"),
            Err(err) => tracing::warn!(%err, "failed selecting languages; using fallback"),
        }
    });
}

/// Init, then pin the fallback locale so assertions do not depend on the host locale.
#[cfg(test)]
pub(crate) fn init_fallback() {
    init();
    let fallback: LanguageIdentifier = "en-US".parse().unwrap();
    i18n_embed::select(&*LOADER, &Localizations, &[fallback]).unwrap();
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
