//! Internationalization (i18n) support for `flirtquiz-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   ko-KR/flirtquiz-ui.ftl   (fallback/reference)
//!   en-US/flirtquiz-ui.ftl   (additional locale)
//! ```
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! crate::i18n::init(); // idempotent
//! let label = t!("start-button");
//! ```
//!
//! Archetype copy is looked up with runtime-built keys (`result-<kind>-title`),
//! which the `fl!` macro cannot check; those go through [`lookup`].
//!
//! Platform notes:
//! - Desktop: uses `DesktopLanguageRequester` (OS locale list).
//! - Web/WASM: uses `WebLanguageRequester` (`navigator.languages`).
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Ergonomic translation macro.
/// Examples:
///     t!("start-button")
///     t!("result-score-badge", score = 72)
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "flirtquiz-ui";

/// Fallback locale; its bundle is the reference key set.
pub const FALLBACK_LANGUAGE: &str = "ko-KR";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE
        .parse()
        .expect("valid fallback language identifier");
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    // Bidi isolation marks would leak into share text and clipboard payloads.
    loader.set_use_isolating(false);
    loader
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "i18n languages selected"),
            Err(err) => tracing::warn!("failed selecting languages ({err}); continuing with fallback"),
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Language currently in effect (first entry of the loader's negotiated list).
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Look up a message whose id is only known at runtime.
pub fn lookup(key: &str) -> String {
    LOADER.get(key)
}

/// Whether `key` exists in the active bundles (or the fallback).
pub fn has_message(key: &str) -> bool {
    LOADER.has(key)
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
