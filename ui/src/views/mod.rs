use dioxus::prelude::*;

use crate::core::{catalog, ResultType};

mod gallery;
pub use gallery::Gallery;

mod result;
pub use result::ResultScreen;

mod start;
pub use start::StartScreen;

/// Subscribe to the shell's language signal (if provided) so the view
/// re-renders when the locale changes elsewhere. Returns the language code.
fn use_lang_marker() -> String {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    lang_code.as_ref().map(|code| code()).unwrap_or_default()
}

/// Catalogue descriptor for a raw result id, rebuilt whenever the shell's
/// language signal changes.
///
/// Route components hand the descriptor to [`ResultScreen`] as a prop; reading
/// the language here keeps its archetype copy in step with the rest of the view.
pub fn use_localized_result(id: &str) -> ResultType {
    let lang = use_lang_marker();
    let result_type = catalog::result_type_for_id(id);
    tracing::debug!(%id, %lang, resolved = %result_type.id, "result descriptor built");
    result_type
}
