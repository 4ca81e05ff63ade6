use crate::i18n;
use crate::t;
use dioxus::prelude::*;

/// App header: brand on the left, locale switcher on the right.
///
/// If the shell provided a `Signal<String>` language context, switching the
/// locale writes the new code into it so every subscribed view re-renders.
#[component]
pub fn AppHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %_lang_marker, "AppHeader render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("could not switch language to {val}: {err}"),
        }
    };

    let brand = t!("app-brand");
    let tagline = t!("app-tagline");

    rsx! {
        header {
            id: "app-header",
            class: "app-header",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__spark", aria_hidden: "true" }
                    span { class: "app-header__mark", "{brand}" }
                    span { class: "app-header__subtitle", "{tagline}" }
                }

                if show_switcher {
                    div { class: "app-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
