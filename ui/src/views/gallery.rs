use dioxus::prelude::*;

use crate::core::{catalog, ResultKind};
use crate::t;

/// Preview list of every archetype; the host decides where a selection leads.
#[component]
pub fn Gallery(on_select: EventHandler<ResultKind>, on_back: EventHandler<()>) -> Element {
    let lang_marker = super::use_lang_marker();
    let entries = catalog::all();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page gallery",
            h1 { {t!("gallery-title")} }
            p { {t!("gallery-intro")} }

            ul { class: "gallery__items",
                for entry in entries {
                    li { key: "{entry.id.slug()}", class: "gallery__item",
                        button {
                            r#type: "button",
                            class: "gallery__button {entry.id.banner_class()}",
                            onclick: move |_| on_select.call(entry.id),
                            span { class: "gallery__glyph", aria_hidden: "true", "{entry.id.glyph()}" }
                            span { class: "gallery__title", "{entry.title}" }
                            span { class: "gallery__subtitle", "{entry.subtitle}" }
                        }
                    }
                }
            }

            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| on_back.call(()),
                {t!("gallery-back")}
            }
        }
    }
}
