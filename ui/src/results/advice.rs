use dioxus::prelude::*;

/// "Prescription" panel: one row per advice string, in the order given.
#[component]
pub fn PrescriptionPanel(advice: Vec<String>) -> Element {
    rsx! {
        section { class: "prescription",
            div { class: "prescription__glow", aria_hidden: "true" }

            div { class: "prescription__header",
                span { class: "prescription__icon", aria_hidden: "true", "📋" }
                h3 { class: "prescription__title", {crate::t!("result-prescription-title")} }
            }

            ul { class: "prescription__items",
                for (index, tip) in advice.iter().enumerate() {
                    li { key: "{index}", class: "prescription__item",
                        span { class: "prescription__check", aria_hidden: "true", "✔" }
                        p { class: "prescription__text", "{tip}" }
                    }
                }
            }

            p { class: "prescription__footnote", {crate::t!("result-prescription-footnote")} }
        }
    }
}
