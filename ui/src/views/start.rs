use dioxus::prelude::*;

use crate::core::format;
use crate::t;

struct ScannerBar {
    label: String,
    fill_percent: f64,
    reading: &'static str,
    tone: &'static str,
}

fn scanner_bars() -> [ScannerBar; 2] {
    [
        ScannerBar {
            label: t!("start-scanner-tact"),
            fill_percent: 95.0,
            reading: "99.9%",
            tone: "scanner__fill--pink",
        },
        ScannerBar {
            label: t!("start-scanner-skill"),
            fill_percent: 60.0,
            reading: "60.5%",
            tone: "scanner__fill--blue",
        },
    ]
}

/// Landing view. Calls `on_start` once per press of the start button.
#[component]
pub fn StartScreen(on_start: EventHandler<()>) -> Element {
    let lang_marker = super::use_lang_marker();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page start-screen",
            div { class: "start-screen__blob start-screen__blob--purple", aria_hidden: "true" }
            div { class: "start-screen__blob start-screen__blob--pink", aria_hidden: "true" }

            div { class: "start-screen__hero",
                div { class: "start-screen__badge",
                    span { class: "start-screen__badge-icon", aria_hidden: "true", "✨" }
                    span { {t!("start-badge")} }
                }

                div { class: "start-screen__title-wrap",
                    h1 { class: "start-screen__title",
                        {t!("start-title-line-1")}
                        br {}
                        span { class: "gradient-text", {t!("start-title-line-2")} }
                    }
                    span { class: "start-screen__title-icon", aria_hidden: "true", "💬" }
                }

                p { class: "start-screen__tagline",
                    {t!("start-tagline-1")}
                    br {}
                    span { class: "start-screen__highlight", {t!("start-tagline-highlight")} }
                    " "
                    {t!("start-tagline-2")}
                }
            }

            ScannerCard {}

            button {
                r#type: "button",
                class: "button button--primary start-screen__cta",
                onclick: move |_| on_start.call(()),
                {t!("start-button")}
                span { class: "start-screen__cta-arrow", aria_hidden: "true", "→" }
            }

            p { class: "start-screen__footnote", {t!("start-footnote")} }
        }
    }
}

/// Decorative "love scanner" window with two fixed readings.
#[component]
fn ScannerCard() -> Element {
    rsx! {
        div { class: "scanner",
            div { class: "scanner__titlebar",
                div { class: "scanner__lights", aria_hidden: "true",
                    span { class: "scanner__light scanner__light--red" }
                    span { class: "scanner__light scanner__light--yellow" }
                    span { class: "scanner__light scanner__light--green" }
                }
                span { class: "scanner__name", {t!("start-scanner-name")} }
            }
            div { class: "scanner__bars",
                for bar in scanner_bars() {
                    div { class: "scanner__track",
                        div { class: "scanner__fill {bar.tone}", style: format::format_bar_width(bar.fill_percent) }
                    }
                    div { class: "scanner__reading",
                        span { "{bar.label}" }
                        span { "{bar.reading}" }
                    }
                }
            }
        }
    }
}
