use dioxus::prelude::*;

use crate::core::{chart::ChartAxis, ResultType};
use crate::results::RadarChart;

/// Identity-card summary: gradient banner, avatar glyph, score badge,
/// description and radar chart.
#[component]
pub fn ResultCard(result_type: ResultType, axes: Vec<ChartAxis>) -> Element {
    let kind = result_type.id;
    let gradient = kind.gradient();
    let banner_class = format!("result-card__banner {}", kind.banner_class());
    let badge_class = format!("result-card__badge {}", result_type.color);
    let badge = crate::t!("result-score-badge", score = result_type.score);

    rsx! {
        article { class: "result-card",
            div {
                class: "{banner_class}",
                "data-gradient": "{gradient.token()}",
                div { class: "result-card__texture", aria_hidden: "true" }
                p { class: "result-card__caption", {crate::t!("result-caption")} }
                h1 { class: "result-card__title", "{result_type.title}" }
            }

            div { class: "result-card__body",
                div { class: "result-card__avatar", aria_hidden: "true", "{kind.glyph()}" }

                div { class: "result-card__summary",
                    span { class: "{badge_class}", "{badge}" }
                    p { class: "result-card__subtitle", "{result_type.subtitle}" }
                }

                div { class: "result-card__description", "{result_type.description}" }

                RadarChart { axes }
            }
        }
    }
}
