use dioxus::prelude::*;

use crate::core::{derive_axes, share, ResultType, Score};
use crate::results::{PrescriptionPanel, ResultActions, ResultCard};

/// Result view for a finished quiz.
///
/// Axes are re-derived from `score` on every render; `on_restart` is called
/// with no arguments when the restart button is pressed.
#[component]
pub fn ResultScreen(score: Score, result_type: ResultType, on_restart: EventHandler<()>) -> Element {
    let lang_marker = super::use_lang_marker();
    let axes = derive_axes(&score).to_vec();
    let route = share::result_path(result_type.id, &score);

    #[cfg(debug_assertions)]
    tracing::debug!(kind = %result_type.id, l = score.l, e = score.e, "result render");

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page result-screen",
            ResultCard { result_type: result_type.clone(), axes }
            ResultActions { result_type: result_type.clone(), route, on_restart }
            PrescriptionPanel { advice: result_type.advice.clone() }
        }
    }
}
