use dioxus::prelude::*;

use crate::core::{platform, share, ResultType};

/// Share and restart buttons, plus the notice a share attempt may leave behind.
///
/// Share attempts are not serialised: every press starts its own attempt and
/// the UI stays interactive while one is pending.
#[component]
pub fn ResultActions(result_type: ResultType, route: String, on_restart: EventHandler<()>) -> Element {
    let notice = use_signal(|| Option::<String>::None);

    let share_handler = {
        let mut notice_signal = notice;
        move |_| {
            let result = result_type.clone();
            let route = route.clone();
            notice_signal.set(None);
            spawn(async move {
                let surface = platform::share_surface(&route);
                let outcome = share::share_result(&surface, &result).await;
                tracing::debug!(?outcome, platform = platform::Platform::current().as_str(), "share finished");
                if let Some(message) = outcome.notice() {
                    notice_signal.set(Some(message));
                }
            });
        }
    };

    rsx! {
        div { class: "result-actions",
            button {
                r#type: "button",
                class: "button button--share",
                onclick: share_handler,
                span { class: "button__icon", aria_hidden: "true", "💬" }
                {crate::t!("result-share")}
            }
            button {
                r#type: "button",
                class: "button button--ghost",
                onclick: move |_| on_restart.call(()),
                span { class: "button__icon", aria_hidden: "true", "↺" }
                {crate::t!("result-restart")}
            }
        }

        if let Some(message) = notice() {
            p { class: "result-actions__notice", role: "status", "{message}" }
        }
    }
}
