#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config,
};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::{catalog, ResultKind, Score};
use ui::i18n;
use ui::views::{use_localized_result, Gallery, ResultScreen, StartScreen};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Start {},
    #[route("/gallery")]
    Catalogue {},
    #[route("/result/:kind/:l/:e")]
    SharedResult { kind: String, l: f64, e: f64 },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    i18n::init();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!(
                            "{} – v{}",
                            i18n::lookup("app-brand"),
                            env!("CARGO_PKG_VERSION")
                        ))
                        .with_inner_size(LogicalSize::new(480.0, 900.0)),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // AppHeader updates this on language selection.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount of the routed subtree on language change.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Header plus routed content for the desktop build.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppHeader {}
        main { class: "app-main", Outlet::<Route> {} }
    }
}

#[component]
fn Start() -> Element {
    let nav = navigator();
    rsx! {
        StartScreen {
            on_start: move |_| {
                nav.push(Route::Catalogue {});
            },
        }
    }
}

#[component]
fn Catalogue() -> Element {
    let nav = navigator();
    rsx! {
        Gallery {
            on_select: move |kind: ResultKind| {
                let score = catalog::preview_score(kind);
                nav.push(Route::SharedResult {
                    kind: kind.slug().to_string(),
                    l: score.l,
                    e: score.e,
                });
            },
            on_back: move |_| {
                nav.push(Route::Start {});
            },
        }
    }
}

#[component]
fn SharedResult(kind: String, l: f64, e: f64) -> Element {
    let nav = navigator();
    let result_type = use_localized_result(&kind);

    rsx! {
        ResultScreen {
            score: Score::new(l, e),
            result_type,
            on_restart: move |_| {
                nav.push(Route::Start {});
            },
        }
    }
}
