use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::{catalog, ResultKind, Score};
use ui::i18n;
use ui::views::{use_localized_result, Gallery, ResultScreen, StartScreen};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Start {},
    #[route("/gallery")]
    Catalogue {},
    #[route("/result/:kind/:l/:e")]
    SharedResult { kind: String, l: f64, e: f64 },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    // Shared language code; AppHeader writes it, views subscribe to it.
    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);
    // `t!` is checked against the ui crate's bundles, so shells look up by id.
    let title = {
        let _ = lang_code();
        i18n::lookup("app-brand")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Title { "{title}" }

        Router::<Route> {}
    }
}

/// Header plus routed content for the browser build.
#[component]
fn WebShell() -> Element {
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
                nav.push(result_route(kind, catalog::preview_score(kind)));
            },
            on_back: move |_| {
                nav.push(Route::Start {});
            },
        }
    }
}

/// Result view rebuilt from its shareable path.
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

/// Route mirroring `ui::core::share::result_path`.
fn result_route(kind: ResultKind, score: Score) -> Route {
    Route::SharedResult {
        kind: kind.slug().to_string(),
        l: score.l,
        e: score.e,
    }
}
