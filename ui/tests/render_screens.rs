//! Server-side renders of the screens, checked for the content they must show.

use dioxus::prelude::*;
use ui::core::{catalog, ResultKind, Score};
use ui::i18n;
use ui::views::{Gallery, ResultScreen, StartScreen};

fn render(app: fn() -> Element) -> String {
    i18n::init();
    i18n::set_language("ko-KR").expect("ko-KR is embedded");
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn start_app() -> Element {
    rsx! { StartScreen { on_start: move |_| {} } }
}

fn fox_app() -> Element {
    rsx! {
        ResultScreen {
            score: Score::new(80.0, 60.0),
            result_type: catalog::result_type(ResultKind::Fox),
            on_restart: move |_| {},
        }
    }
}

fn unknown_app() -> Element {
    rsx! {
        ResultScreen {
            score: Score::default(),
            result_type: catalog::result_type_for_id("DRAGON"),
            on_restart: move |_| {},
        }
    }
}

fn gallery_app() -> Element {
    rsx! { Gallery { on_select: move |_| {}, on_back: move |_| {} } }
}

#[test]
fn start_screen_shows_cta_and_scanner() {
    let html = render(start_app);

    assert!(html.contains("start-screen__cta"));
    assert!(html.contains(&i18n::lookup("start-button")));
    assert!(html.contains(&i18n::lookup("start-title-line-1")));
    assert!(html.contains("99.9%"));
    assert!(html.contains("60.5%"));
    assert!(html.contains("width: 95%"));
}

#[test]
fn result_screen_shows_descriptor_and_advice_in_order() {
    let html = render(fox_app);
    let fox = catalog::result_type(ResultKind::Fox);

    assert!(html.contains(&fox.title));
    assert!(html.contains(&fox.subtitle));
    assert!(html.contains(&fox.description));
    assert!(html.contains("🦊"));
    assert!(html.contains("result-banner--fox"));
    assert!(html.contains("result-card__badge text-rose-500"));
    assert!(html.contains("92"));

    let positions: Vec<usize> = fox
        .advice
        .iter()
        .map(|tip| html.find(tip.as_str()).unwrap_or_else(|| panic!("missing advice {tip}")))
        .collect();
    assert_eq!(positions.len(), 3);
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn result_screen_offers_share_and_restart() {
    let html = render(fox_app);

    assert!(html.contains("button--share"));
    assert!(html.contains(&i18n::lookup("result-share")));
    assert!(html.contains(&i18n::lookup("result-restart")));
    assert!(!html.contains("result-actions__notice"));
}

#[test]
fn radar_chart_labels_every_axis() {
    let html = render(fox_app);

    assert_eq!(html.matches("class=\"radar-chart__label\"").count(), 5);
    for label in ["axis-directness", "axis-tact", "axis-manners", "axis-empathy", "axis-humor"] {
        assert!(html.contains(&i18n::lookup(label)), "missing {label}");
    }
}

#[test]
fn unknown_result_uses_fallback_presentation() {
    let html = render(unknown_app);

    assert!(html.contains("❓"));
    assert!(html.contains("result-banner--unknown"));
    assert!(html.contains(&i18n::lookup("result-unknown-title")));
    assert_eq!(html.matches("class=\"prescription__item\"").count(), 1);
}

#[test]
fn gallery_lists_every_archetype() {
    let html = render(gallery_app);

    assert_eq!(html.matches("class=\"gallery__item\"").count(), ResultKind::ARCHETYPES.len());
    for kind in ResultKind::ARCHETYPES {
        assert!(html.contains(kind.glyph()), "missing glyph for {kind:?}");
    }
}
