#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that CSS selectors the shared components emit remain present in the
  theme embedded by the desktop shell: ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class, instead of shipping an
  unstyled start or result screen.

How it works:
- The theme is embedded with `include_str!` (mirrors the constant in
  `desktop/src/main.rs`) and checked for a curated set of selectors.
- If you intentionally rename or remove a selector, update the component
  markup and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--share",
    ".button--ghost",
    // Header
    ".app-header__inner",
    ".app-header__locale",
    // Start screen
    ".start-screen__title",
    ".start-screen__cta",
    ".scanner__track",
    ".scanner__fill--pink",
    ".scanner__fill--blue",
    // Result card
    ".result-card__banner",
    ".result-card__avatar",
    ".result-card__badge",
    ".result-card__description",
    ".radar-chart__svg",
    ".radar-chart__label",
    // Actions & prescription
    ".result-actions",
    ".result-actions__notice",
    ".prescription__items",
    ".prescription__item",
    ".prescription__footnote",
    // Gallery
    ".gallery__items",
    ".gallery__button",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

/// Badge colour classes the result catalogue hands out.
const BADGE_COLORS: &[&str] = &[
    "text-rose-500",
    "text-orange-500",
    "text-indigo-500",
    "text-violet-500",
    "text-red-500",
    "text-pink-400",
    "text-emerald-500",
    "text-slate-500",
    "text-gray-500",
];

const ARCHETYPE_SLUGS: &[&str] = &[
    "fox", "retriever", "raccoon", "cat", "boar", "rabbit", "sloth", "rock", "unknown",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn every_archetype_has_a_banner_and_badge_colour() {
    for slug in ARCHETYPE_SLUGS {
        let selector = format!(".result-banner--{slug}");
        assert!(THEME_CSS.contains(&selector), "missing banner gradient {selector}");
    }
    for color in BADGE_COLORS {
        assert!(THEME_CSS.contains(&format!(".{color}")), "missing badge colour .{color}");
    }
}
