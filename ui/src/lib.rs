//! Shared UI crate for the flirting ability test. Screens, result logic and
//! platform glue live here; the `web` and `desktop` crates only route and launch.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod results;
pub mod views;

pub mod components {
    mod app_header;
    pub use app_header::AppHeader;
}

/// Shared theme stylesheet (linked by the web shell).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
