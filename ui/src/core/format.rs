//! Formatting helpers for presenting derived values.

/// Axis value as shown in chart tooltips: one decimal, trailing `.0` dropped.
pub fn format_axis_value(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

/// CSS width for a bar filled to `percent` (clamped to 0–100).
pub fn format_bar_width(percent: f64) -> String {
    format!("width: {}%", percent.clamp(0.0, 100.0))
}

/// SVG coordinate with two decimals.
pub fn format_coord(value: f64) -> String {
    format!("{value:.2}")
}
