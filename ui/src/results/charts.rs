use dioxus::prelude::*;

use crate::core::{chart::ChartAxis, format};

const VIEW_WIDTH: f64 = 320.0;
const VIEW_HEIGHT: f64 = 160.0;
/// Outer radius as a share of the half-extent of the shorter side.
const OUTER_RADIUS_RATIO: f64 = 0.7;
const GRID_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];
const LABEL_OFFSET: f64 = 12.0;

const SERIES_COLOR: &str = "#ec4899";
const GRID_COLOR: &str = "#e5e7eb";

/// Polar frame of the chart inside its SVG viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl RadarGeometry {
    pub fn for_viewport(width: f64, height: f64) -> Self {
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            radius: width.min(height) / 2.0 * OUTER_RADIUS_RATIO,
        }
    }

    /// Point at `fraction` of the outer radius on spoke `index` of `count`.
    /// Spoke 0 points straight up; the rest follow clockwise.
    pub fn point(&self, index: usize, count: usize, fraction: f64) -> (f64, f64) {
        let step = 360.0 / count.max(1) as f64;
        let angle = (90.0 - step * index as f64).to_radians();
        let r = self.radius * fraction;
        (self.cx + r * angle.cos(), self.cy - r * angle.sin())
    }
}

/// Vertices of the data polygon, one per axis, scaled against each axis' full mark.
pub fn radar_points(axes: &[ChartAxis], geometry: &RadarGeometry) -> Vec<(f64, f64)> {
    let count = axes.len();
    axes.iter()
        .enumerate()
        .map(|(index, axis)| {
            let fraction = if axis.full_mark > 0.0 {
                (axis.value / axis.full_mark).clamp(0.0, 1.0)
            } else {
                0.0
            };
            geometry.point(index, count, fraction)
        })
        .collect()
}

fn points_attr(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{},{}", format::format_coord(*x), format::format_coord(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn label_anchor(x: f64, cx: f64) -> &'static str {
    if (x - cx).abs() < 1.0 {
        "middle"
    } else if x > cx {
        "start"
    } else {
        "end"
    }
}

struct AxisLabel {
    x: String,
    y: String,
    anchor: &'static str,
    text: String,
    value: String,
}

#[component]
pub fn RadarChart(axes: Vec<ChartAxis>) -> Element {
    let geometry = RadarGeometry::for_viewport(VIEW_WIDTH, VIEW_HEIGHT);
    let count = axes.len();

    let rings: Vec<String> = GRID_LEVELS
        .iter()
        .map(|level| {
            let ring: Vec<_> = (0..count).map(|i| geometry.point(i, count, *level)).collect();
            points_attr(&ring)
        })
        .collect();

    let spokes: Vec<(String, String)> = (0..count)
        .map(|i| {
            let (x, y) = geometry.point(i, count, 1.0);
            (format::format_coord(x), format::format_coord(y))
        })
        .collect();

    let label_fraction = 1.0 + LABEL_OFFSET / geometry.radius;
    let labels: Vec<AxisLabel> = axes
        .iter()
        .enumerate()
        .map(|(i, axis)| {
            let (x, y) = geometry.point(i, count, label_fraction);
            AxisLabel {
                x: format::format_coord(x),
                y: format::format_coord(y),
                anchor: label_anchor(x, geometry.cx),
                text: axis.kind.label(),
                value: format::format_axis_value(axis.value),
            }
        })
        .collect();

    let polygon = points_attr(&radar_points(&axes, &geometry));
    let cx = format::format_coord(geometry.cx);
    let cy = format::format_coord(geometry.cy);
    let chart_label = crate::t!("result-chart-label");

    rsx! {
        figure { class: "radar-chart",
            svg {
                class: "radar-chart__svg",
                view_box: "0 0 {VIEW_WIDTH} {VIEW_HEIGHT}",
                role: "img",
                "aria-label": "{chart_label}",
                g { class: "radar-chart__grid",
                    for ring in rings {
                        polygon { points: "{ring}", fill: "none", stroke: GRID_COLOR }
                    }
                    for (x, y) in spokes {
                        line { x1: "{cx}", y1: "{cy}", x2: "{x}", y2: "{y}", stroke: GRID_COLOR }
                    }
                }
                polygon {
                    class: "radar-chart__series",
                    points: "{polygon}",
                    fill: SERIES_COLOR,
                    fill_opacity: "0.5",
                    stroke: SERIES_COLOR,
                }
                g { class: "radar-chart__labels",
                    for label in labels {
                        text {
                            class: "radar-chart__label",
                            x: "{label.x}",
                            y: "{label.y}",
                            text_anchor: label.anchor,
                            dominant_baseline: "middle",
                            "data-value": "{label.value}",
                            "{label.text}"
                        }
                    }
                }
            }
        }
    }
}
