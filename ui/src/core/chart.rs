//! Radar-chart projection of a [`Score`].
//!
//! Five display axes, each a linear combination of the two traits clamped to
//! `[AXIS_FLOOR, AXIS_CEILING]`. The projection is pure: the same score always
//! yields the same axes.

use crate::core::score::Score;

pub const AXIS_FLOOR: f64 = 20.0;
pub const AXIS_CEILING: f64 = 100.0;
/// Radius scale of the chart; every axis shares it.
pub const FULL_MARK: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisKind {
    Directness,
    Tact,
    Manners,
    Empathy,
    Humor,
}

impl AxisKind {
    /// Chart order, clockwise from the top.
    pub const ALL: [AxisKind; 5] = [
        AxisKind::Directness,
        AxisKind::Tact,
        AxisKind::Manners,
        AxisKind::Empathy,
        AxisKind::Humor,
    ];

    pub fn label(self) -> String {
        match self {
            AxisKind::Directness => crate::t!("axis-directness"),
            AxisKind::Tact => crate::t!("axis-tact"),
            AxisKind::Manners => crate::t!("axis-manners"),
            AxisKind::Empathy => crate::t!("axis-empathy"),
            AxisKind::Humor => crate::t!("axis-humor"),
        }
    }

    fn project(self, score: &Score) -> f64 {
        let Score { l, e } = *score;
        match self {
            AxisKind::Directness => l * 1.2,
            AxisKind::Tact => e * 1.2,
            AxisKind::Manners => (l + e) / 1.5,
            AxisKind::Empathy => e * 1.5,
            AxisKind::Humor => l * 0.8 + e * 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartAxis {
    pub kind: AxisKind,
    pub value: f64,
    pub full_mark: f64,
}

/// Derive the five radar axes for `score`, in [`AxisKind::ALL`] order.
pub fn derive_axes(score: &Score) -> [ChartAxis; 5] {
    AxisKind::ALL.map(|kind| ChartAxis {
        kind,
        value: clamp_axis(kind.project(score)),
        full_mark: FULL_MARK,
    })
}

/// Clamp a raw projection into the displayable band. NaN sits on the floor.
pub fn clamp_axis(raw: f64) -> f64 {
    if raw.is_nan() {
        AXIS_FLOOR
    } else {
        raw.clamp(AXIS_FLOOR, AXIS_CEILING)
    }
}
