//! Raw quiz traits handed over by the quiz flow.

use serde::{Deserialize, Serialize};

/// The two independent traits a finished quiz produces.
///
/// Values are nominally 0–100 but nothing here enforces that; consumers clamp
/// when they derive display values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Score {
    #[serde(rename = "L")]
    pub l: f64,
    #[serde(rename = "E")]
    pub e: f64,
}

impl Score {
    pub fn new(l: f64, e: f64) -> Self {
        Self { l, e }
    }
}
