//! Framework-free core: score projection, result descriptors, share flow and
//! platform glue.

pub mod catalog;
pub mod chart;
pub mod format;
pub mod platform;
pub mod result_type;
pub mod score;
pub mod share;

pub use chart::{derive_axes, AxisKind, ChartAxis};
pub use result_type::{Gradient, ResultKind, ResultType};
pub use score::Score;
