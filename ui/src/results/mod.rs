//! Building blocks of the result screen.

mod actions;
pub use actions::ResultActions;

mod advice;
pub use advice::PrescriptionPanel;

mod card;
pub use card::ResultCard;

mod charts;
pub use charts::{radar_points, RadarChart, RadarGeometry};
