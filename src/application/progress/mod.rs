//! Progress face
//!
//! Shows how much of the period between a start and an end date has passed,
//! as a percentage with four decimal places. Long press the alarm button to
//! set the dates.

pub mod datetime;
pub mod editor;
pub mod face;
pub mod math;
pub mod persistence;
pub mod quick_cycle;
pub mod range;
pub mod render;

pub use self::datetime::{DateTime, Field};
pub use self::editor::Editor;
pub use self::face::ProgressFace;
pub use self::range::{DateRange, Endpoint};
