//! Progress face
//!
//! A watch face showing how far the current time has travelled between a
//! user configured start and end date. The face is hardware independent, the
//! host supplies the clock, storage, buttons and segment display through the
//! traits in [`system`].

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod application;
pub mod system;

pub use application::face_manager::{FaceManager, Signal};
pub use application::progress::ProgressFace;
pub use application::{FaceIndex, WatchFace};
#[cfg(feature = "graphics")]
pub use application::seven_segment::SegmentCanvas;
