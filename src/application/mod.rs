//! Application
//!
//! Watch faces and the manager switching between them.

pub mod face_manager;
pub mod prelude;
pub mod progress;
#[cfg(feature = "graphics")]
pub mod seven_segment;

use crate::system::display::SegmentDisplay;
use crate::system::input::Event;
use crate::system::{Host, System};

use self::face_manager::Signal;

/// Small per instance number handed out by the face manager in construction
/// order. Faces use it to keep their persisted records apart.
pub type FaceIndex = u8;

/// All faces must implement this trait to be driven by the face manager
pub trait WatchFace {
    /// Construct the face, restoring any persisted state
    fn setup(index: FaceIndex, system: &mut System<impl Host>) -> Self
    where
        Self: Sized;
    /// The face is about to receive events
    fn activate(&mut self, system: &mut System<impl Host>, display: &mut impl SegmentDisplay);
    /// Process one event to completion
    fn handle_event(
        &mut self,
        event: Event,
        system: &mut System<impl Host>,
        display: &mut impl SegmentDisplay,
    ) -> Option<Signal>;
    /// The face is being switched away from or torn down
    fn resign(&mut self, system: &mut System<impl Host>);
}
