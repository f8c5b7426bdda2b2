//! Face manager
//!
//! Owns a fixed set of faces, hands out their indices and routes host events
//! to whichever face is active.

use crate::application::{FaceIndex, WatchFace};
use crate::system::display::SegmentDisplay;
use crate::system::input::Event;
use crate::system::{Host, System};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Next face
    Next,
    /// Previous face
    Previous,
    /// Home - return to the index 0
    Home,
}

/// The face manager
pub struct FaceManager<F, const N: usize> {
    faces: [F; N],
    active: usize,
}

impl<F: WatchFace, const N: usize> FaceManager<F, N> {
    /// Set up `N` faces, numbering them in construction order
    pub fn new(system: &mut System<impl Host>) -> Self {
        assert!(N > 0 && N <= FaceIndex::MAX as usize + 1);
        let faces = core::array::from_fn(|idx| F::setup(idx as FaceIndex, &mut *system));
        Self { faces, active: 0 }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn face(&self, idx: usize) -> Option<&F> {
        self.faces.get(idx)
    }

    /// Activate the current face, used at boot or after waking
    pub fn activate(&mut self, system: &mut System<impl Host>, display: &mut impl SegmentDisplay) {
        self.faces[self.active].activate(system, display);
    }

    /// Services an event on the current face
    pub fn handle_event(
        &mut self,
        event: Event,
        system: &mut System<impl Host>,
        display: &mut impl SegmentDisplay,
    ) {
        if let Some(signal) = self.faces[self.active].handle_event(event, system, display) {
            self.handle_exit(signal, system, display);
        }
    }

    /// Resign the current face, flushing its state before power down
    pub fn resign(&mut self, system: &mut System<impl Host>) {
        self.faces[self.active].resign(system);
    }

    /// Handle the exit code of the running face
    fn handle_exit(
        &mut self,
        code: Signal,
        system: &mut System<impl Host>,
        display: &mut impl SegmentDisplay,
    ) {
        self.faces[self.active].resign(system);
        match code {
            Signal::Next => self.next(),
            Signal::Previous => self.prev(),
            Signal::Home => self.active = 0,
        }
        debug!("Switching to face {}", self.active);
        display.clear();
        self.faces[self.active].activate(system, display);
    }

    /// Move to the previous face in a wrapping fashion
    fn prev(&mut self) {
        self.active = if self.active == 0 { N - 1 } else { self.active - 1 };
    }

    /// Move to the next face in a wrapping fashion
    fn next(&mut self) {
        self.active = (self.active + 1) % N;
    }
}
