//! System
//!
//! The services a watch face needs from the host, behind traits so the face
//! runs the same on hardware and in tests.

use embedded_hal::digital::v2::InputPin;
use time::PrimitiveDateTime;

use crate::application::face_manager::Signal;

use self::input::Event;
use self::storage::Storage;

pub mod display;
pub mod input;
pub mod storage;

#[cfg(test)]
pub(crate) mod mock;

pub trait Clock {
    /// The current local wall clock time
    fn local_date_time(&self) -> PrimitiveDateTime;
}

/// The watch movement, the host framework scheduling faces and ticks
pub trait Movement {
    /// Ask the host to deliver `Tick` events at `hz` per second
    fn request_tick_frequency(&mut self, hz: u8);
    /// Turn on the backlight for the host's configured duration
    fn illuminate_led(&mut self);
    /// Handle an event the face has no use for, optionally asking to switch faces
    fn default_loop_handler(&mut self, event: Event) -> Option<Signal>;
}

/// Binds the concrete host implementations together
pub trait Host {
    type Clock: Clock;
    type Movement: Movement;
    type Storage: Storage;
    /// The alarm button, active high
    type Button: InputPin;
}

pub struct System<H: Host> {
    pub clock: H::Clock,
    pub movement: H::Movement,
    pub storage: H::Storage,
    pub alarm_button: H::Button,
}

impl<H: Host> System<H> {
    pub fn new(
        clock: H::Clock,
        movement: H::Movement,
        storage: H::Storage,
        alarm_button: H::Button,
    ) -> Self {
        Self {
            clock,
            movement,
            storage,
            alarm_button,
        }
    }

    pub fn now(&self) -> PrimitiveDateTime {
        self.clock.local_date_time()
    }

    /// Whether the alarm button is physically held down right now
    pub fn alarm_held(&self) -> bool {
        match self.alarm_button.is_high() {
            Ok(held) => held,
            Err(_) => {
                warn!("Failed to read the alarm button, treating it as released");
                false
            }
        }
    }
}
