//! Input
//!
//! Events the host delivers to the active face. Button events are already
//! debounced and classified (press, release, long press) by the host.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// The face just became the active face
    Activate,
    /// Periodic tick at the requested frequency
    Tick,
    /// Once a minute tick while the watch is in low energy mode
    LowEnergyUpdate,
    LightButtonDown,
    LightButtonUp,
    AlarmButtonUp,
    AlarmLongPress,
    AlarmLongUp,
    ModeButtonUp,
    ModeLongPress,
    /// No input for the host's inactivity period
    Timeout,
    /// Anything else the host may generate, passed back to the host untouched
    Other(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Tick count within the current second, drives blinking
    pub subsecond: u8,
}

impl Event {
    pub const fn new(kind: EventKind) -> Self {
        Self { kind, subsecond: 0 }
    }

    pub const fn with_subsecond(kind: EventKind, subsecond: u8) -> Self {
        Self { kind, subsecond }
    }
}

impl From<EventKind> for Event {
    fn from(kind: EventKind) -> Self {
        Event::new(kind)
    }
}
